use std::time::Instant;

use crate::rendering::scene::{build_frame, SceneLayout};
use crate::simulation::engine::SimulationLoop;
use crate::simulation::params::OscillatorParameters;
use crate::simulation::states::DerivedProperties;

/// Time the closed-form formula path over growing parameter grids
pub fn bench_formulas() {
    // Grid sizes to sweep
    let ns = [1_000, 10_000, 100_000, 1_000_000];

    for n in ns {
        // deterministic parameter grid, no rand needed
        let grid: Vec<OscillatorParameters> = (0..n)
            .map(|i| {
                let i_f = i as f64;
                OscillatorParameters {
                    mass: 500.0 + (i_f * 0.37).sin().abs() * 2000.0 + 1.0,
                    stiffness: 20_000.0 + (i_f * 0.13).cos().abs() * 80_000.0,
                    damping_ratio: 0.02 + (i_f * 0.07).sin().abs() * 0.5,
                    ground_accel: 1.0,
                    excitation_hz: 0.5 + (i_f * 0.11).cos().abs() * 3.0,
                }
            })
            .collect();

        // Warm up
        let mut sink = 0.0;
        for p in grid.iter().take(100) {
            sink += DerivedProperties::from_params(p).amplification;
        }

        let t0 = Instant::now();
        for p in &grid {
            sink += DerivedProperties::from_params(p).amplification;
        }
        let dt = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:8}, derived-properties sweep = {dt:8.6} s (sink {sink:.3})"
        );
    }
}

/// Time full tick + frame builds at the nominal scheduler step
pub fn bench_frame_build() {
    let steps = [600, 6_000, 60_000];
    let layout = SceneLayout::default();

    for n in steps {
        let mut sim = SimulationLoop::new(OscillatorParameters::default())
            .expect("default parameters are valid");
        sim.start();

        // Warm up one frame
        let mut primitives = build_frame(&sim, &layout).len();

        let t0 = Instant::now();
        for _ in 0..n {
            sim.tick(0.02);
            primitives += build_frame(&sim, &layout).len();
        }
        let dt = t0.elapsed().as_secs_f64();

        println!(
            "ticks = {n:6}, tick+frame = {dt:8.6} s ({:8.1} fps equivalent, {primitives} primitives)",
            n as f64 / dt
        );
    }
}
