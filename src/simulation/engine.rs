//! Frame-driven simulation loop for the base-excited oscillator
//!
//! `SimulationLoop` owns the parameters, the derived-property cache, the
//! per-tick state and the bounded response log. It is a three-state
//! machine (Stopped, Running, and parameter edits folded into either) and
//! is advanced by an external frame scheduler calling [`SimulationLoop::tick`]
//! once per scheduled pass. Each invocation produces exactly one state
//! update; ticks are strictly sequential and never coalesced.

use crate::formulas::oscillator;
use crate::simulation::params::{OscillatorParameters, ParameterError};
use crate::simulation::states::{DerivedProperties, ResponseLog, SimState};

/// Default capacity of the in-memory response history
const LOG_CAPACITY: usize = 2048;

#[derive(Debug, Clone)]
pub struct SimulationLoop {
    params: OscillatorParameters,
    derived: DerivedProperties,
    state: SimState,
    log: ResponseLog,
}

impl SimulationLoop {
    /// Build a stopped loop from validated parameters
    pub fn new(params: OscillatorParameters) -> Result<Self, ParameterError> {
        params.validate()?;
        let derived = DerivedProperties::from_params(&params);
        Ok(Self {
            params,
            derived,
            state: SimState::new(),
            log: ResponseLog::new(LOG_CAPACITY),
        })
    }

    pub fn params(&self) -> &OscillatorParameters {
        &self.params
    }

    pub fn derived(&self) -> &DerivedProperties {
        &self.derived
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn log(&self) -> &ResponseLog {
        &self.log
    }

    /// Stopped -> Running; elapsed time always restarts at zero
    ///
    /// There is no pause/resume distinction: starting is a fresh run.
    pub fn start(&mut self) {
        self.state.t = 0.0;
        self.state.displacement_mm = 0.0;
        self.state.running = true;
        self.log.clear();
    }

    /// Running -> Stopped; freezes current time and displacement
    ///
    /// A tick queued before this call that fires afterwards is a no-op
    /// (guard at the top of [`SimulationLoop::tick`]).
    pub fn stop(&mut self) {
        self.state.running = false;
    }

    /// Any state -> Stopped with time and displacement zeroed; idempotent
    pub fn reset(&mut self) {
        self.state = SimState::new();
        self.log.clear();
    }

    /// Replace the parameters after boundary validation; last write wins
    ///
    /// Takes effect on the next tick without any discontinuity in elapsed
    /// time. Derived properties are refreshed immediately so readouts stay
    /// consistent with the stored parameters even while stopped.
    pub fn set_parameters(&mut self, params: OscillatorParameters) -> Result<(), ParameterError> {
        params.validate()?;
        self.derived = DerivedProperties::from_params(&params);
        self.params = params;
        Ok(())
    }

    /// Replace the parameters without boundary validation
    ///
    /// For callers that validated upstream. Invalid values do not crash the
    /// loop: the tick handler holds the last finite displacement until the
    /// parameters are corrected.
    pub fn set_parameters_unchecked(&mut self, params: OscillatorParameters) {
        self.derived = DerivedProperties::from_params(&params);
        self.params = params;
    }

    /// Advance one scheduled step of `dt` seconds
    ///
    /// No-op unless running. Recomputes the derived properties from the
    /// current parameters (they may have been edited since the last tick),
    /// then evaluates the closed-form steady-state displacement at the new
    /// elapsed time. If the derived state is non-finite (an invalid
    /// parameter slipped past the boundary) the displacement holds its last
    /// finite value; time keeps advancing so correcting the parameters
    /// resumes the motion seamlessly.
    pub fn tick(&mut self, dt: f64) {
        if !self.state.running {
            return;
        }

        self.state.t += dt;
        self.derived = DerivedProperties::from_params(&self.params);
        if !self.derived.is_finite() {
            // hold last finite displacement; reported, not fatal
            return;
        }

        let x = oscillator::steady_state_displacement_mm(
            self.derived.amplification,
            self.params.ground_accel,
            self.derived.natural_hz,
            self.params.excitation_hz,
            self.state.t,
            self.derived.phase_lag,
        );
        // NaN can only arise from inf * 0 at exact resonance zero-crossings;
        // keep the previous sample in that case. Infinity itself is stored:
        // the renderer clamps display magnitude, the state stays honest.
        if !x.is_nan() {
            self.state.displacement_mm = x;
        }
        self.log.push(self.state.t, self.state.displacement_mm);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_loop() -> SimulationLoop {
        let mut sim = SimulationLoop::new(OscillatorParameters::default()).unwrap();
        sim.start();
        sim
    }

    #[test]
    fn tick_is_noop_while_stopped() {
        let mut sim = SimulationLoop::new(OscillatorParameters::default()).unwrap();
        sim.tick(0.02);
        assert_eq!(sim.state().t, 0.0);
        assert!(sim.log().is_empty());
    }

    #[test]
    fn queued_tick_after_stop_does_not_mutate() {
        let mut sim = running_loop();
        for _ in 0..5 {
            sim.tick(0.02);
        }
        let frozen = *sim.state();
        sim.stop();
        sim.tick(0.02); // fires after the transition; must be a no-op
        assert_eq!(sim.state().t, frozen.t);
        assert_eq!(sim.state().displacement_mm, frozen.displacement_mm);
    }

    #[test]
    fn elapsed_time_strictly_increases() {
        let mut sim = running_loop();
        let mut prev = 0.0;
        for _ in 0..100 {
            sim.tick(0.02);
            assert!(sim.state().t > prev);
            prev = sim.state().t;
        }
    }

    #[test]
    fn reset_is_idempotent() {
        let mut sim = running_loop();
        for _ in 0..10 {
            sim.tick(0.02);
        }
        sim.reset();
        let first = *sim.state();
        sim.reset();
        let second = *sim.state();
        assert_eq!(first.t, 0.0);
        assert_eq!(first.displacement_mm, 0.0);
        assert!(!first.running);
        assert_eq!(second.t, first.t);
        assert_eq!(second.displacement_mm, first.displacement_mm);
    }

    #[test]
    fn invalid_mass_is_rejected_at_the_boundary() {
        let mut sim = running_loop();
        let err = sim.set_parameters(OscillatorParameters {
            mass: 0.0,
            ..OscillatorParameters::default()
        });
        assert_eq!(err, Err(ParameterError::NonPositiveMass(0.0)));
    }

    #[test]
    fn non_finite_derived_state_freezes_displacement() {
        let mut sim = running_loop();
        for _ in 0..10 {
            sim.tick(0.02);
        }
        let held = sim.state().displacement_mm;

        sim.set_parameters_unchecked(OscillatorParameters {
            mass: -1.0,
            ..OscillatorParameters::default()
        });
        for _ in 0..10 {
            sim.tick(0.02);
        }
        // time keeps advancing, displacement holds the last finite value
        assert!(sim.state().t > 0.2);
        assert_eq!(sim.state().displacement_mm, held);
        assert!(sim.state().displacement_mm.is_finite());

        // correcting the parameters resumes motion
        sim.set_parameters(OscillatorParameters::default()).unwrap();
        sim.tick(0.02);
        assert!(sim.state().displacement_mm.is_finite());
    }

    #[test]
    fn pure_resonance_does_not_crash_the_loop() {
        let mut sim = SimulationLoop::new(OscillatorParameters::default()).unwrap();
        // tune excitation to the natural frequency, remove damping
        let f_n = sim.derived().natural_hz;
        sim.set_parameters(OscillatorParameters {
            damping_ratio: 0.0,
            excitation_hz: f_n,
            ..OscillatorParameters::default()
        })
        .unwrap();
        assert!(sim.derived().amplification.is_infinite());

        sim.start();
        for _ in 0..50 {
            sim.tick(0.02);
        }
        // saturated, never NaN
        assert!(!sim.state().displacement_mm.is_nan());
    }

    #[test]
    fn parameter_edit_keeps_elapsed_time_continuous() {
        let mut sim = running_loop();
        for _ in 0..10 {
            sim.tick(0.02);
        }
        let t_before = sim.state().t;
        sim.set_parameters(OscillatorParameters {
            stiffness: 80_000.0,
            ..OscillatorParameters::default()
        })
        .unwrap();
        sim.tick(0.02);
        assert!((sim.state().t - (t_before + 0.02)).abs() < 1e-12);
    }
}
