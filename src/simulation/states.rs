//! Core state types for the oscillator simulation
//!
//! Defines the derived-property cache, the per-tick simulation state, and
//! the bounded in-memory response log. All are plain value types owned by
//! the simulation loop; the rendering pipeline only reads them.

use std::collections::VecDeque;

use crate::formulas::oscillator;
use crate::simulation::params::OscillatorParameters;

/// Quantities derived deterministically from [`OscillatorParameters`]
///
/// Recomputed from the parameters on every change (cheap, closed-form);
/// a cache, never a source of truth. `amplification` is `f64::INFINITY`
/// at pure resonance (frequency ratio 1, zero damping).
#[derive(Debug, Clone, Copy)]
pub struct DerivedProperties {
    pub natural_hz: f64, // natural frequency, Hz
    pub period: f64, // natural period, s
    pub frequency_ratio: f64, // excitation / natural frequency
    pub amplification: f64, // dynamic amplification factor
    pub phase_lag: f64, // steady-state phase lag, rad
}

impl DerivedProperties {
    pub fn from_params(p: &OscillatorParameters) -> Self {
        let natural_hz = oscillator::natural_frequency(p.stiffness, p.mass);
        let r = oscillator::frequency_ratio(p.excitation_hz, natural_hz);
        Self {
            natural_hz,
            period: oscillator::period(natural_hz),
            frequency_ratio: r,
            amplification: oscillator::dynamic_amplification(r, p.damping_ratio),
            phase_lag: oscillator::phase_lag(r, p.damping_ratio),
        }
    }

    /// True when the parameters produced a usable natural frequency
    pub fn is_finite(&self) -> bool {
        self.natural_hz.is_finite()
    }
}

/// Mutable per-tick simulation state
#[derive(Debug, Clone, Copy)]
pub struct SimState {
    pub t: f64, // elapsed time, s; monotone while running
    pub displacement_mm: f64, // instantaneous relative displacement, mm
    pub running: bool,
}

impl SimState {
    pub fn new() -> Self {
        Self {
            t: 0.0,
            displacement_mm: 0.0,
            running: false,
        }
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new()
    }
}

/// Bounded ring buffer of (t, displacement) samples
///
/// The only history the simulation keeps; oldest samples are dropped once
/// capacity is reached.
#[derive(Debug, Clone)]
pub struct ResponseLog {
    samples: VecDeque<(f64, f64)>,
    capacity: usize,
}

impl ResponseLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, t: f64, displacement_mm: f64) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back((t, displacement_mm));
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(f64, f64)> {
        self.samples.iter()
    }
}
