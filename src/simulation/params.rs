//! User-editable physical parameters of the oscillator
//!
//! `OscillatorParameters` holds the five inputs of the base-excited SDOF
//! model. They are owned exclusively by the simulation loop and mutated
//! only through explicit edits, which pass through
//! [`OscillatorParameters::validate`] at the input boundary.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct OscillatorParameters {
    pub mass: f64, // lumped mass, kg (> 0)
    pub stiffness: f64, // lateral stiffness, N/m (> 0)
    pub damping_ratio: f64, // fraction of critical damping (0 <= zeta < 1)
    pub ground_accel: f64, // ground acceleration amplitude, m/s^2 (> 0)
    pub excitation_hz: f64, // excitation frequency, Hz (> 0)
}

impl Default for OscillatorParameters {
    fn default() -> Self {
        // 1000 kg / 50 kN/m / 5% damping: f_n about 1.125 Hz
        Self {
            mass: 1000.0,
            stiffness: 50_000.0,
            damping_ratio: 0.05,
            ground_accel: 1.0,
            excitation_hz: 1.5,
        }
    }
}

impl OscillatorParameters {
    /// Reject values the formula engine's preconditions do not cover
    ///
    /// Non-positive magnitudes would propagate non-finite derived state;
    /// they are refused here so the engine only ever sees valid inputs
    /// through the editing path.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !(self.mass > 0.0) {
            return Err(ParameterError::NonPositiveMass(self.mass));
        }
        if !(self.stiffness > 0.0) {
            return Err(ParameterError::NonPositiveStiffness(self.stiffness));
        }
        if !(0.0..1.0).contains(&self.damping_ratio) {
            return Err(ParameterError::DampingRatioOutOfRange(self.damping_ratio));
        }
        if !(self.ground_accel > 0.0) {
            return Err(ParameterError::NonPositiveGroundAccel(self.ground_accel));
        }
        if !(self.excitation_hz > 0.0) {
            return Err(ParameterError::NonPositiveExcitationFrequency(
                self.excitation_hz,
            ));
        }
        Ok(())
    }
}

/// Error returned when a parameter edit is rejected at the input boundary
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum ParameterError {
    #[error("mass must be positive (received {0} kg)")]
    NonPositiveMass(f64),
    #[error("stiffness must be positive (received {0} N/m)")]
    NonPositiveStiffness(f64),
    #[error("damping ratio must be in [0, 1) (received {0})")]
    DampingRatioOutOfRange(f64),
    #[error("ground acceleration amplitude must be positive (received {0} m/s^2)")]
    NonPositiveGroundAccel(f64),
    #[error("excitation frequency must be positive (received {0} Hz)")]
    NonPositiveExcitationFrequency(f64),
}
