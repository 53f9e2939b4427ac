//! Closed-form mechanics of a damped single-degree-of-freedom oscillator
//! under harmonic base excitation
//!
//! All functions are pure and operate on SI magnitudes:
//! - stiffness `k` in N/m, mass `m` in kg
//! - frequencies in Hz, angular frequencies in rad/s
//! - damping ratio `zeta` as a fraction of critical damping (0 = undamped)
//!
//! Degenerate inputs are propagated, never clamped: a non-positive mass
//! yields a non-finite natural frequency, and pure resonance (r = 1,
//! zeta = 0) yields `f64::INFINITY` from [`dynamic_amplification`] so
//! callers can detect it with `is_infinite()` instead of catching a panic.

use std::f64::consts::TAU;

/// Natural frequency f_n = sqrt(k/m) / (2 pi), in Hz
///
/// `stiffness` in N/m, `mass` in kg. Non-finite (NaN) for mass <= 0;
/// callers must reject non-positive mass at the input boundary.
#[inline]
pub fn natural_frequency(stiffness: f64, mass: f64) -> f64 {
    (stiffness / mass).sqrt() / TAU
}

/// Natural period T = 1 / f_n, in seconds
///
/// Non-finite at f_n = 0 (invalid mass or stiffness upstream); propagated,
/// not clamped.
#[inline]
pub fn period(natural_frequency_hz: f64) -> f64 {
    1.0 / natural_frequency_hz
}

/// Frequency ratio r = f_exc / f_n (unitless)
///
/// Exactly 0 iff `excitation_hz` is 0.
#[inline]
pub fn frequency_ratio(excitation_hz: f64, natural_hz: f64) -> f64 {
    excitation_hz / natural_hz
}

/// Dynamic amplification factor 1 / sqrt((1 - r^2)^2 + (2 zeta r)^2)
///
/// Precondition: r >= 0 (the value only depends on r^2 and (zeta r)^2, so
/// negative r evaluates symmetrically, but callers should not rely on it).
///
/// At r = 1, zeta = 0 the denominator is exactly zero: the result is
/// `f64::INFINITY`, the designated "true resonance" sentinel. Never panics.
#[inline]
pub fn dynamic_amplification(r: f64, zeta: f64) -> f64 {
    let one_minus_r2 = 1.0 - r * r;
    let damping_term = 2.0 * zeta * r;
    let denom = (one_minus_r2 * one_minus_r2 + damping_term * damping_term).sqrt();
    1.0 / denom
}

/// Phase lag phi = atan2(2 zeta r, 1 - r^2), in radians
///
/// The two-argument arctangent is required here: as r crosses 1 the term
/// (1 - r^2) changes sign and the lag must move through pi/2 into the
/// second quadrant, which atan(x) alone cannot represent.
#[inline]
pub fn phase_lag(r: f64, zeta: f64) -> f64 {
    (2.0 * zeta * r).atan2(1.0 - r * r)
}

/// Steady-state relative displacement at time `t`, in millimetres
///
/// The particular solution of the base-excited oscillator:
/// x(t) = D * (a_g / omega_n^2) * sin(omega_exc t - phi)
/// where D is the amplification factor, a_g the ground acceleration
/// amplitude in m/s^2, omega_n = 2 pi f_n, omega_exc = 2 pi f_exc and phi
/// the phase lag. The static term a_g / omega_n^2 is in metres; the result
/// is scaled to mm for display.
///
/// An infinite amplification (pure resonance) propagates into the result;
/// renderers clamp the display magnitude rather than fail.
#[inline]
pub fn steady_state_displacement_mm(
    amplification: f64,
    ground_accel: f64,
    natural_hz: f64,
    excitation_hz: f64,
    t: f64,
    phase: f64,
) -> f64 {
    let omega_n = TAU * natural_hz;
    let omega_exc = TAU * excitation_hz;
    let static_m = ground_accel / (omega_n * omega_n);
    amplification * static_m * (omega_exc * t - phase).sin() * 1000.0
}

/// Undamped angular frequency omega_n = 2 pi f_n, in rad/s
#[inline]
pub fn angular_frequency(natural_hz: f64) -> f64 {
    TAU * natural_hz
}

/// Critical damping coefficient c_cr = 2 sqrt(k m), in N s/m
#[inline]
pub fn critical_damping(stiffness: f64, mass: f64) -> f64 {
    2.0 * (stiffness * mass).sqrt()
}

/// Damped natural frequency f_d = f_n sqrt(1 - zeta^2), in Hz
///
/// Only meaningful for underdamped systems (zeta < 1); NaN beyond critical
/// damping, propagated to the caller.
#[inline]
pub fn damped_frequency(natural_hz: f64, zeta: f64) -> f64 {
    natural_hz * (1.0 - zeta * zeta).sqrt()
}
