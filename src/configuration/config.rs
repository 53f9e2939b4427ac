//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of an
//! oscillator scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – scheduling options (step size, autostart)
//! - [`ParametersConfig`] – physical oscillator parameters
//! - [`DisplayConfig`]    – drawing-area layout and display clamping
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   step: 0.02            # seconds advanced per scheduled tick
//!   autostart: true       # begin running as soon as the viewer opens
//!
//! parameters:
//!   mass: 1000.0          # lumped mass, kg
//!   stiffness: 50000.0    # lateral stiffness, N/m
//!   damping_ratio: 0.05   # fraction of critical damping
//!   ground_accel: 1.0     # ground acceleration amplitude, m/s^2
//!   excitation_hz: 1.5    # excitation frequency, Hz
//!
//! display:
//!   width: 640.0          # drawing area width, px
//!   height: 480.0         # drawing area height, px
//!   max_display_mm: 250.0 # displacement magnitude clamp for rendering
//!   px_per_mm: 1.0        # horizontal scale of the displacement overlay
//!   grid_divisions: 10    # target division count for the background grid
//! ```
//!
//! The engine then maps this configuration into its runtime scenario
//! representation (`Scenario`), which uses validated parameter structs.

use serde::Deserialize;

/// Scheduling options for the frame-driven loop
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub step: f64, // seconds advanced per scheduled tick (nominally 0.02)
    pub autostart: Option<bool>, // start running when the viewer opens
}

/// Physical oscillator parameters as written in the YAML file
///
/// Validated when mapped into the runtime `OscillatorParameters`.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub mass: f64, // kg
    pub stiffness: f64, // N/m
    pub damping_ratio: f64, // fraction of critical damping
    pub ground_accel: f64, // m/s^2
    pub excitation_hz: f64, // Hz
}

/// Drawing-area layout and display clamping
#[derive(Deserialize, Debug, Clone)]
pub struct DisplayConfig {
    pub width: f64, // drawing area width, px
    pub height: f64, // drawing area height, px
    pub max_display_mm: f64, // rendered displacement magnitude clamp
    pub px_per_mm: f64, // horizontal scale of the displacement overlay
    pub grid_divisions: Option<usize>, // target background grid divisions
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub display: DisplayConfig,
}
