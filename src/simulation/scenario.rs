//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - the scheduling step and autostart flag
//! - a validated [`SimulationLoop`]
//! - the scene layout used by the rendering pipeline
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! tick and drawing systems.

use bevy::prelude::Resource;

use crate::configuration::config::ScenarioConfig;
use crate::rendering::scene::SceneLayout;
use crate::simulation::engine::SimulationLoop;
use crate::simulation::params::{OscillatorParameters, ParameterError};

/// Bevy resource representing a fully-initialized oscillator scenario
#[derive(Resource)]
pub struct Scenario {
    pub step: f64, // seconds per scheduled tick
    pub autostart: bool,
    pub sim: SimulationLoop,
    pub layout: SceneLayout,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ParameterError> {
        // Parameters: map the YAML-facing struct into the validated runtime one
        let p_cfg = cfg.parameters;
        let params = OscillatorParameters {
            mass: p_cfg.mass,
            stiffness: p_cfg.stiffness,
            damping_ratio: p_cfg.damping_ratio,
            ground_accel: p_cfg.ground_accel,
            excitation_hz: p_cfg.excitation_hz,
        };
        let sim = SimulationLoop::new(params)?;

        // Scene layout from DisplayConfig
        let d_cfg = cfg.display;
        let layout = SceneLayout {
            width: d_cfg.width,
            height: d_cfg.height,
            max_display_mm: d_cfg.max_display_mm,
            px_per_mm: d_cfg.px_per_mm,
            grid_divisions: d_cfg.grid_divisions.unwrap_or(10),
        };

        Ok(Self {
            step: cfg.engine.step,
            autostart: cfg.engine.autostart.unwrap_or(true),
            sim,
            layout,
        })
    }
}
