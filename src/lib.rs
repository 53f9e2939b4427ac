pub mod formulas;
pub mod geometry;
pub mod simulation;
pub mod configuration;
pub mod rendering;
pub mod visualization;
pub mod benchmark;

pub use geometry::grid::GridSpec;
pub use geometry::isometric::{Box3, Face, IsoProjection, NVec2, NVec3};

pub use simulation::params::{OscillatorParameters, ParameterError};
pub use simulation::states::{DerivedProperties, ResponseLog, SimState};
pub use simulation::engine::SimulationLoop;
pub use simulation::scenario::Scenario;

pub use configuration::config::{DisplayConfig, EngineConfig, ParametersConfig, ScenarioConfig};

pub use rendering::primitives::{Frame, Primitive, Rgba, Stroke};
pub use rendering::scene::build_frame;

pub use visualization::viewer::run_viewer;

pub use benchmark::benchmark::{bench_formulas, bench_frame_build};
