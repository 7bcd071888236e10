pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, BodyKind, BodyState, SystemState, NVec2};
pub use simulation::params::{Parameters, PhysicalConstants};
pub use simulation::forces::{Acceleration, AccelSet, InfluenceGraph, NewtonianGravity};
pub use simulation::integrator::{beeman_step, seed_previous_accelerations};
pub use simulation::solar_system::SolarSystem;
pub use simulation::engine::{SimulationEngine, Termination};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, ParametersConfig, BodyConfig, ProbeConfig, OutputConfig, StopConfig};

pub use error::{SimError, SimResult};

pub use benchmark::benchmark::bench_beeman_curve;
