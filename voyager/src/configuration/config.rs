//! Configuration types for loading voyager scenarios from YAML.
//!
//! A thin `serde`-deserializable view of a scenario:
//!
//! - [`ParametersConfig`] – time step, duration and (optionally) G
//! - [`StopConfig`]       – optional early stop when the ship reaches an orbit
//! - [`BodyConfig`]       – initial state of each body
//! - [`ProbeConfig`]      – how the ship is launched from a planet
//! - [`OutputConfig`]     – where the external writers put their files
//! - [`ScenarioConfig`]   – top-level wrapper
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   dt: 3600.0          # seconds
//!   years: 1.0          # Saturnian years
//!
//! stop:
//!   reach_orbit_of: saturn
//!
//! bodies:
//!   - kind: sun
//!     x: [ 0.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!   - kind: earth
//!     x: [ 1.443e11, -4.130e10 ]
//!     v: [ 7.66e3, 2.86e4 ]
//!
//! probe:
//!   launch_from: earth
//!   altitude: 1.5e6
//!   launch_speed: 14000.0
//!
//! output:
//!   ovito: output/voyager.xyz
//!   distances: output/distances.m
//! ```
//!
//! Masses come from the body kind unless `m` is given. Missing probe fields
//! fall back to the physical constants.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SimResult;
use crate::simulation::states::BodyKind;

/// Global numerical parameters
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64, // time step (s)
    pub years: f64, // run duration in Saturnian years
    #[serde(rename = "G", default)]
    pub g: Option<f64>, // gravitational constant override
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct StopConfig {
    pub reach_orbit_of: Option<BodyKind>, // stop early once the ship is this far from the Sun
}

/// Initial state of a single body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub kind: BodyKind,
    pub x: Vec<f64>, // position (m)
    pub v: Vec<f64>, // velocity (m/s)
    pub m: Option<f64>, // mass override (kg)
}

/// Launch of the ship from a planet. Position and velocity are derived, never configured
#[derive(Deserialize, Debug, Clone)]
pub struct ProbeConfig {
    pub launch_from: BodyKind,
    pub altitude: Option<f64>, // m above the surface
    pub radius: Option<f64>, // launch body radius (m)
    pub launch_speed: Option<f64>, // m/s on top of the launch body's speed
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct OutputConfig {
    pub ovito: Option<PathBuf>,
    pub distances: Option<PathBuf>,
    pub speed: Option<PathBuf>,
    pub trajectory: Option<PathBuf>,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub stop: StopConfig,
    pub bodies: Vec<BodyConfig>,
    pub probe: Option<ProbeConfig>,
    #[serde(default)]
    pub output: OutputConfig,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> SimResult<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> SimResult<Self> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}
