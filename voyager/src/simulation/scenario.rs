//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) plus the physical constants and
//! produces a `Scenario` containing:
//! - the constants and run parameters (`PhysicalConstants`, `Parameters`)
//! - the stop rule (`Termination`)
//! - the system at t = 0 (`SolarSystem`, bodies in configuration order, ship last)
//! - the output paths for the external writers

use std::collections::HashSet;

use log::info;

use crate::configuration::config::{BodyConfig, OutputConfig, ProbeConfig, ScenarioConfig};
use crate::error::{SimError, SimResult};
use crate::simulation::engine::{SimulationEngine, Termination};
use crate::simulation::forces::InfluenceGraph;
use crate::simulation::params::{Parameters, PhysicalConstants};
use crate::simulation::solar_system::SolarSystem;
use crate::simulation::states::{Body, BodyKind, NVec2};

pub struct Scenario {
    pub constants: PhysicalConstants,
    pub parameters: Parameters,
    pub termination: Termination,
    pub system: SolarSystem,
    pub output: OutputConfig,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig, constants: PhysicalConstants) -> SimResult<Self> {
        let years = cfg.parameters.years;
        if !(years.is_finite() && years >= 0.0) {
            return Err(SimError::Config(format!("years must be finite and non-negative, got {years}")));
        }

        // Parameters (runtime) from ParametersConfig
        let parameters = Parameters {
            dt: cfg.parameters.dt,
            t_end: constants.saturnian_years_to_seconds(years),
            g: cfg.parameters.g.unwrap_or(constants.g),
        };

        // Bodies: map `BodyConfig` -> runtime `Body`, mass from the kind unless overridden
        let mut seen = HashSet::new();
        let mut bodies = Vec::with_capacity(cfg.bodies.len() + 1);
        for bc in &cfg.bodies {
            if !seen.insert(bc.kind) {
                return Err(SimError::DuplicateBody(bc.kind));
            }
            bodies.push(body_from_config(bc, &constants)?);
        }

        // The ship is derived from its launch body, never read from the body list
        if let Some(probe) = &cfg.probe {
            if seen.contains(&BodyKind::Ship) {
                return Err(SimError::DuplicateBody(BodyKind::Ship));
            }
            bodies.push(launch_ship(probe, &bodies, &constants)?);
        }

        if let Some(target) = cfg.stop.reach_orbit_of {
            check_stop_target(target, &seen, cfg.probe.is_some())?;
        }

        let graph = InfluenceGraph::complete(bodies.len());
        let system = SolarSystem::new(bodies, graph, &parameters)?;

        let termination = Termination {
            t_end: parameters.t_end,
            reach_orbit_of: cfg.stop.reach_orbit_of,
        };

        info!(
            "built scenario: {} bodies, dt = {} s, t_end = {:.6e} s",
            system.bodies().len(),
            parameters.dt,
            parameters.t_end
        );

        Ok(Self {
            constants,
            parameters,
            termination,
            system,
            output: cfg.output,
        })
    }

    /// Hand the system to a driver with its history already seeded
    pub fn into_engine(self) -> (SimulationEngine, Termination, OutputConfig) {
        let mut engine = SimulationEngine::new(self.system);
        engine.initialize();
        (engine, self.termination, self.output)
    }
}

fn body_from_config(bc: &BodyConfig, constants: &PhysicalConstants) -> SimResult<Body> {
    let x = vec2(bc.kind, "x", &bc.x)?;
    let v = vec2(bc.kind, "v", &bc.v)?;
    let m = bc.m.unwrap_or_else(|| constants.mass_of(bc.kind));
    Ok(Body::new(bc.kind, m, x, v))
}

fn vec2(kind: BodyKind, field: &'static str, c: &[f64]) -> SimResult<NVec2> {
    match c {
        [x, y] => Ok(NVec2::new(*x, *y)),
        _ => Err(SimError::InvalidVector { kind, field, len: c.len() }),
    }
}

fn launch_ship(probe: &ProbeConfig, bodies: &[Body], constants: &PhysicalConstants) -> SimResult<Body> {
    let sun = find(bodies, BodyKind::Sun)?;
    let planet = find(bodies, probe.launch_from)?;

    let (x, v) = probe_launch_state(
        sun.x,
        planet.x,
        planet.v,
        probe.radius.unwrap_or(constants.earth_radius),
        probe.altitude.unwrap_or(constants.ship_altitude),
        probe.launch_speed.unwrap_or(constants.ship_launch_speed),
    )?;
    Ok(Body::new(BodyKind::Ship, constants.ship_mass, x, v))
}

/// The orbit rule measures the ship against a planet that is in the run
fn check_stop_target(target: BodyKind, listed: &HashSet<BodyKind>, has_probe: bool) -> SimResult<()> {
    if matches!(target, BodyKind::Sun | BodyKind::Ship) {
        return Err(SimError::Config(format!(
            "stop.reach_orbit_of must name a planet, got {}",
            target.name()
        )));
    }
    if !listed.contains(&target) {
        return Err(SimError::Config(format!(
            "stop.reach_orbit_of names {}, which is not in the body list",
            target.name()
        )));
    }
    if !has_probe {
        return Err(SimError::Config("stop.reach_orbit_of needs a probe to launch".into()));
    }
    Ok(())
}

fn find(bodies: &[Body], kind: BodyKind) -> SimResult<&Body> {
    bodies
        .iter()
        .find(|b| b.kind == kind)
        .ok_or(SimError::UnknownBody(kind))
}

/// Ship initial condition from its launch planet:
/// - position: on the Sun -> planet ray, `radius + altitude` past the planet's centre
/// - velocity: along the planet's velocity, with speed `|v_planet| + launch_speed`
pub fn probe_launch_state(
    sun_x: NVec2,
    planet_x: NVec2,
    planet_v: NVec2,
    radius: f64,
    altitude: f64,
    launch_speed: f64,
) -> SimResult<(NVec2, NVec2)> {
    let r = planet_x - sun_x;
    let distance = r.norm();
    let speed = planet_v.norm();
    if distance == 0.0 {
        return Err(SimError::Config("launch body sits on the Sun".into()));
    }
    if speed == 0.0 {
        return Err(SimError::Config("launch body has no velocity to launch along".into()));
    }

    let x = sun_x + r * ((distance + altitude + radius) / distance);
    let v = planet_v * ((speed + launch_speed) / speed);
    Ok((x, v))
}
