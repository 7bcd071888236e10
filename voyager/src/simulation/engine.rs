//! Simulation driver loop and termination rules
//!
//! `SimulationEngine` owns a `SolarSystem` and the ordered list of snapshots
//! recorded after every update. It never decides on its own when to stop:
//! the caller hands in a predicate that is checked after each tick.

use log::{debug, info};

use crate::error::SimResult;
use super::solar_system::SolarSystem;
use super::states::{BodyKind, SystemState};

/// Ticks between progress lines at debug level
const PROGRESS_EVERY: u64 = 1_000;

pub struct SimulationEngine {
    system: SolarSystem,
    results: Vec<SystemState>,
}

impl SimulationEngine {
    pub fn new(system: SolarSystem) -> Self {
        Self {
            system,
            results: Vec::new(),
        }
    }

    /// Seed the integrator history if the system has not been seeded yet
    pub fn initialize(&mut self) {
        if !self.system.is_initialized() {
            self.system.initialize();
        }
    }

    /// Update, record, check `finished`; repeat until it returns true.
    ///
    /// There is no step cap: a predicate that never holds never returns.
    pub fn simulate<F>(&mut self, mut finished: F) -> SimResult<()>
    where
        F: FnMut(&SolarSystem) -> bool,
    {
        info!(
            "simulating {} bodies with dt = {} s",
            self.system.bodies().len(),
            self.system.dt()
        );
        let mut ticks: u64 = 0;
        loop {
            self.system.update()?;
            self.results.push(self.system.output_state());
            ticks += 1;

            if ticks % PROGRESS_EVERY == 0 {
                debug!(
                    "tick {ticks}: t = {:.3e} s, E = {:.6e} J",
                    self.system.time(),
                    self.system.total_energy()
                );
            }
            if finished(&self.system) {
                break;
            }
        }
        info!("stopped after {ticks} ticks at t = {:.6e} s", self.system.time());
        Ok(())
    }

    pub fn system(&self) -> &SolarSystem {
        &self.system
    }

    pub fn system_mut(&mut self) -> &mut SolarSystem {
        &mut self.system
    }

    pub fn results(&self) -> &[SystemState] {
        &self.results
    }

    pub fn into_results(self) -> Vec<SystemState> {
        self.results
    }
}

/// True once the elapsed time reaches `seconds`
pub fn elapsed_at_least(seconds: f64) -> impl Fn(&SolarSystem) -> bool {
    move |system| system.time() >= seconds
}

/// True once the ship is at least as far from the Sun as `target` currently is.
/// False while either the ship, the Sun or the target is missing.
pub fn reached_orbit_of(target: BodyKind) -> impl Fn(&SolarSystem) -> bool {
    move |system| {
        let (Some(sun), Some(ship), Some(body)) = (
            system.index_of(BodyKind::Sun),
            system.index_of(BodyKind::Ship),
            system.index_of(target),
        ) else {
            return false;
        };
        let x = |i: usize| system.bodies()[i].x;
        x(ship).metric_distance(&x(sun)) >= x(body).metric_distance(&x(sun))
    }
}

/// Stop rule of a scenario. The duration always applies; the orbit rule can
/// only end a run earlier.
#[derive(Debug, Clone, PartialEq)]
pub struct Termination {
    pub t_end: f64,
    pub reach_orbit_of: Option<BodyKind>,
}

impl Termination {
    pub fn predicate(&self) -> impl Fn(&SolarSystem) -> bool {
        let by_time = elapsed_at_least(self.t_end);
        let by_orbit = self.reach_orbit_of.map(reached_orbit_of);
        move |system| by_time(system) || by_orbit.as_ref().is_some_and(|f| f(system))
    }
}
