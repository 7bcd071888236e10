//! The `SolarSystem` state container
//!
//! Owns the bodies, the influence graph, the previous-acceleration history
//! and the clock. All mutation goes through `initialize`, `update` and
//! `restart`; everything else is a read-only query.

use log::debug;

use crate::error::{SimError, SimResult};
use super::forces::{AccelSet, InfluenceGraph, NewtonianGravity};
use super::integrator::{beeman_step, seed_previous_accelerations};
use super::params::Parameters;
use super::states::{Body, BodyKind, NVec2, SystemState};

pub struct SolarSystem {
    bodies: Vec<Body>,
    initial: Vec<Body>, // restart target, accelerations included
    graph: InfluenceGraph,
    forces: AccelSet,
    seeded: Option<Vec<NVec2>>, // bootstrap a_-1, kept for restart
    previous: Option<Vec<NVec2>>, // a_n-1, one entry per body
    dt: f64,
    g: f64,
    t: f64,
}

impl SolarSystem {
    /// Build a system from bodies at t = 0. Each body's acceleration is
    /// recomputed from the initial positions, so whatever `a` was passed in is ignored.
    ///
    /// The history is not seeded yet; call [`SolarSystem::initialize`] before the first update.
    pub fn new(bodies: Vec<Body>, graph: InfluenceGraph, parameters: &Parameters) -> SimResult<Self> {
        if !(parameters.dt.is_finite() && parameters.dt > 0.0) {
            return Err(SimError::InvalidTimeStep(parameters.dt));
        }
        if graph.len() != bodies.len() {
            return Err(SimError::InfluenceSizeMismatch {
                graph: graph.len(),
                bodies: bodies.len(),
            });
        }
        for b in &bodies {
            if !(b.m.is_finite() && b.m > 0.0) {
                return Err(SimError::InvalidMass { kind: b.kind, mass: b.m });
            }
        }

        let forces = AccelSet::new().with(NewtonianGravity { g: parameters.g });

        let mut bodies = bodies;
        let x: Vec<NVec2> = bodies.iter().map(|b| b.x).collect();
        let m: Vec<f64> = bodies.iter().map(|b| b.m).collect();
        let mut a = vec![NVec2::zeros(); bodies.len()];
        forces.accumulate_accels(&x, &m, &graph, &mut a);
        for (b, acc) in bodies.iter_mut().zip(a) {
            b.a = acc;
        }

        Ok(Self {
            initial: bodies.clone(),
            bodies,
            graph,
            forces,
            seeded: None,
            previous: None,
            dt: parameters.dt,
            g: parameters.g,
            t: 0.0,
        })
    }

    /// Seed the previous-acceleration history from the current state
    pub fn initialize(&mut self) {
        let a_prev = seed_previous_accelerations(&self.bodies, &self.graph, &self.forces, self.dt);
        debug!("seeded previous accelerations for {} bodies", a_prev.len());
        self.seeded = Some(a_prev.clone());
        self.previous = Some(a_prev);
    }

    pub fn is_initialized(&self) -> bool {
        self.previous.is_some()
    }

    /// One Beeman step for every body, then advance the clock by `dt`
    pub fn update(&mut self) -> SimResult<()> {
        let previous = self.previous.as_mut().ok_or(SimError::HistoryNotSeeded)?;
        beeman_step(&mut self.bodies, previous, &self.graph, &self.forces, self.dt);
        self.t += self.dt;
        Ok(())
    }

    /// Back to the initial position/velocity/acceleration of every body and t = 0.
    /// The history goes back to its bootstrap values, it is not recomputed.
    pub fn restart(&mut self) {
        self.bodies.clone_from(&self.initial);
        self.previous.clone_from(&self.seeded);
        self.t = 0.0;
    }

    pub fn output_state(&self) -> SystemState {
        SystemState {
            t: self.t,
            bodies: self.bodies.iter().map(Body::output_state).collect(),
        }
    }

    /// Elapsed simulated time (s)
    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Accelerations one step behind the current state, `None` before `initialize`
    pub fn previous_accelerations(&self) -> Option<&[NVec2]> {
        self.previous.as_deref()
    }

    /// Slot of the first body of that kind
    pub fn index_of(&self, kind: BodyKind) -> Option<usize> {
        self.bodies.iter().position(|b| b.kind == kind)
    }

    pub fn body(&self, kind: BodyKind) -> SimResult<&Body> {
        self.index_of(kind)
            .map(|i| &self.bodies[i])
            .ok_or(SimError::UnknownBody(kind))
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Sum over every influencing pair, each pair counted once
    pub fn potential_energy(&self) -> f64 {
        self.graph
            .pairs()
            .into_iter()
            .map(|(i, j)| self.bodies[i].potential_energy(&self.bodies[j], self.g))
            .sum()
    }

    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }
}
