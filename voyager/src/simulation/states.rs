//! Core state types for the solar system simulation.
//!
//! - `NVec2`       2D vector (nalgebra)
//! - `BodyKind`    which body a slot holds (Sun, planets, ship)
//! - `Body`        mutable point mass owned by the `SolarSystem`
//! - `BodyState`   immutable snapshot of one body
//! - `SystemState` snapshot of every body at one instant

use nalgebra::Vector2;
use serde::Deserialize;

use super::forces::{gravitational_force, gravitational_potential};

pub type NVec2 = Vector2<f64>;

/// Identity of a body. Mass and colour are looked up from the kind,
/// behaviour does not otherwise vary.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    Sun,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Ship,
}

impl BodyKind {
    /// RGB triple used when dumping frames for trajectory visualizers
    pub fn color(self) -> [u8; 3] {
        match self {
            BodyKind::Sun => [255, 255, 0], // yellow
            BodyKind::Earth => [0, 128, 0], // green
            BodyKind::Mars => [193, 68, 14], // rust red
            BodyKind::Jupiter => [210, 105, 30], // orange
            BodyKind::Saturn => [218, 165, 32], // brown
            BodyKind::Ship => [192, 192, 192], // gray
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BodyKind::Sun => "Sun",
            BodyKind::Earth => "Earth",
            BodyKind::Mars => "Mars",
            BodyKind::Jupiter => "Jupiter",
            BodyKind::Saturn => "Saturn",
            BodyKind::Ship => "Ship",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub kind: BodyKind,
    pub m: f64, // mass (kg)
    pub x: NVec2, // position (m)
    pub v: NVec2, // velocity (m/s)
    pub a: NVec2, // acceleration (m/s^2)
}

impl Body {
    /// Body with zero acceleration; the owning system fills `a` in from its influencers
    pub fn new(kind: BodyKind, m: f64, x: NVec2, v: NVec2) -> Self {
        Self {
            kind,
            m,
            x,
            v,
            a: NVec2::zeros(),
        }
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }

    /// Gravitational force `other` applies on `self`
    pub fn applied_force(&self, other: &Body, g: f64) -> NVec2 {
        gravitational_force(g, self.m, self.x, other.m, other.x)
    }

    /// Potential energy of the two-body system formed by `self` and `other`
    pub fn potential_energy(&self, other: &Body, g: f64) -> f64 {
        gravitational_potential(g, self.m, self.x, other.m, other.x)
    }

    pub fn output_state(&self) -> BodyState {
        BodyState {
            kind: self.kind,
            m: self.m,
            x: self.x,
            v: self.v,
            a: self.a,
        }
    }
}

/// Frozen copy of a `Body`. Never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub kind: BodyKind,
    pub m: f64,
    pub x: NVec2,
    pub v: NVec2,
    pub a: NVec2,
}

impl BodyState {
    pub fn speed(&self) -> f64 {
        self.v.norm()
    }

    pub fn distance_to(&self, other: &BodyState) -> f64 {
        self.x.metric_distance(&other.x)
    }
}

/// Snapshot of the whole system, bodies kept in slot order
#[derive(Debug, Clone, PartialEq)]
pub struct SystemState {
    pub t: f64, // elapsed time (s)
    pub bodies: Vec<BodyState>,
}

impl SystemState {
    pub fn body(&self, kind: BodyKind) -> Option<&BodyState> {
        self.bodies.iter().find(|b| b.kind == kind)
    }
}
