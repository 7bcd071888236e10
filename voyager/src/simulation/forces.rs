//! Force / acceleration model for the solar system engine
//!
//! - pure Newtonian force law between two point masses (no softening)
//! - `InfluenceGraph`: which slots act on which
//! - `Acceleration` terms collected in an `AccelSet` and summed per body

use crate::error::{SimError, SimResult};
use crate::simulation::states::NVec2;

/// Acceleration felt at `affected` due to a mass `influencer_mass` sitting at `influencer`:
/// `-G * m_j * (x_i - x_j) / |x_i - x_j|^3`
///
/// Coincident positions divide by zero; scenarios must keep bodies apart.
pub fn gravitational_acceleration(g: f64, affected: NVec2, influencer_mass: f64, influencer: NVec2) -> NVec2 {
    let r = affected - influencer;
    let d = r.norm();
    r * (-g * influencer_mass / (d * d * d))
}

/// Force the influencer applies on the affected body (acceleration times the affected mass)
pub fn gravitational_force(
    g: f64,
    affected_mass: f64,
    affected: NVec2,
    influencer_mass: f64,
    influencer: NVec2,
) -> NVec2 {
    gravitational_acceleration(g, affected, influencer_mass, influencer) * affected_mass
}

/// Potential energy of a two-body pair
pub fn gravitational_potential(g: f64, m1: f64, x1: NVec2, m2: f64, x2: NVec2) -> f64 {
    -g * m1 * m2 / x1.metric_distance(&x2)
}

/// Adjacency table indexed by body slot: `influencers(i)` lists the slots whose
/// gravity is summed into body `i`, always visited in the stored order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfluenceGraph {
    influencers: Vec<Vec<usize>>,
}

impl InfluenceGraph {
    /// Every body is influenced by every other body, in ascending slot order
    pub fn complete(n: usize) -> Self {
        let influencers = (0..n)
            .map(|i| (0..n).filter(|&j| j != i).collect())
            .collect();
        Self { influencers }
    }

    /// Explicit lists. Rejects self influence, out of range slots and repeats
    pub fn new(influencers: Vec<Vec<usize>>) -> SimResult<Self> {
        let len = influencers.len();
        for (body, list) in influencers.iter().enumerate() {
            for (k, &influencer) in list.iter().enumerate() {
                if influencer >= len || influencer == body || list[..k].contains(&influencer) {
                    return Err(SimError::InvalidInfluencer { body, influencer, len });
                }
            }
        }
        Ok(Self { influencers })
    }

    pub fn len(&self) -> usize {
        self.influencers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.influencers.is_empty()
    }

    pub fn influencers(&self, i: usize) -> &[usize] {
        &self.influencers[i]
    }

    /// Unordered pairs `(i, j)`, `i < j`, where at least one side acts on the other
    pub fn pairs(&self) -> Vec<(usize, usize)> {
        let n = self.len();
        let mut out = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if self.influencers[i].contains(&j) || self.influencers[j].contains(&i) {
                    out.push((i, j));
                }
            }
        }
        out
    }
}

/// Collection of acceleration terms. Each term implements [`Acceleration`]
/// and their contributions are summed into one vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for bodies at positions `x` with masses `m`
    /// - `out[i]` is overwritten with the sum of contributions from all terms
    pub fn accumulate_accels(&self, x: &[NVec2], m: &[f64], graph: &InfluenceGraph, out: &mut [NVec2]) {
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(x, m, graph, out);
        }
    }
}

/// Acceleration source. Implementations add their contribution into `out[i]`
/// for each body, reading only the positions and masses handed in.
pub trait Acceleration {
    fn acceleration(&self, x: &[NVec2], m: &[f64], graph: &InfluenceGraph, out: &mut [NVec2]);
}

/// Direct Newtonian gravity over the influence graph
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, x: &[NVec2], m: &[f64], graph: &InfluenceGraph, out: &mut [NVec2]) {
        for (i, acc) in out.iter_mut().enumerate() {
            for &j in graph.influencers(i) {
                *acc += gravitational_acceleration(self.g, x[i], m[j], x[j]);
            }
        }
    }
}
