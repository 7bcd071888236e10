//! Fixed-step Beeman integrator for the solar system
//!
//! Beeman is a predictor-corrector that carries one step of acceleration
//! history. A step over the whole body slice runs in four passes so that no
//! body ever sees a partially updated neighbour:
//! predict all positions -> accelerate all -> correct all velocities -> commit all

use super::forces::{AccelSet, InfluenceGraph};
use super::states::{Body, NVec2};

/// Predictor: x_n+1 = x_n + v_n dt + (2/3) a_n dt^2 - (1/6) a_n-1 dt^2
pub fn beeman_position(x: NVec2, v: NVec2, a: NVec2, a_prev: NVec2, dt: f64) -> NVec2 {
    let dt2 = dt * dt;
    x + v * dt + a * ((2.0 / 3.0) * dt2) - a_prev * ((1.0 / 6.0) * dt2)
}

/// Corrector: v_n+1 = v_n + (1/3) a_n+1 dt + (5/6) a_n dt - (1/6) a_n-1 dt
pub fn beeman_velocity(v: NVec2, a_next: NVec2, a: NVec2, a_prev: NVec2, dt: f64) -> NVec2 {
    v + a_next * ((1.0 / 3.0) * dt) + a * ((5.0 / 6.0) * dt) - a_prev * ((1.0 / 6.0) * dt)
}

/// Advance every body by one step of `dt`.
///
/// `previous[i]` must hold body `i`'s acceleration one step before its current
/// state; on return it holds the acceleration the body had before this call.
pub fn beeman_step(
    bodies: &mut [Body],
    previous: &mut [NVec2],
    graph: &InfluenceGraph,
    forces: &AccelSet,
    dt: f64,
) {
    let n = bodies.len();
    if n == 0 {
        return;
    }
    debug_assert_eq!(n, previous.len());

    // Predict: positions for all bodies from the pre-step state
    let x_next: Vec<NVec2> = bodies
        .iter()
        .zip(previous.iter())
        .map(|(b, a_prev)| beeman_position(b.x, b.v, b.a, *a_prev, dt))
        .collect();

    // Accelerate: a_n+1 at the predicted positions
    let masses: Vec<f64> = bodies.iter().map(|b| b.m).collect();
    let mut a_next = vec![NVec2::zeros(); n];
    forces.accumulate_accels(&x_next, &masses, graph, &mut a_next);

    // Correct: velocities from a_n+1, a_n and a_n-1
    let v_next: Vec<NVec2> = bodies
        .iter()
        .zip(previous.iter())
        .zip(a_next.iter())
        .map(|((b, a_prev), a_new)| beeman_velocity(b.v, *a_new, b.a, *a_prev, dt))
        .collect();

    // Commit: history first, then the new state
    for (i, b) in bodies.iter_mut().enumerate() {
        previous[i] = b.a;
        b.x = x_next[i];
        b.v = v_next[i];
        b.a = a_next[i];
    }
}

/// One backward step from the current state using the body's current
/// acceleration (force over mass). Returns `(x_-1, v_-1)`:
/// - v_-1 = v_0 - a_0 dt
/// - x_-1 = x_0 - v_-1 dt + a_0 dt^2 / 2
pub fn backstep(body: &Body, dt: f64) -> (NVec2, NVec2) {
    let v_prev = body.v - body.a * dt;
    let x_prev = body.x - v_prev * dt + body.a * (0.5 * dt * dt);
    (x_prev, v_prev)
}

/// Estimate a_-1 for every body so the first Beeman step has a history.
///
/// Each body is stepped back once, then accelerations are evaluated with every
/// body at its back-stepped position. This is an approximation: the first
/// step carries a small error that later steps do not undo.
pub fn seed_previous_accelerations(
    bodies: &[Body],
    graph: &InfluenceGraph,
    forces: &AccelSet,
    dt: f64,
) -> Vec<NVec2> {
    let x_prev: Vec<NVec2> = bodies.iter().map(|b| backstep(b, dt).0).collect();
    let masses: Vec<f64> = bodies.iter().map(|b| b.m).collect();

    let mut a_prev = vec![NVec2::zeros(); bodies.len()];
    forces.accumulate_accels(&x_prev, &masses, graph, &mut a_prev);
    a_prev
}
