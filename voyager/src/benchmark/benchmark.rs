use std::time::Instant;

use crate::error::SimResult;
use crate::simulation::forces::InfluenceGraph;
use crate::simulation::params::{Parameters, PhysicalConstants, JULIAN_YEAR_SECONDS};
use crate::simulation::solar_system::SolarSystem;
use crate::simulation::states::{Body, BodyKind, NVec2};

/// Sun plus the three planets on circular orbits, all starting on the +x axis
fn make_system(constants: &PhysicalConstants, dt: f64) -> SimResult<SolarSystem> {
    let circular = |kind: BodyKind, r: f64| {
        let speed = (constants.g * constants.sun_mass / r).sqrt();
        Body::new(kind, constants.mass_of(kind), NVec2::new(r, 0.0), NVec2::new(0.0, speed))
    };
    let bodies = vec![
        Body::new(BodyKind::Sun, constants.sun_mass, NVec2::zeros(), NVec2::zeros()),
        circular(BodyKind::Earth, 1.496e11),
        circular(BodyKind::Jupiter, 7.785e11),
        circular(BodyKind::Saturn, 1.4335e12),
    ];
    let parameters = Parameters {
        dt,
        t_end: JULIAN_YEAR_SECONDS,
        g: constants.g,
    };
    let graph = InfluenceGraph::complete(bodies.len());
    let mut system = SolarSystem::new(bodies, graph, &parameters)?;
    system.initialize();
    Ok(system)
}

/// Time the Beeman step and measure the energy drift over one Earth year
/// for a range of time steps. Paste output directly into excel to graph
pub fn bench_beeman_curve() -> SimResult<()> {
    let constants = PhysicalConstants::default();

    println!("dt_s,steps,us_per_step,relative_energy_drift");

    // 10 minutes up to 4 days
    for dt in [600.0, 1_800.0, 3_600.0, 21_600.0, 86_400.0, 345_600.0] {
        let mut system = make_system(&constants, dt)?;
        let steps = (JULIAN_YEAR_SECONDS / dt).ceil() as u64;
        let e0 = system.total_energy();

        let t0 = Instant::now();
        for _ in 0..steps {
            system.update()?;
        }
        let us_per_step = t0.elapsed().as_secs_f64() * 1e6 / steps as f64;

        let drift = ((system.total_energy() - e0) / e0).abs();
        println!("{dt},{steps},{us_per_step:.3},{drift:.3e}");
    }
    Ok(())
}
