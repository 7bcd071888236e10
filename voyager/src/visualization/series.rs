//! Scalar time series of the ship, written as `name = [a, b, c];` lines.
//! States without a ship are skipped.

use std::io::{self, Write};

use crate::simulation::states::{BodyKind, BodyState, SystemState};

fn write_array<W, I>(w: &mut W, name: &str, values: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = f64>,
{
    write!(w, "{name} = [")?;
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            write!(w, ", ")?;
        }
        write!(w, "{value}")?;
    }
    writeln!(w, "];")
}

fn ships(states: &[SystemState]) -> impl Iterator<Item = &BodyState> {
    states.iter().filter_map(|s| s.body(BodyKind::Ship))
}

/// Distance from the ship to every other body, one array per body
/// (`distanceToSun`, `distanceToEarth`, ...), followed by `dt` and `totalTime`.
pub fn write_distances<W: Write>(w: &mut W, states: &[SystemState], dt: f64, total_time: f64) -> io::Result<()> {
    let others: Vec<BodyKind> = states
        .first()
        .map(|s| {
            s.bodies
                .iter()
                .map(|b| b.kind)
                .filter(|&k| k != BodyKind::Ship)
                .collect()
        })
        .unwrap_or_default();

    for kind in others {
        let distances = states.iter().filter_map(|s| {
            let ship = s.body(BodyKind::Ship)?;
            Some(ship.distance_to(s.body(kind)?))
        });
        write_array(w, &format!("distanceTo{}", kind.name()), distances)?;
    }
    writeln!(w, "dt = {dt};")?;
    writeln!(w, "totalTime = {total_time};")
}

/// Ship speed (velocity norm) over time
pub fn write_speed<W: Write>(w: &mut W, states: &[SystemState]) -> io::Result<()> {
    write_array(w, "shipSpeed", ships(states).map(BodyState::speed))
}

/// Ship position over time as separate `x` and `y` arrays
pub fn write_trajectory<W: Write>(w: &mut W, states: &[SystemState]) -> io::Result<()> {
    write_array(w, "x", ships(states).map(|b| b.x.x))?;
    write_array(w, "y", ships(states).map(|b| b.x.y))
}
