use std::io::{self, Write};

use crate::simulation::states::{BodyState, SystemState};

/// One frame: body count, frame index, then `x y vx vy r g b` per body.
/// Every body writes its own state and its own colour.
pub fn write_frame<W: Write>(w: &mut W, state: &SystemState, frame: usize) -> io::Result<()> {
    writeln!(w, "{}", state.bodies.len())?;
    writeln!(w, "{frame}")?;
    for body in &state.bodies {
        write_body(w, body)?;
    }
    Ok(())
}

pub fn write_ovito<W: Write>(w: &mut W, states: &[SystemState]) -> io::Result<()> {
    for (frame, state) in states.iter().enumerate() {
        write_frame(w, state, frame)?;
    }
    Ok(())
}

fn write_body<W: Write>(w: &mut W, body: &BodyState) -> io::Result<()> {
    let [r, g, b] = body.kind.color();
    writeln!(w, "{} {} {} {} {r} {g} {b}", body.x.x, body.x.y, body.v.x, body.v.y)
}
