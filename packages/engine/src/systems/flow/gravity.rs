use crate::core::random::int_random;
use crate::domain::geometry::Point;

use super::{donate_paint, FlowContext};

/// Gravity-driven flow toward the cell's downhill neighbor.
///
/// A cell on the grid edge in its gravity direction is at the bottom
/// and never flows. Flow also waits until the downhill neighbor has
/// built up at least `volume + gravity.strength` of its own; then a
/// random viscosity barrier in `[0, viscosity_barrier)` must be beaten
/// by the paint's wetness before half the surplus moves down.
pub fn effect_of_gravity(ctx: &mut FlowContext, p: Point) {
    let source = *ctx.canvas.cell(p);
    let Some(q) = ctx.canvas.neighbor(p, source.gravity.direction) else {
        // At the bottom.
        return;
    };

    let neighbor = *ctx.canvas.cell(q);
    if neighbor.volume < source.volume + source.gravity.strength {
        // Blocked.
        return;
    }

    let barrier = int_random(ctx.rng, ctx.tuning.viscosity_barrier);
    if source.contents.liquid_content > barrier {
        let amount = (source.volume - source.absorbency) / 2;
        donate_paint(ctx, p, q, amount);
    }
}
