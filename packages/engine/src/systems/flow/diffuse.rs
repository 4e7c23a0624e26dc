use crate::core::random::{int_random, percent};
use crate::domain::geometry::Point;

use super::{donate_paint, surface_tension, FlowContext};

/// Lateral diffusion: spread surplus paint toward one of the two
/// neighbors perpendicular to the cell's gravity. Returns true when the
/// step is consumed.
///
/// Similar paints equalize: a half-difference of volume moves over with
/// probability `liquid_content`%. Dissimilar contact instead hands the
/// step to the surface-tension rule. The similar path never consumes
/// the step, so gravity still acts afterwards.
pub fn diffuse_paint(ctx: &mut FlowContext, p: Point) -> bool {
    let source = *ctx.canvas.cell(p);
    if source.surplus() <= 0 {
        return true;
    }

    // One of the two directions perpendicular to gravity, 50/50.
    let dir = if int_random(ctx.rng, 2) == 0 {
        source.gravity.direction.clockwise()
    } else {
        source.gravity.direction.counter_clockwise()
    };
    let Some(q) = ctx.canvas.neighbor(p, dir) else {
        return true;
    };

    let neighbor = *ctx.canvas.cell(q);
    if !source.contents.similar_to(&neighbor.contents) {
        surface_tension(ctx, p);
        return true;
    }

    if neighbor.volume >= source.volume {
        return false;
    }
    if percent(ctx.rng) < source.contents.liquid_content {
        let amount = (source.volume - neighbor.volume) / 2;
        donate_paint(ctx, p, q, amount);
    }
    false
}
