//! Paint transfer - the one primitive every flow rule moves paint with.

use crate::domain::cell::Cell;
use crate::domain::geometry::Point;
use crate::domain::tuning::{FlowTuning, PercentBlend};

use super::FlowContext;

/// Reduce a blended integer percentage modulo 101, the historical
/// arithmetic: 101 maps to 0, not to 100. A wraparound rather than a
/// clamp, kept as an explicit, named rule.
#[inline]
pub fn wrap_percent(value: i32) -> i32 {
    value.rem_euclid(101)
}

/// Interpolate an integer percentage field of the destination toward the
/// source by `ratio`, then apply the configured wrap rule.
#[inline]
pub fn blend_percent(from: i32, to: i32, ratio: f32, mode: PercentBlend) -> i32 {
    let blended = from + (ratio * (to - from) as f32).round() as i32;
    match mode {
        PercentBlend::Wrap => wrap_percent(blended),
        PercentBlend::Saturate => blended.clamp(0, 100),
    }
}

#[inline]
fn lerp_round(from: i32, to: i32, ratio: f32) -> i32 {
    from + (ratio * (to - from) as f32).round() as i32
}

/// Move `amount` units of paint from the cell at `from` into the cell at
/// `to`, blending attributes into the destination, and queue the
/// destination for repaint.
///
/// Volume is conserved exactly. An unfilled (or emptied) destination
/// adopts the donated paint verbatim instead of blending: there is
/// nothing there to blend with, and for an emptied cell the blend ratio
/// would be a division by zero.
pub fn donate_paint(ctx: &mut FlowContext, from: Point, to: Point, amount: i32) {
    apply_donation(ctx.canvas.cell_pair_mut(from, to), amount, ctx.tuning);
    ctx.transfers += 1;
    ctx.repaint.request(to);
}

fn apply_donation((source, dest): (&mut Cell, &mut Cell), amount: i32, tuning: &FlowTuning) {
    source.volume -= amount;

    if dest.volume <= 0 {
        // Unfilled or emptied: the donation becomes the entire contents.
        dest.contents = source.contents;
        dest.volume = amount;
        return;
    }

    let ratio = amount as f32 / dest.volume as f32;
    let src = source.contents;
    let paint = &mut dest.contents;

    let mut hue = lerp_round(paint.color.hue, src.color.hue, ratio);
    if hue >= 360 {
        hue -= 360;
    }
    paint.color.hue = hue;
    paint.color.saturation += ratio * (src.color.saturation - paint.color.saturation);
    paint.color.lightness += ratio * (src.color.lightness - paint.color.lightness);

    let mode = tuning.percent_blend;
    paint.liquid_content = blend_percent(paint.liquid_content, src.liquid_content, ratio, mode);
    // One historical engine variant truncated the ratio to an integer
    // here, leaving the drying rate untouched for any ratio below 1.
    let drying_ratio = if tuning.truncate_drying_ratio {
        (ratio as i32) as f32
    } else {
        ratio
    };
    paint.drying_rate = blend_percent(paint.drying_rate, src.drying_rate, drying_ratio, mode);
    paint.miscibility = blend_percent(paint.miscibility, src.miscibility, ratio, mode);

    dest.volume += amount;
}
