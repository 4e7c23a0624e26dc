use crate::core::random::{int_random, percent};
use crate::domain::geometry::Point;

use super::{donate_paint, FlowContext};

/// Surface-tension spill, run when diffusion meets dissimilar paint.
///
/// Candidate spill directions are gravity, clockwise-of-gravity and
/// counter-clockwise-of-gravity. Each in-bounds candidate gets a local
/// tension score: how many of itself and its immediate window neighbors
/// also hold dissimilar paint. The lowest score is the path of least
/// resistance; ties break uniformly at random. The spill still has to
/// beat two viscosity draws before half the cell's excess moves.
pub fn surface_tension(ctx: &mut FlowContext, p: Point) {
    let source = *ctx.canvas.cell(p);
    let down = source.gravity.direction;
    let window = [down, down.clockwise(), down.counter_clockwise()];

    let mut candidate: [Option<Point>; 3] = [None; 3];
    let mut dissimilar = [false; 3];
    for (i, dir) in window.iter().enumerate() {
        if let Some(q) = ctx.canvas.neighbor(p, *dir) {
            candidate[i] = Some(q);
            dissimilar[i] = !source.contents.similar_to(&ctx.canvas.cell(q).contents);
        }
    }

    // Lowest local dissimilarity tally wins; collect ties.
    let mut best = i32::MAX;
    let mut tied = [0usize; 3];
    let mut tied_len = 0usize;
    for (i, cand) in candidate.iter().enumerate() {
        if cand.is_none() {
            continue;
        }
        let lo = i.saturating_sub(1);
        let hi = (i + 1).min(2);
        let score = (lo..=hi).filter(|&j| dissimilar[j]).count() as i32;
        if score < best {
            best = score;
            tied[0] = i;
            tied_len = 1;
        } else if score == best {
            tied[tied_len] = i;
            tied_len += 1;
        }
    }
    if tied_len == 0 {
        // Cornered: no in-bounds spill direction.
        return;
    }

    let pick = tied[int_random(ctx.rng, tied_len as i32) as usize];
    let Some(dest) = candidate[pick] else {
        return;
    };

    if percent(ctx.rng) > source.contents.liquid_content {
        // Too viscous to move at all.
        return;
    }
    let excess = source.surplus().max(0);
    if percent(ctx.rng) > excess * ctx.tuning.tension_excess_multiplier {
        return;
    }
    donate_paint(ctx, p, dest, excess / 2);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Canvas, RepaintQueue};
    use crate::domain::cell::Cell;
    use crate::domain::paint::{Color, Paint};
    use crate::domain::tuning::FlowTuning;

    fn cell_with(volume: i32, absorbency: i32, liquid_content: i32, miscibility: i32) -> Cell {
        let mut cell = Cell::unfilled();
        cell.volume = volume;
        cell.absorbency = absorbency;
        cell.contents = Paint {
            color: Color {
                hue: 100,
                saturation: 1.0,
                lightness: 0.5,
            },
            liquid_content,
            drying_rate: 0,
            miscibility,
        };
        cell
    }

    struct Fixture {
        canvas: Canvas,
        repaint: RepaintQueue,
        tuning: FlowTuning,
        rng: u32,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                canvas: Canvas::new(3, 3),
                repaint: RepaintQueue::new(500),
                tuning: FlowTuning::default(),
                rng: 2024,
            }
        }

        fn ctx(&mut self) -> FlowContext<'_> {
            FlowContext {
                canvas: &mut self.canvas,
                repaint: &mut self.repaint,
                tuning: &self.tuning,
                rng: &mut self.rng,
                transfers: 0,
            }
        }
    }

    #[test]
    fn spills_toward_the_least_dissimilar_direction() {
        let mut fx = Fixture::new();
        let center = Point::new(1, 1);
        // Source: wet, zero miscibility, excess 40 (so both viscosity
        // draws always pass: liquid 100 and 40 * 3 > 99).
        *fx.canvas.cell_mut(center) = cell_with(50, 10, 100, 0);

        // South (window slot 0) dissimilar, West (slot 1, clockwise of
        // South) similar, East (slot 2) similar. Scores: south 1,
        // west 1, east 0 - east is the unique path of least resistance.
        *fx.canvas.cell_mut(Point::new(1, 2)) = cell_with(30, 0, 50, 0);
        *fx.canvas.cell_mut(Point::new(0, 1)) = cell_with(30, 0, 100, 0);
        *fx.canvas.cell_mut(Point::new(2, 1)) = cell_with(30, 0, 100, 0);

        surface_tension(&mut fx.ctx(), center);

        assert_eq!(fx.canvas.cell(center).volume, 30);
        assert_eq!(fx.canvas.cell(Point::new(2, 1)).volume, 50);
        // The other candidates are untouched.
        assert_eq!(fx.canvas.cell(Point::new(1, 2)).volume, 30);
        assert_eq!(fx.canvas.cell(Point::new(0, 1)).volume, 30);
    }

    #[test]
    fn cornered_cell_has_no_spill_path() {
        // On a 1x1 canvas every candidate direction leaves the grid.
        let mut fx = Fixture::new();
        fx.canvas = Canvas::new(1, 1);
        let only = Point::new(0, 0);
        *fx.canvas.cell_mut(only) = cell_with(50, 10, 100, 0);

        for _ in 0..20 {
            surface_tension(&mut fx.ctx(), only);
        }
        assert_eq!(fx.canvas.cell(only).volume, 50);
        assert!(fx.repaint.is_empty());
    }

    #[test]
    fn no_excess_means_no_spill() {
        let mut fx = Fixture::new();
        let center = Point::new(1, 1);
        // volume == absorbency: excess 0, second draw passes only on 0.
        *fx.canvas.cell_mut(center) = cell_with(10, 10, 100, 0);
        *fx.canvas.cell_mut(Point::new(1, 2)) = cell_with(30, 0, 0, 0);

        surface_tension(&mut fx.ctx(), center);
        // Even when the draws pass, excess/2 == 0 moves nothing.
        assert_eq!(fx.canvas.cell(center).volume, 10);
        assert_eq!(fx.canvas.cell(Point::new(1, 2)).volume, 30);
    }
}
