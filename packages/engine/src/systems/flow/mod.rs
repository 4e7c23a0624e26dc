//! Flow engine - the per-step decision chain
//!
//! One simulation step touches one randomly chosen cell and runs the
//! rules in order: age, then lateral diffusion, then gravity. A rule can
//! consume the step, in which case the rest of the chain is skipped.
//! Diffusion onto dissimilar paint delegates to the surface-tension
//! spill rule and consumes the step; diffusion between similar paints
//! does not consume it, so a cell can both spread laterally and flow
//! downhill in the same step.
//!
//! All paint ever moves through one primitive, `donate_paint`, which
//! conserves volume exactly and notifies the repaint queue.

mod age;
mod diffuse;
mod gravity;
mod tension;
mod transfer;

pub use age::age_paint;
pub use diffuse::diffuse_paint;
pub use gravity::effect_of_gravity;
pub use tension::surface_tension;
pub use transfer::{blend_percent, donate_paint, wrap_percent};

use crate::canvas::{Canvas, RepaintQueue};
use crate::domain::geometry::Point;
use crate::domain::tuning::FlowTuning;

/// Everything a flow rule touches, borrowed for the duration of one step.
pub struct FlowContext<'a> {
    pub canvas: &'a mut Canvas,
    pub repaint: &'a mut RepaintQueue,
    pub tuning: &'a FlowTuning,
    pub rng: &'a mut u32,
    /// Successful paint transfers this step, for perf accounting.
    pub transfers: u32,
}

/// Which rule consumed the step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The cell was empty or dry, or dried out this step.
    Aged,
    /// Lateral diffusion consumed the step (no surplus, edge contact,
    /// or a surface-tension spill on dissimilar paint).
    Diffused,
    /// The full chain ran through the gravity rule.
    Settled,
}

/// Run the decision chain for the cell at `p`.
pub fn update_cell(ctx: &mut FlowContext, p: Point) -> StepOutcome {
    if age_paint(ctx.canvas.cell_mut(p), ctx.rng) {
        return StepOutcome::Aged;
    }
    if diffuse_paint(ctx, p) {
        return StepOutcome::Diffused;
    }
    effect_of_gravity(ctx, p);
    StepOutcome::Settled
}
