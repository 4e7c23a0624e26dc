use crate::core::random::int_random;
use crate::domain::geometry::Point;
use crate::systems::flow::{self, FlowContext, StepOutcome};

use super::{PerfTimer, SimulationCore};

/// One tick: a fixed batch of single-cell steps. The repaint queue is
/// left for the presentation layer to drain afterwards; the producers
/// here never wait on it.
pub(super) fn tick(sim: &mut SimulationCore) {
    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
    }
    let tick_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let steps = sim.tuning.steps_per_tick;
    for _ in 0..steps {
        single_step(sim);
    }

    if perf_on {
        sim.perf_stats.steps = steps;
        sim.perf_stats.queued_repaints = sim.repaint.len() as u32;
        sim.perf_stats.dropped_repaints = sim.repaint.dropped() as u32;
        if let Some(start) = tick_start {
            sim.perf_stats.tick_ms = start.elapsed_ms();
        }
    }

    sim.frame += 1;
}

/// One atomic step: sample a cell by independent per-axis uniform draws
/// (the historical sampling scheme, kept intentionally) and run it
/// through the flow chain.
pub(super) fn single_step(sim: &mut SimulationCore) {
    let x = int_random(&mut sim.rng_state, sim.canvas.width());
    let y = int_random(&mut sim.rng_state, sim.canvas.height());
    let p = Point::new(x, y);

    let mut ctx = FlowContext {
        canvas: &mut sim.canvas,
        repaint: &mut sim.repaint,
        tuning: &sim.tuning.flow,
        rng: &mut sim.rng_state,
        transfers: 0,
    };
    let outcome = flow::update_cell(&mut ctx, p);
    let transfers = ctx.transfers;

    if sim.perf_enabled {
        match outcome {
            StepOutcome::Aged => sim.perf_stats.aged += 1,
            StepOutcome::Diffused => sim.perf_stats.diffused += 1,
            StepOutcome::Settled => sim.perf_stats.settled += 1,
        }
        sim.perf_stats.transfers += transfers;
    }
}
