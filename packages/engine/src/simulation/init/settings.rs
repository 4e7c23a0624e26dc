use crate::canvas::RepaintQueue;
use crate::domain::tuning::Tuning;
use crate::systems::shading::Shader;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn apply_tuning(sim: &mut SimulationCore, tuning: Tuning) {
    sim.shader = Shader::new(tuning.shading.clone());
    sim.repaint = RepaintQueue::new(tuning.repaint_capacity);
    sim.tuning = tuning;
}

pub(super) fn set_random_seed(sim: &mut SimulationCore, seed: u32) {
    // Xorshift has a fixed point at zero.
    sim.rng_state = if seed == 0 { 1 } else { seed };
}

pub(super) fn set_height_scale(sim: &mut SimulationCore, height_scale: f32) {
    if height_scale == 0.0 {
        return;
    }
    sim.tuning.shading.height_scale = height_scale;
    sim.shader = Shader::new(sim.tuning.shading.clone());
}

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    sim.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(sim: &SimulationCore) -> PerfStats {
    sim.perf_stats.clone()
}
