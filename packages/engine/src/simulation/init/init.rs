use crate::canvas::{Canvas, RepaintQueue};
use crate::domain::tuning::Tuning;
use crate::systems::shading::Shader;

use super::perf_stats::PerfStats;
use super::{RenderBuffers, SimulationCore};

pub(super) fn create_simulation_core(width: i32, height: i32, tuning: Tuning) -> SimulationCore {
    let shader = Shader::new(tuning.shading.clone());
    let repaint = RepaintQueue::new(tuning.repaint_capacity);
    let repaint_capacity = tuning.repaint_capacity;
    SimulationCore {
        canvas: Canvas::new(width, height),
        repaint,
        tuning,
        shader,
        frame: 0,
        rng_state: 12345,
        render: RenderBuffers {
            repaint_list: Vec::with_capacity(repaint_capacity),
            sample_buffer: Vec::with_capacity(repaint_capacity),
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
