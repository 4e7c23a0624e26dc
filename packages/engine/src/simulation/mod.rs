//! Simulation - orchestration of the flow engine over one canvas
//!
//! `SimulationCore` owns the canvas, the repaint queue, the tuning
//! bundle, the shader and the RNG state; nothing in the engine is a
//! process-wide static, so independent simulations coexist and a fixed
//! seed reproduces a run for tests. The core only orchestrates: flow
//! rules live in systems/flow, shading in systems/shading.

use crate::canvas::{Canvas, RepaintQueue};
use crate::domain::geometry::Point;
use crate::domain::tuning::Tuning;
use crate::systems::shading::Shader;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::Simulation;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Buffers the presentation layer reads after a drain, reused across
/// ticks.
pub(crate) struct RenderBuffers {
    /// Drained repaint points, packed `x << 16 | y`.
    repaint_list: Vec<u32>,
    /// Per-point samples, packed `hue << 16 | volume_channel << 8 | intensity`.
    sample_buffer: Vec<u32>,
}

/// One self-contained wet-paint simulation.
pub struct SimulationCore {
    canvas: Canvas,
    repaint: RepaintQueue,
    tuning: Tuning,
    shader: Shader,

    // State
    frame: u64,
    rng_state: u32,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Create a simulation with reference tuning.
    pub fn new(width: i32, height: i32) -> Self {
        init::create_simulation_core(width, height, Tuning::default())
    }

    /// Create a simulation with an explicit tuning bundle.
    pub fn with_tuning(width: i32, height: i32, tuning: Tuning) -> Self {
        init::create_simulation_core(width, height, tuning)
    }

    pub fn width(&self) -> i32 {
        self.canvas.width()
    }

    pub fn height(&self) -> i32 {
        self.canvas.height()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Replace the tuning bundle from JSON. Rebuilds the shader and the
    /// repaint queue, so this belongs at startup, before paint moves.
    pub fn load_tuning_bundle_json(&mut self, json: &str) -> Result<(), String> {
        let tuning = Tuning::from_bundle_json(json)?;
        settings::apply_tuning(self, tuning);
        Ok(())
    }

    /// Seed the RNG for a reproducible run.
    pub fn set_random_seed(&mut self, seed: u32) {
        settings::set_random_seed(self, seed);
    }

    pub fn set_height_scale(&mut self, height_scale: f32) {
        settings::set_height_scale(self, height_scale);
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead
    /// when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Advance the simulation one tick: a fixed batch of single-cell
    /// steps. The presentation layer then drains the repaint queue via
    /// [`SimulationCore::collect_repaints`].
    pub fn tick(&mut self) {
        step::tick(self);
    }

    /// One atomic simulation step on one randomly chosen cell.
    pub fn single_step(&mut self) {
        step::single_step(self);
    }

    /// Brush stroke: force-set a cell's paint at a point.
    pub fn stroke(&mut self, x: i32, y: i32, hue: i32, liquid_content: i32, volume: i32) -> bool {
        commands::stroke(self, x, y, hue, liquid_content, volume)
    }

    /// Fill a rectangle with one paint/volume combination (test
    /// patterns and calibration blobs). The region is clipped to the
    /// canvas.
    #[allow(clippy::too_many_arguments)]
    pub fn seed_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        hue: i32,
        liquid_content: i32,
        drying_rate: i32,
        miscibility: i32,
        volume: i32,
    ) {
        commands::seed_rect(
            self,
            x,
            y,
            w,
            h,
            hue,
            liquid_content,
            drying_rate,
            miscibility,
            volume,
        );
    }

    /// Point the gravity field of a rectangle of cells. Returns false
    /// for an unknown direction index.
    pub fn set_gravity_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        direction: u8,
        strength: i32,
    ) -> bool {
        commands::set_gravity_rect(self, x, y, w, h, direction, strength)
    }

    /// Calibration preset: opposing gravity halves and a paint band
    /// across the middle.
    pub fn seed_split_canvas(&mut self) {
        commands::seed_split_canvas(self);
    }

    /// Populate the canvas from decoded RGB pixels. Returns the extent
    /// actually applied after clipping to the grid.
    pub fn load_raster(
        &mut self,
        width: u32,
        height: u32,
        pixels: &[u8],
    ) -> Result<(u32, u32), String> {
        commands::load_raster(self, width, height, pixels)
    }

    /// Reinitialize the whole canvas.
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    /// Shading sample for one cell.
    pub fn intensity_at(&self, p: Point) -> u8 {
        self.shader.intensity_at(&self.canvas, p)
    }

    /// Drain the repaint queue into the packed render buffers. Returns
    /// the number of drained points.
    pub fn collect_repaints(&mut self) -> usize {
        render_extract::collect_repaints(self)
    }

    /// Packed render sample for an arbitrary cell (full-canvas redraws
    /// after seeding).
    pub fn sample_at(&self, p: Point) -> u32 {
        render_extract::sample_at(self, p)
    }

    /// Get pointer to the drained repaint list (for JS rendering)
    pub fn repaint_list_ptr(&self) -> *const u32 {
        self.render.repaint_list.as_ptr()
    }

    pub fn repaint_list_len(&self) -> usize {
        self.render.repaint_list.len()
    }

    /// Get pointer to the per-point sample buffer (for JS rendering)
    pub fn sample_buffer_ptr(&self) -> *const u32 {
        self.render.sample_buffer.as_ptr()
    }

    pub fn sample_buffer_len(&self) -> usize {
        self.render.sample_buffer.len()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
