use wasm_bindgen::prelude::*;

use crate::domain::geometry::Point;

use super::perf_stats::PerfStats;
use super::SimulationCore;

/// The presentation-facing simulation handle exported to JS.
#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create a simulation with given canvas dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: SimulationCore::new(width as i32, height as i32),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.core.width() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.core.height() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    /// Seed the RNG for a reproducible run
    pub fn set_random_seed(&mut self, seed: u32) {
        self.core.set_random_seed(seed);
    }

    /// Load a JSON tuning bundle (lights, reflectivity, blend rules)
    pub fn load_tuning_bundle(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_tuning_bundle_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn set_height_scale(&mut self, height_scale: f32) {
        self.core.set_height_scale(height_scale);
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Advance the simulation one tick
    pub fn tick(&mut self) {
        self.core.tick();
    }

    /// One single-cell update step (fine-grained drivers and tests)
    pub fn single_step(&mut self) {
        self.core.single_step();
    }

    /// Brush stroke at a point; false if the point is off-canvas
    pub fn stroke(&mut self, x: i32, y: i32, hue: i32, liquid_content: i32, volume: i32) -> bool {
        self.core.stroke(x, y, hue, liquid_content, volume)
    }

    /// Fill a rectangle with one paint/volume combination (test patterns)
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
        self.core
            .seed_rect(x, y, w, h, hue, liquid_content, drying_rate, miscibility, volume);
    }

    /// Point the gravity field of a rectangle of cells
    /// (direction: 0 = North, 1 = East, 2 = South, 3 = West)
    pub fn set_gravity_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        direction: u8,
        strength: i32,
    ) -> bool {
        self.core.set_gravity_rect(x, y, w, h, direction, strength)
    }

    /// Calibration preset: opposing gravity halves with a paint band
    pub fn seed_split_canvas(&mut self) {
        self.core.seed_split_canvas();
    }

    /// Populate the canvas from decoded RGB pixels (row-major triples).
    /// Returns the applied extent packed as `width << 16 | height`.
    pub fn load_raster(
        &mut self,
        width: u32,
        height: u32,
        pixels: &[u8],
    ) -> Result<u32, JsValue> {
        let (w, h) = self
            .core
            .load_raster(width, height, pixels)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok((w << 16) | h)
    }

    /// Reinitialize the whole canvas
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Drain changed cells into the transfer buffers; returns the count
    pub fn collect_repaints(&mut self) -> usize {
        self.core.collect_repaints()
    }

    /// Get pointer to the drained repaint list (packed `x << 16 | y`)
    pub fn repaint_list_ptr(&self) -> *const u32 {
        self.core.repaint_list_ptr()
    }

    pub fn repaint_list_len(&self) -> usize {
        self.core.repaint_list_len()
    }

    /// Get pointer to the per-point samples
    /// (packed `hue << 16 | volume_channel << 8 | intensity`)
    pub fn sample_buffer_ptr(&self) -> *const u32 {
        self.core.sample_buffer_ptr()
    }

    pub fn sample_buffer_len(&self) -> usize {
        self.core.sample_buffer_len()
    }

    /// Packed render sample for one cell (full redraws after seeding).
    /// Out-of-bounds points sample as bare canvas: hue 0, volume 0,
    /// intensity 255.
    pub fn sample_at(&self, x: i32, y: i32) -> u32 {
        let p = Point::new(x, y);
        if !self.core.canvas().in_bounds(p) {
            return 255;
        }
        self.core.sample_at(p)
    }

    /// Shading intensity for one cell; 255 (background) out of bounds
    pub fn intensity_at(&self, x: i32, y: i32) -> u8 {
        let p = Point::new(x, y);
        if !self.core.canvas().in_bounds(p) {
            return 255;
        }
        self.core.intensity_at(p)
    }

    /// A cell's hue, or -1 out of bounds
    pub fn hue_at(&self, x: i32, y: i32) -> i32 {
        let p = Point::new(x, y);
        if !self.core.canvas().in_bounds(p) {
            return -1;
        }
        self.core.canvas().cell(p).contents.color.hue
    }

    /// A cell's paint volume; -1 is the unfilled sentinel
    pub fn volume_at(&self, x: i32, y: i32) -> i32 {
        let p = Point::new(x, y);
        if !self.core.canvas().in_bounds(p) {
            return -1;
        }
        self.core.canvas().cell(p).volume
    }
}
