use wasm_bindgen::prelude::*;

/// Per-tick performance snapshot, populated only while perf metrics are
/// enabled.
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) tick_ms: f64,
    pub(super) steps: u32,
    pub(super) aged: u32,
    pub(super) diffused: u32,
    pub(super) settled: u32,
    pub(super) transfers: u32,
    pub(super) queued_repaints: u32,
    pub(super) dropped_repaints: u32,
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 {
        self.tick_ms
    }

    #[wasm_bindgen(getter)]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Steps consumed by the age rule (empty, dry, or dried out now).
    #[wasm_bindgen(getter)]
    pub fn aged(&self) -> u32 {
        self.aged
    }

    /// Steps consumed by lateral diffusion or a surface-tension spill.
    #[wasm_bindgen(getter)]
    pub fn diffused(&self) -> u32 {
        self.diffused
    }

    /// Steps that ran the full chain through the gravity rule.
    #[wasm_bindgen(getter)]
    pub fn settled(&self) -> u32 {
        self.settled
    }

    #[wasm_bindgen(getter)]
    pub fn transfers(&self) -> u32 {
        self.transfers
    }

    #[wasm_bindgen(getter)]
    pub fn queued_repaints(&self) -> u32 {
        self.queued_repaints
    }

    #[wasm_bindgen(getter)]
    pub fn dropped_repaints(&self) -> u32 {
        self.dropped_repaints
    }
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}
