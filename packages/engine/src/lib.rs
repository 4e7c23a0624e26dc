//! Aquarelle Engine - wet-paint diffusion simulation
//!
//! Cellular model of wet paint spreading, drying and flowing under
//! per-cell gravity and surface tension, plus a bump-map shading pass
//! over the paint height field.
//!
//! Architecture:
//! - core/       - Cross-cutting utilities (safety macros, RNG)
//! - domain/     - Paint, cells, tuning bundle
//! - canvas/     - Grid and repaint queue
//! - systems/    - Flow rules and shading
//! - simulation/ - Orchestration and the WASM facade

#[macro_use]
pub mod core;
pub mod domain;
pub mod canvas;
pub mod systems;
pub mod simulation;

// Convenience re-exports for embedders
pub use canvas::{Canvas, RepaintQueue};
pub use domain::cell::{Cell, Gravity, UNFILLED};
pub use domain::geometry::{Direction, Point};
pub use domain::paint::{Color, Paint};
pub use domain::tuning::{PercentBlend, Tuning};
pub use simulation::{PerfStats, Simulation, SimulationCore};

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Aquarelle wet-paint engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
