//! Tuning bundle - the engine's named constants, loadable from JSON.
//!
//! The historical implementation buried these as inline literals (the
//! surface-tension multiplier, light vectors, reflectivity coefficients)
//! and compiled two near-identical engine variants that differed only in
//! a couple of them. Here there is one engine and the variant choices are
//! explicit, serde-loaded fields; `Default` reproduces the reference
//! behavior.

use serde::{Deserialize, Serialize};

/// How blended integer percentages (liquid content, drying rate,
/// miscibility) are kept inside `[0, 100]`.
///
/// `Wrap` is the historical arithmetic: the value is reduced modulo 101,
/// so an overshoot past 100 jumps discontinuously back toward 0.
/// `Saturate` clamps instead, which is the suspected original intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentBlend {
    Wrap,
    Saturate,
}

/// Flow-rule constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowTuning {
    /// Multiplier on a cell's excess volume in the surface-tension
    /// spill probability check.
    pub tension_excess_multiplier: i32,
    /// Exclusive upper bound of the random viscosity barrier drawn by
    /// the gravity rule.
    pub viscosity_barrier: i32,
    /// Percentage wrap rule used when blending donated paint.
    pub percent_blend: PercentBlend,
    /// Historical-parity flag: one engine variant truncated the blend
    /// ratio to an integer before scaling the drying rate, which leaves
    /// the drying rate unchanged whenever the ratio is below 1.
    pub truncate_drying_ratio: bool,
}

impl Default for FlowTuning {
    fn default() -> Self {
        Self {
            tension_excess_multiplier: 3,
            viscosity_barrier: 10,
            percent_blend: PercentBlend::Wrap,
            truncate_drying_ratio: false,
        }
    }
}

/// Shading constants for the bump-map lighting pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingTuning {
    /// Divisor turning a cell's paint volume into a height sample.
    pub height_scale: f32,
    /// Fixed z component of the surface normal before normalization.
    pub normal_z: f32,
    /// Ambient reflectivity (Ka).
    pub ambient: f32,
    /// Diffuse reflectivity (Kd).
    pub diffuse: f32,
    /// Specular reflectivity (Ks); 0 disables the specular term.
    pub specular: f32,
    /// Specular shininess exponent.
    pub shininess: f32,
    /// Light direction vectors, normalized at shader construction.
    pub lights: Vec<[f32; 3]>,
}

impl Default for ShadingTuning {
    fn default() -> Self {
        Self {
            height_scale: 2.0,
            normal_z: 1.0,
            ambient: 0.3,
            diffuse: 0.7,
            specular: 0.0,
            shininess: 6.0,
            lights: vec![[-1.0, -1.0, 1.0]],
        }
    }
}

/// The full tuning bundle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Single-cell update steps per tick.
    pub steps_per_tick: u32,
    /// Repaint queue capacity; further requests are dropped once full.
    pub repaint_capacity: usize,
    pub flow: FlowTuning,
    pub shading: ShadingTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            steps_per_tick: 200,
            repaint_capacity: 500,
            flow: FlowTuning::default(),
            shading: ShadingTuning::default(),
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning bundle. Missing fields fall back
    /// to the reference defaults.
    pub fn from_bundle_json(json: &str) -> Result<Self, String> {
        let tuning: Tuning = serde_json::from_str(json).map_err(|e| e.to_string())?;
        tuning.validate()?;
        Ok(tuning)
    }

    fn validate(&self) -> Result<(), String> {
        if self.steps_per_tick == 0 {
            return Err("tuning: steps_per_tick must be positive".to_string());
        }
        if self.repaint_capacity == 0 {
            return Err("tuning: repaint_capacity must be positive".to_string());
        }
        if self.flow.viscosity_barrier <= 0 {
            return Err("tuning: viscosity_barrier must be positive".to_string());
        }
        if self.shading.height_scale == 0.0 {
            return Err("tuning: height_scale must be non-zero".to_string());
        }
        if self.shading.lights.is_empty() {
            return Err("tuning: at least one light is required".to_string());
        }
        Ok(())
    }
}
