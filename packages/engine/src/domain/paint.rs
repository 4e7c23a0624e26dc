//! Paint - the substance occupying a cell.

/// Hue/saturation/lightness triple. Hue is an integer angle in
/// `[0, 360)` degrees (0 = red); saturation and lightness are in
/// `[0, 1]` with lightness 0 = black, 1 = white.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub hue: i32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        hue: 0,
        saturation: 0.0,
        lightness: 1.0,
    };
}

/// Paint attribute defaults applied by seeding operations (brush strokes
/// and raster import).
pub const SEED_LIQUID_CONTENT: i32 = 80;
pub const SEED_DRYING_RATE: i32 = 80;
pub const SEED_MISCIBILITY: i32 = 80;

/// One cell's worth of paint.
///
/// `liquid_content` is how wet the paint currently is, `drying_rate` the
/// per-step probability (in percent) that it loses one unit of wetness,
/// and `miscibility` the liquid-content distance below which another
/// paint still blends with this one instead of separating.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub liquid_content: i32,
    pub drying_rate: i32,
    pub miscibility: i32,
}

impl Paint {
    /// Fully dry white paint, the contents of an untouched cell.
    pub const DRY_WHITE: Paint = Paint {
        color: Color::WHITE,
        liquid_content: 0,
        drying_rate: 0,
        miscibility: 0,
    };

    /// Two paints are similar when their liquid contents differ by no
    /// more than the host paint's miscibility. Similar paints blend;
    /// dissimilar contact triggers the surface-tension spill rule.
    #[inline]
    pub fn similar_to(&self, other: &Paint) -> bool {
        (self.liquid_content - other.liquid_content).abs() <= self.miscibility
    }
}
