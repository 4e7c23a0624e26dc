//! Shading - bump-map lighting over the paint height field
//!
//! Each cell's paint volume is read as a height sample; the four axis
//! neighbors give a local gradient, and a Blinn-style diffuse term per
//! light (plus an optional half-vector specular term) produces a
//! grayscale relief value the presentation layer composites under the
//! color channels.

mod vec3;

pub use vec3::Vec3;

use crate::canvas::Canvas;
use crate::domain::geometry::{Direction, Point};
use crate::domain::tuning::ShadingTuning;

/// The shading pass. Lights are normalized once at construction.
pub struct Shader {
    tuning: ShadingTuning,
    lights: Vec<Vec3>,
    viewer: Vec3,
}

impl Shader {
    pub fn new(tuning: ShadingTuning) -> Self {
        let lights = tuning
            .lights
            .iter()
            .map(|l| Vec3::new(l[0], l[1], l[2]).normalize())
            .collect();
        Self {
            tuning,
            lights,
            viewer: Vec3::new(0.0, 0.0, 1.0),
        }
    }

    #[inline]
    pub fn tuning(&self) -> &ShadingTuning {
        &self.tuning
    }

    /// Reflected-light intensity for the cell at `p`, in `[0, 255]`.
    ///
    /// The value is inverted (high reflection reads dark on the bump
    /// map), and a raw sum past 255 is forced to 0: blown-out highlights
    /// go black rather than clipping.
    pub fn intensity_at(&self, canvas: &Canvas, p: Point) -> u8 {
        let center = self.height(canvas, p);
        let north = self.neighbor_height(canvas, p, Direction::North, center);
        let south = self.neighbor_height(canvas, p, Direction::South, center);
        let east = self.neighbor_height(canvas, p, Direction::East, center);
        let west = self.neighbor_height(canvas, p, Direction::West, center);

        let normal = Vec3::new(north - south, east - west, self.tuning.normal_z).normalize();
        let hue = canvas.cell(p).contents.color.hue as f32;

        let mut sum = 0.0f32;
        for light in &self.lights {
            let diffuse = light.dot(normal).max(0.0);
            sum += (self.tuning.ambient + self.tuning.diffuse * diffuse) * hue;
            if self.tuning.specular > 0.0 {
                let half = (*light + self.viewer).normalize();
                sum += self.tuning.specular
                    * half.dot(normal).max(0.0).powf(self.tuning.shininess)
                    * 255.0;
            }
        }

        if sum > 255.0 {
            return 0;
        }
        255 - sum.max(0.0) as u8
    }

    /// Height sample: paint volume over the height scale. An unfilled
    /// cell sits marginally below the zero plane, like the source data.
    #[inline]
    fn height(&self, canvas: &Canvas, p: Point) -> f32 {
        canvas.volume(p) as f32 / self.tuning.height_scale
    }

    /// Neighbor height, falling back to the center's own height past a
    /// grid edge so edge cells read as locally flat.
    #[inline]
    fn neighbor_height(&self, canvas: &Canvas, p: Point, dir: Direction, center: f32) -> f32 {
        match canvas.neighbor(p, dir) {
            Some(q) => self.height(canvas, q),
            None => center,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tuning::ShadingTuning;

    fn flat_canvas(volume: i32, hue: i32) -> Canvas {
        let mut canvas = Canvas::new(5, 5);
        for y in 0..5 {
            for x in 0..5 {
                let cell = canvas.cell_mut(Point::new(x, y));
                cell.volume = volume;
                cell.contents.color.hue = hue;
            }
        }
        canvas
    }

    #[test]
    fn flat_surface_shades_uniformly_including_edges() {
        let canvas = flat_canvas(40, 100);
        let shader = Shader::new(ShadingTuning::default());

        let reference = shader.intensity_at(&canvas, Point::new(2, 2));
        for probe in [
            Point::new(0, 0),
            Point::new(4, 0),
            Point::new(0, 4),
            Point::new(4, 4),
            Point::new(2, 0),
            Point::new(0, 2),
        ] {
            assert_eq!(shader.intensity_at(&canvas, probe), reference);
        }
    }

    #[test]
    fn blown_out_highlight_goes_black() {
        let canvas = flat_canvas(40, 300);
        let tuning = ShadingTuning {
            ambient: 1.0,
            diffuse: 0.0,
            ..ShadingTuning::default()
        };
        // Raw sum = 1.0 * 300 > 255: forced to 0 rather than clipped.
        assert_eq!(Shader::new(tuning).intensity_at(&canvas, Point::new(2, 2)), 0);
    }

    #[test]
    fn zero_hue_reads_as_full_white() {
        let canvas = flat_canvas(40, 0);
        let shader = Shader::new(ShadingTuning::default());
        assert_eq!(shader.intensity_at(&canvas, Point::new(2, 2)), 255);
    }

    #[test]
    fn a_slope_shades_differently_from_flat() {
        let mut canvas = flat_canvas(40, 100);
        // Pile up a ridge north of the probe point.
        canvas.cell_mut(Point::new(2, 1)).volume = 90;

        let flat = Shader::new(ShadingTuning::default());
        let sloped = flat.intensity_at(&canvas, Point::new(2, 2));
        let reference = flat.intensity_at(&canvas, Point::new(2, 4));
        assert_ne!(sloped, reference);
    }

    #[test]
    fn specular_term_brightens_an_aligned_surface() {
        let canvas = flat_canvas(40, 100);
        let base = Shader::new(ShadingTuning::default());
        let shiny = Shader::new(ShadingTuning {
            specular: 0.5,
            ..ShadingTuning::default()
        });

        let p = Point::new(2, 2);
        // More reflected light means a lower (darker) bump-map value.
        assert!(shiny.intensity_at(&canvas, p) < base.intensity_at(&canvas, p));
    }
}
