//! Seeding and interaction commands
//!
//! The brush stroke is the one externally triggered mutation outside the
//! step loop and queues its cell for repaint. Bulk seeding (rectangles,
//! the split-canvas preset, raster import) repopulates large regions and
//! deliberately bypasses the bounded repaint queue; the presentation
//! layer does a full redraw after seeding.

use crate::domain::cell::{Cell, Gravity};
use crate::domain::geometry::{Direction, Point};
use crate::domain::paint::{
    Color, Paint, SEED_DRYING_RATE, SEED_LIQUID_CONTENT, SEED_MISCIBILITY,
};

use super::SimulationCore;

/// Saturation and lightness applied to seeded paint; the paint model
/// carries color primarily in the hue channel.
const SEED_SATURATION: f32 = 1.0;
const SEED_LIGHTNESS: f32 = 0.5;

/// Raster import: hue-to-volume divisor.
const RASTER_VOLUME_DIVISOR: f32 = 2.5;

pub(super) fn stroke(
    sim: &mut SimulationCore,
    x: i32,
    y: i32,
    hue: i32,
    liquid_content: i32,
    volume: i32,
) -> bool {
    let p = Point::new(x, y);
    if !sim.canvas.in_bounds(p) {
        return false;
    }

    let cell = sim.canvas.cell_mut(p);
    cell.contents = Paint {
        color: Color {
            hue,
            saturation: SEED_SATURATION,
            lightness: SEED_LIGHTNESS,
        },
        liquid_content,
        drying_rate: SEED_DRYING_RATE,
        miscibility: SEED_MISCIBILITY,
    };
    cell.volume = volume;
    sim.repaint.request(p);
    true
}

#[allow(clippy::too_many_arguments)]
pub(super) fn seed_rect(
    sim: &mut SimulationCore,
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
    let paint = Paint {
        color: Color {
            hue,
            saturation: SEED_SATURATION,
            lightness: SEED_LIGHTNESS,
        },
        liquid_content,
        drying_rate,
        miscibility,
    };
    for_each_in_rect(sim, x, y, w, h, |cell| {
        cell.contents = paint;
        cell.volume = volume;
    });
}

pub(super) fn set_gravity_rect(
    sim: &mut SimulationCore,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    direction: u8,
    strength: i32,
) -> bool {
    let Some(direction) = Direction::from_index(direction) else {
        return false;
    };
    let gravity = Gravity {
        direction,
        strength,
    };
    for_each_in_rect(sim, x, y, w, h, |cell| cell.gravity = gravity);
    true
}

/// Calibration preset: gravity pulls south on the left half and north on
/// the right, with a wet paint band across the middle rows feeding both
/// fields.
pub(super) fn seed_split_canvas(sim: &mut SimulationCore) {
    let w = sim.canvas.width();
    let h = sim.canvas.height();
    let half = w / 2;

    set_gravity_rect(sim, 0, 0, half, h, Direction::South.index(), 10);
    set_gravity_rect(sim, half, 0, w - half, h, Direction::North.index(), 10);

    let band_top = (h / 2 - 1).max(0);
    let band_h = (h / 2 + 2).min(h) - band_top;
    seed_rect(sim, 0, band_top, w, band_h, 200, 90, 30, 80, 60);
}

/// Map decoded RGB pixels onto the canvas, clipping oversized input to
/// the grid; undersized input leaves the remaining cells untouched.
/// Pure black and pure white pixels become empty, dry cells; any other
/// pixel becomes wet paint with `hue = 255 - red` (the grayscale path)
/// and a volume proportional to the hue. Returns the applied extent.
pub(super) fn load_raster(
    sim: &mut SimulationCore,
    width: u32,
    height: u32,
    pixels: &[u8],
) -> Result<(u32, u32), String> {
    let needed = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| "raster: dimensions overflow".to_string())?;
    if pixels.len() < needed {
        return Err(format!(
            "raster: expected {} bytes of RGB data, got {}",
            needed,
            pixels.len()
        ));
    }

    let applied_w = (width as i32).min(sim.canvas.width());
    let applied_h = (height as i32).min(sim.canvas.height());

    for y in 0..applied_h {
        for x in 0..applied_w {
            let src = ((y as usize) * (width as usize) + (x as usize)) * 3;
            let (r, g, b) = (pixels[src], pixels[src + 1], pixels[src + 2]);
            let cell = sim.canvas.cell_mut(Point::new(x, y));

            if (r, g, b) == (0, 0, 0) || (r, g, b) == (255, 255, 255) {
                // Bare canvas in the source image: an empty, dry cell.
                cell.contents = Paint::DRY_WHITE;
                cell.volume = 0;
                continue;
            }

            let hue = 255 - r as i32;
            cell.contents = Paint {
                color: Color {
                    hue,
                    saturation: SEED_SATURATION,
                    lightness: SEED_LIGHTNESS,
                },
                liquid_content: SEED_LIQUID_CONTENT,
                drying_rate: SEED_DRYING_RATE,
                miscibility: SEED_MISCIBILITY,
            };
            cell.volume = (hue as f32 / RASTER_VOLUME_DIVISOR) as i32;
        }
    }

    Ok((applied_w as u32, applied_h as u32))
}

pub(super) fn clear(sim: &mut SimulationCore) {
    sim.canvas.clear();
    sim.repaint.reset();
    sim.frame = 0;
}

fn for_each_in_rect(
    sim: &mut SimulationCore,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    mut apply: impl FnMut(&mut Cell),
) {
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + w).min(sim.canvas.width());
    let y1 = (y + h).min(sim.canvas.height());
    for cy in y0..y1 {
        for cx in x0..x1 {
            apply(sim.canvas.cell_mut(Point::new(cx, cy)));
        }
    }
}
