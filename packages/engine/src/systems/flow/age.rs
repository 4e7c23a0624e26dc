use crate::core::random::percent;
use crate::domain::cell::Cell;

/// Age the cell's paint. Returns true when the step is consumed: the
/// cell is empty or already dry, or its last unit of wetness evaporated
/// just now. A cell that merely dries a little keeps flowing this step.
pub fn age_paint(cell: &mut Cell, rng: &mut u32) -> bool {
    if cell.volume == 0 || cell.contents.liquid_content == 0 {
        return true;
    }
    if percent(rng) < cell.contents.drying_rate {
        cell.contents.liquid_content -= 1;
        if cell.contents.liquid_content == 0 {
            // Dried out; no flow once the paint sets.
            return true;
        }
    }
    false
}
