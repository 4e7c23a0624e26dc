use crate::domain::cell::Cell;
use crate::domain::geometry::Point;
use crate::fast;

use super::Canvas;

impl Canvas {
    /// Direct cell access; the caller guarantees `p` is in bounds.
    #[inline]
    pub fn cell(&self, p: Point) -> &Cell {
        let idx = self.index(p);
        fast!(self.cells, [idx])
    }

    #[inline]
    pub fn cell_mut(&mut self, p: Point) -> &mut Cell {
        let idx = self.index(p);
        &mut self.cells[idx]
    }

    /// A cell's paint volume; the shading pass samples heights with this.
    #[inline]
    pub fn volume(&self, p: Point) -> i32 {
        let idx = self.index(p);
        fast!(self.cells, [idx]).volume
    }

    /// Mutable access to two distinct cells at once, for paint transfer
    /// between a source and a destination. Borrows are carved out of the
    /// flat storage in canvas-index order.
    #[inline]
    pub fn cell_pair_mut(&mut self, a: Point, b: Point) -> (&mut Cell, &mut Cell) {
        let ia = self.index(a);
        let ib = self.index(b);
        debug_assert_ne!(ia, ib, "cell_pair_mut: points must differ");
        if ia < ib {
            let (lo, hi) = self.cells.split_at_mut(ib);
            (&mut lo[ia], &mut hi[0])
        } else {
            let (lo, hi) = self.cells.split_at_mut(ia);
            (&mut hi[0], &mut lo[ib])
        }
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Reset one cell to the untouched default.
    pub fn init_cell(cell: &mut Cell) {
        *cell = Cell::unfilled();
    }

    /// Reset the whole canvas to all-unfilled as a unit.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            Canvas::init_cell(cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cell::UNFILLED;

    #[test]
    fn pair_access_works_in_both_index_orders() {
        let mut canvas = Canvas::new(4, 4);
        let a = Point::new(1, 1);
        let b = Point::new(2, 1);

        {
            let (ca, cb) = canvas.cell_pair_mut(a, b);
            ca.volume = 5;
            cb.volume = 9;
        }
        {
            let (cb, ca) = canvas.cell_pair_mut(b, a);
            assert_eq!(cb.volume, 9);
            assert_eq!(ca.volume, 5);
        }
    }

    #[test]
    fn clear_resets_every_cell() {
        let mut canvas = Canvas::new(3, 3);
        canvas.cell_mut(Point::new(2, 2)).volume = 77;
        canvas.clear();
        assert!(canvas.cells().iter().all(|c| c.volume == UNFILLED));
    }
}
