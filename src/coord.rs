use serde::{Deserialize, Serialize};

/// A position in world space.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Column/row of a grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellCoord {
    pub x: u32,
    pub y: u32,
}

impl CellCoord {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Inclusive rectangle of cells an object is registered in.
///
/// The corners are stored exactly as they were mapped, so a range built from
/// mis-ordered corners stays inverted and covers no cells at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRange {
    pub start: CellCoord,
    pub end: CellCoord,
}

impl CellRange {
    pub fn new(start: CellCoord, end: CellCoord) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn contains(&self, cell: CellCoord) -> bool {
        cell.x >= self.start.x
            && cell.x <= self.end.x
            && cell.y >= self.start.y
            && cell.y <= self.end.y
    }

    pub fn is_inverted(&self) -> bool {
        self.start.x > self.end.x || self.start.y > self.end.y
    }

    pub fn cell_count(&self) -> usize {
        if self.is_inverted() {
            return 0;
        }
        let cols = (self.end.x - self.start.x) as usize + 1;
        let rows = (self.end.y - self.start.y) as usize + 1;
        cols * rows
    }

    /// Row-major walk over every covered cell.
    pub fn cells(&self) -> impl Iterator<Item = CellCoord> {
        let (start, end) = (self.start, self.end);
        (start.y..=end.y).flat_map(move |y| (start.x..=end.x).map(move |x| CellCoord::new(x, y)))
    }

    /// Grows the range by `radius` cells on every side, clipped to a
    /// `width x height` grid.
    pub fn expand(&self, radius: u32, width: u32, height: u32) -> CellRange {
        let max_x = width.saturating_sub(1);
        let max_y = height.saturating_sub(1);
        CellRange {
            start: CellCoord::new(
                self.start.x.saturating_sub(radius),
                self.start.y.saturating_sub(radius),
            ),
            end: CellCoord::new(
                self.end.x.saturating_add(radius).min(max_x),
                self.end.y.saturating_add(radius).min(max_y),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(sx: u32, sy: u32, ex: u32, ey: u32) -> CellRange {
        CellRange::new(CellCoord::new(sx, sy), CellCoord::new(ex, ey))
    }

    #[test]
    fn cells_walk_rows_then_columns() {
        let cells: Vec<_> = range(1, 1, 2, 2).cells().collect();
        assert_eq!(
            cells,
            vec![
                CellCoord::new(1, 1),
                CellCoord::new(2, 1),
                CellCoord::new(1, 2),
                CellCoord::new(2, 2),
            ]
        );
    }

    #[test]
    fn inverted_range_is_empty() {
        let r = range(3, 0, 1, 0);
        assert!(r.is_inverted());
        assert_eq!(r.cells().count(), 0);
        assert_eq!(r.cell_count(), 0);
        assert!(!r.contains(CellCoord::new(2, 0)));
    }

    #[test]
    fn cell_count_matches_walk() {
        let r = range(0, 2, 4, 3);
        assert_eq!(r.cell_count(), 10);
        assert_eq!(r.cells().count(), r.cell_count());
    }

    #[test]
    fn expand_saturates_at_grid_edges() {
        let r = range(0, 1, 8, 9).expand(2, 10, 10);
        assert_eq!(r, range(0, 0, 9, 9));
    }

    #[test]
    fn expand_zero_radius_is_identity() {
        let r = range(2, 3, 4, 5);
        assert_eq!(r.expand(0, 10, 10), r);
    }

    #[test]
    fn expand_huge_radius_does_not_overflow() {
        let r = range(5, 5, 5, 5).expand(u32::MAX, 10, 10);
        assert_eq!(r, range(0, 0, 9, 9));
    }

    #[test]
    fn contains_is_inclusive() {
        let r = range(1, 1, 3, 3);
        assert!(r.contains(CellCoord::new(1, 1)));
        assert!(r.contains(CellCoord::new(3, 3)));
        assert!(!r.contains(CellCoord::new(4, 3)));
        assert!(!r.contains(CellCoord::new(0, 2)));
    }
}
