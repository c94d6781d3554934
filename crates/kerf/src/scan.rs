//! Run detection: contiguous shape spans within one column.
//!
//! A column through a concave silhouette can cross several disjoint
//! pieces of the shape; each piece becomes its own [`Run`] and is laid
//! out independently. The iterator is lazy, finite, and walks the column
//! exactly once, top to bottom.

use crate::grid::PixelGrid;

/// A maximal contiguous vertical span of shape pixels in one column.
///
/// Both rows are inclusive. Recomputed per column; nothing persists
/// between passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub start: u32,
    pub end: u32,
}

impl Run {
    #[inline]
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Full height of the run, `end - start`.
    #[inline]
    pub fn height(&self) -> u32 {
        self.end - self.start
    }
}

/// Iterator over the runs of a single column, in top-to-bottom order.
pub struct RunIter<'a> {
    grid: &'a PixelGrid,
    col: u32,
    row: u32,
}

impl<'a> RunIter<'a> {
    pub fn new(grid: &'a PixelGrid, col: u32) -> Self {
        Self { grid, col, row: 0 }
    }
}

impl Iterator for RunIter<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let height = self.grid.height();

        // Skip background rows to the next run start.
        while self.row < height && !self.grid.is_shape(self.col, self.row) {
            self.row += 1;
        }
        if self.row >= height {
            return None;
        }

        let start = self.row;
        while self.row < height && self.grid.is_shape(self.col, self.row) {
            self.row += 1;
        }

        // self.row now sits on the first background row after the run
        // (or one past the bottom edge).
        Some(Run::new(start, self.row - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::grid_from_art;

    fn runs(grid: &PixelGrid, col: u32) -> Vec<Run> {
        RunIter::new(grid, col).collect()
    }

    #[test]
    fn single_solid_block_is_one_run() {
        let grid = grid_from_art(&[
            ".",
            "#",
            "#",
            "#",
            ".",
        ]);
        assert_eq!(runs(&grid, 0), vec![Run::new(1, 3)]);
    }

    #[test]
    fn disjoint_pieces_become_separate_runs() {
        let grid = grid_from_art(&[
            "#",
            "#",
            ".",
            ".",
            "#",
            ".",
            "#",
        ]);
        assert_eq!(
            runs(&grid, 0),
            vec![Run::new(0, 1), Run::new(4, 4), Run::new(6, 6)],
        );
    }

    #[test]
    fn run_touching_bottom_edge_terminates() {
        let grid = grid_from_art(&[
            ".",
            "#",
            "#",
        ]);
        assert_eq!(runs(&grid, 0), vec![Run::new(1, 2)]);
    }

    #[test]
    fn background_column_yields_nothing() {
        let grid = grid_from_art(&[
            "#.",
            "#.",
        ]);
        assert!(runs(&grid, 1).is_empty());
    }

    #[test]
    fn full_column_is_one_run() {
        let grid = grid_from_art(&["#", "#", "#"]);
        assert_eq!(runs(&grid, 0), vec![Run::new(0, 2)]);
    }

    #[test]
    fn run_height_matches_span() {
        assert_eq!(Run::new(10, 68).height(), 58);
        assert_eq!(Run::new(4, 4).height(), 0);
    }
}
