//! Hinge pattern generation: one pass over the grid.
//!
//! Walks sampled columns at the configured stride, detects runs in each
//! active column, and lays every run out with the column's parity. The
//! result is a [`HingePattern`] collector with two read views: raw
//! pixel-space segments for the preview sink, and document-space lines
//! for SVG embedding. Generation performs no drawing or I/O itself.

use crate::geometry::{Line, Segment};
use crate::grid::PixelGrid;
use crate::layout::{layout_run, LayoutPolicy, Parity};
use crate::scale::{ConfigError, PixelConstants, ScaleMap};
use crate::scan::RunIter;

/// All segments of one generation pass, in discovery order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HingePattern {
    segments: Vec<Segment>,
}

impl HingePattern {
    /// Pixel-space view, ordered by (column, start row).
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Map every segment into vector-document coordinates.
    pub fn to_vector_lines(&self, map: &ScaleMap) -> Vec<Line> {
        self.segments.iter().map(|s| s.to_line(map)).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Generate the living-hinge cut pattern for a rasterized silhouette.
///
/// Sampled columns start one stride inside the leftmost active column and
/// stop before the rightmost. Sampled columns that miss the shape are
/// skipped entirely; only columns that intersect it advance the parity
/// counter, so adjacent drawn columns always alternate phase. An
/// all-background grid produces an empty pattern.
pub fn generate_hinge_fill(
    grid: &PixelGrid,
    consts: &PixelConstants,
    policy: LayoutPolicy,
) -> Result<HingePattern, ConfigError> {
    let Some((start_col, end_col)) = grid.active_column_bounds() else {
        return Ok(HingePattern::default());
    };

    let mut segments = Vec::new();
    let mut drawn = 0usize;

    let mut col = start_col + consts.col_stride;
    while col < end_col {
        if grid.column_active(col) {
            let parity = Parity::of(drawn);
            for run in RunIter::new(grid, col) {
                segments.extend(layout_run(run, col, parity, consts, policy)?);
            }
            // Activity drives the stagger, not output: a column whose
            // runs were all too small still flips its neighbor's phase.
            drawn += 1;
        }
        col += consts.col_stride;
    }

    Ok(HingePattern { segments })
}
