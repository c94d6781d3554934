//! Segment layout: how one run is divided into cuts and gaps.
//!
//! Columns alternate between two phases. A `LineFirst` column starts and
//! ends with a cut; a `GapFirst` column leads with one gap and keeps a
//! gap-sized margin at the bottom. Side by side, the two phases stagger
//! the cuts like brickwork, so no horizontal crease line runs through the
//! whole piece.
//!
//! Two policies share the interface. `Balanced` (the default) solves for
//! a cut length that spreads slack evenly across the run; `Greedy` packs
//! fixed-size cuts and truncates whatever is left at the far end.
//!
//! Cut counts come from `floor` over real division; cut lengths stay
//! real-valued here and are only rounded when stamped onto a raster.

use crate::geometry::Segment;
use crate::scale::{ConfigError, PixelConstants};
use crate::scan::Run;

/// Starting phase of a column's layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    /// Even drawn-column index: cut first and last.
    LineFirst,
    /// Odd drawn-column index: leading gap, trailing gap-sized margin.
    GapFirst,
}

impl Parity {
    /// Phase for the n-th column that actually intersects the shape.
    #[inline]
    pub fn of(draw_index: usize) -> Self {
        if draw_index % 2 == 0 {
            Parity::LineFirst
        } else {
            Parity::GapFirst
        }
    }
}

/// Layout policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutPolicy {
    /// Distribute slack evenly across all cuts in the run.
    #[default]
    Balanced,
    /// Fixed-length cuts, truncating the final one to the room left.
    Greedy,
}

impl LayoutPolicy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "balanced" => Some(LayoutPolicy::Balanced),
            "greedy" => Some(LayoutPolicy::Greedy),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LayoutPolicy::Balanced => "balanced",
            LayoutPolicy::Greedy => "greedy",
        }
    }
}

/// Divide one run into cut segments.
///
/// Returns an empty vec for runs too short to bend usefully; that is the
/// expected outcome for shape edges, not an error. A computed cut count
/// with a non-positive cut length means the constants do not fit the grid
/// resolution and is reported as fatal.
pub fn layout_run(
    run: Run,
    col: u32,
    parity: Parity,
    consts: &PixelConstants,
    policy: LayoutPolicy,
) -> Result<Vec<Segment>, ConfigError> {
    if consts.min_len == 0 && consts.gap == 0 {
        return Err(ConfigError::ZeroPitch);
    }
    match policy {
        LayoutPolicy::Balanced => balanced(run, col, parity, consts),
        LayoutPolicy::Greedy => Ok(greedy(run, col, parity, consts)),
    }
}

fn balanced(
    run: Run,
    col: u32,
    parity: Parity,
    consts: &PixelConstants,
) -> Result<Vec<Segment>, ConfigError> {
    let fh = run.height() as f64;
    let s = consts.gap as f64;
    let l_min = consts.min_len as f64;
    let l_very_min = consts.very_min_len as f64;
    let start = run.start as f64;

    let (n, l, y0) = match parity {
        Parity::LineFirst => {
            // n cuts, n-1 gaps: fh = n*l + (n-1)*s.
            if fh < s + 2.0 * l_min {
                if fh < s + 2.0 * l_very_min {
                    (0, 0.0, start)
                } else {
                    // Not enough room to balance; two short cuts around
                    // one gap.
                    (2, ((fh - s) / 2.0).floor(), start)
                }
            } else {
                let n = ((fh + s) / (l_min + s)).floor() as u32;
                (n, (fh + s) / n as f64 - s, start)
            }
        }
        Parity::GapFirst => {
            // Leading gap, n cuts, trailing gap-sized margin:
            // fh = n*l + n*s + s.
            if fh < 2.0 * s + l_min {
                if fh < 2.0 * s + l_very_min {
                    (0, 0.0, start)
                } else {
                    (1, fh - 2.0 * s, start + s)
                }
            } else {
                let n = ((fh - s) / (l_min + s)).floor() as u32;
                (n, (fh - s) / n as f64 - s, start + s)
            }
        }
    };

    // The empty case must short-circuit before the length check; a run
    // too small to cut is not a configuration problem.
    if n == 0 {
        return Ok(Vec::new());
    }
    if l <= 0.0 {
        return Err(ConfigError::CutLength { count: n, len: l });
    }

    let mut segments = Vec::with_capacity(n as usize);
    let mut y = y0;
    for _ in 0..n {
        segments.push(Segment::new(col, y, y + l));
        y += l + s;
    }
    Ok(segments)
}

fn greedy(run: Run, col: u32, parity: Parity, consts: &PixelConstants) -> Vec<Segment> {
    let fh = run.height() as f64;
    let start = run.start as f64;
    let end = run.end as f64;
    let s = consts.gap as f64;
    let l_min = consts.min_len as f64;
    let l_very_min = consts.very_min_len as f64;

    let mut segments = Vec::new();
    match parity {
        Parity::LineFirst => {
            if fh < s + 2.0 * l_very_min {
                return segments;
            }
            // Pack from the top; the truncated remainder lands at the
            // bottom of the run.
            let mut y = start;
            while y < end {
                let l = l_min.min(end - y);
                if l > 0.0 && l >= l_very_min {
                    segments.push(Segment::new(col, y, y + l));
                }
                y += l_min + s;
            }
        }
        Parity::GapFirst => {
            if fh < 2.0 * s + l_very_min {
                return segments;
            }
            // Pack from the bottom so the remainder lands at the top,
            // opposite its neighbors.
            let mut y = end;
            while y > start {
                let l = l_min.min(y - start);
                if l > 0.0 && l >= l_very_min {
                    segments.push(Segment::new(col, y - l, y));
                }
                y -= l_min + s;
            }
            segments.reverse();
        }
    }
    segments
}
