//! # kerf
//!
//! Living-hinge pattern generation for rigid sheet material.
//!
//! Given a rasterized silhouette and the viewbox of the vector document it
//! came from, this crate lays out dense columns of short vertical cuts
//! inside the shape so the sheet can bend along the horizontal axis.
//! Adjacent columns alternate their starting phase (cut-first vs
//! gap-first), producing a staggered brick pattern that avoids a single
//! weak crease line.
//!
//! Rasterization and file I/O are the caller's concern; the crate takes a
//! [`PixelGrid`], produces [`Segment`]s, and can map them back into the
//! document's coordinate space for re-embedding.

pub mod geometry;
pub mod grid;
pub mod hinge;
pub mod layout;
pub mod scale;
pub mod scan;
pub mod svg;

// Re-export common types at crate root for convenience.
pub use geometry::{Line, Point, Segment};
pub use grid::PixelGrid;
pub use hinge::{generate_hinge_fill, HingePattern};
pub use layout::{layout_run, LayoutPolicy, Parity};
pub use scale::{ConfigError, HingeSpec, PixelConstants, ScaleMap, Viewbox};
pub use scan::{Run, RunIter};
pub use svg::{embed_cut_lines, extract_viewbox, SvgError, CUT_COLOR};
