//! Scale mapping between pixel space and the vector document.
//!
//! The rasterized grid and the document viewbox define an affine map; the
//! physical design constants (material thickness, cut-length limits) get
//! converted through it exactly once, before any scanning starts. Bad
//! configuration fails here, fast, with nothing partially emitted.

use std::fmt;

/// Errors from configuration validation and constant conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The pixel grid has a zero dimension.
    EmptyGrid { width: u32, height: u32 },
    /// Viewbox width/height not positive, or a coordinate not finite.
    InvalidViewbox { width: f64, height: f64 },
    /// Channel buffer length does not match width * height.
    ChannelSize { expected: usize, got: usize },
    /// A physical design length is negative or not finite.
    BadLength { name: &'static str, value: f64 },
    /// `very_min_segment_length` exceeds `min_segment_length`.
    MinBelowVeryMin { min: f64, very_min: f64 },
    /// The column stride rounded to zero pixels at this resolution.
    ZeroColumnStride,
    /// Cut length and gap both rounded to zero pixels; the layout pitch
    /// would be zero.
    ZeroPitch,
    /// A run produced a cut count with a non-positive cut length; the
    /// constants are inconsistent with the grid resolution.
    CutLength { count: u32, len: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyGrid { width, height } => {
                write!(f, "pixel grid has zero dimension: {}x{}", width, height)
            }
            ConfigError::InvalidViewbox { width, height } => {
                write!(f, "viewbox width/height must be positive, got {}x{}", width, height)
            }
            ConfigError::ChannelSize { expected, got } => {
                write!(f, "channel buffer holds {} values, expected {}", got, expected)
            }
            ConfigError::BadLength { name, value } => {
                write!(f, "{} must be a non-negative finite length, got {}", name, value)
            }
            ConfigError::MinBelowVeryMin { min, very_min } => {
                write!(
                    f,
                    "very_min_segment_length ({}) exceeds min_segment_length ({})",
                    very_min, min
                )
            }
            ConfigError::ZeroColumnStride => {
                write!(f, "column stride rounds to zero pixels at this resolution")
            }
            ConfigError::ZeroPitch => {
                write!(f, "min segment length and gap both round to zero pixels")
            }
            ConfigError::CutLength { count, len } => {
                write!(f, "{} cuts of non-positive length {}; constants too large for grid", count, len)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Coordinate axis selector for length conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// The vector document's bounding viewbox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewbox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewbox {
    /// Create a viewbox, rejecting degenerate dimensions.
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Result<Self, ConfigError> {
        let finite = min_x.is_finite() && min_y.is_finite() && width.is_finite() && height.is_finite();
        if !finite || width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::InvalidViewbox { width, height });
        }
        Ok(Self { min_x, min_y, width, height })
    }
}

/// Affine map between pixel space and vector-document space.
///
/// Scales are in vector units per pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleMap {
    x_scale: f64,
    y_scale: f64,
    min_x: f64,
    min_y: f64,
}

impl ScaleMap {
    /// Derive the map from the viewbox and the rasterized grid dimensions.
    pub fn new(viewbox: &Viewbox, grid_width: u32, grid_height: u32) -> Result<Self, ConfigError> {
        if grid_width == 0 || grid_height == 0 {
            return Err(ConfigError::EmptyGrid { width: grid_width, height: grid_height });
        }
        Ok(Self {
            x_scale: viewbox.width / grid_width as f64,
            y_scale: viewbox.height / grid_height as f64,
            min_x: viewbox.min_x,
            min_y: viewbox.min_y,
        })
    }

    #[inline]
    pub fn x_scale(&self) -> f64 {
        self.x_scale
    }

    #[inline]
    pub fn y_scale(&self) -> f64 {
        self.y_scale
    }

    /// Pixel coordinates to vector-document coordinates.
    #[inline]
    pub fn to_vector(&self, x_px: f64, y_px: f64) -> (f64, f64) {
        (x_px * self.x_scale + self.min_x, y_px * self.y_scale + self.min_y)
    }

    /// Vector-document coordinates back to pixel coordinates.
    #[inline]
    pub fn to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        ((x - self.min_x) / self.x_scale, (y - self.min_y) / self.y_scale)
    }

    /// Convert a physical length to whole pixels along one axis.
    #[inline]
    pub fn len_to_pixels(&self, len: f64, axis: Axis) -> u32 {
        let scale = match axis {
            Axis::X => self.x_scale,
            Axis::Y => self.y_scale,
        };
        (len / scale).round() as u32
    }
}

/// Physical design constants for the hinge, in vector-document units.
///
/// The column stride and the gap between cuts both derive from the
/// material thickness: columns sit half a thickness apart and each gap
/// preserves one thickness of uncut material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HingeSpec {
    pub material_thickness: f64,
    pub min_segment_length: f64,
    pub very_min_segment_length: f64,
}

impl Default for HingeSpec {
    fn default() -> Self {
        Self {
            material_thickness: 10.0,
            min_segment_length: 20.0,
            very_min_segment_length: 3.0,
        }
    }
}

impl HingeSpec {
    /// Horizontal distance between sampled columns.
    #[inline]
    pub fn offset_between_columns(&self) -> f64 {
        self.material_thickness / 2.0
    }

    /// Uncut material between two consecutive cuts in a run.
    #[inline]
    pub fn gap_length(&self) -> f64 {
        self.material_thickness
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("material_thickness", self.material_thickness),
            ("min_segment_length", self.min_segment_length),
            ("very_min_segment_length", self.very_min_segment_length),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::BadLength { name, value });
            }
        }
        if self.very_min_segment_length > self.min_segment_length {
            return Err(ConfigError::MinBelowVeryMin {
                min: self.min_segment_length,
                very_min: self.very_min_segment_length,
            });
        }
        Ok(())
    }
}

/// [`HingeSpec`] converted to whole pixels, done once per pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelConstants {
    pub col_stride: u32,
    pub gap: u32,
    pub min_len: u32,
    pub very_min_len: u32,
}

impl PixelConstants {
    /// Convert a validated spec through the scale map.
    ///
    /// Horizontal quantities use the x scale, vertical ones the y scale.
    pub fn from_spec(spec: &HingeSpec, map: &ScaleMap) -> Result<Self, ConfigError> {
        spec.validate()?;

        let col_stride = map.len_to_pixels(spec.offset_between_columns(), Axis::X);
        if col_stride == 0 {
            return Err(ConfigError::ZeroColumnStride);
        }

        Ok(Self {
            col_stride,
            gap: map.len_to_pixels(spec.gap_length(), Axis::Y),
            min_len: map.len_to_pixels(spec.min_segment_length, Axis::Y),
            very_min_len: map.len_to_pixels(spec.very_min_segment_length, Axis::Y),
        })
    }
}
