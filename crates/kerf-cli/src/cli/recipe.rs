//! Material recipes: declarative YAML settings for a generation run.
//!
//! A recipe captures the material and raster settings for a job so they
//! can be versioned next to the design file:
//!
//! ```yaml
//! name: 3mm plywood hinge
//! material:
//!   thickness: 3.0
//!   min_segment_length: 20.0
//!   very_min_segment_length: 3.0
//! raster:
//!   width: 1024
//! policy: balanced
//! ```
//!
//! Explicit CLI flags always win over recipe values.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use kerf::{HingeSpec, LayoutPolicy};

/// A generation recipe loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe name/title
    #[serde(default)]
    pub name: Option<String>,

    /// Material parameters, in document units
    pub material: Material,

    /// Rasterization settings
    #[serde(default)]
    pub raster: RasterSettings,

    /// Layout policy name ("balanced" or "greedy")
    #[serde(default = "default_policy")]
    pub policy: String,
}

/// Material parameters for the hinge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    /// Sheet thickness in document units
    pub thickness: f64,

    /// Preferred minimum cut length
    #[serde(default = "default_min_segment")]
    pub min_segment_length: f64,

    /// Absolute minimum cut length before a run is discarded
    #[serde(default = "default_very_min_segment")]
    pub very_min_segment_length: f64,
}

/// Rasterization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RasterSettings {
    /// Raster width in pixels
    #[serde(default = "default_raster_width")]
    pub width: u32,
}

impl Default for RasterSettings {
    fn default() -> Self {
        Self { width: default_raster_width() }
    }
}

fn default_policy() -> String {
    "balanced".to_string()
}

fn default_min_segment() -> f64 {
    20.0
}

fn default_very_min_segment() -> f64 {
    3.0
}

fn default_raster_width() -> u32 {
    1024
}

impl Recipe {
    /// Load and validate a recipe file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Self::parse(&content)
    }

    /// Parse and validate recipe YAML.
    pub fn parse(content: &str) -> Result<Self, String> {
        let recipe: Recipe =
            serde_yaml::from_str(content).map_err(|e| format!("Invalid recipe: {}", e))?;
        if LayoutPolicy::from_name(&recipe.policy).is_none() {
            return Err(format!(
                "Unknown policy in recipe: '{}'. Use 'balanced' or 'greedy'.",
                recipe.policy
            ));
        }
        Ok(recipe)
    }

    /// The material parameters as a hinge spec.
    pub fn hinge_spec(&self) -> HingeSpec {
        HingeSpec {
            material_thickness: self.material.thickness,
            min_segment_length: self.material.min_segment_length,
            very_min_segment_length: self.material.very_min_segment_length,
        }
    }

    /// The validated layout policy.
    pub fn policy(&self) -> LayoutPolicy {
        LayoutPolicy::from_name(&self.policy).unwrap_or_default()
    }
}
