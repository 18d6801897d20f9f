//! Geometric value types for page measurements

use serde::{Deserialize, Serialize};
use std::fmt;

/// PDF user-space points per inch
pub const POINTS_PER_INCH: f64 = 72.0;

/// A width/height pair in inches
///
/// All engine arithmetic happens in inches. The external PDF-structure
/// reader reports box coordinates in points (1/72 inch); convert once with
/// [`Dimension::from_points`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    /// Width in inches
    pub width: f64,
    /// Height in inches
    pub height: f64,
}

impl Dimension {
    /// Create a new dimension from inch values
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Convert a point-space width/height pair to inches
    pub fn from_points(width_pt: f64, height_pt: f64) -> Self {
        Self {
            width: width_pt / POINTS_PER_INCH,
            height: height_pt / POINTS_PER_INCH,
        }
    }

    /// Grow both axes by a uniform per-side margin (adds 2x margin per axis)
    pub fn inflate(&self, margin: f64) -> Self {
        Self::new(self.width + 2.0 * margin, self.height + 2.0 * margin)
    }

    /// Shrink both axes by a uniform per-side margin (removes 2x margin per axis)
    pub fn deflate(&self, margin: f64) -> Self {
        Self::new(self.width - 2.0 * margin, self.height - 2.0 * margin)
    }

    /// True when both axes match `other` within `tolerance` inches
    pub fn approx_eq(&self, other: &Dimension, tolerance: f64) -> bool {
        (self.width - other.width).abs() <= tolerance
            && (self.height - other.height).abs() <= tolerance
    }

    /// True when both axes are strictly positive
    pub fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}\" x {:.3}\"", self.width, self.height)
    }
}
