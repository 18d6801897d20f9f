//! Structural facts extracted from a PDF document
//!
//! Facts are produced by an external PDF-structure reader (box coordinates
//! from the trim or media box, named Separation/DeviceN spot colors across
//! page resource dictionaries including nested XObjects, page count). This
//! crate never touches PDF bytes itself; it consumes one immutable snapshot
//! per document.

use crate::classify::SpotColorClassifier;
use crate::geometry::Dimension;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One document's extracted facts, produced once and consumed by all checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFacts {
    /// Width of the trim or media box in PDF points (1/72 inch)
    pub box_width_pt: f64,
    /// Height of the trim or media box in PDF points
    pub box_height_pt: f64,
    /// Total number of pages
    pub page_count: u32,
    /// Named spot colors in discovery order
    #[serde(default)]
    pub spot_color_names: Vec<String>,
    /// Device color-space names seen in content streams, e.g. "DeviceCMYK"
    #[serde(default)]
    pub color_spaces: Vec<String>,
}

impl DocumentFacts {
    /// Build a facts snapshot, deduplicating the spot-color list
    pub fn new(
        box_width_pt: f64,
        box_height_pt: f64,
        page_count: u32,
        spot_color_names: Vec<String>,
    ) -> Self {
        Self {
            box_width_pt,
            box_height_pt,
            page_count,
            spot_color_names,
            color_spaces: Vec::new(),
        }
        .normalized()
    }

    /// Attach the device color-space inventory
    pub fn with_color_spaces(mut self, color_spaces: Vec<String>) -> Self {
        self.color_spaces = color_spaces;
        self
    }

    /// Drop duplicate spot-color names, case-insensitively, keeping the
    /// first occurrence so discovery order is preserved
    pub fn normalized(mut self) -> Self {
        let mut seen = HashSet::new();
        self.spot_color_names
            .retain(|name| seen.insert(name.trim().to_lowercase()));
        self
    }

    /// Detected box size in inches
    pub fn box_size(&self) -> Dimension {
        Dimension::from_points(self.box_width_pt, self.box_height_pt)
    }

    /// True when any spot channel is classified as a white ink plate
    pub fn has_white_ink(&self, classifier: &impl SpotColorClassifier) -> bool {
        self.spot_color_names
            .iter()
            .any(|name| classifier.is_white_ink(name))
    }

    /// True when any spot channel is classified as a cut path
    pub fn has_dieline(&self, classifier: &impl SpotColorClassifier) -> bool {
        self.spot_color_names
            .iter()
            .any(|name| classifier.is_dieline(name))
    }

    /// Spot channels that count as ink. A dieline channel signals the cut
    /// path and is never counted as ink.
    pub fn ink_channels(&self, classifier: &impl SpotColorClassifier) -> Vec<&str> {
        self.spot_color_names
            .iter()
            .filter(|name| !classifier.is_dieline(name))
            .map(String::as_str)
            .collect()
    }
}
