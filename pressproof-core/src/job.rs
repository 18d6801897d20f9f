//! Operator-declared job expectations

use crate::error::{PreflightError, Result};
use crate::geometry::Dimension;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Expected number of printed sides for the job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageCountClass {
    /// Single-sided piece: exactly one page
    #[serde(rename = "1")]
    ExactlyOne,
    /// Double-sided piece: exactly two pages
    #[serde(rename = "2")]
    ExactlyTwo,
    /// Multi-page piece: two pages or more
    #[serde(rename = "multi")]
    TwoOrMore,
}

impl PageCountClass {
    /// Phrasing used in diagnostics
    pub fn describe(&self) -> &'static str {
        match self {
            PageCountClass::ExactlyOne => "1 page",
            PageCountClass::ExactlyTwo => "2 pages",
            PageCountClass::TwoOrMore => "2 or more pages",
        }
    }
}

impl FromStr for PageCountClass {
    type Err = PreflightError;

    /// Accepts the order-form tokens: `1`, `2` or `multi`
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "one" => Ok(PageCountClass::ExactlyOne),
            "2" | "two" => Ok(PageCountClass::ExactlyTwo),
            "multi" | "2+" => Ok(PageCountClass::TwoOrMore),
            other => Err(PreflightError::UnknownPageCountClass(other.to_string())),
        }
    }
}

impl fmt::Display for PageCountClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Declared ink requirement for the job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InkProfile {
    /// Four-color process only
    #[serde(rename = "CMYK")]
    Cmyk,
    /// Four-color process plus a white ink plate
    #[serde(rename = "CMYK+WHITE")]
    CmykWhite,
    /// White ink plate only, no other ink channels
    #[serde(rename = "WHITE_ONLY")]
    WhiteOnly,
    /// Four-color process plus at least one named spot ink
    #[serde(rename = "CMYK+PANTONE")]
    CmykPantone,
    /// Black plate only
    #[serde(rename = "BLACK_ONLY")]
    BlackOnly,
}

impl InkProfile {
    /// Label as shown on the order form
    pub fn label(&self) -> &'static str {
        match self {
            InkProfile::Cmyk => "CMYK",
            InkProfile::CmykWhite => "CMYK+WHITE",
            InkProfile::WhiteOnly => "WHITE ONLY",
            InkProfile::CmykPantone => "CMYK+PANTONE",
            InkProfile::BlackOnly => "BLACK ONLY",
        }
    }
}

impl FromStr for InkProfile {
    type Err = PreflightError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s
            .trim()
            .to_ascii_uppercase()
            .replace(['-', ' '], "_")
            .replace('+', "_");
        match normalized.as_str() {
            "CMYK" => Ok(InkProfile::Cmyk),
            "CMYK_WHITE" => Ok(InkProfile::CmykWhite),
            "WHITE_ONLY" | "WHITE" => Ok(InkProfile::WhiteOnly),
            "CMYK_PANTONE" | "PANTONE" => Ok(InkProfile::CmykPantone),
            "BLACK_ONLY" | "BLACK" => Ok(InkProfile::BlackOnly),
            _ => Err(PreflightError::UnknownInkProfile(s.trim().to_string())),
        }
    }
}

impl fmt::Display for InkProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated set of operator expectations for one document
///
/// Created once per validation run from user input and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSpec {
    /// Expected trim size: the final cut size, excluding bleed
    pub trim: Dimension,
    /// Expected printed sides
    pub page_count: PageCountClass,
    /// Declared ink requirement
    pub ink_profile: InkProfile,
    /// Whether the piece has a custom cut shape (requires a dieline channel)
    pub dieline_required: bool,
}

impl JobSpec {
    /// Build a job spec, rejecting non-positive trim dimensions
    pub fn new(
        trim: Dimension,
        page_count: PageCountClass,
        ink_profile: InkProfile,
        dieline_required: bool,
    ) -> Result<Self> {
        if !trim.is_positive() {
            return Err(PreflightError::InvalidTrimSize {
                width: trim.width,
                height: trim.height,
            });
        }
        Ok(Self {
            trim,
            page_count,
            ink_profile,
            dieline_required,
        })
    }
}
