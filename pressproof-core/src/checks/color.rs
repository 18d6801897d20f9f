//! Ink-requirement evaluation over the spot-color inventory
//!
//! The evaluator works on channel *names*: white-ink presence and dieline
//! exclusion both come from the injected [`SpotColorClassifier`]. Rules are
//! applied in a fixed precedence; profiles with no spot-color precondition
//! (CMYK, BLACK ONLY) pass through an explicit arm rather than a default
//! fallthrough, so adding a rule for them later is a visible change.

use crate::classify::SpotColorClassifier;
use crate::facts::DocumentFacts;
use crate::job::{InkProfile, JobSpec};
use crate::report::{CriterionDetails, CriterionResult};
use serde::Serialize;
use tracing::debug;

/// Detail fields for the color space criterion
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSpaceDetail {
    /// Declared ink requirement
    pub expected_profile: InkProfile,
    /// Label for the dominant device color space seen in the file
    pub detected_profile: String,
    /// Whether a white ink plate was recognized
    pub has_white_ink: bool,
    /// Full spot-color inventory in discovery order
    pub spot_colors: Vec<String>,
}

/// Label for the dominant device color space in the facts snapshot
fn detected_profile(facts: &DocumentFacts) -> &'static str {
    if facts.color_spaces.iter().any(|cs| cs.contains("DeviceCMYK")) {
        "CMYK"
    } else if facts.color_spaces.iter().any(|cs| cs.contains("DeviceRGB")) {
        "RGB"
    } else {
        "Unknown"
    }
}

/// Check the file's ink inventory against the declared requirement
pub fn check(
    facts: &DocumentFacts,
    spec: &JobSpec,
    classifier: &impl SpotColorClassifier,
) -> CriterionResult {
    let has_white_ink = facts.has_white_ink(classifier);
    let ink_channels = facts.ink_channels(classifier);

    let details = CriterionDetails::ColorSpace(ColorSpaceDetail {
        expected_profile: spec.ink_profile,
        detected_profile: detected_profile(facts).to_string(),
        has_white_ink,
        spot_colors: facts.spot_color_names.clone(),
    });

    debug!(
        profile = %spec.ink_profile,
        white_ink = has_white_ink,
        ink_channels = ink_channels.len(),
        "evaluating ink requirement"
    );

    let finding = match spec.ink_profile {
        InkProfile::CmykWhite if !has_white_ink => Some("White ink color not found"),
        InkProfile::WhiteOnly if !has_white_ink => Some("White ink color not found"),
        InkProfile::WhiteOnly if ink_channels.len() > 1 => {
            Some("File contains colors other than white ink")
        }
        InkProfile::CmykPantone if ink_channels.is_empty() => Some("No spot colors found"),
        // No spot-color precondition today for plain process or black-only
        // work; future rules for them land here, not in a catch-all.
        InkProfile::Cmyk | InkProfile::BlackOnly => None,
        InkProfile::CmykWhite | InkProfile::WhiteOnly | InkProfile::CmykPantone => None,
    };

    match finding {
        Some(error) => CriterionResult::fail(error, details),
        None => CriterionResult::pass(details),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::NameHeuristics;
    use crate::geometry::Dimension;
    use crate::job::PageCountClass;

    fn facts_with_spots(names: &[&str]) -> DocumentFacts {
        DocumentFacts::new(
            288.0,
            432.0,
            1,
            names.iter().map(|n| n.to_string()).collect(),
        )
    }

    fn spec_with_profile(profile: InkProfile) -> JobSpec {
        JobSpec::new(
            Dimension::new(4.0, 6.0),
            PageCountClass::ExactlyOne,
            profile,
            false,
        )
        .unwrap()
    }

    fn run(names: &[&str], profile: InkProfile) -> CriterionResult {
        check(
            &facts_with_spots(names),
            &spec_with_profile(profile),
            &NameHeuristics,
        )
    }

    #[test]
    fn test_cmyk_white_requires_white_plate() {
        let result = run(&["White_Ink"], InkProfile::CmykWhite);
        assert!(result.is_valid());

        let result = run(&[], InkProfile::CmykWhite);
        assert!(!result.is_valid());
        assert_eq!(result.error().unwrap(), "White ink color not found");
    }

    #[test]
    fn test_white_only_rejects_extra_ink() {
        let result = run(&["White_Ink"], InkProfile::WhiteOnly);
        assert!(result.is_valid());

        let result = run(&["White_Ink", "PANTONE 186 C"], InkProfile::WhiteOnly);
        assert!(!result.is_valid());
        assert_eq!(
            result.error().unwrap(),
            "File contains colors other than white ink"
        );
    }

    #[test]
    fn test_white_only_without_white_plate() {
        let result = run(&[], InkProfile::WhiteOnly);
        assert!(!result.is_valid());
        assert_eq!(result.error().unwrap(), "White ink color not found");
    }

    #[test]
    fn test_white_only_ignores_dieline_channel() {
        // the cut-path channel is not ink
        let result = run(&["White_Ink", "Dieline"], InkProfile::WhiteOnly);
        assert!(result.is_valid());
    }

    #[test]
    fn test_cmyk_pantone_requires_a_spot_ink() {
        let result = run(&["PANTONE 186 C"], InkProfile::CmykPantone);
        assert!(result.is_valid());

        let result = run(&[], InkProfile::CmykPantone);
        assert!(!result.is_valid());
        assert_eq!(result.error().unwrap(), "No spot colors found");

        // a lone dieline channel does not satisfy the spot-ink requirement
        let result = run(&["Dieline"], InkProfile::CmykPantone);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_cmyk_and_black_only_have_no_precondition() {
        assert!(run(&[], InkProfile::Cmyk).is_valid());
        assert!(run(&["PANTONE 186 C"], InkProfile::Cmyk).is_valid());
        assert!(run(&[], InkProfile::BlackOnly).is_valid());
    }

    #[test]
    fn test_detected_profile_label() {
        let facts = facts_with_spots(&[])
            .with_color_spaces(vec!["DeviceCMYK".to_string(), "DeviceGray".to_string()]);
        let result = check(
            &facts,
            &spec_with_profile(InkProfile::Cmyk),
            &NameHeuristics,
        );
        match result.details() {
            CriterionDetails::ColorSpace(detail) => {
                assert_eq!(detail.detected_profile, "CMYK");
            }
            other => panic!("expected color space detail, got {other:?}"),
        }

        let facts = facts_with_spots(&[]).with_color_spaces(vec!["DeviceRGB".to_string()]);
        let result = check(
            &facts,
            &spec_with_profile(InkProfile::Cmyk),
            &NameHeuristics,
        );
        match result.details() {
            CriterionDetails::ColorSpace(detail) => {
                assert_eq!(detail.detected_profile, "RGB");
            }
            _ => unreachable!(),
        }
    }
}
