//! Trim-size matching under bleed hypotheses
//!
//! A production file may arrive at the exact trim size or inflated by a
//! uniform bleed allowance on all four sides. The matcher tries the exact
//! size first, then each accepted allowance in priority order, and reports
//! the inferred trim size together with the allowance that matched. When
//! nothing matches, the diagnostic names every size that would have passed
//! so the operator knows exactly what to resubmit.

use crate::facts::DocumentFacts;
use crate::geometry::Dimension;
use crate::job::JobSpec;
use crate::report::{CriterionDetails, CriterionResult};
use serde::Serialize;
use tracing::debug;

/// Comparison tolerance in inches. Absorbs PDF coordinate rounding, not
/// design error; deliberately not configurable.
pub const SIZE_TOLERANCE: f64 = 0.01;

/// A candidate uniform bleed allowance
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BleedAllowance {
    /// Per-side allowance in inches
    pub inches: f64,
    /// Production label used in diagnostics
    pub label: &'static str,
}

/// Accepted bleed allowances, tried in priority order. A document that
/// matches the 0.125" hypothesis is always reported as 0.125", never as
/// 0.0625".
pub const BLEED_ALLOWANCES: [BleedAllowance; 2] = [
    BleedAllowance {
        inches: 0.125,
        label: "recommended",
    },
    BleedAllowance {
        inches: 0.0625,
        label: "minimum",
    },
];

/// Detail fields for the dimensions criterion
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionsDetail {
    /// Expected trim size
    pub expected: Dimension,
    /// Raw box size detected in the file
    pub actual: Dimension,
    /// Detected size with the inferred bleed subtracted, i.e. the trim size
    /// the file would cut to
    pub actual_with_bleed: Dimension,
    /// Inferred per-side bleed in inches; 0 when the file is at exact trim
    pub bleed_size: f64,
}

/// Match the detected box size against the expected trim size
pub fn check(facts: &DocumentFacts, spec: &JobSpec) -> CriterionResult {
    let expected = spec.trim;
    let actual = facts.box_size();

    // A reader that could not find a usable page box must fail closed.
    if !actual.is_positive() {
        return CriterionResult::fail(
            format!("No usable page box in the file (detected size {actual})"),
            CriterionDetails::Dimensions(DimensionsDetail {
                expected,
                actual,
                actual_with_bleed: actual,
                bleed_size: 0.0,
            }),
        );
    }

    if actual.approx_eq(&expected, SIZE_TOLERANCE) {
        debug!(width = actual.width, height = actual.height, "box matches trim size exactly");
        return CriterionResult::pass(CriterionDetails::Dimensions(DimensionsDetail {
            expected,
            actual,
            actual_with_bleed: actual,
            bleed_size: 0.0,
        }));
    }

    for allowance in BLEED_ALLOWANCES {
        if actual.approx_eq(&expected.inflate(allowance.inches), SIZE_TOLERANCE) {
            debug!(bleed = allowance.inches, "box matches trim size plus bleed");
            return CriterionResult::pass(CriterionDetails::Dimensions(DimensionsDetail {
                expected,
                actual,
                actual_with_bleed: actual.deflate(allowance.inches),
                bleed_size: allowance.inches,
            }));
        }
    }

    CriterionResult::fail(
        size_mismatch_message(&expected, &actual),
        CriterionDetails::Dimensions(DimensionsDetail {
            expected,
            actual,
            actual_with_bleed: actual,
            bleed_size: 0.0,
        }),
    )
}

/// Diagnostic naming the detected size, the expected trim size and every
/// accepted total size
fn size_mismatch_message(expected: &Dimension, actual: &Dimension) -> String {
    let mut message = format!(
        "Detected size {actual} does not match the expected trim size {expected}.\n\
         Accepted sizes:\n  {expected} (no bleed)"
    );
    for allowance in BLEED_ALLOWANCES {
        let total = expected.inflate(allowance.inches);
        message.push_str(&format!(
            "\n  {total} ({}\" {} bleed)",
            allowance.inches, allowance.label
        ));
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::{InkProfile, PageCountClass};
    use crate::report::Verdict;

    fn spec_4x6() -> JobSpec {
        JobSpec::new(
            Dimension::new(4.0, 6.0),
            PageCountClass::ExactlyOne,
            InkProfile::Cmyk,
            false,
        )
        .unwrap()
    }

    fn facts_with_box(width_in: f64, height_in: f64) -> DocumentFacts {
        DocumentFacts::new(width_in * 72.0, height_in * 72.0, 1, vec![])
    }

    fn detail(result: &CriterionResult) -> &DimensionsDetail {
        match result.details() {
            CriterionDetails::Dimensions(detail) => detail,
            other => panic!("expected dimensions detail, got {other:?}"),
        }
    }

    #[test]
    fn test_exact_trim_match() {
        let result = check(&facts_with_box(4.0, 6.0), &spec_4x6());
        assert!(result.is_valid());
        assert_eq!(detail(&result).bleed_size, 0.0);
        assert_eq!(detail(&result).actual_with_bleed, Dimension::new(4.0, 6.0));
    }

    #[test]
    fn test_exact_match_within_tolerance() {
        let result = check(&facts_with_box(4.008, 5.994), &spec_4x6());
        assert!(result.is_valid());
        assert_eq!(detail(&result).bleed_size, 0.0);
    }

    #[test]
    fn test_recommended_bleed_match() {
        let result = check(&facts_with_box(4.25, 6.25), &spec_4x6());
        assert!(result.is_valid());
        let detail = detail(&result);
        assert_eq!(detail.bleed_size, 0.125);
        assert!(detail
            .actual_with_bleed
            .approx_eq(&Dimension::new(4.0, 6.0), 1e-9));
    }

    #[test]
    fn test_minimum_bleed_match() {
        let result = check(&facts_with_box(4.125, 6.125), &spec_4x6());
        assert!(result.is_valid());
        assert_eq!(detail(&result).bleed_size, 0.0625);
    }

    #[test]
    fn test_recommended_bleed_takes_priority() {
        // a file at expected + 0.125" per side reports the recommended
        // allowance, never the minimum one
        let result = check(&facts_with_box(4.25, 6.25), &spec_4x6());
        assert_eq!(detail(&result).bleed_size, 0.125);
    }

    #[test]
    fn test_single_axis_mismatch_fails() {
        let result = check(&facts_with_box(4.0, 6.5), &spec_4x6());
        assert!(!result.is_valid());
        assert_eq!(result.verdict(), Verdict::Fail);

        let result = check(&facts_with_box(4.25, 6.0), &spec_4x6());
        assert!(!result.is_valid());
    }

    #[test]
    fn test_mismatch_message_names_all_accepted_sizes() {
        let result = check(&facts_with_box(5.0, 7.0), &spec_4x6());
        let message = result.error().unwrap();
        assert!(message.contains("5.000\" x 7.000\""));
        assert!(message.contains("4.000\" x 6.000\""));
        assert!(message.contains("4.250\" x 6.250\""));
        assert!(message.contains("4.125\" x 6.125\""));
    }

    #[test]
    fn test_zero_box_fails_closed() {
        let result = check(&facts_with_box(0.0, 0.0), &spec_4x6());
        assert!(!result.is_valid());
        assert!(result.error().unwrap().contains("No usable page box"));
    }
}
