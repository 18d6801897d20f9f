//! Cut-shape (dieline) requirement check

use crate::classify::SpotColorClassifier;
use crate::facts::DocumentFacts;
use crate::job::JobSpec;
use crate::report::{CriterionDetails, CriterionResult};
use serde::Serialize;

/// Detail fields for the dieline criterion
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DielineDetail {
    /// Whether the job declares a custom cut shape
    pub expected: bool,
    /// Whether a cut-path spot channel was found
    pub has_valid_dieline: bool,
}

/// Check for a required cut-path spot color
///
/// When the job declares no custom shape the check always passes; an unused
/// dieline channel in the file is not penalized.
pub fn check(
    facts: &DocumentFacts,
    spec: &JobSpec,
    classifier: &impl SpotColorClassifier,
) -> CriterionResult {
    let has_valid_dieline = facts.has_dieline(classifier);
    let details = CriterionDetails::Dieline(DielineDetail {
        expected: spec.dieline_required,
        has_valid_dieline,
    });

    if spec.dieline_required && !has_valid_dieline {
        CriterionResult::fail("Dieline spot color not found in the file", details)
    } else {
        CriterionResult::pass(details)
    }
}
