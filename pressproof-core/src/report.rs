//! Preflight report model and aggregation
//!
//! A report is an insertion-ordered mapping from criterion to result. The
//! overall verdict is computed generically over every registered criterion,
//! so a newly added check can never be computed but left out of the
//! aggregate AND. Criteria that are declared but carry no real analysis yet
//! are registered as explicit not-evaluated results: vacuously valid, never
//! a silent pass and never silently omitted.

use crate::checks::color::ColorSpaceDetail;
use crate::checks::dieline::DielineDetail;
use crate::checks::dimensions::DimensionsDetail;
use crate::checks::page_count::PageCountDetail;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Identifier for a registered preflight criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Criterion {
    Dimensions,
    PageCount,
    ColorSpace,
    Dieline,
    Resolution,
    Fonts,
    Images,
    Transparency,
    PrintMarks,
    Overprint,
    SpecialFinishes,
    ContentVerification,
}

impl Criterion {
    /// Criteria the engine evaluates today
    pub const EVALUATED: [Criterion; 4] = [
        Criterion::Dimensions,
        Criterion::PageCount,
        Criterion::ColorSpace,
        Criterion::Dieline,
    ];

    /// Declared criteria with no document analysis behind them yet
    pub const EXTENSIONS: [Criterion; 8] = [
        Criterion::Resolution,
        Criterion::Fonts,
        Criterion::Images,
        Criterion::Transparency,
        Criterion::PrintMarks,
        Criterion::Overprint,
        Criterion::SpecialFinishes,
        Criterion::ContentVerification,
    ];

    /// Stable name used as the report map key
    pub fn name(&self) -> &'static str {
        match self {
            Criterion::Dimensions => "dimensions",
            Criterion::PageCount => "pageCount",
            Criterion::ColorSpace => "colorSpace",
            Criterion::Dieline => "dieline",
            Criterion::Resolution => "resolution",
            Criterion::Fonts => "fonts",
            Criterion::Images => "images",
            Criterion::Transparency => "transparency",
            Criterion::PrintMarks => "printMarks",
            Criterion::Overprint => "overprint",
            Criterion::SpecialFinishes => "specialFinishes",
            Criterion::ContentVerification => "contentVerification",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome class for one criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Verdict {
    Pass,
    Fail,
    NotEvaluated,
}

impl Verdict {
    /// `Fail` is the only verdict that can break a report; a criterion that
    /// was never evaluated is vacuously valid.
    pub fn is_valid(&self) -> bool {
        !matches!(self, Verdict::Fail)
    }
}

/// Criterion-specific detail fields, flattened into the serialized result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CriterionDetails {
    Dimensions(DimensionsDetail),
    PageCount(PageCountDetail),
    ColorSpace(ColorSpaceDetail),
    Dieline(DielineDetail),
    NotEvaluated {},
}

/// Outcome of a single criterion
///
/// Construct through [`CriterionResult::pass`], [`CriterionResult::fail`]
/// or [`CriterionResult::not_evaluated`]; the constructors keep the
/// invariant that a diagnostic message is present exactly when the verdict
/// is `Fail`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionResult {
    verdict: Verdict,
    is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(flatten)]
    details: CriterionDetails,
}

impl CriterionResult {
    /// A criterion that evaluated and passed
    pub fn pass(details: CriterionDetails) -> Self {
        Self {
            verdict: Verdict::Pass,
            is_valid: true,
            error: None,
            details,
        }
    }

    /// A criterion that evaluated and failed, with a diagnostic
    pub fn fail(error: impl Into<String>, details: CriterionDetails) -> Self {
        Self {
            verdict: Verdict::Fail,
            is_valid: false,
            error: Some(error.into()),
            details,
        }
    }

    /// A declared criterion that performed no document analysis.
    /// Vacuously valid so it can never mask a real failure.
    pub fn not_evaluated() -> Self {
        Self {
            verdict: Verdict::NotEvaluated,
            is_valid: true,
            error: None,
            details: CriterionDetails::NotEvaluated {},
        }
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Diagnostic message; present exactly when the verdict is `Fail`
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn details(&self) -> &CriterionDetails {
        &self.details
    }
}

/// Aggregate preflight report: one result per registered criterion
///
/// Read-only once built; the overall verdict always equals the AND of every
/// registered criterion's validity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreflightReport {
    overall_valid: bool,
    criteria: IndexMap<Criterion, CriterionResult>,
}

impl PreflightReport {
    /// Fold the four evaluated criteria into a report
    ///
    /// Every extension criterion is registered as explicitly not-evaluated,
    /// so the serialized report always carries the full criterion set.
    pub fn aggregate(
        dimensions: CriterionResult,
        page_count: CriterionResult,
        color_space: CriterionResult,
        dieline: CriterionResult,
    ) -> Self {
        let mut criteria = IndexMap::new();
        criteria.insert(Criterion::Dimensions, dimensions);
        criteria.insert(Criterion::PageCount, page_count);
        criteria.insert(Criterion::ColorSpace, color_space);
        criteria.insert(Criterion::Dieline, dieline);
        for criterion in Criterion::EXTENSIONS {
            criteria.insert(criterion, CriterionResult::not_evaluated());
        }

        let overall_valid = criteria.values().all(CriterionResult::is_valid);
        Self {
            overall_valid,
            criteria,
        }
    }

    pub fn overall_valid(&self) -> bool {
        self.overall_valid
    }

    /// Result for one criterion
    pub fn criterion(&self, id: Criterion) -> Option<&CriterionResult> {
        self.criteria.get(&id)
    }

    /// All registered criteria in report order
    pub fn criteria(&self) -> impl Iterator<Item = (Criterion, &CriterionResult)> {
        self.criteria.iter().map(|(id, result)| (*id, result))
    }

    /// Criteria that evaluated and failed
    pub fn failures(&self) -> impl Iterator<Item = (Criterion, &CriterionResult)> {
        self.criteria()
            .filter(|(_, result)| result.verdict() == Verdict::Fail)
    }

    /// Export to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to compact JSON
    pub fn to_json_compact(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::PageCountClass;

    fn page_count_pass() -> CriterionResult {
        CriterionResult::pass(CriterionDetails::PageCount(PageCountDetail {
            expected: PageCountClass::ExactlyOne,
            actual: 1,
        }))
    }

    fn page_count_fail() -> CriterionResult {
        CriterionResult::fail(
            "Expected 1 page but the file has 3 pages",
            CriterionDetails::PageCount(PageCountDetail {
                expected: PageCountClass::ExactlyOne,
                actual: 3,
            }),
        )
    }

    #[test]
    fn test_aggregate_all_pass() {
        let report = PreflightReport::aggregate(
            page_count_pass(),
            page_count_pass(),
            page_count_pass(),
            page_count_pass(),
        );
        assert!(report.overall_valid());
        assert_eq!(report.failures().count(), 0);
    }

    #[test]
    fn test_single_failure_breaks_overall() {
        let report = PreflightReport::aggregate(
            page_count_pass(),
            page_count_fail(),
            page_count_pass(),
            page_count_pass(),
        );
        assert!(!report.overall_valid());
        let failed: Vec<Criterion> = report.failures().map(|(id, _)| id).collect();
        assert_eq!(failed, vec![Criterion::PageCount]);
    }

    #[test]
    fn test_extension_criteria_are_registered_and_vacuous() {
        let report = PreflightReport::aggregate(
            page_count_pass(),
            page_count_pass(),
            page_count_pass(),
            page_count_pass(),
        );
        for criterion in Criterion::EXTENSIONS {
            let result = report.criterion(criterion).expect("criterion registered");
            assert_eq!(result.verdict(), Verdict::NotEvaluated);
            assert!(result.is_valid());
            assert!(result.error().is_none());
        }
        // vacuous results never mask a real failure
        assert!(report.overall_valid());
    }

    #[test]
    fn test_error_present_iff_fail() {
        assert!(page_count_pass().error().is_none());
        assert!(page_count_fail().error().is_some());
        assert!(CriterionResult::not_evaluated().error().is_none());
    }

    #[test]
    fn test_report_order_is_stable() {
        let report = PreflightReport::aggregate(
            page_count_pass(),
            page_count_pass(),
            page_count_pass(),
            page_count_pass(),
        );
        let order: Vec<Criterion> = report.criteria().map(|(id, _)| id).collect();
        assert_eq!(
            &order[..4],
            &[
                Criterion::Dimensions,
                Criterion::PageCount,
                Criterion::ColorSpace,
                Criterion::Dieline,
            ]
        );
        assert_eq!(&order[4..], &Criterion::EXTENSIONS);
    }

    #[test]
    fn test_json_shape_uses_camel_case_keys() {
        let report = PreflightReport::aggregate(
            page_count_pass(),
            page_count_fail(),
            page_count_pass(),
            page_count_pass(),
        );
        let json: serde_json::Value =
            serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["overallValid"], false);
        assert_eq!(json["criteria"]["pageCount"]["isValid"], false);
        assert_eq!(json["criteria"]["pageCount"]["verdict"], "fail");
        assert_eq!(json["criteria"]["pageCount"]["actual"], 3);
        assert_eq!(
            json["criteria"]["resolution"]["verdict"],
            "notEvaluated"
        );
        // passing criteria carry no error key at all
        assert!(json["criteria"]["dimensions"]
            .as_object()
            .unwrap()
            .get("error")
            .is_none());
    }
}
