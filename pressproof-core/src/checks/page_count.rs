//! Page count classification

use crate::facts::DocumentFacts;
use crate::job::{JobSpec, PageCountClass};
use crate::report::{CriterionDetails, CriterionResult};
use serde::Serialize;

/// Detail fields for the page count criterion
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCountDetail {
    /// Declared page count class
    pub expected: PageCountClass,
    /// Pages found in the file
    pub actual: u32,
}

/// True when `actual` satisfies the declared class
pub fn classify(actual: u32, class: PageCountClass) -> bool {
    match class {
        PageCountClass::ExactlyOne => actual == 1,
        PageCountClass::ExactlyTwo => actual == 2,
        PageCountClass::TwoOrMore => actual >= 2,
    }
}

/// Check the file's page count against the declared class
pub fn check(facts: &DocumentFacts, spec: &JobSpec) -> CriterionResult {
    let details = CriterionDetails::PageCount(PageCountDetail {
        expected: spec.page_count,
        actual: facts.page_count,
    });

    if classify(facts.page_count, spec.page_count) {
        CriterionResult::pass(details)
    } else {
        CriterionResult::fail(
            format!(
                "Expected {} but the file has {}",
                spec.page_count.describe(),
                pluralize_pages(facts.page_count)
            ),
            details,
        )
    }
}

fn pluralize_pages(count: u32) -> String {
    if count == 1 {
        "1 page".to_string()
    } else {
        format!("{count} pages")
    }
}
