//! Top-level preflight engine
//!
//! The runner holds the spot-color classification strategy and feeds one
//! facts snapshot through every registered check. Each validation run is
//! stateless: a full `(DocumentFacts, JobSpec)` pair goes in, a complete
//! [`PreflightReport`] comes out, and nothing is cached between runs.

use crate::checks::{color, dieline, dimensions, page_count};
use crate::classify::{NameHeuristics, SpotColorClassifier};
use crate::facts::DocumentFacts;
use crate::job::JobSpec;
use crate::report::PreflightReport;
use tracing::debug;

/// Runs all registered checks over one document's facts
///
/// Substitute a custom [`SpotColorClassifier`] to adapt white-ink or
/// dieline naming conventions without touching any check logic.
#[derive(Debug, Clone, Default)]
pub struct PreflightRunner<C: SpotColorClassifier = NameHeuristics> {
    classifier: C,
}

impl PreflightRunner<NameHeuristics> {
    /// Runner with the stock name heuristics
    pub fn new() -> Self {
        Self {
            classifier: NameHeuristics,
        }
    }
}

impl<C: SpotColorClassifier> PreflightRunner<C> {
    /// Runner with a custom classification strategy
    pub fn with_classifier(classifier: C) -> Self {
        Self { classifier }
    }

    /// Run every check and fold the outcomes into a report
    ///
    /// Checks are pure and independent; the run order here is not a
    /// contract. A report is always produced, whatever the findings.
    pub fn run(&self, facts: &DocumentFacts, spec: &JobSpec) -> PreflightReport {
        let facts = facts.clone().normalized();

        let report = PreflightReport::aggregate(
            dimensions::check(&facts, spec),
            page_count::check(&facts, spec),
            color::check(&facts, spec, &self.classifier),
            dieline::check(&facts, spec, &self.classifier),
        );

        debug!(overall = report.overall_valid(), "preflight complete");
        report
    }
}

/// Run a preflight with the default name heuristics
pub fn run_preflight(facts: &DocumentFacts, spec: &JobSpec) -> PreflightReport {
    PreflightRunner::new().run(facts, spec)
}
