//! # pressproof
//!
//! Print-production preflight validation for PDF documents.
//!
//! Given the structural facts of a PDF (page box geometry, spot-color
//! inventory, page count) and the operator's declared expectations (trim
//! size, printed sides, ink requirement, cut shape), the engine produces a
//! per-criterion pass/fail report with production-grade diagnostics:
//! rounding tolerances, multi-hypothesis bleed inference and semantic
//! spot-color classification.
//!
//! The engine never reads PDF bytes itself. An external PDF-structure
//! reader supplies a [`DocumentFacts`] snapshot (box coordinates in points,
//! deduplicated Separation/DeviceN spot-color names, page count); every
//! check is a pure function over that snapshot.
//!
//! ## Quick Start
//!
//! ```rust
//! use pressproof::{
//!     run_preflight, Dimension, DocumentFacts, InkProfile, JobSpec, PageCountClass,
//! };
//!
//! # fn main() -> pressproof::Result<()> {
//! // 306 x 450 pt = 4.25" x 6.25": a 4" x 6" card with 0.125" bleed
//! let facts = DocumentFacts::new(306.0, 450.0, 1, vec!["Dieline".to_string()]);
//!
//! let job = JobSpec::new(
//!     Dimension::new(4.0, 6.0),
//!     PageCountClass::ExactlyOne,
//!     InkProfile::Cmyk,
//!     true,
//! )?;
//!
//! let report = run_preflight(&facts, &job);
//! assert!(report.overall_valid());
//! println!("{}", report.to_json().expect("report serializes"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`facts`] - structural facts extracted by the external reader
//! - [`job`] - operator-declared expectations
//! - [`checks`] - the individual criterion checks
//! - [`classify`] - swappable spot-color name classification
//! - [`report`] - criterion results, aggregation and JSON export
//! - [`runner`] - the engine that ties a run together

pub mod checks;
pub mod classify;
pub mod error;
pub mod facts;
pub mod geometry;
pub mod job;
pub mod report;
pub mod runner;

pub use checks::{BleedAllowance, BLEED_ALLOWANCES, MIN_DPI, SIZE_TOLERANCE};
pub use classify::{NameHeuristics, SpotColorClassifier};
pub use error::{PreflightError, Result};
pub use facts::DocumentFacts;
pub use geometry::{Dimension, POINTS_PER_INCH};
pub use job::{InkProfile, JobSpec, PageCountClass};
pub use report::{Criterion, CriterionDetails, CriterionResult, PreflightReport, Verdict};
pub use runner::{run_preflight, PreflightRunner};
