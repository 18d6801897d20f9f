use thiserror::Error;

/// Caller contract violations and transport parse failures.
///
/// Validation findings (a wrong size, a missing spot color) are not errors;
/// they are reported through [`crate::report::PreflightReport`]. This enum
/// only covers inputs the engine refuses to evaluate at all.
#[derive(Error, Debug)]
pub enum PreflightError {
    #[error("Invalid trim size {width}\" x {height}\": dimensions must be positive")]
    InvalidTrimSize { width: f64, height: f64 },

    #[error("Unknown page count class: {0}")]
    UnknownPageCountClass(String),

    #[error("Unknown ink profile: {0}")]
    UnknownInkProfile(String),
}

pub type Result<T> = std::result::Result<T, PreflightError>;
