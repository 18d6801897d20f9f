use axum::{
    extract::Json,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use pressproof::{
    run_preflight, Dimension, DocumentFacts, JobSpec, PreflightError,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::info;

/// Job expectations as submitted by the operator form
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobParams {
    /// Expected trim width in inches
    pub trim_width: f64,
    /// Expected trim height in inches
    pub trim_height: f64,
    /// Printed sides: "1", "2" or "multi"
    pub page_count: String,
    /// Ink requirement: "CMYK", "CMYK+WHITE", "WHITE_ONLY", "CMYK+PANTONE"
    /// or "BLACK_ONLY"
    pub ink_profile: String,
    /// Whether the piece has a custom cut shape
    pub dieline_required: bool,
}

impl TryFrom<JobParams> for JobSpec {
    type Error = PreflightError;

    fn try_from(params: JobParams) -> Result<Self, Self::Error> {
        JobSpec::new(
            Dimension::new(params.trim_width, params.trim_height),
            params.page_count.parse()?,
            params.ink_profile.parse()?,
            params.dieline_required,
        )
    }
}

/// Request payload for the preflight endpoint
#[derive(Debug, Deserialize)]
pub struct PreflightRequest {
    /// Facts snapshot produced by the PDF structure reader
    pub facts: DocumentFacts,
    /// Operator-declared job expectations
    pub job: JobParams,
}

/// Standard error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message describing what went wrong
    pub error: String,
}

/// Application-specific error types for the API
#[derive(Debug)]
pub enum AppError {
    /// The submitted job parameters could not be turned into a job spec
    Job(PreflightError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_msg) = match self {
            AppError::Job(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
        };

        let error_response = ErrorResponse { error: error_msg };

        (status, Json(error_response)).into_response()
    }
}

impl From<PreflightError> for AppError {
    fn from(err: PreflightError) -> Self {
        AppError::Job(err)
    }
}

/// Build the application router with all routes configured
pub fn app() -> Router {
    Router::new()
        .route("/api/preflight", post(run_checks))
        .route("/api/health", get(health_check))
        .layer(CorsLayer::permissive())
}

/// Run a preflight over the submitted facts and job expectations
///
/// Validation findings are data, not faults: the response is 200 with a
/// full report whether or not the file passed. Only malformed job
/// parameters produce an error status.
pub async fn run_checks(
    Json(payload): Json<PreflightRequest>,
) -> Result<Response, AppError> {
    let spec: JobSpec = payload.job.try_into()?;
    let report = run_preflight(&payload.facts, &spec);

    info!(overall = report.overall_valid(), "preflight request served");

    Ok((StatusCode::OK, Json(report)).into_response())
}

/// Service health probe
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "pressproof API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
