//! # pressproof-api
//!
//! REST API server for the pressproof validation engine
//!

mod api;


pub use api::{
    app, health_check, run_checks, AppError, ErrorResponse, JobParams, PreflightRequest,
};
