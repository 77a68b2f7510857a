//! Response handling and error mapping.
//!
//! # Responsibilities
//! - Define the caller-facing error taxonomy for prediction requests
//! - Map each error variant to an HTTP status code
//! - Render errors as `{"error": "..."}` JSON bodies
//!
//! # Design Decisions
//! - Every payload problem is the caller's fault and maps to 400
//! - The server never answers a bad payload with a 5xx; only a failed
//!   predictor task yields 500

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Why a prediction request was rejected.
#[derive(Debug, Error)]
pub enum PredictionError {
    /// The body is not valid JSON.
    #[error("request body is not valid JSON: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    /// The body is JSON but has no `X` key.
    #[error("\"X\" cannot be found in JSON payload")]
    MissingField,

    /// `X` is present but is not a sequence of numbers.
    #[error("\"X\" must be a sequence of numbers: {0}")]
    InvalidFeatures(String),

    /// The predictor panicked or its task was cancelled.
    #[error("prediction failed")]
    PredictorFailed(#[source] tokio::task::JoinError),
}

impl PredictionError {
    /// Status code returned to the client for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            PredictionError::MalformedPayload(_)
            | PredictionError::MissingField
            | PredictionError::InvalidFeatures(_) => StatusCode::BAD_REQUEST,
            PredictionError::PredictorFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for PredictionError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
