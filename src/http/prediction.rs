//! Prediction and health handlers.

use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::http::request::request_id;
use crate::http::response::PredictionError;
use crate::http::server::AppState;
use crate::model::Feature;

/// Key holding the feature sequence in the request body.
pub const FEATURES_KEY: &str = "X";

/// Successful prediction body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResponse {
    pub prediction: Vec<Feature>,
}

/// Liveness body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub model: String,
}

/// Extract the feature sequence from a raw request body.
///
/// JSON syntax is checked before the `X` lookup, so a non-JSON body is always
/// reported as malformed. Keys other than `X` are ignored.
pub fn parse_features(body: &[u8]) -> Result<Vec<Feature>, PredictionError> {
    let payload: Value = serde_json::from_slice(body).map_err(PredictionError::MalformedPayload)?;

    let features = match payload {
        Value::Object(mut fields) => fields
            .remove(FEATURES_KEY)
            .ok_or(PredictionError::MissingField)?,
        _ => return Err(PredictionError::MissingField),
    };

    into_features(features)
}

/// Accept only an array whose every element is a JSON number.
fn into_features(value: Value) -> Result<Vec<Feature>, PredictionError> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Number(n) => Ok(n),
                other => Err(PredictionError::InvalidFeatures(format!(
                    "element {index} is {}",
                    kind(&other)
                ))),
            })
            .collect(),
        other => Err(PredictionError::InvalidFeatures(format!(
            "found {}",
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// `POST /prediction`
pub async fn predict(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<PredictionResponse>, PredictionError> {
    let request_id = request_id(&headers);

    let features = parse_features(&body).inspect_err(|e| {
        tracing::warn!(request_id = %request_id, error = %e, "Rejected prediction request");
    })?;

    tracing::debug!(
        request_id = %request_id,
        features = features.len(),
        model = state.predictor.name(),
        "Running prediction"
    );

    // Predictors are synchronous; run them on the blocking pool.
    let predictor = state.predictor.clone();
    let prediction = tokio::task::spawn_blocking(move || predictor.predict(features))
        .await
        .map_err(|e| {
            tracing::error!(request_id = %request_id, error = %e, "Predictor task failed");
            PredictionError::PredictorFailed(e)
        })?;

    Ok(Json(PredictionResponse { prediction }))
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        model: state.predictor.name().to_string(),
    })
}
