//! Prediction model subsystem.
//!
//! # Data Flow
//! ```text
//! http::prediction (parsed feature sequence)
//!     → Predictor::predict (pure, deterministic)
//!     → http::prediction (serialized as `prediction`)
//! ```
//!
//! # Design Decisions
//! - Models are stateless from the server's point of view and shared via `Arc`
//! - Output cardinality always equals input cardinality
//! - Numbers stay as `serde_json::Number` so integers are returned as integers

pub mod identity;

use serde_json::Number;

pub use identity::IdentityModel;

/// A single numeric feature or prediction value.
pub type Feature = Number;

/// A model that maps a feature sequence to a prediction sequence.
///
/// Implementations must be total over finite numeric input and must return
/// exactly one prediction per feature, in order.
pub trait Predictor: Send + Sync + 'static {
    /// Name reported by the health endpoint.
    fn name(&self) -> &str;

    /// Compute predictions for the given features.
    fn predict(&self, features: Vec<Feature>) -> Vec<Feature>;
}
