//! Passthrough model used until a trained model is wired in.

use super::{Feature, Predictor};

/// Returns its input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityModel;

impl Predictor for IdentityModel {
    fn name(&self) -> &str {
        "identity"
    }

    fn predict(&self, features: Vec<Feature>) -> Vec<Feature> {
        features
    }
}
