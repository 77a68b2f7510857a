//! Prediction service library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod observability;

pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use model::{IdentityModel, Predictor};
