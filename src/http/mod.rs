//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (assign / propagate request ID)
//!     → prediction.rs (parse payload, run predictor)
//!     → response.rs (map errors to status codes)
//!     → Send to client
//! ```

pub mod prediction;
pub mod request;
pub mod response;
pub mod server;

pub use prediction::{parse_features, PredictionResponse};
pub use request::{MakeServiceRequestId, X_REQUEST_ID};
pub use response::PredictionError;
pub use server::{AppState, HttpServer};
