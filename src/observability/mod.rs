//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers, lifecycle, tower-http TraceLayer
//!     → tracing events with structured fields (request_id, model, ...)
//!     → logging.rs subscriber (pretty text or JSON lines on stdout)
//! ```

pub mod logging;
