//! # Predict stub - development stand-in for the prediction service
//!
//! Serves the same `POST /predict` contract as the real Cat vs Dog model
//! server, but answers with a scripted verdict. Used to run the frontend
//! locally and to exercise its loading, success and failure paths.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  multipart  │────▶│   checks    │────▶│   sniff     │────▶│   verdict   │
//! │   upload    │     │ (file part) │     │ (JPEG/PNG/  │     │   (score    │
//! │             │     │             │     │    WEBP)    │     │  threshold) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Scripted behaviour
//! - [`verdict`] - Score thresholding and image sniffing
//! - [`api`] - HTTP API server

pub mod error;
pub mod config;
pub mod verdict;
pub mod api;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ConfigError, ServerError, StubError, StubResult};
pub use config::{StubConfig, DEFAULT_PORT, DEFAULT_SCORE};
pub use verdict::{sniff_image, ImageFormat, PetClass, Verdict};
pub use api::types::{ErrorResponse, HealthResponse, UPLOAD_FIELD};

// Server
pub mod server {
    pub use crate::api::server::{router, start_server};
}
