//! Browser and backend services.
//!
//! # Services
//!
//! - [`predict`] - prediction client (`POST /predict`)
//! - [`file`] - `web_sys::File` as a selectable image

pub mod file;
pub mod predict;

pub use file::*;
pub use predict::*;
