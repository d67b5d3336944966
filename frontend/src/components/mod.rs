//! UI Components for the classifier.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`Classifier`] - The upload-and-predict view
//! - [`Dropzone`] - Image drop target with preview
//! - [`ResultPanel`] - Verdict, confidence text and [`ConfidenceBar`]

mod classifier;
mod dropzone;
mod footer;
mod hero;
mod result;

pub use classifier::*;
pub use dropzone::*;
pub use footer::*;
pub use hero::*;
pub use result::*;
