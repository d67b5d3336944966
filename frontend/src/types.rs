//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Prediction Types** - what the prediction service answers
//! - **Image Types** - accepted upload formats
//! - **Error Types** - selection and prediction failures

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ACCEPTED_MIME_TYPES;

/// The only message a failed prediction ever shows to the user.
pub const FAILURE_MESSAGE: &str = "Failed to get prediction. Ensure the backend is running.";

// =============================================================================
// Prediction Types
// =============================================================================

/// Label returned by the classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PetClass {
    Cat,
    Dog,
}

impl PetClass {
    /// Display label, identical to the wire value.
    pub fn label(&self) -> &'static str {
        match self {
            PetClass::Cat => "Cat",
            PetClass::Dog => "Dog",
        }
    }

    /// Icon shown next to the verdict.
    pub fn emoji(&self) -> &'static str {
        match self {
            PetClass::Cat => "🐱",
            PetClass::Dog => "🐶",
        }
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            PetClass::Cat => "verdict-cat",
            PetClass::Dog => "verdict-dog",
        }
    }
}

/// Classifier confidence, always a finite value in `[0, 1]`.
///
/// Deserialization rejects anything else, which turns an out-of-range
/// answer into a malformed response.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Confidence(f64);

impl Confidence {
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && (0.0..=1.0).contains(&value)).then_some(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Percentage with one decimal, e.g. `87.0%`.
    pub fn percent_text(&self) -> String {
        format!("{:.1}%", self.0 * 100.0)
    }
}

impl TryFrom<f64> for Confidence {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Confidence::new(value).ok_or_else(|| format!("confidence {} is outside [0, 1]", value))
    }
}

impl From<Confidence> for f64 {
    fn from(confidence: Confidence) -> Self {
        confidence.0
    }
}

/// Successful answer of `POST /predict`.
///
/// Extra fields sent by the service (such as the raw `score`) are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub class: PetClass,
    pub confidence: Confidence,
}

// =============================================================================
// Image Types
// =============================================================================

/// Upload formats accepted by the drop target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
    Webp,
}

impl ImageKind {
    /// Map a MIME type to an accepted kind.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Some(ImageKind::Jpeg),
            "image/png" => Some(ImageKind::Png),
            "image/webp" => Some(ImageKind::Webp),
            _ => None,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ImageKind::Jpeg => ACCEPTED_MIME_TYPES[0],
            ImageKind::Png => ACCEPTED_MIME_TYPES[1],
            ImageKind::Webp => ACCEPTED_MIME_TYPES[2],
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Why a file was not taken as the Selected Image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectError {
    /// MIME type outside JPEG/PNG/WEBP.
    UnsupportedType(String),
    /// More than one file dropped at once.
    MultipleFiles(usize),
    /// Nothing was provided.
    Empty,
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectError::UnsupportedType(mime) => write!(f, "Unsupported file type: '{}'", mime),
            SelectError::MultipleFiles(count) => write!(f, "Expected one file, got {}", count),
            SelectError::Empty => write!(f, "No file provided"),
        }
    }
}

impl std::error::Error for SelectError {}

/// Why a prediction request failed.
///
/// The variants exist for diagnostics only; the UI collapses all of them
/// into [`FAILURE_MESSAGE`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PredictError {
    /// Request could not be built or sent.
    Transport(String),
    /// Service answered with a non-2xx status.
    Status { code: u16, body: String },
    /// 2xx answer that is not a valid prediction.
    Malformed(String),
}

impl PredictError {
    /// Message to show in the error panel.
    pub fn user_message(&self) -> &'static str {
        FAILURE_MESSAGE
    }
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::Transport(msg) => write!(f, "HTTP request failed: {}", msg),
            PredictError::Status { code, body } => write!(f, "Server error ({}): {}", code, body),
            PredictError::Malformed(msg) => write!(f, "Failed to parse response: {}", msg),
        }
    }
}

impl std::error::Error for PredictError {}
