//! Scripted verdicts and upload sniffing.
//!
//! The pretend model outputs a single sigmoid score: above 0.5 means Dog,
//! otherwise Cat, and the confidence is the distance from the losing side.

use serde::{Deserialize, Serialize};

/// Label served by the stub.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PetClass {
    Cat,
    Dog,
}

/// What `POST /predict` answers on success.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub class: PetClass,
    pub confidence: f64,
    /// Raw score the verdict was derived from.
    pub score: f64,
}

impl Verdict {
    pub fn from_score(score: f64) -> Self {
        if score > 0.5 {
            Self {
                class: PetClass::Dog,
                confidence: score,
                score,
            }
        } else {
            Self {
                class: PetClass::Cat,
                confidence: 1.0 - score,
                score,
            }
        }
    }
}

/// Accepted upload formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Webp,
}

/// Recognise an image from its leading bytes.
pub fn sniff_image(bytes: &[u8]) -> Option<ImageFormat> {
    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n";

    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some(ImageFormat::Jpeg)
    } else if bytes.starts_with(PNG) {
        Some(ImageFormat::Png)
    } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        Some(ImageFormat::Webp)
    } else {
        None
    }
}
