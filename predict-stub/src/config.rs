//! Stub configuration.
//!
//! Built from the CLI (or the matching `PREDICT_STUB_*` variables, `.env`
//! included) and shared read-only by every request.

use axum::http::StatusCode;
use std::time::Duration;

use crate::error::ConfigError;

/// Port the real prediction service listens on.
pub const DEFAULT_PORT: u16 = 5000;

/// Raw score served when none is configured (a confident Cat).
pub const DEFAULT_SCORE: f64 = 0.13;

/// Scripted behaviour of `POST /predict`.
#[derive(Clone, Debug, PartialEq)]
pub struct StubConfig {
    /// Raw sigmoid output of the pretend model, in `[0, 1]`.
    pub score: f64,
    /// Answer every valid upload with this status instead of a verdict.
    pub fail_status: Option<StatusCode>,
    /// Delay before answering.
    pub latency: Duration,
}

impl StubConfig {
    pub fn new(score: f64, fail_status: Option<u16>, latency_ms: u64) -> Result<Self, ConfigError> {
        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            return Err(ConfigError::InvalidScore(score));
        }

        let fail_status = match fail_status {
            Some(code) => match StatusCode::from_u16(code) {
                Ok(status) if status.is_client_error() || status.is_server_error() => Some(status),
                _ => return Err(ConfigError::InvalidFailStatus(code)),
            },
            None => None,
        };

        Ok(Self {
            score,
            fail_status,
            latency: Duration::from_millis(latency_ms),
        })
    }
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            score: DEFAULT_SCORE,
            fail_status: None,
            latency: Duration::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = StubConfig::new(0.9, Some(503), 250).unwrap();
        assert_eq!(config.score, 0.9);
        assert_eq!(config.fail_status, Some(StatusCode::SERVICE_UNAVAILABLE));
        assert_eq!(config.latency, Duration::from_millis(250));
    }

    #[test]
    fn test_score_out_of_range() {
        assert_eq!(StubConfig::new(1.01, None, 0), Err(ConfigError::InvalidScore(1.01)));
        assert_eq!(StubConfig::new(-0.5, None, 0), Err(ConfigError::InvalidScore(-0.5)));
        assert!(StubConfig::new(f64::INFINITY, None, 0).is_err());
    }

    #[test]
    fn test_fail_status_must_be_an_error() {
        assert_eq!(StubConfig::new(0.5, Some(200), 0), Err(ConfigError::InvalidFailStatus(200)));
        assert_eq!(StubConfig::new(0.5, Some(42), 0), Err(ConfigError::InvalidFailStatus(42)));
        assert!(StubConfig::new(0.5, Some(404), 0).is_ok());
    }
}
