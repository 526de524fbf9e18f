//! Error types for the paycard-rs library.
//!
//! This module defines the failures that can occur while configuring the
//! service or executing a charge. Card validation failures are deliberately
//! *not* errors — they are returned as a [`ValidationOutcome`] value (see
//! [`crate::validation`]); only a service-level refusal wraps one here.

use crate::validation::ValidationOutcome;
use thiserror::Error;

/// Main error type for payment operations.
#[derive(Error, Debug)]
pub enum PaymentError {
    /// The presented card failed validation; the outcome carries the
    /// specific kind and message.
    #[error("card rejected: {0}")]
    CardRejected(ValidationOutcome),

    /// The charger refused to execute the charge (e.g., a decline from a
    /// remote processor).
    #[error("charge declined: {0}")]
    ChargeDeclined(String),

    /// Error during HTTP request/response handling
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error parsing URL
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl PaymentError {
    /// Returns the validation outcome if this error is a card rejection.
    ///
    /// Handlers use this to distinguish checksum, brand, and expiration
    /// rejections without string matching.
    pub fn rejection(&self) -> Option<&ValidationOutcome> {
        match self {
            PaymentError::CardRejected(outcome) => Some(outcome),
            _ => None,
        }
    }
}

/// Result type alias for payment operations.
pub type Result<T> = std::result::Result<T, PaymentError>;
