//! Charger implementations.
//!
//! This module contains the trait definition for charging mechanisms and
//! concrete implementations: a no-op reference charger and a network-backed
//! one. Which implementation a deployment uses is a configuration decision;
//! the service receives its charger by injection, never from global state.

pub mod noop;
pub mod remote;

pub use noop::NoOpCharger;
pub use remote::RemoteCharger;

use crate::errors::{PaymentError, Result};
use crate::types::{Card, Money};
use async_trait::async_trait;
use std::sync::Arc;
use url::Url;

/// Trait for executing a charge against a validated card.
///
/// The core never retries a failed charge and imposes no timeout; an
/// implementation that performs I/O documents its own blocking and retry
/// behavior.
#[async_trait]
pub trait Charger: Send + Sync {
    /// Returns the name of this charger (e.g., "noop").
    fn name(&self) -> &str;

    /// Charges the card for the given amount.
    ///
    /// # Arguments
    ///
    /// * `card` - The card to charge. Callers validate it first; chargers do
    ///   not re-validate.
    /// * `amount` - The monetary amount to charge
    ///
    /// # Returns
    ///
    /// An opaque transaction identifier, unique per successful charge
    async fn charge(&self, card: &Card, amount: &Money) -> Result<String>;
}

/// Charger selection, resolved from configuration at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChargerBackend {
    /// The no-op reference charger. Default.
    NoOp,

    /// A remote payment processor reached over HTTP.
    Remote {
        /// Base URL of the processor
        endpoint: Url,
    },
}

impl ChargerBackend {
    /// Reads the backend selection from the environment.
    ///
    /// `CHARGER_BACKEND` chooses the implementation (`"noop"` when unset);
    /// `"remote"` additionally requires `PROCESSOR_URL`.
    pub fn from_env() -> Result<Self> {
        match std::env::var("CHARGER_BACKEND").as_deref() {
            Err(_) | Ok("noop") => Ok(ChargerBackend::NoOp),
            Ok("remote") => {
                let raw = std::env::var("PROCESSOR_URL").map_err(|_| {
                    PaymentError::ConfigError(
                        "CHARGER_BACKEND=remote requires PROCESSOR_URL".to_string(),
                    )
                })?;
                Ok(ChargerBackend::Remote {
                    endpoint: Url::parse(&raw)?,
                })
            }
            Ok(other) => Err(PaymentError::ConfigError(format!(
                "unknown charger backend: {}",
                other
            ))),
        }
    }

    /// Builds the selected charger.
    pub fn build(&self) -> Arc<dyn Charger> {
        match self {
            ChargerBackend::NoOp => Arc::new(NoOpCharger),
            ChargerBackend::Remote { endpoint } => Arc::new(RemoteCharger::new(endpoint.clone())),
        }
    }
}
