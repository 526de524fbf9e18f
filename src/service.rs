//! Payment service boundary.
//!
//! This module provides the request-handling core that a network listener
//! wraps: configuration loaded from the environment and a handler that
//! converts an inbound charge request into a validated, charged card. The
//! transport (HTTP routing, marshaling) lives with the caller; see
//! `demos/server.rs` for an Axum wiring.

use crate::charger::{Charger, ChargerBackend};
use crate::errors::{PaymentError, Result};
use crate::types::{Card, ChargeRequest, ChargeResponse};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};

/// Port the service listens on when `APP_PORT` is not set.
pub const DEFAULT_PORT: u16 = 50051;

/// Process configuration for a payment service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Listen port
    pub port: u16,

    /// Which charger implementation to run with
    pub backend: ChargerBackend,
}

impl ServiceConfig {
    /// Loads the configuration from the environment.
    ///
    /// `APP_PORT` selects the listen port (default 50051); the charger
    /// backend is resolved per [`ChargerBackend::from_env`].
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("APP_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                PaymentError::ConfigError(format!("invalid APP_PORT: {}", raw))
            })?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self {
            port,
            backend: ChargerBackend::from_env()?,
        })
    }
}

/// The domain core behind a payment endpoint.
///
/// Owns its [`Charger`] by injection: construct one at startup from the
/// configured backend and hand it to each handler instance. Validation and
/// charging stay decoupled; swapping the charger never touches validation.
pub struct PaymentService {
    charger: Arc<dyn Charger>,
}

impl PaymentService {
    /// Creates a service around the given charger.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use paycard_rs::charger::NoOpCharger;
    /// use paycard_rs::service::PaymentService;
    ///
    /// let service = PaymentService::new(Arc::new(NoOpCharger));
    /// assert_eq!(service.charger_name(), "noop");
    /// ```
    pub fn new(charger: Arc<dyn Charger>) -> Self {
        Self { charger }
    }

    /// Name of the charger this service runs with.
    pub fn charger_name(&self) -> &str {
        self.charger.name()
    }

    /// Validates the card in `request` at `now` and, if it passes, charges
    /// it for the requested amount.
    ///
    /// A validation failure returns [`PaymentError::CardRejected`] carrying
    /// the outcome, so the transport layer can distinguish checksum, brand,
    /// and expiration rejections. Charger failures propagate verbatim; no
    /// retry is attempted here.
    pub async fn handle_charge(
        &self,
        request: ChargeRequest,
        now: DateTime<Utc>,
    ) -> Result<ChargeResponse> {
        info!("[Charge] received request");

        let card: Card = request.credit_card.into();
        let outcome = card.validate_at(now);
        if !outcome.is_valid() {
            warn!(reason = %outcome, "[Charge] card rejected");
            return Err(PaymentError::CardRejected(outcome));
        }

        let transaction_id = self.charger.charge(&card, &request.amount).await?;
        info!(transaction_id = %transaction_id, "[Charge] completed request");

        Ok(ChargeResponse { transaction_id })
    }
}
