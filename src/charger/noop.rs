//! No-op reference charger.
//!
//! Performs no external I/O and never fails; each call hands back a fresh
//! random identifier. Deployments use it as a stand-in until a real
//! processor-backed charger is configured.

use crate::charger::Charger;
use crate::errors::Result;
use crate::types::{Card, Money};
use async_trait::async_trait;
use uuid::Uuid;

/// Charger that accepts every charge without proceeding with any payment.
///
/// It never inspects the card or the amount; its error channel exists only
/// to satisfy the [`Charger`] contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpCharger;

#[async_trait]
impl Charger for NoOpCharger {
    fn name(&self) -> &str {
        "noop"
    }

    /// Always succeeds, returning a random UUID as the transaction id.
    async fn charge(&self, _card: &Card, _amount: &Money) -> Result<String> {
        Ok(Uuid::new_v4().to_string())
    }
}
