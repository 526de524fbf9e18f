//! Network-backed charger.
//!
//! Forwards the charge to a remote payment processor over HTTP. The
//! processor owns settlement; this charger only relays the request and maps
//! the response onto the [`Charger`] contract.

use crate::charger::Charger;
use crate::errors::{PaymentError, Result};
use crate::types::{Card, ChargeRequest, ChargeResponse, CreditCardInfo, Money};
use async_trait::async_trait;
use url::Url;

/// Charger that POSTs the charge to `{endpoint}/charge`.
///
/// The processor is expected to accept a [`ChargeRequest`] JSON body and
/// answer with a [`ChargeResponse`]. Each call is a single request: no
/// retries and no timeout beyond the HTTP client's defaults. Declines and
/// transport failures surface through the error channel; the caller decides
/// what to do with them.
#[derive(Debug, Clone)]
pub struct RemoteCharger {
    endpoint: Url,
    client: reqwest::Client,
}

impl RemoteCharger {
    /// Creates a charger targeting the given processor base URL.
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    fn charge_url(&self) -> String {
        format!("{}/charge", self.endpoint.as_str().trim_end_matches('/'))
    }
}

#[async_trait]
impl Charger for RemoteCharger {
    fn name(&self) -> &str {
        "remote"
    }

    async fn charge(&self, card: &Card, amount: &Money) -> Result<String> {
        let request = ChargeRequest {
            amount: amount.clone(),
            credit_card: CreditCardInfo::from(card),
        };

        let response = self
            .client
            .post(self.charge_url())
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PaymentError::ChargeDeclined(format!(
                "processor returned {}: {}",
                status, body
            )));
        }

        let charge: ChargeResponse = response.json().await?;
        if charge.transaction_id.is_empty() {
            return Err(PaymentError::ChargeDeclined(
                "processor returned an empty transaction id".to_string(),
            ));
        }
        Ok(charge.transaction_id)
    }
}
