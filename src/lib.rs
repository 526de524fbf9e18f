//! # paycard-rs
//!
//! Payment card validation and a pluggable charging abstraction, the domain
//! core behind a network-facing payment endpoint.
//!
//! A presented card (number, CVV, expiration) is checked against acceptance
//! rules — Luhn checksum, brand filter, expiration — and, if it passes, a
//! [`Charger`](charger::Charger) executes the charge and returns an opaque
//! transaction identifier. Validation and charging are independent: swap the
//! charger implementation without touching validation.
//!
//! ## Features
//!
//! - **Luhn checksum**: mod-10 verification catching mistyped numbers
//! - **Brand classification**: Visa and MasterCard prefix detection; only
//!   those two brands are accepted for charging
//! - **Expiration policy**: month-granularity check against an injected
//!   clock, so tests stay deterministic
//! - **Structured outcomes**: validation returns a discriminated
//!   [`ValidationOutcome`](validation::ValidationOutcome), never an exception
//! - **Pluggable charging**: a no-op reference charger and an HTTP
//!   processor-backed one, selected by configuration
//!
//! ## Quick Start
//!
//! ### Validating and charging a card
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use paycard_rs::charger::{Charger, NoOpCharger};
//! use paycard_rs::types::{Card, Expiration, Money};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let card = Card {
//!     number: "4242424242424242".to_string(),
//!     cvv: 123,
//!     exp: Expiration { year: 2030, month: 2 },
//! };
//!
//! let now = Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap();
//! let outcome = card.validate_at(now);
//! assert!(outcome.is_valid());
//!
//! let amount = Money { currency_code: "USD".to_string(), units: 10, nanos: 0 };
//! let charger = NoOpCharger;
//! let transaction_id = charger.charge(&card, &amount).await?;
//! println!("charged: {}", transaction_id);
//! # Ok(())
//! # }
//! ```
//!
//! ### Running a payment service
//!
//! ```rust,no_run
//! use paycard_rs::service::{PaymentService, ServiceConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServiceConfig::from_env()?;
//! let service = PaymentService::new(config.backend.build());
//! // hand `service` to your transport layer; see demos/server.rs
//! # Ok(())
//! # }
//! ```
//!
//! ## Validation order
//!
//! Checks run cheapest and most diagnostic first, and the first failure
//! wins: checksum, then brand, then expiration. A checksum failure therefore
//! masks any brand or expiration problem. The CVV is carried on the card but
//! never validated.
//!
//! ## Scope
//!
//! This library performs no real financial settlement, stores no card data,
//! and implements no PCI-scope security controls. A production deployment
//! substitutes a processor-backed [`Charger`](charger::Charger) for the
//! no-op reference implementation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod charger;
pub mod errors;
pub mod luhn;
pub mod service;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::{PaymentError, Result};
pub use types::{
    Brand, Card, ChargeRequest, ChargeResponse, CreditCardInfo, Expiration, Money,
    ACCEPTED_BRANDS, MASTERCARD, VISA,
};
pub use validation::ValidationOutcome;
