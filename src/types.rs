//! Core type definitions for payment card handling.
//!
//! This module contains the card data model (number, CVV, expiration), brand
//! classification, the monetary amount type, and the JSON wire types used at
//! the service boundary.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Wire code for Visa cards.
pub const VISA: &str = "visa";

/// Wire code for MasterCard cards.
pub const MASTERCARD: &str = "mastercard";

/// The brands this library accepts for charging. Case-sensitive wire codes.
pub const ACCEPTED_BRANDS: [&str; 2] = [VISA, MASTERCARD];

/// Card scheme derived from the number prefix.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    /// Numbers starting with `4`.
    Visa,
    /// Numbers with a two-digit prefix in `50..=55`.
    MasterCard,
    /// Any other prefix, including numbers too short to classify.
    Unrecognized,
}

impl Brand {
    /// Classifies a card number by its prefix.
    ///
    /// A number shorter than two characters cannot carry a MasterCard prefix
    /// and degrades to [`Brand::Unrecognized`]; this is not an error. Empty
    /// input is likewise `Unrecognized`.
    ///
    /// # Examples
    ///
    /// ```
    /// use paycard_rs::types::Brand;
    ///
    /// assert_eq!(Brand::of("4242424242424242"), Brand::Visa);
    /// assert_eq!(Brand::of("5555555555554444"), Brand::MasterCard);
    /// assert_eq!(Brand::of("6011111111111117"), Brand::Unrecognized);
    /// ```
    pub fn of(number: &str) -> Brand {
        if number.starts_with('4') {
            return Brand::Visa;
        }
        let prefix: u32 = number
            .get(0..2)
            .and_then(|p| p.parse().ok())
            .unwrap_or(0);
        if (50..=55).contains(&prefix) {
            Brand::MasterCard
        } else {
            Brand::Unrecognized
        }
    }

    /// Returns the wire code for a recognized brand, `None` otherwise.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Brand::Visa => Some(VISA),
            Brand::MasterCard => Some(MASTERCARD),
            Brand::Unrecognized => None,
        }
    }

    /// Whether this brand is in the accepted set.
    pub fn is_accepted(&self) -> bool {
        self.code().is_some()
    }
}

impl std::fmt::Display for Brand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code().unwrap_or("unrecognized"))
    }
}

/// Expiration date on a card, at month granularity.
///
/// A zero `year` or `month` is the "not set" sentinel and is treated as
/// already expired.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Expiration {
    /// Four-digit year (e.g., 2030). Zero means not set.
    pub year: i32,

    /// Month 1–12. Zero means not set; out-of-range values are not checked.
    pub month: u32,
}

impl Expiration {
    /// Whether the date has passed relative to the given instant.
    ///
    /// The card stays valid through the whole stated month: with an
    /// expiration of 02/2030 the card is good until the end of February
    /// 2030. The caller supplies `now` so the check stays deterministic.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use paycard_rs::types::Expiration;
    ///
    /// let exp = Expiration { year: 2030, month: 2 };
    /// let before = Utc.with_ymd_and_hms(2030, 2, 28, 0, 0, 0).unwrap();
    /// let after = Utc.with_ymd_and_hms(2030, 3, 1, 0, 0, 0).unwrap();
    ///
    /// assert!(!exp.is_expired_at(before));
    /// assert!(exp.is_expired_at(after));
    /// ```
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        if self.year == 0 || self.month == 0 {
            return true;
        }
        now.year() > self.year || (now.year() == self.year && now.month() > self.month)
    }
}

/// A presented payment card.
///
/// Pure value type, built per request from untrusted input. Validation does
/// not mutate it; see [`Card::validate_at`](crate::validation) for the
/// outcome-returning check. The CVV is carried for future use but never
/// inspected by validation.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    /// Card number as a string of decimal digits.
    pub number: String,

    /// Card verification value. Carried but not validated.
    pub cvv: i32,

    /// Expiration date.
    pub exp: Expiration,
}

impl Card {
    /// Classifies this card's brand from its number prefix.
    pub fn brand(&self) -> Brand {
        Brand::of(&self.number)
    }
}

/// A monetary amount, decimal-free in the protobuf `Money` style.
///
/// `units` is the whole part in `currency_code`; `nanos` is the fractional
/// part in 10^-9 units. The core carries this opaquely and performs no
/// arithmetic on it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Money {
    /// ISO 4217 currency code (e.g., "USD")
    #[serde(rename = "currencyCode")]
    pub currency_code: String,

    /// Whole units of the amount
    pub units: i64,

    /// Nano units of the amount (10^-9), same sign as `units`
    pub nanos: i32,
}

/// Card fields as they arrive on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CreditCardInfo {
    /// Card number as a digit string
    #[serde(rename = "creditCardNumber")]
    pub credit_card_number: String,

    /// CVV as a 32-bit integer
    #[serde(rename = "creditCardCvv")]
    pub credit_card_cvv: i32,

    /// Four-digit expiration year
    #[serde(rename = "creditCardExpirationYear")]
    pub credit_card_expiration_year: i32,

    /// Expiration month, 1–12
    #[serde(rename = "creditCardExpirationMonth")]
    pub credit_card_expiration_month: u32,
}

impl From<CreditCardInfo> for Card {
    fn from(info: CreditCardInfo) -> Self {
        Card {
            number: info.credit_card_number,
            cvv: info.credit_card_cvv,
            exp: Expiration {
                year: info.credit_card_expiration_year,
                month: info.credit_card_expiration_month,
            },
        }
    }
}

impl From<&Card> for CreditCardInfo {
    fn from(card: &Card) -> Self {
        CreditCardInfo {
            credit_card_number: card.number.clone(),
            credit_card_cvv: card.cvv,
            credit_card_expiration_year: card.exp.year,
            credit_card_expiration_month: card.exp.month,
        }
    }
}

/// Inbound request to charge a card.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChargeRequest {
    /// Amount to charge
    pub amount: Money,

    /// Card to charge
    #[serde(rename = "creditCard")]
    pub credit_card: CreditCardInfo,
}

/// Response to a successful charge.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChargeResponse {
    /// Opaque transaction identifier produced by the charger
    #[serde(rename = "transactionId")]
    pub transaction_id: String,
}
