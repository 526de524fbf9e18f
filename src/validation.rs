//! Card validation: checksum, brand filter, and expiration, in that order.
//!
//! Validation returns a [`ValidationOutcome`] value rather than mutating the
//! card or raising an error, so callers always inspect the result before
//! charging and concurrent validations of distinct cards share nothing.

use crate::luhn;
use crate::types::{Card, ACCEPTED_BRANDS};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of validating a card. Exactly one outcome per call; the first
/// failed check wins and the remaining checks are skipped.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ValidationOutcome {
    /// All checks passed.
    Valid,

    /// The number failed the Luhn formula. Covers mistyped numbers and
    /// non-digit input. The message embeds the offending number.
    InvalidChecksum(String),

    /// The number passed the checksum but its brand is not in the accepted
    /// set.
    UnacceptedBrand(String),

    /// Number and brand are acceptable but the expiration date has passed or
    /// was never set.
    Expired(String),
}

impl ValidationOutcome {
    /// Whether the card passed all checks.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// The human-readable rejection message, if any. `Valid` carries none.
    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::InvalidChecksum(msg)
            | ValidationOutcome::UnacceptedBrand(msg)
            | ValidationOutcome::Expired(msg) => Some(msg),
        }
    }
}

impl std::fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message().unwrap_or("valid"))
    }
}

impl Card {
    /// Validates this card at the given instant.
    ///
    /// Checks run cheapest and most diagnostic first, short-circuiting on
    /// the first failure:
    ///
    /// 1. Luhn checksum — a failure here masks any brand or expiration
    ///    problem.
    /// 2. Brand filter against the accepted set.
    /// 3. Expiration, evaluated at month granularity against `now`.
    ///
    /// The CVV is never examined.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use paycard_rs::types::{Card, Expiration};
    ///
    /// let card = Card {
    ///     number: "4242424242424242".to_string(),
    ///     cvv: 123,
    ///     exp: Expiration { year: 2030, month: 2 },
    /// };
    ///
    /// let now = Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap();
    /// assert!(card.validate_at(now).is_valid());
    /// ```
    pub fn validate_at(&self, now: DateTime<Utc>) -> ValidationOutcome {
        if !luhn::is_valid(&self.number) {
            return ValidationOutcome::InvalidChecksum(format!(
                "Invalid credit card number: {}; might be a typo",
                self.number
            ));
        }
        if !self.brand().is_accepted() {
            return ValidationOutcome::UnacceptedBrand(format!(
                "Sorry, only {} cards are accepted",
                ACCEPTED_BRANDS.join(" and ")
            ));
        }
        if self.exp.is_expired_at(now) {
            return ValidationOutcome::Expired(format!(
                "Your credit card expired on {}/{}",
                self.exp.month, self.exp.year
            ));
        }
        ValidationOutcome::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Brand, Expiration};
    use chrono::TimeZone;

    fn future_exp() -> Expiration {
        Expiration { year: 2030, month: 2 }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_valid_visa() {
        let card = Card {
            number: "4242424242424242".to_string(),
            cvv: 123,
            exp: future_exp(),
        };
        let outcome = card.validate_at(now());
        assert!(outcome.is_valid());
        assert_eq!(outcome.message(), None);
        assert_eq!(card.brand(), Brand::Visa);
    }

    #[test]
    fn test_valid_mastercard() {
        let card = Card {
            number: "5555555555554444".to_string(),
            cvv: 123,
            exp: future_exp(),
        };
        assert!(card.validate_at(now()).is_valid());
        assert_eq!(card.brand(), Brand::MasterCard);
    }

    #[test]
    fn test_broken_checksum() {
        let card = Card {
            number: "4242424242424243".to_string(),
            cvv: 123,
            exp: future_exp(),
        };
        let outcome = card.validate_at(now());
        assert!(matches!(outcome, ValidationOutcome::InvalidChecksum(_)));
        assert!(outcome.message().unwrap().contains("4242424242424243"));
    }

    #[test]
    fn test_unaccepted_brand() {
        // Discover: valid Luhn, not in the accepted set.
        let card = Card {
            number: "6011111111111117".to_string(),
            cvv: 123,
            exp: future_exp(),
        };
        let outcome = card.validate_at(now());
        assert!(matches!(outcome, ValidationOutcome::UnacceptedBrand(_)));
        let msg = outcome.message().unwrap();
        assert!(msg.contains("visa"));
        assert!(msg.contains("mastercard"));
        // The generic message never echoes the number.
        assert!(!msg.contains("6011111111111117"));
    }

    #[test]
    fn test_expired_card() {
        let card = Card {
            number: "4242424242424242".to_string(),
            cvv: 123,
            exp: Expiration { year: 2018, month: 2 },
        };
        let outcome = card.validate_at(now());
        assert!(matches!(outcome, ValidationOutcome::Expired(_)));
        assert!(outcome.message().unwrap().contains("2/2018"));
    }

    #[test]
    fn test_checksum_failure_masks_everything() {
        // Broken checksum AND unaccepted brand AND expired: the checksum
        // outcome wins because it is checked first.
        let card = Card {
            number: "6011111111111118".to_string(),
            cvv: 123,
            exp: Expiration { year: 2018, month: 2 },
        };
        assert!(matches!(
            card.validate_at(now()),
            ValidationOutcome::InvalidChecksum(_)
        ));
    }

    #[test]
    fn test_brand_failure_masks_expiration() {
        // Valid checksum, unaccepted brand, expired: brand wins.
        let card = Card {
            number: "6011111111111117".to_string(),
            cvv: 123,
            exp: Expiration { year: 2018, month: 2 },
        };
        assert!(matches!(
            card.validate_at(now()),
            ValidationOutcome::UnacceptedBrand(_)
        ));
    }

    #[test]
    fn test_empty_number_fails_checksum() {
        let card = Card {
            number: String::new(),
            cvv: 0,
            exp: future_exp(),
        };
        assert!(matches!(
            card.validate_at(now()),
            ValidationOutcome::InvalidChecksum(_)
        ));
    }

    #[test]
    fn test_revalidation_is_deterministic() {
        let card = Card {
            number: "4242424242424242".to_string(),
            cvv: 123,
            exp: future_exp(),
        };
        assert_eq!(card.validate_at(now()), card.validate_at(now()));
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = ValidationOutcome::Expired("Your credit card expired on 2/2018".to_string());
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("expired"));

        let roundtrip: ValidationOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, outcome);
    }
}
