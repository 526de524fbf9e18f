//! Example walkthrough of card validation and charging.
//!
//! Validates a handful of well-known test numbers and charges the ones that
//! pass through the no-op charger.
//!
//! Run with:
//! ```bash
//! cargo run --example client
//! ```

use chrono::Utc;
use paycard_rs::charger::{Charger, NoOpCharger};
use paycard_rs::types::{Card, Expiration, Money};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cards = [
        ("4242424242424242", 2030, 2, "Visa"),
        ("5555555555554444", 2030, 2, "MasterCard"),
        ("4242424242424243", 2030, 2, "broken checksum"),
        ("6011111111111117", 2030, 2, "Discover (unaccepted)"),
        ("4242424242424242", 2018, 2, "expired Visa"),
    ];

    let charger = NoOpCharger;
    let amount = Money {
        currency_code: "USD".to_string(),
        units: 10,
        nanos: 990_000_000,
    };
    let now = Utc::now();

    for (number, year, month, label) in cards {
        let card = Card {
            number: number.to_string(),
            cvv: 123,
            exp: Expiration { year, month },
        };

        println!("{} ({})", number, label);
        println!("  brand: {}", card.brand());

        let outcome = card.validate_at(now);
        if outcome.is_valid() {
            let transaction_id = charger.charge(&card, &amount).await?;
            println!("  accepted, transaction: {}", transaction_id);
        } else {
            println!("  rejected: {}", outcome);
        }
        println!();
    }

    Ok(())
}
