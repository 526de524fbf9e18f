//! Luhn mod-10 checksum verification.
//!
//! The Luhn formula catches simple transcription errors (a mistyped digit,
//! most adjacent transpositions) in card numbers. It is not a cryptographic
//! or fraud check.

/// Checks a digit string against the Luhn mod-10 formula.
///
/// Digits are processed left to right. With `parity = len % 2`, every digit
/// at position `i` with `i % 2 == parity` is doubled (subtracting 9 when the
/// doubled value exceeds 9) before being added to the running sum; the number
/// is valid iff the sum is divisible by 10. The parity computation keeps the
/// check digit undoubled whether the string length is odd or even.
///
/// A string shorter than 2 characters can never carry a checksum and is
/// always invalid. Any non-digit character fails the check rather than
/// raising an error.
///
/// # Examples
///
/// ```
/// use paycard_rs::luhn;
///
/// assert!(luhn::is_valid("79927398713"));
/// assert!(!luhn::is_valid("79927398712"));
/// assert!(!luhn::is_valid("7992739871x"));
/// ```
pub fn is_valid(number: &str) -> bool {
    let len = number.len();
    if len < 2 {
        return false;
    }
    let parity = len % 2;
    let mut sum = 0u32;
    for (i, c) in number.chars().enumerate() {
        let mut d = match c.to_digit(10) {
            Some(d) => d,
            None => return false,
        };
        if i % 2 == parity {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
    }
    sum % 10 == 0
}
