use rust_decimal::Decimal;
use thiserror::Error;

/// Money is held as an exact decimal, so "20.5" stays 20.5 and "0.001" stays 0.001.
/// No rounding happens anywhere in the ledger; display code decides the precision.
pub type Amount = Decimal;

/// Format an amount as a plain decimal string with at least two decimal places.
/// Example: 50 -> "50.00", -12.34 -> "-12.34", 1.999 -> "1.999"
pub fn format_amount(amount: Amount) -> String {
    let mut amount = amount.normalize();
    if amount.scale() < 2 {
        amount.rescale(2);
    }
    amount.to_string()
}

/// Parse user text into an exact amount.
/// Example: "50" -> 50, "20.5" -> 20.5, ".5" -> 0.5, "-5" -> -5
///
/// Accepts an optional sign, ASCII digits and at most one '.'. Whitespace,
/// exponents and ',' separators are rejected.
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let (negative, unsigned) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    let (units_str, decimal_str) = match unsigned.split_once('.') {
        Some((units, decimals)) => (units, decimals),
        None => (unsigned, ""),
    };

    if units_str.is_empty() && decimal_str.is_empty() {
        return Err(ParseAmountError::InvalidFormat);
    }
    if !is_digits(units_str) || !is_digits(decimal_str) {
        return Err(ParseAmountError::InvalidFormat);
    }

    // Rebuild a canonical form so "5." and ".5" parse too
    let units_str = if units_str.is_empty() { "0" } else { units_str };
    let canonical = if decimal_str.is_empty() {
        units_str.to_string()
    } else {
        format!("{}.{}", units_str, decimal_str)
    };

    let amount = Decimal::from_str_exact(&canonical).map_err(|_| ParseAmountError::OutOfRange)?;
    Ok(if negative { -amount } else { amount })
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAmountError {
    #[error("invalid money format")]
    InvalidFormat,
    #[error("amount is too large or too precise")]
    OutOfRange,
}
