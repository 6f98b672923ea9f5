use crate::domain::{format_amount, Amount};

/// Renders an amount of money for display.
///
/// The ledger itself never formats money; front ends pick an implementation.
/// Any `Fn(Amount) -> String` works, which keeps tests free of locale details.
pub trait CurrencyFormat {
    fn format(&self, amount: Amount) -> String;
}

impl<F> CurrencyFormat for F
where
    F: Fn(Amount) -> String,
{
    fn format(&self, amount: Amount) -> String {
        self(amount)
    }
}

/// Plain "1234.50" with no symbol or grouping.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormat;

impl CurrencyFormat for PlainFormat {
    fn format(&self, amount: Amount) -> String {
        format_amount(amount)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// "$1,234.50"
    Prefix,
    /// "1.234,50 €"
    Suffix,
}

/// Locale-driven currency formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCurrency {
    pub language_tag: String,
    pub currency_code: String,
    pub symbol: String,
    pub symbol_position: SymbolPosition,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl LocaleCurrency {
    /// Language tags with a built-in preset.
    pub const PRESETS: &'static [&'static str] = &["en-US", "ar-SA", "de-DE"];

    /// Look up a preset by BCP 47 language tag (case-insensitive).
    pub fn preset(language_tag: &str) -> Option<Self> {
        let preset = match language_tag.to_ascii_lowercase().as_str() {
            "en-us" => Self::default(),
            "ar-sa" => Self {
                language_tag: "ar-SA".into(),
                currency_code: "SAR".into(),
                symbol: "ر.س".into(),
                symbol_position: SymbolPosition::Suffix,
                decimal_separator: '.',
                grouping_separator: ',',
            },
            "de-de" => Self {
                language_tag: "de-DE".into(),
                currency_code: "EUR".into(),
                symbol: "€".into(),
                symbol_position: SymbolPosition::Suffix,
                decimal_separator: ',',
                grouping_separator: '.',
            },
            _ => return None,
        };
        Some(preset)
    }

    /// Unsigned, grouped number. Keeps every digit the amount carries, with at
    /// least two decimals.
    fn format_number(&self, amount: Amount) -> String {
        let plain = format_amount(amount.abs());
        let (units, decimals) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
        format!(
            "{}{}{}",
            group_digits(units, self.grouping_separator),
            self.decimal_separator,
            decimals
        )
    }
}

impl Default for LocaleCurrency {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            currency_code: "USD".into(),
            symbol: "$".into(),
            symbol_position: SymbolPosition::Prefix,
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl CurrencyFormat for LocaleCurrency {
    fn format(&self, amount: Amount) -> String {
        let sign = if amount < Amount::ZERO { "-" } else { "" };
        let body = self.format_number(amount);
        match self.symbol_position {
            SymbolPosition::Prefix => format!("{}{}{}", sign, self.symbol, body),
            SymbolPosition::Suffix => format!("{}{} {}", sign, body, self.symbol),
        }
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(s: &str) -> Amount {
        Amount::from_str_exact(s).unwrap()
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("0", ','), "0");
        assert_eq!(group_digits("999", ','), "999");
        assert_eq!(group_digits("1000", ','), "1,000");
        assert_eq!(group_digits("1234567", '.'), "1.234.567");
    }

    #[test]
    fn test_en_us_format() {
        let fmt = LocaleCurrency::preset("en-US").unwrap();
        assert_eq!(fmt.format(Amount::ZERO), "$0.00");
        assert_eq!(fmt.format(amount("20.5")), "$20.50");
        assert_eq!(fmt.format(amount("1234567.89")), "$1,234,567.89");
        assert_eq!(fmt.format(amount("-15")), "-$15.00");
        assert_eq!(fmt.format(amount("1.999")), "$1.999");
    }

    #[test]
    fn test_suffix_formats() {
        let sar = LocaleCurrency::preset("ar-sa").unwrap();
        assert_eq!(sar.format(amount("5000")), "5,000.00 ر.س");

        let eur = LocaleCurrency::preset("DE-de").unwrap();
        assert_eq!(eur.format(amount("1234.5")), "1.234,50 €");
        assert_eq!(eur.format(amount("-0.05")), "-0,05 €");
        assert_eq!(eur.format(amount("0.001")), "0,001 €");
    }

    #[test]
    fn test_unknown_preset() {
        assert!(LocaleCurrency::preset("xx-YY").is_none());
        for tag in LocaleCurrency::PRESETS {
            assert!(LocaleCurrency::preset(tag).is_some());
        }
    }

    #[test]
    fn test_closures_are_formatters() {
        let fmt = |amount: Amount| format!("{amount} units");
        assert_eq!(fmt.format(amount("4.2")), "4.2 units");
        assert_eq!(PlainFormat.format(amount("-12.34")), "-12.34");
    }
}
