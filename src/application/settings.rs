use crate::domain::Labels;
use crate::format::LocaleCurrency;

use super::AppError;

/// Runtime configuration, assembled by the CLI from flags and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Language tag of the currency preset, e.g. "en-US"
    pub locale: String,
    /// Name of the default-label set: "english" or "arabic"
    pub labels: String,
    /// Colorize the balance and entry markers
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            labels: "english".to_string(),
            color: false,
        }
    }
}

impl Settings {
    pub fn currency(&self) -> Result<LocaleCurrency, AppError> {
        LocaleCurrency::preset(&self.locale).ok_or_else(|| {
            AppError::UnknownLocale(self.locale.clone(), LocaleCurrency::PRESETS.join(", "))
        })
    }

    pub fn label_set(&self) -> Result<Labels, AppError> {
        match self.labels.to_lowercase().as_str() {
            "english" | "en" => Ok(Labels::english()),
            "arabic" | "ar" => Ok(Labels::arabic()),
            _ => Err(AppError::UnknownLabels(self.labels.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve() {
        let settings = Settings::default();
        assert_eq!(settings.currency().unwrap().currency_code, "USD");
        assert_eq!(settings.label_set().unwrap(), Labels::english());
    }

    #[test]
    fn test_unknown_values_are_errors() {
        let settings = Settings {
            locale: "fr-FR".into(),
            labels: "klingon".into(),
            color: false,
        };
        assert!(matches!(settings.currency(), Err(AppError::UnknownLocale(..))));
        assert!(matches!(settings.label_set(), Err(AppError::UnknownLabels(_))));
    }
}
