use tracing::{debug, info};

use crate::domain::{EntryKind, Labels, Ledger, Summary, Transaction, ValidationError};
use crate::format::{CurrencyFormat, LocaleCurrency};

use super::{AppError, Notice, Settings};

/// Application service owning the screen's ledger.
/// This is the primary interface for any client (CLI session, batch tally, tests).
pub struct LedgerService {
    ledger: Ledger,
    formatter: Box<dyn CurrencyFormat>,
}

impl LedgerService {
    /// Create a service with an empty ledger and the given formatter.
    pub fn new(labels: Labels, formatter: Box<dyn CurrencyFormat>) -> Self {
        Self {
            ledger: Ledger::with_labels(labels),
            formatter,
        }
    }

    /// Build a service from runtime settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, AppError> {
        let currency = settings.currency()?;
        let labels = settings.label_set()?;
        debug!(
            locale = %currency.language_tag,
            currency = %currency.currency_code,
            "ledger service configured"
        );
        Ok(Self::new(labels, Box::new(currency)))
    }

    // ========================
    // Actions
    // ========================

    /// Record an entry from raw user input.
    pub fn add_entry(
        &mut self,
        raw_amount: &str,
        raw_description: &str,
        kind: EntryKind,
    ) -> Result<Transaction, ValidationError> {
        let result = self.ledger.add_entry(raw_amount, raw_description, kind);
        match &result {
            Ok(tx) => debug!(
                kind = %tx.kind,
                amount = %tx.amount,
                entries = self.ledger.len(),
                "entry recorded"
            ),
            Err(err) => info!(%kind, raw_amount, error = %err, "entry rejected"),
        }
        result
    }

    /// Record an entry and describe the outcome for the user.
    pub fn record(&mut self, raw_amount: &str, raw_description: &str, kind: EntryKind) -> Notice {
        Notice::from_result(&self.add_entry(raw_amount, raw_description, kind))
    }

    /// Clear every entry and total.
    pub fn clear_all(&mut self) -> Notice {
        let dropped = self.ledger.len();
        self.ledger.reset();
        info!(dropped, "ledger cleared");
        Notice::Cleared
    }

    // ========================
    // Queries
    // ========================

    pub fn summary(&self) -> Summary {
        self.ledger.summary()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn formatter(&self) -> &dyn CurrencyFormat {
        self.formatter.as_ref()
    }

    /// Render a notice with this service's currency format.
    pub fn notice_message(&self, notice: &Notice) -> String {
        notice.message(self.formatter())
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new(Labels::default(), Box::new(LocaleCurrency::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Amount;

    fn plain_service() -> LedgerService {
        LedgerService::new(
            Labels::english(),
            Box::new(|amount: Amount| format!("{amount} units")),
        )
    }

    #[test]
    fn test_record_reports_outcome() {
        let mut service = plain_service();

        let notice = service.record("12", "", EntryKind::Income);
        assert_eq!(service.notice_message(&notice), "Added income: 12 units");

        let notice = service.record("", "", EntryKind::Expense);
        assert_eq!(notice, Notice::Rejected(ValidationError::EmptyAmount));

        let notice = service.record("-1", "", EntryKind::Expense);
        assert_eq!(notice, Notice::Rejected(ValidationError::InvalidAmount));

        assert_eq!(service.ledger().len(), 1);
        assert_eq!(service.summary().balance, Amount::new(12, 0));
    }

    #[test]
    fn test_clear_all() {
        let mut service = plain_service();
        service.record("12", "", EntryKind::Income);
        service.record("2", "", EntryKind::Expense);

        assert_eq!(service.clear_all(), Notice::Cleared);
        assert!(service.ledger().is_empty());
        assert_eq!(service.summary().total_expense, Amount::ZERO);
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            locale: "ar-SA".into(),
            labels: "arabic".into(),
            color: false,
        };
        let mut service = LedgerService::from_settings(&settings).unwrap();

        let tx = service.add_entry("50", "", EntryKind::Income).unwrap();
        assert_eq!(tx.description, "دخل");
        assert_eq!(service.formatter().format(Amount::new(50, 0)), "50.00 ر.س");
    }
}
