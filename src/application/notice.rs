use crate::domain::{Amount, EntryKind, Transaction, ValidationError};
use crate::format::CurrencyFormat;

/// Transient, user-facing feedback produced by an action on the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Added { kind: EntryKind, amount: Amount },
    Rejected(ValidationError),
    Cleared,
}

impl Notice {
    pub fn from_result(result: &Result<Transaction, ValidationError>) -> Self {
        match result {
            Ok(tx) => Notice::Added {
                kind: tx.kind,
                amount: tx.amount,
            },
            Err(err) => Notice::Rejected(*err),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Rejected(_))
    }

    pub fn message(&self, formatter: &dyn CurrencyFormat) -> String {
        match self {
            Notice::Added { kind, amount } => {
                let what = match kind {
                    EntryKind::Income => "income",
                    EntryKind::Expense => "expense",
                };
                format!("Added {}: {}", what, formatter.format(*amount))
            }
            Notice::Rejected(ValidationError::EmptyAmount) => "Please enter an amount".to_string(),
            Notice::Rejected(ValidationError::InvalidAmount) => {
                "Please enter a valid amount".to_string()
            }
            Notice::Cleared => "All data cleared".to_string(),
        }
    }
}
