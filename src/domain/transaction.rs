use serde::Serialize;

use super::{Amount, EntryKind};

/// A single recorded income or expense.
/// Transactions are immutable once recorded; the only way to drop one is a full reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// Exact amount as entered (always positive)
    pub amount: Amount,
    /// Human-readable description, never empty
    pub description: String,
    pub kind: EntryKind,
}

impl Transaction {
    /// Create a new transaction. Callers validate input before getting here.
    pub fn new(amount: Amount, description: impl Into<String>, kind: EntryKind) -> Self {
        assert!(amount > Amount::ZERO, "Transaction amount must be positive");
        Self {
            amount,
            description: description.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_transaction() {
        let tx = Transaction::new(Amount::new(205, 1), "coffee", EntryKind::Expense);

        assert_eq!(tx.amount.to_string(), "20.5");
        assert_eq!(tx.description, "coffee");
        assert_eq!(tx.kind, EntryKind::Expense);
    }

    #[test]
    #[should_panic(expected = "Transaction amount must be positive")]
    fn test_transaction_requires_positive_amount() {
        Transaction::new(Amount::ZERO, "nothing", EntryKind::Income);
    }
}
