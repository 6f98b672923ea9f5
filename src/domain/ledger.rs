use serde::Serialize;
use thiserror::Error;

use super::{parse_amount, Amount, EntryKind, Labels, Transaction};

/// Reasons an entry is rejected. Rejection never touches ledger state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("amount is empty")]
    EmptyAmount,
    #[error("amount must be a number greater than zero")]
    InvalidAmount,
}

/// In-memory tally of income and expense entries with running totals.
///
/// Totals are kept alongside the entries rather than recomputed, and the three
/// are only ever changed together by [`Ledger::add_entry`] and [`Ledger::reset`].
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: Vec<Transaction>,
    total_income: Amount,
    total_expense: Amount,
    labels: Labels,
}

/// Point-in-time view of the ledger, entries newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_income: Amount,
    pub total_expense: Amount,
    pub balance: Amount,
    pub entries: Vec<Transaction>,
}

/// How the balance should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceTone {
    Positive,
    Negative,
    Neutral,
}

impl Summary {
    pub fn balance_tone(&self) -> BalanceTone {
        match self.balance {
            b if b > Amount::ZERO => BalanceTone::Positive,
            b if b < Amount::ZERO => BalanceTone::Negative,
            _ => BalanceTone::Neutral,
        }
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty ledger that falls back to the given default descriptions.
    pub fn with_labels(labels: Labels) -> Self {
        Self {
            labels,
            ..Self::default()
        }
    }

    /// Validate raw user input and record it.
    ///
    /// `raw_amount` must parse to a positive amount and is recorded exactly as
    /// entered. An empty (or blank) description is replaced with the default
    /// label for `kind`.
    pub fn add_entry(
        &mut self,
        raw_amount: &str,
        raw_description: &str,
        kind: EntryKind,
    ) -> Result<Transaction, ValidationError> {
        if raw_amount.is_empty() {
            return Err(ValidationError::EmptyAmount);
        }

        let amount = parse_amount(raw_amount).map_err(|_| ValidationError::InvalidAmount)?;
        if amount <= Amount::ZERO {
            return Err(ValidationError::InvalidAmount);
        }

        let total = match kind {
            EntryKind::Income => self.total_income,
            EntryKind::Expense => self.total_expense,
        };
        let new_total = total
            .checked_add(amount)
            .ok_or(ValidationError::InvalidAmount)?;

        let description = if raw_description.trim().is_empty() {
            self.labels.for_kind(kind).to_string()
        } else {
            raw_description.to_string()
        };

        let transaction = Transaction::new(amount, description, kind);
        self.entries.push(transaction.clone());
        match kind {
            EntryKind::Income => self.total_income = new_total,
            EntryKind::Expense => self.total_expense = new_total,
        }

        Ok(transaction)
    }

    /// Drop every entry and zero both totals.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.total_income = Amount::ZERO;
        self.total_expense = Amount::ZERO;
    }

    pub fn summary(&self) -> Summary {
        Summary {
            total_income: self.total_income,
            total_expense: self.total_expense,
            balance: self.balance(),
            entries: self.entries.iter().rev().cloned().collect(),
        }
    }

    pub fn total_income(&self) -> Amount {
        self.total_income
    }

    pub fn total_expense(&self) -> Amount {
        self.total_expense
    }

    pub fn balance(&self) -> Amount {
        self.total_income - self.total_expense
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
