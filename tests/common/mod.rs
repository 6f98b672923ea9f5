// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use tally::application::LedgerService;
use tally::domain::{Amount, EntryKind, Labels};

/// Helper to create a service whose amounts render as plain decimals
pub fn plain_service() -> LedgerService {
    LedgerService::new(Labels::english(), Box::new(tally::format::PlainFormat))
}

/// Test fixture: a small month of entries, in insertion order
pub struct SampleMonth;

impl SampleMonth {
    pub const ENTRIES: &'static [(&'static str, &'static str, EntryKind)] = &[
        ("2500", "salary", EntryKind::Income),
        ("900", "rent", EntryKind::Expense),
        ("20.5", "coffee", EntryKind::Expense),
        ("150.75", "freelance", EntryKind::Income),
        ("64.10", "", EntryKind::Expense),
    ];

    pub fn total_income() -> Amount {
        Amount::new(265075, 2)
    }

    pub fn total_expense() -> Amount {
        Amount::new(98460, 2)
    }

    /// Record every sample entry, panicking if one is rejected
    pub fn record(service: &mut LedgerService) {
        for (amount, description, kind) in Self::ENTRIES {
            service
                .add_entry(amount, description, *kind)
                .expect("sample entry should be valid");
        }
    }
}
