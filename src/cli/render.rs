use colored::Colorize;

use crate::domain::{BalanceTone, EntryKind, Summary, Transaction};
use crate::format::CurrencyFormat;

pub const EMPTY_PLACEHOLDER: &str = "No transactions";

const INCOME_MARKER: &str = "🟢";
const EXPENSE_MARKER: &str = "🔴";

/// `<marker> <description>: <sign><amount>`
pub fn entry_line(tx: &Transaction, formatter: &dyn CurrencyFormat, color: bool) -> String {
    let marker = match tx.kind {
        EntryKind::Income => INCOME_MARKER,
        EntryKind::Expense => EXPENSE_MARKER,
    };
    let amount = format!("{}{}", tx.kind.sign(), formatter.format(tx.amount));
    let amount = if color {
        match tx.kind {
            EntryKind::Income => amount.green().to_string(),
            EntryKind::Expense => amount.red().to_string(),
        }
    } else {
        amount
    };
    format!("{} {}: {}", marker, tx.description, amount)
}

/// Entries newest first, or the placeholder when there are none.
pub fn entries_block(summary: &Summary, formatter: &dyn CurrencyFormat, color: bool) -> String {
    if summary.entries.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }
    summary
        .entries
        .iter()
        .map(|tx| entry_line(tx, formatter, color))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The whole screen: totals, balance, then the entry list.
pub fn screen(summary: &Summary, formatter: &dyn CurrencyFormat, color: bool) -> String {
    let balance = formatter.format(summary.balance);
    let balance = if color {
        match summary.balance_tone() {
            BalanceTone::Positive => balance.green().bold().to_string(),
            BalanceTone::Negative => balance.red().bold().to_string(),
            BalanceTone::Neutral => balance.dimmed().to_string(),
        }
    } else {
        balance
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{:<10}{}\n",
        "Income:",
        formatter.format(summary.total_income)
    ));
    out.push_str(&format!(
        "{:<10}{}\n",
        "Expense:",
        formatter.format(summary.total_expense)
    ));
    out.push_str(&format!("{:<10}{}\n", "Balance:", balance));
    out.push_str(&"-".repeat(32));
    out.push('\n');
    out.push_str(&entries_block(summary, formatter, color));
    out.push('\n');
    out
}
