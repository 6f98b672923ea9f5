use serde::Serialize;

/// Whether an entry brings money in or takes it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Salary, gifts, refunds - money received
    Income,
    /// Purchases, bills - money spent
    Expense,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" | "in" => Some(EntryKind::Income),
            "expense" | "out" => Some(EntryKind::Expense),
            _ => None,
        }
    }

    /// The sign this kind contributes to the balance.
    pub fn sign(&self) -> &'static str {
        match self {
            EntryKind::Income => "+",
            EntryKind::Expense => "-",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Default descriptions used when an entry is recorded without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub income: String,
    pub expense: String,
}

impl Labels {
    pub fn english() -> Self {
        Self {
            income: "income".to_string(),
            expense: "expense".to_string(),
        }
    }

    pub fn arabic() -> Self {
        Self {
            income: "دخل".to_string(),
            expense: "مصروف".to_string(),
        }
    }

    pub fn for_kind(&self, kind: EntryKind) -> &str {
        match kind {
            EntryKind::Income => &self.income,
            EntryKind::Expense => &self.expense,
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::english()
    }
}
