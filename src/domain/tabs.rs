//! Tab registry
//!
//! The dashboard has a fixed set of five top-level sections. Each one is a
//! [`TabId`] variant paired with a static [`TabDescriptor`] holding the text
//! shown while the section has no data yet.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level dashboard sections, in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabId {
    #[default]
    Loans,
    Taxes,
    Debt,
    Income,
    Expenses,
}

/// Static display record for a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabDescriptor {
    pub id: TabId,
    pub label: &'static str,
    pub icon: &'static str,
    pub empty_title: &'static str,
    pub empty_description: &'static str,
}

pub static TABS: [TabDescriptor; 5] = [
    TabDescriptor {
        id: TabId::Loans,
        label: "Student Loans",
        icon: "🎓",
        empty_title: "No student loans tracked yet",
        empty_description: "Keep track of your educational debt, interest rates, and repayment progress in one place.",
    },
    TabDescriptor {
        id: TabId::Taxes,
        label: "Taxes",
        icon: "📋",
        empty_title: "No tax records found",
        empty_description: "Organize your annual filings, estimated payments, and deductions to stay ahead of tax season.",
    },
    TabDescriptor {
        id: TabId::Debt,
        label: "Other Debt",
        icon: "💳",
        empty_title: "No other debt tracked yet",
        empty_description: "Monitor credit cards, personal loans, or other liabilities to visualize your path to financial freedom.",
    },
    TabDescriptor {
        id: TabId::Income,
        label: "Income",
        icon: "💰",
        empty_title: "No income streams added",
        empty_description: "Log your salary, freelance earnings, and passive income sources to understand your total cash flow.",
    },
    TabDescriptor {
        id: TabId::Expenses,
        label: "Expenses",
        icon: "📊",
        empty_title: "No expenses logged yet",
        empty_description: "Track your spending habits across categories to identify opportunities for saving and optimization.",
    },
];

/// The full registry in display order.
pub fn registry() -> &'static [TabDescriptor; 5] {
    &TABS
}

/// Descriptor for `id`. Total over [`TabId`].
pub fn lookup(id: TabId) -> &'static TabDescriptor {
    &TABS[id.index()]
}

impl TabId {
    pub const ALL: [TabId; 5] = [
        TabId::Loans,
        TabId::Taxes,
        TabId::Debt,
        TabId::Income,
        TabId::Expenses,
    ];

    /// Position in the registry.
    pub const fn index(self) -> usize {
        match self {
            TabId::Loans => 0,
            TabId::Taxes => 1,
            TabId::Debt => 2,
            TabId::Income => 3,
            TabId::Expenses => 4,
        }
    }

    pub fn descriptor(self) -> &'static TabDescriptor {
        lookup(self)
    }

    pub const fn key(self) -> &'static str {
        match self {
            TabId::Loans => "loans",
            TabId::Taxes => "taxes",
            TabId::Debt => "debt",
            TabId::Income => "income",
            TabId::Expenses => "expenses",
        }
    }

    pub fn from_key(key: &str) -> Option<TabId> {
        let key = key.trim();
        TabId::ALL
            .into_iter()
            .find(|id| id.key().eq_ignore_ascii_case(key))
    }

    pub const fn shortcut(self) -> char {
        match self {
            TabId::Loans => '1',
            TabId::Taxes => '2',
            TabId::Debt => '3',
            TabId::Income => '4',
            TabId::Expenses => '5',
        }
    }

    pub fn from_shortcut(ch: char) -> Option<TabId> {
        TabId::ALL.into_iter().find(|id| id.shortcut() == ch)
    }

    /// Next tab in display order, wrapping around.
    pub fn next(self) -> TabId {
        TabId::ALL[(self.index() + 1) % TabId::ALL.len()]
    }

    /// Previous tab in display order, wrapping around.
    pub fn prev(self) -> TabId {
        TabId::ALL[(self.index() + TabId::ALL.len() - 1) % TabId::ALL.len()]
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tab `{0}` (expected one of: loans, taxes, debt, income, expenses)")]
pub struct ParseTabError(pub String);

impl FromStr for TabId {
    type Err = ParseTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TabId::from_key(s).ok_or_else(|| ParseTabError(s.to_string()))
    }
}
