// Copyright (c) 2025 Monthledger contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::anyhow;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One persisted ledger row. Amount fields keep the raw text the user
/// entered so rows round-trip through list/delete unchanged; they are only
/// parsed at validation and aggregation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub expense: String,
    pub income: String,
    pub date: String,
    pub kind: String,
    pub description: String,
}

/// Fields accepted on entry, before an id is assigned.
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub expense: String,
    pub income: String,
    pub date: String,
    pub kind: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Expense,
    Income,
}

impl EntryKind {
    pub const VARIANTS: [&'static str; 2] = ["Expense", "Income"];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Expense => "Expense",
            EntryKind::Income => "Income",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("expense") {
            Ok(EntryKind::Expense)
        } else if s.eq_ignore_ascii_case("income") {
            Ok(EntryKind::Income)
        } else {
            Err(anyhow!("Invalid entry kind '{}', expected Expense|Income", s))
        }
    }
}

/// Running totals over a set of records. Recomputed in full on every load;
/// a row contributes to both sides if both amount fields are numeric.
#[derive(Debug, Clone, Serialize)]
pub struct Totals {
    pub expense: Decimal,
    pub income: Decimal,
}

impl Totals {
    pub fn of(records: &[Record]) -> Totals {
        let mut expense = Decimal::ZERO;
        let mut income = Decimal::ZERO;
        for r in records {
            if let Ok(v) = r.expense.trim().parse::<Decimal>() {
                expense += v;
            }
            if let Ok(v) = r.income.trim().parse::<Decimal>() {
                income += v;
            }
        }
        Totals { expense, income }
    }

    pub fn balance(&self) -> Decimal {
        self.income - self.expense
    }
}
