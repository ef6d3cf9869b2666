// Copyright (c) 2025 Monthledger contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Totals;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, month_or_current};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Serialize)]
pub struct TotalsRow {
    pub month: String,
    pub expense: Decimal,
    pub income: Decimal,
    pub balance: Decimal,
}

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let row = month_totals(store, m)?;
    if maybe_print_json(m.get_flag("json"), false, &row)? {
        return Ok(());
    }
    println!(
        "{}: Total Expense: {}, Total Income: {}, Balance: {}",
        row.month,
        fmt_money(&row.expense),
        fmt_money(&row.income),
        fmt_money(&row.balance)
    );
    Ok(())
}

pub fn month_totals(store: &Store, m: &clap::ArgMatches) -> Result<TotalsRow> {
    let month = month_or_current(m)?;
    let totals = Totals::of(&store.list(&month)?);
    Ok(TotalsRow {
        month,
        balance: totals.balance(),
        expense: totals.expense,
        income: totals.income,
    })
}
