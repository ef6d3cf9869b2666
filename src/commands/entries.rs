// Copyright (c) 2025 Monthledger contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{EntryKind, NewEntry, Totals};
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, month_or_current, pretty_table, today_string};
use anyhow::Result;
use std::collections::HashSet;
use std::str::FromStr;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            add(store, sub)?;
        }
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn add(store: &Store, sub: &clap::ArgMatches) -> Result<String> {
    let month = month_or_current(sub)?;
    let kind = EntryKind::from_str(sub.get_one::<String>("kind").unwrap())?;
    let entry = NewEntry {
        expense: sub.get_one::<String>("expense").cloned().unwrap_or_default(),
        income: sub.get_one::<String>("income").cloned().unwrap_or_default(),
        date: sub
            .get_one::<String>("date")
            .cloned()
            .unwrap_or_else(today_string),
        kind: kind.to_string(),
        description: sub
            .get_one::<String>("description")
            .cloned()
            .unwrap_or_default(),
    };
    let id = store.append(&month, &entry)?;
    println!("Recorded {} entry {} in {}", kind, id, month);
    Ok(id)
}

pub fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let month = month_or_current(sub)?;
    let records = store.list(&month)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &records)? {
        return Ok(());
    }
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.id.clone(),
                r.expense.clone(),
                r.income.clone(),
                r.date.clone(),
                r.kind.clone(),
                r.description.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Id", "Expense", "Income", "Date", "Type", "Description"],
            rows,
        )
    );
    let totals = Totals::of(&records);
    println!(
        "Total Expense: {}, Total Income: {}",
        fmt_money(&totals.expense),
        fmt_money(&totals.income)
    );
    Ok(())
}

pub fn rm(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let month = month_or_current(sub)?;
    let ids: HashSet<String> = sub
        .get_many::<String>("id")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();
    let removed = store.delete(&ids, &month)?;
    println!("Removed {} entries from {}", removed, month);
    Ok(())
}
