// Copyright (c) 2025 Monthledger contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use monthledger::models::{Record, Totals};
use monthledger::store::Store;
use monthledger::{cli, commands::reports};
use rust_decimal::Decimal;
use tempfile::tempdir;

fn rec(expense: &str, income: &str) -> Record {
    Record {
        id: "x".to_string(),
        expense: expense.to_string(),
        income: income.to_string(),
        date: "01-01-24".to_string(),
        kind: "Expense".to_string(),
        description: String::new(),
    }
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn totals_partition_expense_and_income_sums() {
    let records = vec![rec("10.25", ""), rec("4.75", ""), rec("", "100"), rec("", "0.50")];
    let t = Totals::of(&records);
    assert_eq!(t.expense, dec("15.00"));
    assert_eq!(t.income, dec("100.50"));
    assert_eq!(t.balance(), dec("85.50"));
}

#[test]
fn non_numeric_fields_are_skipped_silently() {
    let records = vec![rec("abc", "xyz"), rec("", ""), rec("5", "n/a")];
    let t = Totals::of(&records);
    assert_eq!(t.expense, dec("5"));
    assert_eq!(t.income, Decimal::ZERO);
}

#[test]
fn a_row_with_both_amounts_counts_on_both_sides() {
    let records = vec![rec("3", "7")];
    let t = Totals::of(&records);
    assert_eq!(t.expense, dec("3"));
    assert_eq!(t.income, dec("7"));
}

#[test]
fn empty_month_totals_are_zero() {
    let t = Totals::of(&[]);
    assert_eq!(t.expense, Decimal::ZERO);
    assert_eq!(t.income, Decimal::ZERO);
    assert_eq!(t.balance(), Decimal::ZERO);
}

#[test]
fn totals_command_reads_the_selected_month() {
    let dir = tempdir().unwrap();
    let store = Store::at(dir.path());
    std::fs::write(
        store.partition_path("March"),
        "id1,12.5,,01-03-24,Expense,lunch\nid2,,40,02-03-24,Income,rebate\n",
    )
    .unwrap();

    let matches = cli::build_cli().get_matches_from(["monthledger", "totals", "--month", "march"]);
    if let Some(("totals", totals_m)) = matches.subcommand() {
        let row = reports::month_totals(&store, totals_m).unwrap();
        assert_eq!(row.month, "March");
        assert_eq!(row.expense, dec("12.5"));
        assert_eq!(row.income, dec("40"));
        assert_eq!(row.balance, dec("27.5"));
    } else {
        panic!("no totals subcommand");
    }
}
