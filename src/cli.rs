// Copyright (c) 2025 Monthledger contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::EntryKind;
use clap::{Arg, ArgAction, Command};

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_name("MONTH")
        .help("Calendar month name (defaults to the current month)")
}

pub fn build_cli() -> Command {
    Command::new("monthledger")
        .about("Per-month income/expense ledger over flat CSV files")
        .subcommand(Command::new("init").about("Create and report the ledger directory"))
        .subcommand(
            Command::new("entry")
                .about("Record, list, and delete ledger entries")
                .subcommand(
                    Command::new("add")
                        .about("Record a new entry in a month's ledger")
                        .arg(
                            Arg::new("expense")
                                .long("expense")
                                .value_name("AMOUNT")
                                .help("Expense amount"),
                        )
                        .arg(
                            Arg::new("income")
                                .long("income")
                                .value_name("AMOUNT")
                                .help("Income amount"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("DD-MM-YY")
                                .help("Entry date (defaults to today)"),
                        )
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .value_parser(EntryKind::VARIANTS)
                                .default_value("Expense"),
                        )
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .value_name("TEXT")
                                .default_value(""),
                        )
                        .arg(month_arg()),
                )
                .subcommand(
                    Command::new("list")
                        .about("List a month's entries with running totals")
                        .arg(month_arg())
                        .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
                        .arg(Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue)),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete entries by id from a month's ledger")
                        .arg(
                            Arg::new("id")
                                .value_name("ID")
                                .num_args(0..)
                                .action(ArgAction::Append),
                        )
                        .arg(month_arg()),
                ),
        )
        .subcommand(
            Command::new("totals")
                .about("Show a month's expense and income totals")
                .arg(month_arg())
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(Command::new("months").about("List months with recorded entries"))
}
