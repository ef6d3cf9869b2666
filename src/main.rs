// Copyright (c) 2025 Monthledger contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use monthledger::{cli, commands, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let store = store::Store::open()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Ledger directory ready at {}", store.dir().display());
        }
        Some(("entry", sub)) => commands::entries::handle(&store, sub)?,
        Some(("totals", sub)) => commands::reports::handle(&store, sub)?,
        Some(("months", _)) => commands::months::handle(&store)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
