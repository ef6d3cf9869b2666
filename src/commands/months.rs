// Copyright (c) 2025 Monthledger contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::Store;
use anyhow::Result;

pub fn handle(store: &Store) -> Result<()> {
    let months = store.months()?;
    if months.is_empty() {
        println!("No recorded months in {}", store.dir().display());
        return Ok(());
    }
    for m in months {
        println!("{}", m);
    }
    Ok(())
}
