// Copyright (c) 2025 Monthledger contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{NewEntry, Record};
use crate::utils::{is_amount, MONTHS};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.monthledger", "Monthledger", "monthledger"));

/// User-visible store errors. Everything else (I/O) surfaces as anyhow
/// context on the failing operation.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Please enter a valid number for expense or income")]
    InvalidAmount,
    #[error("Please enter a date")]
    MissingDate,
    #[error("Please select entries to delete")]
    EmptySelection,
}

/// Ledger directory: `MONTHLEDGER_DATA_DIR` if set, else the platform data
/// dir. Created on demand.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("MONTHLEDGER_DATA_DIR") {
        let dir = PathBuf::from(dir);
        fs::create_dir_all(&dir).context("Failed to create data dir")?;
        return Ok(dir);
    }
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let dir = proj.data_dir().to_path_buf();
    fs::create_dir_all(&dir).context("Failed to create data dir")?;
    Ok(dir)
}

/// File-backed ledger, one CSV partition per calendar month. Each operation
/// is a one-shot read, append, or rewrite against the partition file.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn open() -> Result<Store> {
        Ok(Store { dir: data_dir()? })
    }

    /// Store rooted at an explicit directory, for tests and scripting.
    pub fn at(dir: impl Into<PathBuf>) -> Store {
        Store { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn partition_path(&self, month: &str) -> PathBuf {
        self.dir.join(format!("transactions_{}.csv", month))
    }

    /// Validates the entry, assigns a fresh id, and appends it to the
    /// month's partition, creating the file on first write.
    pub fn append(&self, month: &str, entry: &NewEntry) -> Result<String> {
        if !is_amount(&entry.expense) && !is_amount(&entry.income) {
            return Err(LedgerError::InvalidAmount.into());
        }
        if entry.date.trim().is_empty() {
            return Err(LedgerError::MissingDate.into());
        }

        let path = self.partition_path(month);
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Open partition {}", path.display()))?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        let id = Uuid::new_v4().to_string();
        wtr.write_record([
            id.as_str(),
            entry.expense.as_str(),
            entry.income.as_str(),
            entry.date.as_str(),
            entry.kind.as_str(),
            entry.description.as_str(),
        ])?;
        wtr.flush()?;
        Ok(id)
    }

    /// Records in file order. A missing partition is an empty month; rows
    /// with missing trailing fields load with those fields empty.
    pub fn list(&self, month: &str) -> Result<Vec<Record>> {
        let path = self.partition_path(month);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&path)
            .with_context(|| format!("Open partition {}", path.display()))?;
        let mut records = Vec::new();
        for result in rdr.records() {
            let rec = result?;
            records.push(Record {
                id: rec.get(0).unwrap_or("").to_string(),
                expense: rec.get(1).unwrap_or("").to_string(),
                income: rec.get(2).unwrap_or("").to_string(),
                date: rec.get(3).unwrap_or("").to_string(),
                kind: rec.get(4).unwrap_or("").to_string(),
                description: rec.get(5).unwrap_or("").to_string(),
            });
        }
        Ok(records)
    }

    /// Rewrites the partition without the given ids. Surviving rows keep
    /// their field values and order. A missing partition is a no-op.
    pub fn delete(&self, ids: &HashSet<String>, month: &str) -> Result<usize> {
        if ids.is_empty() {
            return Err(LedgerError::EmptySelection.into());
        }
        let path = self.partition_path(month);
        if !path.exists() {
            return Ok(0);
        }
        let records = self.list(month)?;
        let file = fs::File::create(&path)
            .with_context(|| format!("Rewrite partition {}", path.display()))?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        let mut removed = 0;
        for r in &records {
            if ids.contains(&r.id) {
                removed += 1;
                continue;
            }
            wtr.write_record([
                r.id.as_str(),
                r.expense.as_str(),
                r.income.as_str(),
                r.date.as_str(),
                r.kind.as_str(),
                r.description.as_str(),
            ])?;
        }
        wtr.flush()?;
        Ok(removed)
    }

    /// Months with a partition on disk, in calendar order.
    pub fn months(&self) -> Result<Vec<String>> {
        let mut present = Vec::new();
        for m in MONTHS {
            if self.partition_path(m).exists() {
                present.push(m.to_string());
            }
        }
        Ok(present)
    }
}
