//! File-backed key-value store
//!
//! Holds the whole map in memory and rewrites `ledger.json` atomically on
//! every change. The in-memory copy is only updated after the file write
//! succeeds.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::BudgetResult;

use super::file_io::{read_json, remove_if_exists, write_json_atomic};
use super::key_value::{KeyValueStore, LedgerKey};

pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, Value>,
}

impl JsonFileStore {
    /// Open the store at `path`, loading existing contents
    ///
    /// A missing file is an empty store. Unknown keys in the file are kept.
    pub fn open(path: impl Into<PathBuf>) -> BudgetResult<Self> {
        let path = path.into();
        let entries: BTreeMap<String, Value> = read_json(&path)?;
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&mut self, entries: BTreeMap<String, Value>) -> BudgetResult<()> {
        write_json_atomic(&self.path, &entries)?;
        self.entries = entries;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: LedgerKey) -> Option<Value> {
        self.entries.get(key.as_str()).cloned()
    }

    fn set(&mut self, key: LedgerKey, value: Value) -> BudgetResult<()> {
        self.set_many(vec![(key, value)])
    }

    fn set_many(&mut self, changes: Vec<(LedgerKey, Value)>) -> BudgetResult<()> {
        let mut entries = self.entries.clone();
        for (key, value) in changes {
            entries.insert(key.as_str().to_string(), value);
        }
        self.write(entries)
    }

    fn clear(&mut self) -> BudgetResult<()> {
        remove_if_exists(&self.path)?;
        self.entries.clear();
        Ok(())
    }
}
