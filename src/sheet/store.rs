// src/sheet/store.rs
//! Where the numbers end up. One worksheet (tab) per month inside a single
//! spreadsheet; tabs are created by hand, never by this tool.

use std::collections::{BTreeMap, BTreeSet};

use super::column::a1;
use crate::error::{Error, Result};

/// One cell update inside a batch: A1 range (`"O42"`) and value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeValue {
    pub range: String,
    pub value: i64,
}

pub trait SheetStore {
    fn has_worksheet(&mut self, sheet: &str) -> Result<bool>;

    fn read_cell(&mut self, sheet: &str, row: u32, col: u32) -> Result<Option<String>>;

    fn write_cell(&mut self, sheet: &str, row: u32, col: u32, value: i64) -> Result<()>;

    /// All updates for one worksheet in a single request.
    fn batch_write(&mut self, sheet: &str, updates: &[RangeValue]) -> Result<()>;
}

/// In-memory spreadsheet, keyed by tab then A1 reference. Used by tests and
/// by `--dry-run` to show what a run would have written.
#[derive(Clone, Debug, Default)]
pub struct MemorySheetStore {
    sheets: BTreeMap<String, BTreeMap<String, String>>,
    batches: usize,
}

impl MemorySheetStore {
    /// A store with these (empty) tabs.
    pub fn with_worksheets<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut store = Self::default();
        for n in names {
            store.add_worksheet(n);
        }
        store
    }

    pub fn add_worksheet(&mut self, name: impl Into<String>) {
        self.sheets.entry(name.into()).or_default();
    }

    pub fn worksheets(&self) -> BTreeSet<&str> {
        self.sheets.keys().map(String::as_str).collect()
    }

    /// Cell by A1 reference.
    pub fn get(&self, sheet: &str, range: &str) -> Option<&str> {
        self.sheets.get(sheet)?.get(range).map(String::as_str)
    }

    pub fn cells(&self, sheet: &str) -> Option<&BTreeMap<String, String>> {
        self.sheets.get(sheet)
    }

    /// Number of `batch_write` calls served so far.
    pub fn batch_count(&self) -> usize {
        self.batches
    }

    fn tab_mut(&mut self, sheet: &str) -> Result<&mut BTreeMap<String, String>> {
        self.sheets
            .get_mut(sheet)
            .ok_or_else(|| Error::config(format!("worksheet {sheet:?} does not exist")))
    }
}

impl SheetStore for MemorySheetStore {
    fn has_worksheet(&mut self, sheet: &str) -> Result<bool> {
        Ok(self.sheets.contains_key(sheet))
    }

    fn read_cell(&mut self, sheet: &str, row: u32, col: u32) -> Result<Option<String>> {
        let key = a1(row, col)?;
        Ok(self.tab_mut(sheet)?.get(&key).cloned())
    }

    fn write_cell(&mut self, sheet: &str, row: u32, col: u32, value: i64) -> Result<()> {
        let key = a1(row, col)?;
        self.tab_mut(sheet)?.insert(key, value.to_string());
        Ok(())
    }

    fn batch_write(&mut self, sheet: &str, updates: &[RangeValue]) -> Result<()> {
        let tab = self.tab_mut(sheet)?;
        for u in updates {
            tab.insert(u.range.clone(), u.value.to_string());
        }
        self.batches += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_round_trip_by_index_and_range() {
        let mut store = MemorySheetStore::with_worksheets(["2025.01"]);
        store.write_cell("2025.01", 42, 15, 7).unwrap();
        assert_eq!(store.get("2025.01", "O42"), Some("7"));
        assert_eq!(store.read_cell("2025.01", 42, 15).unwrap().as_deref(), Some("7"));
        assert_eq!(store.read_cell("2025.01", 43, 15).unwrap(), None);
    }

    #[test]
    fn missing_tab_is_a_configuration_error() {
        let mut store = MemorySheetStore::default();
        assert!(!store.has_worksheet("2025.01").unwrap());
        let err = store
            .batch_write("2025.01", &[RangeValue { range: s!("G20"), value: 1 }])
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert_eq!(store.batch_count(), 0);
    }
}
