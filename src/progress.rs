// src/progress.rs
use chrono::NaiveDate;

use crate::model::{Category, Contact};

/// Lightweight progress reporting used by the scrape/write run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of report pages to fetch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One report page was fetched and all contacts were read from it.
    fn page_done(&mut self, _date: NaiveDate, _category: Category) {}

    /// A contact had no usable row; a zero record was substituted.
    fn row_missing(&mut self, _date: NaiveDate, _category: Category, _contact: &Contact) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
