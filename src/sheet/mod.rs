// src/sheet/mod.rs
pub mod auth;
pub mod column;
pub mod google;
pub mod layout;
pub mod store;
pub mod writer;

pub use column::{a1, column_index, column_letter};
pub use layout::{RowLocator, column_for_date, column_for_day, sheet_name};
pub use store::{MemorySheetStore, SheetStore};
