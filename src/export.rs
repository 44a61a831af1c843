// src/export.rs
//! Raw-entry CSV dump: one line per (date, category, contact), the record's
//! cells joined in page order. Useful for spot-checking a run against the
//! portal without touching the spreadsheet.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::ReportEntry;

pub const HEADERS: [&str; 4] = ["date", "data_type", "contact_name", "data"];

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::config(format!("path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Write `entries` to `path` (created or truncated). Returns the path written.
pub fn write_entries_csv(path: &Path, entries: &[ReportEntry]) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let mut w = csv::Writer::from_path(path)?;
    w.write_record(HEADERS)?;
    for e in entries {
        let date = e.date.format("%Y-%m-%d").to_string();
        let data = e.record.cells().join(", ");
        w.write_record([date.as_str(), e.category.as_str(), e.contact.name(), data.as_str()])?;
    }
    w.flush()?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Contact, parse_date};
    use crate::record::StatsRecord;

    #[test]
    fn writes_header_and_one_line_per_entry() {
        let dir = std::env::temp_dir().join("ambi_export_unit");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("nested").join("out.csv");

        let c = Contact::new("橘萌生");
        let entries = vec![ReportEntry {
            date: parse_date("2025-01-08").unwrap(),
            category: Category::Interested,
            contact: c.clone(),
            record: StatsRecord::zeroed(Category::Interested, &c),
        }];
        write_entries_csv(&path, &entries).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "date,data_type,contact_name,data");
        assert_eq!(lines[1], "2025-01-08,interested,橘萌生,\"橘萌生, 0, 0, 0, 0, 0, 0, 0\"");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn file_in_place_of_directory_is_rejected() {
        let file = std::env::temp_dir().join("ambi_export_not_a_dir");
        fs::write(&file, "x").unwrap();
        assert!(ensure_directory(&file).is_err());
    }
}
