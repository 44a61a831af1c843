// src/sheet/layout.rs
//! Where a value lands in the monthly sheet: which tab (`YYYY.MM`), which
//! column (day of month, with a spacer column after every 7 days) and which
//! row (per contact/category base row plus a fixed field offset).

use std::collections::{BTreeSet, HashMap};

use chrono::{Datelike, NaiveDate};

use crate::config::consts::{DAYS_PER_SPACER, FIRST_DAY_COLUMN};
use crate::error::{Error, Result};
use crate::model::{Category, Contact};

/// Column for a day of the month (1-based). Day 1 is column G; every elapsed
/// week inserts one blank spacer column.
pub fn column_for_day(day: u32) -> u32 {
    let d = day.saturating_sub(1);
    FIRST_DAY_COLUMN + d + d / DAYS_PER_SPACER
}

pub fn column_for_date(date: NaiveDate) -> u32 {
    column_for_day(date.day())
}

/// Worksheet (tab) name for a date: `2025.01`.
pub fn sheet_name(date: NaiveDate) -> String {
    date.format("%Y.%m").to_string()
}

/// Metric fields written to the sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    SendCount,
    OpensCount,
    EntryCount,
    InterestedCount,
    InterestedEntryCount,
}

impl Field {
    /// Fields written for `category`, with their row offset from the base row.
    /// Offset 2 of the scout block is a rate row the sheet computes itself.
    pub fn layout(category: Category) -> &'static [(Field, u32)] {
        const SCOUT: &[(Field, u32)] = &[
            (Field::SendCount, 0),
            (Field::OpensCount, 1),
            (Field::EntryCount, 3),
        ];
        const INTEREST: &[(Field, u32)] = &[
            (Field::InterestedCount, 0),
            (Field::InterestedEntryCount, 1),
        ];
        if category.is_scout() { SCOUT } else { INTEREST }
    }
}

/// (contact, category) → base row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowLocator {
    rows: HashMap<(Contact, Category), u32>,
}

/// Production sheet layout: (contact, platinum, regular, interested).
const DEFAULT_ROWS: &[(&str, u32, u32, u32)] = &[
    ("山中沙矢", 20, 25, 30),
    ("橘萌生", 37, 42, 47),
    ("奥野翔子", 71, 76, 81),
];

impl Default for RowLocator {
    fn default() -> Self {
        let mut loc = RowLocator::empty();
        for &(name, platinum, regular, interested) in DEFAULT_ROWS {
            let c = Contact::new(name);
            loc.insert(c.clone(), Category::Platinum, platinum);
            loc.insert(c.clone(), Category::Regular, regular);
            loc.insert(c, Category::Interested, interested);
        }
        loc
    }
}

impl RowLocator {
    pub fn empty() -> Self {
        Self { rows: HashMap::new() }
    }

    pub fn insert(&mut self, contact: Contact, category: Category, base_row: u32) -> Option<u32> {
        self.rows.insert((contact, category), base_row)
    }

    pub fn locate(&self, contact: &Contact, category: Category) -> Result<u32> {
        self.rows
            .get(&(contact.clone(), category))
            .copied()
            .ok_or_else(|| Error::config(format!("no sheet row for {contact} / {category}")))
    }

    /// Every contact must have a row for every category. Run before any
    /// network traffic so a typo fails fast.
    pub fn validate(&self, contacts: &[Contact], categories: &[Category]) -> Result<()> {
        let mut gaps = Vec::new();
        for contact in contacts {
            for &category in categories {
                if self.locate(contact, category).is_err() {
                    gaps.push(format!("{contact}/{category}"));
                }
            }
        }
        if !gaps.is_empty() {
            return Err(Error::config(format!("no sheet row for: {}", gaps.join(", "))));
        }

        // Two fields on one cell would silently overwrite each other
        let mut used = BTreeSet::new();
        for ((contact, category), base) in &self.rows {
            if !contacts.contains(contact) || !categories.contains(category) {
                continue;
            }
            for (_, off) in Field::layout(*category) {
                if !used.insert(base + off) {
                    return Err(Error::config(format!(
                        "row {} is claimed twice (at {contact}/{category})",
                        base + off
                    )));
                }
            }
        }
        Ok(())
    }
}
