// src/model.rs
//! Run-scoped domain values: what is fetched (category), for whom (contact),
//! when (date range) and what came back (report entry).

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};

use crate::config::consts::{INTERESTED_ENDPOINT, PLATINUM_ENDPOINT, REGULAR_ENDPOINT};
use crate::error::{Error, Result};
use crate::record::StatsRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Platinum,
    Regular,
    Interested,
}

impl Category {
    /// Fetch order for one date.
    pub const ALL: [Category; 3] = [Category::Platinum, Category::Regular, Category::Interested];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Platinum => "platinum",
            Category::Regular => "regular",
            Category::Interested => "interested",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            Category::Platinum => PLATINUM_ENDPOINT,
            Category::Regular => REGULAR_ENDPOINT,
            Category::Interested => INTERESTED_ENDPOINT,
        }
    }

    /// Platinum and regular share the scout-mail schema.
    pub fn is_scout(&self) -> bool {
        matches!(self, Category::Platinum | Category::Regular)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "platinum" => Ok(Category::Platinum),
            "regular" => Ok(Category::Regular),
            "interested" => Ok(Category::Interested),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// A tracked person, identified by the label the report shows for them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Contact(String);

impl Contact {
    pub fn new(name: impl Into<String>) -> Self {
        Contact(name.into().trim().to_string())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Contact {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Err(s!("contact name is empty"));
        }
        Ok(Contact::new(name))
    }
}

/// Inclusive range of report dates, walked one day at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(Error::InvalidDate(format!("range ends ({end}) before it starts ({start})")));
        }
        Ok(Self { start, end })
    }

    /// The `days` days before `today`, excluding `today` itself
    /// (the current day's report is still filling up).
    pub fn days_before(today: NaiveDate, days: u32) -> Result<Self> {
        if days == 0 {
            return Err(Error::InvalidDate(s!("date range must cover at least one day")));
        }
        let start = today
            .checked_sub_days(Days::new(u64::from(days)))
            .ok_or_else(|| Error::InvalidDate(format!("{days} days before {today}")))?;
        let end = today
            .pred_opt()
            .ok_or_else(|| Error::InvalidDate(format!("day before {today}")))?;
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveDate { self.start }
    pub fn end(&self) -> NaiveDate { self.end }

    pub fn len(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take(self.len())
    }
}

/// Parse `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| Error::InvalidDate(format!("{s:?}: {e}")))
}

/// One extraction result. Produced for every (date, category, contact) tried,
/// even when the row was missing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportEntry {
    pub date: NaiveDate,
    pub category: Category,
    pub contact: Contact,
    pub record: StatsRecord,
}
