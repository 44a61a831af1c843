// src/record.rs
//! Typed statistics records and the row parser that builds them.
//!
//! Values stay as the page printed them (`"12"`, `"33.3%"`, `"---"`); only
//! the sheet writer turns counts into numbers, via [`parse_count`].

use crate::config::consts::PLACEHOLDER;
use crate::error::{Error, Result};
use crate::model::{Category, Contact};

/// Cell count of an `interested` row.
pub const INTEREST_CELLS: usize = 8;
/// Cell count of a full `platinum`/`regular` row.
pub const SCOUT_CELLS: usize = 10;

/// Platinum / regular scout-mail statistics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoutStats {
    pub contact_name: String,
    pub send_count: String,
    pub opens_count: String,
    pub open_rate: String,
    pub refusals_count: String,
    pub entry_count: String,
    pub post_opening_entry_rate: String,
    pub entry_rate: String,
    pub interview_req_count: String,
    pub interview_req_rate: String,
}

/// "Interested" statistics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterestStats {
    pub contact_name: String,
    pub interested_count: String,
    pub passed_judgement_count: String,
    pub passed_judgement_rate: String,
    pub entry_count: String,
    pub entry_rate: String,
    pub interview_req_count: String,
    pub interview_req_rate: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatsRecord {
    Scout(ScoutStats),
    Interest(InterestStats),
}

impl StatsRecord {
    /// All-zero record in the shape `category` expects.
    pub fn zeroed(category: Category, contact: &Contact) -> Self {
        let name = s!(contact.name());
        let z = || s!("0");
        if category.is_scout() {
            StatsRecord::Scout(ScoutStats {
                contact_name: name,
                send_count: z(),
                opens_count: z(),
                open_rate: z(),
                refusals_count: z(),
                entry_count: z(),
                post_opening_entry_rate: z(),
                entry_rate: z(),
                interview_req_count: z(),
                interview_req_rate: z(),
            })
        } else {
            StatsRecord::Interest(InterestStats {
                contact_name: name,
                interested_count: z(),
                passed_judgement_count: z(),
                passed_judgement_rate: z(),
                entry_count: z(),
                entry_rate: z(),
                interview_req_count: z(),
                interview_req_rate: z(),
            })
        }
    }

    pub fn contact_name(&self) -> &str {
        match self {
            StatsRecord::Scout(s) => &s.contact_name,
            StatsRecord::Interest(s) => &s.contact_name,
        }
    }

    pub fn entry_count(&self) -> &str {
        match self {
            StatsRecord::Scout(s) => &s.entry_count,
            StatsRecord::Interest(s) => &s.entry_count,
        }
    }

    /// Field values in page order, name first.
    pub fn cells(&self) -> Vec<&str> {
        match self {
            StatsRecord::Scout(s) => [
                &s.contact_name, &s.send_count, &s.opens_count, &s.open_rate,
                &s.refusals_count, &s.entry_count, &s.post_opening_entry_rate,
                &s.entry_rate, &s.interview_req_count, &s.interview_req_rate,
            ]
            .into_iter()
            .map(String::as_str)
            .collect(),
            StatsRecord::Interest(s) => [
                &s.contact_name, &s.interested_count, &s.passed_judgement_count,
                &s.passed_judgement_rate, &s.entry_count, &s.entry_rate,
                &s.interview_req_count, &s.interview_req_rate,
            ]
            .into_iter()
            .map(String::as_str)
            .collect(),
        }
    }
}

/// Build a record from one contact's raw cells.
///
/// The category comes from the endpoint that was fetched; the cell count must
/// agree with it:
/// - `interested`: exactly 8 cells
/// - `platinum` / `regular`: 10 cells, or 9 when the page omits the trailing
///   interview-request rate (filled with the `---` placeholder)
pub fn parse_row(category: Category, cells: Vec<String>) -> Result<StatsRecord> {
    let found = cells.len();
    let shape_err = |expected| Error::RowShape { category, found, expected };

    if category.is_scout() {
        if found != SCOUT_CELLS && found != SCOUT_CELLS - 1 {
            return Err(shape_err("9 or 10"));
        }
        if found < SCOUT_CELLS {
            logw!(
                "{category} row for {:?} has {found} cells; interview_req_rate set to {PLACEHOLDER}",
                cells.first().map(String::as_str).unwrap_or_default()
            );
        }
        let mut it = cells.into_iter();
        let mut next = || it.next().unwrap_or_else(|| s!(PLACEHOLDER));
        Ok(StatsRecord::Scout(ScoutStats {
            contact_name: next(),
            send_count: next(),
            opens_count: next(),
            open_rate: next(),
            refusals_count: next(),
            entry_count: next(),
            post_opening_entry_rate: next(),
            entry_rate: next(),
            interview_req_count: next(),
            interview_req_rate: next(),
        }))
    } else {
        if found != INTEREST_CELLS {
            return Err(shape_err("8"));
        }
        let mut it = cells.into_iter();
        let mut next = || it.next().unwrap_or_default();
        Ok(StatsRecord::Interest(InterestStats {
            contact_name: next(),
            interested_count: next(),
            passed_judgement_count: next(),
            passed_judgement_rate: next(),
            entry_count: next(),
            entry_rate: next(),
            interview_req_count: next(),
            interview_req_rate: next(),
        }))
    }
}

/// Coerce a count cell to an integer. `---`, blanks and anything that isn't a
/// whole number count as 0. Thousands separators are tolerated.
pub fn parse_count(text: &str) -> i64 {
    let t: String = text.trim().chars().filter(|&c| c != ',').collect();
    if t.is_empty() || t == PLACEHOLDER {
        return 0;
    }
    t.parse::<i64>().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_cells_make_interest_record() {
        let row = cells!["橘萌生", "12", "5", "41.7%", "3", "25.0%", "1", "8.3%"];
        let StatsRecord::Interest(s) = parse_row(Category::Interested, row).unwrap() else {
            panic!("expected interest shape");
        };
        assert_eq!(s.contact_name, "橘萌生");
        assert_eq!(s.interested_count, "12");
        assert_eq!(s.entry_count, "3");
        assert_eq!(s.interview_req_rate, "8.3%");
    }

    #[test]
    fn ten_cells_make_scout_record() {
        let row = cells!["奥野翔子", "120", "60", "50.0%", "2", "6", "10.0%", "5.0%", "1", "0.8%"];
        let StatsRecord::Scout(s) = parse_row(Category::Platinum, row).unwrap() else {
            panic!("expected scout shape");
        };
        assert_eq!(s.contact_name, "奥野翔子");
        assert_eq!(s.send_count, "120");
        assert_eq!(s.opens_count, "60");
        assert_eq!(s.entry_count, "6");
        assert_eq!(s.interview_req_rate, "0.8%");
    }

    #[test]
    fn nine_cells_fill_trailing_rate_with_placeholder() {
        let row = cells!["橘萌生", "10", "4", "40.0%", "0", "1", "25.0%", "10.0%", "0"];
        let StatsRecord::Scout(s) = parse_row(Category::Regular, row).unwrap() else {
            panic!("expected scout shape");
        };
        assert_eq!(s.interview_req_count, "0");
        assert_eq!(s.interview_req_rate, PLACEHOLDER);
    }

    #[test]
    fn shape_must_match_category() {
        let eight = cells!["a", "1", "2", "3", "4", "5", "6", "7"];
        let err = parse_row(Category::Regular, eight).unwrap_err();
        assert!(matches!(err, Error::RowShape { found: 8, .. }));

        let ten = cells!["a", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        let err = parse_row(Category::Interested, ten).unwrap_err();
        assert!(matches!(err, Error::RowShape { found: 10, category: Category::Interested, .. }));

        assert!(parse_row(Category::Platinum, Vec::new()).is_err());
    }

    #[test]
    fn zeroed_matches_category_shape() {
        let c = Contact::new("山中沙矢");
        match StatsRecord::zeroed(Category::Interested, &c) {
            StatsRecord::Interest(s) => {
                assert_eq!(s.contact_name, "山中沙矢");
                assert_eq!(s.interested_count, "0");
            }
            other => panic!("wrong shape: {other:?}"),
        }
        let scout = StatsRecord::zeroed(Category::Platinum, &c);
        assert_eq!(scout.cells().len(), SCOUT_CELLS);
        assert!(scout.cells()[1..].iter().all(|v| parse_count(v) == 0));
    }

    #[test]
    fn counts_coerce_placeholders_to_zero() {
        assert_eq!(parse_count("42"), 42);
        assert_eq!(parse_count(" 1,234 "), 1234);
        assert_eq!(parse_count("---"), 0);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("12.5%"), 0);
    }
}
