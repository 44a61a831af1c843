// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::model::{Category, Contact, DateRange};

/// Portal login. Kept out of `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub login_url: String,
    pub login_id: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("login_url", &self.login_url)
            .field("login_id", &self.login_id)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub base_url: String,
    pub account_param: String,
    pub categories: Vec<Category>,
    pub contacts: Vec<Contact>,
    pub dates: DateRange,
    pub cooldown: Duration,
}

impl ScrapeOptions {
    pub fn new(contacts: Vec<Contact>, dates: DateRange) -> Self {
        Self {
            base_url: s!(BASE_URL),
            account_param: s!(ACCOUNT_PARAM),
            categories: Category::ALL.to_vec(),
            contacts,
            dates,
            cooldown: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }

    /// Report URL for one category on one day. The day is both bounds of the
    /// portal's date filter.
    pub fn report_url(&self, category: Category, date: chrono::NaiveDate) -> String {
        let day = date.format("%Y-%m-%d").to_string();
        format!(
            "{}{}?_pp_=date_from%3D{day}%7Cdate_to%3D{day}&{}",
            self.base_url.trim_end_matches('/'),
            category.endpoint(),
            self.account_param,
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Also dump raw entries to CSV.
    pub csv_out: Option<PathBuf>,
    /// Plan the sheet writes but don't send them.
    pub dry_run: bool,
}

/// Everything one run needs, built once and handed to the runner.
#[derive(Clone, Debug)]
pub struct RunOptions {
    pub credentials: Credentials,
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}
