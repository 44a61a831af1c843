// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use clap::Parser;

use crate::config::consts::*;
use crate::config::options::{Credentials, ExportOptions, RunOptions, ScrapeOptions};
use crate::core::net::HttpSession;
use crate::error::{Error, Result};
use crate::model::{Category, Contact, DateRange, parse_date};
use crate::progress::Progress;
use crate::runner::{self, RunSummary};
use crate::sheet::auth::SheetAuth;
use crate::sheet::google::GoogleSheetStore;
use crate::sheet::{MemorySheetStore, RowLocator, SheetStore, column_letter};

#[derive(Parser, Debug)]
#[command(name = "ambi_scrape", version)]
#[command(about = "Copy AMBI scout report metrics into the monthly tracking sheet", long_about = None)]
pub struct Cli {
    /// Portal login page
    #[arg(long, env = "AMBI_LOGIN_URL")]
    pub login_url: String,

    #[arg(long, env = "AMBI_LOGIN_ID")]
    pub login_id: String,

    #[arg(long, env = "AMBI_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Target spreadsheet id (the long token in its URL)
    #[arg(long, env = "SHEET_ID", required_unless_present = "dry_run")]
    pub sheet_id: Option<String>,

    /// Service-account key used to sign in to Sheets
    #[arg(long, value_name = "JSON", env = "GOOGLE_SERVICE_ACCOUNT_FILE", default_value = DEFAULT_SERVICE_ACCOUNT_FILE)]
    pub service_account: PathBuf,

    /// Ready-made OAuth access token; overrides --service-account
    #[arg(long, env = "GOOGLE_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Contact to track, as labelled on the report (repeatable)
    #[arg(long = "contact", value_name = "NAME")]
    pub contacts: Vec<Contact>,

    /// Category to fetch (repeatable; default: all three)
    #[arg(long = "category", value_name = "KIND")]
    pub categories: Vec<Category>,

    /// Days before today to collect (today excluded)
    #[arg(long, default_value_t = DEFAULT_DAYS_BACK, conflicts_with_all = ["from", "to"])]
    pub days: u32,

    /// First report date, YYYY-MM-DD (needs --to)
    #[arg(long, value_parser = parse_date_arg, requires = "to")]
    pub from: Option<NaiveDate>,

    /// Last report date, YYYY-MM-DD (needs --from)
    #[arg(long, value_parser = parse_date_arg, requires = "from")]
    pub to: Option<NaiveDate>,

    /// Pause between report pages, in milliseconds
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub cooldown_ms: u64,

    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value = ACCOUNT_PARAM)]
    pub account_param: String,

    /// Also dump raw entries to CSV
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = DEFAULT_CSV_FILE)]
    pub csv: Option<PathBuf>,

    /// Collect and plan, print the cells, write nothing
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

fn parse_date_arg(s: &str) -> std::result::Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

impl Cli {
    /// How to sign in to Sheets: an explicit token wins over the key file.
    pub fn sheet_auth(&self) -> SheetAuth {
        match &self.token {
            Some(token) => SheetAuth::Token(token.clone()),
            None => SheetAuth::ServiceAccount(self.service_account.clone()),
        }
    }

    pub fn into_options(self, today: NaiveDate) -> Result<RunOptions> {
        let dates = match (self.from, self.to) {
            (Some(from), Some(to)) => DateRange::new(from, to)?,
            _ => DateRange::days_before(today, self.days)?,
        };
        let contacts = if self.contacts.is_empty() {
            DEFAULT_CONTACTS.iter().map(|c| Contact::new(*c)).collect()
        } else {
            self.contacts
        };

        let mut scrape = ScrapeOptions::new(contacts, dates);
        if !self.categories.is_empty() {
            let mut cats = self.categories;
            cats.sort();
            cats.dedup();
            scrape.categories = cats;
        }
        scrape.cooldown = Duration::from_millis(self.cooldown_ms);
        scrape.base_url = self.base_url;
        scrape.account_param = self.account_param;

        Ok(RunOptions {
            credentials: Credentials {
                login_url: self.login_url,
                login_id: self.login_id,
                password: self.password,
            },
            scrape,
            export: ExportOptions { csv_out: self.csv, dry_run: self.dry_run },
        })
    }
}

/// Prints progress to stderr.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Fetching {total} report pages…");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn page_done(&mut self, date: NaiveDate, category: Category) {
        self.done += 1;
        eprintln!("  [{}/{}] {date} {category}", self.done, self.total);
    }
    fn row_missing(&mut self, date: NaiveDate, category: Category, contact: &Contact) {
        eprintln!("  ! {date} {category}: no row for {contact}, recorded as 0");
    }
}

pub fn run() -> Result<RunSummary> {
    let cli = Cli::parse();
    crate::log::init(&cli.log_file);

    let auth = cli.sheet_auth();
    let sheet_id = cli.sheet_id.clone();
    let opts = cli.into_options(Local::now().date_naive())?;

    // Sign in to Sheets before touching the portal so a bad key fails fast
    let mut store: Box<dyn SheetStore> = match (opts.export.dry_run, sheet_id) {
        (false, Some(id)) => Box::new(GoogleSheetStore::new(id, auth.access_token()?)?),
        (false, None) => return Err(Error::config("--sheet-id is required")),
        (true, _) => Box::new(MemorySheetStore::default()),
    };
    let mut session = HttpSession::new()?;
    let mut progress = ConsoleProgress::default();

    let summary = runner::run(
        &opts,
        &RowLocator::default(),
        &mut session,
        store.as_mut(),
        Some(&mut progress),
    )?;

    if let Some(plan) = &summary.plan {
        for (sheet, writes) in plan {
            for w in writes {
                println!("{sheet}\t{}{}\t{}", column_letter(w.col)?, w.row, w.value);
            }
        }
    }
    eprintln!(
        "Done: {} entries ({} missing rows), {} cells in [{}]",
        summary.entries,
        summary.rows_missing,
        summary.cells_written,
        summary.sheets.join(", ")
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &[&str] = &[
        "ambi_scrape",
        "--login-url", "https://example.test/login",
        "--login-id", "me",
        "--password", "pw",
    ];

    fn parse(extra: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(BASE.iter().chain(extra.iter()).copied())
    }

    fn today() -> NaiveDate { parse_date("2025-01-15").unwrap() }

    #[test]
    fn defaults_cover_fourteen_days_and_default_contacts() {
        let opts = parse(&["--dry-run"]).unwrap().into_options(today()).unwrap();
        assert_eq!(opts.scrape.dates.len(), 14);
        assert_eq!(opts.scrape.dates.end(), parse_date("2025-01-14").unwrap());
        assert_eq!(opts.scrape.contacts.len(), DEFAULT_CONTACTS.len());
        assert_eq!(opts.scrape.categories, Category::ALL.to_vec());
        assert!(opts.export.dry_run);
    }

    #[test]
    fn explicit_range_contacts_and_categories() {
        let cli = parse(&[
            "--dry-run", "--from", "2025-01-01", "--to", "2025-01-03",
            "--contact", "山中沙矢", "--category", "interested", "--category", "platinum",
            "--csv",
        ])
        .unwrap();
        let opts = cli.into_options(today()).unwrap();
        assert_eq!(opts.scrape.dates.len(), 3);
        assert_eq!(opts.scrape.contacts, vec![Contact::new("山中沙矢")]);
        assert_eq!(opts.scrape.categories, vec![Category::Platinum, Category::Interested]);
        assert_eq!(opts.export.csv_out, Some(PathBuf::from(DEFAULT_CSV_FILE)));
    }

    #[test]
    fn token_overrides_service_account_key() {
        let cli = parse(&["--sheet-id", "abc", "--service-account", "keys/sa.json"]).unwrap();
        assert_eq!(cli.sheet_auth(), SheetAuth::ServiceAccount(PathBuf::from("keys/sa.json")));

        let cli = parse(&["--sheet-id", "abc", "--token", "ya29.x"]).unwrap();
        assert_eq!(cli.sheet_auth(), SheetAuth::Token(s!("ya29.x")));
    }

    #[test]
    fn bad_dates_and_categories_are_rejected() {
        assert!(parse(&["--dry-run", "--from", "2025-01-01"]).is_err());
        assert!(parse(&["--dry-run", "--from", "01/01/2025", "--to", "2025-01-02"]).is_err());
        assert!(parse(&["--dry-run", "--category", "gold"]).is_err());
        let backwards = parse(&["--dry-run", "--from", "2025-01-05", "--to", "2025-01-01"]).unwrap();
        assert!(backwards.into_options(today()).is_err());
    }
}
