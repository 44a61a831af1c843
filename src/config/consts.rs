// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://en-ambi.com/company/effect_ma";
pub const PLATINUM_ENDPOINT: &str = "/acc_scout/platinum/";
pub const REGULAR_ENDPOINT: &str = "/acc_scout/";
pub const INTERESTED_ENDPOINT: &str = "/acc_interests/";
pub const ACCOUNT_PARAM: &str = "PK=CA19C6";
pub const LOGIN_ID_FIELD: &str = "accLoginID";
pub const LOGIN_PW_FIELD: &str = "accLoginPW";
pub const USER_AGENT: &str = concat!("ambi_scrape/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Scrape
pub const REQUEST_PAUSE_MS: u64 = 1_000; // be polite
pub const DEFAULT_DAYS_BACK: u32 = 14;
pub const PLACEHOLDER: &str = "---";
pub const DEFAULT_CONTACTS: &[&str] = &["橘萌生", "奥野翔子"];

// Sheet layout
pub const FIRST_DAY_COLUMN: u32 = 7; // "G"
pub const DAYS_PER_SPACER: u32 = 7;
pub const SHEETS_API: &str = "https://sheets.googleapis.com/v4/spreadsheets";
pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

// Local files
pub const DEFAULT_LOG_FILE: &str = ".store/debug.log";
pub const DEFAULT_CSV_FILE: &str = "out/ambi_data.csv";
pub const DEFAULT_SERVICE_ACCOUNT_FILE: &str = "service_account.json";
