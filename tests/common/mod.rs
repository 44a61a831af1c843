// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;

use ambi_scrape::config::options::{Credentials, ExportOptions, RunOptions, ScrapeOptions};
use ambi_scrape::core::net::PageSession;
use ambi_scrape::model::{Category, Contact, DateRange, parse_date};
use ambi_scrape::progress::Progress;
use ambi_scrape::{Error, Result};

/// `<tr>` for one contact: label cell plus the given stat cells, all `td.data`.
pub fn row(name: &str, stats: &[&str]) -> String {
    let mut tr = format!(r#"<tr class="row"><td class="data"><div class="jobName">{name}</div></td>"#);
    for s in stats {
        tr.push_str(&format!(r#"<td class="data">{s}</td>"#));
    }
    tr.push_str(r#"<td class="detail"><a href="detail">詳細</a></td></tr>"#);
    tr
}

pub fn page(rows: &[String]) -> String {
    format!(
        "<html><body><table class=\"result\"><tr><th>担当</th></tr>{}</table></body></html>",
        rows.concat()
    )
}

pub fn scout(name: &str, send: &str, opens: &str, entries: &str) -> String {
    row(name, &[send, opens, "50.0%", "0", entries, "10.0%", "5.0%", "1", "0.8%"])
}

pub fn interest(name: &str, interested: &str, entries: &str) -> String {
    row(name, &[interested, "1", "10.0%", entries, "5.0%", "0", "---"])
}

/// Serves canned pages by URL substring; unmatched URLs get an empty table.
#[derive(Default)]
pub struct FakePortal {
    pub pages: HashMap<String, String>,
    pub fail_on: Option<String>,
    pub fetched: Vec<String>,
    pub logged_in: bool,
    pub closed: bool,
}

impl FakePortal {
    /// Page for `endpoint` on `date` (YYYY-MM-DD).
    pub fn serve(&mut self, endpoint: &str, date: &str, doc: String) {
        self.pages.insert(key(endpoint, date), doc);
    }
}

fn key(endpoint: &str, date: &str) -> String {
    format!("{endpoint}?_pp_=date_from%3D{date}%7C")
}

impl PageSession for FakePortal {
    fn login(&mut self, credentials: &Credentials) -> Result<()> {
        if credentials.password != "pw" {
            return Err(Error::transport("login rejected"));
        }
        self.logged_in = true;
        Ok(())
    }

    fn fetch(&mut self, url: &str) -> Result<String> {
        assert!(self.logged_in, "fetch before login");
        self.fetched.push(url.to_string());
        if let Some(f) = &self.fail_on {
            if url.contains(f.as_str()) {
                return Err(Error::transport(format!("HTTP 503 {url}")));
            }
        }
        let doc = self
            .pages
            .iter()
            .find(|(k, _)| url.contains(k.as_str()))
            .map(|(_, v)| v.clone())
            .unwrap_or_else(|| page(&[]));
        Ok(doc)
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

pub fn options(contacts: &[&str], from: &str, to: &str) -> RunOptions {
    let dates = DateRange::new(parse_date(from).unwrap(), parse_date(to).unwrap()).unwrap();
    let mut scrape = ScrapeOptions::new(contacts.iter().map(|c| Contact::new(*c)).collect(), dates);
    scrape.cooldown = Duration::ZERO;
    RunOptions {
        credentials: Credentials {
            login_url: "https://example.test/login".into(),
            login_id: "me".into(),
            password: "pw".into(),
        },
        scrape,
        export: ExportOptions::default(),
    }
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("ambi_e2e_{}", name));
    let _ = std::fs::remove_dir_all(&p);
    std::fs::create_dir_all(&p).unwrap();
    p
}

/// Keeps every progress event as a line, for asserting on order and content.
#[derive(Default)]
pub struct Recorder {
    pub events: Vec<String>,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.events.push(format!("begin {total}"));
    }
    fn page_done(&mut self, date: NaiveDate, category: Category) {
        self.events.push(format!("page {date} {category}"));
    }
    fn row_missing(&mut self, date: NaiveDate, category: Category, contact: &Contact) {
        self.events.push(format!("missing {date} {category} {contact}"));
    }
    fn finish(&mut self) {
        self.events.push("finish".to_string());
    }
}
