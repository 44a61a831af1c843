// src/scrape.rs
//! Report aggregation: walk dates × categories, fetch each report page once,
//! read every tracked contact off it.

use std::thread;

use crate::{
    config::options::ScrapeOptions,
    core::{net::PageSession, sanitize::normalize_ws},
    error::{Error, Result},
    model::{Category, Contact, ReportEntry},
    progress::Progress,
    record::{StatsRecord, parse_row},
    specs::report::{find_contact_row, list_labels},
};

/// Read one contact off an already-fetched page.
pub fn extract_record(doc: &str, category: Category, contact: &Contact) -> Result<StatsRecord> {
    let cells = find_contact_row(doc, contact.name()).ok_or_else(|| Error::ExtractionNotFound {
        contact: s!(contact.name()),
        category,
    })?;
    // A dropped name cell shifts every count left by one
    let first = cells.first().map(|c| normalize_ws(c)).unwrap_or_default();
    if first != normalize_ws(contact.name()) {
        return Err(Error::LabelMismatch { contact: s!(contact.name()), category, found: first });
    }
    parse_row(category, cells)
}

pub struct Aggregator<'a> {
    opts: &'a ScrapeOptions,
    session: &'a mut dyn PageSession,
    missing: usize,
}

impl<'a> Aggregator<'a> {
    pub fn new(opts: &'a ScrapeOptions, session: &'a mut dyn PageSession) -> Self {
        Self { opts, session, missing: 0 }
    }

    /// Rows substituted with zeros so far.
    pub fn missing(&self) -> usize {
        self.missing
    }

    /// All entries, date-major then category then contact, in iteration order.
    /// A contact missing from a page yields a zero record; a failed fetch
    /// aborts the whole collection.
    pub fn collect(&mut self, mut progress: Option<&mut (dyn Progress + '_)>) -> Result<Vec<ReportEntry>> {
        let opts = self.opts;
        let pages = opts.dates.len() * opts.categories.len();
        let mut entries = Vec::with_capacity(pages * opts.contacts.len());

        if let Some(p) = progress.as_deref_mut() {
            p.begin(pages);
        }

        let mut first = true;
        for date in opts.dates.iter() {
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("{date}: collecting"));
            }
            for &category in &opts.categories {
                if !first && !opts.cooldown.is_zero() {
                    thread::sleep(opts.cooldown); // be polite
                }
                first = false;

                let url = opts.report_url(category, date);
                let doc = self.session.fetch(&url)?;

                for contact in &opts.contacts {
                    let record = match extract_record(&doc, category, contact) {
                        Ok(r) => {
                            logd!("{date} {category} {contact}: {:?}", r.cells());
                            r
                        }
                        Err(e) if e.is_row_level() => {
                            logw!("{date} {category} {contact}: {e}; labels on page: {:?}", list_labels(&doc));
                            self.missing += 1;
                            if let Some(p) = progress.as_deref_mut() {
                                p.row_missing(date, category, contact);
                            }
                            StatsRecord::zeroed(category, contact)
                        }
                        Err(e) => return Err(e),
                    };
                    entries.push(ReportEntry { date, category, contact: contact.clone(), record });
                }

                if let Some(p) = progress.as_deref_mut() {
                    p.page_done(date, category);
                }
            }
        }

        Ok(entries)
    }
}
