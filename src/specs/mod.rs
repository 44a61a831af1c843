// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific knowledge of where the data lives in the portal's HTML.
//!
//! ## What lives here
//! - **Pure HTML parsing** of fetched report documents.
//! - **Row location** by the label the page shows for a contact.
//! - **Cell selection** (which `<td>` blocks carry statistics).
//!
//! ## What does **not** live here
//! - Fetching or login (`core::net`).
//! - Turning cells into typed records (`record::parse_row`).
//! - Deciding what to fetch, or what to do when a row is missing (`scrape`).
//!
//! ## Conventions
//! - Case-insensitive tag and class detection; no full-document regexes.
//! - Labels match exactly after entity and whitespace normalization.
//! - Specs are testable offline against captured or hand-written fixtures.
pub mod report;
