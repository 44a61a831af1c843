// src/sheet/google.rs
//! Google Sheets REST v4 backend (blocking `reqwest`, bearer token auth).
//!
//! The store holds a ready access token; see `sheet::auth` for where it
//! comes from.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

use super::column::a1;
use super::store::{RangeValue, SheetStore};
use crate::config::consts::{HTTP_TIMEOUT_SECS, SHEETS_API, USER_AGENT};
use crate::error::{Error, Result};

pub struct GoogleSheetStore {
    client: Client,
    spreadsheet_id: String,
    token: String,
    titles: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetMeta>,
}

#[derive(Deserialize)]
struct SheetMeta {
    properties: SheetProperties,
}

#[derive(Deserialize)]
struct SheetProperties {
    title: String,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValueRange {
    range: String,
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchUpdateValuesRequest<'a> {
    value_input_option: &'a str,
    data: Vec<ValueRange>,
}

/// `'2025.01'!O42`; tab names are always quoted since they contain a dot.
fn qualified(sheet: &str, range: &str) -> String {
    format!("'{}'!{range}", sheet.replace('\'', "''"))
}

impl GoogleSheetStore {
    pub fn new(spreadsheet_id: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            spreadsheet_id: spreadsheet_id.into(),
            token: token.into(),
            titles: None,
        })
    }

    fn url(&self, tail: &str) -> String {
        format!("{SHEETS_API}/{}{tail}", self.spreadsheet_id)
    }

    fn send(&self, req: RequestBuilder, what: &str) -> Result<Response> {
        let resp = req.bearer_auth(&self.token).send()?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(Error::transport(format!("{what}: HTTP {status}: {}", body.trim())));
        }
        Ok(resp)
    }

    fn titles(&mut self) -> Result<&[String]> {
        if self.titles.is_none() {
            let req = self
                .client
                .get(self.url(""))
                .query(&[("fields", "sheets.properties.title")]);
            let meta: SpreadsheetMeta = self.send(req, "spreadsheet metadata")?.json()?;
            let titles = meta.sheets.into_iter().map(|s| s.properties.title).collect();
            self.titles = Some(titles);
        }
        Ok(self.titles.as_deref().unwrap_or_default())
    }
}

impl GoogleSheetStore {
    fn read_request(&self, sheet: &str, row: u32, col: u32) -> Result<RequestBuilder> {
        let range = qualified(sheet, &a1(row, col)?);
        Ok(self.client.get(self.url(&format!("/values/{range}"))))
    }

    fn write_request(&self, sheet: &str, row: u32, col: u32, value: i64) -> Result<RequestBuilder> {
        let range = qualified(sheet, &a1(row, col)?);
        let body = ValueRange { range: range.clone(), values: vec![vec![value.into()]] };
        Ok(self
            .client
            .put(self.url(&format!("/values/{range}")))
            .query(&[("valueInputOption", "USER_ENTERED")])
            .json(&body))
    }

    fn batch_request(&self, sheet: &str, updates: &[RangeValue]) -> RequestBuilder {
        let body = BatchUpdateValuesRequest {
            value_input_option: "USER_ENTERED",
            data: updates
                .iter()
                .map(|u| ValueRange {
                    range: qualified(sheet, &u.range),
                    values: vec![vec![u.value.into()]],
                })
                .collect(),
        };
        self.client.post(self.url("/values:batchUpdate")).json(&body)
    }
}

impl SheetStore for GoogleSheetStore {
    fn has_worksheet(&mut self, sheet: &str) -> Result<bool> {
        Ok(self.titles()?.iter().any(|t| t == sheet))
    }

    fn read_cell(&mut self, sheet: &str, row: u32, col: u32) -> Result<Option<String>> {
        let req = self.read_request(sheet, row, col)?;
        let vr: ValueRange = self.send(req, "read cell")?.json()?;
        let cell = vr.values.into_iter().next().and_then(|r| r.into_iter().next());
        Ok(cell.map(|v| match v {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        }))
    }

    fn write_cell(&mut self, sheet: &str, row: u32, col: u32, value: i64) -> Result<()> {
        let req = self.write_request(sheet, row, col, value)?;
        self.send(req, "write cell")?;
        Ok(())
    }

    fn batch_write(&mut self, sheet: &str, updates: &[RangeValue]) -> Result<()> {
        if updates.is_empty() {
            return Ok(());
        }
        let req = self.batch_request(sheet, updates);
        self.send(req, "batch update")?;
        logd!("Sheet {sheet}: {} cells written", updates.len());
        Ok(())
    }
}
