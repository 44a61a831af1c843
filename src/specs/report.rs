// src/specs/report.rs
//! Scraping *spec* for the effect report pages (`acc_scout`, `acc_scout/platinum`,
//! `acc_interests`).
//!
//! Each contact's statistics sit in one table row:
//!
//! ```text
//! <tr>
//!   <td class="data"><div class="jobName">橘萌生</div></td>
//!   <td class="data">120</td> <td class="data">60</td> ...
//! </tr>
//! ```
//!
//! The row is found through its `div.jobName` label; the statistics are every
//! `td.data` of that row, name cell included, in document order.

use crate::core::html::{
    inner_after_open_tag, next_tag_block_ci, opener, rfind_tag_open, strip_tags, tag_has_class,
    to_lower,
};
use crate::core::sanitize::{normalize_entities, normalize_ws};

const LABEL_CLASS: &str = "jobName";
const DATA_CLASS: &str = "data";

/// Raw cells of the row labelled `label`, or `None` when no such row exists.
pub fn find_contact_row(doc: &str, label: &str) -> Option<Vec<String>> {
    let want = normalize_ws(label);
    let lc = to_lower(doc);
    let mut pos = 0usize;

    while let Some((div_s, div_e)) = next_label_div(doc, &lc, pos) {
        pos = div_e;
        let text = strip_tags(normalize_entities(&inner_after_open_tag(&doc[div_s..div_e])));
        if text != want {
            continue;
        }

        // Only labels inside a row count; a stray one elsewhere is skipped
        let Some(tr_s) = rfind_tag_open(&lc, "tr", div_s) else { continue };
        if lc[tr_s..div_s].contains("</tr>") {
            continue;
        }
        let Some(tr_e) = lc[div_e..].find("</tr>").map(|i| div_e + i + "</tr>".len()) else {
            continue;
        };
        return Some(data_cells(&doc[tr_s..tr_e]));
    }
    None
}

/// Every label shown on the page, in order. Handy when a contact goes missing
/// and the log should say what was there instead.
pub fn list_labels(doc: &str) -> Vec<String> {
    let lc = to_lower(doc);
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = next_label_div(doc, &lc, pos) {
        pos = e;
        out.push(strip_tags(normalize_entities(&inner_after_open_tag(&doc[s..e]))));
    }
    out
}

/// Next `<div class="jobName">…</div>` at or after `from`.
fn next_label_div(doc: &str, lc: &str, from: usize) -> Option<(usize, usize)> {
    let mut pos = from;
    loop {
        let start = lc.get(pos..)?.find("<div")? + pos;
        let open_end = doc[start..].find('>')? + start + 1;
        if !tag_has_class(&doc[start..open_end], LABEL_CLASS) {
            pos = open_end;
            continue;
        }
        let end = lc[open_end..].find("</div>")? + open_end + "</div>".len();
        return Some((start, end));
    }
}

/// Text of each `td.data` in a row.
fn data_cells(tr: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut td_pos = 0usize;
    while let Some((td_s, td_e)) = next_tag_block_ci(tr, "<td", "</td>", td_pos) {
        td_pos = td_e;
        let block = &tr[td_s..td_e];
        if !tag_has_class(opener(block), DATA_CLASS) {
            continue;
        }
        cells.push(strip_tags(normalize_entities(&inner_after_open_tag(block))));
    }
    cells
}
