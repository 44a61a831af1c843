// src/sheet/writer.rs
//! Turns report entries into per-tab batches of cell writes and sends them.

use std::collections::BTreeMap;

use super::column::a1;
use super::layout::{Field, RowLocator, column_for_date, sheet_name};
use super::store::{RangeValue, SheetStore};
use crate::error::{Error, Result};
use crate::model::ReportEntry;
use crate::record::{StatsRecord, parse_count};

/// One planned cell write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellWrite {
    pub row: u32,
    pub col: u32,
    pub value: i64,
}

impl CellWrite {
    pub fn range(&self) -> Result<String> {
        a1(self.row, self.col)
    }
}

/// Tab name → writes in entry order.
pub type WritePlan = BTreeMap<String, Vec<CellWrite>>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub sheets: Vec<String>,
    pub cells: usize,
}

/// Count value for `field`, or 0 when the record's shape doesn't carry it.
fn field_value(record: &StatsRecord, field: Field) -> i64 {
    match (record, field) {
        (StatsRecord::Scout(s), Field::SendCount) => parse_count(&s.send_count),
        (StatsRecord::Scout(s), Field::OpensCount) => parse_count(&s.opens_count),
        (StatsRecord::Scout(s), Field::EntryCount) => parse_count(&s.entry_count),
        (StatsRecord::Interest(s), Field::InterestedCount) => parse_count(&s.interested_count),
        (StatsRecord::Interest(s), Field::InterestedEntryCount) => parse_count(&s.entry_count),
        _ => 0,
    }
}

/// Resolve every entry to its cells. Fails on the first (contact, category)
/// the locator doesn't know.
pub fn plan(entries: &[ReportEntry], locator: &RowLocator) -> Result<WritePlan> {
    let mut out = WritePlan::new();
    for e in entries {
        let base = locator.locate(&e.contact, e.category)?;
        let col = column_for_date(e.date);
        let writes = out.entry(sheet_name(e.date)).or_default();
        for &(field, offset) in Field::layout(e.category) {
            writes.push(CellWrite { row: base + offset, col, value: field_value(&e.record, field) });
        }
    }
    Ok(out)
}

/// Send a plan: one batch per tab. Every tab is checked up front so a missing
/// month aborts before anything is written.
pub fn write(store: &mut dyn SheetStore, plan: &WritePlan) -> Result<WriteSummary> {
    for sheet in plan.keys() {
        if !store.has_worksheet(sheet)? {
            return Err(Error::config(format!("worksheet {sheet:?} does not exist")));
        }
    }

    let mut summary = WriteSummary::default();
    for (sheet, writes) in plan {
        let updates = writes
            .iter()
            .map(|w| Ok(RangeValue { range: w.range()?, value: w.value }))
            .collect::<Result<Vec<_>>>()?;
        store.batch_write(sheet, &updates)?;
        logf!("Sheet {sheet}: {} cells", updates.len());
        summary.cells += updates.len();
        summary.sheets.push(sheet.clone());
    }
    Ok(summary)
}
