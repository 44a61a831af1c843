// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::RunOptions,
    core::net::PageSession,
    error::Result,
    export::write_entries_csv,
    progress::Progress,
    scrape::Aggregator,
    sheet::{
        RowLocator, SheetStore,
        writer::{self, WritePlan},
    },
};

/// Summary of what was produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub entries: usize,
    pub rows_missing: usize,
    pub cells_written: usize,
    pub sheets: Vec<String>,
    pub csv_written: Option<PathBuf>,
    /// Set on a dry run: what would have been written.
    pub plan: Option<WritePlan>,
}

/// Top-level run: validate, log in, collect, export, write.
///
/// The page session is closed on every path. Nothing reaches the sheet
/// unless collection finished; a failure mid-way writes nothing.
pub fn run(
    opts: &RunOptions,
    locator: &RowLocator,
    session: &mut dyn PageSession,
    store: &mut dyn SheetStore,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary> {
    let result = run_inner(opts, locator, session, store, progress.as_deref_mut());
    session.close();
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    if let Err(e) = &result {
        loge!("Run aborted: {e}");
    }
    result
}

fn run_inner(
    opts: &RunOptions,
    locator: &RowLocator,
    session: &mut dyn PageSession,
    store: &mut dyn SheetStore,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary> {
    let scrape = &opts.scrape;
    locator.validate(&scrape.contacts, &scrape.categories)?;

    logf!(
        "Run {}..={} for {} contacts",
        scrape.dates.start(),
        scrape.dates.end(),
        scrape.contacts.len()
    );
    session.login(&opts.credentials)?;
    if let Some(p) = progress.as_deref_mut() {
        p.log("Logged in");
    }

    let mut agg = Aggregator::new(scrape, session);
    let entries = agg.collect(progress.as_deref_mut())?;
    let mut summary = RunSummary {
        entries: entries.len(),
        rows_missing: agg.missing(),
        ..RunSummary::default()
    };

    if let Some(path) = &opts.export.csv_out {
        summary.csv_written = Some(write_entries_csv(path, &entries)?);
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Wrote {}", path.display()));
        }
    }

    let plan = writer::plan(&entries, locator)?;
    if opts.export.dry_run {
        summary.cells_written = 0;
        summary.sheets = plan.keys().cloned().collect();
        summary.plan = Some(plan);
        logf!("Dry run: nothing written");
        return Ok(summary);
    }

    let written = writer::write(store, &plan)?;
    summary.cells_written = written.cells;
    summary.sheets = written.sheets;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Updated {} cells in {} sheets", summary.cells_written, summary.sheets.len()));
    }
    Ok(summary)
}
