// src/sync.rs
//
// Report Sync: fetch the gviz export, decode it, and parse the rows. The
// caller (store) decides what a failure means for the display; nothing here
// touches UI state.

use std::error::Error;

use crate::config::options::SyncOptions;
use crate::core::{gviz, net};
use crate::report::{self, LabReport};

/// Successful sync result. `NoData` is the sheet answering with only a
/// header row (or nothing) — distinct from a failed fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    /// All report rows, oldest first; guaranteed non-empty.
    Reports(Vec<LabReport>),
    NoData,
}

pub fn fetch_reports(opts: &SyncOptions) -> Result<SyncOutcome, Box<dyn Error>> {
    let path = opts.gviz_path();
    logd!("Sync: GET {}:{}{}", opts.host, opts.port, path);

    let body = net::http_get(&opts.host, opts.port, &path)?;
    let table = gviz::decode(&body)?;
    let reports = report::parse_table(&table);

    if reports.is_empty() {
        logf!("Sync: sheet has no data rows");
        return Ok(SyncOutcome::NoData);
    }
    logf!("Sync: OK, {} report(s)", reports.len());
    Ok(SyncOutcome::Reports(reports))
}
