// src/config/options.rs
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub sync: SyncOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            sync: SyncOptions::default(),
        }
    }
}

/// Which page is showing. Report is the only one that syncs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Report,
    Order,
    Contact,
}

/// Everything the sync flow needs to reach the sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncOptions {
    pub host: String,
    pub port: u16,
    pub doc_id: String,
    pub worksheet: String,
    pub refresh_minutes: u64,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            host: s!(SHEET_HOST),
            port: SHEET_PORT,
            doc_id: s!(SHEET_DOC_ID),
            worksheet: s!(SHEET_WORKSHEET),
            refresh_minutes: DEFAULT_REFRESH_MINUTES,
        }
    }
}

impl SyncOptions {
    /// gviz tabular export path for the configured document + worksheet.
    pub fn gviz_path(&self) -> String {
        format!(
            "/spreadsheets/d/{}/gviz/tq?tqx=out:json&sheet={}",
            self.doc_id,
            urlencoding::encode(&self.worksheet)
        )
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_minutes.max(1) * 60)
    }
}
