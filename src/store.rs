// src/store.rs
//
// In-memory holder for the current report list. Owned by whichever frontend
// is running, alive for the session only — this system persists nothing.
//
// The one invariant that matters: once a report has been displayed, no
// failure may blank it. A failed sync sets a dismissible notice next to
// whatever was last shown; only the very first failure installs the
// fallback record so the view is never undefined.

use chrono::Local;

use crate::report::LabReport;
use crate::sync::SyncOutcome;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing has been shown yet (startup, first sync still in flight).
    NeverSynced,
    /// At least one report (real or fallback) is displayed.
    Ready,
    /// Sheet reachable but empty: "no report yet", not an error.
    Empty,
}

#[derive(Clone, Debug)]
pub struct ReportStore {
    phase: Phase,
    /// Oldest first; last element is today's report. Replaced wholesale on
    /// each successful sync, never merged.
    reports: Vec<LabReport>,
    /// Index into `reports` of the entry being viewed.
    selected: usize,
    notice: Option<String>,
    last_sync: Option<String>,
}

impl Default for ReportStore {
    fn default() -> Self {
        Self {
            phase: Phase::NeverSynced,
            reports: Vec::new(),
            selected: 0,
            notice: None,
            last_sync: None,
        }
    }
}

impl ReportStore {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn reports(&self) -> &[LabReport] {
        &self.reports
    }

    /// Latest report (last appended row), if any is displayed.
    pub fn latest(&self) -> Option<&LabReport> {
        self.reports.last()
    }

    /// The report currently selected for viewing (defaults to latest).
    pub fn current(&self) -> Option<&LabReport> {
        self.reports.get(self.selected).or_else(|| self.latest())
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Pick a history entry. Out-of-range selections snap to latest.
    pub fn select(&mut self, ix: usize) {
        self.selected = if ix < self.reports.len() {
            ix
        } else {
            self.reports.len().saturating_sub(1)
        };
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn last_sync(&self) -> Option<&str> {
        self.last_sync.as_deref()
    }

    /// Fold one sync result into the store.
    pub fn apply(&mut self, result: Result<SyncOutcome, String>) {
        match result {
            Ok(SyncOutcome::Reports(reports)) => {
                self.selected = reports.len().saturating_sub(1); // jump to latest
                self.reports = reports;
                self.phase = Phase::Ready;
                self.notice = None;
                self.last_sync = Some(now_label());
            }
            Ok(SyncOutcome::NoData) => {
                self.reports.clear();
                self.selected = 0;
                self.phase = Phase::Empty;
                self.notice = None;
                self.last_sync = Some(now_label());
            }
            Err(msg) => {
                loge!("Sync: {}", msg);
                if self.phase == Phase::NeverSynced {
                    self.reports = vec![LabReport::fallback()];
                    self.selected = 0;
                    self.phase = Phase::Ready;
                }
                // Keep whatever is displayed; just surface the notice.
                self.notice = Some(format!("Couldn't refresh the report: {msg}"));
            }
        }
    }
}

fn now_label() -> String {
    Local::now().format("%H:%M:%S").to_string()
}
