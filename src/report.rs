// src/report.rs
//
// LabReport: the daily quality-test record shown to visitors, parsed out of
// the sheet's gviz table. Every field is a display string with a hardcoded
// fallback; a data row can be arbitrarily ragged and still parses.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::config::consts::*;
use crate::core::gviz::{GvizRow, GvizTable};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabReport {
    pub date: String,
    pub fat: String,
    pub snf: String,
    pub status: String,
    pub fssai: String,
    /// Drive share link, empty when nothing was uploaded
    pub file_url: String,
    pub file_name: String,
}

impl LabReport {
    /// The documented fallback record, substituted when the feed is
    /// unreachable or malformed before any successful sync.
    pub fn fallback() -> Self {
        Self {
            date: today(),
            fat: s!(FALLBACK_FAT),
            snf: s!(FALLBACK_SNF),
            status: s!(FALLBACK_STATUS),
            fssai: s!(FALLBACK_FSSAI),
            file_url: s!(),
            file_name: s!(FALLBACK_FILE_NAME),
        }
    }
}

fn today() -> String {
    Local::now().format("%d/%m/%Y").to_string()
}

/// Column-index-to-field mapping, resolved once per table.
///
/// The sheet's column order is an implicit contract with the upload form.
/// Matching the gviz column labels first means a reordered sheet keeps
/// working; the positional defaults below mirror the form layout
/// (col 0 is the form's submission timestamp).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnMap {
    pub date: usize,
    pub fat: usize,
    pub snf: usize,
    pub status: usize,
    pub fssai: usize,
    pub file_url: usize,
    pub file_name: usize,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            date: 1,
            fat: 2,
            snf: 3,
            status: 4,
            fssai: 5,
            file_url: 6,
            file_name: 7,
        }
    }
}

// (field label fragments, default index) — label match is case-insensitive
// substring, so "Fat %" and "FAT CONTENT" both land on fat.
const LABELS: &[(&str, fn(&mut ColumnMap, usize))] = &[
    ("date", |m, i| m.date = i),
    ("fat", |m, i| m.fat = i),
    ("snf", |m, i| m.snf = i),
    ("status", |m, i| m.status = i),
    ("fssai", |m, i| m.fssai = i),
    ("file url", |m, i| m.file_url = i),
    ("file name", |m, i| m.file_name = i),
];

impl ColumnMap {
    /// Resolve the mapping from gviz column labels, keeping positional
    /// defaults for any field whose label is missing.
    pub fn resolve(table: &GvizTable) -> Self {
        let mut map = Self::default();
        for (i, col) in table.cols.iter().enumerate() {
            let label = col.label.to_ascii_lowercase();
            if label.is_empty() {
                continue;
            }
            for (frag, set) in LABELS {
                if label.contains(frag) {
                    set(&mut map, i);
                    break;
                }
            }
        }
        map
    }
}

/// Convert one data row into a LabReport. Never fails: every missing or
/// empty cell takes its documented default.
pub fn parse_row(row: &GvizRow, map: &ColumnMap) -> LabReport {
    // whitespace-only cells count as missing
    let cell = |i: usize| {
        row.cell_text(i)
            .map(|s| crate::core::text::normalize_ws(&s))
            .filter(|s| !s.is_empty())
    };
    LabReport {
        date: cell(map.date).unwrap_or_else(today),
        fat: cell(map.fat).unwrap_or_else(|| s!(FALLBACK_FAT)),
        snf: cell(map.snf).unwrap_or_else(|| s!(FALLBACK_SNF)),
        status: cell(map.status).unwrap_or_else(|| s!(FALLBACK_STATUS)),
        fssai: cell(map.fssai).unwrap_or_else(|| s!(FALLBACK_FSSAI)),
        file_url: cell(map.file_url).unwrap_or_default(),
        file_name: cell(map.file_name).unwrap_or_else(|| s!(FALLBACK_FILE_NAME)),
    }
}

/// True when a row repeats the sheet's own header labels. Sheets exported
/// without column metadata sometimes carry the header as the first data row;
/// it must not render as a report.
pub fn is_header_row(row: &GvizRow) -> bool {
    let mut hits = 0;
    for i in 0..row.c.len() {
        if let Some(text) = row.cell_text(i) {
            let t = text.to_ascii_lowercase();
            if LABELS.iter().any(|(frag, _)| t == *frag)
                || t == "timestamp"
                || t == "date"
            {
                hits += 1;
            }
        }
    }
    hits >= 2
}

/// Parse the whole table into reports, oldest first. The last element is
/// "today's report" (latest = last physically appended row, which is
/// submission order for a form-backed sheet).
/// An empty vec means the sheet has no data rows — the "no report yet" case.
pub fn parse_table(table: &GvizTable) -> Vec<LabReport> {
    let map = ColumnMap::resolve(table);
    table
        .rows
        .iter()
        .filter(|r| !is_header_row(r))
        .filter(|r| r.c.iter().any(|c| c.is_some()))
        .map(|r| parse_row(r, &map))
        .collect()
}
