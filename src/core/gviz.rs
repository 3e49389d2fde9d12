// src/core/gviz.rs
//
// Decoder for the Google Visualization ("gviz") tabular export. The endpoint
// returns JavaScript, not JSON: the payload is wrapped in a
// `google.visualization.Query.setResponse(...)` callback. We peel the wrapper
// off with a regex and hand the inside to serde_json.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct GvizResponse {
    pub table: GvizTable,
}

#[derive(Debug, Default, Deserialize)]
pub struct GvizTable {
    #[serde(default)]
    pub cols: Vec<GvizCol>,
    #[serde(default)]
    pub rows: Vec<GvizRow>,
}

#[derive(Debug, Deserialize)]
pub struct GvizCol {
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Deserialize)]
pub struct GvizRow {
    /// Cells in column order; absent/empty cells come through as null.
    #[serde(default)]
    pub c: Vec<Option<GvizCell>>,
}

#[derive(Debug, Deserialize)]
pub struct GvizCell {
    /// Raw value: string, number, bool, or a "Date(...)" string.
    #[serde(default)]
    pub v: Option<Value>,
    /// Formatted value as the sheet displays it.
    #[serde(default)]
    pub f: Option<String>,
}

impl GvizRow {
    /// Display text of cell `i`, preferring the sheet's own formatting.
    /// Missing/null cells yield None.
    pub fn cell_text(&self, i: usize) -> Option<String> {
        let cell = self.c.get(i)?.as_ref()?;
        if let Some(f) = &cell.f {
            if !f.is_empty() {
                return Some(f.clone());
            }
        }
        match &cell.v {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::Bool(b)) => Some(b.to_string()),
            _ => None,
        }
    }
}

fn wrapper_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // (?s) so the payload may span lines; trailing ");" is optional
        // because the endpoint has shipped both shapes.
        Regex::new(r"(?s)google\.visualization\.Query\.setResponse\((.+)\)\s*;?\s*$")
            .expect("gviz wrapper regex")
    })
}

/// Strip the callback wrapper and parse the embedded JSON table.
pub fn decode(body: &str) -> Result<GvizTable, Box<dyn std::error::Error>> {
    let caps = wrapper_re()
        .captures(body.trim())
        .ok_or("gviz: callback wrapper not found in response")?;
    let inner = caps.get(1).map(|m| m.as_str()).unwrap_or("");
    let parsed: GvizResponse = serde_json::from_str(inner)?;
    Ok(parsed.table)
}
