// src/core/drive.rs
//
// Resolve Drive share links into something renderable. Uploaders paste links
// in whatever shape Drive happened to give them: `/file/d/<id>/view`,
// `open?id=<id>`, or occasionally the bare file id. We pull out the opaque id
// and template the three URL shapes we need from it.

use std::sync::OnceLock;

use regex::Regex;

/// The three derived link shapes for one Drive file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriveLinks {
    pub preview: String,
    pub open: String,
    pub download: String,
}

/// How the report page should try to render the file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Pdf,
    Unknown,
}

fn path_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/d/([A-Za-z0-9_-]+)").expect("drive path regex"))
}

fn query_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[?&]id=([A-Za-z0-9_-]+)").expect("drive query regex"))
}

fn bare_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Drive ids are opaque but consistently long; 25 chars keeps short words
    // and filenames from matching.
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]{25,}$").expect("drive bare-id regex"))
}

/// Extract the opaque file id from a share link, or None if the string
/// matches no known shape.
pub fn extract_file_id(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    if let Some(caps) = path_re().captures(url) {
        return Some(caps[1].to_string());
    }
    if let Some(caps) = query_re().captures(url) {
        return Some(caps[1].to_string());
    }
    if bare_re().is_match(url) {
        return Some(url.to_string());
    }
    None
}

/// Derive preview/open/download URLs for a share link, or None if no file id
/// can be extracted. Each derived URL contains the id exactly once.
pub fn resolve(url: &str) -> Option<DriveLinks> {
    let id = extract_file_id(url)?;
    Some(DriveLinks {
        preview: format!("https://drive.google.com/file/d/{id}/preview"),
        open: format!("https://drive.google.com/file/d/{id}/view"),
        download: format!("https://drive.google.com/uc?export=download&id={id}"),
    })
}

/// Pick a render path from the display name's extension. The same share link
/// may point at a photo of the report or a PDF scan; the name is the only
/// hint we get.
pub fn file_kind(file_name: &str) -> FileKind {
    let lower = file_name.trim().to_ascii_lowercase();
    let ext = lower.rsplit('.').next().unwrap_or("");
    match ext {
        "png" | "jpg" | "jpeg" | "gif" | "webp" => FileKind::Image,
        "pdf" => FileKind::Pdf,
        _ => FileKind::Unknown,
    }
}
