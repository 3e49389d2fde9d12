// src/config/consts.rs

// Net config
pub const SHEET_HOST: &str = "docs.google.com";
pub const SHEET_PORT: u16 = 80;
pub const SHEET_DOC_ID: &str = "15oe1qIwvrJgJEr5fCRT73j9aRVzVQY9WdSQ-HmbEW_0";
pub const SHEET_WORKSHEET: &str = "Form Responses 1";

// Lead capture
pub const SCRIPT_HOST: &str = "script.google.com";
pub const ORDER_SCRIPT_PATH: &str =
    "/macros/s/AKfycbwY6fQ5hJ6NL9kaJHwr12mWzeW1wbcibKzWGiMka6DciNLikjq1OjjVSMePxecN3J3IwA/exec";
pub const WHATSAPP_NUMBER: &str = "918680050504";

// Refresh
pub const DEFAULT_REFRESH_MINUTES: u64 = 10;

// Sample popup delay after launch
pub const POPUP_DELAY_SECS: u64 = 2;

// Fallback report values, shown whenever the feed is unreachable or empty
// on first sync. Every LabReport field has one of these.
pub const FALLBACK_FAT: &str = "6.2%";
pub const FALLBACK_SNF: &str = "8.8%";
pub const FALLBACK_STATUS: &str = "PASS";
pub const FALLBACK_FSSAI: &str = "APPROVED";
pub const FALLBACK_FILE_NAME: &str = "Daily_Quality_Report.pdf";

// Metric bar scaling: full bar at these percentages.
// Cosmetic only; values above the scale just clamp.
pub const FAT_BAR_SCALE: f32 = 8.0;
pub const SNF_BAR_SCALE: f32 = 10.0;
