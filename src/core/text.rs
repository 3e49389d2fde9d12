// src/core/text.rs

/// Collapse runs of whitespace to single spaces and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Parse the leading numeric part of a display string ("6.2%", " 8,8 ").
/// Metric fields are free text upstream, so this never errors; callers treat
/// None as zero.
pub fn leading_number(s: &str) -> Option<f32> {
    let t = s.trim();
    let mut end = 0;
    for (i, ch) in t.char_indices() {
        if ch.is_ascii_digit() || ch == '.' || (i == 0 && (ch == '-' || ch == '+')) {
            end = i + ch.len_utf8();
        } else if ch == ',' {
            // tolerate a decimal comma by cutting there; the integer part
            // is close enough for a cosmetic bar
            break;
        } else {
            break;
        }
    }
    if end == 0 {
        return None;
    }
    t[..end].parse::<f32>().ok()
}
