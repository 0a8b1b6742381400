// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Description text for one export cell: tabs, CR and LF become spaces and
/// runs of whitespace collapse to one space.
pub fn clean_description(s: &str) -> String {
    let flat = s.replace(['\t', '\n', '\r'], " ");
    normalize_ws(&flat)
}

/// Case- and whitespace-insensitive equality (search link text vs query).
pub fn loose_eq(a: &str, b: &str) -> bool {
    normalize_ws(a).to_lowercase() == normalize_ws(b).to_lowercase()
}

/// Decode the body of a JSON string literal lifted out of page source
/// (`\n`, `\"`, `\u00e9`, surrogate pairs, …). Raw control characters are
/// escaped first so they do not void the decode. Falls back to the raw text
/// when it is still not a valid literal body.
pub fn decode_json_text(raw: &str) -> String {
    let mut quoted = String::with_capacity(raw.len() + 2);
    quoted.push('"');
    for ch in raw.chars() {
        if (ch as u32) < 0x20 {
            quoted.push_str(&format!("\\u{:04x}", ch as u32));
        } else {
            quoted.push(ch);
        }
    }
    quoted.push('"');
    serde_json::from_str::<String>(&quoted).unwrap_or_else(|_| s!(raw))
}

/// Title counts as basic Latin when every char is ASCII or whitespace.
/// Accented Latin letters ("Café") fail this too.
pub fn is_basic_latin(title: &str) -> bool {
    !title.is_empty() && title.chars().all(|c| c.is_ascii() || c.is_whitespace())
}
