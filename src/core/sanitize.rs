// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

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

/// Canonical word form: trimmed, ASCII-uppercased.
pub fn normalize_word(s: &str) -> String {
    s.trim().to_ascii_uppercase()
}

/// Letter sets must be non-empty and ASCII-alphabetic (case irrelevant).
pub fn is_valid_letter_set(s: &str) -> bool {
    let t = s.trim();
    !t.is_empty() && t.chars().all(|c| c.is_ascii_alphabetic())
}
