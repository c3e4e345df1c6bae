// src/report.rs

use crate::lexicon::Link;

/// Minimal standalone list-of-links page. Title and items land in the
/// document verbatim; both are program-built strings, never user markup.
pub fn render_html(title: &str, items: &[Link]) -> String {
    let mut doc = String::with_capacity(256 + items.len() * 96);
    doc.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n");
    doc.push_str(&join!("<title>", title, "</title>\n"));
    doc.push_str("</head>\n<body>\n");
    doc.push_str(&join!("<h2>", title, "</h2>\n"));
    doc.push_str("<ul>\n");
    for item in items {
        doc.push_str(&join!("<li>", &item.anchor(), "</li>\n"));
    }
    doc.push_str("</ul>\n</body>\n</html>\n");
    doc
}

/// Plain-text word list, one word per line (the review/handoff artifact).
pub fn render_text(words: &[String]) -> String {
    let mut out = words.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}
