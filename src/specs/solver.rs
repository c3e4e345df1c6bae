// src/specs/solver.rs

use std::error::Error;

use crate::core::html::{
    first_element_with_class, has_class, inner_after_open_tag, next_tag_block_ci, open_tag,
    strip_tags,
};
use crate::core::sanitize::{normalize_entities, normalize_word};

/// Extract candidate words from a solver results page.
///
/// Ground truth: `<table class="bee-set">`, one anchor per word inside the
/// `<td class="bee-hover">` cells. Words come back trimmed and uppercased,
/// in page order, duplicates intact. A missing table is a hard error (the
/// page layout changed or the letters were rejected); a present-but-empty
/// table is a valid empty list.
pub fn extract_words(doc: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let table = first_element_with_class(doc, &["bee-set"])
        .ok_or("bee-set word table not found")?;

    let mut words = Vec::new();
    let mut pos = 0usize;
    while let Some((td_s, td_e)) = next_tag_block_ci(table.inner, "<td", "</td>", pos) {
        let td = &table.inner[td_s..td_e];
        pos = td_e;

        if !has_class(open_tag(td), "bee-hover") {
            continue;
        }

        let mut a_pos = 0usize;
        while let Some((a_s, a_e)) = next_tag_block_ci(td, "<a", "</a>", a_pos) {
            let inner = inner_after_open_tag(&td[a_s..a_e]);
            let word = normalize_word(&strip_tags(normalize_entities(&inner)));
            if !word.is_empty() {
                words.push(word);
            }
            a_pos = a_e;
        }
    }

    Ok(words)
}
