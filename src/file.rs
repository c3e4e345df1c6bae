// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::{COMMON_TITLE, RARE_TITLE};
use crate::config::options::ExportOptions;
use crate::core::sanitize::normalize_word;
use crate::lexicon::Partition;
use crate::report;

/// Write both HTML reports (and optionally the TXT word list) into the
/// export directory. Returns the paths written, common first.
pub fn write_reports(
    export: &ExportOptions,
    partition: &Partition,
    words: &[String],
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    ensure_directory(export.out_dir())?;

    let mut written = Vec::with_capacity(3);

    let common_path = export.common_path();
    fs::write(&common_path, report::render_html(COMMON_TITLE, &partition.common))?;
    written.push(common_path);

    let rare_path = export.rare_path();
    fs::write(&rare_path, report::render_html(RARE_TITLE, &partition.rare))?;
    written.push(rare_path);

    if export.include_words_txt {
        let words_path = export.words_path();
        write_word_list(&words_path, words)?;
        written.push(words_path);
    }

    Ok(written)
}

/// Write a TXT word list, one word per line.
pub fn write_word_list(path: &Path, words: &[String]) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, report::render_text(words))?;
    Ok(())
}

/// Load a reviewed TXT word list: one word per line, blanks skipped,
/// everything normalized to canonical word form.
pub fn load_word_list(path: &Path) -> Result<Vec<String>, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read word list {}: {}", path.display(), e))?;
    Ok(parse_word_list(&text))
}

/// Same parsing as `load_word_list`, for in-memory text (GUI word box).
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(normalize_word)
        .filter(|w| !w.is_empty())
        .collect()
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
