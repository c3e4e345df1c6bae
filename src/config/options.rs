// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            fetch: FetchOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

/// What to ask the solver site for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Puzzle letter set as the user typed it, e.g. "pRincej".
    pub letters: String,
}

impl FetchOptions {
    /// Letters trimmed for the request path.
    pub fn letters_trimmed(&self) -> &str {
        self.letters.trim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_dir: PathBuf,
    /// Also write the raw word list as TXT next to the HTML reports.
    pub include_words_txt: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            include_words_txt: true,
        }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse GUI text into the output directory. Separators are normalized;
    /// filenames are fixed by the report contract, so only a dir is accepted.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_dir = PathBuf::from(DEFAULT_OUT_DIR);
        } else {
            self.out_dir = PathBuf::from(crate::file::normalize_separators(s));
        }
    }

    pub fn common_path(&self) -> PathBuf {
        self.out_dir.join(COMMON_FILE)
    }

    pub fn rare_path(&self) -> PathBuf {
        self.out_dir.join(RARE_FILE)
    }

    pub fn words_path(&self) -> PathBuf {
        self.out_dir.join(WORDS_FILE)
    }
}
