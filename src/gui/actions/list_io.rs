// src/gui/actions/list_io.rs
use std::path::PathBuf;

use crate::{file, gui::app::App, report};

fn list_path(app: &App) -> PathBuf {
    PathBuf::from(file::normalize_separators(app.state.gui.list_path.trim()))
}

/// Load a reviewed TXT word list into the word box.
pub fn load_list(app: &mut App) {
    let path = list_path(app);

    match file::load_word_list(&path) {
        Ok(words) => {
            logf!("List: Loaded {} word(s) from {}", words.len(), path.display());
            app.status(format!("Loaded {} word(s) for classification.", words.len()));
            app.words_text = report::render_text(&words);
            app.results = None;
        }
        Err(e) => {
            loge!("List: Load failed: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}

/// Save the word box as a TXT list for review elsewhere.
pub fn save_list(app: &mut App) {
    let words = app.word_list();
    if words.is_empty() {
        logd!("List: Save clicked, but the word box is empty");
        app.status("Nothing to save");
        return;
    }

    let path = list_path(app);
    match file::write_word_list(&path, &words) {
        Ok(()) => {
            logf!("List: Saved {} word(s) → {}", words.len(), path.display());
            app.status(format!("Saved {}", path.display()));
        }
        Err(e) => {
            loge!("List: Save failed: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}
