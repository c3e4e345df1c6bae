// src/gui/actions/fetch.rs
use crate::{
    gui::app::App,
    lexicon::{SolverSource, WordSource},
    report,
};

pub fn fetch(app: &mut App) {
    let letters = s!(app.state.options.fetch.letters_trimmed());

    logf!("Fetch: Begin letters={letters}");
    app.status("Fetching words…");

    // Fresh source per fetch; the handle is dropped on every exit path
    let result = SolverSource::new().and_then(|src| src.fetch(&letters));

    match result {
        Ok(words) => {
            logf!("Fetch: OK {} word(s)", words.len());

            if words.is_empty() {
                app.status("No words found. Make sure the letters are valid.");
            } else {
                app.status(format!("Fetched {} words.", words.len()));
            }

            // New list invalidates any previous classification
            app.words_text = report::render_text(&words);
            app.results = None;
        }
        Err(e) => {
            loge!("Fetch: Error: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}
