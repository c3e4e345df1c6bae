// src/gui/actions/classify.rs
use crate::{gui::app::App, gui::progress::GuiProgress, lexicon, lexicon::DictClient};

pub fn classify(app: &mut App) {
    let words = app.word_list();
    if words.is_empty() {
        logd!("Classify: Clicked, but the word box is empty");
        app.status("No words to classify");
        return;
    }

    logf!("Classify: Begin {} word(s)", words.len());

    let dict = match DictClient::new() {
        Ok(d) => d,
        Err(e) => {
            loge!("Classify: Client error: {e}");
            app.status(format!("Error: {e}"));
            return;
        }
    };

    let mut prog = GuiProgress::new(app.status.clone());

    // → This is where the lookups happen ←
    let partition = lexicon::classify(&words, &dict, Some(&mut prog));

    logf!(
        "Classify: OK common={} rare={}",
        partition.common.len(),
        partition.rare.len()
    );
    app.status(format!(
        "Done! {} common, {} rare/variant.",
        partition.common.len(),
        partition.rare.len()
    ));
    app.results = Some(partition);
}
