// src/gui/actions/copy.rs
use eframe::egui;

use crate::{gui::app::App, report};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let words = app.word_list();
    if words.is_empty() {
        logd!("Copy: Clicked, but the word box is empty");
        app.status("Nothing to copy");
        return;
    }

    logf!("Copy: {} word(s)", words.len());
    ui_ctx.copy_text(report::render_text(&words));
    app.status(format!("Copied {} word(s) to clipboard", words.len()));
}
