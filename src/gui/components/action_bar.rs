// src/gui/components/action_bar.rs
//
// Bottom bar: export options + Copy / Export / CLASSIFY + status line.

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_dir_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_dir_dirty = true;
            logd!("UI: out_dir_text changed (dirty=true) → {}", app.out_dir_text);
        }

        let export = &mut app.state.options.export;
        let before = export.include_words_txt;
        ui.checkbox(&mut export.include_words_txt, "Include words.txt");
        if export.include_words_txt != before {
            logf!("UI: include_words_txt → {}", export.include_words_txt);
        }
    });

    ui.horizontal(|ui| {
        // Copy
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }

        // Export
        if ui.button("Export").clicked() {
            actions::export(app);
        }

        // Classify
        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;

        if ui
            .add(egui::Button::new(
                egui::RichText::new("CLASSIFY").color(black).strong())
                .fill(red))
            .clicked()
        {
            actions::classify(app);
        }

        let status = app.status.lock().unwrap().clone();
        ui.label(status);
    });
}
