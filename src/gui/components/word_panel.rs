// src/gui/components/word_panel.rs
//
// Left panel: the editable word list plus TXT load/save. Users prune the
// fetched list here before classifying (the "reviewed word list" step).

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Words");

    ui.horizontal(|ui| {
        if ui.button("Load").clicked() {
            actions::load_list(app);
        }
        if ui.button("Save").clicked() {
            actions::save_list(app);
        }
    });
    ui.add(
        egui::TextEdit::singleline(&mut app.state.gui.list_path)
            .font(egui::TextStyle::Monospace),
    );

    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add(
            egui::TextEdit::multiline(&mut app.words_text)
                .font(egui::TextStyle::Monospace)
                .desired_rows(24)
                .desired_width(f32::INFINITY),
        );
    });
}
