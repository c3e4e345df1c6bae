// src/gui/components/input_bar.rs
//
// Top bar: letter set input + FETCH.

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Letters:");
        ui.add(
            egui::TextEdit::singleline(&mut app.state.options.fetch.letters)
                .desired_width(120.0)
                .font(egui::TextStyle::Monospace)
                .hint_text("pRincej"),
        );

        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;

        if ui
            .add(egui::Button::new(egui::RichText::new("FETCH").color(black).strong()).fill(red))
            .clicked()
        {
            actions::fetch(app);
        }

        let n = app.word_count();
        if n > 0 {
            ui.label(format!("{n} word(s) in the list"));
        }
    });
}
