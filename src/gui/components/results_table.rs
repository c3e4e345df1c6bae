// src/gui/components/results_table.rs
//
// Draws the classification results. Purely a view; bucket order (common,
// then rare) with input order preserved inside each bucket.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::{
    gui::app::App,
    lexicon::{Category, Link},
};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(partition) = &app.results else {
        ui.weak("No classification yet. Fetch or load words, then CLASSIFY.");
        return;
    };

    let rows: Vec<(&Link, Category)> = partition
        .common
        .iter()
        .map(|l| (l, Category::Common))
        .chain(partition.rare.iter().map(|l| (l, Category::Rare)))
        .collect();

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::exact(140.0))
        .column(Column::exact(90.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| { ui.strong("Word"); });
            header.col(|ui| { ui.strong("Category"); });
            header.col(|ui| { ui.strong("Entry"); });
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let (link, category) = rows[row.index()];
                row.col(|ui| { ui.label(&link.text); });
                row.col(|ui| { ui.label(category.label()); });
                row.col(|ui| { ui.hyperlink(&link.url); });
            });
        });
}
