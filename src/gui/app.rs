// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{config::state::AppState, file, lexicon::Partition};

use super::components;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Bee Scrape",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // editable word list box; classification reads it, fetch fills it
    pub words_text: String,

    // last classification, None until CLASSIFY has run
    pub results: Option<Partition>,

    // output dir text field UX (we map this <-> ExportOptions)
    pub out_dir_text: String,
    pub out_dir_dirty: bool,

    // status line (progress sink writes here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_dir_text = state.options.export.out_dir().to_string_lossy().into_owned();

        logf!("Init: out_dir={}", out_dir_text);

        Self {
            state,
            words_text: s!(),
            results: None,
            out_dir_text,
            out_dir_dirty: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// Current word list parsed out of the word box.
    pub fn word_list(&self) -> Vec<String> {
        file::parse_word_list(&self.words_text)
    }

    pub fn word_count(&self) -> usize {
        self.word_list().len()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("input")
            .show(ctx, |ui| components::input_bar::draw(ui, self));

        egui::TopBottomPanel::bottom("actions")
            .show(ctx, |ui| components::action_bar::draw(ui, self));

        egui::SidePanel::left("words")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| components::word_panel::draw(ui, self));

        egui::CentralPanel::default()
            .show(ctx, |ui| components::results_table::draw(ui, self));
    }
}
