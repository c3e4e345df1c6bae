// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Path shown in the word-list Load/Save field.
    pub list_path: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            list_path: s!(crate::config::consts::WORDS_FILE),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            options: AppOptions::default(),
            gui: GuiState::default(),
        }
    }
}
