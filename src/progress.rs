// src/progress.rs
/// Lightweight progress reporting used by long-running operations
/// (fetch/classify). Frontends (GUI/CLI) implement this to surface status.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one word has been looked up and classified.
    fn item_done(&mut self, _word: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
