// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see the action functions.

mod classify; // src/gui/actions/classify.rs
mod copy;     // src/gui/actions/copy.rs
mod export;   // src/gui/actions/export.rs
mod fetch;    // src/gui/actions/fetch.rs
mod list_io;  // src/gui/actions/list_io.rs

pub use classify::classify;
pub use copy::copy;
pub use export::export;
pub use fetch::fetch;
pub use list_io::{load_list, save_list};
