// src/specs/mod.rs
//! # Page specs
//!
//! Page-specific scraping specifications: each spec encodes *where the
//! ground truth lives in a remote page's HTML* and *how to extract it
//! robustly*. Specs are pure parsing (no network, no I/O), so every one
//! of them is testable offline against fixture markup.
//!
//! - `solver`: word table on a solver results page.
//! - `dictionary`: frequency and variant signals on a dictionary entry.
//!
//! Conventions: case-insensitive tag detection, local scanning within known
//! blocks over full-document regexes, and graceful degradation (missing
//! markup yields empty/default values, never panics). Transport lives in
//! `core::net`; deciding what to do with the extracted values lives in
//! `lexicon`.

pub mod dictionary;
pub mod solver;
