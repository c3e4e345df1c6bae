// src/lexicon/mod.rs
//! The classification core: trait seams for the two remote collaborators
//! (`WordSource`, `DictLookup`), the live adapters behind them, and the
//! decision rule that partitions words into common and rare.

mod classify;
mod source;

pub use classify::{classify, dict_query_url, Category, Link, LookupResult, Partition};
pub use source::{DictClient, DictLookup, SolverSource, WordSource};
