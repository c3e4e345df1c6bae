// src/config/consts.rs

// Net config
pub const SOLVER_BASE: &str = "https://www.sbsolver.com/s/";
pub const DICT_HOME: &str = "https://www.oed.com/";
// The default library agent gets bounced by both sites
pub const USER_AGENT: &str = "Mozilla/5.0";
pub const TIMEOUT_SECS: u64 = 15;

// Classification
pub const RARE_USAGE_MAX: u32 = 2; // usage_score <= this → rare

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const COMMON_FILE: &str = "common_words.html";
pub const RARE_FILE: &str = "rare_words.html";
pub const WORDS_FILE: &str = "words.txt";
pub const COMMON_TITLE: &str = "Common Words";
pub const RARE_TITLE: &str = "Rare / Variant / Missing Words";

// Logging
pub const LOG_FILE: &str = "bee_scrape.log";
