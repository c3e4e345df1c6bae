// src/lexicon/source.rs

use std::error::Error;

use reqwest::blocking::Client;

use crate::config::consts::SOLVER_BASE;
use crate::core::net;
use crate::core::sanitize::is_valid_letter_set;
use crate::specs::{dictionary, dictionary::DictSignals, solver};

use super::classify::dict_query_url;

/// Yields the candidate words for a letter set.
pub trait WordSource {
    fn fetch(&self, letters: &str) -> Result<Vec<String>, Box<dyn Error>>;
}

/// One dictionary lookup per word. Err means the word could not be checked
/// at all (network/protocol); missing page markup is NOT an error.
pub trait DictLookup {
    fn lookup(&self, word: &str) -> Result<DictSignals, Box<dyn Error>>;
}

/// Live word source backed by the solver site.
pub struct SolverSource {
    client: Client,
}

impl SolverSource {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        Ok(Self { client: net::client()? })
    }
}

impl WordSource for SolverSource {
    fn fetch(&self, letters: &str) -> Result<Vec<String>, Box<dyn Error>> {
        let letters = letters.trim();
        if !is_valid_letter_set(letters) {
            return Err(format!("Invalid letter set: {:?} (letters only)", letters).into());
        }

        let url = join!(SOLVER_BASE, letters);
        logf!("Fetch: {url}");
        let doc = net::get(&self.client, &url)?;

        let mut words = solver::extract_words(&doc)?;
        dedup_keep_order(&mut words);
        logf!("Fetch: {} word(s) for {letters}", words.len());
        Ok(words)
    }
}

/// Live dictionary client.
pub struct DictClient {
    client: Client,
}

impl DictClient {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        Ok(Self { client: net::client()? })
    }
}

impl DictLookup for DictClient {
    fn lookup(&self, word: &str) -> Result<DictSignals, Box<dyn Error>> {
        let doc = net::get(&self.client, &dict_query_url(word))?;
        Ok(dictionary::extract_signals(&doc))
    }
}

/// Drop repeated words, keeping first occurrences in place.
fn dedup_keep_order(words: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    words.retain(|w| seen.insert(w.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        let mut v = vec![s!("EAT"), s!("TEA"), s!("EAT"), s!("ATE"), s!("TEA")];
        dedup_keep_order(&mut v);
        assert_eq!(v, vec!["EAT", "TEA", "ATE"]);
    }
}
