// src/lexicon/classify.rs

use crate::config::consts::{DICT_HOME, RARE_USAGE_MAX};
use crate::progress::Progress;

use super::source::DictLookup;

/// Anchor-style output unit: URL plus display text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub url: String,
    pub text: String,
}

impl Link {
    pub fn anchor(&self) -> String {
        format!(r#"<a href="{}">{}</a>"#, self.url, self.text)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Common,
    Rare,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Common => "common",
            Category::Rare => "rare",
        }
    }
}

/// Outcome of one dictionary query. Built fresh per word, never cached.
#[derive(Clone, Debug)]
pub struct LookupResult {
    pub usage_score: u32,
    pub is_variant_marked: bool,
    pub lookup_url: String,
    pub succeeded: bool,
}

impl LookupResult {
    /// The decision rule. A failed lookup is rare outright; otherwise low
    /// usage or a variant marker (either alone) forces rare.
    pub fn category(&self) -> Category {
        if !self.succeeded {
            return Category::Rare;
        }
        if self.usage_score <= RARE_USAGE_MAX || self.is_variant_marked {
            Category::Rare
        } else {
            Category::Common
        }
    }
}

/// Words partitioned into the two report buckets, input order preserved
/// within each. Every input word lands in exactly one bucket.
#[derive(Clone, Debug, Default)]
pub struct Partition {
    pub common: Vec<Link>,
    pub rare: Vec<Link>,
}

impl Partition {
    pub fn total(&self) -> usize {
        self.common.len() + self.rare.len()
    }
}

/// Deterministic lookup address for a word. The word goes in as-is; the
/// site tolerates it and the original pipeline never escaped it either.
pub fn dict_query_url(word: &str) -> String {
    join!(DICT_HOME, "search/dictionary/?q=", word)
}

/// Classify each word with one lookup apiece, sequentially, in input order.
/// Lookup failures never abort the batch: the word goes to `rare` with a
/// fallback link to the dictionary home page. Repeated words are looked up
/// repeatedly; each occurrence is classified on its own result.
pub fn classify(
    words: &[String],
    lookup: &dyn DictLookup,
    mut progress: Option<&mut dyn Progress>,
) -> Partition {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Querying dictionary entries…");
        p.begin(words.len());
    }

    let mut out = Partition::default();
    for word in words {
        let result = resolve(word, lookup);
        let link = Link { url: result.lookup_url.clone(), text: s!(word) };
        match result.category() {
            Category::Common => out.common.push(link),
            Category::Rare => out.rare.push(link),
        }
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(word);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    out
}

fn resolve(word: &str, lookup: &dyn DictLookup) -> LookupResult {
    match lookup.lookup(word) {
        Ok(signals) => LookupResult {
            usage_score: signals.usage_score,
            is_variant_marked: signals.is_variant_marked,
            lookup_url: dict_query_url(word),
            succeeded: true,
        },
        Err(e) => {
            loge!("Lookup: {word} failed: {e}");
            // Fallback link points at the site home, not the failed query
            LookupResult {
                usage_score: 0,
                is_variant_marked: false,
                lookup_url: s!(DICT_HOME),
                succeeded: false,
            }
        }
    }
}
