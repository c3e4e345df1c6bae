// src/specs/dictionary.rs

use crate::core::html::{attr_value_ci, first_element_with_class, strip_tags, to_lower};
use crate::core::sanitize::normalize_entities;

/// Phrases whose presence in the first sense text marks the entry as a
/// variant/alteration of another headword.
pub const VARIANT_MARKERS: &[&str] = &[
    "variant of",
    "also a variant of",
    "alteration of",
    "spelling of",
];

/// The two signals a dictionary entry page yields for classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DictSignals {
    pub usage_score: u32,
    pub is_variant_marked: bool,
}

/// Extract both signals from a dictionary result page.
///
/// Usage: `aria-valuenow` on the first `frequencyIndicator` element.
/// Variant: marker phrase in the text of the first `sense`/`definition`
/// block. Missing markup degrades to the defaults (0 / false); under the
/// decision rule that means rare, the conservative outcome.
pub fn extract_signals(doc: &str) -> DictSignals {
    let usage_score = first_element_with_class(doc, &["frequencyIndicator"])
        .and_then(|el| attr_value_ci(el.open, "aria-valuenow"))
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(0);

    let is_variant_marked = first_element_with_class(doc, &["sense", "definition"])
        .map(|el| {
            let text = to_lower(&strip_tags(normalize_entities(el.inner)));
            VARIANT_MARKERS.iter().any(|m| text.contains(m))
        })
        .unwrap_or(false);

    DictSignals { usage_score, is_variant_marked }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_usage_from_frequency_indicator() {
        let doc = r#"
            <div class="entry">
              <div class="frequencyIndicator" aria-valuenow="6" aria-valuemax="8"></div>
              <div class="sense">A hooved grazing animal.</div>
            </div>
        "#;
        let s = extract_signals(doc);
        assert_eq!(s.usage_score, 6);
        assert!(!s.is_variant_marked);
    }

    #[test]
    fn missing_indicator_defaults_to_zero() {
        let doc = r#"<div class="sense">Some definition.</div>"#;
        assert_eq!(extract_signals(doc).usage_score, 0);
    }

    #[test]
    fn non_numeric_valuenow_defaults_to_zero() {
        let doc = r#"<span class="frequencyIndicator" aria-valuenow="n/a"></span>"#;
        assert_eq!(extract_signals(doc).usage_score, 0);
    }

    #[test]
    fn variant_marker_in_first_sense() {
        let doc = r#"
            <div class="frequencyIndicator" aria-valuenow="5"></div>
            <div class="sense">A <i>variant of</i> COLOUR.</div>
        "#;
        let s = extract_signals(doc);
        assert_eq!(s.usage_score, 5);
        assert!(s.is_variant_marked);
    }

    #[test]
    fn definition_class_works_too() {
        let doc = r#"<p class="definition">Dialect spelling of YES.</p>"#;
        assert!(extract_signals(doc).is_variant_marked);
    }

    #[test]
    fn marker_match_is_case_insensitive() {
        let doc = r#"<div class="sense">Alteration Of AXE.</div>"#;
        assert!(extract_signals(doc).is_variant_marked);
    }

    #[test]
    fn no_sense_block_means_not_variant() {
        let doc = r#"<div class="frequencyIndicator" aria-valuenow="4"></div>"#;
        let s = extract_signals(doc);
        assert!(!s.is_variant_marked);
        assert_eq!(s.usage_score, 4);
    }

    #[test]
    fn single_quoted_and_unquoted_attrs() {
        let doc = r#"<div class='frequencyIndicator' aria-valuenow=7></div>"#;
        assert_eq!(extract_signals(doc).usage_score, 7);
    }
}
