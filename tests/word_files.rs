// tests/word_files.rs
//
// Export + word-list round-trip tests against a temp directory.
//
use std::fs;
use std::path::PathBuf;

use bee_scrape::config::consts::{COMMON_FILE, RARE_FILE, WORDS_FILE};
use bee_scrape::config::options::ExportOptions;
use bee_scrape::file::{load_word_list, parse_word_list, write_reports, write_word_list};
use bee_scrape::lexicon::{Link, Partition};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("bee_scrape_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn link(word: &str, url: &str) -> Link {
    Link { url: url.to_string(), text: word.to_string() }
}

fn sample_partition() -> Partition {
    Partition {
        common: vec![link("EAT", "https://www.oed.com/search/dictionary/?q=EAT")],
        rare: vec![link("AE", "https://www.oed.com/")],
    }
}

#[test]
fn write_reports_produces_all_three_artifacts() {
    let dir = tmp_dir("all");
    let mut export = ExportOptions::default();
    export.set_dir(dir.to_str().unwrap());
    export.include_words_txt = true;

    let words = vec!["EAT".to_string(), "AE".to_string()];
    let written = write_reports(&export, &sample_partition(), &words).unwrap();

    assert_eq!(written.len(), 3);
    assert!(written[0].ends_with(COMMON_FILE));
    assert!(written[1].ends_with(RARE_FILE));
    assert!(written[2].ends_with(WORDS_FILE));

    let common = fs::read_to_string(&written[0]).unwrap();
    assert!(common.contains(r#"<a href="https://www.oed.com/search/dictionary/?q=EAT">EAT</a>"#));
    assert!(common.contains("<h2>Common Words</h2>"));

    let rare = fs::read_to_string(&written[1]).unwrap();
    assert!(rare.contains("<h2>Rare / Variant / Missing Words</h2>"));
    assert!(rare.contains(r#"<a href="https://www.oed.com/">AE</a>"#));
}

#[test]
fn words_txt_can_be_skipped() {
    let dir = tmp_dir("no_txt");
    let mut export = ExportOptions::default();
    export.set_dir(dir.to_str().unwrap());
    export.include_words_txt = false;

    let written = write_reports(&export, &sample_partition(), &[]).unwrap();
    assert_eq!(written.len(), 2);
    assert!(!dir.join(WORDS_FILE).exists());
}

#[test]
fn word_list_round_trips_through_disk() {
    let dir = tmp_dir("roundtrip");
    let path = dir.join("reviewed.txt");
    let words = vec!["DUDED".to_string(), "DUDE".to_string(), "ADDED".to_string()];

    write_word_list(&path, &words).unwrap();
    assert_eq!(load_word_list(&path).unwrap(), words);
}

#[test]
fn loading_normalizes_case_and_skips_blanks() {
    let dir = tmp_dir("normalize");
    let path = dir.join("messy.txt");
    fs::write(&path, "duded\n\n  dude  \n\nADDED\n").unwrap();

    assert_eq!(load_word_list(&path).unwrap(), vec!["DUDED", "DUDE", "ADDED"]);
}

#[test]
fn loading_missing_file_names_the_path() {
    let err = load_word_list(&PathBuf::from("no/such/list.txt")).unwrap_err();
    assert!(err.to_string().contains("list.txt"));
}

#[test]
fn parse_word_list_matches_file_semantics() {
    assert_eq!(parse_word_list("eat\n\ntea\n"), vec!["EAT", "TEA"]);
    assert!(parse_word_list("\n \n").is_empty());
}

#[test]
fn export_paths_use_fixed_filenames() {
    let mut export = ExportOptions::default();
    export.set_dir("reports/run1");
    assert!(export.common_path().ends_with(PathBuf::from("run1").join(COMMON_FILE)));
    assert!(export.rare_path().ends_with(PathBuf::from("run1").join(RARE_FILE)));
    assert!(export.words_path().ends_with(PathBuf::from("run1").join(WORDS_FILE)));
}
