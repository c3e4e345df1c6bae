// benches/dictionary.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bee_scrape::specs::{dictionary, solver};

/// A dictionary entry page with realistic navigation noise before the
/// signal elements.
fn sample_entry_page() -> String {
    let mut doc = String::from("<html><head><title>entry</title></head><body>");
    for i in 0..400 {
        doc.push_str(&format!(
            r#"<div class="nav-item" data-ix="{i}"><a href="/browse/{i}">section {i}</a></div>"#
        ));
    }
    doc.push_str(r#"<div class="frequencyIndicator" aria-valuenow="4" aria-valuemax="8"></div>"#);
    doc.push_str(r#"<div class="sense">A variant of COLOUR, chiefly dialectal.</div>"#);
    doc.push_str("</body></html>");
    doc
}

/// A solver results page with a few hundred word rows.
fn sample_solver_page() -> String {
    let mut doc = String::from(r#"<html><body><table class="bee-set">"#);
    for i in 0..300 {
        doc.push_str(&format!(
            r#"<tr><td class="bee-hover"><a href="/w/{i}">word{i}</a></td><td class="bee-points">{i}</td></tr>"#
        ));
    }
    doc.push_str("</table></body></html>");
    doc
}

fn bench_signals(c: &mut Criterion) {
    let doc = sample_entry_page();
    c.bench_function("dictionary_signals", |b| {
        b.iter(|| {
            let s = dictionary::extract_signals(black_box(&doc));
            black_box(s.usage_score)
        })
    });
}

fn bench_words(c: &mut Criterion) {
    let doc = sample_solver_page();
    c.bench_function("solver_words", |b| {
        b.iter(|| {
            let words = solver::extract_words(black_box(&doc)).unwrap();
            black_box(words.len())
        })
    });
}

criterion_group!(benches, bench_signals, bench_words);
criterion_main!(benches);
