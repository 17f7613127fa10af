//! Criterion benchmarks for the preprocessing toolkit.
//!
//! Covers vocabulary construction, spelling correction at each candidate
//! tier, and the string transforms.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use preprocessing::spelling::corrector::SpellingCorrector;
use preprocessing::spelling::vocabulary::Vocabulary;
use preprocessing::text::{self, Transform};

/// Generate a synthetic corpus with a skewed word distribution.
fn generate_corpus(word_count: usize) -> String {
    let words = [
        "the", "of", "and", "spelling", "correction", "vocabulary", "frequency", "candidate",
        "corpus", "probability", "transform", "sentence", "keyword", "ligature", "entity",
        "punctuation", "whitespace", "number", "language", "model", "edit", "distance",
        "insertion", "deletion", "substitution", "transposition", "ranking", "pipeline",
    ];

    let mut corpus = String::with_capacity(word_count * 8);
    for i in 0..word_count {
        // Earlier words repeat more often.
        let index = (i * i + i / 3) % words.len() % (1 + i % words.len());
        corpus.push_str(words[index]);
        corpus.push(if i % 17 == 16 { '.' } else { ' ' });
    }
    corpus
}

fn bench_vocabulary(c: &mut Criterion) {
    let mut group = c.benchmark_group("vocabulary");
    let corpus = generate_corpus(100_000);

    group.throughput(Throughput::Bytes(corpus.len() as u64));
    group.bench_function("from_corpus", |b| {
        b.iter(|| black_box(Vocabulary::from_corpus(black_box(&corpus))))
    });

    group.finish();
}

fn bench_spell_correction(c: &mut Criterion) {
    let mut group = c.benchmark_group("spell_correction");
    group.sample_size(20);

    let vocabulary = Arc::new(Vocabulary::from_corpus(&generate_corpus(100_000)));
    let corrector = SpellingCorrector::new(vocabulary);

    group.bench_function("known_word", |b| {
        b.iter(|| black_box(corrector.correct_word(black_box("vocabulary"))))
    });

    group.bench_function("one_edit", |b| {
        b.iter(|| black_box(corrector.correct_word(black_box("vocabluary"))))
    });

    group.bench_function("two_edits", |b| {
        b.iter(|| black_box(corrector.correct_word(black_box("vocbluary"))))
    });

    group.bench_function("unknown_word", |b| {
        b.iter(|| black_box(corrector.correct_word(black_box("qzxjvwkp"))))
    });

    let misspellings: Vec<&str> = vec![
        "teh", "spleling", "corection", "vocabluary", "frequncy", "candiate", "corpsu",
        "probablity", "tranform", "sentense", "keywrod", "ligatrue",
    ];
    group.throughput(Throughput::Elements(misspellings.len() as u64));
    group.bench_function("correct_batch", |b| {
        b.iter(|| black_box(corrector.correct_batch(black_box(&misspellings))))
    });

    group.finish();
}

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");
    let document = "Visit https://example.com/page?id=42 for the 2 &amp; 3 day ﬁnal \
                    results!!! The team (of twenty) met on Monday... ;. Another line\\n here."
        .repeat(50);

    group.throughput(Throughput::Bytes(document.len() as u64));

    group.bench_function("keyword_tokenize", |b| {
        b.iter(|| black_box(text::keyword_tokenize(black_box(document.as_str()))))
    });

    group.bench_function("create_sentence_list", |b| {
        b.iter(|| black_box(text::create_sentence_list(black_box(document.as_str()))))
    });

    let transforms = [
        Transform::ConvertHtmlEntities,
        Transform::ConvertLigatures,
        Transform::Lowercase,
        Transform::RemoveUrls,
        Transform::RemoveEscChars,
        Transform::RemoveNumbers,
        Transform::RemoveNumberWords,
        Transform::RemoveTimeWords,
        Transform::RemoveUnboundPunct,
    ];
    group.bench_function("preprocess_text", |b| {
        b.iter(|| black_box(text::preprocess_text(black_box(document.as_str()), &transforms)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_vocabulary,
    bench_spell_correction,
    bench_transforms
);
criterion_main!(benches);
