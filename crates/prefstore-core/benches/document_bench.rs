//! Criterion benchmarks for the preference document codec.
//!
//! Measures encode and decode latency as the number of entries grows.
//! Preference sets are small in practice (tens of keys), but the codec
//! sits on the application startup path, so regressions here show up
//! as launch latency.
//!
//! Run with:
//! ```bash
//! cargo bench --package prefstore-core --bench document_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use prefstore_core::{decode_document, encode_document, PrefDocument};

// ── Document fixtures ─────────────────────────────────────────────────────────

/// Builds a document with `entries` keys cycling through all four
/// storage classes.
fn make_document(entries: usize) -> PrefDocument {
    let mut doc = PrefDocument::new();
    for i in 0..entries {
        match i % 4 {
            0 => doc.insert(format!("flag{i}"), i % 8 == 0),
            1 => doc.insert(format!("count{i}"), i as i64),
            2 => doc.insert(format!("ratio{i}"), i as f64 / 3.0),
            _ => doc.insert(format!("path{i}"), format!("/home/user/parts/{i}")),
        }
    }
    doc
}

// ── Benchmarks ────────────────────────────────────────────────────────────────

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_document");
    for entries in [4usize, 32, 256] {
        let doc = make_document(entries);
        group.bench_with_input(BenchmarkId::from_parameter(entries), &doc, |b, doc| {
            b.iter(|| encode_document(black_box(doc)).expect("encode must succeed"));
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_document");
    for entries in [4usize, 32, 256] {
        let text = encode_document(&make_document(entries)).expect("encode must succeed");
        group.bench_with_input(BenchmarkId::from_parameter(entries), &text, |b, text| {
            b.iter(|| decode_document(black_box(text)).expect("decode must succeed"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
