//! Criterion benchmarks for the javelin search library.
//!
//! Covers the two hot pure functions on the query path:
//! - Query analysis (tokenization + filtering)
//! - Shard routing

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use javelin::analysis::analyze;
use javelin::shard::shard_id;

/// Generate test queries for benchmarking.
fn generate_test_queries(count: usize) -> Vec<String> {
    let words = vec![
        "search", "engine", "full", "text", "index", "query", "document", "shard", "term",
        "frequency", "boolean", "candidate", "score", "relevance", "pagination", "transport",
        "cache", "merge", "router", "tokenizer", "lunar", "new", "year", "bowl", "noodle",
    ];

    let mut queries = Vec::with_capacity(count);
    for i in 0..count {
        let len = 2 + (i % 5);
        let mut query_words = Vec::with_capacity(len);
        for j in 0..len {
            query_words.push(words[(i * 7 + j * 3) % words.len()]);
        }
        queries.push(query_words.join(" "));
    }
    queries
}

fn bench_analyze(c: &mut Criterion) {
    let queries = generate_test_queries(1000);

    let mut group = c.benchmark_group("analysis");
    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("analyze_1000_queries", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(analyze(black_box(query)).unwrap());
            }
        })
    });
    group.finish();
}

fn bench_shard_routing(c: &mut Criterion) {
    let keys = generate_test_queries(1000);

    let mut group = c.benchmark_group("shard");
    group.throughput(Throughput::Elements(keys.len() as u64));
    group.bench_function("shard_id_1000_keys", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(shard_id(black_box(key), 64));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_analyze, bench_shard_routing);
criterion_main!(benches);
