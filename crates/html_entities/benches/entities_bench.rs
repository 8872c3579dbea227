use criterion::{Criterion, black_box, criterion_group, criterion_main};
use html_entities::perf_fixtures::{
    make_ampersand_adversarial, make_encoded, make_plain, make_raw,
};
use html_entities::{EncodeOptions, EntityTable, decode_html_entities, encode_html_entities};

const SMALL_BLOCKS: usize = 64;
const LARGE_BLOCKS: usize = 20_000;

fn bench_table_load(c: &mut Criterion) {
    c.bench_function("bench_table_load", |b| {
        b.iter(|| {
            let table = EntityTable::bundled().expect("bundled table should load");
            black_box(table.len());
        });
    });
}

fn bench_decode_small(c: &mut Criterion) {
    let table = EntityTable::bundled().expect("bundled table should load");
    let input = make_encoded(SMALL_BLOCKS);
    c.bench_function("bench_decode_small", |b| {
        b.iter(|| black_box(decode_html_entities(black_box(&input), &table)));
    });
}

fn bench_decode_large(c: &mut Criterion) {
    let table = EntityTable::bundled().expect("bundled table should load");
    let input = make_encoded(LARGE_BLOCKS);
    c.bench_function("bench_decode_large", |b| {
        b.iter(|| black_box(decode_html_entities(black_box(&input), &table)));
    });
}

fn bench_decode_plain_large(c: &mut Criterion) {
    let table = EntityTable::bundled().expect("bundled table should load");
    let input = make_plain(LARGE_BLOCKS);
    c.bench_function("bench_decode_plain_large", |b| {
        b.iter(|| black_box(decode_html_entities(black_box(&input), &table)));
    });
}

fn bench_decode_ampersand_adversarial(c: &mut Criterion) {
    let table = EntityTable::bundled().expect("bundled table should load");
    let input = make_ampersand_adversarial(512 * 1024);
    c.bench_function("bench_decode_ampersand_adversarial", |b| {
        b.iter(|| black_box(decode_html_entities(black_box(&input), &table)));
    });
}

fn bench_encode_large(c: &mut Criterion) {
    let table = EntityTable::bundled().expect("bundled table should load");
    let input = make_raw(LARGE_BLOCKS);
    let named = EncodeOptions::new().prefer_named();
    let hex = EncodeOptions::new().hex().padded();
    c.bench_function("bench_encode_named_large", |b| {
        b.iter(|| black_box(encode_html_entities(black_box(&input), &table, named)));
    });
    c.bench_function("bench_encode_hex_large", |b| {
        b.iter(|| black_box(encode_html_entities(black_box(&input), &table, hex)));
    });
}

criterion_group!(
    benches,
    bench_table_load,
    bench_decode_small,
    bench_decode_large,
    bench_decode_plain_large,
    bench_decode_ampersand_adversarial,
    bench_encode_large
);
criterion_main!(benches);
