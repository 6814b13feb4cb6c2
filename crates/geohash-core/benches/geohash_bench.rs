use geohash_core::{
    adjacent_hash, base32, cover_bounding_box_longs, cover_bounding_box_optimal, decode, encode,
    encode_to_long, neighbours, Direction,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const WHITE_HOUSE: (f64, f64) = (38.89710201881826, -77.03669792041183);

/// Schenectady, NY to Hartford, CT.
const BOX: (f64, f64, f64, f64) = (42.819581, -73.950691, 41.842967, -72.727175);

/// A spread of points across the globe.
fn sample_points(count: usize) -> Vec<(f64, f64)> {
    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64;
            (t * 170.0 - 85.0, t * 7919.0 % 360.0 - 180.0)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Encode benchmarks
// ---------------------------------------------------------------------------

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for &length in &[1usize, 6, 12] {
        group.bench_with_input(BenchmarkId::new("text", length), &length, |b, &length| {
            b.iter(|| encode(WHITE_HOUSE.0, WHITE_HOUSE.1, length).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("long", length), &length, |b, &length| {
            b.iter(|| encode_to_long(WHITE_HOUSE.0, WHITE_HOUSE.1, length).unwrap());
        });
    }

    group.finish();
}

fn bench_encode_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_batch");

    for &count in &[100usize, 10_000] {
        let points = sample_points(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("12", count), &points, |b, points| {
            b.iter(|| {
                points
                    .iter()
                    .map(|&(lat, lon)| encode_to_long(lat, lon, 12).unwrap())
                    .fold(0i64, |acc, h| acc ^ h)
            });
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Decode benchmarks
// ---------------------------------------------------------------------------

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for hash in ["d", "dqcjqc", "dqcjqcp84c6e"] {
        group.bench_with_input(BenchmarkId::new("text", hash.len()), hash, |b, hash| {
            b.iter(|| decode(hash).unwrap());
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Base32 benchmarks
// ---------------------------------------------------------------------------

fn bench_base32(c: &mut Criterion) {
    let mut group = c.benchmark_group("base32");

    group.bench_function("string_to_long_12_chars", |b| {
        b.iter(|| base32::string_to_long("dqcjqcp84c6e").unwrap());
    });

    group.bench_function("long_to_string_12_chars", |b| {
        let long = base32::string_to_long("dqcjqcp84c6e").unwrap();
        b.iter(|| base32::long_to_string(long).unwrap());
    });

    group.bench_function("signed_roundtrip", |b| {
        b.iter(|| base32::decode(&base32::encode(-1234567, 1)).unwrap());
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Adjacency benchmarks
// ---------------------------------------------------------------------------

fn bench_adjacent(c: &mut Criterion) {
    let mut group = c.benchmark_group("adjacent");

    group.bench_function("right_interior", |b| {
        b.iter(|| adjacent_hash("dqcjqcp84c6e", Direction::Right).unwrap());
    });

    // Every character is on the border, so the walk recurses to the root.
    group.bench_function("bottom_south_pole", |b| {
        b.iter(|| adjacent_hash("h00000000000", Direction::Bottom).unwrap());
    });

    group.bench_function("neighbours_12_chars", |b| {
        b.iter(|| neighbours("dqcjqcp84c6e").unwrap());
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Coverage benchmarks
// ---------------------------------------------------------------------------

fn bench_coverage(c: &mut Criterion) {
    let mut group = c.benchmark_group("coverage");

    for &length in &[3usize, 4, 5] {
        group.bench_with_input(BenchmarkId::new("box", length), &length, |b, &length| {
            b.iter(|| cover_bounding_box_longs(BOX.0, BOX.1, BOX.2, BOX.3, length).unwrap());
        });
    }

    group.bench_function("optimal", |b| {
        b.iter(|| cover_bounding_box_optimal(BOX.0, BOX.1, BOX.2, BOX.3).unwrap());
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Criterion harness
// ---------------------------------------------------------------------------

criterion_group!(
    benches,
    bench_encode,
    bench_encode_batch,
    bench_decode,
    bench_base32,
    bench_adjacent,
    bench_coverage,
);
criterion_main!(benches);
