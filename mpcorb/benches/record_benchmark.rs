use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use mpcorb::{derived, fields, Decode, RecordDecoder, Records};

const CERES: &str = "00001    3.34  0.15 K2555 188.70269   73.27343   80.25221   10.58780  0.0794013  0.21424651   2.7660512  0 E2024-V47  7330 125 1801-2024 0.80 M-v 30k MPCLINUX   0000 (1) Ceres                   20241101 2460600.26914 A899 OF  1943 XB";
const PROVISIONAL: &str = "K14U00A  18.1  0.15 K14AV 343.26524   40.43672  209.50614    5.26843  0.4156830  0.45210818   1.6958432  9 MPO332109    11   1   12 days 0.38 M-v 38h MPCW       0804 2014 UA                     20141101";

/// Benchmark individual record decoding
fn bench_records(c: &mut Criterion) {
    c.bench_function("numbered", |b| {
        b.iter(|| RecordDecoder.decode(black_box(CERES)))
    });

    c.bench_function("provisional", |b| {
        b.iter(|| RecordDecoder.decode(black_box(PROVISIONAL)))
    });
}

/// Benchmark the packed field decoders and derived elements
fn bench_fields(c: &mut Criterion) {
    c.bench_function("unpack designation", |b| {
        b.iter(|| fields::unpack_designation(black_box("K19JA3Q")))
    });

    c.bench_function("unpack epoch", |b| {
        b.iter(|| fields::unpack_epoch(black_box("K14AV")))
    });

    c.bench_function("apsides", |b| {
        b.iter(|| derived::apsides(black_box(2.7660512), black_box(0.0794013)))
    });
}

/// Benchmark decoding a synthetic catalogue
fn bench_catalogue(c: &mut Criterion) {
    let mut data = "header\n".repeat(mpcorb::HEADER_LINES);
    for _ in 0..5_000 {
        data.push_str(CERES);
        data.push('\n');
        data.push_str(PROVISIONAL);
        data.push('\n');
    }

    let mut group = c.benchmark_group("catalogue");

    // Tell Criterion the throughput for MB/s measurement
    group.throughput(Throughput::Bytes(data.len() as u64));

    // Benchmark: Just iterate over lines (baseline)
    group.bench_function("baseline", |b| {
        b.iter(|| black_box(Records::new(&data).count()))
    });

    group.bench_function("decode", |b| {
        b.iter(|| {
            let count = Records::new(&data)
                .filter_map(|line| RecordDecoder.decode(line).ok())
                .count();
            black_box(count)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_records, bench_fields, bench_catalogue);
criterion_main!(benches);
