use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use arqconv::measures::{convert, to_csv, Unit};

fn benchmark(c: &mut Criterion) {
    c.bench_function("convert", |b| {
        b.iter(|| convert(black_box(123.45), black_box(Unit::Quilograma)))
    });

    c.bench_function("convert-and-serialize", |b| {
        b.iter(|| {
            let result = convert(black_box(123.45), black_box(Unit::Tonelada));
            to_csv(black_box(123.45), Unit::Tonelada, &result)
        })
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
