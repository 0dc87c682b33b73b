use criterion::{Criterion, criterion_group, criterion_main};
use sphere_nav::{DEFAULT_TEMPLATE, GeoPoint, Template};
use std::hint::black_box;

fn format_benchmark(c: &mut Criterion) {
    let point = GeoPoint::new(-33.9461, 151.1772);
    let template = Template::new(DEFAULT_TEMPLATE).unwrap();
    let text = template.render(&point);

    c.bench_function("render", |b| {
        b.iter(|| template.render(black_box(&point)));
    });

    c.bench_function("parse", |b| {
        b.iter(|| template.parse(black_box(&text)));
    });

    c.bench_function("compile_and_parse", |b| {
        b.iter(|| GeoPoint::parse(black_box(&text), DEFAULT_TEMPLATE));
    });
}

criterion_group!(benches, format_benchmark);
criterion_main!(benches);
