//! Request pipeline benchmarks.

use counterframe_protocol::State;
use counterframe_server::FrameRequest;
use counterframe_testkit::{fixture_handler, token_for};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_handle(c: &mut Criterion) {
    let mut group = c.benchmark_group("handle");
    let handler = fixture_handler();

    let fresh = FrameRequest::new(Some(1), None);
    group.bench_function("first_interaction", |b| {
        b.iter(|| black_box(handler.handle(black_box(&fresh)).unwrap()));
    });

    let resumed = FrameRequest::new(Some(2), Some(token_for(&State::new(5, 7, 2, 9))));
    group.bench_function("decrement", |b| {
        b.iter(|| black_box(handler.handle(black_box(&resumed)).unwrap()));
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let handler = fixture_handler();
    let response = handler.handle(&FrameRequest::new(Some(1), None)).unwrap();

    c.bench_function("render_html", |b| {
        b.iter(|| black_box(response.render_html()));
    });
}

fn bench_parse(c: &mut Criterion) {
    let body = counterframe_testkit::frame_body(Some(2), Some(&token_for(&State::new(5, 7, 2, 9))));

    c.bench_function("parse_body", |b| {
        b.iter(|| black_box(FrameRequest::from_body(black_box(body.as_bytes())).unwrap()));
    });
}

criterion_group!(benches, bench_handle, bench_render, bench_parse);
criterion_main!(benches);
