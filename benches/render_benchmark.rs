use criterion::{Criterion, black_box, criterion_group, criterion_main};

use fitcheck::internal::catalog::STUDIO_CATALOG;
use fitcheck::internal::export::render_cards;
use fitcheck::internal::sampler::{sample_without_replacement, sampling_rng};
use fitcheck::internal::ui::view::wrap_card_description;

fn benchmark_render_cards(c: &mut Criterion) {
    c.bench_function("render_cards full catalog", |b| {
        b.iter(|| render_cards(black_box(&STUDIO_CATALOG)))
    });
}

fn benchmark_sampling(c: &mut Criterion) {
    c.bench_function("sample 4 of 6", |b| {
        let mut rng = sampling_rng(Some(7));
        b.iter(|| sample_without_replacement(black_box(&STUDIO_CATALOG), black_box(4), &mut rng))
    });
}

fn benchmark_wrap_description(c: &mut Criterion) {
    let description = &STUDIO_CATALOG[0].description;

    c.bench_function("wrap_card_description narrow", |b| {
        b.iter(|| wrap_card_description(black_box(description), black_box(40)))
    });

    c.bench_function("wrap_card_description wide", |b| {
        b.iter(|| wrap_card_description(black_box(description), black_box(120)))
    });
}

criterion_group!(
    benches,
    benchmark_render_cards,
    benchmark_sampling,
    benchmark_wrap_description
);
criterion_main!(benches);
