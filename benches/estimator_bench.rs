// ABOUTME: Criterion benchmarks for the biological-age scoring models
// ABOUTME: Measures single-model estimation and combined assessment throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Criterion benchmarks for the biological-age estimation engine.
//!
//! Both models are constant-time over five fixed-size arithmetic steps;
//! these benches guard against accidental regressions (allocation in the
//! hot path, reference-table indirection).

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use bioage::{BioAgeAlgorithm, BioAgeAssessment, BiomarkerPanel};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn typical_panel() -> BiomarkerPanel {
    BiomarkerPanel {
        chronological_age: 47.0,
        glucose: 104.0,
        hdl: 48.0,
        ldl: 131.0,
        triglycerides: 164.0,
        crp: 2.4,
    }
}

fn bench_single_models(c: &mut Criterion) {
    let panel = typical_panel();

    c.bench_function("metabolic_score_estimate", |b| {
        b.iter(|| BioAgeAlgorithm::MetabolicScore.estimate(black_box(&panel)));
    });

    c.bench_function("phenoage_estimate", |b| {
        b.iter(|| BioAgeAlgorithm::PhenoAge.estimate(black_box(&panel)));
    });
}

fn bench_assessment(c: &mut Criterion) {
    let panel = typical_panel();

    c.bench_function("bioage_assessment_from_panel", |b| {
        b.iter(|| BioAgeAssessment::from_panel(black_box(&panel)));
    });
}

criterion_group!(benches, bench_single_models, bench_assessment);
criterion_main!(benches);
