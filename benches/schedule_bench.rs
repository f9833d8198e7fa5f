// ABOUTME: Criterion benchmarks for weekly schedule generation
// ABOUTME: Measures pool selection, adjustment, and the full generate pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the schedule engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pulsefit::intelligence::{
    PoolSelector, ScheduleAdjuster, ScheduleGenerator, SeededEntropy, TaskPoolCatalog,
};
use pulsefit::models::{
    BmiCategory, DiscoveryParameters, ExperienceLevel, FocusArea, Goal, Intensity,
};
use std::collections::HashSet;

fn params(days_per_week: u8) -> DiscoveryParameters {
    DiscoveryParameters {
        bmi_category: BmiCategory::Normal,
        goal: Goal::WeightLoss,
        intensity: Intensity::Medium,
        days_per_week,
        focus_area: FocusArea::Cardio,
        experience_level: ExperienceLevel::Beginner,
    }
}

fn bench_pool_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool_selection");
    let mut selector = PoolSelector::new(SeededEntropy::new(42));

    for excluded in [0_usize, 2, 8] {
        let exclude: HashSet<usize> = (0..excluded).collect();
        group.bench_with_input(
            BenchmarkId::new("select_index_of_8", excluded),
            &exclude,
            |b, exclude| {
                b.iter(|| selector.select_index(black_box(8), black_box(exclude)));
            },
        );
    }

    group.finish();
}

fn bench_adjustment(c: &mut Criterion) {
    let mut group = c.benchmark_group("adjustment");
    let adjuster = ScheduleAdjuster::default();
    let pool = &TaskPoolCatalog::builtin()
        .lookup(Goal::WeightLoss, Intensity::Medium)
        .pools()[0];

    for days in [4_u8, 6, 7] {
        let params = params(days);
        group.bench_with_input(BenchmarkId::new("adjust", days), &params, |b, params| {
            b.iter(|| adjuster.adjust(black_box(pool), black_box(params)));
        });
    }

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let mut generator = ScheduleGenerator::new(
        TaskPoolCatalog::builtin(),
        PoolSelector::new(SeededEntropy::new(7)),
        ScheduleAdjuster::default(),
    );
    let params = params(4);
    let previous: HashSet<usize> = [0].into_iter().collect();

    group.bench_function("weight_loss_medium_4_days", |b| {
        b.iter(|| generator.generate(black_box(&params), black_box(&previous)));
    });

    group.finish();
}

criterion_group!(benches, bench_pool_selection, bench_adjustment, bench_generate);
criterion_main!(benches);
