// ABOUTME: Criterion benchmarks for the nutrition planner
// ABOUTME: Measures plan computation, batch throughput, and text/JSON rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the nutrition planner.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use slim_bites::form::{PlanForm, PlanSession};
use slim_bites::formatters::{format_plan, OutputFormat};
use slim_bites::intelligence::{NutritionPlanner, PlanOptions};
use slim_bites::models::{ActivityLevel, Gender, PlanInputs};

fn reference_inputs() -> PlanInputs {
    PlanInputs {
        weight_kg: 80.0,
        height_cm: 175.0,
        age_years: 30,
        gender: Gender::Male,
        activity_level: ActivityLevel::Moderate,
        desired_loss_kg: 5.0,
        duration_weeks: 10,
    }
}

/// Deterministic spread of inputs across the valid domain
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn generate_inputs(count: usize) -> Vec<PlanInputs> {
    (0..count)
        .map(|index| PlanInputs {
            weight_kg: 45.0 + ((index * 37) % 110) as f64,
            height_cm: 145.0 + ((index * 13) % 55) as f64,
            age_years: 18 + ((index * 7) % 60) as u32,
            gender: if index % 2 == 0 {
                Gender::Male
            } else {
                Gender::Female
            },
            activity_level: ActivityLevel::ALL[index % ActivityLevel::ALL.len()],
            desired_loss_kg: ((index * 3) % 20) as f64,
            duration_weeks: 1 + ((index * 5) % 24) as u32,
        })
        .collect()
}

fn bench_compute_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_plan");
    let planner = NutritionPlanner::default();
    let inputs = reference_inputs();

    for (name, options) in [
        ("simple", PlanOptions::simple()),
        ("detailed", PlanOptions::detailed()),
    ] {
        group.bench_with_input(
            BenchmarkId::new("reference", name),
            &options,
            |b, options| {
                b.iter(|| planner.compute(black_box(&inputs), *options));
            },
        );
    }

    group.finish();
}

#[allow(clippy::cast_possible_truncation)]
fn bench_batch_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let planner = NutritionPlanner::default();

    for count in [10, 100, 1000] {
        let batch = generate_inputs(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("simple", count), &batch, |b, batch| {
            b.iter(|| {
                batch
                    .iter()
                    .filter_map(|inputs| planner.compute(inputs, PlanOptions::simple()).ok())
                    .map(|plan| plan.daily_calories)
                    .sum::<i64>()
            });
        });
    }

    group.finish();
}

fn bench_form_session(c: &mut Criterion) {
    let planner = NutritionPlanner::default();
    let form = PlanForm {
        weight: "80".into(),
        height: "175".into(),
        age: "30".into(),
        desired_loss: "5".into(),
        duration: "10".into(),
        ..PlanForm::default()
    };

    c.bench_function("session_calculate", |b| {
        let mut session = PlanSession::with_form(form.clone(), PlanOptions::detailed());
        b.iter(|| session.calculate(black_box(&planner)).map(|plan| plan.daily_calories));
    });
}

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let planner = NutritionPlanner::default();
    let Ok(plan) = planner.compute(&reference_inputs(), PlanOptions::detailed()) else {
        return;
    };

    for format in [OutputFormat::Text, OutputFormat::Json] {
        group.bench_with_input(
            BenchmarkId::new("detailed", format.as_str()),
            &format,
            |b, format| {
                b.iter(|| format_plan(black_box(&plan), *format));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_plan,
    bench_batch_throughput,
    bench_form_session,
    bench_rendering,
);
criterion_main!(benches);
