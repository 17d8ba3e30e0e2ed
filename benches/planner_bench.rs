//! Planner pipeline benchmarks
//!
//! Run with: cargo bench --bench planner_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use learning_path::{
    ConceptCatalog, ConceptCategory, ConceptDefinition, LearnerProfile, LearningPlanner,
    LearningStyle, PlanRequest, PlannerConfig,
};

/// Layered catalog: each concept requires up to three concepts of the previous layer
fn layered_catalog(layers: usize, width: usize) -> ConceptCatalog {
    let mut definitions = Vec::with_capacity(layers * width);
    for layer in 0..layers {
        for i in 0..width {
            let prereqs: Vec<String> = if layer == 0 {
                Vec::new()
            } else {
                (0..3).map(|k| format!("l{}_{}", layer - 1, (i + k) % width)).collect()
            };
            definitions.push(
                ConceptDefinition::new(format!("l{}_{}", layer, i), ConceptCategory::Conceptual)
                    .with_prerequisites(prereqs)
                    .with_duration(60 + (i as u32 % 5) * 30),
            );
        }
    }
    ConceptCatalog::from_definitions(definitions).expect("layered catalog is valid")
}

fn bench_default_library(c: &mut Criterion) {
    let catalog = ConceptCatalog::with_defaults();
    let planner = LearningPlanner::with_default_config(&catalog);
    let profile =
        LearnerProfile::new(0.7, 25, LearningStyle::Visual).with_mastery("basic_arithmetic", 0.9);

    c.bench_function("plan_calculus_default_library", |b| {
        b.iter(|| black_box(planner.plan(&["calculus_basics", "thermodynamics"], &profile)));
    });
}

fn bench_catalog_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_layered");
    let profile = LearnerProfile::new(0.5, 45, LearningStyle::Auditory);

    for layers in [5, 20, 50].iter() {
        let catalog = layered_catalog(*layers, 20);
        let planner = LearningPlanner::with_default_config(&catalog);
        let target = format!("l{}_0", layers - 1);

        group.bench_with_input(BenchmarkId::from_parameter(layers), layers, |b, _| {
            b.iter(|| black_box(planner.plan(&[target.as_str()], &profile)));
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let catalog = layered_catalog(20, 20);
    let planner = LearningPlanner::new(&catalog, PlannerConfig::default());
    let requests: Vec<PlanRequest> = (0..256)
        .map(|i| {
            let profile = LearnerProfile::new((i % 10) as f32 / 10.0, 30, LearningStyle::Visual);
            PlanRequest::new([format!("l19_{}", i % 20)], profile)
        })
        .collect();

    c.bench_function("plan_many_256", |b| {
        b.iter(|| black_box(planner.plan_many(&requests)));
    });
}

criterion_group!(benches, bench_default_library, bench_catalog_depth, bench_batch);
criterion_main!(benches);
