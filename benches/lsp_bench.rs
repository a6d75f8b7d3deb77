//! Criterion benchmarks for u-lsp aggregation and tree evaluation.
//!
//! Uses random scores and balanced synthetic trees to measure operator
//! and evaluation overhead.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_lsp::aggregation::{ugcd, AndnessLevel, PartialAbsorption};
use u_lsp::criterion::ContinuousCriterion;
use u_lsp::tree::{AggregationTree, EvalConfig, Inputs, NodeId, TreeBuilder};

fn random_scores(rng: &mut StdRng, n: usize) -> (Vec<f64>, Vec<f64>) {
    let scores = (0..n).map(|_| rng.random_range(0.0..=1.0)).collect();
    let raw: Vec<f64> = (0..n).map(|_| rng.random_range(0.1..1.0)).collect();
    let sum: f64 = raw.iter().sum();
    (scores, raw.into_iter().map(|w| w / sum).collect())
}

/// Complete tree with `fanout` children per node and `depth` levels of
/// aggregators above the leaves.
fn balanced_tree(depth: usize, fanout: usize) -> (AggregationTree, Vec<String>) {
    fn grow(
        builder: &mut TreeBuilder,
        parent: NodeId,
        depth: usize,
        fanout: usize,
        names: &mut Vec<String>,
    ) {
        let weight = 1.0 / fanout as f64;
        for _ in 0..fanout {
            if depth == 1 {
                let name = format!("c{}", names.len());
                let scale =
                    ContinuousCriterion::new(name.as_str(), vec![(0.0, 0.0), (1.0, 1.0)]).unwrap();
                builder.attach_criterion(parent, scale, weight).unwrap();
                names.push(name);
            } else {
                let child = builder
                    .attach_aggregator(parent, AndnessLevel::MediumHardPartialConjunction, weight, "group")
                    .unwrap();
                grow(builder, child, depth - 1, fanout, names);
            }
        }
    }

    let mut builder = TreeBuilder::new("1", "root", AndnessLevel::Neutrality);
    let root = builder.root();
    let mut names = Vec::new();
    grow(&mut builder, root, depth, fanout, &mut names);
    (builder.build().unwrap(), names)
}

fn bench_ugcd(c: &mut Criterion) {
    let mut group = c.benchmark_group("ugcd");
    let mut rng = StdRng::seed_from_u64(42);
    let (scores, weights) = random_scores(&mut rng, 16);

    for level in [
        AndnessLevel::FullDisjunction,
        AndnessLevel::MediumSoftPartialDisjunction,
        AndnessLevel::Neutrality,
        AndnessLevel::MediumSoftPartialConjunction,
        AndnessLevel::HighHardPartialConjunction,
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(level.symbol()),
            &level.andness(),
            |b, &alpha| b.iter(|| ugcd(black_box(alpha), &scores, &weights)),
        );
    }
    group.finish();
}

fn bench_absorption(c: &mut Criterion) {
    let cpa = PartialAbsorption::conjunctive(0.1, 0.2).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let pairs: Vec<(f64, f64)> = (0..256)
        .map(|_| (rng.random_range(0.0..=1.0), rng.random_range(0.0..=1.0)))
        .collect();
    c.bench_function("cpa_256", |b| {
        b.iter(|| {
            pairs
                .iter()
                .map(|&(x, y)| cpa.evaluate(x, y).unwrap_or(0.0))
                .sum::<f64>()
        })
    });
}

fn bench_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_evaluate");
    group.sample_size(20);
    let mut rng = StdRng::seed_from_u64(42);

    for depth in [2, 3, 4] {
        let (tree, names) = balanced_tree(depth, 4);
        // One input in five is left out to exercise the tolerance policy.
        let mut inputs = Inputs::new();
        for name in &names {
            if rng.random_range(0..5) != 0 {
                inputs.insert(name.clone(), rng.random_range(0.0f64..=1.0).into());
            }
        }
        let config = EvalConfig::default();
        group.bench_with_input(BenchmarkId::from_parameter(depth), &inputs, |b, inputs| {
            b.iter(|| tree.evaluate_with(black_box(inputs), &config))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ugcd, bench_absorption, bench_tree);
criterion_main!(benches);
