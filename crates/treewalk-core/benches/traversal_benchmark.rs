//! Traversal and frame-capture benchmarks.
//!
//! Run with: `cargo bench -p treewalk-core --bench traversal_benchmark`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use treewalk_core::{Algorithm, Frame, Layout, NodeId, TraversalEngine, Tree, TreeCatalog, TreeSpec};

/// Complete tree with the given branching factor and depth.
fn complete_tree(branching: u64, depth: u32) -> Tree {
    let mut spec = TreeSpec::new(1);
    let mut next: NodeId = 2;
    let mut level = vec![1];
    for _ in 0..depth {
        let mut below = Vec::new();
        for parent in level {
            let children: Vec<NodeId> = (next..next + branching).collect();
            next += branching;
            below.extend_from_slice(&children);
            spec = spec.with_node(parent, children);
        }
        level = below;
    }
    Tree::from_spec(&spec).expect("complete tree is valid")
}

fn reference_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("reference_tree_run");
    for algorithm in Algorithm::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(algorithm),
            &algorithm,
            |b, &algorithm| {
                let mut engine = TraversalEngine::new(algorithm);
                b.iter(|| {
                    engine.restart();
                    black_box(engine.run_to_completion().len())
                });
            },
        );
    }
    group.finish();
}

fn wide_tree_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide_tree_run");
    for depth in [3u32, 5] {
        let tree = complete_tree(4, depth);
        let catalog = TreeCatalog::new(tree.clone(), tree);
        for algorithm in Algorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.label(), depth),
                &catalog,
                |b, catalog| {
                    let mut engine = TraversalEngine::with_catalog(catalog.clone(), algorithm);
                    b.iter(|| {
                        engine.restart();
                        black_box(engine.run_to_completion().len())
                    });
                },
            );
        }
    }
    group.finish();
}

fn frame_capture(c: &mut Criterion) {
    let mut engine = TraversalEngine::new(Algorithm::Bfs);
    let layout = Layout::compute(engine.tree());
    engine.start();
    for _ in 0..5 {
        engine.step();
    }

    c.bench_function("frame_capture_bfs_mid_run", |b| {
        b.iter(|| black_box(Frame::capture(&engine, &layout)));
    });
}

criterion_group!(benches, reference_runs, wide_tree_runs, frame_capture);
criterion_main!(benches);
