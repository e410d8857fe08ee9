#[macro_use]
extern crate criterion;

use bimerkle::{Algorithm, MerkleNode};
use criterion::{BenchmarkId, Criterion};

fn leaf_from_u32(i: u32, alg: Algorithm) -> MerkleNode {
    MerkleNode::leaf(Some(i.to_le_bytes().as_slice()), alg)
}

fn build_tree(count: u32, alg: Algorithm) -> MerkleNode {
    let mut level: Vec<MerkleNode> = (0..count).map(|i| leaf_from_u32(i, alg)).collect();
    while level.len() > 1 {
        let mut next = Vec::with_capacity(level.len() / 2 + 1);
        let mut nodes = level.into_iter();
        while let Some(left) = nodes.next() {
            match nodes.next() {
                Some(right) => next.push(MerkleNode::merged(alg, left, right)),
                None => next.push(left),
            }
        }
        level = next;
    }
    level.pop().unwrap_or_else(|| MerkleNode::new(alg))
}

fn bench(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("tree build");
        for alg in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new(alg.name(), 1024), &alg, |b, &alg| {
                b.iter(|| build_tree(1024, alg));
            });
        }
    }

    c.bench_function("height 4096 leaves", |b| {
        let tree = build_tree(4096, Algorithm::Sha256);
        b.iter(|| tree.height());
    });

    c.bench_function("visit 4096 leaves", |b| {
        let tree = build_tree(4096, Algorithm::Sha256);
        b.iter(|| {
            let mut leaves = 0usize;
            tree.visit(|node| leaves += usize::from(node.is_leaf()));
            leaves
        });
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
