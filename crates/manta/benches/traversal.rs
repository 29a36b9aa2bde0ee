use criterion::{Criterion, criterion_group, criterion_main};
use manta::alg;
use manta::{EdgeKind, Graph};
use std::hint::black_box;

fn ring(n: usize) -> Graph<usize> {
    let mut g: Graph<usize> = Graph::with_capacity(n);
    for i in 0..n {
        g.add_edge(i, (i + 1) % n, EdgeKind::Undirected);
    }
    g
}

fn lattice(side: usize) -> Graph<usize> {
    let mut g: Graph<usize> = Graph::with_capacity(side * side);
    for row in 0..side {
        for col in 0..side {
            let v = row * side + col;
            if col + 1 < side {
                g.add_edge(v, v + 1, EdgeKind::Undirected);
            }
            if row + 1 < side {
                g.add_edge(v, v + side, EdgeKind::Undirected);
            }
        }
    }
    g
}

fn bench_traversal(c: &mut Criterion) {
    let ring = ring(512);
    c.bench_function("bfs_ring_512", |b| {
        b.iter(|| alg::bfs(black_box(&ring), &0))
    });
    c.bench_function("dfs_ring_512", |b| {
        b.iter(|| alg::dfs(black_box(&ring), &0))
    });
}

fn bench_cycles(c: &mut Criterion) {
    let ring = ring(512);
    c.bench_function("is_cyclic_undirected_ring_512", |b| {
        b.iter(|| alg::is_cyclic_undirected(black_box(&ring)))
    });

    let lattice = lattice(12);
    c.bench_function("find_simple_cycles_lattice_12", |b| {
        b.iter(|| alg::find_simple_cycles(black_box(&lattice)))
    });
}

criterion_group!(benches, bench_traversal, bench_cycles);
criterion_main!(benches);
