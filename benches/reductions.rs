use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use npreduce::instance::{Cnf, Graph};
use npreduce::reductions::{coloring_to_sat, sat_to_three_sat, three_sat_to_coloring};

// Ring of `n` nodes with chords to the node two steps ahead
fn ring_graph(n: i64) -> Graph {
    let edges = (1..=n)
        .flat_map(|i| [(i, i % n + 1), (i, (i + 1) % n + 1)])
        .collect::<Vec<_>>();
    Graph::from_edges(&edges).unwrap()
}

// Deterministic wide clauses cycling through `vars` variables with alternating polarity
fn wide_formula(vars: i64, clauses: i64, width: i64) -> Cnf {
    let clauses = (0..clauses)
        .map(|c| {
            (0..width)
                .map(|i| {
                    let var = (c * 7 + i * 3) % vars + 1;
                    if (c + i) % 2 == 0 {
                        var
                    } else {
                        -var
                    }
                })
                .collect()
        })
        .collect();
    Cnf::from_clauses(clauses).unwrap()
}

fn benchmark_coloring_to_sat(c: &mut Criterion) {
    let mut group = c.benchmark_group("coloring_to_sat");
    for size in [100, 1000, 10000] {
        let graph = ring_graph(size);
        group.throughput(Throughput::Elements(graph.edges().len() as u64));
        group.bench_with_input(BenchmarkId::new("ring", size), &graph, |b, graph| {
            b.iter(|| coloring_to_sat::reduce(black_box(graph), 4).unwrap())
        });
    }
    group.finish();
}

fn benchmark_sat_to_three_sat(c: &mut Criterion) {
    let mut group = c.benchmark_group("sat_to_three_sat");
    for width in [4, 16, 64] {
        let cnf = wide_formula(500, 2000, width);
        group.throughput(Throughput::Elements(cnf.num_clauses() as u64));
        group.bench_with_input(BenchmarkId::new("width", width), &cnf, |b, cnf| {
            b.iter(|| sat_to_three_sat::reduce(black_box(cnf)).unwrap())
        });
    }
    group.finish();
}

fn benchmark_three_sat_to_coloring(c: &mut Criterion) {
    let mut group = c.benchmark_group("three_sat_to_coloring");
    for clauses in [100, 1000, 10000] {
        let cnf = wide_formula(clauses / 4 + 3, clauses, 3);
        group.throughput(Throughput::Elements(cnf.num_clauses() as u64));
        group.bench_with_input(BenchmarkId::new("clauses", clauses), &cnf, |b, cnf| {
            b.iter(|| three_sat_to_coloring::reduce(black_box(cnf)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_coloring_to_sat,
    benchmark_sat_to_three_sat,
    benchmark_three_sat_to_coloring
);
criterion_main!(benches);
