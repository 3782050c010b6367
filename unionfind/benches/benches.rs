use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use unionfind::UnionFind;

fn random_unions(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_unions");
    for n in [1_000usize, 100_000] {
        let mut rng = StdRng::seed_from_u64(42);
        let pairs = (0..n)
            .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
            .collect::<Vec<_>>();
        group.bench_with_input(BenchmarkId::from_parameter(n), &pairs, |b, pairs| {
            b.iter(|| {
                let mut uf = UnionFind::new(n);
                for &(x, y) in pairs {
                    uf.union(x, y).unwrap();
                }
                black_box(uf.count())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, random_unions);
criterion_main!(benches);
