//! Criterion benchmarks for the Brillouin-zone pipeline.
//! Focus sizes: grid range R in {2, 4, 8, 16} ((2R+1)² samples).
//! Results: by default under target/criterion.

use bzone::lattice::{compute_lattice, LatticeParameters};
use bzone::sample::sample_grid;
use bzone::voronoi::VoronoiDiagram;
use bzone::{cell::build_wigner_seitz_cell, compute_with_cfg, BzCfg, CellMethod};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_bz(c: &mut Criterion) {
    let params = LatticeParameters::new(1.3, 0.8, 72.0);
    let lattice = compute_lattice(&params, 1e-8).unwrap();
    let mut group = c.benchmark_group("bz");
    for &r in &[2u32, 4, 8, 16] {
        let cloud = sample_grid(lattice.reciprocal.b1, lattice.reciprocal.b2, r);

        group.bench_with_input(BenchmarkId::new("voronoi_diagram", r), &cloud, |b, cloud| {
            b.iter(|| VoronoiDiagram::build(cloud.as_slice(), 1e-9).unwrap())
        });

        for method in [CellMethod::Voronoi, CellMethod::Bisector] {
            let cfg = BzCfg::default().with_grid_range(r).with_method(method);
            group.bench_with_input(
                BenchmarkId::new(format!("cell_{method:?}"), r),
                &cloud,
                |b, cloud| b.iter(|| build_wigner_seitz_cell(cloud.as_slice(), &cfg).unwrap()),
            );
        }

        let cfg = BzCfg::default().with_grid_range(r);
        group.bench_with_input(BenchmarkId::new("pipeline", r), &cfg, |b, cfg| {
            b.iter(|| compute_with_cfg(&params, cfg).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_bz);
criterion_main!(benches);
