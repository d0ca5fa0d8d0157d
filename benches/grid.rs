use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use grid_voronoi::{random_points, Extent, GridStrategy, LabelGrid, SampleGrid};
use std::hint::black_box;

const SITE_COUNTS: [usize; 4] = [4, 16, 64, 256];
const GRID_SIZE: usize = 256;

fn strategies() -> Vec<GridStrategy> {
    vec![
        GridStrategy::Scalar,
        GridStrategy::Batched,
        #[cfg(feature = "spatial-index")]
        GridStrategy::Indexed,
    ]
}

fn benchmark_strategies(c: &mut Criterion) {
    let extent = Extent::new(0.0, (GRID_SIZE - 1) as f64, 0.0, (GRID_SIZE - 1) as f64).unwrap();
    let sample = SampleGrid::canvas(GRID_SIZE, GRID_SIZE).unwrap();

    let mut group = c.benchmark_group(format!("label_grid_{}", GRID_SIZE));
    group.sample_size(20);

    for &count in &SITE_COUNTS {
        let sites = random_points(count, &extent, 42).unwrap();

        for strategy in strategies() {
            group.bench_with_input(BenchmarkId::new(strategy.name(), count), &sites, |b, sites| {
                b.iter(|| LabelGrid::generate(black_box(sites), &sample, strategy))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_strategies);
criterion_main!(benches);
