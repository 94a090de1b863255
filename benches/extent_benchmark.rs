use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linemark::batch::highlight_pairs;
use linemark::renderer::LineLevel;
use linemark::{compute_extent, LineRenderer, MbString};

fn generate_pairs(lines: usize, changed_per_100_lines: usize) -> Vec<(String, String)> {
    (0..lines)
        .map(|i| {
            let old = format!("let var_{} = compute({}, \"value\");", i, i);
            if i % (100 / changed_per_100_lines) == 0 {
                (old, format!("let var_{} = compute({}, \"other\");", i, i + 1))
            } else {
                (old.clone(), old)
            }
        })
        .collect()
}

fn benchmark_compute_extent(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_extent");

    for len in [80, 1_000, 10_000].iter() {
        let old = MbString::from(format!("{}a{}", "x".repeat(*len / 2), "y".repeat(*len / 2)));
        let new = MbString::from(format!("{}b{}", "x".repeat(*len / 2), "y".repeat(*len / 2)));

        group.bench_with_input(BenchmarkId::from_parameter(len), &(old, new), |b, (old, new)| {
            b.iter(|| compute_extent(black_box(old), black_box(new)));
        });
    }

    group.finish();
}

fn benchmark_render(c: &mut Criterion) {
    let renderer = LineLevel::default();
    let mut group = c.benchmark_group("render");

    for size in [100, 1_000, 10_000].iter() {
        let pairs = generate_pairs(*size, 10);

        group.bench_with_input(BenchmarkId::new("sequential", size), &pairs, |b, pairs| {
            b.iter(|| {
                pairs
                    .iter()
                    .map(|(old, new)| renderer.render_pair(black_box(old), black_box(new)))
                    .collect::<Vec<_>>()
            });
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &pairs, |b, pairs| {
            b.iter(|| highlight_pairs(&renderer, black_box(pairs)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_compute_extent, benchmark_render);
criterion_main!(benches);
