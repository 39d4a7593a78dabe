use criterion::{black_box, Criterion};
use std::time::Instant;

use bingo_sheets::rendering::render_png;
use bingo_sheets::rng::card_rng;
use bingo_sheets::{generate, GridSize, RenderStyle, WordPool};

// Consolidated benchmark suite for bingo-sheets. Run with:
//    cargo bench

fn word_pool(n: usize) -> WordPool {
    WordPool::new((0..n).map(|i| format!("word-{}", i)).collect())
}

/// Bench: sample 30 classic 5x5 cards
fn bench_sampling(c: &mut Criterion) {
    let pool = word_pool(200);
    let mut rng = card_rng(Some(1));
    c.bench_function("generate_30_cards_5x5", |b| {
        b.iter(|| generate(GridSize::new(5, 5), black_box(30), &pool, &mut rng).unwrap())
    });
}

/// Bench: layout + paint + PNG encode of one card at the default canvas size
fn bench_render_png(c: &mut Criterion) {
    let pool = word_pool(50);
    let grid = generate(GridSize::new(5, 5), 1, &pool, &mut card_rng(Some(2)))
        .unwrap()
        .remove(0);
    let style = RenderStyle::default();
    c.bench_function("render_png_default_style", |b| {
        b.iter(|| render_png(black_box(&grid), &style).unwrap())
    });
}

/// Micro-benchmark: per-card render latency percentiles (p50/p95/p99).
///
/// Configure iterations with `BENCH_ITERATIONS`.
fn bench_render_percentiles() {
    let pool = word_pool(50);
    let iterations: usize = std::env::var("BENCH_ITERATIONS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(20);
    let grids = generate(GridSize::new(5, 5), iterations, &pool, &mut card_rng(Some(3))).unwrap();
    let style = RenderStyle::default();

    let mut samples = Vec::with_capacity(iterations);
    for grid in &grids {
        let t0 = Instant::now();
        render_png(grid, &style).expect("render failed");
        samples.push(t0.elapsed().as_millis() as u64);
    }

    samples.sort_unstable();
    println!(
        "[render_percentiles] p50={}ms p95={}ms p99={}ms",
        percentile(&samples, 50.0),
        percentile(&samples, 95.0),
        percentile(&samples, 99.0)
    );
}

fn percentile(samples: &[u64], pct: f64) -> u64 {
    if samples.is_empty() {
        return 0;
    }
    let n = samples.len();
    let rank = ((pct / 100.0) * (n as f64)).ceil() as usize;
    samples[rank.saturating_sub(1).min(n - 1)]
}

// Run benches manually so percentile output lands on the console
fn main() {
    let mut c = Criterion::default();

    bench_sampling(&mut c);
    bench_render_png(&mut c);

    c.final_summary();

    bench_render_percentiles();
}
