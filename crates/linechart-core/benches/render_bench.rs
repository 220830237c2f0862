use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linechart_core::{DataPoint, LayoutConfig, LineChart, RenderOptions, SkiaRenderer};
use std::time::Duration;

fn build_chart(n: usize) -> LineChart {
    let data = (0..n)
        .map(|i| DataPoint::new(format!("{i}"), (i as f64 * 0.01).sin() * 10.0 + 12.0))
        .collect();
    let cfg = LayoutConfig { container_height: 500.0, ..LayoutConfig::default() };
    let mut chart = LineChart::mount(data, cfg, 800.0, Duration::ZERO).expect("mount");
    chart.advance(Duration::from_secs(3));
    chart
}

fn bench_render(c: &mut Criterion) {
    let renderer = SkiaRenderer::new();
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[12usize, 1_000usize] {
        group.bench_function(format!("points_{n}"), |b| {
            let chart = build_chart(n);
            b.iter(|| -> Result<()> {
                let frame = renderer.draw(&chart.scene(), &opts)?;
                black_box(frame.to_png_bytes()?);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
