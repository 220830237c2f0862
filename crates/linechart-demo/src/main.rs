// File: crates/linechart-demo/src/main.rs
// Summary: Demo host: mounts the animated line chart, steps it at a fixed frame rate and writes PNG frames.

mod data;

use anyhow::{bail, Context, Result};
use linechart_core::types::WIDTH;
use linechart_core::{LayoutConfig, LineChart, RenderOptions, SkiaRenderer};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Hard stop for the frame loop in case the chart never settles.
const MAX_ANIMATION: Duration = Duration::from_secs(10);

struct Args {
    data: Option<PathBuf>,
    config: Option<PathBuf>,
    width: f32,
    fps: u32,
    out: PathBuf,
    seed: u64,
    labels: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            data: None,
            config: None,
            width: WIDTH,
            fps: 30,
            out: PathBuf::from("target/out/frames"),
            seed: 0x5eed,
            labels: true,
        }
    }
}

fn usage() -> &'static str {
    "usage: linechart-demo [--data FILE.csv] [--config FILE.toml] [--width PX] [--fps N] [--out DIR] [--seed N] [--no-labels]"
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    while let Some(flag) = it.next() {
        let mut value = |name: &str| it.next().with_context(|| format!("{name} needs a value\n{}", usage()));
        match flag.as_str() {
            "--data" => args.data = Some(PathBuf::from(value("--data")?)),
            "--config" => args.config = Some(PathBuf::from(value("--config")?)),
            "--width" => args.width = value("--width")?.parse().context("--width expects pixels")?,
            "--fps" => args.fps = value("--fps")?.parse().context("--fps expects an integer")?,
            "--out" => args.out = PathBuf::from(value("--out")?),
            "--seed" => args.seed = value("--seed")?.parse().context("--seed expects an integer")?,
            "--no-labels" => args.labels = false,
            "-h" | "--help" => {
                println!("{}", usage());
                std::process::exit(0);
            }
            other => bail!("unknown argument {other:?}\n{}", usage()),
        }
    }
    if args.fps == 0 {
        bail!("--fps must be positive");
    }
    Ok(args)
}

fn load_config(path: &Path) -> Result<LayoutConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = parse_args(std::env::args().skip(1))?;

    let series = match &args.data {
        Some(path) => data::load_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => data::sample_months(args.seed),
    };
    info!("Loaded {} points", series.len());
    for p in &series {
        info!("  {:>6} {}", p.label.as_deref().unwrap_or("-"), p.value);
    }

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => LayoutConfig::default(),
    };

    let mut chart = LineChart::mount(series, config, args.width, Duration::ZERO).context("cannot lay out chart")?;
    info!("Path: {}", chart.geometry().path);

    let renderer = SkiaRenderer::new();
    let opts = RenderOptions { draw_labels: args.labels, ..RenderOptions::default() };
    let step = Duration::from_secs(1) / args.fps;
    std::fs::create_dir_all(&args.out).with_context(|| format!("creating {}", args.out.display()))?;

    let mut now = Duration::ZERO;
    let mut index = 0usize;
    loop {
        let frame = chart.render_frame(&renderer, &opts, now)?;
        let out = args.out.join(format!("frame_{index:04}.png"));
        frame.write_png(&out).with_context(|| format!("writing {}", out.display()))?;
        index += 1;

        if chart.is_settled() {
            break;
        }
        if now >= MAX_ANIMATION {
            warn!("animation still running after {MAX_ANIMATION:?}; stopping");
            break;
        }
        now += step;
    }

    let state = chart.unmount();
    info!("Wrote {index} frames to {} ({:.2}s of animation)", args.out.display(), now.as_secs_f32());
    if let Some(len) = state.path_length {
        info!("Line length {len:.1}px");
    }
    Ok(())
}
