// File: crates/linechart-demo/src/data.rs
// Summary: Series sources for the demo: seeded monthly sample data and label,value CSV files.

use anyhow::{Context, Result};
use linechart_core::DataPoint;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

/// Labels and upper bounds of the random sample.
const SAMPLE: [(&str, f64); 6] = [
    ("Jan", 300.0),
    ("Feb", 440.0),
    ("Mar", 940.0),
    ("Apr", 140.0),
    ("May", 340.0),
    ("June", 480.0),
];

/// Six months of `round(rand * spread + 1)` values.
pub fn sample_months(seed: u64) -> Vec<DataPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    SAMPLE
        .iter()
        .map(|&(label, spread)| DataPoint::new(label, (rng.random::<f64>() * spread + 1.0).round()))
        .collect()
}

/// Load a CSV with a header row and `label,value` columns. Empty labels are
/// kept as unlabeled points.
pub fn load_csv(path: &Path) -> Result<Vec<DataPoint>> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_points(rdr)
}

fn read_points<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<DataPoint>> {
    let mut out = Vec::new();
    for (row, rec) in rdr.deserialize::<DataPoint>().enumerate() {
        // header is line 1
        out.push(rec.with_context(|| format!("bad record on line {}", row + 2))?);
    }
    Ok(out)
}
