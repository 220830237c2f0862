// File: crates/linechart-core/src/grid.rs
// Summary: Evenly spaced tick layout helpers.

/// `steps` evenly spaced values from `start` to `end` inclusive.
/// Callers guarantee `steps >= 2`; fewer yields just the endpoints.
/// The last value is exactly `end`, never `start + step * (steps - 1)`.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    let mut out: Vec<f64> = (0..steps).map(|i| start + step * i as f64).collect();
    if let Some(last) = out.last_mut() { *last = end; }
    out
}

/// Gap between consecutive ticks when `count` ticks span `extent` pixels.
#[inline]
pub fn tick_gap(extent: f32, count: usize) -> f32 {
    extent / (count.saturating_sub(1).max(1)) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_ends() {
        assert_eq!(linspace(0.0, 200.0, 3), vec![0.0, 100.0, 200.0]);
        assert_eq!(*linspace(0.0, 7.0, 4).last().unwrap(), 7.0);
    }

    #[test]
    fn tick_gap_divides_by_intervals() {
        assert_eq!(tick_gap(300.0, 4), 100.0);
    }
}
