// File: crates/linechart-core/tests/animation.rs
// Purpose: Animation driver schedule, path reveal gating/restarts, idempotence and disposal.

use std::time::Duration;

use linechart_core::animation::{AXIS_DELAY, PATH_DELAY, REMEASURE_TOLERANCE, REVEAL_DURATION};
use linechart_core::{
    resolve, AnimationDriver, Channel, DataPoint, LayoutConfig, LineChart, RenderEvent, RenderOptions, RevealTargets,
    SkiaRenderer,
};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn data() -> Vec<DataPoint> {
    vec![
        DataPoint::new("Jan", 100.0),
        DataPoint::new("Feb", 50.0),
        DataPoint::new("Mar", 200.0),
    ]
}

fn driver() -> (AnimationDriver, RevealTargets) {
    let cfg = LayoutConfig::default();
    let g = resolve(&data(), &cfg, 360.0).unwrap();
    let targets = RevealTargets::new(&g, &cfg);
    (AnimationDriver::new(targets), targets)
}

#[test]
fn initial_state_is_hidden() {
    let (d, t) = driver();
    let s = d.state();
    assert_eq!(s.x_axis_extent, t.x_axis.0);
    assert_eq!(s.y_axis_extent, t.y_axis.0);
    assert_eq!(s.marker_radius, 0.0);
    assert_eq!(s.label_opacity, 0.0);
    assert_eq!(s.path_opacity, 0.0);
    assert_eq!(s.path_length, None);
    assert!(!d.is_animating());
    assert!(!d.is_started());
    assert_eq!(d.targets(), &t);
}

#[test]
fn axes_wait_for_their_delay() {
    let (mut d, t) = driver();
    d.start(ms(0));
    assert!(d.is_started());
    d.tick(ms(400));
    assert_eq!(d.state().x_axis_extent, t.x_axis.0);
    assert_eq!(d.state().y_axis_extent, t.y_axis.0);
    // markers and labels have no delay
    assert!(d.state().marker_radius > 0.0);
    assert!(d.state().label_opacity > 0.0);

    d.tick(AXIS_DELAY + REVEAL_DURATION / 2);
    let mid_x = d.state().x_axis_extent;
    assert!(mid_x > t.x_axis.0 && mid_x < t.x_axis.1);
    let mid_y = d.state().y_axis_extent;
    assert!(mid_y < t.y_axis.0 && mid_y > t.y_axis.1, "y-axis grows upward");
}

#[test]
fn mount_reveals_reach_their_targets() {
    let (mut d, t) = driver();
    d.start(ms(0));
    assert!(d.tick(ms(1000)));
    assert!(!d.tick(AXIS_DELAY + REVEAL_DURATION));
    let s = d.state();
    assert_eq!(s.x_axis_extent, t.x_axis.1);
    assert_eq!(s.y_axis_extent, t.y_axis.1);
    assert_eq!(s.marker_radius, 4.0);
    assert_eq!(s.label_opacity, 1.0);
    // the line stays hidden until measured
    assert_eq!(s.path_opacity, 0.0);
    assert_eq!(s.path_length, None);
}

#[test]
fn path_reveal_starts_at_length_and_decreases_to_zero() {
    let (mut d, _) = driver();
    d.start(ms(0));
    let l = 512.0;
    assert!(d.reveal_path(l, ms(16)));
    assert_eq!(d.state().path_length, Some(l));
    assert_eq!(d.state().path_dash_offset, l);

    let mut prev = l;
    let end = ms(16) + PATH_DELAY + REVEAL_DURATION;
    let mut now = ms(16);
    while now <= end {
        d.tick(now);
        let off = d.state().path_dash_offset;
        assert!(off <= prev + 1e-3, "offset grew at {now:?}: {prev} -> {off}");
        if now < ms(16) + PATH_DELAY {
            assert_eq!(off, l);
        }
        prev = off;
        now += ms(16);
    }
    d.tick(end);
    assert_eq!(d.state().path_dash_offset, 0.0);
    assert_eq!(d.state().path_opacity, 1.0);
}

#[test]
fn new_length_restarts_reveal() {
    let (mut d, _) = driver();
    d.start(ms(0));
    d.reveal_path(300.0, ms(0));
    d.tick(ms(3000));
    assert_eq!(d.state().path_dash_offset, 0.0);

    assert!(d.reveal_path(450.0, ms(3000)));
    assert_eq!(d.state().path_dash_offset, 450.0);
    assert_eq!(d.state().path_length, Some(450.0));
    d.tick(ms(3000) + PATH_DELAY);
    assert_eq!(d.state().path_dash_offset, 450.0);
    d.tick(ms(3000) + PATH_DELAY + REVEAL_DURATION);
    assert_eq!(d.state().path_dash_offset, 0.0);
}

#[test]
fn remeasurement_within_tolerance_is_ignored() {
    let (mut d, _) = driver();
    d.start(ms(0));
    assert!(d.reveal_path(300.0, ms(0)));
    d.tick(ms(1000));
    let before = d.state().path_dash_offset;
    assert!(!d.reveal_path(300.0 + REMEASURE_TOLERANCE * 0.5, ms(1000)));
    d.tick(ms(1000));
    assert_eq!(d.state().path_dash_offset, before);
    assert_eq!(d.state().path_length, Some(300.0));
}

#[test]
fn unusable_measurement_is_skipped() {
    let (mut d, _) = driver();
    d.start(ms(0));
    assert!(!d.reveal_path(0.0, ms(0)));
    assert!(!d.reveal_path(f32::NAN, ms(0)));
    assert_eq!(d.state().path_length, None);
}

#[test]
fn starting_twice_keeps_final_values() {
    let (mut once, _) = driver();
    once.start(ms(0));
    once.reveal_path(200.0, ms(0));
    once.tick(ms(5000));

    let (mut twice, _) = driver();
    twice.start(ms(0));
    twice.tick(ms(700));
    twice.start(ms(700));
    twice.reveal_path(200.0, ms(0));
    twice.tick(ms(5000));

    assert_eq!(once.state(), twice.state());
    assert_eq!(twice.state().marker_radius, 4.0);
    assert_eq!(twice.state().label_opacity, 1.0);
    assert_eq!(twice.state().path_opacity, 1.0);
    assert_eq!(twice.state().path_dash_offset, 0.0);
}

#[test]
fn dispose_cancels_and_freezes() {
    let (mut d, _) = driver();
    d.start(ms(0));
    d.tick(ms(300));
    let frozen = *d.state();
    d.dispose();
    assert!(d.is_disposed());
    assert!(!d.is_animating());
    assert!(!d.tick(ms(5000)));
    assert!(!d.reveal_path(100.0, ms(5000)));
    assert_eq!(*d.state(), frozen);
}

#[test]
fn finish_jumps_to_end_values() {
    let (mut d, t) = driver();
    d.start(ms(0));
    d.reveal_path(100.0, ms(0));
    d.finish();
    assert!(!d.is_animating());
    assert_eq!(d.state().x_axis_extent, t.x_axis.1);
    assert_eq!(d.state().path_dash_offset, 0.0);
    assert_eq!(d.state().path_opacity, 1.0);
}

#[test]
fn viewport_change_retargets_finished_axis() {
    let mut chart = LineChart::mount(data(), LayoutConfig::default(), 360.0, ms(0)).unwrap();
    chart.advance(ms(3000));
    assert_eq!(chart.state().x_axis_extent, 340.0);

    chart.set_viewport_width(420.0).unwrap();
    assert_eq!(chart.state().x_axis_extent, 400.0);
    assert_eq!(chart.geometry().x_axis.end.x, 400.0);
}

#[test]
fn chart_routes_measure_events_to_driver() {
    let mut chart = LineChart::mount(data(), LayoutConfig::default(), 360.0, ms(0)).unwrap();
    assert!(!chart.is_settled());
    assert!(chart.handle_event(RenderEvent::PathMeasured(250.0), ms(32)));
    assert!(!chart.handle_event(RenderEvent::PathMeasured(250.0), ms(48)));
    chart.advance(ms(32) + PATH_DELAY + REVEAL_DURATION);
    assert!(chart.is_settled());
    let last = chart.unmount();
    assert_eq!(last.path_dash_offset, 0.0);
}

#[test]
fn rejected_update_keeps_previous_geometry() {
    let mut chart = LineChart::mount(data(), LayoutConfig::default(), 360.0, ms(0)).unwrap();
    let before = chart.geometry().clone();
    assert!(chart.set_data(vec![DataPoint::new("only", 1.0)]).is_err());
    assert_eq!(chart.geometry(), &before);
    assert_eq!(chart.data().len(), 3);
}

#[test]
fn margin_change_during_axis_delay_moves_the_reveal_origin() {
    let mut chart = LineChart::mount(data(), LayoutConfig::default(), 360.0, ms(0)).unwrap();
    chart.advance(ms(100));
    assert_eq!(chart.state().x_axis_extent, 50.0);

    let cfg = LayoutConfig { margin_left: 80.0, ..LayoutConfig::default() };
    chart.set_config(cfg.clone()).unwrap();
    assert_eq!(chart.config(), &cfg);
    assert_eq!(chart.driver().targets().x_axis, (80.0, 340.0));

    let x = chart.geometry().x_axis;
    let within = |v: f32| v >= x.start.x && v <= x.end.x;
    // the very next scene already starts at the new origin
    assert_eq!(chart.state().get(Channel::XAxisExtent), 80.0);
    for t in [200, AXIS_DELAY.as_millis() as u64, 900, 1400, 2500] {
        chart.advance(ms(t));
        let v = chart.state().x_axis_extent;
        assert!(within(v), "x-axis extent {v} outside [{}, {}] at {t}ms", x.start.x, x.end.x);
    }
    assert_eq!(chart.state().x_axis_extent, x.end.x);
}

#[test]
fn height_change_mid_reveal_keeps_y_axis_on_its_segment() {
    let mut chart = LineChart::mount(data(), LayoutConfig::default(), 360.0, ms(0)).unwrap();
    chart.advance(AXIS_DELAY + REVEAL_DURATION / 2);
    chart.set_config(LayoutConfig { container_height: 300.0, ..LayoutConfig::default() }).unwrap();

    let y = chart.geometry().y_axis;
    let (low, high) = (y.end.y.min(y.start.y), y.end.y.max(y.start.y));
    for t in [AXIS_DELAY + REVEAL_DURATION / 2, ms(1400), ms(3000)] {
        chart.advance(t);
        let v = chart.state().get(Channel::YAxisExtent);
        assert!(v >= low && v <= high, "y-axis extent {v} outside [{low}, {high}]");
    }
    assert_eq!(chart.state().y_axis_extent, y.end.y);
}

#[test]
fn new_series_restarts_path_reveal_at_new_length() {
    let mut chart = LineChart::mount(data(), LayoutConfig::default(), 360.0, ms(0)).unwrap();
    let renderer = SkiaRenderer::new();
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let mut now = ms(0);
    while !chart.is_settled() {
        chart.render_frame(&renderer, &opts, now).expect("frame");
        now += ms(100);
        assert!(now < ms(10_000), "animation never settled");
    }
    let before = chart.state().path_length.expect("measured");
    assert_eq!(chart.state().path_dash_offset, 0.0);

    chart
        .set_data(vec![
            DataPoint::new("Jan", 10.0),
            DataPoint::new("Feb", 400.0),
            DataPoint::new("Mar", 5.0),
            DataPoint::new("Apr", 380.0),
            DataPoint::new("May", 20.0),
        ])
        .unwrap();
    assert_eq!(chart.viewport_width(), 360.0);
    chart.render_frame(&renderer, &opts, now).expect("frame");

    let after = chart.state().path_length.expect("remeasured");
    assert!((after - before).abs() > REMEASURE_TOLERANCE, "{before} -> {after}");
    assert_eq!(chart.state().path_dash_offset, after);
    assert!(!chart.is_settled());
}
