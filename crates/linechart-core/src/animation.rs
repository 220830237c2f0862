// File: crates/linechart-core/src/animation.rs
// Summary: Animation driver: timed one-shot transitions over the chart's animated values.
//
// Time is a `Duration` since mount supplied by the host's frame scheduler.
// The driver never reads a clock, so a frame sequence replays identically.

use std::time::Duration;

use log::{debug, trace, warn};

use crate::config::LayoutConfig;
use crate::easing::Easing;
use crate::geometry::ResolvedGeometry;

/// Duration of every reveal except the path opacity fade.
pub const REVEAL_DURATION: Duration = Duration::from_millis(1500);
/// Delay before the axis lines start growing.
pub const AXIS_DELAY: Duration = Duration::from_millis(500);
/// Delay before the path dash offset starts shrinking.
pub const PATH_DELAY: Duration = Duration::from_millis(500);
pub const PATH_OPACITY_DELAY: Duration = Duration::from_millis(100);
pub const PATH_OPACITY_DURATION: Duration = Duration::from_millis(500);
/// Re-measured path lengths within this many pixels of the last one do not
/// restart the reveal.
pub const REMEASURE_TOLERANCE: f32 = 0.5;

/// A single animated value of the chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    XAxisExtent,
    YAxisExtent,
    MarkerRadius,
    LabelOpacity,
    PathDashOffset,
    PathOpacity,
}

/// One-shot eased move from `from` to `to`, starting `delay` after `started_at`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub from: f32,
    pub to: f32,
    pub delay: Duration,
    pub duration: Duration,
    pub easing: Easing,
    pub started_at: Duration,
}

impl Transition {
    pub fn new(from: f32, to: f32, duration: Duration, started_at: Duration) -> Self {
        Self { from, to, delay: Duration::ZERO, duration, easing: Easing::DEFAULT, started_at }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Linear progress (0.0 to 1.0); 0 until the delay has elapsed.
    #[inline]
    pub fn progress(&self, now: Duration) -> f32 {
        let elapsed = now.saturating_sub(self.started_at + self.delay);
        if self.duration.is_zero() {
            return if now >= self.started_at + self.delay { 1.0 } else { 0.0 };
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn value_at(&self, now: Duration) -> f32 {
        let p = self.progress(now);
        if p >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.evaluate(p)
    }

    pub fn is_done(&self, now: Duration) -> bool {
        now >= self.started_at + self.delay + self.duration
    }
}

/// Current values of every animated channel for one mounted chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    /// x coordinate of the x-axis line's moving (right) end.
    pub x_axis_extent: f32,
    /// y coordinate of the y-axis line's moving (top) end.
    pub y_axis_extent: f32,
    pub marker_radius: f32,
    pub label_opacity: f32,
    pub path_dash_offset: f32,
    pub path_opacity: f32,
    /// Total drawn path length; `None` until the renderer has measured it.
    pub path_length: Option<f32>,
}

impl AnimationState {
    pub fn get(&self, channel: Channel) -> f32 {
        match channel {
            Channel::XAxisExtent => self.x_axis_extent,
            Channel::YAxisExtent => self.y_axis_extent,
            Channel::MarkerRadius => self.marker_radius,
            Channel::LabelOpacity => self.label_opacity,
            Channel::PathDashOffset => self.path_dash_offset,
            Channel::PathOpacity => self.path_opacity,
        }
    }

    fn set(&mut self, channel: Channel, value: f32) {
        match channel {
            Channel::XAxisExtent => self.x_axis_extent = value,
            Channel::YAxisExtent => self.y_axis_extent = value,
            Channel::MarkerRadius => self.marker_radius = value,
            Channel::LabelOpacity => self.label_opacity = value,
            Channel::PathDashOffset => self.path_dash_offset = value,
            Channel::PathOpacity => self.path_opacity = value,
        }
    }
}

/// Start and end values of the mount-time reveals, taken from the layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTargets {
    pub x_axis: (f32, f32),
    pub y_axis: (f32, f32),
    pub marker_radius: f32,
}

impl RevealTargets {
    pub fn new(geometry: &ResolvedGeometry, config: &LayoutConfig) -> Self {
        Self {
            x_axis: (geometry.x_axis.start_extent(), geometry.x_axis.end_extent()),
            y_axis: (geometry.y_axis.start_extent(), geometry.y_axis.end_extent()),
            marker_radius: config.marker_radius,
        }
    }

    fn start(&self, channel: Channel) -> Option<f32> {
        match channel {
            Channel::XAxisExtent => Some(self.x_axis.0),
            Channel::YAxisExtent => Some(self.y_axis.0),
            Channel::MarkerRadius | Channel::LabelOpacity => Some(0.0),
            Channel::PathDashOffset | Channel::PathOpacity => None,
        }
    }

    fn end(&self, channel: Channel) -> Option<f32> {
        match channel {
            Channel::XAxisExtent => Some(self.x_axis.1),
            Channel::YAxisExtent => Some(self.y_axis.1),
            Channel::MarkerRadius => Some(self.marker_radius),
            Channel::LabelOpacity => Some(1.0),
            Channel::PathDashOffset | Channel::PathOpacity => None,
        }
    }
}

/// Owns the [`AnimationState`] of one chart instance and advances it.
///
/// Mount reveals (axes, markers, labels) start once via [`start`](Self::start);
/// the path reveal starts only when [`reveal_path`](Self::reveal_path)
/// receives a measured length. After [`dispose`](Self::dispose) nothing moves.
#[derive(Debug)]
pub struct AnimationDriver {
    state: AnimationState,
    targets: RevealTargets,
    active: Vec<(Channel, Transition)>,
    mounted: bool,
    disposed: bool,
}

impl AnimationDriver {
    pub fn new(targets: RevealTargets) -> Self {
        let state = AnimationState {
            x_axis_extent: targets.x_axis.0,
            y_axis_extent: targets.y_axis.0,
            marker_radius: 0.0,
            label_opacity: 0.0,
            path_dash_offset: 0.0,
            path_opacity: 0.0,
            path_length: None,
        };
        Self { state, targets, active: Vec::with_capacity(6), mounted: false, disposed: false }
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn targets(&self) -> &RevealTargets {
        &self.targets
    }

    pub fn is_animating(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn is_started(&self) -> bool {
        self.mounted
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Kick off the axis, marker and label reveals. Only the first call has
    /// an effect.
    pub fn start(&mut self, now: Duration) {
        if self.disposed {
            warn!("start ignored: animation driver already disposed");
            return;
        }
        if self.mounted {
            debug!("start ignored: mount reveals already started");
            return;
        }
        self.mounted = true;

        let t = self.targets;
        let s = self.state;
        self.begin(
            Channel::XAxisExtent,
            Transition::new(s.x_axis_extent, t.x_axis.1, REVEAL_DURATION, now).with_delay(AXIS_DELAY),
        );
        self.begin(
            Channel::YAxisExtent,
            Transition::new(s.y_axis_extent, t.y_axis.1, REVEAL_DURATION, now).with_delay(AXIS_DELAY),
        );
        self.begin(Channel::MarkerRadius, Transition::new(s.marker_radius, t.marker_radius, REVEAL_DURATION, now));
        self.begin(Channel::LabelOpacity, Transition::new(s.label_opacity, 1.0, REVEAL_DURATION, now));
        debug!("mount reveals started at {now:?}");
    }

    /// Feed a measured path length. Starts (or restarts) the path reveal when
    /// the length is new or changed beyond [`REMEASURE_TOLERANCE`]; returns
    /// whether it did.
    pub fn reveal_path(&mut self, length: f32, now: Duration) -> bool {
        if self.disposed {
            warn!("path measurement ignored: animation driver already disposed");
            return false;
        }
        if !length.is_finite() || length <= 0.0 {
            debug!("path measurement {length} not usable yet");
            return false;
        }
        if let Some(prev) = self.state.path_length {
            if (prev - length).abs() <= REMEASURE_TOLERANCE {
                trace!("path length {length:.2} unchanged (was {prev:.2})");
                return false;
            }
        }

        self.state.path_length = Some(length);
        self.state.path_dash_offset = length;
        self.begin(
            Channel::PathDashOffset,
            Transition::new(length, 0.0, REVEAL_DURATION, now)
                .with_delay(PATH_DELAY)
                .with_easing(Easing::EaseInOut),
        );
        self.begin(
            Channel::PathOpacity,
            Transition::new(self.state.path_opacity, 1.0, PATH_OPACITY_DURATION, now)
                .with_delay(PATH_OPACITY_DELAY)
                .with_easing(Easing::EaseInOut),
        );
        debug!("path reveal started at {now:?} from length {length:.2}");
        true
    }

    /// Move the reveal end points after a layout change. In-flight and
    /// delayed reveals restart from the new start toward the new end;
    /// finished ones snap to the new end.
    pub fn retarget(&mut self, targets: RevealTargets) {
        if self.disposed || targets == self.targets {
            return;
        }
        self.targets = targets;
        for channel in [Channel::XAxisExtent, Channel::YAxisExtent, Channel::MarkerRadius, Channel::LabelOpacity] {
            let (Some(start), Some(end)) = (targets.start(channel), targets.end(channel)) else { continue };
            match self.active.iter_mut().find(|(c, _)| *c == channel) {
                Some((_, tr)) => {
                    tr.from = start;
                    tr.to = end;
                    // keep the current value on the new segment until the next tick
                    let current = self.state.get(channel).clamp(start.min(end), start.max(end));
                    self.state.set(channel, current);
                }
                None if self.mounted => self.state.set(channel, end),
                None => {}
            }
        }
        if !self.mounted {
            self.state.x_axis_extent = targets.x_axis.0;
            self.state.y_axis_extent = targets.y_axis.0;
        }
        debug!("reveal targets updated: {targets:?}");
    }

    /// Advance every in-flight transition to `now`. Returns whether any is
    /// still running.
    pub fn tick(&mut self, now: Duration) -> bool {
        if self.disposed {
            return false;
        }
        let state = &mut self.state;
        self.active.retain(|(channel, tr)| {
            state.set(*channel, tr.value_at(now));
            !tr.is_done(now)
        });
        trace!("tick {now:?}: {} transitions running", self.active.len());
        !self.active.is_empty()
    }

    /// Jump every in-flight transition to its end value.
    pub fn finish(&mut self) {
        for (channel, tr) in self.active.drain(..) {
            self.state.set(channel, tr.to);
        }
    }

    /// Cancel in-flight transitions and freeze the state for good.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        if !self.active.is_empty() {
            debug!("disposing with {} transitions in flight", self.active.len());
        }
        self.active.clear();
        self.disposed = true;
    }

    fn begin(&mut self, channel: Channel, transition: Transition) {
        self.active.retain(|(c, _)| *c != channel);
        self.active.push((channel, transition));
    }
}
