// File: crates/linechart-core/src/chart.rs
// Summary: LineChart: one mounted chart instance coordinating geometry, animation and rendering.

use std::time::Duration;

use log::{debug, info};

use crate::animation::{AnimationDriver, AnimationState, RevealTargets};
use crate::config::LayoutConfig;
use crate::error::Result;
use crate::geometry::{resolve, ResolvedGeometry};
use crate::render::{Frame, RenderEvent, RenderOptions, SkiaRenderer};
use crate::scene::{compose, Scene};
use crate::types::DataPoint;

/// A mounted line chart.
///
/// Geometry is derived from (data, config, viewport width) and recomputed
/// only when one of them changes. Animation state lives in the owned
/// [`AnimationDriver`]; it is disposed on [`unmount`](Self::unmount) or drop.
///
/// The renderer never touches the driver directly: frames return
/// [`RenderEvent`]s and [`handle_event`](Self::handle_event) turns them into
/// driver commands.
pub struct LineChart {
    data: Vec<DataPoint>,
    config: LayoutConfig,
    viewport_width: f32,
    geometry: ResolvedGeometry,
    driver: AnimationDriver,
}

impl LineChart {
    /// Resolve geometry and start the mount reveals at `now`.
    pub fn mount(data: Vec<DataPoint>, config: LayoutConfig, viewport_width: f32, now: Duration) -> Result<Self> {
        let geometry = resolve(&data, &config, viewport_width)?;
        let mut driver = AnimationDriver::new(RevealTargets::new(&geometry, &config));
        driver.start(now);
        info!("mounted line chart: {} points, {}x{}px", data.len(), viewport_width, config.container_height);
        Ok(Self { data, config, viewport_width, geometry, driver })
    }

    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn geometry(&self) -> &ResolvedGeometry {
        &self.geometry
    }

    pub fn state(&self) -> &AnimationState {
        self.driver.state()
    }

    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    /// Replace the series. On error the previous data and geometry stay.
    pub fn set_data(&mut self, data: Vec<DataPoint>) -> Result<()> {
        if data == self.data {
            return Ok(());
        }
        let geometry = resolve(&data, &self.config, self.viewport_width)?;
        self.data = data;
        self.apply(geometry);
        Ok(())
    }

    pub fn set_config(&mut self, config: LayoutConfig) -> Result<()> {
        if config == self.config {
            return Ok(());
        }
        let geometry = resolve(&self.data, &config, self.viewport_width)?;
        self.config = config;
        self.apply(geometry);
        Ok(())
    }

    pub fn set_viewport_width(&mut self, width: f32) -> Result<()> {
        if width == self.viewport_width {
            return Ok(());
        }
        let geometry = resolve(&self.data, &self.config, width)?;
        self.viewport_width = width;
        self.apply(geometry);
        Ok(())
    }

    // The path reveal restarts only once the renderer reports a different length.
    fn apply(&mut self, geometry: ResolvedGeometry) {
        self.driver.retarget(RevealTargets::new(&geometry, &self.config));
        debug!("geometry recomputed for {} points", self.data.len());
        self.geometry = geometry;
    }

    /// Advance animations to `now`. Returns whether any are still running.
    pub fn advance(&mut self, now: Duration) -> bool {
        self.driver.tick(now)
    }

    pub fn scene(&self) -> Scene {
        compose(&self.geometry, self.driver.state(), &self.config)
    }

    /// Apply renderer feedback. Returns whether the path reveal (re)started.
    pub fn handle_event(&mut self, event: RenderEvent, now: Duration) -> bool {
        match event {
            RenderEvent::PathMeasured(length) => self.driver.reveal_path(length, now),
        }
    }

    /// Advance to `now`, draw the frame, and feed its events back.
    pub fn render_frame(&mut self, renderer: &SkiaRenderer, opts: &RenderOptions, now: Duration) -> Result<Frame> {
        self.advance(now);
        let frame = renderer.draw(&self.scene(), opts)?;
        for &event in &frame.events {
            self.handle_event(event, now);
        }
        Ok(frame)
    }

    /// Every reveal, including the path, has finished.
    pub fn is_settled(&self) -> bool {
        self.driver.state().path_length.is_some() && !self.driver.is_animating()
    }

    /// Dispose the animation state, cancelling in-flight transitions.
    pub fn unmount(mut self) -> AnimationState {
        self.driver.dispose();
        *self.driver.state()
    }
}

impl Drop for LineChart {
    fn drop(&mut self) {
        self.driver.dispose();
    }
}
