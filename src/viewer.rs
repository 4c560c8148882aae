use std::time::Instant;

use crate::config::ViewerConfig;
use crate::core::{ContextProvider, DrawContext};
use crate::driver::{FrameDriver, RenderContext};
use crate::error::{RenderError, Result, ViewerError};
use crate::frame::{FrameClock, FrameInfo};
use crate::geometry::GeometryLibrary;
use crate::scene::Scene;

/// A running scene bound to its drawing context
pub struct Viewer<C: DrawContext> {
    scene: Scene,
    driver: FrameDriver,
    context: C,
    clock: FrameClock,
}

/// Bring up the drawing context, build geometry and the scene.
///
/// Any failure is passed to `report` exactly once and returned; nothing is
/// built and no frame is drawn after a failed context creation.
pub fn launch<P: ContextProvider>(
    provider: &P,
    config: &ViewerConfig,
    report: impl FnOnce(&ViewerError),
) -> Result<Viewer<P::Context>> {
    start(provider, config).map_err(|e| {
        report(&e);
        e
    })
}

fn start<P: ContextProvider>(provider: &P, config: &ViewerConfig) -> Result<Viewer<P::Context>> {
    config.validate()?;

    let context = provider.create_context()?;
    let dimensions = provider.dimensions();
    log::info!("graphics context ready ({}x{})", dimensions.width, dimensions.height);

    let library = GeometryLibrary::build()?;
    let render = RenderContext::new(&config.projection, dimensions, config.clear_color);

    let now = Instant::now();
    let scene = Scene::from_config(&config.instances, &library, now);
    log::info!("scene ready: {} instances", scene.len());

    Ok(Viewer {
        scene,
        driver: FrameDriver::new(render),
        context,
        clock: FrameClock::starting_at(now),
    })
}

impl<C: DrawContext> Viewer<C> {
    /// Update and draw one frame stamped with the current time
    pub fn frame(&mut self) -> std::result::Result<FrameInfo, RenderError> {
        self.frame_at(Instant::now())
    }

    pub fn frame_at(&mut self, now: Instant) -> std::result::Result<FrameInfo, RenderError> {
        let info = self.clock.frame_at(now);
        self.driver.frame(&mut self.scene, &info, &mut self.context)?;
        Ok(info)
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn driver(&self) -> &FrameDriver {
        &self.driver
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn frames_started(&self) -> u64 {
        self.clock.frame_number()
    }
}
