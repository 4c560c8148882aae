use std::time::Instant;

use glam::Mat4;

use crate::config::ProjectionConfig;
use crate::core::{DrawCall, DrawContext, WindowDimensions};
use crate::error::RenderError;
use crate::frame::FrameInfo;
use crate::math::perspective;
use crate::scene::Scene;

/// State shared by every draw call, fixed after startup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderContext {
    pub projection: Mat4,
    pub clear_color: [f32; 4],
}

impl RenderContext {
    pub fn new(
        projection: &ProjectionConfig,
        dimensions: WindowDimensions,
        clear_color: [f32; 4],
    ) -> Self {
        Self {
            projection: perspective(
                projection.fov_y_degrees.to_radians(),
                dimensions.aspect(),
                projection.near,
                projection.far,
            ),
            clear_color,
        }
    }
}

/// Runs update then draw over the whole scene once per frame
#[derive(Debug)]
pub struct FrameDriver {
    context: RenderContext,
    frames_rendered: u64,
    draw_calls: u64,
}

impl FrameDriver {
    pub fn new(context: RenderContext) -> Self {
        Self {
            context,
            frames_rendered: 0,
            draw_calls: 0,
        }
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    /// Advance every instance to `now`
    pub fn tick(&self, scene: &mut Scene, now: Instant) {
        for instance in scene.iter_mut() {
            instance.update(now);
        }
    }

    /// One draw per instance, in scene order, all sharing the projection
    pub fn render<D: DrawContext>(
        &mut self,
        scene: &Scene,
        target: &mut D,
    ) -> Result<(), RenderError> {
        target.begin_frame(self.context.clear_color);

        for instance in scene {
            target.draw(DrawCall {
                geometry: instance.geometry(),
                model: instance.model(),
                projection: &self.context.projection,
            });
        }
        self.draw_calls += scene.len() as u64;

        target.end_frame()?;
        self.frames_rendered += 1;
        Ok(())
    }

    pub fn frame<D: DrawContext>(
        &mut self,
        scene: &mut Scene,
        info: &FrameInfo,
        target: &mut D,
    ) -> Result<(), RenderError> {
        self.tick(scene, info.now);
        log::trace!(
            "frame {}: {} instances, delta {:?}",
            info.number,
            scene.len(),
            info.delta
        );
        self.render(scene, target)
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn test_render_context_projection() {
        let ctx = RenderContext::new(
            &ProjectionConfig::default(),
            WindowDimensions::new(800, 600),
            [0.1, 0.1, 0.1, 1.0],
        );
        let expected = Mat4::perspective_rh(FRAC_PI_4, 800.0 / 600.0, 1.0, 10000.0);
        assert!(ctx.projection.abs_diff_eq(expected, 1e-6));
        assert_eq!(ctx.clear_color, [0.1, 0.1, 0.1, 1.0]);
    }

    #[test]
    fn test_new_driver_has_no_history() {
        let ctx = RenderContext::new(
            &ProjectionConfig::default(),
            WindowDimensions::new(1, 1),
            [0.0; 4],
        );
        let driver = FrameDriver::new(ctx);
        assert_eq!(driver.frames_rendered(), 0);
        assert_eq!(driver.draw_calls(), 0);
    }
}
