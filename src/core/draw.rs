use glam::Mat4;

use super::window::WindowDimensions;
use crate::error::{RenderError, Result};
use crate::geometry::GeometryDescriptor;
use crate::math::Transform;

/// Everything needed for one indexed triangle draw
#[derive(Debug, Clone, Copy)]
pub struct DrawCall<'a> {
    pub geometry: &'a GeometryDescriptor,
    pub model: &'a Transform,
    pub projection: &'a Mat4,
}

/// Immediate-mode drawing target, one frame at a time
pub trait DrawContext {
    /// Start a frame: clear color and depth
    fn begin_frame(&mut self, clear_color: [f32; 4]);

    /// Queue one indexed triangle-list draw
    fn draw(&mut self, call: DrawCall<'_>);

    /// Submit and present everything queued since `begin_frame`
    fn end_frame(&mut self) -> std::result::Result<(), RenderError>;
}

/// Creates the drawing context for a surface
pub trait ContextProvider {
    type Context: DrawContext;

    fn dimensions(&self) -> WindowDimensions;

    /// Fails with `ViewerError::ContextUnavailable` or `ViewerError::ShaderCompile`
    fn create_context(&self) -> Result<Self::Context>;
}
