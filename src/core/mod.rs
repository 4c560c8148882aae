pub mod draw;
pub mod gpu_context;
pub mod mesh_pipeline;
pub mod surface_renderer;
pub mod window;

pub use draw::{ContextProvider, DrawCall, DrawContext};
pub use gpu_context::GpuContext;
pub use mesh_pipeline::MeshPipeline;
pub use surface_renderer::{SurfaceRenderer, WindowProvider};
pub use window::WindowDimensions;
