pub mod cli;
pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod mesh;
pub mod scene;
pub mod shapes;
pub mod viewer;

pub use config::ViewerConfig;
pub use driver::{FrameDriver, RenderContext};
pub use error::{RenderError, ViewerError};
pub use geometry::{GeometryDescriptor, GeometryLibrary, ShapeKind};
pub use mesh::{MeshInstance, Oscillation, UpdateRule, SPIN_PERIOD};
pub use scene::Scene;
pub use viewer::{launch, Viewer};
