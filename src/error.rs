use thiserror::Error;

use crate::geometry::ShapeKind;

/// Startup failures. All of them are fatal and happen before the first frame.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("graphics context unavailable: {0}")]
    ContextUnavailable(String),

    #[error("shader compilation failed: {0}")]
    ShaderCompile(String),

    #[error("invalid {kind} geometry: {reason}")]
    InvalidGeometry { kind: ShapeKind, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scene file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Per-frame presentation failures
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}

pub type Result<T> = std::result::Result<T, ViewerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err = ViewerError::ContextUnavailable("no adapter".into());
        assert_eq!(err.to_string(), "graphics context unavailable: no adapter");

        let err = ViewerError::InvalidGeometry {
            kind: ShapeKind::Octahedron,
            reason: "index 30 out of range".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid octahedron geometry: index 30 out of range"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let parse = serde_json::from_str::<serde_json::Value>("{");
        let err: ViewerError = parse.unwrap_err().into();
        assert!(matches!(err, ViewerError::Json(_)));
    }
}
