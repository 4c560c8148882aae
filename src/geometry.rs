use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewerError};
use crate::shapes;

/// The three built-in solids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Pyramid,
    Octahedron,
    Dodecahedron,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [
        ShapeKind::Pyramid,
        ShapeKind::Octahedron,
        ShapeKind::Dodecahedron,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Pyramid => "pyramid",
            ShapeKind::Octahedron => "octahedron",
            ShapeKind::Dodecahedron => "dodecahedron",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Interleaved vertex as uploaded to the GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Immutable vertex/color/index tables for one solid.
///
/// Faces never share vertices: every face repeats its corner positions so
/// that it can carry a single flat color.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryDescriptor {
    pub kind: ShapeKind,
    pub vertices: Vec<[f32; 3]>,
    pub face_colors: Vec<[f32; 4]>,
    pub indices: Vec<u16>,
    pub vertices_per_face: usize,
}

impl GeometryDescriptor {
    pub fn face_count(&self) -> usize {
        self.face_colors.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// One color per vertex, each face color repeated `vertices_per_face` times
    pub fn vertex_colors(&self) -> Vec<[f32; 4]> {
        self.face_colors
            .iter()
            .flat_map(|color| std::iter::repeat(*color).take(self.vertices_per_face))
            .collect()
    }

    pub fn interleaved(&self) -> Vec<Vertex> {
        self.vertices
            .iter()
            .zip(self.vertex_colors())
            .map(|(position, color)| Vertex {
                position: *position,
                color,
            })
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| ViewerError::InvalidGeometry {
            kind: self.kind,
            reason,
        };

        if self.indices.len() % 3 != 0 {
            return Err(invalid(format!(
                "{} indices do not form whole triangles",
                self.indices.len()
            )));
        }

        if let Some(index) = self
            .indices
            .iter()
            .find(|&&i| usize::from(i) >= self.vertices.len())
        {
            return Err(invalid(format!(
                "index {} out of range for {} vertices",
                index,
                self.vertices.len()
            )));
        }

        if self.face_colors.len() * self.vertices_per_face != self.vertices.len() {
            return Err(invalid(format!(
                "{} face colors x {} vertices per face != {} vertices",
                self.face_colors.len(),
                self.vertices_per_face,
                self.vertices.len()
            )));
        }

        Ok(())
    }
}

/// Build the table for `kind`
pub fn build(kind: ShapeKind) -> GeometryDescriptor {
    match kind {
        ShapeKind::Pyramid => shapes::build_pyramid(),
        ShapeKind::Octahedron => shapes::build_octahedron(),
        ShapeKind::Dodecahedron => shapes::build_dodecahedron(),
    }
}

/// Every shape built once and shared by all instances
#[derive(Debug, Clone)]
pub struct GeometryLibrary {
    pyramid: Arc<GeometryDescriptor>,
    octahedron: Arc<GeometryDescriptor>,
    dodecahedron: Arc<GeometryDescriptor>,
}

impl GeometryLibrary {
    pub fn build() -> Result<Self> {
        let load = |kind: ShapeKind| -> Result<Arc<GeometryDescriptor>> {
            let geometry = build(kind);
            geometry.validate()?;
            log::debug!(
                "built {}: {} vertices, {} triangles",
                kind,
                geometry.vertices.len(),
                geometry.triangle_count()
            );
            Ok(Arc::new(geometry))
        };

        Ok(Self {
            pyramid: load(ShapeKind::Pyramid)?,
            octahedron: load(ShapeKind::Octahedron)?,
            dodecahedron: load(ShapeKind::Dodecahedron)?,
        })
    }

    pub fn get(&self, kind: ShapeKind) -> Arc<GeometryDescriptor> {
        match kind {
            ShapeKind::Pyramid => Arc::clone(&self.pyramid),
            ShapeKind::Octahedron => Arc::clone(&self.octahedron),
            ShapeKind::Dodecahedron => Arc::clone(&self.dodecahedron),
        }
    }
}
