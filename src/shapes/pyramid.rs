use crate::geometry::{GeometryDescriptor, ShapeKind};

// Pentagonal base around the centre point (1.5, 0, 2.31), apex at y = 10
const CENTRE: [f32; 3] = [1.5, 0.0, 2.31];
const APEX: [f32; 3] = [1.5, 10.0, 2.31];
const RIM: [[f32; 3]; 5] = [
    [0.0, 0.0, 0.0],
    [3.0, 0.0, 0.0],
    [3.93, 0.0, 2.85],
    [1.5, 0.0, 4.62],
    [-0.93, 0.0, 2.85],
];

const FACE_COLORS: [[f32; 4]; 10] = [
    // base
    [0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0],
    // sides
    [0.0, 1.0, 1.0, 1.0],
    [1.0, 0.0, 1.0, 1.0],
    [1.0, 1.0, 0.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
];

/// Pentagonal pyramid: five base triangles then five side triangles
pub fn build_pyramid() -> GeometryDescriptor {
    let edges = || (0..RIM.len()).map(|i| (RIM[i], RIM[(i + 1) % RIM.len()]));

    let base = edges().flat_map(|(a, b)| [a, b, CENTRE]);
    let sides = edges().flat_map(|(a, b)| [a, b, APEX]);

    GeometryDescriptor {
        kind: ShapeKind::Pyramid,
        vertices: base.chain(sides).collect(),
        face_colors: FACE_COLORS.to_vec(),
        indices: super::sequential_triangles(FACE_COLORS.len() as u16),
        vertices_per_face: 3,
    }
}
