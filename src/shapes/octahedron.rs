use crate::geometry::{GeometryDescriptor, ShapeKind};

const VERTICES: [[f32; 3]; 24] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    //
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    //
    [1.0, 0.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, 1.0],
    //
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, -1.0],
    //
    [-1.0, 0.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, 1.0],
    //
    [1.0, 0.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, -1.0],
    //
    [-1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, -1.0],
    //
    [-1.0, 0.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 0.0, -1.0],
];

const FACE_COLORS: [[f32; 4]; 8] = [
    [1.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
    [0.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 1.0, 1.0],
    [1.0, 0.0, 1.0, 1.0],
    [1.0, 1.0, 0.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
];

/// Unit octahedron, one triangle per octant
pub fn build_octahedron() -> GeometryDescriptor {
    GeometryDescriptor {
        kind: ShapeKind::Octahedron,
        vertices: VERTICES.to_vec(),
        face_colors: FACE_COLORS.to_vec(),
        indices: super::sequential_triangles(FACE_COLORS.len() as u16),
        vertices_per_face: 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_octant_covered_once() {
        let octahedron = build_octahedron();
        let mut octants: Vec<[bool; 3]> = octahedron
            .vertices
            .chunks(3)
            .map(|face| {
                let sum = [
                    face.iter().map(|v| v[0]).sum::<f32>(),
                    face.iter().map(|v| v[1]).sum::<f32>(),
                    face.iter().map(|v| v[2]).sum::<f32>(),
                ];
                [sum[0] > 0.0, sum[1] > 0.0, sum[2] > 0.0]
            })
            .collect();
        octants.sort();
        octants.dedup();
        assert_eq!(octants.len(), 8);
    }

    #[test]
    fn test_vertices_on_unit_axes() {
        let octahedron = build_octahedron();
        for v in &octahedron.vertices {
            let len: f32 = v.iter().map(|c| c * c).sum();
            assert_eq!(len, 1.0);
        }
    }
}
