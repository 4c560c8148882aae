use crate::geometry::{GeometryDescriptor, ShapeKind};

// Named corners, shared between the pentagon lists below
const A: [f32; 3] = [0.86, 3.12, 0.0];
const B: [f32; 3] = [3.34, 3.12, 0.0];
const C: [f32; 3] = [4.11, 5.48, 0.0];
const D: [f32; 3] = [2.1, 6.94, 0.0];
const E: [f32; 3] = [0.09, 5.48, 0.0];
const F: [f32; 3] = [4.11, 2.07, 2.11];
const G: [f32; 3] = [5.35, 5.88, 2.11];
const H: [f32; 3] = [2.1, 8.24, 2.11];
const I: [f32; 3] = [-1.15, 5.88, 2.11];
const J: [f32; 3] = [0.09, 2.07, 2.11];
const K: [f32; 3] = [2.1, 1.41, 3.41];
const L: [f32; 3] = [5.35, 3.77, 3.41];
const M: [f32; 3] = [4.11, 7.59, 3.41];
const N: [f32; 3] = [0.09, 7.59, 3.41];
const O: [f32; 3] = [-1.15, 3.77, 3.41];
const P: [f32; 3] = [2.1, 2.72, 5.52];
const Q: [f32; 3] = [4.11, 4.17, 5.52];
const R: [f32; 3] = [3.34, 6.53, 5.52];
const S: [f32; 3] = [0.86, 6.53, 5.52];
const T: [f32; 3] = [0.09, 4.17, 5.52];

const PENTAGONS: [[[f32; 3]; 5]; 12] = [
    [A, B, C, D, E],
    [A, B, F, K, J],
    [J, O, T, P, K],
    [F, L, Q, P, K],
    [B, C, G, L, F],
    [A, E, I, O, J],
    [I, N, S, T, O],
    [D, H, N, I, E],
    [C, G, M, H, D],
    [P, Q, R, S, T],
    [G, L, Q, R, M],
    [H, M, R, S, N],
];

const FACE_COLORS: [[f32; 4]; 12] = [
    [1.0, 1.0, 0.0, 1.0],
    [0.5, 0.0, 0.0, 1.0],
    [0.0, 0.5, 0.0, 1.0],
    [1.0, 0.0, 1.0, 1.0],
    [0.6, 0.5, 0.1, 1.0],
    [0.0, 0.0, 0.0, 0.5],
    [0.0, 1.0, 1.0, 1.0],
    [0.0, 0.0, 0.5, 1.0],
    [0.1, 0.3, 0.2, 1.0],
    [1.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
];

/// Twelve pentagons, five unshared vertices each, fanned into three triangles
pub fn build_dodecahedron() -> GeometryDescriptor {
    GeometryDescriptor {
        kind: ShapeKind::Dodecahedron,
        vertices: PENTAGONS.iter().flatten().copied().collect(),
        face_colors: FACE_COLORS.to_vec(),
        indices: super::pentagon_fans(PENTAGONS.len() as u16),
        vertices_per_face: 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_tables() {
        let dodecahedron = build_dodecahedron();
        assert_eq!(dodecahedron.vertices.len(), 60);
        assert_eq!(dodecahedron.indices.len(), 108);
        assert_eq!(dodecahedron.triangle_count(), 36);
    }

    #[test]
    fn test_twenty_distinct_corners() {
        let dodecahedron = build_dodecahedron();
        let mut corners: Vec<[u32; 3]> = dodecahedron
            .vertices
            .iter()
            .map(|v| v.map(f32::to_bits))
            .collect();
        corners.sort();
        corners.dedup();
        assert_eq!(corners.len(), 20);
    }

    #[test]
    fn test_each_corner_joins_three_faces() {
        let dodecahedron = build_dodecahedron();
        for corner in &dodecahedron.vertices {
            let uses = dodecahedron.vertices.iter().filter(|v| *v == corner).count();
            assert_eq!(uses, 3);
        }
    }

    #[test]
    fn test_fan_stays_inside_its_pentagon() {
        let dodecahedron = build_dodecahedron();
        for (face, triangles) in dodecahedron.indices.chunks(9).enumerate() {
            let first = face as u16 * 5;
            assert!(triangles.iter().all(|&i| (first..first + 5).contains(&i)));
        }
    }
}
