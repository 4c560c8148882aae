use polyhedra::geometry::{build, GeometryLibrary, ShapeKind};
use polyhedra::shapes::{build_dodecahedron, build_octahedron, build_pyramid};

#[cfg(test)]
mod geometry_tests {
    use super::*;

    // ============================================================================
    // Structural invariants shared by every table
    // ============================================================================

    #[test]
    fn test_indices_reference_existing_vertices() {
        for kind in ShapeKind::ALL {
            let geometry = build(kind);
            let count = geometry.vertices.len();
            assert!(
                geometry.indices.iter().all(|&i| (i as usize) < count),
                "{} has an out-of-range index",
                kind
            );
        }
    }

    #[test]
    fn test_indices_form_whole_triangles() {
        for kind in ShapeKind::ALL {
            assert_eq!(build(kind).indices.len() % 3, 0, "{}", kind);
        }
    }

    #[test]
    fn test_face_colors_match_vertex_grouping() {
        let expected = [
            (build_pyramid(), 3),
            (build_octahedron(), 3),
            (build_dodecahedron(), 5),
        ];

        for (geometry, per_face) in expected {
            assert_eq!(geometry.vertices_per_face, per_face);
            assert_eq!(
                geometry.face_colors.len() * per_face,
                geometry.vertices.len(),
                "{}",
                geometry.kind
            );
        }
    }

    #[test]
    fn test_every_table_validates() {
        for kind in ShapeKind::ALL {
            build(kind).validate().unwrap();
        }
    }

    #[test]
    fn test_builders_are_pure() {
        assert_eq!(build_pyramid(), build_pyramid());
        assert_eq!(build_octahedron(), build_octahedron());
        assert_eq!(build_dodecahedron(), build_dodecahedron());
    }

    // ============================================================================
    // Flat shading by vertex duplication
    // ============================================================================

    #[test]
    fn test_vertex_colors_are_constant_per_face() {
        for kind in ShapeKind::ALL {
            let geometry = build(kind);
            let colors = geometry.vertex_colors();
            assert_eq!(colors.len(), geometry.vertices.len());

            for (face, group) in colors.chunks(geometry.vertices_per_face).enumerate() {
                assert!(
                    group.iter().all(|c| *c == geometry.face_colors[face]),
                    "{} face {} mixes colors",
                    kind,
                    face
                );
            }
        }
    }

    #[test]
    fn test_triangles_never_span_faces() {
        for kind in ShapeKind::ALL {
            let geometry = build(kind);
            let per_face = geometry.vertices_per_face as u16;

            for triangle in geometry.indices.chunks(3) {
                let face = triangle[0] / per_face;
                assert!(triangle.iter().all(|&i| i / per_face == face), "{}", kind);
            }
        }
    }

    #[test]
    fn test_interleaved_stream_pairs_positions_with_colors() {
        let geometry = build_pyramid();
        let stream = geometry.interleaved();

        assert_eq!(stream.len(), 30);
        // Base faces are transparent black, the first side is cyan
        assert_eq!(stream[0].color, [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(stream[15].color, [0.0, 1.0, 1.0, 1.0]);
        assert_eq!(stream[15].position, geometry.vertices[15]);
    }

    #[test]
    fn test_library_hands_out_each_kind() {
        let library = GeometryLibrary::build().unwrap();
        for kind in ShapeKind::ALL {
            assert_eq!(library.get(kind).kind, kind);
        }
    }
}
