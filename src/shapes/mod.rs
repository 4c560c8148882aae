mod dodecahedron;
mod octahedron;
mod pyramid;

pub use dodecahedron::build_dodecahedron;
pub use octahedron::build_octahedron;
pub use pyramid::build_pyramid;

/// Sequential indices for faces laid out as consecutive, unshared triangles
fn sequential_triangles(face_count: u16) -> Vec<u16> {
    (0..face_count * 3).collect()
}

/// Fan each pentagon `a b c d e` into `abc acd ade`
fn pentagon_fans(face_count: u16) -> Vec<u16> {
    (0..face_count)
        .flat_map(|face| {
            let a = face * 5;
            [a, a + 1, a + 2, a, a + 2, a + 3, a, a + 3, a + 4]
        })
        .collect()
}
