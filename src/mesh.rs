//! CPU-side procedural meshes for the demo solids.  Vertex data only; the
//! rendering collaborator owns any GPU upload.

use bytemuck::{Pod, Zeroable};
use cgmath::Vector3;
use serde::{Deserialize, Serialize};

/// Per-vertex data (location(0)=position, location(1)=color)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// Triangle list with `u16` indices.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl MeshData {
    pub fn positions(&self) -> impl Iterator<Item = Vector3<f32>> + '_ {
        self.vertices.iter().map(|v| Vector3::from(v.position))
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeshKind {
    #[default]
    Tetrahedron,
    Cube,
    Octahedron,
    Icosahedron,
}

impl MeshKind {
    pub const ALL: [MeshKind; 4] = [
        MeshKind::Tetrahedron,
        MeshKind::Cube,
        MeshKind::Octahedron,
        MeshKind::Icosahedron,
    ];

    pub fn build(self) -> MeshData {
        match self {
            MeshKind::Tetrahedron => make_tetrahedron(),
            MeshKind::Cube        => make_cube(),
            MeshKind::Octahedron  => make_octahedron(),
            MeshKind::Icosahedron => make_icosahedron(),
        }
    }
}

const SOLID_COLOR: [f32; 4] = [0.9, 0.16, 0.22, 1.0];

fn from_positions(positions: &[[f32; 3]], indices: &[u16]) -> MeshData {
    MeshData {
        vertices: positions
            .iter()
            .map(|&position| Vertex { position, color: SOLID_COLOR })
            .collect(),
        indices: indices.to_vec(),
    }
}

/// Regular tetrahedron with unit circumradius, one vertex pointing up.
pub fn make_tetrahedron() -> MeshData {
    let s = (8.0f32 / 9.0).sqrt();
    let t = (2.0f32 / 9.0).sqrt();
    let u = (2.0f32 / 3.0).sqrt();
    let positions = [
        [0.0, 1.0, 0.0],
        [s, -1.0 / 3.0, 0.0],
        [-t, -1.0 / 3.0, u],
        [-t, -1.0 / 3.0, -u],
    ];
    let indices = [
        0, 2, 1,
        0, 3, 2,
        0, 1, 3,
        1, 2, 3,
    ];
    from_positions(&positions, &indices)
}

/// Build a colored box centered at the origin with half-sizes (hx,hy,hz).
/// 24 vertices (4 per face) so each face can have its own color.
fn build_box_vertices(hx: f32, hy: f32, hz: f32, face_colors: [[f32; 4]; 6]) -> MeshData {
    // 6 faces: +X, -X, +Y, -Y, +Z, -Z
    let positions = [
        [hx, -hy, -hz], [hx, -hy,  hz], [hx,  hy, -hz], [hx,  hy,  hz],
        [-hx, -hy,  hz], [-hx, -hy, -hz], [-hx,  hy,  hz], [-hx,  hy, -hz],
        [-hx,  hy, -hz], [ hx,  hy, -hz], [-hx,  hy,  hz], [ hx,  hy,  hz],
        [-hx, -hy,  hz], [ hx, -hy,  hz], [-hx, -hy, -hz], [ hx, -hy, -hz],
        [-hx, -hy,  hz], [ hx, -hy,  hz], [-hx,  hy,  hz], [ hx,  hy,  hz],
        [ hx, -hy, -hz], [-hx, -hy, -hz], [ hx,  hy, -hz], [-hx,  hy, -hz],
    ];

    let vertices = positions
        .iter()
        .enumerate()
        .map(|(i, &position)| Vertex { position, color: face_colors[i / 4] })
        .collect();

    // (0,1,2) and (2,1,3) per face
    let indices = (0..6u16)
        .flat_map(|f| {
            let base = f * 4;
            [base, base + 1, base + 2, base + 2, base + 1, base + 3]
        })
        .collect();

    MeshData { vertices, indices }
}

/// Unit cube centered at origin (1x1x1).
pub fn make_cube() -> MeshData {
    build_box_vertices(0.5, 0.5, 0.5, [SOLID_COLOR; 6])
}

pub fn make_octahedron() -> MeshData {
    let positions = [
        [1.0, 0.0, 0.0], [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0], [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0], [0.0, 0.0, -1.0],
    ];
    let indices = [
        2, 4, 0,  2, 0, 5,  2, 5, 1,  2, 1, 4,
        3, 0, 4,  3, 5, 0,  3, 1, 5,  3, 4, 1,
    ];
    from_positions(&positions, &indices)
}

/// Icosahedron from three golden rectangles, scaled to unit circumradius.
pub fn make_icosahedron() -> MeshData {
    let phi = (1.0 + 5.0f32.sqrt()) * 0.5;
    let k = 1.0 / (1.0 + phi * phi).sqrt();
    let (a, b) = (k, phi * k);
    let positions = [
        [-a,  b, 0.0], [ a,  b, 0.0], [-a, -b, 0.0], [ a, -b, 0.0],
        [0.0, -a,  b], [0.0,  a,  b], [0.0, -a, -b], [0.0,  a, -b],
        [ b, 0.0, -a], [ b, 0.0,  a], [-b, 0.0, -a], [-b, 0.0,  a],
    ];
    let indices = [
        0, 11, 5,   0, 5, 1,    0, 1, 7,    0, 7, 10,   0, 10, 11,
        1, 5, 9,    5, 11, 4,   11, 10, 2,  10, 7, 6,   7, 1, 8,
        3, 9, 4,    3, 4, 2,    3, 2, 6,    3, 6, 8,    3, 8, 9,
        4, 9, 5,    2, 4, 11,   6, 2, 10,   8, 6, 7,    9, 8, 1,
    ];
    from_positions(&positions, &indices)
}
