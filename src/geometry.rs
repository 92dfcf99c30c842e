use glam::Vec3;

use crate::types::Vertex;

/// Indexed triangle mesh
#[derive(Debug, Clone)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Box of the given size centred at the origin
///
/// Each face has its own four vertices so normals stay flat. Triangles wind
/// counter-clockwise seen from outside.
pub fn cuboid(size: Vec3) -> Mesh {
    // (normal, u, v) with u x v == normal
    let faces = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];
    let half = size * 0.5;

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, u, v) in faces {
        let base = vertices.len() as u16;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let corner = (normal + u * su + v * sv) * half;
            vertices.push(Vertex::new(corner.to_array(), normal.to_array()));
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh { vertices, indices }
}

/// Rectangle in the XY plane, facing +Z
pub fn plane(width: f32, height: f32) -> Mesh {
    let (hw, hh) = (width * 0.5, height * 0.5);
    let normal = [0.0, 0.0, 1.0];
    Mesh {
        vertices: vec![
            Vertex::new([-hw, -hh, 0.0], normal),
            Vertex::new([hw, -hh, 0.0], normal),
            Vertex::new([hw, hh, 0.0], normal),
            Vertex::new([-hw, hh, 0.0], normal),
        ],
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}
