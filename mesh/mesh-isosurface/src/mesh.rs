//! Output mesh type for isosurface extraction.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh with per-vertex surface attributes.
///
/// # Winding Order
///
/// Faces use **counter-clockwise (CCW) winding** when viewed from
/// outside the extracted region, so right-hand-rule face normals agree
/// in direction with the stored per-vertex normals.
///
/// # Attributes
///
/// Every vertex carries a unit normal estimated from the scalar
/// field's gradient and an interpolated field strength (the absolute
/// offset of the contributing samples from the level).
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfaceMesh {
    /// Vertex positions in volume lattice coordinates, scaled by the
    /// configured spacing.
    pub vertices: Vec<Point3<f64>>,
    /// Unit normals, one per vertex.
    pub normals: Vec<Vector3<f64>>,
    /// Interpolated field strength, one per vertex.
    pub values: Vec<f64>,
    /// Triangles as indices into the vertex arrays.
    pub faces: Vec<[u32; 3]>,
}

impl SurfaceMesh {
    /// Create an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Whether the mesh holds no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Reverse the winding of every face and negate the normals.
    pub(crate) fn flip_orientation(&mut self) {
        for face in &mut self.faces {
            face.swap(1, 2);
        }
        for normal in &mut self.normals {
            *normal = -*normal;
        }
    }

    /// Scale vertex positions by a per-axis spacing.
    pub(crate) fn apply_spacing(&mut self, spacing: [f64; 3]) {
        if spacing == [1.0, 1.0, 1.0] {
            return;
        }
        for v in &mut self.vertices {
            v.x *= spacing[0];
            v.y *= spacing[1];
            v.z *= spacing[2];
        }
        // normals transform with the inverse scale to stay orthogonal
        for n in &mut self.normals {
            n.x /= spacing[0];
            n.y /= spacing[1];
            n.z /= spacing[2];
            let len = n.norm();
            if len > 0.0 {
                *n /= len;
            }
        }
    }

    /// Drop vertices referenced by no face and remap indices.
    pub(crate) fn compact(&mut self) {
        let mut remap = vec![u32::MAX; self.vertices.len()];
        let mut kept = 0u32;
        for face in &self.faces {
            for &v in face {
                if remap[v as usize] == u32::MAX {
                    remap[v as usize] = kept;
                    kept += 1;
                }
            }
        }
        let mut vertices = vec![Point3::origin(); kept as usize];
        let mut normals = vec![Vector3::zeros(); kept as usize];
        let mut values = vec![0.0; kept as usize];
        for (old, &new) in remap.iter().enumerate() {
            if new != u32::MAX {
                vertices[new as usize] = self.vertices[old];
                normals[new as usize] = self.normals[old];
                values[new as usize] = self.values[old];
            }
        }
        for face in &mut self.faces {
            for v in face {
                *v = remap[*v as usize];
            }
        }
        self.vertices = vertices;
        self.normals = normals;
        self.values = values;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn two_triangle_mesh() -> SurfaceMesh {
        SurfaceMesh {
            vertices: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(5.0, 5.0, 5.0),
            ],
            normals: vec![Vector3::new(0.0, 0.0, 1.0); 4],
            values: vec![1.0, 2.0, 3.0, 4.0],
            faces: vec![[0, 1, 2]],
        }
    }

    #[test]
    fn flip_orientation_reverses_winding_and_normals() {
        let mut mesh = two_triangle_mesh();
        mesh.flip_orientation();
        assert_eq!(mesh.faces[0], [0, 2, 1]);
        assert_relative_eq!(mesh.normals[0].z, -1.0);
    }

    #[test]
    fn apply_spacing_scales_positions_and_renormalizes() {
        let mut mesh = two_triangle_mesh();
        mesh.normals[0] = Vector3::new(0.0, 0.6, 0.8);
        mesh.apply_spacing([2.0, 1.0, 0.5]);
        assert_relative_eq!(mesh.vertices[1].x, 2.0);
        assert_relative_eq!(mesh.normals[0].norm(), 1.0);
    }

    #[test]
    fn compact_drops_unreferenced_vertices() {
        let mut mesh = two_triangle_mesh();
        mesh.compact();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.values, vec![1.0, 2.0, 3.0]);
        assert_eq!(mesh.faces[0], [0, 1, 2]);
    }
}
