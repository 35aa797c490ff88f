//! Post-extraction mesh cleanup passes.

use hashbrown::HashMap;

use crate::mesh::SurfaceMesh;

/// Remove zero-area triangles by welding coincident vertices.
///
/// Corner samples exactly on the level collapse several edge
/// crossings onto one lattice point; the crossings land on bitwise
/// identical coordinates, so an exact-position weld suffices. Faces
/// left with fewer than three distinct vertices are dropped, and
/// orphaned vertices are compacted away.
pub(crate) fn remove_degenerate_faces(mesh: &mut SurfaceMesh) {
    let mut first_at: HashMap<(u64, u64, u64), u32> = HashMap::new();
    let mut weld: Vec<u32> = Vec::with_capacity(mesh.vertices.len());
    for (i, v) in mesh.vertices.iter().enumerate() {
        let key = (v.x.to_bits(), v.y.to_bits(), v.z.to_bits());
        weld.push(*first_at.entry(key).or_insert(i as u32));
    }
    for face in &mut mesh.faces {
        for v in face.iter_mut() {
            *v = weld[*v as usize];
        }
    }
    mesh.faces
        .retain(|&[a, b, c]| a != b && b != c && a != c);
    mesh.compact();
}

/// Keep only the largest connected component of the surface.
///
/// Components are compared by triangle count; a tie keeps the one
/// containing the lowest vertex index. Vertices outside the winner
/// are compacted away.
pub(crate) fn keep_largest_component(mesh: &mut SurfaceMesh) {
    if mesh.faces.is_empty() {
        return;
    }
    // union by index so a root is its component's lowest vertex
    let mut parent: Vec<u32> = (0..mesh.vertices.len() as u32).collect();
    fn find(parent: &mut [u32], mut i: u32) -> u32 {
        while parent[i as usize] != i {
            parent[i as usize] = parent[parent[i as usize] as usize];
            i = parent[i as usize];
        }
        i
    }
    for &[a, b, c] in &mesh.faces {
        for (u, v) in [(a, b), (b, c)] {
            let ru = find(&mut parent, u);
            let rv = find(&mut parent, v);
            if ru != rv {
                parent[ru.max(rv) as usize] = ru.min(rv);
            }
        }
    }
    let mut counts: HashMap<u32, usize> = HashMap::new();
    let roots: Vec<u32> = mesh
        .faces
        .iter()
        .map(|face| find(&mut parent, face[0]))
        .collect();
    for &root in &roots {
        *counts.entry(root).or_insert(0) += 1;
    }
    let winner = counts
        .iter()
        .max_by_key(|&(&root, &count)| (count, core::cmp::Reverse(root)))
        .map(|(&root, _)| root);
    if let Some(winner) = winner {
        let mut keep = roots.iter().map(|&r| r == winner);
        mesh.faces.retain(|_| keep.next().unwrap_or(false));
        mesh.compact();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point3, Vector3};

    fn mesh_from(positions: &[[f64; 3]], faces: &[[u32; 3]]) -> SurfaceMesh {
        SurfaceMesh {
            vertices: positions
                .iter()
                .map(|p| Point3::new(p[0], p[1], p[2]))
                .collect(),
            normals: vec![Vector3::z(); positions.len()],
            values: vec![1.0; positions.len()],
            faces: faces.to_vec(),
        }
    }

    #[test]
    fn weld_drops_collapsed_faces() {
        let mut mesh = mesh_from(
            &[[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
            &[[0, 1, 2]],
        );
        remove_degenerate_faces(&mut mesh);
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
    }

    #[test]
    fn weld_merges_duplicates_and_keeps_real_faces() {
        // the second triangle repeats two positions of the first
        let mut mesh = mesh_from(
            &[
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [1.0, 1.0, 0.0],
            ],
            &[[0, 1, 2], [3, 4, 5]],
        );
        remove_degenerate_faces(&mut mesh);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.faces[1], [1, 2, 3]);
    }

    #[test]
    fn largest_component_wins_by_triangle_count() {
        let mut mesh = mesh_from(
            &[
                // one lone triangle
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                // a two-triangle strip elsewhere
                [5.0, 0.0, 0.0],
                [6.0, 0.0, 0.0],
                [5.0, 1.0, 0.0],
                [6.0, 1.0, 0.0],
            ],
            &[[0, 1, 2], [3, 4, 5], [4, 6, 5]],
        );
        keep_largest_component(&mut mesh);
        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.vertex_count(), 4);
    }

    #[test]
    fn component_tie_keeps_the_lowest_vertex() {
        let mut mesh = mesh_from(
            &[
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [5.0, 0.0, 0.0],
                [6.0, 0.0, 0.0],
                [5.0, 1.0, 0.0],
            ],
            &[[3, 4, 5], [0, 1, 2]],
        );
        keep_largest_component(&mut mesh);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.vertices[0], Point3::new(0.0, 0.0, 0.0));
    }
}
