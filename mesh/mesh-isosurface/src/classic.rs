//! Classic 15-case cell triangulation.
//!
//! The original marching cubes dispatch: one fixed tiling per sign
//! pattern, no ambiguity resolution. Cheaper than the consistent
//! variant, but an ambiguous face shared by two cells can be tiled
//! incompatibly from the two sides, leaving a hole. Kept for parity
//! with other implementations and for fields known to be free of
//! ambiguous cells.

use crate::builder::{for_each_cell, MeshBuilder};
use crate::mesh::SurfaceMesh;
use crate::tables::{CLASSIC_EDGE_TABLE, CLASSIC_TRI_TABLE};
use crate::volume::ScalarVolume;

pub(crate) fn extract(
    volume: &ScalarVolume,
    level: f64,
    step: usize,
    mask: Option<&[bool]>,
) -> SurfaceMesh {
    let mut builder = MeshBuilder::new(volume, step);
    for_each_cell(volume, step, mask, |cell, vals| {
        let mut rel = [0.0f64; 8];
        let mut pattern = 0u8;
        for i in 0..8 {
            rel[i] = vals[i] - level;
            if rel[i] >= 0.0 {
                pattern |= 1 << i;
            }
        }
        // the tables' bit convention marks corners below the level
        let index = (pattern ^ 0xFF) as usize;
        if CLASSIC_EDGE_TABLE[index] == 0 {
            return;
        }
        let row = &CLASSIC_TRI_TABLE[index];
        let mut k = 0;
        while row[k] != 0xFF {
            let ia = builder.edge_vertex(cell, &rel, row[k]);
            let ib = builder.edge_vertex(cell, &rel, row[k + 1]);
            let ic = builder.edge_vertex(cell, &rel, row[k + 2]);
            builder.triangle(ia, ib, ic);
            k += 3;
        }
    });
    builder.mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn step_function_yields_one_quad() {
        let volume = ScalarVolume::from_fn((2, 2, 2), |_, _, z| z as f64).unwrap();
        let mesh = extract(&volume, 0.5, 1, None);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 2);
        for v in &mesh.vertices {
            assert_relative_eq!(v.z, 0.5);
        }
        for &[a, b, c] in &mesh.faces {
            let pa = mesh.vertices[a as usize];
            let pb = mesh.vertices[b as usize];
            let pc = mesh.vertices[c as usize];
            assert!((pb - pa).cross(&(pc - pa)).z < 0.0);
        }
    }

    #[test]
    fn sphere_is_closed_with_genus_zero() {
        let n = 11;
        let c = (n - 1) as f64 / 2.0;
        let volume = ScalarVolume::from_fn((n, n, n), |x, y, z| {
            let dx = x as f64 - c;
            let dy = y as f64 - c;
            let dz = z as f64 - c;
            4.0 - (dx * dx + dy * dy + dz * dz).sqrt()
        })
        .unwrap();
        let mesh = extract(&volume, 0.0, 1, None);

        let mut half = hashbrown::HashMap::new();
        let mut edges = hashbrown::HashSet::new();
        for &[a, b, c] in &mesh.faces {
            for (u, v) in [(a, b), (b, c), (c, a)] {
                *half.entry((u, v)).or_insert(0u32) += 1;
                edges.insert((u.min(v), u.max(v)));
            }
        }
        assert!(half
            .iter()
            .all(|(&(u, v), &n)| n == 1 && half.get(&(v, u)) == Some(&1)));
        let euler =
            mesh.vertex_count() as i64 - edges.len() as i64 + mesh.face_count() as i64;
        assert_eq!(euler, 2);
    }
}
