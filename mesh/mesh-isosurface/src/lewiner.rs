//! Topologically consistent cell triangulation.
//!
//! For each cell the 8-bit corner sign pattern selects a case entry.
//! Ambiguous faces are resolved with the bilinear saddle test, and the
//! resulting outcome bits select a tiling combination. Combinations
//! whose face outcomes admit a tunnel through the cell interior carry
//! an alternate tiling; the exact interior connectivity test decides
//! at runtime which of the two matches the trilinear field.

use crate::builder::{crossed_edges, for_each_cell, Cell, MeshBuilder};
use crate::cube::{body_components, face_connected};
use crate::mesh::SurfaceMesh;
use crate::tables::{
    CASES, CENTER_VERTEX, COMBOS, JOIN_INSIDE, JOIN_OUTSIDE, NO_TILING, TILING_SPANS, TILING_TRIS,
};
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
        if pattern == 0 || pattern == 0xFF {
            return;
        }
        triangulate_cell(&mut builder, cell, pattern, &rel);
    });
    builder.mesh
}

fn triangulate_cell(builder: &mut MeshBuilder<'_>, cell: Cell, pattern: u8, rel: &[f64; 8]) {
    let case = &CASES[pattern as usize];

    let mut bits = 0usize;
    for k in 0..case.face_count as usize {
        if face_connected(rel, case.faces[k] as u8) {
            bits |= 1 << k;
        }
    }
    let combo = &COMBOS[case.combo_offset as usize + bits];

    let mut tiling = combo.disk;
    if combo.tunnel != NO_TILING && tunnel_applies(combo.sides, rel) {
        tiling = combo.tunnel;
    }

    let (offset, len) = TILING_SPANS[tiling as usize];
    let triangles = &TILING_TRIS[offset as usize..offset as usize + len as usize];
    if triangles.is_empty() {
        return;
    }

    let crossed = crossed_edges(pattern);
    for &[a, b, c] in triangles {
        let ia = tiling_vertex(builder, cell, rel, crossed, a);
        let ib = tiling_vertex(builder, cell, rel, crossed, b);
        let ic = tiling_vertex(builder, cell, rel, crossed, c);
        builder.triangle(ia, ib, ic);
    }
}

/// Whether the interior of the trilinear field joins the sheets that
/// the face outcomes leave separated.
///
/// `sides` records which side of the level the candidate tunnel runs
/// through. The inside region is tested inclusively and the outside
/// strictly, so the level set itself consistently counts as inside.
fn tunnel_applies(sides: u8, rel: &[f64; 8]) -> bool {
    if sides & JOIN_INSIDE != 0 && body_components(rel, false) == 1 {
        return true;
    }
    if sides & JOIN_OUTSIDE != 0 {
        let negated: [f64; 8] = core::array::from_fn(|i| -rel[i]);
        if body_components(&negated, true) == 1 {
            return true;
        }
    }
    false
}

fn tiling_vertex(
    builder: &mut MeshBuilder<'_>,
    cell: Cell,
    rel: &[f64; 8],
    crossed: u16,
    edge: u8,
) -> u32 {
    if edge == CENTER_VERTEX {
        builder.center_vertex(cell, rel, crossed)
    } else {
        builder.edge_vertex(cell, rel, edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn step_function_yields_one_quad() {
        // corners 4..7 inside at level 0.5: a single quad at z = 0.5
        let volume = ScalarVolume::from_fn((2, 2, 2), |_, _, z| z as f64).unwrap();
        let mesh = extract(&volume, 0.5, 1, None);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 2);
        for v in &mesh.vertices {
            assert_relative_eq!(v.z, 0.5);
        }
        for n in &mesh.normals {
            assert_relative_eq!(n.z, -1.0);
            assert_relative_eq!(n.x, 0.0);
            assert_relative_eq!(n.y, 0.0);
        }
    }

    #[test]
    fn quad_winding_faces_away_from_the_inside() {
        let volume = ScalarVolume::from_fn((2, 2, 2), |_, _, z| z as f64).unwrap();
        let mesh = extract(&volume, 0.5, 1, None);
        for &[a, b, c] in &mesh.faces {
            let pa = mesh.vertices[a as usize];
            let pb = mesh.vertices[b as usize];
            let pc = mesh.vertices[c as usize];
            let n = (pb - pa).cross(&(pc - pa));
            // inside is above the plane, so faces point down
            assert!(n.z < 0.0);
        }
    }

    #[test]
    fn corner_exactly_on_the_level_is_inside() {
        // corner 0 sits on the level; all three crossings collapse
        // onto it, leaving a zero-area triangle
        let mut volume_values = vec![-1.0; 8];
        volume_values[0] = 0.0;
        let volume = ScalarVolume::from_values((2, 2, 2), volume_values).unwrap();
        let mesh = extract(&volume, 0.0, 1, None);
        assert_eq!(mesh.face_count(), 1);
        for v in &mesh.vertices {
            assert_relative_eq!(v.x + v.y + v.z, 0.0);
        }
    }

    #[test]
    fn single_inside_corner_yields_one_triangle() {
        let mut volume_values = vec![-1.0; 8];
        volume_values[0] = 1.0;
        let volume = ScalarVolume::from_values((2, 2, 2), volume_values).unwrap();
        let mesh = extract(&volume, 0.0, 1, None);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
        for v in &mesh.vertices {
            // crossings at the midpoint of each incident edge
            assert_relative_eq!(v.x + v.y + v.z, 0.5);
        }
    }

    #[test]
    fn extraction_is_deterministic() {
        let volume = sphere_volume(9, 3.0);
        let a = extract(&volume, 0.0, 1, None);
        let b = extract(&volume, 0.0, 1, None);
        assert_eq!(a.vertices, b.vertices);
        assert_eq!(a.faces, b.faces);
    }

    fn sphere_volume(n: usize, radius: f64) -> ScalarVolume {
        let c = (n - 1) as f64 / 2.0;
        ScalarVolume::from_fn((n, n, n), |x, y, z| {
            let dx = x as f64 - c;
            let dy = y as f64 - c;
            let dz = z as f64 - c;
            radius - (dx * dx + dy * dy + dz * dz).sqrt()
        })
        .unwrap()
    }

    fn euler_characteristic(mesh: &SurfaceMesh) -> i64 {
        let mut edges = hashbrown::HashSet::new();
        for &[a, b, c] in &mesh.faces {
            for (u, v) in [(a, b), (b, c), (c, a)] {
                edges.insert((u.min(v), u.max(v)));
            }
        }
        mesh.vertex_count() as i64 - edges.len() as i64 + mesh.face_count() as i64
    }

    fn is_closed(mesh: &SurfaceMesh) -> bool {
        let mut half = hashbrown::HashMap::new();
        for &[a, b, c] in &mesh.faces {
            for (u, v) in [(a, b), (b, c), (c, a)] {
                *half.entry((u, v)).or_insert(0u32) += 1;
            }
        }
        half.iter()
            .all(|(&(u, v), &n)| n == 1 && half.get(&(v, u)) == Some(&1))
    }

    #[test]
    fn sphere_is_a_closed_genus_zero_surface() {
        let volume = sphere_volume(11, 4.0);
        let mesh = extract(&volume, 0.0, 1, None);
        assert!(is_closed(&mesh));
        assert_eq!(euler_characteristic(&mesh), 2);
    }

    #[test]
    fn torus_has_euler_characteristic_zero() {
        let n = 17;
        let c = (n - 1) as f64 / 2.0;
        let (major, minor) = (4.5, 2.0);
        let volume = ScalarVolume::from_fn((n, n, n), |x, y, z| {
            let dx = x as f64 - c;
            let dy = y as f64 - c;
            let dz = z as f64 - c;
            let ring = (dx * dx + dy * dy).sqrt() - major;
            minor - (ring * ring + dz * dz).sqrt()
        })
        .unwrap();
        let mesh = extract(&volume, 0.0, 1, None);
        assert!(is_closed(&mesh));
        assert_eq!(euler_characteristic(&mesh), 0);
    }

    #[test]
    fn random_volumes_stay_watertight() {
        // xorshift so the case mix is broad but reproducible
        let mut state = 0x243F_6A88_85A3_08D3u64;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 11) as f64 / (1u64 << 53) as f64 - 0.5
        };
        for _ in 0..20 {
            let n = 6;
            let mut values = vec![0.0; n * n * n];
            for (i, v) in values.iter_mut().enumerate() {
                let x = i % n;
                let y = (i / n) % n;
                let z = i / (n * n);
                let border =
                    x == 0 || y == 0 || z == 0 || x == n - 1 || y == n - 1 || z == n - 1;
                *v = if border { -1.0 } else { next() };
            }
            let volume = ScalarVolume::from_values((n, n, n), values).unwrap();
            let mesh = extract(&volume, 0.0, 1, None);
            assert!(is_closed(&mesh));
            assert_eq!(euler_characteristic(&mesh) % 2, 0);
        }
    }
}
