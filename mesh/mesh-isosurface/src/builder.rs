//! Cell traversal and the deduplicating vertex cache.
//!
//! Both triangulation schemes share this machinery: a row-major walk
//! over the cells of the sampling lattice and a [`MeshBuilder`] that
//! creates at most one mesh vertex per canonical edge key, so adjacent
//! cells referencing the same physical edge reuse the same vertex.

use hashbrown::HashMap;
use nalgebra::{Point3, Vector3};

use crate::cube::{edge_geometry, VertexKey};
use crate::mesh::SurfaceMesh;
use crate::tables::{CORNER_OFFSETS, EDGE_ENDPOINTS};
use crate::volume::ScalarVolume;

/// Origin of one cell, in sample coordinates of its lowest corner.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cell {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

/// Walk every cell whose eight corners are in bounds, at the given
/// stride, in x-fastest row-major order.
///
/// With a mask, a cell is visited only if all eight corner samples are
/// marked included. The traversal order is fixed so vertex and
/// triangle ordering in the output is deterministic.
pub(crate) fn for_each_cell<F>(volume: &ScalarVolume, step: usize, mask: Option<&[bool]>, mut f: F)
where
    F: FnMut(Cell, &[f64; 8]),
{
    let (nx, ny, nz) = volume.dimensions();
    if step >= nx || step >= ny || step >= nz {
        return;
    }
    for iz in (0..nz - step).step_by(step) {
        for iy in (0..ny - step).step_by(step) {
            for ix in (0..nx - step).step_by(step) {
                let cell = Cell {
                    x: ix,
                    y: iy,
                    z: iz,
                };
                if let Some(mask) = mask {
                    let excluded = CORNER_OFFSETS.iter().any(|&(dx, dy, dz)| {
                        !mask[volume.index(ix + dx * step, iy + dy * step, iz + dz * step)]
                    });
                    if excluded {
                        continue;
                    }
                }
                let vals = core::array::from_fn(|i| {
                    let (dx, dy, dz) = CORNER_OFFSETS[i];
                    volume.value(ix + dx * step, iy + dy * step, iz + dz * step)
                });
                f(cell, &vals);
            }
        }
    }
}

/// Accumulates the output mesh during traversal.
///
/// Vertices are created lazily the first time a triangle references
/// their edge and cached under a canonical [`VertexKey`], which keeps
/// the mesh watertight across cell boundaries.
pub(crate) struct MeshBuilder<'a> {
    volume: &'a ScalarVolume,
    step: usize,
    cache: HashMap<VertexKey, u32>,
    pub(crate) mesh: SurfaceMesh,
}

impl<'a> MeshBuilder<'a> {
    pub(crate) fn new(volume: &'a ScalarVolume, step: usize) -> Self {
        Self {
            volume,
            step,
            cache: HashMap::new(),
            mesh: SurfaceMesh::new(),
        }
    }

    /// Vertex index for the level crossing on a cell edge.
    ///
    /// `rel` holds the corner values minus the level. The edge must
    /// actually be crossed (its endpoint signs differ).
    pub(crate) fn edge_vertex(&mut self, cell: Cell, rel: &[f64; 8], edge: u8) -> u32 {
        let (axis, low, a_is_low) = edge_geometry(edge);
        let step = self.step;
        let gx = cell.x + low.0 * step;
        let gy = cell.y + low.1 * step;
        let gz = cell.z + low.2 * step;
        let key = VertexKey::Edge {
            axis,
            x: gx,
            y: gy,
            z: gz,
        };
        if let Some(&index) = self.cache.get(&key) {
            return index;
        }

        let (a, b) = EDGE_ENDPOINTS[edge as usize];
        let (v_low, v_high) = if a_is_low {
            (rel[a as usize], rel[b as usize])
        } else {
            (rel[b as usize], rel[a as usize])
        };
        // signs differ on a crossed edge, so the denominator is nonzero
        let t = v_low / (v_low - v_high);

        let mut position = Point3::new(gx as f64, gy as f64, gz as f64);
        position[axis as usize] += t * step as f64;

        let mut high = (gx, gy, gz);
        match axis {
            0 => high.0 += step,
            1 => high.1 += step,
            _ => high.2 += step,
        }
        let g_low = self.volume.descent_direction(gx, gy, gz, step);
        let g_high = self.volume.descent_direction(high.0, high.1, high.2, step);
        let mut normal: Vector3<f64> = g_low.lerp(&g_high, t);
        let len = normal.norm();
        if len > 0.0 {
            normal /= len;
        }

        let value = (1.0 - t) * v_low.abs() + t * v_high.abs();

        self.push(key, position, normal, value)
    }

    /// Vertex index for the cell's center vertex.
    ///
    /// Placed at the mean of the cell's edge crossings (`crossed` is
    /// the 12-bit mask of crossed edges), with the mean of their
    /// normals and values. Belongs to this cell alone.
    pub(crate) fn center_vertex(&mut self, cell: Cell, rel: &[f64; 8], crossed: u16) -> u32 {
        let key = VertexKey::Center {
            x: cell.x,
            y: cell.y,
            z: cell.z,
        };
        if let Some(&index) = self.cache.get(&key) {
            return index;
        }

        let mut position = Vector3::zeros();
        let mut normal = Vector3::zeros();
        let mut value = 0.0;
        let mut count = 0.0;
        for edge in 0..12u8 {
            if crossed & (1 << edge) == 0 {
                continue;
            }
            let index = self.edge_vertex(cell, rel, edge) as usize;
            position += self.mesh.vertices[index].coords;
            normal += self.mesh.normals[index];
            value += self.mesh.values[index];
            count += 1.0;
        }
        debug_assert!(count > 0.0);
        position /= count;
        value /= count;
        let len = normal.norm();
        if len > 0.0 {
            normal /= len;
        }

        self.push(key, Point3::from(position), normal, value)
    }

    /// Append a triangle unless two of its vertices coincide.
    ///
    /// Coincident indices arise when a corner value sits exactly on
    /// the level and two crossings collapse onto it.
    pub(crate) fn triangle(&mut self, a: u32, b: u32, c: u32) {
        if a != b && b != c && a != c {
            self.mesh.faces.push([a, b, c]);
        }
    }

    fn push(&mut self, key: VertexKey, position: Point3<f64>, normal: Vector3<f64>, value: f64) -> u32 {
        let index = self.mesh.vertices.len() as u32;
        self.mesh.vertices.push(position);
        self.mesh.normals.push(normal);
        self.mesh.values.push(value);
        self.cache.insert(key, index);
        index
    }
}

/// Bitmask of the edges crossed by the level, from the sign pattern.
pub(crate) fn crossed_edges(pattern: u8) -> u16 {
    let mut crossed = 0u16;
    for (edge, &(a, b)) in EDGE_ENDPOINTS.iter().enumerate() {
        if (pattern >> a) & 1 != (pattern >> b) & 1 {
            crossed |= 1 << edge;
        }
    }
    crossed
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ramp_volume() -> ScalarVolume {
        // value = z, so the level 0.5 surface is the plane z = 0.5
        ScalarVolume::from_fn((3, 3, 3), |_, _, z| z as f64).unwrap()
    }

    #[test]
    fn traversal_visits_cells_in_row_major_order() {
        let volume = ramp_volume();
        let mut origins = Vec::new();
        for_each_cell(&volume, 1, None, |cell, _| {
            origins.push((cell.x, cell.y, cell.z));
        });
        assert_eq!(origins.len(), 8);
        assert_eq!(origins[0], (0, 0, 0));
        assert_eq!(origins[1], (1, 0, 0));
        assert_eq!(origins[2], (0, 1, 0));
        assert_eq!(origins[7], (1, 1, 1));
    }

    #[test]
    fn traversal_skips_cells_straddling_the_mask() {
        let volume = ramp_volume();
        let mut mask = vec![true; volume.len()];
        mask[volume.index(0, 0, 0)] = false;
        let mut count = 0;
        for_each_cell(&volume, 1, Some(&mask), |_, _| count += 1);
        assert_eq!(count, 7);
    }

    #[test]
    fn stride_two_clips_to_in_bounds_cells() {
        let volume = ScalarVolume::from_fn((5, 5, 4), |_, _, z| z as f64).unwrap();
        let mut origins = Vec::new();
        for_each_cell(&volume, 2, None, |cell, _| {
            origins.push((cell.x, cell.y, cell.z));
        });
        // x and y admit origins 0 and 2, z only 0
        assert_eq!(origins.len(), 4);
        assert!(origins.iter().all(|&(_, _, z)| z == 0));
    }

    #[test]
    fn shared_edges_reuse_vertices() {
        let volume = ramp_volume();
        let mut builder = MeshBuilder::new(&volume, 1);
        let rel: [f64; 8] = core::array::from_fn(|i| {
            let (_, _, dz) = CORNER_OFFSETS[i];
            dz as f64 - 0.5
        });
        // edge 8 of the cell at (1,0,0) and edge 9 of the cell at
        // (0,0,0) are the same physical edge
        let a = builder.edge_vertex(Cell { x: 1, y: 0, z: 0 }, &rel, 8);
        let b = builder.edge_vertex(Cell { x: 0, y: 0, z: 0 }, &rel, 9);
        assert_eq!(a, b);
        assert_eq!(builder.mesh.vertex_count(), 1);
        assert_relative_eq!(builder.mesh.vertices[0].z, 0.5);
    }

    #[test]
    fn edge_vertex_interpolates_position_normal_and_value() {
        let volume = ramp_volume();
        let mut builder = MeshBuilder::new(&volume, 1);
        let rel: [f64; 8] = core::array::from_fn(|i| {
            let (_, _, dz) = CORNER_OFFSETS[i];
            dz as f64 - 0.25
        });
        let index = builder.edge_vertex(Cell { x: 0, y: 0, z: 0 }, &rel, 8) as usize;
        assert_relative_eq!(builder.mesh.vertices[index].z, 0.25);
        // the field increases with z, so the descent direction is -z
        assert_relative_eq!(builder.mesh.normals[index].z, -1.0);
        assert_relative_eq!(builder.mesh.values[index], 0.375);
    }

    #[test]
    fn crossed_edges_matches_the_sign_pattern() {
        // corner 0 inside: its three incident edges are crossed
        assert_eq!(crossed_edges(0b0000_0001), (1 << 0) | (1 << 3) | (1 << 8));
        assert_eq!(crossed_edges(0), 0);
        assert_eq!(crossed_edges(0xFF), 0);
    }
}
