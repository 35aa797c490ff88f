//! Per-cell geometric predicates over the trilinear interpolant.
//!
//! The sign pattern of the eight corner samples does not determine the
//! surface topology inside a cell on its own. Two further predicates
//! disambiguate it:
//!
//! * [`face_connected`] resolves an ambiguous face (alternating corner
//!   signs) by the sign of the bilinear interpolant at its saddle.
//! * [`body_components`] counts connected components of the region
//!   where the trilinear interpolant is non-negative, which decides
//!   whether two face-separated sheets join through the cell interior.
//!
//! Both are exact functions of the corner values, so the extraction is
//! deterministic and neighboring cells always agree on shared faces.

use crate::tables::{CORNER_OFFSETS, EDGE_ENDPOINTS, FACE_CORNERS};

/// Cache key for a deduplicated mesh vertex.
///
/// Edge vertices are keyed by the edge's axis and the global lattice
/// coordinates of its lower endpoint, so the cells on either side of a
/// shared edge resolve to the same vertex. Center vertices belong to a
/// single cell and are keyed by its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum VertexKey {
    Edge {
        axis: u8,
        x: usize,
        y: usize,
        z: usize,
    },
    Center {
        x: usize,
        y: usize,
        z: usize,
    },
}

/// Axis and lower lattice endpoint of a cell edge.
///
/// Returns the axis the edge runs along, the offset of the lower
/// endpoint within the cell, and whether the edge's first listed
/// corner is that lower endpoint.
pub(crate) fn edge_geometry(edge: u8) -> (u8, (usize, usize, usize), bool) {
    let (a, b) = EDGE_ENDPOINTS[edge as usize];
    let ca = CORNER_OFFSETS[a as usize];
    let cb = CORNER_OFFSETS[b as usize];
    let axis = if ca.0 != cb.0 {
        0
    } else if ca.1 != cb.1 {
        1
    } else {
        2
    };
    let a_is_low = match axis {
        0 => ca.0 < cb.0,
        1 => ca.1 < cb.1,
        _ => ca.2 < cb.2,
    };
    (axis, if a_is_low { ca } else { cb }, a_is_low)
}

/// Whether the inside-corner diagonal of face `f` is connected.
///
/// On an ambiguous face the two inside corners sit on one diagonal and
/// the two outside corners on the other. The bilinear interpolant's
/// saddle value has the sign of `A*C - B*D` where `A, C` are the
/// inside pair; the pair is connected across the face iff the saddle
/// is on the inside. A saddle exactly on the level counts as
/// connected, matching the inclusive corner classification.
pub(crate) fn face_connected(rel: &[f64; 8], f: u8) -> bool {
    let [p0, p1, p2, p3] = FACE_CORNERS[f as usize];
    let (a, c, b, d) = if rel[p0 as usize] >= 0.0 {
        (
            rel[p0 as usize],
            rel[p2 as usize],
            rel[p1 as usize],
            rel[p3 as usize],
        )
    } else {
        (
            rel[p1 as usize],
            rel[p3 as usize],
            rel[p0 as usize],
            rel[p2 as usize],
        )
    };
    a * c - b * d >= 0.0
}

/// Vertical corner tracks in cyclic order around the sweep section.
const TRACKS: [(usize, usize); 4] = [(0, 4), (1, 5), (2, 6), (3, 7)];

/// Number of connected components of the inside region of the cell.
///
/// Sweeps sections perpendicular to z. Each section is a bilinear
/// square whose corner values are linear in the sweep parameter, so
/// corner sign changes and the roots of the saddle quadratic give
/// finitely many event times, and the section connectivity is constant
/// between consecutive events. Every component of the inside region of
/// a bilinear square touches an inside corner (multilinear functions
/// take their extrema at corners), so union-find over the four corner
/// tracks captures the full connectivity.
///
/// `strict` counts components of the strictly positive region instead,
/// used on the negated field so the level set itself stays attached to
/// the inside.
pub(crate) fn body_components(rel: &[f64; 8], strict: bool) -> u32 {
    let lo: [f64; 4] = core::array::from_fn(|i| rel[TRACKS[i].0]);
    let hi: [f64; 4] = core::array::from_fn(|i| rel[TRACKS[i].1]);

    // saddle quadratic q(t) = A(t)*C(t) - B(t)*D(t)
    let a2 = (hi[0] - lo[0]) * (hi[2] - lo[2]) - (hi[1] - lo[1]) * (hi[3] - lo[3]);
    let a1 = lo[0] * (hi[2] - lo[2]) + lo[2] * (hi[0] - lo[0])
        - lo[1] * (hi[3] - lo[3])
        - lo[3] * (hi[1] - lo[1]);
    let a0 = lo[0] * lo[2] - lo[1] * lo[3];

    let mut events: Vec<f64> = vec![0.0, 1.0];
    for i in 0..4 {
        let d = hi[i] - lo[i];
        if d != 0.0 {
            let t = -lo[i] / d;
            if t > 0.0 && t < 1.0 {
                events.push(t);
            }
        }
    }
    if a2 != 0.0 {
        let disc = a1 * a1 - 4.0 * a2 * a0;
        if disc > 0.0 {
            let r = disc.sqrt();
            for t in [(-a1 - r) / (2.0 * a2), (-a1 + r) / (2.0 * a2)] {
                if t > 0.0 && t < 1.0 {
                    events.push(t);
                }
            }
        }
    } else if a1 != 0.0 {
        let t = -a0 / a1;
        if t > 0.0 && t < 1.0 {
            events.push(t);
        }
    }
    events.sort_unstable_by(f64::total_cmp);
    events.dedup();

    let mut parent: [usize; 4] = [0, 1, 2, 3];
    let mut seen = [false; 4];

    fn find(parent: &mut [usize; 4], mut i: usize) -> usize {
        while parent[i] != i {
            parent[i] = parent[parent[i]];
            i = parent[i];
        }
        i
    }

    let section = |t: f64, parent: &mut [usize; 4], seen: &mut [bool; 4]| {
        let inside = |v: f64| if strict { v > 0.0 } else { v >= 0.0 };
        let mut pos = [false; 4];
        for i in 0..4 {
            let v = lo[i] + (hi[i] - lo[i]) * t;
            pos[i] = inside(v);
            seen[i] |= pos[i];
        }
        for i in 0..4 {
            let j = (i + 1) & 3;
            if pos[i] && pos[j] {
                let r = find(parent, i);
                parent[r] = find(parent, j);
            }
        }
        let q = (a2 * t + a1) * t + a0;
        if pos[0] && pos[2] && (q > 0.0 || (q == 0.0 && !strict)) {
            let r = find(parent, 0);
            parent[r] = find(parent, 2);
        }
        if pos[1] && pos[3] && q < 0.0 {
            let r = find(parent, 1);
            parent[r] = find(parent, 3);
        }
    };

    // slab midpoints between events, plus the endpoint sections for
    // tracks inside only at t = 0 or t = 1
    for k in 0..events.len() - 1 {
        section(0.5 * (events[k] + events[k + 1]), &mut parent, &mut seen);
    }
    section(0.0, &mut parent, &mut seen);
    section(1.0, &mut parent, &mut seen);

    let mut roots = [false; 4];
    for i in 0..4 {
        if seen[i] {
            roots[find(&mut parent, i)] = true;
        }
    }
    roots.iter().filter(|&&r| r).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_geometry_reports_axis_and_low_corner() {
        assert_eq!(edge_geometry(0), (0, (0, 0, 0), true));
        // edge 6 runs from corner 6 = (1,1,1) to corner 7 = (0,1,1)
        assert_eq!(edge_geometry(6), (0, (0, 1, 1), false));
        assert_eq!(edge_geometry(11), (2, (0, 1, 0), true));
    }

    #[test]
    fn face_test_follows_saddle_sign() {
        // face 4 has corners 0, 3, 2, 1; make 0 and 2 inside
        let mut rel = [-1.0; 8];
        rel[0] = 2.0;
        rel[2] = 2.0;
        assert!(face_connected(&rel, 4));
        rel[0] = 1.0;
        rel[2] = 1.0;
        rel[1] = -3.0;
        rel[3] = -3.0;
        assert!(!face_connected(&rel, 4));
    }

    #[test]
    fn face_test_treats_exact_saddle_as_connected() {
        let mut rel = [-1.0; 8];
        rel[0] = 1.0;
        rel[2] = 1.0;
        // A*C - B*D = 1 - 1 = 0
        assert!(face_connected(&rel, 4));
    }

    #[test]
    fn uniform_fields_have_trivial_connectivity() {
        assert_eq!(body_components(&[1.0; 8], false), 1);
        assert_eq!(body_components(&[-1.0; 8], false), 0);
        assert_eq!(body_components(&[-1.0; 8], true), 0);
    }

    #[test]
    fn opposite_corners_separate_or_join_by_magnitude() {
        // corners 0 and 6 inside, weak: two isolated caps
        let mut rel = [-1.0; 8];
        rel[0] = 1.0;
        rel[6] = 1.0;
        assert_eq!(body_components(&rel, false), 2);
        // strong values pull the diagonal above the level
        rel[0] = 10.0;
        rel[6] = 10.0;
        assert_eq!(body_components(&rel, false), 1);
    }

    #[test]
    fn strict_mode_excludes_the_level_set() {
        // one corner exactly on the level
        let mut rel = [-1.0; 8];
        rel[0] = 0.0;
        assert_eq!(body_components(&rel, false), 1);
        assert_eq!(body_components(&rel, true), 0);
    }

    #[test]
    fn complementary_counts_for_a_checkerboard_pattern() {
        // weak alternating corners: four caps inside, one body outside
        let rel = [-2.0, 1.0, -2.0, 1.0, 1.0, -2.0, 1.0, -2.0];
        assert_eq!(body_components(&rel, false), 4);
        let neg = [2.0, -1.0, 2.0, -1.0, -1.0, 2.0, -1.0, 2.0];
        assert_eq!(body_components(&neg, true), 1);
    }
}
