//! Lookup tables for topology-resolved marching cubes.
//!
//! The 256 corner-sign patterns are grouped into the 15 classic
//! equivalence classes (under rotation and complement). Ambiguous
//! patterns carry one tiling per face-test outcome, plus an alternate
//! tiling used when the interior test finds a body tunnel.
//!
//! Tilings index the 12 cube edges (see [`EDGE_ENDPOINTS`]); index 12
//! is the extra cube-center vertex used when a boundary loop cannot be
//! triangulated without laying a diagonal into a shared face plane
//! (the neighbouring cell could emit the same segment, pinching the
//! surface into a non-manifold edge).
//!
//! The tables are machine-generated from the cube geometry below and
//! checked by the consistency tests at the bottom of this file. Do not
//! edit the data sections by hand.

/// One entry per corner-sign pattern.
#[derive(Debug)]
pub(crate) struct CaseEntry {
    /// Equivalence class 0..=14 of the pattern.
    #[allow(dead_code)]
    pub class: u8,
    /// Ambiguous face indices, `-1` padded.
    pub faces: [i8; 6],
    /// Number of ambiguous faces (0..=6).
    pub face_count: u8,
    /// Index of the first face-test combination in [`COMBOS`].
    pub combo_offset: u16,
}

/// One entry per (pattern, face-test outcome) combination.
#[derive(Debug)]
pub(crate) struct ComboEntry {
    /// Tiling span used when no body tunnel is present.
    pub disk: u16,
    /// Alternate tiling span, or [`NO_TILING`] when the patch admits
    /// only one topology.
    pub tunnel: u16,
    /// Which side of the surface could join through the cube body.
    pub sides: u8,
}

/// Sentinel for combinations without a tunnel alternative.
pub(crate) const NO_TILING: u16 = u16::MAX;

/// Tiling vertex index naming the cube-center vertex.
pub(crate) const CENTER_VERTEX: u8 = 12;

/// The inside region (two components after face resolution) may join.
pub(crate) const JOIN_INSIDE: u8 = 1;
/// The outside region may join, pinching the inside into a ring.
pub(crate) const JOIN_OUTSIDE: u8 = 2;

/// Relative lattice offsets of the 8 cube corners.
///
/// Corners 0..=3 ring the z=0 face counter-clockwise, 4..=7 the z=1
/// face above them.
pub(crate) const CORNER_OFFSETS: [(usize, usize, usize); 8] = [
    (0, 0, 0), (1, 0, 0), (1, 1, 0), (0, 1, 0), (0, 0, 1), (1, 0, 1), (1, 1, 1), (0, 1, 1),
];

/// Corner pair of each of the 12 cube edges.
pub(crate) const EDGE_ENDPOINTS: [(u8, u8); 12] = [
    (0, 1), (1, 2), (2, 3), (3, 0), (4, 5), (5, 6), (6, 7), (7, 4), (0, 4), (1, 5), (2, 6), (3, 7),
];

/// Corners of each cube face, counter-clockwise seen from outside.
pub(crate) const FACE_CORNERS: [[u8; 4]; 6] = [
    [0, 1, 5, 4], [1, 2, 6, 5], [2, 3, 7, 6], [3, 0, 4, 7], [0, 3, 2, 1], [4, 5, 6, 7],
];

pub(crate) const CASES: [CaseEntry; 256] = [
    CaseEntry { class: 0, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 0 },
    CaseEntry { class: 1, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 1 },
    CaseEntry { class: 1, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 2 },
    CaseEntry { class: 2, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 3 },
    CaseEntry { class: 1, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 4 },
    CaseEntry { class: 3, faces: [4, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 5 },
    CaseEntry { class: 2, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 7 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 8 },
    CaseEntry { class: 1, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 9 },
    CaseEntry { class: 2, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 10 },
    CaseEntry { class: 3, faces: [4, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 11 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 13 },
    CaseEntry { class: 2, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 14 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 15 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 16 },
    CaseEntry { class: 8, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 17 },
    CaseEntry { class: 1, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 18 },
    CaseEntry { class: 2, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 19 },
    CaseEntry { class: 3, faces: [0, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 20 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 22 },
    CaseEntry { class: 4, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 23 },
    CaseEntry { class: 6, faces: [4, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 24 },
    CaseEntry { class: 6, faces: [0, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 26 },
    CaseEntry { class: 11, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 28 },
    CaseEntry { class: 3, faces: [3, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 29 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 31 },
    CaseEntry { class: 7, faces: [0, 3, 4, -1, -1, -1], face_count: 3, combo_offset: 32 },
    CaseEntry { class: 9, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 40 },
    CaseEntry { class: 6, faces: [3, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 41 },
    CaseEntry { class: 14, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 43 },
    CaseEntry { class: 12, faces: [0, 3, -1, -1, -1, -1], face_count: 2, combo_offset: 44 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 48 },
    CaseEntry { class: 1, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 49 },
    CaseEntry { class: 3, faces: [0, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 50 },
    CaseEntry { class: 2, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 52 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 53 },
    CaseEntry { class: 3, faces: [1, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 54 },
    CaseEntry { class: 7, faces: [0, 1, 4, -1, -1, -1], face_count: 3, combo_offset: 56 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 64 },
    CaseEntry { class: 9, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 65 },
    CaseEntry { class: 4, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 66 },
    CaseEntry { class: 6, faces: [0, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 67 },
    CaseEntry { class: 6, faces: [4, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 69 },
    CaseEntry { class: 14, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 71 },
    CaseEntry { class: 6, faces: [1, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 72 },
    CaseEntry { class: 12, faces: [0, 1, -1, -1, -1, -1], face_count: 2, combo_offset: 74 },
    CaseEntry { class: 11, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 78 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 79 },
    CaseEntry { class: 2, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 80 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 81 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 82 },
    CaseEntry { class: 8, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 83 },
    CaseEntry { class: 6, faces: [1, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 84 },
    CaseEntry { class: 12, faces: [1, 4, -1, -1, -1, -1], face_count: 2, combo_offset: 86 },
    CaseEntry { class: 14, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 90 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 91 },
    CaseEntry { class: 6, faces: [3, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 92 },
    CaseEntry { class: 11, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 94 },
    CaseEntry { class: 12, faces: [3, 4, -1, -1, -1, -1], face_count: 2, combo_offset: 95 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 99 },
    CaseEntry { class: 10, faces: [1, 3, -1, -1, -1, -1], face_count: 2, combo_offset: 100 },
    CaseEntry { class: 6, faces: [1, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 104 },
    CaseEntry { class: 6, faces: [3, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 106 },
    CaseEntry { class: 2, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 108 },
    CaseEntry { class: 1, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 109 },
    CaseEntry { class: 4, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 110 },
    CaseEntry { class: 3, faces: [1, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 111 },
    CaseEntry { class: 6, faces: [1, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 113 },
    CaseEntry { class: 2, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 115 },
    CaseEntry { class: 6, faces: [4, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 116 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 118 },
    CaseEntry { class: 14, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 119 },
    CaseEntry { class: 3, faces: [2, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 120 },
    CaseEntry { class: 6, faces: [2, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 122 },
    CaseEntry { class: 7, faces: [1, 2, 4, -1, -1, -1], face_count: 3, combo_offset: 124 },
    CaseEntry { class: 12, faces: [1, 2, -1, -1, -1, -1], face_count: 2, combo_offset: 132 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 136 },
    CaseEntry { class: 11, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 137 },
    CaseEntry { class: 9, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 138 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 139 },
    CaseEntry { class: 3, faces: [5, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 140 },
    CaseEntry { class: 6, faces: [5, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 142 },
    CaseEntry { class: 7, faces: [0, 1, 5, -1, -1, -1], face_count: 3, combo_offset: 144 },
    CaseEntry { class: 12, faces: [1, 5, -1, -1, -1, -1], face_count: 2, combo_offset: 152 },
    CaseEntry { class: 6, faces: [5, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 156 },
    CaseEntry { class: 10, faces: [4, 5, -1, -1, -1, -1], face_count: 2, combo_offset: 158 },
    CaseEntry { class: 12, faces: [0, 5, -1, -1, -1, -1], face_count: 2, combo_offset: 162 },
    CaseEntry { class: 6, faces: [5, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 166 },
    CaseEntry { class: 7, faces: [2, 3, 5, -1, -1, -1], face_count: 3, combo_offset: 168 },
    CaseEntry { class: 12, faces: [2, 5, -1, -1, -1, -1], face_count: 2, combo_offset: 176 },
    CaseEntry { class: 13, faces: [0, 1, 2, 3, 4, 5], face_count: 6, combo_offset: 180 },
    CaseEntry { class: 7, faces: [1, 2, 5, -1, -1, -1], face_count: 3, combo_offset: 244 },
    CaseEntry { class: 12, faces: [3, 5, -1, -1, -1, -1], face_count: 2, combo_offset: 252 },
    CaseEntry { class: 6, faces: [5, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 256 },
    CaseEntry { class: 7, faces: [0, 3, 5, -1, -1, -1], face_count: 3, combo_offset: 258 },
    CaseEntry { class: 3, faces: [5, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 266 },
    CaseEntry { class: 2, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 268 },
    CaseEntry { class: 6, faces: [0, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 269 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 271 },
    CaseEntry { class: 11, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 272 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 273 },
    CaseEntry { class: 12, faces: [0, 4, -1, -1, -1, -1], face_count: 2, combo_offset: 274 },
    CaseEntry { class: 8, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 278 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 279 },
    CaseEntry { class: 6, faces: [2, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 280 },
    CaseEntry { class: 10, faces: [0, 2, -1, -1, -1, -1], face_count: 2, combo_offset: 282 },
    CaseEntry { class: 12, faces: [2, 4, -1, -1, -1, -1], face_count: 2, combo_offset: 286 },
    CaseEntry { class: 6, faces: [2, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 290 },
    CaseEntry { class: 14, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 292 },
    CaseEntry { class: 6, faces: [0, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 293 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 295 },
    CaseEntry { class: 2, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 296 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 297 },
    CaseEntry { class: 14, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 298 },
    CaseEntry { class: 9, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 299 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 300 },
    CaseEntry { class: 11, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 301 },
    CaseEntry { class: 6, faces: [4, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 302 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 304 },
    CaseEntry { class: 2, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 305 },
    CaseEntry { class: 12, faces: [2, 3, -1, -1, -1, -1], face_count: 2, combo_offset: 306 },
    CaseEntry { class: 6, faces: [2, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 310 },
    CaseEntry { class: 7, faces: [2, 3, 4, -1, -1, -1], face_count: 3, combo_offset: 312 },
    CaseEntry { class: 3, faces: [2, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 320 },
    CaseEntry { class: 6, faces: [3, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 322 },
    CaseEntry { class: 4, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 324 },
    CaseEntry { class: 3, faces: [3, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 325 },
    CaseEntry { class: 1, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 327 },
    CaseEntry { class: 1, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 328 },
    CaseEntry { class: 3, faces: [3, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 329 },
    CaseEntry { class: 4, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 331 },
    CaseEntry { class: 6, faces: [3, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 332 },
    CaseEntry { class: 3, faces: [2, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 334 },
    CaseEntry { class: 7, faces: [2, 3, 4, -1, -1, -1], face_count: 3, combo_offset: 336 },
    CaseEntry { class: 6, faces: [2, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 344 },
    CaseEntry { class: 12, faces: [2, 3, -1, -1, -1, -1], face_count: 2, combo_offset: 346 },
    CaseEntry { class: 2, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 350 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 351 },
    CaseEntry { class: 6, faces: [4, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 352 },
    CaseEntry { class: 11, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 354 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 355 },
    CaseEntry { class: 9, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 356 },
    CaseEntry { class: 14, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 357 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 358 },
    CaseEntry { class: 2, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 359 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 360 },
    CaseEntry { class: 6, faces: [0, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 361 },
    CaseEntry { class: 14, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 363 },
    CaseEntry { class: 6, faces: [2, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 364 },
    CaseEntry { class: 12, faces: [2, 4, -1, -1, -1, -1], face_count: 2, combo_offset: 366 },
    CaseEntry { class: 10, faces: [0, 2, -1, -1, -1, -1], face_count: 2, combo_offset: 370 },
    CaseEntry { class: 6, faces: [2, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 374 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 376 },
    CaseEntry { class: 8, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 377 },
    CaseEntry { class: 12, faces: [0, 4, -1, -1, -1, -1], face_count: 2, combo_offset: 378 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 382 },
    CaseEntry { class: 11, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 383 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 384 },
    CaseEntry { class: 6, faces: [0, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 385 },
    CaseEntry { class: 2, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 387 },
    CaseEntry { class: 3, faces: [5, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 388 },
    CaseEntry { class: 7, faces: [0, 3, 5, -1, -1, -1], face_count: 3, combo_offset: 390 },
    CaseEntry { class: 6, faces: [5, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 398 },
    CaseEntry { class: 12, faces: [3, 5, -1, -1, -1, -1], face_count: 2, combo_offset: 400 },
    CaseEntry { class: 7, faces: [1, 2, 5, -1, -1, -1], face_count: 3, combo_offset: 404 },
    CaseEntry { class: 13, faces: [0, 1, 2, 3, 4, 5], face_count: 6, combo_offset: 412 },
    CaseEntry { class: 12, faces: [2, 5, -1, -1, -1, -1], face_count: 2, combo_offset: 476 },
    CaseEntry { class: 7, faces: [2, 3, 5, -1, -1, -1], face_count: 3, combo_offset: 480 },
    CaseEntry { class: 6, faces: [5, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 488 },
    CaseEntry { class: 12, faces: [0, 5, -1, -1, -1, -1], face_count: 2, combo_offset: 490 },
    CaseEntry { class: 10, faces: [4, 5, -1, -1, -1, -1], face_count: 2, combo_offset: 494 },
    CaseEntry { class: 6, faces: [5, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 498 },
    CaseEntry { class: 12, faces: [1, 5, -1, -1, -1, -1], face_count: 2, combo_offset: 500 },
    CaseEntry { class: 7, faces: [0, 1, 5, -1, -1, -1], face_count: 3, combo_offset: 504 },
    CaseEntry { class: 6, faces: [5, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 512 },
    CaseEntry { class: 3, faces: [5, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 514 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 516 },
    CaseEntry { class: 9, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 517 },
    CaseEntry { class: 11, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 518 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 519 },
    CaseEntry { class: 12, faces: [1, 2, -1, -1, -1, -1], face_count: 2, combo_offset: 520 },
    CaseEntry { class: 7, faces: [1, 2, 4, -1, -1, -1], face_count: 3, combo_offset: 524 },
    CaseEntry { class: 6, faces: [2, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 532 },
    CaseEntry { class: 3, faces: [2, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 534 },
    CaseEntry { class: 14, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 536 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 537 },
    CaseEntry { class: 6, faces: [4, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 538 },
    CaseEntry { class: 2, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 540 },
    CaseEntry { class: 6, faces: [1, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 541 },
    CaseEntry { class: 3, faces: [1, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 543 },
    CaseEntry { class: 4, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 545 },
    CaseEntry { class: 1, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 546 },
    CaseEntry { class: 2, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 547 },
    CaseEntry { class: 6, faces: [3, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 548 },
    CaseEntry { class: 6, faces: [1, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 550 },
    CaseEntry { class: 10, faces: [1, 3, -1, -1, -1, -1], face_count: 2, combo_offset: 552 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 556 },
    CaseEntry { class: 12, faces: [3, 4, -1, -1, -1, -1], face_count: 2, combo_offset: 557 },
    CaseEntry { class: 11, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 561 },
    CaseEntry { class: 6, faces: [3, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 562 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 564 },
    CaseEntry { class: 14, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 565 },
    CaseEntry { class: 12, faces: [1, 4, -1, -1, -1, -1], face_count: 2, combo_offset: 566 },
    CaseEntry { class: 6, faces: [1, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 570 },
    CaseEntry { class: 8, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 572 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 573 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 574 },
    CaseEntry { class: 2, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 575 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 576 },
    CaseEntry { class: 11, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 577 },
    CaseEntry { class: 12, faces: [0, 1, -1, -1, -1, -1], face_count: 2, combo_offset: 578 },
    CaseEntry { class: 6, faces: [1, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 582 },
    CaseEntry { class: 14, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 584 },
    CaseEntry { class: 6, faces: [4, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 585 },
    CaseEntry { class: 6, faces: [0, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 587 },
    CaseEntry { class: 4, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 589 },
    CaseEntry { class: 9, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 590 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 591 },
    CaseEntry { class: 7, faces: [0, 1, 4, -1, -1, -1], face_count: 3, combo_offset: 592 },
    CaseEntry { class: 3, faces: [1, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 600 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 602 },
    CaseEntry { class: 2, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 603 },
    CaseEntry { class: 3, faces: [0, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 604 },
    CaseEntry { class: 1, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 606 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 607 },
    CaseEntry { class: 12, faces: [0, 3, -1, -1, -1, -1], face_count: 2, combo_offset: 608 },
    CaseEntry { class: 14, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 612 },
    CaseEntry { class: 6, faces: [3, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 613 },
    CaseEntry { class: 9, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 615 },
    CaseEntry { class: 7, faces: [0, 3, 4, -1, -1, -1], face_count: 3, combo_offset: 616 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 624 },
    CaseEntry { class: 3, faces: [3, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 625 },
    CaseEntry { class: 11, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 627 },
    CaseEntry { class: 6, faces: [0, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 628 },
    CaseEntry { class: 6, faces: [4, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 630 },
    CaseEntry { class: 4, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 632 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 633 },
    CaseEntry { class: 3, faces: [0, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 634 },
    CaseEntry { class: 2, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 636 },
    CaseEntry { class: 1, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 637 },
    CaseEntry { class: 8, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 638 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 639 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 640 },
    CaseEntry { class: 2, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 641 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 642 },
    CaseEntry { class: 3, faces: [4, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 643 },
    CaseEntry { class: 2, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 645 },
    CaseEntry { class: 1, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 646 },
    CaseEntry { class: 5, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 647 },
    CaseEntry { class: 2, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 648 },
    CaseEntry { class: 3, faces: [4, -1, -1, -1, -1, -1], face_count: 1, combo_offset: 649 },
    CaseEntry { class: 1, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 651 },
    CaseEntry { class: 2, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 652 },
    CaseEntry { class: 1, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 653 },
    CaseEntry { class: 1, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 654 },
    CaseEntry { class: 0, faces: [-1, -1, -1, -1, -1, -1], face_count: 0, combo_offset: 655 },
];

pub(crate) const COMBOS: [ComboEntry; 656] = [
    ComboEntry { disk: 0, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 1, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 2, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 3, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 4, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 5, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 6, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 7, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 8, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 9, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 10, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 11, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 12, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 13, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 14, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 15, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 16, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 17, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 18, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 19, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 20, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 21, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 22, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 23, tunnel: 24, sides: 1 },
    ComboEntry { disk: 25, tunnel: 26, sides: 1 },
    ComboEntry { disk: 27, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 28, tunnel: 29, sides: 1 },
    ComboEntry { disk: 30, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 31, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 32, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 33, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 34, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 35, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 36, tunnel: 37, sides: 1 },
    ComboEntry { disk: 38, tunnel: 39, sides: 1 },
    ComboEntry { disk: 40, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 41, tunnel: 42, sides: 1 },
    ComboEntry { disk: 43, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 44, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 45, tunnel: 46, sides: 2 },
    ComboEntry { disk: 47, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 48, tunnel: 49, sides: 1 },
    ComboEntry { disk: 50, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 51, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 52, tunnel: 53, sides: 1 },
    ComboEntry { disk: 54, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 55, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 56, tunnel: 57, sides: 2 },
    ComboEntry { disk: 58, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 59, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 60, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 61, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 62, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 63, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 64, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 65, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 66, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 67, tunnel: 68, sides: 1 },
    ComboEntry { disk: 69, tunnel: 70, sides: 1 },
    ComboEntry { disk: 71, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 72, tunnel: 73, sides: 1 },
    ComboEntry { disk: 74, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 75, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 76, tunnel: 77, sides: 2 },
    ComboEntry { disk: 78, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 79, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 80, tunnel: 81, sides: 1 },
    ComboEntry { disk: 82, tunnel: 83, sides: 1 },
    ComboEntry { disk: 84, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 85, tunnel: 86, sides: 1 },
    ComboEntry { disk: 87, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 88, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 89, tunnel: 90, sides: 1 },
    ComboEntry { disk: 91, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 92, tunnel: 93, sides: 1 },
    ComboEntry { disk: 94, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 95, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 96, tunnel: 97, sides: 2 },
    ComboEntry { disk: 98, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 99, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 100, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 101, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 102, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 103, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 104, tunnel: 105, sides: 1 },
    ComboEntry { disk: 106, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 107, tunnel: 108, sides: 1 },
    ComboEntry { disk: 109, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 110, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 111, tunnel: 112, sides: 2 },
    ComboEntry { disk: 113, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 114, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 115, tunnel: 116, sides: 1 },
    ComboEntry { disk: 117, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 118, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 119, tunnel: 120, sides: 1 },
    ComboEntry { disk: 121, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 122, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 123, tunnel: 124, sides: 2 },
    ComboEntry { disk: 125, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 126, tunnel: 127, sides: 1 },
    ComboEntry { disk: 128, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 129, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 130, tunnel: 131, sides: 2 },
    ComboEntry { disk: 132, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 133, tunnel: 134, sides: 2 },
    ComboEntry { disk: 135, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 136, tunnel: 137, sides: 2 },
    ComboEntry { disk: 138, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 139, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 140, tunnel: 141, sides: 1 },
    ComboEntry { disk: 142, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 143, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 144, tunnel: 145, sides: 1 },
    ComboEntry { disk: 146, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 147, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 148, tunnel: 149, sides: 1 },
    ComboEntry { disk: 150, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 151, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 152, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 153, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 154, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 155, tunnel: 156, sides: 1 },
    ComboEntry { disk: 157, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 158, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 159, tunnel: 160, sides: 1 },
    ComboEntry { disk: 161, tunnel: 162, sides: 1 },
    ComboEntry { disk: 163, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 164, tunnel: 165, sides: 1 },
    ComboEntry { disk: 166, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 167, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 168, tunnel: 169, sides: 2 },
    ComboEntry { disk: 170, tunnel: 171, sides: 1 },
    ComboEntry { disk: 172, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 173, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 174, tunnel: 175, sides: 2 },
    ComboEntry { disk: 176, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 177, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 178, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 179, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 180, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 181, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 182, tunnel: 183, sides: 1 },
    ComboEntry { disk: 184, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 185, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 186, tunnel: 187, sides: 1 },
    ComboEntry { disk: 188, tunnel: 189, sides: 1 },
    ComboEntry { disk: 190, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 191, tunnel: 192, sides: 1 },
    ComboEntry { disk: 193, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 194, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 195, tunnel: 196, sides: 2 },
    ComboEntry { disk: 197, tunnel: 198, sides: 1 },
    ComboEntry { disk: 199, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 200, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 201, tunnel: 202, sides: 2 },
    ComboEntry { disk: 203, tunnel: 204, sides: 1 },
    ComboEntry { disk: 205, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 206, tunnel: 207, sides: 1 },
    ComboEntry { disk: 208, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 209, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 210, tunnel: 211, sides: 2 },
    ComboEntry { disk: 212, tunnel: 213, sides: 1 },
    ComboEntry { disk: 214, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 215, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 216, tunnel: 217, sides: 2 },
    ComboEntry { disk: 218, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 219, tunnel: 220, sides: 2 },
    ComboEntry { disk: 221, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 222, tunnel: 223, sides: 1 },
    ComboEntry { disk: 224, tunnel: 225, sides: 1 },
    ComboEntry { disk: 226, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 227, tunnel: 228, sides: 1 },
    ComboEntry { disk: 229, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 230, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 231, tunnel: 232, sides: 2 },
    ComboEntry { disk: 233, tunnel: 234, sides: 1 },
    ComboEntry { disk: 235, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 236, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 237, tunnel: 238, sides: 2 },
    ComboEntry { disk: 239, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 240, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 241, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 242, tunnel: 243, sides: 1 },
    ComboEntry { disk: 244, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 245, tunnel: 246, sides: 1 },
    ComboEntry { disk: 247, tunnel: 248, sides: 1 },
    ComboEntry { disk: 249, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 250, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 251, tunnel: 252, sides: 1 },
    ComboEntry { disk: 253, tunnel: 254, sides: 1 },
    ComboEntry { disk: 255, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 256, tunnel: 257, sides: 1 },
    ComboEntry { disk: 258, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 259, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 260, tunnel: 261, sides: 2 },
    ComboEntry { disk: 262, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 263, tunnel: 264, sides: 1 },
    ComboEntry { disk: 265, tunnel: 266, sides: 1 },
    ComboEntry { disk: 267, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 268, tunnel: 269, sides: 1 },
    ComboEntry { disk: 270, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 271, tunnel: 272, sides: 3 },
    ComboEntry { disk: 273, tunnel: 274, sides: 2 },
    ComboEntry { disk: 275, tunnel: 276, sides: 1 },
    ComboEntry { disk: 277, tunnel: 278, sides: 3 },
    ComboEntry { disk: 279, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 280, tunnel: 281, sides: 2 },
    ComboEntry { disk: 282, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 283, tunnel: 284, sides: 2 },
    ComboEntry { disk: 285, tunnel: 286, sides: 2 },
    ComboEntry { disk: 287, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 288, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 289, tunnel: 290, sides: 1 },
    ComboEntry { disk: 291, tunnel: 292, sides: 1 },
    ComboEntry { disk: 293, tunnel: 294, sides: 3 },
    ComboEntry { disk: 295, tunnel: 296, sides: 1 },
    ComboEntry { disk: 297, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 298, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 299, tunnel: 300, sides: 2 },
    ComboEntry { disk: 301, tunnel: 302, sides: 1 },
    ComboEntry { disk: 303, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 304, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 305, tunnel: 306, sides: 2 },
    ComboEntry { disk: 307, tunnel: 308, sides: 3 },
    ComboEntry { disk: 309, tunnel: 310, sides: 2 },
    ComboEntry { disk: 311, tunnel: 312, sides: 2 },
    ComboEntry { disk: 313, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 314, tunnel: 315, sides: 1 },
    ComboEntry { disk: 316, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 317, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 318, tunnel: 319, sides: 2 },
    ComboEntry { disk: 320, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 321, tunnel: 322, sides: 2 },
    ComboEntry { disk: 323, tunnel: 324, sides: 2 },
    ComboEntry { disk: 325, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 326, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 327, tunnel: 328, sides: 2 },
    ComboEntry { disk: 329, tunnel: 330, sides: 2 },
    ComboEntry { disk: 331, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 332, tunnel: 333, sides: 2 },
    ComboEntry { disk: 334, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 335, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 336, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 337, tunnel: 338, sides: 1 },
    ComboEntry { disk: 339, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 340, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 341, tunnel: 342, sides: 2 },
    ComboEntry { disk: 343, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 344, tunnel: 345, sides: 2 },
    ComboEntry { disk: 346, tunnel: 347, sides: 2 },
    ComboEntry { disk: 348, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 349, tunnel: 350, sides: 1 },
    ComboEntry { disk: 351, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 352, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 353, tunnel: 354, sides: 2 },
    ComboEntry { disk: 355, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 356, tunnel: 357, sides: 2 },
    ComboEntry { disk: 358, tunnel: 359, sides: 1 },
    ComboEntry { disk: 360, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 361, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 362, tunnel: 363, sides: 2 },
    ComboEntry { disk: 364, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 365, tunnel: 366, sides: 2 },
    ComboEntry { disk: 367, tunnel: 368, sides: 2 },
    ComboEntry { disk: 369, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 370, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 371, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 372, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 373, tunnel: 374, sides: 1 },
    ComboEntry { disk: 375, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 376, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 377, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 378, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 379, tunnel: 380, sides: 1 },
    ComboEntry { disk: 381, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 382, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 383, tunnel: 384, sides: 2 },
    ComboEntry { disk: 385, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 386, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 387, tunnel: 388, sides: 1 },
    ComboEntry { disk: 389, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 390, tunnel: 391, sides: 1 },
    ComboEntry { disk: 392, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 393, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 394, tunnel: 395, sides: 2 },
    ComboEntry { disk: 396, tunnel: 397, sides: 1 },
    ComboEntry { disk: 398, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 399, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 400, tunnel: 401, sides: 2 },
    ComboEntry { disk: 402, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 403, tunnel: 404, sides: 2 },
    ComboEntry { disk: 405, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 406, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 407, tunnel: 408, sides: 2 },
    ComboEntry { disk: 409, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 410, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 411, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 412, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 413, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 414, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 415, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 416, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 417, tunnel: 418, sides: 2 },
    ComboEntry { disk: 419, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 420, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 421, tunnel: 422, sides: 1 },
    ComboEntry { disk: 423, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 424, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 425, tunnel: 426, sides: 2 },
    ComboEntry { disk: 427, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 428, tunnel: 429, sides: 2 },
    ComboEntry { disk: 430, tunnel: 431, sides: 1 },
    ComboEntry { disk: 432, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 433, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 434, tunnel: 435, sides: 2 },
    ComboEntry { disk: 436, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 437, tunnel: 438, sides: 2 },
    ComboEntry { disk: 439, tunnel: 440, sides: 2 },
    ComboEntry { disk: 441, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 442, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 443, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 444, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 445, tunnel: 446, sides: 2 },
    ComboEntry { disk: 447, tunnel: 448, sides: 2 },
    ComboEntry { disk: 449, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 450, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 451, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 452, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 453, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 454, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 455, tunnel: 456, sides: 1 },
    ComboEntry { disk: 457, tunnel: 458, sides: 1 },
    ComboEntry { disk: 459, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 460, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 461, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 462, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 463, tunnel: 464, sides: 1 },
    ComboEntry { disk: 465, tunnel: 466, sides: 1 },
    ComboEntry { disk: 467, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 468, tunnel: 469, sides: 1 },
    ComboEntry { disk: 470, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 471, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 472, tunnel: 473, sides: 2 },
    ComboEntry { disk: 474, tunnel: 475, sides: 1 },
    ComboEntry { disk: 476, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 477, tunnel: 478, sides: 1 },
    ComboEntry { disk: 479, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 480, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 481, tunnel: 482, sides: 2 },
    ComboEntry { disk: 483, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 484, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 485, tunnel: 486, sides: 1 },
    ComboEntry { disk: 487, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 488, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 489, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 490, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 491, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 492, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 493, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 494, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 495, tunnel: 496, sides: 1 },
    ComboEntry { disk: 497, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 498, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 499, tunnel: 500, sides: 1 },
    ComboEntry { disk: 501, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 502, tunnel: 503, sides: 1 },
    ComboEntry { disk: 504, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 505, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 506, tunnel: 507, sides: 2 },
    ComboEntry { disk: 508, tunnel: 509, sides: 1 },
    ComboEntry { disk: 510, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 511, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 512, tunnel: 513, sides: 2 },
    ComboEntry { disk: 514, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 515, tunnel: 516, sides: 2 },
    ComboEntry { disk: 517, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 518, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 519, tunnel: 520, sides: 1 },
    ComboEntry { disk: 521, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 522, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 523, tunnel: 524, sides: 2 },
    ComboEntry { disk: 525, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 526, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 527, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 528, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 529, tunnel: 530, sides: 2 },
    ComboEntry { disk: 531, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 532, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 533, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 534, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 535, tunnel: 536, sides: 1 },
    ComboEntry { disk: 537, tunnel: 538, sides: 1 },
    ComboEntry { disk: 539, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 540, tunnel: 541, sides: 1 },
    ComboEntry { disk: 542, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 543, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 544, tunnel: 545, sides: 2 },
    ComboEntry { disk: 546, tunnel: 547, sides: 1 },
    ComboEntry { disk: 548, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 549, tunnel: 550, sides: 1 },
    ComboEntry { disk: 551, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 552, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 553, tunnel: 554, sides: 2 },
    ComboEntry { disk: 555, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 556, tunnel: 557, sides: 1 },
    ComboEntry { disk: 558, tunnel: 559, sides: 1 },
    ComboEntry { disk: 560, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 561, tunnel: 562, sides: 1 },
    ComboEntry { disk: 563, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 564, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 565, tunnel: 566, sides: 2 },
    ComboEntry { disk: 567, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 568, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 569, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 570, tunnel: 571, sides: 1 },
    ComboEntry { disk: 572, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 573, tunnel: 574, sides: 1 },
    ComboEntry { disk: 575, tunnel: 576, sides: 1 },
    ComboEntry { disk: 577, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 578, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 579, tunnel: 580, sides: 1 },
    ComboEntry { disk: 581, tunnel: 582, sides: 1 },
    ComboEntry { disk: 583, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 584, tunnel: 585, sides: 1 },
    ComboEntry { disk: 586, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 587, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 588, tunnel: 589, sides: 2 },
    ComboEntry { disk: 590, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 591, tunnel: 592, sides: 1 },
    ComboEntry { disk: 593, tunnel: 594, sides: 1 },
    ComboEntry { disk: 595, tunnel: 596, sides: 3 },
    ComboEntry { disk: 597, tunnel: 598, sides: 1 },
    ComboEntry { disk: 599, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 600, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 601, tunnel: 602, sides: 2 },
    ComboEntry { disk: 603, tunnel: 604, sides: 1 },
    ComboEntry { disk: 605, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 606, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 607, tunnel: 608, sides: 2 },
    ComboEntry { disk: 609, tunnel: 610, sides: 3 },
    ComboEntry { disk: 611, tunnel: 612, sides: 2 },
    ComboEntry { disk: 613, tunnel: 614, sides: 2 },
    ComboEntry { disk: 615, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 616, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 617, tunnel: 618, sides: 1 },
    ComboEntry { disk: 619, tunnel: 620, sides: 1 },
    ComboEntry { disk: 621, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 622, tunnel: 623, sides: 1 },
    ComboEntry { disk: 624, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 625, tunnel: 626, sides: 3 },
    ComboEntry { disk: 627, tunnel: 628, sides: 2 },
    ComboEntry { disk: 629, tunnel: 630, sides: 1 },
    ComboEntry { disk: 631, tunnel: 632, sides: 3 },
    ComboEntry { disk: 633, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 634, tunnel: 635, sides: 2 },
    ComboEntry { disk: 636, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 637, tunnel: 638, sides: 2 },
    ComboEntry { disk: 639, tunnel: 640, sides: 2 },
    ComboEntry { disk: 641, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 642, tunnel: 643, sides: 1 },
    ComboEntry { disk: 644, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 645, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 646, tunnel: 647, sides: 2 },
    ComboEntry { disk: 648, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 649, tunnel: 650, sides: 2 },
    ComboEntry { disk: 651, tunnel: 652, sides: 2 },
    ComboEntry { disk: 653, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 654, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 655, tunnel: 656, sides: 2 },
    ComboEntry { disk: 657, tunnel: 658, sides: 2 },
    ComboEntry { disk: 659, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 660, tunnel: 661, sides: 2 },
    ComboEntry { disk: 662, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 663, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 664, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 665, tunnel: 666, sides: 1 },
    ComboEntry { disk: 667, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 668, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 669, tunnel: 670, sides: 2 },
    ComboEntry { disk: 671, tunnel: 672, sides: 1 },
    ComboEntry { disk: 673, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 674, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 675, tunnel: 676, sides: 2 },
    ComboEntry { disk: 677, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 678, tunnel: 679, sides: 2 },
    ComboEntry { disk: 680, tunnel: 681, sides: 2 },
    ComboEntry { disk: 682, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 683, tunnel: 684, sides: 1 },
    ComboEntry { disk: 685, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 686, tunnel: 687, sides: 1 },
    ComboEntry { disk: 688, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 689, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 690, tunnel: 691, sides: 2 },
    ComboEntry { disk: 692, tunnel: 693, sides: 1 },
    ComboEntry { disk: 694, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 695, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 696, tunnel: 697, sides: 2 },
    ComboEntry { disk: 698, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 699, tunnel: 700, sides: 2 },
    ComboEntry { disk: 701, tunnel: 702, sides: 1 },
    ComboEntry { disk: 703, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 704, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 705, tunnel: 706, sides: 2 },
    ComboEntry { disk: 707, tunnel: 708, sides: 1 },
    ComboEntry { disk: 709, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 710, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 711, tunnel: 712, sides: 2 },
    ComboEntry { disk: 713, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 714, tunnel: 715, sides: 2 },
    ComboEntry { disk: 716, tunnel: 717, sides: 2 },
    ComboEntry { disk: 718, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 719, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 720, tunnel: 721, sides: 2 },
    ComboEntry { disk: 722, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 723, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 724, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 725, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 726, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 727, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 728, tunnel: 729, sides: 1 },
    ComboEntry { disk: 730, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 731, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 732, tunnel: 733, sides: 2 },
    ComboEntry { disk: 734, tunnel: 735, sides: 1 },
    ComboEntry { disk: 736, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 737, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 738, tunnel: 739, sides: 2 },
    ComboEntry { disk: 740, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 741, tunnel: 742, sides: 2 },
    ComboEntry { disk: 743, tunnel: 744, sides: 2 },
    ComboEntry { disk: 745, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 746, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 747, tunnel: 748, sides: 2 },
    ComboEntry { disk: 749, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 750, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 751, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 752, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 753, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 754, tunnel: 755, sides: 2 },
    ComboEntry { disk: 756, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 757, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 758, tunnel: 759, sides: 2 },
    ComboEntry { disk: 760, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 761, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 762, tunnel: 763, sides: 2 },
    ComboEntry { disk: 764, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 765, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 766, tunnel: 767, sides: 1 },
    ComboEntry { disk: 768, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 769, tunnel: 770, sides: 1 },
    ComboEntry { disk: 771, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 772, tunnel: 773, sides: 1 },
    ComboEntry { disk: 774, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 775, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 776, tunnel: 777, sides: 2 },
    ComboEntry { disk: 778, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 779, tunnel: 780, sides: 1 },
    ComboEntry { disk: 781, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 782, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 783, tunnel: 784, sides: 2 },
    ComboEntry { disk: 785, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 786, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 787, tunnel: 788, sides: 2 },
    ComboEntry { disk: 789, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 790, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 791, tunnel: 792, sides: 1 },
    ComboEntry { disk: 793, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 794, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 795, tunnel: 796, sides: 2 },
    ComboEntry { disk: 797, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 798, tunnel: 799, sides: 2 },
    ComboEntry { disk: 800, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 801, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 802, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 803, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 804, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 805, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 806, tunnel: 807, sides: 1 },
    ComboEntry { disk: 808, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 809, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 810, tunnel: 811, sides: 2 },
    ComboEntry { disk: 812, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 813, tunnel: 814, sides: 2 },
    ComboEntry { disk: 815, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 816, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 817, tunnel: 818, sides: 2 },
    ComboEntry { disk: 819, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 820, tunnel: 821, sides: 2 },
    ComboEntry { disk: 822, tunnel: 823, sides: 2 },
    ComboEntry { disk: 824, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 825, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 826, tunnel: 827, sides: 1 },
    ComboEntry { disk: 828, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 829, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 830, tunnel: 831, sides: 2 },
    ComboEntry { disk: 832, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 833, tunnel: 834, sides: 2 },
    ComboEntry { disk: 835, tunnel: 836, sides: 2 },
    ComboEntry { disk: 837, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 838, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 839, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 840, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 841, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 842, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 843, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 844, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 845, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 846, tunnel: 847, sides: 1 },
    ComboEntry { disk: 848, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 849, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 850, tunnel: 851, sides: 2 },
    ComboEntry { disk: 852, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 853, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 854, tunnel: 855, sides: 2 },
    ComboEntry { disk: 856, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 857, tunnel: 858, sides: 1 },
    ComboEntry { disk: 859, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 860, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 861, tunnel: 862, sides: 2 },
    ComboEntry { disk: 863, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 864, tunnel: 865, sides: 2 },
    ComboEntry { disk: 866, tunnel: 867, sides: 2 },
    ComboEntry { disk: 868, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 869, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 870, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 871, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 872, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 873, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 874, tunnel: 875, sides: 2 },
    ComboEntry { disk: 876, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 877, tunnel: 878, sides: 2 },
    ComboEntry { disk: 879, tunnel: 880, sides: 2 },
    ComboEntry { disk: 881, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 882, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 883, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 884, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 885, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 886, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 887, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 888, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 889, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 890, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 891, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 892, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 893, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 894, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 895, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 896, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 897, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 898, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 899, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 900, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 901, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 902, tunnel: NO_TILING, sides: 0 },
    ComboEntry { disk: 0, tunnel: NO_TILING, sides: 0 },
];

/// (offset, triangle count) spans into [`TILING_TRIS`].
pub(crate) const TILING_SPANS: [(u16, u8); 903] = [
    (0, 0), (0, 1), (1, 1), (2, 2), (4, 1), (5, 2), (7, 4), (11, 2), (13, 3), (16, 1), (17, 2),
    (19, 2), (21, 4), (25, 3), (28, 2), (30, 3), (33, 3), (36, 2), (38, 1), (39, 2), (41, 2),
    (43, 4), (47, 3), (50, 2), (52, 6), (58, 3), (61, 7), (68, 5), (73, 3), (76, 7), (83, 5),
    (88, 4), (92, 2), (94, 4), (98, 3), (101, 3), (104, 5), (109, 9), (118, 5), (123, 9), (132, 9),
    (141, 5), (146, 9), (155, 9), (164, 9), (173, 5), (178, 11), (189, 4), (193, 3), (196, 7),
    (203, 5), (208, 4), (212, 4), (216, 10), (226, 8), (234, 8), (242, 4), (246, 10), (256, 3),
    (259, 1), (260, 2), (262, 4), (266, 2), (268, 3), (271, 2), (273, 4), (277, 3), (280, 5),
    (285, 9), (294, 5), (299, 9), (308, 9), (317, 5), (322, 9), (331, 9), (340, 9), (349, 5),
    (354, 11), (365, 3), (368, 4), (372, 2), (374, 6), (380, 3), (383, 7), (390, 5), (395, 3),
    (398, 7), (405, 5), (410, 4), (414, 3), (417, 7), (424, 5), (429, 4), (433, 10), (443, 8),
    (451, 8), (459, 4), (463, 10), (473, 4), (477, 3), (480, 2), (482, 3), (485, 3), (488, 2),
    (490, 3), (493, 7), (500, 5), (505, 4), (509, 10), (519, 8), (527, 8), (535, 4), (539, 10),
    (549, 4), (553, 3), (556, 3), (559, 7), (566, 5), (571, 4), (575, 4), (579, 10), (589, 8),
    (597, 8), (605, 4), (609, 10), (619, 3), (622, 4), (626, 10), (636, 8), (644, 8), (652, 4),
    (656, 10), (666, 5), (671, 3), (674, 7), (681, 5), (686, 3), (689, 7), (696, 2), (698, 1),
    (699, 2), (701, 6), (707, 2), (709, 4), (713, 3), (716, 7), (723, 5), (728, 2), (730, 3),
    (733, 7), (740, 5), (745, 3), (748, 4), (752, 2), (754, 4), (758, 3), (761, 7), (768, 5),
    (773, 3), (776, 5), (781, 9), (790, 5), (795, 9), (804, 9), (813, 5), (818, 9), (827, 9),
    (836, 9), (845, 5), (850, 11), (861, 4), (865, 10), (875, 8), (883, 8), (891, 4), (895, 10),
    (905, 3), (908, 4), (912, 4), (916, 3), (919, 2), (921, 4), (925, 3), (928, 7), (935, 5),
    (940, 3), (943, 5), (948, 9), (957, 5), (962, 9), (971, 9), (980, 5), (985, 9), (994, 9),
    (1003, 9), (1012, 5), (1017, 11), (1028, 4), (1032, 10), (1042, 8), (1050, 8), (1058, 4),
    (1062, 10), (1072, 3), (1075, 7), (1082, 5), (1087, 4), (1091, 10), (1101, 8), (1109, 8),
    (1117, 4), (1121, 10), (1131, 4), (1135, 10), (1145, 8), (1153, 8), (1161, 4), (1165, 10),
    (1175, 5), (1180, 3), (1183, 7), (1190, 3), (1193, 5), (1198, 9), (1207, 5), (1212, 9),
    (1221, 9), (1230, 5), (1235, 9), (1244, 9), (1253, 9), (1262, 5), (1267, 11), (1278, 4),
    (1282, 10), (1292, 8), (1300, 8), (1308, 4), (1312, 10), (1322, 4), (1326, 6), (1332, 6),
    (1338, 10), (1348, 12), (1360, 6), (1366, 8), (1374, 12), (1386, 10), (1396, 12), (1408, 12),
    (1420, 6), (1426, 10), (1436, 12), (1448, 8), (1456, 12), (1468, 12), (1480, 10), (1490, 12),
    (1502, 12), (1514, 12), (1526, 8), (1534, 12), (1546, 6), (1552, 10), (1562, 12), (1574, 10),
    (1584, 12), (1596, 12), (1608, 10), (1618, 12), (1630, 12), (1642, 6), (1648, 10), (1658, 10),
    (1668, 12), (1680, 10), (1690, 12), (1702, 6), (1708, 10), (1718, 12), (1730, 10), (1740, 12),
    (1752, 12), (1764, 10), (1774, 12), (1786, 10), (1796, 12), (1808, 6), (1814, 6), (1820, 10),
    (1830, 12), (1842, 10), (1852, 12), (1864, 6), (1870, 10), (1880, 10), (1890, 12), (1902, 12),
    (1914, 12), (1926, 10), (1936, 12), (1948, 10), (1958, 12), (1970, 12), (1982, 12), (1994, 10),
    (2004, 12), (2016, 6), (2022, 10), (2032, 10), (2042, 12), (2054, 10), (2064, 12), (2076, 6),
    (2082, 8), (2090, 12), (2102, 12), (2114, 12), (2126, 10), (2136, 12), (2148, 12), (2160, 8),
    (2168, 12), (2180, 10), (2190, 12), (2202, 6), (2208, 12), (2220, 10), (2230, 12), (2242, 8),
    (2250, 12), (2262, 6), (2268, 10), (2278, 12), (2290, 6), (2296, 6), (2302, 4), (2306, 5),
    (2311, 11), (2322, 9), (2331, 9), (2340, 5), (2345, 9), (2354, 9), (2363, 5), (2368, 9),
    (2377, 5), (2382, 9), (2391, 3), (2394, 4), (2398, 10), (2408, 8), (2416, 8), (2424, 4),
    (2428, 10), (2438, 5), (2443, 3), (2446, 7), (2453, 5), (2458, 11), (2469, 9), (2478, 9),
    (2487, 5), (2492, 9), (2501, 9), (2510, 5), (2515, 9), (2524, 5), (2529, 9), (2538, 3),
    (2541, 4), (2545, 2), (2547, 2), (2549, 3), (2552, 7), (2559, 5), (2564, 3), (2567, 4),
    (2571, 3), (2574, 4), (2578, 10), (2588, 8), (2596, 8), (2604, 4), (2608, 10), (2618, 2),
    (2620, 3), (2623, 3), (2626, 7), (2633, 5), (2638, 4), (2642, 10), (2652, 8), (2660, 8),
    (2668, 4), (2672, 10), (2682, 4), (2686, 10), (2696, 8), (2704, 8), (2712, 4), (2716, 10),
    (2726, 5), (2731, 3), (2734, 7), (2741, 4), (2745, 5), (2750, 3), (2753, 7), (2760, 3),
    (2763, 2), (2765, 3), (2768, 4), (2772, 4), (2776, 3), (2779, 4), (2783, 5), (2788, 3),
    (2791, 7), (2798, 3), (2801, 2), (2803, 4), (2807, 10), (2817, 8), (2825, 8), (2833, 4),
    (2837, 10), (2847, 5), (2852, 3), (2855, 7), (2862, 5), (2867, 11), (2878, 9), (2887, 9),
    (2896, 5), (2901, 9), (2910, 9), (2919, 5), (2924, 9), (2933, 5), (2938, 9), (2947, 3),
    (2950, 4), (2954, 2), (2956, 5), (2961, 3), (2964, 7), (2971, 2), (2973, 6), (2979, 4),
    (2983, 2), (2985, 1), (2986, 1), (2987, 2), (2989, 4), (2993, 2), (2995, 6), (3001, 3),
    (3004, 7), (3011, 5), (3016, 2), (3018, 4), (3022, 3), (3025, 5), (3030, 9), (3039, 5),
    (3044, 9), (3053, 9), (3062, 5), (3067, 9), (3076, 9), (3085, 9), (3094, 5), (3099, 11),
    (3110, 3), (3113, 7), (3120, 5), (3125, 4), (3129, 10), (3139, 8), (3147, 8), (3155, 4),
    (3159, 10), (3169, 2), (3171, 3), (3174, 3), (3177, 7), (3184, 5), (3189, 4), (3193, 3),
    (3196, 4), (3200, 4), (3204, 3), (3207, 2), (3209, 3), (3212, 3), (3215, 7), (3222, 5),
    (3227, 4), (3231, 3), (3234, 7), (3241, 5), (3246, 4), (3250, 10), (3260, 8), (3268, 8),
    (3276, 4), (3280, 10), (3290, 4), (3294, 10), (3304, 8), (3312, 8), (3320, 4), (3324, 10),
    (3334, 5), (3339, 3), (3342, 7), (3349, 3), (3352, 2), (3354, 4), (3358, 10), (3368, 8),
    (3376, 8), (3384, 4), (3388, 10), (3398, 3), (3401, 4), (3405, 3), (3408, 5), (3413, 3),
    (3416, 7), (3423, 2), (3425, 2), (3427, 4), (3431, 3), (3434, 5), (3439, 9), (3448, 5),
    (3453, 9), (3462, 9), (3471, 5), (3476, 9), (3485, 9), (3494, 9), (3503, 5), (3508, 11),
    (3519, 3), (3522, 7), (3529, 5), (3534, 4), (3538, 10), (3548, 8), (3556, 8), (3564, 4),
    (3568, 10), (3578, 3), (3581, 5), (3586, 9), (3595, 5), (3600, 9), (3609, 9), (3618, 5),
    (3623, 9), (3632, 9), (3641, 9), (3650, 5), (3655, 11), (3666, 4), (3670, 6), (3676, 6),
    (3682, 10), (3692, 12), (3704, 6), (3710, 8), (3718, 12), (3730, 10), (3740, 12), (3752, 12),
    (3764, 6), (3770, 10), (3780, 12), (3792, 8), (3800, 12), (3812, 12), (3824, 10), (3834, 12),
    (3846, 12), (3858, 12), (3870, 8), (3878, 12), (3890, 6), (3896, 10), (3906, 12), (3918, 10),
    (3928, 12), (3940, 6), (3946, 10), (3956, 10), (3966, 12), (3978, 12), (3990, 12), (4002, 10),
    (4012, 12), (4024, 10), (4034, 12), (4046, 12), (4058, 12), (4070, 10), (4080, 12), (4092, 6),
    (4098, 10), (4108, 10), (4118, 12), (4130, 10), (4140, 12), (4152, 6), (4158, 6), (4164, 10),
    (4174, 12), (4186, 10), (4196, 12), (4208, 12), (4220, 10), (4230, 12), (4242, 12), (4254, 6),
    (4260, 10), (4270, 10), (4280, 12), (4292, 10), (4302, 12), (4314, 6), (4320, 10), (4330, 12),
    (4342, 10), (4352, 12), (4364, 12), (4376, 10), (4386, 12), (4398, 10), (4408, 12), (4420, 6),
    (4426, 8), (4434, 12), (4446, 12), (4458, 12), (4470, 10), (4480, 12), (4492, 12), (4504, 8),
    (4512, 12), (4524, 10), (4534, 12), (4546, 6), (4552, 12), (4564, 10), (4574, 12), (4586, 8),
    (4594, 12), (4606, 6), (4612, 10), (4622, 12), (4634, 6), (4640, 6), (4646, 4), (4650, 4),
    (4654, 10), (4664, 8), (4672, 8), (4680, 4), (4684, 10), (4694, 5), (4699, 11), (4710, 9),
    (4719, 9), (4728, 5), (4733, 9), (4742, 9), (4751, 5), (4756, 9), (4765, 5), (4770, 9),
    (4779, 3), (4782, 3), (4785, 7), (4792, 5), (4797, 4), (4801, 10), (4811, 8), (4819, 8),
    (4827, 4), (4831, 10), (4841, 4), (4845, 10), (4855, 8), (4863, 8), (4871, 4), (4875, 10),
    (4885, 5), (4890, 3), (4893, 7), (4900, 4), (4904, 10), (4914, 8), (4922, 8), (4930, 4),
    (4934, 10), (4944, 5), (4949, 11), (4960, 9), (4969, 9), (4978, 5), (4983, 9), (4992, 9),
    (5001, 5), (5006, 9), (5015, 5), (5020, 9), (5029, 3), (5032, 5), (5037, 3), (5040, 7),
    (5047, 4), (5051, 2), (5053, 3), (5056, 4), (5060, 4), (5064, 3), (5067, 4), (5071, 10),
    (5081, 8), (5089, 8), (5097, 4), (5101, 10), (5111, 5), (5116, 11), (5127, 9), (5136, 9),
    (5145, 5), (5150, 9), (5159, 9), (5168, 5), (5173, 9), (5182, 5), (5187, 9), (5196, 3),
    (5199, 5), (5204, 3), (5207, 7), (5214, 4), (5218, 2), (5220, 4), (5224, 3), (5227, 5),
    (5232, 3), (5235, 7), (5242, 2), (5244, 5), (5249, 3), (5252, 7), (5259, 4), (5263, 2),
    (5265, 2), (5267, 6), (5273, 1), (5274, 2), (5276, 3), (5279, 7), (5286, 5), (5291, 3),
    (5294, 7), (5301, 5), (5306, 4), (5310, 10), (5320, 8), (5328, 8), (5336, 4), (5340, 10),
    (5350, 3), (5353, 4), (5357, 10), (5367, 8), (5375, 8), (5383, 4), (5387, 10), (5397, 4),
    (5401, 5), (5406, 3), (5409, 7), (5416, 3), (5419, 4), (5423, 4), (5427, 10), (5437, 8),
    (5445, 8), (5453, 4), (5457, 10), (5467, 5), (5472, 3), (5475, 7), (5482, 2), (5484, 3),
    (5487, 3), (5490, 2), (5492, 3), (5495, 4), (5499, 4), (5503, 10), (5513, 8), (5521, 8),
    (5529, 4), (5533, 10), (5543, 5), (5548, 3), (5551, 7), (5558, 4), (5562, 5), (5567, 3),
    (5570, 7), (5577, 5), (5582, 3), (5585, 7), (5592, 2), (5594, 6), (5600, 4), (5604, 3),
    (5607, 5), (5612, 11), (5623, 9), (5632, 9), (5641, 5), (5646, 9), (5655, 9), (5664, 5),
    (5669, 9), (5678, 5), (5683, 9), (5692, 3), (5695, 4), (5699, 2), (5701, 3), (5704, 2),
    (5706, 4), (5710, 2), (5712, 1), (5713, 3), (5716, 4), (5720, 10), (5730, 8), (5738, 8),
    (5746, 4), (5750, 10), (5760, 4), (5764, 5), (5769, 3), (5772, 7), (5779, 4), (5783, 5),
    (5788, 11), (5799, 9), (5808, 9), (5817, 5), (5822, 9), (5831, 9), (5840, 5), (5845, 9),
    (5854, 5), (5859, 9), (5868, 3), (5871, 3), (5874, 4), (5878, 2), (5880, 4), (5884, 5),
    (5889, 3), (5892, 7), (5899, 5), (5904, 3), (5907, 7), (5914, 2), (5916, 6), (5922, 3),
    (5925, 4), (5929, 2), (5931, 2), (5933, 1), (5934, 2), (5936, 3), (5939, 3), (5942, 2),
    (5944, 3), (5947, 4), (5951, 2), (5953, 2), (5955, 1), (5956, 3), (5959, 2), (5961, 4),
    (5965, 2), (5967, 1), (5968, 2), (5970, 1), (5971, 1),
];

/// Triangles as edge-index triples, counter-clockwise seen from the
/// outside (below-level) region.
pub(crate) const TILING_TRIS: [[u8; 3]; 5972] = [
    [0, 3, 8], [0, 9, 1], [1, 3, 9], [3, 8, 9], [1, 10, 2], [0, 3, 8], [1, 10, 2], [0, 1, 8],
    [1, 10, 8], [10, 2, 8], [2, 3, 8], [0, 9, 2], [9, 10, 2], [2, 3, 10], [3, 8, 10], [8, 9, 10],
    [2, 11, 3], [0, 2, 8], [2, 11, 8], [0, 9, 1], [2, 11, 3], [0, 9, 3], [9, 1, 11], [1, 2, 11],
    [9, 11, 3], [1, 2, 9], [2, 11, 9], [11, 8, 9], [1, 10, 3], [10, 11, 3], [0, 1, 8], [1, 10, 8],
    [10, 11, 8], [0, 9, 3], [9, 10, 3], [10, 11, 3], [8, 9, 11], [9, 10, 11], [4, 8, 7], [0, 3, 4],
    [3, 7, 4], [0, 9, 1], [4, 8, 7], [0, 8, 1], [8, 7, 1], [7, 4, 1], [4, 9, 1], [1, 3, 9],
    [3, 7, 9], [7, 4, 9], [1, 10, 2], [4, 8, 7], [1, 10, 4], [10, 7, 4], [10, 8, 7], [10, 2, 8],
    [2, 1, 8], [1, 4, 8], [0, 3, 4], [3, 7, 4], [1, 10, 2], [0, 3, 10], [3, 7, 10], [7, 1, 10],
    [7, 4, 1], [4, 2, 1], [4, 10, 2], [4, 0, 10], [0, 1, 4], [1, 10, 4], [10, 2, 4], [2, 3, 4],
    [3, 7, 4], [0, 9, 2], [9, 10, 2], [4, 8, 7], [0, 9, 7], [9, 10, 7], [10, 8, 7], [10, 4, 8],
    [10, 2, 4], [2, 7, 4], [2, 0, 7], [0, 8, 2], [8, 7, 2], [7, 4, 2], [4, 9, 2], [9, 10, 2],
    [2, 3, 10], [3, 7, 10], [7, 4, 10], [4, 9, 10], [2, 11, 3], [4, 8, 7], [2, 11, 4], [11, 7, 4],
    [2, 4, 3], [4, 8, 3], [0, 2, 4], [2, 11, 4], [11, 7, 4], [0, 9, 1], [2, 11, 3], [4, 8, 7],
    [0, 8, 1], [8, 7, 1], [7, 4, 1], [4, 9, 1], [2, 11, 3], [7, 4, 2], [4, 3, 2], [4, 11, 3],
    [4, 9, 11], [9, 2, 11], [9, 7, 2], [9, 1, 7], [1, 0, 7], [0, 8, 7], [0, 9, 1], [2, 11, 4],
    [11, 7, 4], [2, 4, 3], [4, 8, 3], [0, 9, 11], [9, 2, 11], [9, 7, 2], [9, 1, 7], [1, 0, 7],
    [0, 11, 7], [7, 4, 2], [4, 8, 2], [8, 3, 2], [12, 0, 8], [12, 8, 3], [12, 3, 2], [12, 2, 11],
    [12, 11, 7], [12, 7, 4], [12, 4, 9], [12, 9, 1], [12, 1, 0], [0, 9, 3], [9, 1, 11], [1, 2, 11],
    [9, 11, 3], [4, 8, 7], [9, 1, 7], [1, 8, 7], [1, 4, 8], [1, 2, 4], [2, 7, 4], [2, 9, 7],
    [2, 11, 9], [11, 3, 9], [3, 0, 9], [12, 0, 8], [12, 8, 7], [12, 7, 4], [12, 4, 9], [12, 9, 1],
    [12, 1, 2], [12, 2, 11], [12, 11, 3], [12, 3, 0], [12, 0, 9], [12, 9, 1], [12, 1, 2],
    [12, 2, 11], [12, 11, 7], [12, 7, 4], [12, 4, 8], [12, 8, 3], [12, 3, 0], [0, 8, 3], [1, 2, 9],
    [2, 11, 9], [11, 7, 9], [7, 4, 9], [0, 8, 3], [1, 2, 8], [1, 8, 12], [1, 12, 11], [1, 11, 7],
    [1, 7, 4], [1, 4, 9], [2, 11, 4], [2, 4, 12], [2, 12, 8], [4, 11, 12], [1, 2, 9], [2, 11, 9],
    [11, 7, 9], [7, 4, 9], [1, 10, 3], [10, 11, 3], [4, 8, 7], [1, 10, 8], [10, 4, 8], [10, 11, 4],
    [11, 3, 4], [3, 1, 4], [1, 7, 4], [1, 8, 7], [1, 10, 3], [10, 11, 4], [11, 7, 4], [10, 4, 3],
    [4, 8, 3], [0, 1, 4], [1, 10, 4], [10, 11, 4], [11, 7, 4], [0, 9, 3], [9, 10, 3], [10, 11, 3],
    [4, 8, 7], [0, 9, 7], [9, 10, 7], [10, 8, 7], [10, 4, 8], [10, 11, 4], [11, 3, 12], [3, 0, 12],
    [0, 7, 12], [7, 4, 12], [4, 11, 12], [12, 0, 8], [12, 8, 7], [12, 7, 4], [12, 4, 9],
    [12, 9, 10], [12, 10, 11], [12, 11, 3], [12, 3, 0], [12, 0, 9], [12, 9, 10], [12, 10, 11],
    [12, 11, 7], [12, 7, 4], [12, 4, 8], [12, 8, 3], [12, 3, 0], [0, 8, 3], [4, 9, 7], [9, 10, 7],
    [10, 11, 7], [0, 10, 11], [0, 8, 10], [8, 3, 10], [3, 4, 10], [4, 9, 10], [3, 0, 12],
    [0, 11, 12], [11, 7, 12], [7, 4, 12], [4, 3, 12], [4, 9, 7], [9, 10, 7], [10, 11, 7],
    [4, 5, 9], [0, 3, 8], [4, 5, 9], [0, 3, 9], [3, 8, 5], [8, 4, 5], [3, 5, 9], [0, 4, 1],
    [4, 5, 1], [1, 3, 5], [3, 8, 5], [8, 4, 5], [1, 10, 2], [4, 5, 9], [1, 9, 2], [9, 4, 2],
    [4, 5, 2], [5, 10, 2], [0, 3, 8], [1, 10, 2], [4, 5, 9], [0, 3, 9], [3, 8, 5], [8, 4, 5],
    [3, 5, 9], [1, 10, 2], [3, 8, 10], [8, 1, 10], [8, 4, 1], [4, 2, 1], [4, 10, 2], [4, 3, 10],
    [4, 5, 3], [5, 9, 3], [9, 0, 3], [0, 3, 8], [1, 9, 2], [9, 4, 2], [4, 5, 2], [5, 10, 2],
    [0, 3, 5], [3, 4, 5], [3, 10, 4], [3, 8, 10], [8, 0, 10], [0, 5, 10], [10, 2, 4], [2, 1, 4],
    [1, 9, 4], [12, 0, 3], [12, 3, 8], [12, 8, 4], [12, 4, 5], [12, 5, 10], [12, 10, 2],
    [12, 2, 1], [12, 1, 9], [12, 9, 0], [0, 1, 8], [1, 10, 8], [10, 2, 8], [2, 3, 8], [4, 5, 9],
    [10, 2, 4], [2, 9, 4], [2, 5, 9], [2, 3, 5], [3, 4, 5], [3, 10, 4], [3, 8, 10], [8, 0, 10],
    [0, 1, 10], [12, 0, 1], [12, 1, 10], [12, 10, 2], [12, 2, 3], [12, 3, 8], [12, 8, 4],
    [12, 4, 5], [12, 5, 9], [12, 9, 0], [12, 0, 1], [12, 1, 9], [12, 9, 4], [12, 4, 5],
    [12, 5, 10], [12, 10, 2], [12, 2, 3], [12, 3, 8], [12, 8, 0], [0, 1, 9], [2, 3, 10],
    [3, 8, 10], [8, 4, 10], [4, 5, 10], [0, 1, 9], [2, 3, 9], [2, 9, 12], [2, 12, 8], [2, 8, 4],
    [2, 4, 5], [2, 5, 10], [3, 8, 5], [3, 5, 12], [3, 12, 9], [5, 8, 12], [0, 4, 2], [4, 5, 2],
    [5, 10, 2], [2, 3, 10], [3, 8, 10], [8, 4, 10], [4, 5, 10], [2, 11, 3], [4, 5, 9], [2, 11, 4],
    [11, 9, 4], [11, 5, 9], [11, 3, 5], [3, 2, 5], [2, 4, 5], [0, 2, 8], [2, 11, 8], [4, 5, 9],
    [0, 2, 5], [2, 4, 5], [2, 11, 4], [11, 9, 4], [11, 5, 9], [11, 8, 5], [8, 0, 5], [0, 2, 9],
    [2, 11, 9], [11, 8, 5], [8, 4, 5], [11, 5, 9], [0, 4, 1], [4, 5, 1], [2, 11, 3], [0, 4, 11],
    [4, 2, 11], [4, 5, 2], [5, 3, 2], [5, 11, 3], [5, 1, 11], [1, 0, 11], [0, 4, 3], [4, 5, 3],
    [5, 1, 11], [1, 2, 11], [5, 11, 3], [1, 2, 5], [2, 11, 5], [11, 8, 5], [8, 4, 5], [1, 10, 3],
    [10, 11, 3], [4, 5, 9], [1, 10, 4], [10, 11, 4], [11, 9, 4], [11, 5, 9], [11, 3, 5], [3, 4, 5],
    [3, 1, 4], [1, 9, 3], [9, 4, 3], [4, 5, 3], [5, 10, 3], [10, 11, 3], [0, 1, 8], [1, 10, 8],
    [10, 11, 8], [4, 5, 9], [0, 1, 12], [1, 4, 12], [4, 5, 12], [5, 0, 12], [1, 10, 4],
    [10, 11, 4], [11, 9, 4], [11, 5, 9], [11, 8, 5], [8, 0, 5], [12, 0, 1], [12, 1, 10],
    [12, 10, 11], [12, 11, 8], [12, 8, 4], [12, 4, 5], [12, 5, 9], [12, 9, 0], [12, 0, 1],
    [12, 1, 9], [12, 9, 4], [12, 4, 5], [12, 5, 10], [12, 10, 11], [12, 11, 8], [12, 8, 0],
    [0, 1, 9], [4, 5, 8], [5, 10, 8], [10, 11, 8], [0, 1, 12], [1, 4, 12], [4, 5, 12], [5, 0, 12],
    [1, 11, 4], [1, 9, 11], [9, 0, 11], [0, 5, 11], [5, 10, 11], [11, 8, 4], [0, 4, 3], [4, 5, 3],
    [5, 10, 3], [10, 11, 3], [4, 5, 8], [5, 10, 8], [10, 11, 8], [5, 9, 7], [9, 8, 7], [0, 3, 9],
    [3, 7, 9], [7, 5, 9], [0, 8, 1], [8, 7, 1], [7, 5, 1], [1, 3, 5], [3, 7, 5], [1, 10, 2],
    [5, 9, 7], [9, 8, 7], [1, 10, 8], [10, 2, 8], [2, 9, 8], [2, 7, 9], [2, 1, 7], [1, 8, 7],
    [7, 5, 9], [1, 9, 2], [9, 8, 2], [8, 7, 2], [7, 5, 2], [5, 10, 2], [0, 3, 9], [3, 7, 9],
    [7, 5, 9], [1, 10, 2], [0, 3, 10], [3, 7, 10], [7, 1, 10], [7, 2, 1], [7, 5, 2], [5, 9, 12],
    [9, 0, 12], [0, 10, 12], [10, 2, 12], [2, 5, 12], [12, 0, 3], [12, 3, 7], [12, 7, 5],
    [12, 5, 10], [12, 10, 2], [12, 2, 1], [12, 1, 9], [12, 9, 0], [12, 0, 1], [12, 1, 10],
    [12, 10, 2], [12, 2, 3], [12, 3, 7], [12, 7, 5], [12, 5, 9], [12, 9, 0], [0, 1, 9], [2, 3, 10],
    [3, 7, 10], [7, 5, 10], [0, 7, 5], [0, 1, 7], [1, 9, 7], [9, 2, 7], [2, 3, 7], [9, 0, 12],
    [0, 5, 12], [5, 10, 12], [10, 2, 12], [2, 9, 12], [0, 8, 2], [8, 7, 2], [7, 5, 2], [5, 10, 2],
    [2, 3, 10], [3, 7, 10], [7, 5, 10], [2, 11, 3], [5, 9, 7], [9, 8, 7], [2, 11, 9], [11, 5, 9],
    [11, 3, 5], [3, 2, 5], [2, 8, 5], [2, 9, 8], [8, 7, 5], [2, 11, 5], [11, 7, 5], [2, 5, 3],
    [5, 9, 3], [9, 8, 3], [0, 2, 9], [2, 11, 9], [11, 7, 9], [7, 5, 9], [0, 8, 1], [8, 7, 1],
    [7, 5, 1], [2, 11, 3], [0, 8, 12], [8, 2, 12], [2, 11, 12], [11, 0, 12], [8, 7, 2], [7, 5, 2],
    [5, 3, 2], [5, 11, 3], [5, 1, 11], [1, 0, 11], [12, 0, 8], [12, 8, 3], [12, 3, 2], [12, 2, 11],
    [12, 11, 7], [12, 7, 5], [12, 5, 1], [12, 1, 0], [12, 0, 8], [12, 8, 7], [12, 7, 5],
    [12, 5, 1], [12, 1, 2], [12, 2, 11], [12, 11, 3], [12, 3, 0], [0, 8, 3], [1, 2, 5], [2, 11, 5],
    [11, 7, 5], [0, 8, 12], [8, 1, 12], [1, 2, 12], [2, 11, 12], [11, 0, 12], [8, 5, 1], [8, 3, 5],
    [3, 0, 5], [0, 11, 5], [11, 7, 5], [1, 2, 5], [2, 11, 5], [11, 7, 5], [1, 10, 3], [10, 11, 3],
    [5, 9, 7], [9, 8, 7], [1, 10, 7], [10, 8, 7], [10, 11, 12], [11, 3, 12], [3, 1, 12],
    [1, 7, 12], [7, 5, 12], [5, 9, 12], [9, 8, 12], [8, 10, 12], [12, 1, 9], [12, 9, 8],
    [12, 8, 7], [12, 7, 5], [12, 5, 10], [12, 10, 11], [12, 11, 3], [12, 3, 1], [12, 1, 10],
    [12, 10, 11], [12, 11, 7], [12, 7, 5], [12, 5, 9], [12, 9, 8], [12, 8, 3], [12, 3, 1],
    [1, 9, 3], [9, 8, 3], [5, 10, 7], [10, 11, 7], [1, 9, 7], [9, 11, 7], [9, 8, 12], [8, 3, 12],
    [3, 1, 12], [1, 7, 12], [7, 5, 12], [5, 10, 12], [10, 11, 12], [11, 9, 12], [0, 1, 11],
    [1, 10, 11], [0, 11, 9], [11, 7, 9], [7, 5, 9], [0, 1, 9], [5, 10, 7], [10, 11, 7], [0, 7, 10],
    [0, 1, 7], [1, 11, 7], [7, 5, 10], [1, 9, 11], [9, 0, 11], [0, 10, 11], [0, 8, 5], [8, 7, 5],
    [0, 5, 3], [5, 10, 3], [10, 11, 3], [0, 8, 3], [5, 10, 7], [10, 11, 7], [0, 8, 10], [8, 5, 10],
    [8, 3, 5], [3, 0, 5], [0, 11, 5], [0, 10, 11], [11, 7, 5], [5, 10, 7], [10, 11, 7], [5, 6, 10],
    [0, 3, 8], [5, 6, 10], [0, 3, 5], [3, 10, 5], [3, 6, 10], [3, 8, 6], [8, 0, 6], [0, 5, 6],
    [0, 9, 1], [5, 6, 10], [0, 9, 6], [9, 5, 6], [0, 6, 1], [6, 10, 1], [1, 3, 9], [3, 8, 9],
    [5, 6, 10], [1, 3, 6], [3, 5, 6], [3, 8, 5], [8, 10, 5], [8, 6, 10], [8, 9, 6], [9, 1, 6],
    [1, 3, 10], [3, 8, 10], [8, 9, 6], [9, 5, 6], [8, 6, 10], [1, 5, 2], [5, 6, 2], [0, 3, 8],
    [1, 5, 2], [5, 6, 2], [0, 3, 5], [3, 8, 5], [8, 1, 5], [8, 6, 1], [8, 0, 6], [0, 5, 6],
    [6, 2, 1], [0, 1, 8], [1, 5, 8], [5, 6, 8], [6, 2, 8], [2, 3, 8], [0, 9, 2], [9, 5, 2],
    [5, 6, 2], [2, 3, 6], [3, 8, 6], [8, 9, 6], [9, 5, 6], [2, 11, 3], [5, 6, 10], [2, 10, 3],
    [10, 5, 3], [5, 6, 3], [6, 11, 3], [0, 2, 8], [2, 11, 8], [5, 6, 10], [0, 2, 5], [2, 11, 5],
    [11, 8, 5], [8, 10, 5], [8, 6, 10], [8, 0, 6], [0, 5, 6], [0, 2, 8], [2, 10, 8], [10, 5, 8],
    [5, 6, 8], [6, 11, 8], [0, 9, 1], [2, 11, 3], [5, 6, 10], [0, 9, 6], [9, 5, 6], [0, 6, 1],
    [6, 10, 1], [2, 11, 3], [0, 9, 11], [9, 2, 11], [9, 5, 2], [5, 3, 2], [5, 11, 3], [5, 0, 11],
    [5, 6, 0], [6, 10, 0], [10, 1, 0], [0, 9, 1], [2, 10, 3], [10, 5, 3], [5, 6, 3], [6, 11, 3],
    [0, 11, 5], [0, 9, 11], [9, 6, 11], [11, 3, 5], [3, 2, 5], [2, 10, 5], [9, 1, 6], [1, 0, 6],
    [0, 5, 6], [12, 0, 9], [12, 9, 5], [12, 5, 6], [12, 6, 11], [12, 11, 3], [12, 3, 2],
    [12, 2, 10], [12, 10, 1], [12, 1, 0], [0, 9, 3], [9, 1, 11], [1, 2, 11], [9, 11, 3],
    [5, 6, 10], [0, 11, 5], [0, 9, 11], [9, 1, 11], [1, 2, 11], [11, 3, 5], [3, 10, 5], [3, 6, 10],
    [3, 0, 6], [0, 5, 6], [12, 0, 9], [12, 9, 5], [12, 5, 6], [12, 6, 10], [12, 10, 1], [12, 1, 2],
    [12, 2, 11], [12, 11, 3], [12, 3, 0], [12, 0, 9], [12, 9, 1], [12, 1, 2], [12, 2, 10],
    [12, 10, 5], [12, 5, 6], [12, 6, 11], [12, 11, 3], [12, 3, 0], [0, 9, 3], [9, 5, 3], [5, 6, 3],
    [6, 11, 3], [1, 2, 10], [0, 9, 5], [0, 5, 6], [0, 6, 11], [0, 11, 12], [0, 12, 3], [1, 2, 12],
    [1, 12, 10], [2, 10, 12], [3, 12, 9], [3, 9, 11], [9, 12, 11], [1, 2, 9], [2, 11, 9],
    [11, 8, 9], [5, 6, 10], [1, 2, 12], [2, 5, 12], [5, 6, 12], [6, 1, 12], [2, 11, 5], [11, 8, 5],
    [8, 10, 5], [8, 6, 10], [8, 9, 6], [9, 1, 6], [12, 1, 2], [12, 2, 11], [12, 11, 8], [12, 8, 9],
    [12, 9, 5], [12, 5, 6], [12, 6, 10], [12, 10, 1], [12, 1, 2], [12, 2, 10], [12, 10, 5],
    [12, 5, 6], [12, 6, 11], [12, 11, 8], [12, 8, 9], [12, 9, 1], [1, 2, 10], [5, 6, 9],
    [6, 11, 9], [11, 8, 9], [1, 2, 12], [2, 5, 12], [5, 6, 12], [6, 1, 12], [2, 8, 5], [2, 10, 8],
    [10, 1, 8], [1, 6, 8], [6, 11, 8], [8, 9, 5], [1, 5, 3], [5, 6, 3], [6, 11, 3], [0, 1, 8],
    [1, 5, 8], [5, 6, 8], [6, 11, 8], [0, 9, 3], [9, 5, 3], [5, 6, 3], [6, 11, 3], [5, 6, 9],
    [6, 11, 9], [11, 8, 9], [4, 8, 7], [5, 6, 10], [4, 8, 5], [8, 7, 10], [7, 6, 10], [8, 10, 5],
    [0, 3, 4], [3, 7, 4], [5, 6, 10], [0, 3, 5], [3, 10, 5], [3, 7, 10], [7, 4, 10], [4, 0, 10],
    [0, 6, 10], [0, 5, 6], [0, 3, 4], [3, 7, 10], [7, 6, 10], [3, 10, 4], [10, 5, 4], [0, 9, 1],
    [4, 8, 7], [5, 6, 10], [0, 8, 1], [8, 7, 1], [7, 4, 1], [4, 9, 1], [5, 6, 10], [0, 8, 5],
    [8, 10, 5], [8, 6, 10], [8, 1, 6], [8, 7, 1], [7, 4, 1], [4, 9, 1], [1, 0, 6], [0, 5, 6],
    [0, 9, 6], [9, 5, 6], [0, 6, 1], [6, 10, 1], [4, 8, 7], [0, 10, 7], [0, 6, 10], [0, 9, 6],
    [9, 5, 6], [10, 8, 7], [10, 4, 8], [10, 1, 4], [1, 7, 4], [1, 0, 7], [12, 0, 8], [12, 8, 7],
    [12, 7, 4], [12, 4, 9], [12, 9, 5], [12, 5, 6], [12, 6, 10], [12, 10, 1], [12, 1, 0],
    [0, 9, 1], [4, 8, 5], [8, 7, 10], [7, 6, 10], [8, 10, 5], [0, 9, 7], [9, 1, 7], [1, 8, 7],
    [1, 6, 8], [1, 0, 6], [0, 7, 6], [6, 10, 8], [10, 5, 8], [5, 4, 8], [12, 0, 8], [12, 8, 7],
    [12, 7, 6], [12, 6, 10], [12, 10, 5], [12, 5, 4], [12, 4, 9], [12, 9, 1], [12, 1, 0],
    [12, 0, 9], [12, 9, 5], [12, 5, 4], [12, 4, 8], [12, 8, 7], [12, 7, 6], [12, 6, 10],
    [12, 10, 1], [12, 1, 0], [0, 8, 1], [8, 7, 1], [7, 6, 1], [6, 10, 1], [4, 9, 5], [0, 8, 7],
    [0, 7, 6], [0, 6, 10], [0, 10, 12], [0, 12, 1], [1, 12, 8], [1, 8, 10], [4, 9, 12], [4, 12, 5],
    [5, 12, 9], [8, 12, 10], [1, 3, 9], [3, 7, 9], [7, 4, 9], [5, 6, 10], [1, 3, 6], [3, 5, 6],
    [3, 10, 5], [3, 7, 10], [7, 4, 12], [4, 9, 12], [9, 1, 12], [1, 6, 12], [6, 10, 12],
    [10, 7, 12], [12, 1, 3], [12, 3, 7], [12, 7, 4], [12, 4, 9], [12, 9, 5], [12, 5, 6],
    [12, 6, 10], [12, 10, 1], [12, 1, 3], [12, 3, 7], [12, 7, 6], [12, 6, 10], [12, 10, 5],
    [12, 5, 4], [12, 4, 9], [12, 9, 1], [1, 3, 10], [3, 7, 10], [7, 6, 10], [4, 9, 5], [1, 3, 4],
    [3, 5, 4], [3, 9, 5], [3, 7, 9], [7, 6, 12], [6, 10, 12], [10, 1, 12], [1, 4, 12], [4, 9, 12],
    [9, 7, 12], [1, 5, 2], [5, 6, 2], [4, 8, 7], [1, 5, 8], [5, 6, 8], [6, 2, 8], [2, 4, 8],
    [2, 1, 4], [1, 7, 4], [1, 8, 7], [1, 5, 2], [5, 4, 2], [4, 8, 2], [8, 7, 2], [7, 6, 2],
    [0, 3, 4], [3, 7, 4], [1, 5, 2], [5, 6, 2], [0, 3, 6], [3, 5, 6], [3, 7, 12], [7, 4, 12],
    [4, 0, 12], [0, 6, 12], [6, 2, 12], [2, 1, 12], [1, 5, 12], [5, 3, 12], [12, 0, 1], [12, 1, 5],
    [12, 5, 6], [12, 6, 2], [12, 2, 3], [12, 3, 7], [12, 7, 4], [12, 4, 0], [12, 0, 3], [12, 3, 7],
    [12, 7, 6], [12, 6, 2], [12, 2, 1], [12, 1, 5], [12, 5, 4], [12, 4, 0], [0, 1, 4], [1, 5, 4],
    [2, 3, 6], [3, 7, 6], [0, 1, 6], [1, 7, 6], [1, 5, 12], [5, 4, 12], [4, 0, 12], [0, 6, 12],
    [6, 2, 12], [2, 3, 12], [3, 7, 12], [7, 1, 12], [0, 9, 2], [9, 5, 2], [5, 6, 2], [4, 8, 7],
    [0, 9, 12], [9, 5, 12], [5, 8, 12], [8, 7, 12], [7, 0, 12], [5, 6, 8], [6, 2, 8], [2, 4, 8],
    [2, 7, 4], [2, 0, 7], [12, 0, 8], [12, 8, 7], [12, 7, 4], [12, 4, 9], [12, 9, 5], [12, 5, 6],
    [12, 6, 2], [12, 2, 0], [12, 0, 9], [12, 9, 5], [12, 5, 4], [12, 4, 8], [12, 8, 7], [12, 7, 6],
    [12, 6, 2], [12, 2, 0], [0, 8, 2], [8, 7, 2], [7, 6, 2], [4, 9, 5], [0, 8, 12], [8, 7, 12],
    [7, 9, 12], [9, 5, 12], [5, 0, 12], [7, 6, 9], [6, 2, 9], [2, 4, 9], [2, 5, 4], [2, 0, 5],
    [2, 3, 6], [3, 7, 9], [7, 4, 9], [3, 9, 6], [9, 5, 6], [2, 3, 6], [3, 7, 6], [4, 9, 5],
    [2, 3, 4], [3, 5, 4], [3, 9, 5], [3, 7, 9], [7, 6, 9], [6, 2, 9], [2, 4, 9], [2, 11, 3],
    [4, 8, 7], [5, 6, 10], [2, 10, 3], [10, 5, 3], [5, 6, 3], [6, 11, 3], [4, 8, 7], [2, 10, 4],
    [10, 7, 4], [10, 8, 7], [10, 5, 8], [5, 2, 8], [5, 3, 2], [5, 6, 3], [6, 11, 3], [2, 4, 8],
    [2, 11, 4], [11, 7, 4], [2, 4, 3], [4, 8, 3], [5, 6, 10], [2, 8, 5], [2, 4, 8], [2, 11, 4],
    [11, 7, 4], [8, 10, 5], [8, 6, 10], [8, 3, 6], [3, 5, 6], [3, 2, 5], [12, 2, 10], [12, 10, 5],
    [12, 5, 6], [12, 6, 11], [12, 11, 7], [12, 7, 4], [12, 4, 8], [12, 8, 3], [12, 3, 2],
    [2, 11, 3], [4, 8, 5], [8, 7, 10], [7, 6, 10], [8, 10, 5], [2, 11, 4], [11, 5, 4], [11, 3, 5],
    [3, 2, 5], [2, 8, 5], [2, 4, 8], [8, 10, 5], [8, 7, 10], [7, 6, 10], [12, 2, 10], [12, 10, 5],
    [12, 5, 4], [12, 4, 8], [12, 8, 7], [12, 7, 6], [12, 6, 11], [12, 11, 3], [12, 3, 2],
    [12, 2, 11], [12, 11, 7], [12, 7, 6], [12, 6, 10], [12, 10, 5], [12, 5, 4], [12, 4, 8],
    [12, 8, 3], [12, 3, 2], [2, 10, 3], [10, 5, 3], [5, 4, 3], [4, 8, 3], [6, 11, 7], [2, 10, 5],
    [2, 5, 4], [2, 4, 8], [2, 8, 12], [2, 12, 3], [3, 12, 10], [3, 10, 8], [6, 11, 12], [6, 12, 7],
    [7, 12, 11], [8, 10, 12], [0, 2, 4], [2, 11, 4], [11, 7, 4], [5, 6, 10], [2, 11, 12],
    [11, 7, 12], [7, 10, 12], [10, 5, 12], [5, 2, 12], [7, 4, 10], [4, 0, 10], [0, 6, 10],
    [0, 5, 6], [0, 2, 5], [12, 0, 2], [12, 2, 10], [12, 10, 5], [12, 5, 6], [12, 6, 11],
    [12, 11, 7], [12, 7, 4], [12, 4, 0], [12, 0, 2], [12, 2, 11], [12, 11, 7], [12, 7, 6],
    [12, 6, 10], [12, 10, 5], [12, 5, 4], [12, 4, 0], [0, 2, 4], [2, 10, 4], [10, 5, 4],
    [6, 11, 7], [2, 10, 12], [10, 5, 12], [5, 11, 12], [11, 7, 12], [7, 2, 12], [5, 4, 11],
    [4, 0, 11], [0, 6, 11], [0, 7, 6], [0, 2, 7], [0, 9, 1], [2, 11, 3], [4, 8, 7], [5, 6, 10],
    [0, 8, 1], [8, 7, 1], [7, 4, 1], [4, 9, 1], [2, 11, 3], [5, 6, 10], [0, 9, 6], [9, 5, 6],
    [0, 6, 1], [6, 10, 1], [2, 11, 3], [4, 8, 7], [12, 0, 8], [12, 8, 7], [12, 7, 4], [12, 4, 9],
    [12, 9, 5], [12, 5, 6], [12, 6, 10], [12, 10, 1], [12, 1, 0], [2, 11, 3], [8, 7, 2], [7, 4, 2],
    [4, 3, 2], [4, 11, 3], [4, 9, 11], [9, 5, 11], [5, 2, 11], [5, 8, 2], [5, 6, 8], [6, 10, 8],
    [10, 1, 8], [1, 0, 8], [0, 9, 1], [2, 10, 3], [10, 5, 3], [5, 6, 3], [6, 11, 3], [4, 8, 7],
    [0, 8, 1], [8, 7, 1], [7, 4, 1], [4, 9, 1], [2, 10, 3], [10, 5, 3], [5, 6, 3], [6, 11, 3],
    [0, 8, 10], [8, 2, 10], [8, 7, 2], [7, 4, 2], [4, 9, 2], [9, 3, 2], [9, 6, 3], [9, 1, 6],
    [1, 0, 6], [0, 5, 6], [0, 10, 5], [6, 11, 3], [12, 0, 9], [12, 9, 5], [12, 5, 6], [12, 6, 11],
    [12, 11, 3], [12, 3, 2], [12, 2, 10], [12, 10, 1], [12, 1, 0], [4, 8, 7], [0, 9, 7], [9, 2, 7],
    [9, 5, 2], [5, 3, 2], [5, 6, 3], [6, 11, 3], [2, 8, 7], [2, 4, 8], [2, 10, 4], [10, 1, 4],
    [1, 7, 4], [1, 0, 7], [12, 0, 8], [12, 8, 7], [12, 7, 4], [12, 4, 9], [12, 9, 5], [12, 5, 6],
    [12, 6, 11], [12, 11, 3], [12, 3, 2], [12, 2, 10], [12, 10, 1], [12, 1, 0], [0, 9, 1],
    [2, 11, 4], [11, 7, 4], [2, 4, 3], [4, 8, 3], [5, 6, 10], [12, 0, 8], [12, 8, 3], [12, 3, 2],
    [12, 2, 11], [12, 11, 7], [12, 7, 4], [12, 4, 9], [12, 9, 1], [12, 1, 0], [5, 6, 10],
    [0, 8, 5], [8, 10, 5], [8, 6, 10], [8, 3, 6], [3, 9, 6], [3, 2, 9], [2, 11, 9], [11, 7, 9],
    [7, 4, 9], [9, 1, 6], [1, 0, 6], [0, 5, 6], [0, 9, 6], [9, 5, 6], [0, 6, 1], [6, 10, 1],
    [2, 11, 4], [11, 7, 4], [2, 4, 3], [4, 8, 3], [0, 9, 11], [9, 2, 11], [9, 5, 2], [5, 8, 2],
    [5, 6, 8], [6, 10, 8], [10, 1, 8], [1, 4, 8], [1, 11, 4], [1, 0, 11], [11, 7, 4], [8, 3, 2],
    [12, 0, 8], [12, 8, 3], [12, 3, 2], [12, 2, 11], [12, 11, 7], [12, 7, 4], [12, 4, 9],
    [12, 9, 5], [12, 5, 6], [12, 6, 10], [12, 10, 1], [12, 1, 0], [0, 9, 1], [12, 2, 10],
    [12, 10, 5], [12, 5, 6], [12, 6, 11], [12, 11, 7], [12, 7, 4], [12, 4, 8], [12, 8, 3],
    [12, 3, 2], [0, 7, 10], [0, 9, 7], [9, 11, 7], [9, 6, 11], [7, 4, 10], [4, 8, 10], [8, 3, 10],
    [3, 2, 10], [9, 1, 6], [1, 0, 6], [0, 5, 6], [0, 10, 5], [12, 0, 8], [12, 8, 3], [12, 3, 2],
    [12, 2, 10], [12, 10, 5], [12, 5, 6], [12, 6, 11], [12, 11, 7], [12, 7, 4], [12, 4, 9],
    [12, 9, 1], [12, 1, 0], [12, 0, 9], [12, 9, 5], [12, 5, 6], [12, 6, 11], [12, 11, 7],
    [12, 7, 4], [12, 4, 8], [12, 8, 3], [12, 3, 2], [12, 2, 10], [12, 10, 1], [12, 1, 0],
    [0, 8, 1], [8, 3, 10], [3, 2, 10], [8, 10, 1], [4, 9, 7], [9, 5, 11], [5, 6, 11], [9, 11, 7],
    [0, 8, 5], [8, 3, 5], [3, 9, 5], [3, 4, 9], [3, 2, 4], [2, 10, 4], [10, 1, 4], [1, 11, 4],
    [1, 0, 11], [0, 5, 11], [5, 6, 11], [11, 7, 4], [0, 9, 3], [9, 1, 11], [1, 2, 11], [9, 11, 3],
    [4, 8, 7], [5, 6, 10], [12, 0, 8], [12, 8, 7], [12, 7, 4], [12, 4, 9], [12, 9, 1], [12, 1, 2],
    [12, 2, 11], [12, 11, 3], [12, 3, 0], [5, 6, 10], [0, 8, 5], [8, 10, 5], [8, 7, 10],
    [7, 4, 10], [4, 3, 10], [4, 9, 3], [9, 11, 3], [9, 1, 11], [1, 2, 11], [3, 0, 10], [0, 6, 10],
    [0, 5, 6], [12, 0, 9], [12, 9, 5], [12, 5, 6], [12, 6, 10], [12, 10, 1], [12, 1, 2],
    [12, 2, 11], [12, 11, 3], [12, 3, 0], [4, 8, 7], [5, 6, 8], [6, 10, 8], [10, 4, 8], [10, 1, 4],
    [1, 2, 4], [2, 7, 4], [2, 8, 7], [2, 5, 8], [2, 11, 5], [11, 3, 5], [3, 0, 5], [0, 9, 5],
    [12, 0, 8], [12, 8, 7], [12, 7, 4], [12, 4, 9], [12, 9, 5], [12, 5, 6], [12, 6, 10],
    [12, 10, 1], [12, 1, 2], [12, 2, 11], [12, 11, 3], [12, 3, 0], [12, 0, 9], [12, 9, 1],
    [12, 1, 2], [12, 2, 10], [12, 10, 5], [12, 5, 6], [12, 6, 11], [12, 11, 3], [12, 3, 0],
    [4, 8, 7], [0, 9, 7], [9, 1, 7], [1, 8, 7], [1, 4, 8], [1, 2, 4], [2, 10, 4], [10, 7, 4],
    [10, 0, 7], [10, 5, 0], [5, 6, 0], [6, 11, 0], [11, 3, 0], [12, 0, 8], [12, 8, 7], [12, 7, 4],
    [12, 4, 9], [12, 9, 1], [12, 1, 2], [12, 2, 10], [12, 10, 5], [12, 5, 6], [12, 6, 11],
    [12, 11, 3], [12, 3, 0], [0, 9, 3], [9, 5, 3], [5, 6, 3], [6, 11, 3], [1, 2, 10], [4, 8, 7],
    [0, 9, 3], [9, 5, 3], [5, 6, 3], [6, 11, 3], [1, 2, 4], [2, 7, 4], [2, 8, 7], [2, 10, 8],
    [10, 1, 8], [1, 4, 8], [12, 0, 8], [12, 8, 7], [12, 7, 4], [12, 4, 9], [12, 9, 5], [12, 5, 6],
    [12, 6, 11], [12, 11, 3], [12, 3, 0], [1, 2, 10], [0, 8, 10], [8, 2, 10], [8, 1, 2], [8, 7, 1],
    [7, 4, 1], [4, 10, 1], [4, 3, 10], [4, 9, 3], [9, 5, 3], [5, 6, 3], [6, 11, 3], [3, 0, 10],
    [12, 0, 9], [12, 9, 1], [12, 1, 2], [12, 2, 11], [12, 11, 7], [12, 7, 4], [12, 4, 8],
    [12, 8, 3], [12, 3, 0], [5, 6, 10], [0, 10, 5], [0, 7, 10], [0, 9, 7], [9, 1, 7], [1, 2, 7],
    [2, 11, 7], [7, 4, 10], [4, 8, 10], [8, 6, 10], [8, 3, 6], [3, 0, 6], [0, 5, 6], [0, 8, 3],
    [1, 2, 9], [2, 11, 9], [11, 7, 9], [7, 4, 9], [5, 6, 10], [0, 8, 5], [8, 10, 5], [8, 6, 10],
    [8, 3, 6], [3, 0, 6], [0, 5, 6], [1, 2, 9], [2, 11, 9], [11, 7, 9], [7, 4, 9], [12, 0, 9],
    [12, 9, 5], [12, 5, 6], [12, 6, 10], [12, 10, 1], [12, 1, 2], [12, 2, 11], [12, 11, 7],
    [12, 7, 4], [12, 4, 8], [12, 8, 3], [12, 3, 0], [0, 8, 3], [12, 1, 2], [12, 2, 11],
    [12, 11, 7], [12, 7, 4], [12, 4, 9], [12, 9, 5], [12, 5, 6], [12, 6, 10], [12, 10, 1],
    [0, 8, 5], [8, 2, 5], [8, 1, 2], [2, 11, 5], [11, 9, 5], [11, 7, 9], [7, 4, 9], [8, 6, 1],
    [8, 3, 6], [3, 0, 6], [0, 5, 6], [6, 10, 1], [12, 0, 9], [12, 9, 1], [12, 1, 2], [12, 2, 10],
    [12, 10, 5], [12, 5, 6], [12, 6, 11], [12, 11, 7], [12, 7, 4], [12, 4, 8], [12, 8, 3],
    [12, 3, 0], [0, 8, 3], [12, 1, 2], [12, 2, 10], [12, 10, 5], [12, 5, 6], [12, 6, 11],
    [12, 11, 7], [12, 7, 4], [12, 4, 9], [12, 9, 1], [0, 8, 10], [8, 2, 10], [8, 1, 2], [8, 6, 1],
    [8, 3, 6], [3, 0, 6], [0, 5, 6], [0, 10, 5], [6, 11, 1], [11, 7, 1], [7, 4, 1], [4, 9, 1],
    [12, 0, 9], [12, 9, 5], [12, 5, 6], [12, 6, 11], [12, 11, 7], [12, 7, 4], [12, 4, 8],
    [12, 8, 3], [12, 3, 0], [1, 2, 10], [0, 7, 10], [0, 9, 7], [9, 11, 7], [9, 5, 11], [5, 6, 11],
    [7, 2, 10], [7, 1, 2], [7, 4, 1], [4, 8, 1], [8, 10, 1], [8, 3, 10], [3, 0, 10], [0, 8, 3],
    [1, 2, 10], [4, 9, 7], [9, 5, 11], [5, 6, 11], [9, 11, 7], [0, 9, 1], [2, 11, 3], [4, 8, 5],
    [8, 7, 10], [7, 6, 10], [8, 10, 5], [12, 0, 8], [12, 8, 7], [12, 7, 6], [12, 6, 10],
    [12, 10, 5], [12, 5, 4], [12, 4, 9], [12, 9, 1], [12, 1, 0], [2, 11, 3], [0, 5, 11], [0, 8, 5],
    [8, 10, 5], [8, 7, 10], [7, 6, 10], [5, 2, 11], [5, 4, 2], [4, 9, 2], [9, 3, 2], [9, 11, 3],
    [9, 1, 11], [1, 0, 11], [12, 0, 9], [12, 9, 5], [12, 5, 4], [12, 4, 8], [12, 8, 7], [12, 7, 6],
    [12, 6, 10], [12, 10, 1], [12, 1, 0], [2, 11, 3], [0, 9, 11], [9, 2, 11], [9, 5, 2], [5, 4, 2],
    [4, 3, 2], [4, 11, 3], [4, 1, 11], [4, 8, 1], [8, 7, 1], [7, 6, 1], [6, 10, 1], [1, 0, 11],
    [0, 8, 1], [8, 7, 1], [7, 6, 1], [6, 10, 1], [2, 11, 3], [4, 9, 5], [0, 8, 1], [8, 7, 1],
    [7, 6, 1], [6, 10, 1], [2, 11, 4], [11, 5, 4], [11, 9, 5], [11, 3, 9], [3, 2, 9], [2, 4, 9],
    [0, 9, 1], [12, 2, 10], [12, 10, 5], [12, 5, 4], [12, 4, 8], [12, 8, 7], [12, 7, 6],
    [12, 6, 11], [12, 11, 3], [12, 3, 2], [0, 9, 7], [9, 2, 7], [2, 10, 7], [10, 8, 7], [10, 5, 8],
    [5, 4, 8], [9, 3, 2], [9, 6, 3], [9, 1, 6], [1, 0, 6], [0, 7, 6], [6, 11, 3], [12, 0, 8],
    [12, 8, 7], [12, 7, 6], [12, 6, 11], [12, 11, 3], [12, 3, 2], [12, 2, 10], [12, 10, 5],
    [12, 5, 4], [12, 4, 9], [12, 9, 1], [12, 1, 0], [12, 0, 9], [12, 9, 5], [12, 5, 4], [12, 4, 8],
    [12, 8, 7], [12, 7, 6], [12, 6, 11], [12, 11, 3], [12, 3, 2], [12, 2, 10], [12, 10, 1],
    [12, 1, 0], [12, 0, 8], [12, 8, 7], [12, 7, 6], [12, 6, 11], [12, 11, 3], [12, 3, 2],
    [12, 2, 10], [12, 10, 1], [12, 1, 0], [4, 9, 5], [7, 6, 9], [6, 11, 9], [11, 4, 9], [11, 3, 4],
    [3, 2, 4], [2, 5, 4], [2, 9, 5], [2, 7, 9], [2, 10, 7], [10, 1, 7], [1, 0, 7], [0, 8, 7],
    [0, 9, 1], [12, 2, 11], [12, 11, 7], [12, 7, 6], [12, 6, 10], [12, 10, 5], [12, 5, 4],
    [12, 4, 8], [12, 8, 3], [12, 3, 2], [0, 9, 11], [9, 2, 11], [9, 3, 2], [9, 6, 3], [9, 1, 6],
    [1, 0, 6], [0, 7, 6], [0, 11, 7], [6, 10, 3], [10, 5, 3], [5, 4, 3], [4, 8, 3], [12, 0, 8],
    [12, 8, 3], [12, 3, 2], [12, 2, 11], [12, 11, 7], [12, 7, 6], [12, 6, 10], [12, 10, 5],
    [12, 5, 4], [12, 4, 9], [12, 9, 1], [12, 1, 0], [12, 0, 9], [12, 9, 5], [12, 5, 4], [12, 4, 8],
    [12, 8, 3], [12, 3, 2], [12, 2, 11], [12, 11, 7], [12, 7, 6], [12, 6, 10], [12, 10, 1],
    [12, 1, 0], [12, 0, 8], [12, 8, 3], [12, 3, 2], [12, 2, 11], [12, 11, 7], [12, 7, 6],
    [12, 6, 10], [12, 10, 1], [12, 1, 0], [4, 9, 5], [0, 8, 5], [8, 3, 5], [3, 9, 5], [3, 4, 9],
    [3, 2, 4], [2, 11, 4], [11, 5, 4], [11, 0, 5], [11, 7, 0], [7, 6, 0], [6, 10, 0], [10, 1, 0],
    [0, 9, 1], [2, 10, 3], [10, 5, 3], [5, 4, 3], [4, 8, 3], [6, 11, 7], [0, 9, 6], [9, 7, 6],
    [9, 11, 7], [9, 1, 11], [1, 0, 11], [0, 6, 11], [2, 10, 3], [10, 5, 3], [5, 4, 3], [4, 8, 3],
    [12, 0, 8], [12, 8, 3], [12, 3, 2], [12, 2, 10], [12, 10, 5], [12, 5, 4], [12, 4, 9],
    [12, 9, 1], [12, 1, 0], [6, 11, 7], [0, 8, 6], [8, 3, 6], [3, 9, 6], [3, 2, 9], [2, 4, 9],
    [2, 10, 4], [10, 5, 4], [9, 7, 6], [9, 11, 7], [9, 1, 11], [1, 0, 11], [0, 6, 11], [12, 0, 9],
    [12, 9, 5], [12, 5, 4], [12, 4, 8], [12, 8, 3], [12, 3, 2], [12, 2, 10], [12, 10, 1],
    [12, 1, 0], [6, 11, 7], [0, 9, 6], [9, 7, 6], [9, 11, 7], [9, 5, 11], [5, 4, 11], [4, 1, 11],
    [4, 8, 1], [8, 10, 1], [8, 3, 10], [3, 2, 10], [1, 0, 11], [0, 6, 11], [0, 8, 1], [8, 3, 10],
    [3, 2, 10], [8, 10, 1], [4, 9, 5], [6, 11, 7], [0, 9, 3], [9, 1, 11], [1, 2, 11], [9, 11, 3],
    [4, 8, 5], [8, 7, 10], [7, 6, 10], [8, 10, 5], [0, 9, 7], [9, 1, 7], [1, 8, 7], [1, 4, 8],
    [1, 2, 4], [2, 11, 4], [11, 3, 4], [3, 10, 4], [3, 0, 10], [0, 7, 10], [7, 6, 10], [10, 5, 4],
    [12, 0, 8], [12, 8, 7], [12, 7, 6], [12, 6, 10], [12, 10, 5], [12, 5, 4], [12, 4, 9],
    [12, 9, 1], [12, 1, 2], [12, 2, 11], [12, 11, 3], [12, 3, 0], [12, 0, 9], [12, 9, 5],
    [12, 5, 4], [12, 4, 8], [12, 8, 7], [12, 7, 6], [12, 6, 10], [12, 10, 1], [12, 1, 2],
    [12, 2, 11], [12, 11, 3], [12, 3, 0], [12, 0, 8], [12, 8, 7], [12, 7, 6], [12, 6, 10],
    [12, 10, 1], [12, 1, 2], [12, 2, 11], [12, 11, 3], [12, 3, 0], [4, 9, 5], [0, 8, 5], [8, 2, 5],
    [8, 7, 2], [7, 1, 2], [7, 6, 1], [6, 10, 1], [2, 9, 5], [2, 4, 9], [2, 11, 4], [11, 3, 4],
    [3, 5, 4], [3, 0, 5], [12, 0, 9], [12, 9, 1], [12, 1, 2], [12, 2, 10], [12, 10, 5], [12, 5, 4],
    [12, 4, 8], [12, 8, 7], [12, 7, 6], [12, 6, 11], [12, 11, 3], [12, 3, 0], [0, 8, 6], [8, 7, 6],
    [0, 6, 3], [6, 11, 3], [1, 2, 9], [2, 10, 4], [10, 5, 4], [2, 4, 9], [0, 8, 10], [8, 2, 10],
    [8, 1, 2], [8, 7, 1], [7, 6, 1], [6, 11, 1], [11, 4, 1], [11, 3, 4], [3, 10, 4], [3, 0, 10],
    [10, 5, 4], [4, 9, 1], [12, 0, 9], [12, 9, 5], [12, 5, 4], [12, 4, 8], [12, 8, 7], [12, 7, 6],
    [12, 6, 11], [12, 11, 3], [12, 3, 0], [1, 2, 10], [9, 5, 2], [5, 4, 2], [4, 1, 2], [4, 8, 1],
    [8, 7, 1], [7, 10, 1], [7, 2, 10], [7, 9, 2], [7, 6, 9], [6, 11, 9], [11, 3, 9], [3, 0, 9],
    [0, 8, 6], [8, 7, 6], [0, 6, 3], [6, 11, 3], [1, 2, 10], [4, 9, 5], [12, 0, 9], [12, 9, 1],
    [12, 1, 2], [12, 2, 11], [12, 11, 7], [12, 7, 6], [12, 6, 10], [12, 10, 5], [12, 5, 4],
    [12, 4, 8], [12, 8, 3], [12, 3, 0], [0, 8, 3], [12, 1, 2], [12, 2, 11], [12, 11, 7],
    [12, 7, 6], [12, 6, 10], [12, 10, 5], [12, 5, 4], [12, 4, 9], [12, 9, 1], [0, 5, 11],
    [0, 8, 5], [8, 10, 5], [8, 6, 10], [5, 4, 11], [4, 9, 11], [9, 1, 11], [1, 2, 11], [8, 3, 6],
    [3, 0, 6], [0, 7, 6], [0, 11, 7], [0, 9, 3], [9, 5, 3], [5, 4, 3], [4, 8, 3], [1, 2, 7],
    [2, 11, 7], [1, 7, 10], [7, 6, 10], [0, 9, 11], [9, 2, 11], [9, 5, 2], [5, 4, 2], [4, 8, 2],
    [8, 1, 2], [8, 6, 1], [8, 3, 6], [3, 0, 6], [0, 7, 6], [0, 11, 7], [6, 10, 1], [0, 8, 3],
    [1, 2, 7], [2, 11, 7], [1, 7, 10], [7, 6, 10], [4, 9, 5], [12, 0, 9], [12, 9, 1], [12, 1, 2],
    [12, 2, 10], [12, 10, 5], [12, 5, 4], [12, 4, 8], [12, 8, 3], [12, 3, 0], [6, 11, 7],
    [0, 9, 6], [9, 7, 6], [9, 11, 7], [9, 1, 11], [1, 6, 11], [1, 8, 6], [1, 2, 8], [2, 10, 8],
    [10, 5, 8], [5, 4, 8], [8, 3, 6], [3, 0, 6], [0, 8, 3], [1, 2, 9], [2, 10, 4], [10, 5, 4],
    [2, 4, 9], [6, 11, 7], [0, 9, 3], [9, 5, 3], [5, 4, 3], [4, 8, 3], [1, 2, 10], [6, 11, 7],
    [0, 8, 3], [1, 2, 10], [4, 9, 5], [6, 11, 7], [1, 2, 9], [2, 11, 9], [11, 7, 9], [7, 4, 9],
    [5, 6, 10], [1, 2, 11], [1, 11, 7], [1, 7, 4], [1, 4, 12], [1, 12, 9], [4, 9, 2], [2, 9, 12],
    [2, 12, 4], [5, 6, 12], [5, 12, 10], [6, 10, 12], [12, 1, 2], [12, 2, 11], [12, 11, 7],
    [12, 7, 4], [12, 4, 9], [12, 9, 5], [12, 5, 6], [12, 6, 10], [12, 10, 1], [12, 1, 2],
    [12, 2, 10], [12, 10, 5], [12, 5, 6], [12, 6, 11], [12, 11, 7], [12, 7, 4], [12, 4, 9],
    [12, 9, 1], [1, 2, 10], [4, 9, 7], [9, 5, 11], [5, 6, 11], [9, 11, 7], [1, 2, 4], [2, 7, 4],
    [2, 10, 7], [10, 1, 7], [1, 11, 7], [1, 4, 11], [4, 9, 11], [9, 5, 11], [5, 6, 11], [12, 1, 2],
    [12, 2, 11], [12, 11, 7], [12, 7, 6], [12, 6, 10], [12, 10, 5], [12, 5, 4], [12, 4, 9],
    [12, 9, 1], [1, 2, 7], [2, 11, 7], [1, 7, 10], [7, 6, 10], [4, 9, 5], [1, 2, 4], [2, 5, 4],
    [2, 9, 5], [2, 11, 9], [11, 4, 9], [11, 1, 4], [11, 7, 1], [7, 6, 1], [6, 10, 1], [1, 2, 9],
    [2, 10, 4], [10, 5, 4], [2, 4, 9], [6, 11, 7], [1, 7, 6], [1, 2, 7], [2, 9, 7], [2, 4, 9],
    [2, 10, 4], [10, 5, 4], [9, 11, 7], [9, 1, 11], [1, 6, 11], [1, 2, 10], [4, 9, 5], [6, 11, 7],
    [1, 5, 3], [5, 6, 3], [6, 11, 3], [4, 8, 7], [5, 6, 12], [6, 11, 12], [11, 4, 12], [4, 8, 12],
    [8, 5, 12], [11, 3, 4], [3, 1, 4], [1, 7, 4], [1, 8, 7], [1, 5, 8], [12, 1, 5], [12, 5, 6],
    [12, 6, 11], [12, 11, 7], [12, 7, 4], [12, 4, 8], [12, 8, 3], [12, 3, 1], [12, 1, 5],
    [12, 5, 4], [12, 4, 8], [12, 8, 7], [12, 7, 6], [12, 6, 11], [12, 11, 3], [12, 3, 1],
    [1, 5, 3], [5, 4, 3], [4, 8, 3], [6, 11, 7], [5, 4, 12], [4, 8, 12], [8, 6, 12], [6, 11, 12],
    [11, 5, 12], [8, 3, 6], [3, 1, 6], [1, 7, 6], [1, 11, 7], [1, 5, 11], [0, 1, 4], [1, 5, 11],
    [5, 6, 11], [1, 11, 4], [11, 7, 4], [0, 1, 4], [1, 5, 4], [6, 11, 7], [0, 1, 6], [1, 7, 6],
    [1, 11, 7], [1, 5, 11], [5, 4, 11], [4, 0, 11], [0, 6, 11], [0, 9, 3], [9, 5, 3], [5, 6, 3],
    [6, 11, 3], [4, 8, 7], [0, 9, 5], [0, 5, 6], [0, 6, 11], [0, 11, 12], [0, 12, 3], [3, 12, 9],
    [3, 9, 11], [4, 8, 12], [4, 12, 7], [7, 12, 8], [9, 12, 11], [12, 0, 8], [12, 8, 7],
    [12, 7, 4], [12, 4, 9], [12, 9, 5], [12, 5, 6], [12, 6, 11], [12, 11, 3], [12, 3, 0],
    [12, 0, 9], [12, 9, 5], [12, 5, 6], [12, 6, 11], [12, 11, 7], [12, 7, 4], [12, 4, 8],
    [12, 8, 3], [12, 3, 0], [0, 8, 3], [4, 9, 7], [9, 5, 11], [5, 6, 11], [9, 11, 7], [0, 8, 5],
    [8, 3, 5], [3, 9, 5], [3, 6, 9], [3, 0, 6], [0, 5, 6], [6, 11, 9], [11, 7, 9], [7, 4, 9],
    [12, 0, 9], [12, 9, 5], [12, 5, 4], [12, 4, 8], [12, 8, 7], [12, 7, 6], [12, 6, 11],
    [12, 11, 3], [12, 3, 0], [0, 8, 6], [8, 7, 6], [0, 6, 3], [6, 11, 3], [4, 9, 5], [0, 11, 5],
    [0, 6, 11], [0, 8, 6], [8, 7, 6], [11, 9, 5], [11, 4, 9], [11, 3, 4], [3, 5, 4], [3, 0, 5],
    [0, 9, 3], [9, 5, 3], [5, 4, 3], [4, 8, 3], [6, 11, 7], [0, 9, 6], [9, 7, 6], [9, 11, 7],
    [9, 5, 11], [5, 0, 11], [5, 3, 0], [5, 4, 3], [4, 8, 3], [0, 6, 11], [0, 8, 3], [4, 9, 5],
    [6, 11, 7], [4, 9, 7], [9, 5, 11], [5, 6, 11], [9, 11, 7], [4, 9, 5], [6, 11, 7], [4, 6, 9],
    [6, 10, 9], [0, 3, 8], [4, 6, 9], [6, 10, 9], [0, 3, 6], [3, 4, 6], [3, 10, 4], [3, 8, 10],
    [8, 0, 10], [0, 6, 10], [10, 9, 4], [0, 3, 9], [3, 8, 6], [8, 4, 6], [3, 6, 9], [6, 10, 9],
    [0, 4, 1], [4, 6, 1], [6, 10, 1], [1, 3, 10], [3, 8, 10], [8, 4, 10], [4, 6, 10], [1, 9, 2],
    [9, 4, 2], [4, 6, 2], [0, 3, 8], [1, 9, 2], [9, 4, 2], [4, 6, 2], [3, 8, 12], [8, 1, 12],
    [1, 9, 12], [9, 3, 12], [8, 6, 1], [8, 0, 6], [0, 3, 6], [3, 9, 6], [9, 4, 6], [6, 2, 1],
    [12, 0, 3], [12, 3, 8], [12, 8, 4], [12, 4, 6], [12, 6, 2], [12, 2, 1], [12, 1, 9], [12, 9, 0],
    [12, 0, 1], [12, 1, 9], [12, 9, 4], [12, 4, 6], [12, 6, 2], [12, 2, 3], [12, 3, 8], [12, 8, 0],
    [0, 1, 9], [2, 3, 6], [3, 8, 6], [8, 4, 6], [1, 9, 12], [9, 2, 12], [2, 3, 12], [3, 8, 12],
    [8, 1, 12], [9, 6, 2], [9, 0, 6], [0, 1, 6], [1, 8, 6], [8, 4, 6], [0, 4, 2], [4, 6, 2],
    [2, 3, 6], [3, 8, 6], [8, 4, 6], [2, 11, 3], [4, 6, 9], [6, 10, 9], [2, 11, 4], [11, 9, 4],
    [11, 3, 9], [3, 6, 9], [3, 4, 6], [3, 2, 4], [6, 10, 9], [2, 10, 3], [10, 9, 3], [9, 4, 3],
    [4, 6, 3], [6, 11, 3], [0, 2, 8], [2, 11, 8], [4, 6, 9], [6, 10, 9], [0, 2, 12], [2, 11, 12],
    [11, 8, 12], [8, 10, 12], [10, 9, 12], [9, 4, 12], [4, 6, 12], [6, 0, 12], [8, 0, 10],
    [0, 6, 10], [12, 0, 2], [12, 2, 11], [12, 11, 8], [12, 8, 4], [12, 4, 6], [12, 6, 10],
    [12, 10, 9], [12, 9, 0], [12, 0, 2], [12, 2, 10], [12, 10, 9], [12, 9, 4], [12, 4, 6],
    [12, 6, 11], [12, 11, 8], [12, 8, 0], [0, 2, 9], [2, 10, 9], [4, 6, 8], [6, 11, 8], [0, 2, 12],
    [2, 10, 12], [10, 9, 12], [9, 11, 12], [11, 8, 12], [8, 4, 12], [4, 6, 12], [6, 0, 12],
    [9, 0, 11], [0, 6, 11], [0, 4, 1], [4, 6, 1], [6, 10, 1], [2, 11, 3], [0, 4, 11], [4, 2, 11],
    [4, 3, 2], [4, 6, 3], [6, 10, 12], [10, 1, 12], [1, 0, 12], [0, 11, 12], [11, 3, 12],
    [3, 6, 12], [12, 0, 4], [12, 4, 6], [12, 6, 11], [12, 11, 3], [12, 3, 2], [12, 2, 10],
    [12, 10, 1], [12, 1, 0], [12, 0, 4], [12, 4, 6], [12, 6, 10], [12, 10, 1], [12, 1, 2],
    [12, 2, 11], [12, 11, 3], [12, 3, 0], [0, 4, 3], [4, 6, 3], [6, 11, 3], [1, 2, 10], [0, 4, 10],
    [4, 2, 10], [4, 1, 2], [4, 6, 1], [6, 11, 12], [11, 3, 12], [3, 0, 12], [0, 10, 12],
    [10, 1, 12], [1, 6, 12], [1, 2, 8], [2, 11, 8], [1, 8, 10], [8, 4, 10], [4, 6, 10], [1, 2, 10],
    [4, 6, 8], [6, 11, 8], [1, 2, 4], [2, 8, 4], [2, 10, 8], [10, 1, 8], [1, 6, 8], [1, 4, 6],
    [6, 11, 8], [1, 9, 3], [9, 4, 3], [4, 6, 3], [6, 11, 3], [0, 1, 8], [1, 9, 6], [9, 4, 6],
    [1, 6, 8], [6, 11, 8], [0, 1, 9], [4, 6, 8], [6, 11, 8], [0, 1, 6], [1, 4, 6], [1, 11, 4],
    [1, 9, 11], [9, 0, 11], [0, 6, 11], [11, 8, 4], [0, 4, 3], [4, 6, 3], [6, 11, 3], [4, 6, 8],
    [6, 11, 8], [6, 10, 7], [10, 9, 7], [9, 8, 7], [0, 3, 9], [3, 7, 9], [7, 6, 9], [6, 10, 9],
    [0, 8, 1], [8, 7, 1], [7, 6, 1], [6, 10, 1], [1, 3, 10], [3, 7, 10], [7, 6, 10], [1, 9, 2],
    [9, 8, 2], [8, 7, 2], [7, 6, 2], [0, 3, 9], [3, 7, 9], [7, 6, 9], [6, 2, 9], [2, 1, 9],
    [0, 1, 9], [2, 3, 6], [3, 7, 6], [0, 1, 7], [1, 9, 7], [9, 3, 7], [9, 6, 3], [9, 0, 6],
    [0, 7, 6], [6, 2, 3], [0, 8, 2], [8, 7, 2], [7, 6, 2], [2, 3, 6], [3, 7, 6], [2, 11, 3],
    [6, 10, 7], [10, 9, 7], [9, 8, 7], [2, 9, 8], [2, 11, 9], [11, 3, 9], [3, 6, 9], [6, 10, 9],
    [3, 2, 12], [2, 8, 12], [8, 7, 12], [7, 6, 12], [6, 3, 12], [12, 2, 10], [12, 10, 9],
    [12, 9, 8], [12, 8, 7], [12, 7, 6], [12, 6, 11], [12, 11, 3], [12, 3, 2], [12, 2, 11],
    [12, 11, 7], [12, 7, 6], [12, 6, 10], [12, 10, 9], [12, 9, 8], [12, 8, 3], [12, 3, 2],
    [2, 10, 3], [10, 9, 3], [9, 8, 3], [6, 11, 7], [2, 10, 7], [10, 9, 7], [9, 11, 7], [9, 6, 11],
    [9, 8, 6], [8, 3, 12], [3, 2, 12], [2, 7, 12], [7, 6, 12], [6, 8, 12], [0, 2, 9], [2, 11, 9],
    [11, 7, 9], [7, 6, 9], [6, 10, 9], [0, 2, 9], [2, 10, 9], [6, 11, 7], [0, 7, 6], [0, 2, 7],
    [2, 10, 7], [10, 9, 7], [9, 11, 7], [9, 0, 11], [0, 6, 11], [0, 8, 1], [8, 7, 1], [7, 6, 1],
    [6, 10, 1], [2, 11, 3], [0, 8, 7], [0, 7, 6], [0, 6, 10], [0, 10, 12], [0, 12, 1], [1, 12, 8],
    [1, 8, 10], [2, 11, 12], [2, 12, 3], [3, 12, 11], [8, 12, 10], [12, 0, 8], [12, 8, 7],
    [12, 7, 6], [12, 6, 11], [12, 11, 3], [12, 3, 2], [12, 2, 10], [12, 10, 1], [12, 1, 0],
    [12, 0, 8], [12, 8, 3], [12, 3, 2], [12, 2, 11], [12, 11, 7], [12, 7, 6], [12, 6, 10],
    [12, 10, 1], [12, 1, 0], [0, 8, 1], [8, 3, 10], [3, 2, 10], [8, 10, 1], [6, 11, 7], [0, 8, 6],
    [8, 1, 6], [8, 10, 1], [8, 3, 10], [3, 2, 10], [1, 7, 6], [1, 11, 7], [1, 0, 11], [0, 6, 11],
    [12, 0, 8], [12, 8, 7], [12, 7, 6], [12, 6, 10], [12, 10, 1], [12, 1, 2], [12, 2, 11],
    [12, 11, 3], [12, 3, 0], [0, 8, 6], [8, 7, 6], [0, 6, 3], [6, 11, 3], [1, 2, 10], [0, 8, 10],
    [8, 2, 10], [8, 1, 2], [8, 7, 1], [7, 10, 1], [7, 0, 10], [7, 6, 0], [6, 11, 0], [11, 3, 0],
    [0, 8, 3], [1, 2, 7], [2, 11, 7], [1, 7, 10], [7, 6, 10], [0, 10, 7], [0, 8, 10], [8, 6, 10],
    [10, 1, 7], [1, 2, 7], [2, 11, 7], [8, 3, 6], [3, 0, 6], [0, 7, 6], [0, 8, 3], [1, 2, 10],
    [6, 11, 7], [1, 2, 7], [2, 11, 7], [1, 7, 10], [7, 6, 10], [1, 2, 10], [6, 11, 7], [1, 9, 3],
    [9, 8, 6], [8, 7, 6], [9, 6, 3], [6, 11, 3], [1, 9, 3], [9, 8, 3], [6, 11, 7], [1, 9, 11],
    [9, 6, 11], [9, 8, 6], [8, 3, 6], [3, 1, 6], [1, 7, 6], [1, 11, 7], [0, 1, 9], [6, 11, 7],
    [0, 1, 6], [1, 7, 6], [1, 11, 7], [1, 9, 11], [9, 0, 11], [0, 6, 11], [0, 8, 6], [8, 7, 6],
    [0, 6, 3], [6, 11, 3], [0, 8, 3], [6, 11, 7], [6, 11, 7], [6, 7, 11], [0, 3, 8], [6, 7, 11],
    [0, 3, 6], [3, 11, 6], [0, 6, 8], [6, 7, 8], [0, 9, 1], [6, 7, 11], [0, 9, 6], [9, 11, 6],
    [9, 7, 11], [9, 1, 7], [1, 0, 7], [0, 6, 7], [1, 3, 9], [3, 8, 9], [6, 7, 11], [1, 3, 6],
    [3, 8, 6], [8, 9, 6], [9, 11, 6], [9, 7, 11], [9, 1, 7], [1, 6, 7], [1, 3, 9], [3, 11, 9],
    [11, 6, 9], [6, 7, 9], [7, 8, 9], [1, 10, 2], [6, 7, 11], [1, 10, 7], [10, 6, 7], [1, 7, 2],
    [7, 11, 2], [0, 3, 8], [1, 10, 2], [6, 7, 11], [0, 3, 8], [1, 10, 7], [10, 6, 7], [1, 7, 2],
    [7, 11, 2], [0, 3, 10], [3, 8, 10], [8, 1, 10], [8, 6, 1], [8, 0, 6], [0, 10, 6], [6, 7, 1],
    [7, 11, 1], [11, 2, 1], [0, 3, 6], [3, 11, 6], [0, 6, 8], [6, 7, 8], [1, 10, 2], [0, 7, 10],
    [0, 6, 7], [0, 3, 6], [3, 11, 6], [7, 1, 10], [7, 8, 1], [8, 2, 1], [8, 10, 2], [8, 0, 10],
    [12, 0, 3], [12, 3, 11], [12, 11, 2], [12, 2, 1], [12, 1, 10], [12, 10, 6], [12, 6, 7],
    [12, 7, 8], [12, 8, 0], [0, 1, 8], [1, 10, 8], [10, 2, 8], [2, 3, 8], [6, 7, 11], [0, 1, 6],
    [1, 11, 6], [1, 7, 11], [1, 10, 7], [10, 0, 7], [10, 8, 0], [10, 2, 8], [2, 3, 8], [0, 6, 7],
    [12, 0, 1], [12, 1, 10], [12, 10, 6], [12, 6, 7], [12, 7, 11], [12, 11, 2], [12, 2, 3],
    [12, 3, 8], [12, 8, 0], [12, 0, 1], [12, 1, 10], [12, 10, 2], [12, 2, 3], [12, 3, 11],
    [12, 11, 6], [12, 6, 7], [12, 7, 8], [12, 8, 0], [0, 1, 8], [1, 10, 8], [10, 6, 8], [6, 7, 8],
    [2, 3, 11], [0, 1, 10], [0, 10, 6], [0, 6, 7], [0, 7, 12], [0, 12, 8], [2, 3, 12], [2, 12, 11],
    [3, 11, 12], [7, 8, 1], [1, 8, 12], [1, 12, 7], [0, 9, 2], [9, 10, 2], [6, 7, 11], [0, 9, 6],
    [9, 11, 6], [9, 7, 11], [9, 10, 7], [10, 2, 7], [2, 0, 7], [0, 6, 7], [0, 9, 2], [9, 10, 7],
    [10, 6, 7], [9, 7, 2], [7, 11, 2], [2, 3, 10], [3, 8, 10], [8, 9, 10], [6, 7, 11], [2, 3, 12],
    [3, 6, 12], [6, 7, 12], [7, 2, 12], [3, 8, 6], [8, 9, 6], [9, 11, 6], [9, 7, 11], [9, 10, 7],
    [10, 2, 7], [12, 2, 3], [12, 3, 8], [12, 8, 9], [12, 9, 10], [12, 10, 6], [12, 6, 7],
    [12, 7, 11], [12, 11, 2], [12, 2, 3], [12, 3, 11], [12, 11, 6], [12, 6, 7], [12, 7, 8],
    [12, 8, 9], [12, 9, 10], [12, 10, 2], [2, 3, 11], [6, 7, 10], [7, 8, 10], [8, 9, 10],
    [2, 3, 12], [3, 6, 12], [6, 7, 12], [7, 2, 12], [3, 9, 6], [3, 11, 9], [11, 2, 9], [2, 7, 9],
    [7, 8, 9], [9, 10, 6], [2, 6, 3], [6, 7, 3], [0, 2, 8], [2, 6, 8], [6, 7, 8], [0, 9, 1],
    [2, 6, 3], [6, 7, 3], [0, 9, 6], [9, 2, 6], [9, 7, 2], [9, 1, 7], [1, 0, 7], [0, 6, 7],
    [7, 3, 2], [0, 9, 3], [9, 1, 6], [1, 2, 6], [9, 6, 3], [6, 7, 3], [1, 2, 9], [2, 6, 9],
    [6, 7, 9], [7, 8, 9], [1, 10, 3], [10, 6, 3], [6, 7, 3], [0, 1, 8], [1, 10, 8], [10, 6, 8],
    [6, 7, 8], [0, 9, 3], [9, 10, 3], [10, 6, 3], [6, 7, 3], [6, 7, 10], [7, 8, 10], [8, 9, 10],
    [4, 8, 6], [8, 11, 6], [0, 3, 4], [3, 11, 4], [11, 6, 4], [0, 9, 1], [4, 8, 6], [8, 11, 6],
    [0, 9, 11], [9, 1, 11], [1, 8, 11], [1, 6, 8], [1, 0, 6], [0, 11, 6], [6, 4, 8], [0, 8, 1],
    [8, 11, 1], [11, 6, 1], [6, 4, 1], [4, 9, 1], [1, 3, 9], [3, 11, 9], [11, 6, 9], [6, 4, 9],
    [1, 10, 2], [4, 8, 6], [8, 11, 6], [1, 10, 8], [10, 4, 8], [10, 2, 4], [2, 1, 4], [1, 11, 4],
    [1, 8, 11], [11, 6, 4], [1, 10, 4], [10, 6, 4], [1, 4, 2], [4, 8, 2], [8, 11, 2], [0, 3, 4],
    [3, 11, 4], [11, 6, 4], [1, 10, 2], [0, 3, 12], [3, 11, 12], [11, 1, 12], [1, 10, 12],
    [10, 0, 12], [11, 6, 1], [6, 4, 1], [4, 2, 1], [4, 10, 2], [4, 0, 10], [12, 0, 3], [12, 3, 11],
    [12, 11, 2], [12, 2, 1], [12, 1, 10], [12, 10, 6], [12, 6, 4], [12, 4, 0], [12, 0, 1],
    [12, 1, 10], [12, 10, 2], [12, 2, 3], [12, 3, 11], [12, 11, 6], [12, 6, 4], [12, 4, 0],
    [0, 1, 4], [1, 10, 4], [10, 6, 4], [2, 3, 11], [0, 1, 12], [1, 10, 12], [10, 3, 12],
    [3, 11, 12], [11, 0, 12], [10, 6, 3], [6, 4, 3], [4, 2, 3], [4, 11, 2], [4, 0, 11], [0, 9, 2],
    [9, 10, 2], [4, 8, 6], [8, 11, 6], [0, 9, 6], [9, 11, 6], [9, 10, 12], [10, 2, 12], [2, 0, 12],
    [0, 6, 12], [6, 4, 12], [4, 8, 12], [8, 11, 12], [11, 9, 12], [12, 0, 8], [12, 8, 11],
    [12, 11, 6], [12, 6, 4], [12, 4, 9], [12, 9, 10], [12, 10, 2], [12, 2, 0], [12, 0, 9],
    [12, 9, 10], [12, 10, 6], [12, 6, 4], [12, 4, 8], [12, 8, 11], [12, 11, 2], [12, 2, 0],
    [0, 8, 2], [8, 11, 2], [4, 9, 6], [9, 10, 6], [0, 8, 6], [8, 10, 6], [8, 11, 12], [11, 2, 12],
    [2, 0, 12], [0, 6, 12], [6, 4, 12], [4, 9, 12], [9, 10, 12], [10, 8, 12], [2, 3, 10],
    [3, 11, 4], [11, 6, 4], [3, 4, 10], [4, 9, 10], [2, 3, 11], [4, 9, 6], [9, 10, 6], [2, 3, 4],
    [3, 10, 4], [3, 9, 10], [10, 6, 4], [3, 11, 9], [11, 2, 9], [2, 4, 9], [2, 6, 3], [6, 4, 3],
    [4, 8, 3], [0, 2, 4], [2, 6, 4], [0, 9, 1], [2, 6, 3], [6, 4, 3], [4, 8, 3], [9, 1, 12],
    [1, 4, 12], [4, 8, 12], [8, 3, 12], [3, 2, 12], [2, 9, 12], [1, 6, 4], [1, 0, 6], [0, 9, 6],
    [9, 2, 6], [12, 0, 8], [12, 8, 3], [12, 3, 2], [12, 2, 6], [12, 6, 4], [12, 4, 9], [12, 9, 1],
    [12, 1, 0], [12, 0, 9], [12, 9, 1], [12, 1, 2], [12, 2, 6], [12, 6, 4], [12, 4, 8], [12, 8, 3],
    [12, 3, 0], [0, 8, 3], [1, 2, 9], [2, 6, 9], [6, 4, 9], [8, 3, 12], [3, 4, 12], [4, 9, 12],
    [9, 1, 12], [1, 8, 12], [3, 6, 4], [3, 0, 6], [0, 8, 6], [8, 1, 6], [1, 2, 6], [1, 2, 9],
    [2, 6, 9], [6, 4, 9], [1, 10, 3], [10, 6, 3], [6, 4, 3], [4, 8, 3], [0, 1, 4], [1, 10, 4],
    [10, 6, 4], [0, 9, 3], [9, 10, 3], [10, 6, 3], [6, 4, 3], [4, 8, 3], [0, 8, 3], [4, 9, 6],
    [9, 10, 6], [0, 8, 10], [8, 3, 10], [3, 9, 10], [3, 6, 9], [3, 0, 6], [0, 10, 6], [6, 4, 9],
    [4, 9, 6], [9, 10, 6], [4, 5, 9], [6, 7, 11], [4, 7, 9], [7, 11, 9], [11, 6, 9], [6, 5, 9],
    [0, 3, 8], [4, 5, 9], [6, 7, 11], [0, 3, 9], [3, 8, 5], [8, 4, 5], [3, 5, 9], [6, 7, 11],
    [0, 3, 6], [3, 9, 6], [3, 5, 9], [3, 8, 5], [8, 4, 5], [9, 11, 6], [9, 7, 11], [9, 0, 7],
    [0, 6, 7], [0, 3, 6], [3, 11, 6], [0, 6, 8], [6, 7, 8], [4, 5, 9], [0, 3, 5], [3, 4, 5],
    [3, 11, 4], [11, 9, 4], [11, 5, 9], [11, 0, 5], [11, 6, 0], [6, 7, 0], [7, 8, 0], [12, 0, 3],
    [12, 3, 11], [12, 11, 6], [12, 6, 7], [12, 7, 8], [12, 8, 4], [12, 4, 5], [12, 5, 9],
    [12, 9, 0], [0, 3, 8], [4, 7, 9], [7, 11, 9], [11, 6, 9], [6, 5, 9], [0, 5, 11], [0, 3, 5],
    [3, 6, 5], [5, 9, 11], [9, 4, 11], [4, 7, 11], [3, 8, 6], [8, 0, 6], [0, 11, 6], [12, 0, 3],
    [12, 3, 8], [12, 8, 4], [12, 4, 7], [12, 7, 11], [12, 11, 6], [12, 6, 5], [12, 5, 9],
    [12, 9, 0], [12, 0, 3], [12, 3, 11], [12, 11, 6], [12, 6, 5], [12, 5, 9], [12, 9, 4],
    [12, 4, 7], [12, 7, 8], [12, 8, 0], [0, 3, 9], [3, 11, 9], [11, 6, 9], [6, 5, 9], [4, 7, 8],
    [0, 3, 11], [0, 11, 6], [0, 6, 5], [0, 5, 12], [0, 12, 9], [4, 7, 12], [4, 12, 8], [5, 9, 3],
    [3, 9, 12], [3, 12, 5], [7, 8, 12], [0, 4, 1], [4, 5, 1], [6, 7, 11], [0, 11, 6], [0, 4, 11],
    [4, 5, 11], [5, 1, 11], [1, 7, 11], [1, 0, 7], [0, 6, 7], [0, 4, 1], [4, 7, 1], [7, 11, 1],
    [11, 6, 1], [6, 5, 1], [1, 3, 5], [3, 8, 5], [8, 4, 5], [6, 7, 11], [3, 8, 12], [8, 4, 12],
    [4, 11, 12], [11, 6, 12], [6, 3, 12], [4, 5, 11], [5, 1, 11], [1, 7, 11], [1, 6, 7], [1, 3, 6],
    [12, 1, 3], [12, 3, 11], [12, 11, 6], [12, 6, 7], [12, 7, 8], [12, 8, 4], [12, 4, 5],
    [12, 5, 1], [12, 1, 3], [12, 3, 8], [12, 8, 4], [12, 4, 7], [12, 7, 11], [12, 11, 6],
    [12, 6, 5], [12, 5, 1], [1, 3, 5], [3, 11, 5], [11, 6, 5], [4, 7, 8], [3, 11, 12], [11, 6, 12],
    [6, 8, 12], [8, 4, 12], [4, 3, 12], [6, 5, 8], [5, 1, 8], [1, 7, 8], [1, 4, 7], [1, 3, 4],
    [1, 10, 2], [4, 5, 9], [6, 7, 11], [1, 9, 2], [9, 4, 2], [4, 5, 2], [5, 10, 2], [6, 7, 11],
    [1, 9, 6], [9, 11, 6], [9, 7, 11], [9, 2, 7], [9, 4, 2], [4, 5, 2], [5, 10, 2], [2, 1, 7],
    [1, 6, 7], [1, 10, 7], [10, 6, 7], [1, 7, 2], [7, 11, 2], [4, 5, 9], [1, 11, 4], [1, 7, 11],
    [1, 10, 7], [10, 6, 7], [11, 9, 4], [11, 5, 9], [11, 2, 5], [2, 4, 5], [2, 1, 4], [12, 1, 9],
    [12, 9, 4], [12, 4, 5], [12, 5, 10], [12, 10, 6], [12, 6, 7], [12, 7, 11], [12, 11, 2],
    [12, 2, 1], [1, 10, 2], [4, 7, 9], [7, 11, 9], [11, 6, 9], [6, 5, 9], [1, 10, 4], [10, 2, 4],
    [2, 9, 4], [2, 7, 9], [7, 11, 9], [11, 6, 9], [6, 5, 9], [2, 1, 7], [1, 4, 7], [12, 1, 9],
    [12, 9, 4], [12, 4, 7], [12, 7, 11], [12, 11, 6], [12, 6, 5], [12, 5, 10], [12, 10, 2],
    [12, 2, 1], [12, 1, 10], [12, 10, 6], [12, 6, 5], [12, 5, 9], [12, 9, 4], [12, 4, 7],
    [12, 7, 11], [12, 11, 2], [12, 2, 1], [1, 9, 2], [9, 4, 2], [4, 7, 2], [7, 11, 2], [5, 10, 6],
    [1, 9, 4], [1, 4, 7], [1, 7, 11], [1, 11, 12], [1, 12, 2], [2, 12, 9], [2, 9, 11], [5, 10, 12],
    [5, 12, 6], [6, 12, 10], [9, 12, 11], [0, 3, 8], [1, 10, 2], [4, 5, 9], [6, 7, 11], [0, 3, 9],
    [3, 8, 5], [8, 4, 5], [3, 5, 9], [1, 10, 2], [6, 7, 11], [0, 3, 8], [1, 9, 2], [9, 4, 2],
    [4, 5, 2], [5, 10, 2], [6, 7, 11], [12, 0, 3], [12, 3, 8], [12, 8, 4], [12, 4, 5], [12, 5, 10],
    [12, 10, 2], [12, 2, 1], [12, 1, 9], [12, 9, 0], [6, 7, 11], [0, 3, 6], [3, 8, 6], [8, 1, 6],
    [8, 4, 1], [4, 2, 1], [4, 5, 2], [5, 10, 2], [1, 11, 6], [1, 7, 11], [1, 9, 7], [9, 0, 7],
    [0, 6, 7], [0, 3, 8], [1, 10, 7], [10, 6, 7], [1, 7, 2], [7, 11, 2], [4, 5, 9], [0, 3, 9],
    [3, 8, 5], [8, 4, 5], [3, 5, 9], [1, 10, 7], [10, 6, 7], [1, 7, 2], [7, 11, 2], [0, 3, 10],
    [3, 8, 10], [8, 1, 10], [8, 4, 1], [4, 11, 1], [4, 5, 11], [5, 9, 11], [9, 0, 11], [0, 7, 11],
    [0, 10, 7], [10, 6, 7], [11, 2, 1], [0, 3, 8], [12, 1, 9], [12, 9, 4], [12, 4, 5], [12, 5, 10],
    [12, 10, 6], [12, 6, 7], [12, 7, 11], [12, 11, 2], [12, 2, 1], [0, 3, 5], [3, 4, 5], [3, 9, 4],
    [3, 6, 9], [3, 8, 6], [8, 0, 6], [0, 10, 6], [0, 5, 10], [6, 7, 9], [7, 11, 9], [11, 2, 9],
    [2, 1, 9], [12, 0, 3], [12, 3, 8], [12, 8, 4], [12, 4, 5], [12, 5, 10], [12, 10, 6],
    [12, 6, 7], [12, 7, 11], [12, 11, 2], [12, 2, 1], [12, 1, 9], [12, 9, 0], [0, 3, 6],
    [3, 11, 6], [0, 6, 8], [6, 7, 8], [1, 10, 2], [4, 5, 9], [12, 0, 3], [12, 3, 11], [12, 11, 6],
    [12, 6, 7], [12, 7, 8], [12, 8, 4], [12, 4, 5], [12, 5, 9], [12, 9, 0], [1, 10, 2], [11, 6, 1],
    [6, 7, 1], [7, 2, 1], [7, 10, 2], [7, 8, 10], [8, 4, 10], [4, 1, 10], [4, 11, 1], [4, 5, 11],
    [5, 9, 11], [9, 0, 11], [0, 3, 11], [0, 3, 6], [3, 11, 6], [0, 6, 8], [6, 7, 8], [1, 9, 2],
    [9, 4, 2], [4, 5, 2], [5, 10, 2], [0, 3, 5], [3, 4, 5], [3, 9, 4], [3, 11, 9], [11, 6, 9],
    [6, 7, 9], [7, 2, 9], [7, 8, 2], [8, 5, 2], [8, 0, 5], [5, 10, 2], [2, 1, 9], [12, 0, 3],
    [12, 3, 11], [12, 11, 6], [12, 6, 7], [12, 7, 8], [12, 8, 4], [12, 4, 5], [12, 5, 10],
    [12, 10, 2], [12, 2, 1], [12, 1, 9], [12, 9, 0], [12, 0, 3], [12, 3, 11], [12, 11, 2],
    [12, 2, 1], [12, 1, 10], [12, 10, 6], [12, 6, 7], [12, 7, 8], [12, 8, 0], [4, 5, 9], [0, 3, 5],
    [3, 4, 5], [3, 11, 4], [11, 2, 4], [2, 9, 4], [2, 5, 9], [2, 8, 5], [2, 1, 8], [1, 10, 8],
    [10, 6, 8], [6, 7, 8], [8, 0, 5], [12, 0, 3], [12, 3, 11], [12, 11, 2], [12, 2, 1],
    [12, 1, 10], [12, 10, 6], [12, 6, 7], [12, 7, 8], [12, 8, 4], [12, 4, 5], [12, 5, 9],
    [12, 9, 0], [12, 0, 3], [12, 3, 11], [12, 11, 2], [12, 2, 1], [12, 1, 9], [12, 9, 4],
    [12, 4, 5], [12, 5, 10], [12, 10, 6], [12, 6, 7], [12, 7, 8], [12, 8, 0], [0, 3, 9],
    [3, 11, 9], [11, 2, 9], [2, 1, 9], [4, 5, 8], [5, 10, 8], [10, 6, 8], [6, 7, 8], [0, 3, 5],
    [3, 4, 5], [3, 11, 4], [11, 2, 4], [2, 1, 4], [1, 8, 4], [1, 6, 8], [1, 9, 6], [9, 0, 6],
    [0, 10, 6], [0, 5, 10], [6, 7, 8], [0, 1, 8], [1, 10, 8], [10, 2, 8], [2, 3, 8], [4, 5, 9],
    [6, 7, 11], [12, 0, 1], [12, 1, 10], [12, 10, 2], [12, 2, 3], [12, 3, 8], [12, 8, 4],
    [12, 4, 5], [12, 5, 9], [12, 9, 0], [6, 7, 11], [0, 1, 6], [1, 11, 6], [1, 7, 11], [1, 10, 7],
    [10, 2, 7], [2, 9, 7], [2, 3, 9], [3, 5, 9], [3, 8, 5], [8, 4, 5], [9, 0, 7], [0, 6, 7],
    [12, 0, 1], [12, 1, 9], [12, 9, 4], [12, 4, 5], [12, 5, 10], [12, 10, 2], [12, 2, 3],
    [12, 3, 8], [12, 8, 0], [6, 7, 11], [0, 1, 6], [1, 11, 6], [1, 7, 11], [1, 9, 7], [9, 6, 7],
    [9, 3, 6], [9, 4, 3], [4, 5, 3], [5, 10, 3], [10, 2, 3], [3, 8, 6], [8, 0, 6], [0, 1, 9],
    [2, 3, 10], [3, 8, 10], [8, 4, 10], [4, 5, 10], [6, 7, 11], [0, 1, 6], [1, 11, 6], [1, 7, 11],
    [1, 9, 7], [9, 0, 7], [0, 6, 7], [2, 3, 10], [3, 8, 10], [8, 4, 10], [4, 5, 10], [12, 0, 1],
    [12, 1, 10], [12, 10, 6], [12, 6, 7], [12, 7, 11], [12, 11, 2], [12, 2, 3], [12, 3, 8],
    [12, 8, 0], [4, 5, 9], [0, 11, 5], [0, 1, 11], [1, 7, 11], [1, 10, 7], [10, 6, 7], [11, 4, 5],
    [11, 2, 4], [2, 3, 4], [3, 9, 4], [3, 5, 9], [3, 8, 5], [8, 0, 5], [12, 0, 1], [12, 1, 10],
    [12, 10, 6], [12, 6, 7], [12, 7, 11], [12, 11, 2], [12, 2, 3], [12, 3, 8], [12, 8, 4],
    [12, 4, 5], [12, 5, 9], [12, 9, 0], [12, 0, 1], [12, 1, 9], [12, 9, 4], [12, 4, 5],
    [12, 5, 10], [12, 10, 6], [12, 6, 7], [12, 7, 11], [12, 11, 2], [12, 2, 3], [12, 3, 8],
    [12, 8, 0], [0, 1, 9], [12, 2, 3], [12, 3, 8], [12, 8, 4], [12, 4, 5], [12, 5, 10],
    [12, 10, 6], [12, 6, 7], [12, 7, 11], [12, 11, 2], [0, 11, 5], [0, 1, 11], [1, 7, 11],
    [1, 6, 7], [11, 2, 5], [2, 3, 5], [3, 8, 5], [8, 4, 5], [1, 9, 6], [9, 0, 6], [0, 10, 6],
    [0, 5, 10], [12, 0, 1], [12, 1, 10], [12, 10, 2], [12, 2, 3], [12, 3, 11], [12, 11, 6],
    [12, 6, 7], [12, 7, 8], [12, 8, 0], [4, 5, 9], [1, 10, 4], [10, 2, 4], [2, 9, 4], [2, 5, 9],
    [2, 3, 5], [3, 11, 5], [11, 4, 5], [11, 1, 4], [11, 6, 1], [6, 7, 1], [7, 8, 1], [8, 0, 1],
    [12, 0, 1], [12, 1, 10], [12, 10, 2], [12, 2, 3], [12, 3, 11], [12, 11, 6], [12, 6, 7],
    [12, 7, 8], [12, 8, 4], [12, 4, 5], [12, 5, 9], [12, 9, 0], [12, 0, 1], [12, 1, 9], [12, 9, 4],
    [12, 4, 5], [12, 5, 10], [12, 10, 2], [12, 2, 3], [12, 3, 11], [12, 11, 6], [12, 6, 7],
    [12, 7, 8], [12, 8, 0], [0, 1, 9], [12, 2, 3], [12, 3, 11], [12, 11, 6], [12, 6, 7],
    [12, 7, 8], [12, 8, 4], [12, 4, 5], [12, 5, 10], [12, 10, 2], [0, 1, 11], [1, 4, 11],
    [1, 8, 4], [1, 6, 8], [6, 7, 8], [4, 5, 11], [5, 3, 11], [5, 10, 3], [10, 2, 3], [1, 9, 6],
    [9, 0, 6], [0, 11, 6], [0, 1, 8], [1, 10, 8], [10, 6, 8], [6, 7, 8], [2, 3, 11], [4, 5, 9],
    [0, 1, 8], [1, 10, 8], [10, 6, 8], [6, 7, 8], [2, 3, 4], [3, 9, 4], [3, 5, 9], [3, 11, 5],
    [11, 2, 5], [2, 4, 5], [12, 0, 1], [12, 1, 10], [12, 10, 6], [12, 6, 7], [12, 7, 8],
    [12, 8, 4], [12, 4, 5], [12, 5, 9], [12, 9, 0], [2, 3, 11], [0, 1, 11], [1, 4, 11], [1, 10, 4],
    [10, 8, 4], [10, 6, 8], [6, 7, 8], [4, 3, 11], [4, 2, 3], [4, 5, 2], [5, 9, 2], [9, 11, 2],
    [9, 0, 11], [12, 0, 1], [12, 1, 9], [12, 9, 4], [12, 4, 5], [12, 5, 10], [12, 10, 6],
    [12, 6, 7], [12, 7, 8], [12, 8, 0], [2, 3, 11], [0, 1, 11], [1, 9, 11], [9, 3, 11], [9, 2, 3],
    [9, 4, 2], [4, 5, 2], [5, 11, 2], [5, 0, 11], [5, 10, 0], [10, 6, 0], [6, 7, 0], [7, 8, 0],
    [0, 1, 9], [2, 3, 11], [4, 5, 8], [5, 10, 8], [10, 6, 8], [6, 7, 8], [0, 3, 8], [1, 10, 2],
    [4, 7, 9], [7, 11, 9], [11, 6, 9], [6, 5, 9], [12, 0, 3], [12, 3, 8], [12, 8, 4], [12, 4, 7],
    [12, 7, 11], [12, 11, 6], [12, 6, 5], [12, 5, 9], [12, 9, 0], [1, 10, 2], [0, 3, 10],
    [3, 8, 10], [8, 1, 10], [8, 4, 1], [4, 7, 1], [7, 2, 1], [7, 10, 2], [7, 0, 10], [7, 11, 0],
    [11, 6, 0], [6, 5, 0], [5, 9, 0], [0, 3, 8], [12, 1, 9], [12, 9, 4], [12, 4, 7], [12, 7, 11],
    [12, 11, 6], [12, 6, 5], [12, 5, 10], [12, 10, 2], [12, 2, 1], [0, 10, 7], [0, 3, 10],
    [3, 5, 10], [3, 6, 5], [10, 2, 7], [2, 1, 7], [1, 9, 7], [9, 4, 7], [3, 8, 6], [8, 0, 6],
    [0, 11, 6], [0, 7, 11], [12, 0, 3], [12, 3, 8], [12, 8, 4], [12, 4, 7], [12, 7, 11],
    [12, 11, 6], [12, 6, 5], [12, 5, 10], [12, 10, 2], [12, 2, 1], [12, 1, 9], [12, 9, 0],
    [0, 3, 8], [12, 1, 10], [12, 10, 6], [12, 6, 5], [12, 5, 9], [12, 9, 4], [12, 4, 7],
    [12, 7, 11], [12, 11, 2], [12, 2, 1], [0, 3, 10], [3, 4, 10], [3, 9, 4], [3, 6, 9], [6, 5, 9],
    [4, 7, 10], [7, 1, 10], [7, 11, 1], [11, 2, 1], [3, 8, 6], [8, 0, 6], [0, 10, 6], [12, 0, 3],
    [12, 3, 8], [12, 8, 4], [12, 4, 7], [12, 7, 11], [12, 11, 2], [12, 2, 1], [12, 1, 10],
    [12, 10, 6], [12, 6, 5], [12, 5, 9], [12, 9, 0], [0, 3, 8], [1, 9, 2], [9, 4, 2], [4, 7, 2],
    [7, 11, 2], [5, 10, 6], [0, 3, 5], [3, 6, 5], [3, 10, 6], [3, 8, 10], [8, 0, 10], [0, 5, 10],
    [1, 9, 2], [9, 4, 2], [4, 7, 2], [7, 11, 2], [12, 0, 3], [12, 3, 8], [12, 8, 4], [12, 4, 7],
    [12, 7, 11], [12, 11, 2], [12, 2, 1], [12, 1, 9], [12, 9, 0], [5, 10, 6], [0, 3, 5], [3, 6, 5],
    [3, 10, 6], [3, 8, 10], [8, 4, 10], [4, 7, 10], [7, 0, 10], [7, 11, 0], [11, 9, 0], [11, 2, 9],
    [2, 1, 9], [0, 5, 10], [12, 0, 3], [12, 3, 11], [12, 11, 6], [12, 6, 5], [12, 5, 9],
    [12, 9, 4], [12, 4, 7], [12, 7, 8], [12, 8, 0], [1, 10, 2], [0, 3, 10], [3, 4, 10], [3, 11, 4],
    [11, 9, 4], [11, 6, 9], [6, 5, 9], [4, 1, 10], [4, 7, 1], [7, 8, 1], [8, 2, 1], [8, 10, 2],
    [8, 0, 10], [0, 3, 9], [3, 11, 9], [11, 6, 9], [6, 5, 9], [1, 10, 2], [4, 7, 8], [0, 3, 9],
    [3, 11, 9], [11, 6, 9], [6, 5, 9], [1, 10, 4], [10, 8, 4], [10, 7, 8], [10, 2, 7], [2, 1, 7],
    [1, 4, 7], [12, 0, 3], [12, 3, 11], [12, 11, 6], [12, 6, 5], [12, 5, 10], [12, 10, 2],
    [12, 2, 1], [12, 1, 9], [12, 9, 4], [12, 4, 7], [12, 7, 8], [12, 8, 0], [12, 0, 3],
    [12, 3, 11], [12, 11, 6], [12, 6, 5], [12, 5, 10], [12, 10, 2], [12, 2, 1], [12, 1, 9],
    [12, 9, 0], [4, 7, 8], [0, 10, 7], [0, 3, 10], [3, 5, 10], [3, 11, 5], [11, 6, 5], [10, 4, 7],
    [10, 2, 4], [2, 1, 4], [1, 8, 4], [1, 7, 8], [1, 9, 7], [9, 0, 7], [12, 0, 3], [12, 3, 11],
    [12, 11, 2], [12, 2, 1], [12, 1, 10], [12, 10, 6], [12, 6, 5], [12, 5, 9], [12, 9, 4],
    [12, 4, 7], [12, 7, 8], [12, 8, 0], [12, 0, 3], [12, 3, 11], [12, 11, 2], [12, 2, 1],
    [12, 1, 10], [12, 10, 6], [12, 6, 5], [12, 5, 9], [12, 9, 0], [4, 7, 8], [3, 11, 4],
    [11, 2, 4], [2, 8, 4], [2, 7, 8], [2, 1, 7], [1, 10, 7], [10, 4, 7], [10, 3, 4], [10, 6, 3],
    [6, 5, 3], [5, 9, 3], [9, 0, 3], [12, 0, 3], [12, 3, 11], [12, 11, 2], [12, 2, 1], [12, 1, 9],
    [12, 9, 4], [12, 4, 7], [12, 7, 8], [12, 8, 0], [5, 10, 6], [0, 3, 5], [3, 6, 5], [3, 10, 6],
    [3, 4, 10], [3, 11, 4], [11, 2, 4], [2, 1, 4], [1, 9, 4], [4, 7, 10], [7, 8, 10], [8, 0, 10],
    [0, 5, 10], [0, 3, 9], [3, 11, 9], [11, 2, 9], [2, 1, 9], [4, 7, 8], [5, 10, 6], [0, 1, 8],
    [1, 10, 8], [10, 2, 8], [2, 3, 8], [4, 7, 9], [7, 11, 9], [11, 6, 9], [6, 5, 9], [0, 1, 7],
    [1, 4, 7], [1, 10, 4], [10, 2, 4], [2, 3, 4], [3, 9, 4], [3, 6, 9], [3, 8, 6], [8, 0, 6],
    [0, 11, 6], [0, 7, 11], [6, 5, 9], [12, 0, 1], [12, 1, 10], [12, 10, 2], [12, 2, 3],
    [12, 3, 8], [12, 8, 4], [12, 4, 7], [12, 7, 11], [12, 11, 6], [12, 6, 5], [12, 5, 9],
    [12, 9, 0], [12, 0, 1], [12, 1, 9], [12, 9, 4], [12, 4, 7], [12, 7, 11], [12, 11, 6],
    [12, 6, 5], [12, 5, 10], [12, 10, 2], [12, 2, 3], [12, 3, 8], [12, 8, 0], [0, 1, 9],
    [12, 2, 3], [12, 3, 8], [12, 8, 4], [12, 4, 7], [12, 7, 11], [12, 11, 6], [12, 6, 5],
    [12, 5, 10], [12, 10, 2], [0, 1, 7], [1, 4, 7], [1, 8, 4], [1, 6, 8], [1, 9, 6], [9, 0, 6],
    [0, 11, 6], [0, 7, 11], [6, 5, 8], [5, 10, 8], [10, 2, 8], [2, 3, 8], [12, 0, 1], [12, 1, 10],
    [12, 10, 6], [12, 6, 5], [12, 5, 9], [12, 9, 4], [12, 4, 7], [12, 7, 11], [12, 11, 2],
    [12, 2, 3], [12, 3, 8], [12, 8, 0], [0, 1, 6], [1, 10, 6], [0, 6, 9], [6, 5, 9], [2, 3, 4],
    [3, 8, 4], [2, 4, 11], [4, 7, 11], [0, 1, 7], [1, 4, 7], [1, 8, 4], [1, 10, 8], [10, 6, 8],
    [6, 5, 8], [5, 2, 8], [5, 9, 2], [9, 7, 2], [9, 0, 7], [7, 11, 2], [2, 3, 8], [12, 0, 1],
    [12, 1, 9], [12, 9, 4], [12, 4, 7], [12, 7, 11], [12, 11, 2], [12, 2, 3], [12, 3, 8],
    [12, 8, 0], [5, 10, 6], [0, 11, 5], [0, 1, 11], [1, 9, 11], [9, 4, 11], [4, 7, 11], [11, 2, 5],
    [2, 3, 5], [3, 6, 5], [3, 10, 6], [3, 8, 10], [8, 0, 10], [0, 5, 10], [0, 1, 9], [2, 3, 4],
    [3, 8, 4], [2, 4, 11], [4, 7, 11], [5, 10, 6], [12, 0, 1], [12, 1, 10], [12, 10, 2],
    [12, 2, 3], [12, 3, 11], [12, 11, 6], [12, 6, 5], [12, 5, 9], [12, 9, 4], [12, 4, 7],
    [12, 7, 8], [12, 8, 0], [12, 0, 1], [12, 1, 10], [12, 10, 2], [12, 2, 3], [12, 3, 11],
    [12, 11, 6], [12, 6, 5], [12, 5, 9], [12, 9, 0], [4, 7, 8], [0, 1, 7], [1, 4, 7], [1, 10, 4],
    [10, 2, 4], [2, 8, 4], [2, 7, 8], [2, 9, 7], [2, 3, 9], [3, 11, 9], [11, 6, 9], [6, 5, 9],
    [9, 0, 7], [0, 1, 8], [1, 9, 7], [9, 4, 7], [1, 7, 8], [2, 3, 10], [3, 11, 5], [11, 6, 5],
    [3, 5, 10], [0, 1, 11], [1, 9, 11], [9, 3, 11], [9, 2, 3], [9, 4, 2], [4, 7, 2], [7, 8, 2],
    [8, 5, 2], [8, 0, 5], [0, 11, 5], [11, 6, 5], [5, 10, 2], [0, 1, 9], [2, 3, 10], [3, 11, 5],
    [11, 6, 5], [3, 5, 10], [4, 7, 8], [12, 0, 1], [12, 1, 10], [12, 10, 6], [12, 6, 5],
    [12, 5, 9], [12, 9, 4], [12, 4, 7], [12, 7, 8], [12, 8, 0], [2, 3, 11], [10, 6, 3], [6, 5, 3],
    [5, 2, 3], [5, 9, 2], [9, 4, 2], [4, 11, 2], [4, 3, 11], [4, 10, 3], [4, 7, 10], [7, 8, 10],
    [8, 0, 10], [0, 1, 10], [0, 1, 6], [1, 10, 6], [0, 6, 9], [6, 5, 9], [2, 3, 11], [4, 7, 8],
    [0, 1, 8], [1, 9, 7], [9, 4, 7], [1, 7, 8], [2, 3, 11], [5, 10, 6], [0, 1, 9], [2, 3, 11],
    [4, 7, 8], [5, 10, 6], [0, 4, 2], [4, 5, 2], [5, 10, 2], [6, 7, 11], [4, 5, 12], [5, 10, 12],
    [10, 7, 12], [7, 11, 12], [11, 4, 12], [10, 2, 7], [2, 0, 7], [0, 6, 7], [0, 11, 6],
    [0, 4, 11], [12, 0, 4], [12, 4, 5], [12, 5, 10], [12, 10, 6], [12, 6, 7], [12, 7, 11],
    [12, 11, 2], [12, 2, 0], [12, 0, 4], [12, 4, 7], [12, 7, 11], [12, 11, 6], [12, 6, 5],
    [12, 5, 10], [12, 10, 2], [12, 2, 0], [0, 4, 2], [4, 7, 2], [7, 11, 2], [5, 10, 6], [4, 7, 12],
    [7, 11, 12], [11, 5, 12], [5, 10, 12], [10, 4, 12], [11, 2, 5], [2, 0, 5], [0, 6, 5],
    [0, 10, 6], [0, 4, 10], [2, 3, 10], [3, 8, 10], [8, 4, 10], [4, 5, 10], [6, 7, 11], [2, 3, 8],
    [2, 8, 4], [2, 4, 5], [2, 5, 12], [2, 12, 10], [5, 10, 3], [3, 10, 12], [3, 12, 5], [6, 7, 12],
    [6, 12, 11], [7, 11, 12], [12, 2, 3], [12, 3, 8], [12, 8, 4], [12, 4, 5], [12, 5, 10],
    [12, 10, 6], [12, 6, 7], [12, 7, 11], [12, 11, 2], [12, 2, 3], [12, 3, 11], [12, 11, 6],
    [12, 6, 7], [12, 7, 8], [12, 8, 4], [12, 4, 5], [12, 5, 10], [12, 10, 2], [2, 3, 11],
    [4, 5, 8], [5, 10, 8], [10, 6, 8], [6, 7, 8], [2, 3, 4], [3, 10, 4], [3, 5, 10], [10, 8, 4],
    [10, 6, 8], [6, 7, 8], [3, 11, 5], [11, 2, 5], [2, 4, 5], [12, 2, 3], [12, 3, 8], [12, 8, 4],
    [12, 4, 7], [12, 7, 11], [12, 11, 6], [12, 6, 5], [12, 5, 10], [12, 10, 2], [2, 3, 4],
    [3, 8, 4], [2, 4, 11], [4, 7, 11], [5, 10, 6], [2, 3, 5], [3, 6, 5], [3, 10, 6], [3, 8, 10],
    [8, 5, 10], [8, 2, 5], [8, 4, 2], [4, 7, 2], [7, 11, 2], [2, 3, 10], [3, 11, 5], [11, 6, 5],
    [3, 5, 10], [4, 7, 8], [2, 3, 4], [3, 10, 4], [3, 5, 10], [3, 11, 5], [11, 6, 5], [10, 8, 4],
    [10, 7, 8], [10, 2, 7], [2, 4, 7], [2, 3, 11], [4, 7, 8], [5, 10, 6], [2, 6, 3], [6, 7, 3],
    [4, 5, 9], [2, 9, 4], [2, 6, 9], [6, 7, 9], [7, 3, 9], [3, 5, 9], [3, 2, 5], [2, 4, 5],
    [2, 6, 3], [6, 5, 3], [5, 9, 3], [9, 4, 3], [4, 7, 3], [0, 2, 8], [2, 6, 8], [6, 7, 8],
    [4, 5, 9], [0, 2, 5], [2, 4, 5], [2, 9, 4], [2, 6, 9], [6, 7, 12], [7, 8, 12], [8, 0, 12],
    [0, 5, 12], [5, 9, 12], [9, 6, 12], [12, 0, 2], [12, 2, 6], [12, 6, 7], [12, 7, 8], [12, 8, 4],
    [12, 4, 5], [12, 5, 9], [12, 9, 0], [12, 0, 2], [12, 2, 6], [12, 6, 5], [12, 5, 9], [12, 9, 4],
    [12, 4, 7], [12, 7, 8], [12, 8, 0], [0, 2, 9], [2, 6, 9], [6, 5, 9], [4, 7, 8], [0, 2, 7],
    [2, 4, 7], [2, 8, 4], [2, 6, 8], [6, 5, 12], [5, 9, 12], [9, 0, 12], [0, 7, 12], [7, 8, 12],
    [8, 6, 12], [0, 4, 1], [4, 5, 1], [2, 6, 3], [6, 7, 3], [0, 4, 12], [4, 5, 12], [5, 1, 12],
    [1, 7, 12], [7, 3, 12], [3, 2, 12], [2, 6, 12], [6, 0, 12], [1, 0, 7], [0, 6, 7], [12, 0, 4],
    [12, 4, 5], [12, 5, 1], [12, 1, 2], [12, 2, 6], [12, 6, 7], [12, 7, 3], [12, 3, 0], [12, 0, 4],
    [12, 4, 7], [12, 7, 3], [12, 3, 2], [12, 2, 6], [12, 6, 5], [12, 5, 1], [12, 1, 0], [0, 4, 3],
    [4, 7, 3], [1, 2, 5], [2, 6, 5], [0, 4, 12], [4, 7, 12], [7, 3, 12], [3, 5, 12], [5, 1, 12],
    [1, 2, 12], [2, 6, 12], [6, 0, 12], [3, 0, 5], [0, 6, 5], [1, 2, 5], [2, 6, 8], [6, 7, 8],
    [2, 8, 5], [8, 4, 5], [1, 2, 5], [2, 6, 5], [4, 7, 8], [1, 2, 4], [2, 8, 4], [2, 6, 8],
    [6, 5, 8], [5, 1, 8], [1, 7, 8], [1, 4, 7], [1, 10, 3], [10, 6, 3], [6, 7, 3], [4, 5, 9],
    [1, 10, 12], [10, 6, 12], [6, 9, 12], [9, 4, 12], [4, 1, 12], [6, 7, 9], [7, 3, 9], [3, 5, 9],
    [3, 4, 5], [3, 1, 4], [12, 1, 9], [12, 9, 4], [12, 4, 5], [12, 5, 10], [12, 10, 6], [12, 6, 7],
    [12, 7, 3], [12, 3, 1], [12, 1, 10], [12, 10, 6], [12, 6, 5], [12, 5, 9], [12, 9, 4],
    [12, 4, 7], [12, 7, 3], [12, 3, 1], [1, 9, 3], [9, 4, 3], [4, 7, 3], [5, 10, 6], [1, 9, 12],
    [9, 4, 12], [4, 10, 12], [10, 6, 12], [6, 1, 12], [4, 7, 10], [7, 3, 10], [3, 5, 10],
    [3, 6, 5], [3, 1, 6], [0, 1, 8], [1, 10, 8], [10, 6, 8], [6, 7, 8], [4, 5, 9], [0, 1, 10],
    [0, 10, 6], [0, 6, 7], [0, 7, 12], [0, 12, 8], [4, 5, 12], [4, 12, 9], [5, 9, 12], [7, 8, 1],
    [1, 8, 12], [1, 12, 7], [12, 0, 1], [12, 1, 10], [12, 10, 6], [12, 6, 7], [12, 7, 8],
    [12, 8, 4], [12, 4, 5], [12, 5, 9], [12, 9, 0], [12, 0, 1], [12, 1, 9], [12, 9, 4], [12, 4, 5],
    [12, 5, 10], [12, 10, 6], [12, 6, 7], [12, 7, 8], [12, 8, 0], [0, 1, 9], [4, 5, 8], [5, 10, 8],
    [10, 6, 8], [6, 7, 8], [0, 7, 10], [0, 1, 7], [1, 6, 7], [7, 8, 10], [8, 4, 10], [4, 5, 10],
    [1, 9, 6], [9, 0, 6], [0, 10, 6], [12, 0, 1], [12, 1, 10], [12, 10, 6], [12, 6, 5], [12, 5, 9],
    [12, 9, 4], [12, 4, 7], [12, 7, 8], [12, 8, 0], [0, 1, 6], [1, 10, 6], [0, 6, 9], [6, 5, 9],
    [4, 7, 8], [0, 1, 7], [1, 4, 7], [1, 10, 4], [10, 8, 4], [10, 7, 8], [10, 0, 7], [10, 6, 0],
    [6, 5, 0], [5, 9, 0], [0, 1, 8], [1, 9, 7], [9, 4, 7], [1, 7, 8], [5, 10, 6], [0, 6, 5],
    [0, 1, 6], [1, 8, 6], [1, 7, 8], [1, 9, 7], [9, 4, 7], [8, 10, 6], [8, 0, 10], [0, 5, 10],
    [0, 1, 9], [4, 7, 8], [5, 10, 6], [0, 4, 3], [4, 5, 3], [5, 10, 3], [10, 6, 3], [6, 7, 3],
    [0, 4, 3], [4, 7, 3], [5, 10, 6], [0, 4, 10], [4, 7, 10], [7, 3, 10], [3, 5, 10], [3, 0, 5],
    [0, 6, 5], [0, 10, 6], [4, 5, 8], [5, 10, 8], [10, 6, 8], [6, 7, 8], [4, 7, 8], [5, 10, 6],
    [5, 9, 6], [9, 8, 6], [8, 11, 6], [0, 3, 9], [3, 11, 9], [11, 6, 9], [6, 5, 9], [0, 8, 1],
    [8, 11, 1], [11, 6, 1], [6, 5, 1], [1, 3, 5], [3, 11, 5], [11, 6, 5], [1, 10, 2], [5, 9, 6],
    [9, 8, 6], [8, 11, 6], [1, 8, 11], [1, 10, 8], [10, 2, 8], [2, 5, 8], [5, 9, 8], [2, 1, 12],
    [1, 11, 12], [11, 6, 12], [6, 5, 12], [5, 2, 12], [12, 1, 9], [12, 9, 8], [12, 8, 11],
    [12, 11, 6], [12, 6, 5], [12, 5, 10], [12, 10, 2], [12, 2, 1], [12, 1, 10], [12, 10, 6],
    [12, 6, 5], [12, 5, 9], [12, 9, 8], [12, 8, 11], [12, 11, 2], [12, 2, 1], [1, 9, 2], [9, 8, 2],
    [8, 11, 2], [5, 10, 6], [1, 9, 6], [9, 8, 6], [8, 10, 6], [8, 5, 10], [8, 11, 5], [11, 2, 12],
    [2, 1, 12], [1, 6, 12], [6, 5, 12], [5, 11, 12], [0, 3, 9], [3, 11, 9], [11, 6, 9], [6, 5, 9],
    [1, 10, 2], [0, 3, 11], [0, 11, 6], [0, 6, 5], [0, 5, 12], [0, 12, 9], [1, 10, 12], [1, 12, 2],
    [2, 12, 10], [5, 9, 3], [3, 9, 12], [3, 12, 5], [12, 0, 3], [12, 3, 11], [12, 11, 6],
    [12, 6, 5], [12, 5, 10], [12, 10, 2], [12, 2, 1], [12, 1, 9], [12, 9, 0], [12, 0, 3],
    [12, 3, 11], [12, 11, 2], [12, 2, 1], [12, 1, 10], [12, 10, 6], [12, 6, 5], [12, 5, 9],
    [12, 9, 0], [0, 3, 9], [3, 11, 9], [11, 2, 9], [2, 1, 9], [5, 10, 6], [0, 3, 5], [3, 6, 5],
    [3, 9, 6], [3, 11, 9], [11, 2, 9], [2, 1, 9], [9, 0, 6], [0, 10, 6], [0, 5, 10], [12, 0, 1],
    [12, 1, 10], [12, 10, 2], [12, 2, 3], [12, 3, 11], [12, 11, 6], [12, 6, 5], [12, 5, 9],
    [12, 9, 0], [0, 1, 9], [2, 3, 10], [3, 11, 5], [11, 6, 5], [3, 5, 10], [0, 1, 11], [1, 9, 11],
    [9, 3, 11], [9, 6, 3], [9, 0, 6], [0, 11, 6], [6, 5, 3], [5, 10, 3], [10, 2, 3], [0, 1, 6],
    [1, 10, 6], [0, 6, 9], [6, 5, 9], [2, 3, 11], [0, 5, 11], [0, 6, 5], [0, 1, 6], [1, 10, 6],
    [5, 3, 11], [5, 2, 3], [5, 9, 2], [9, 11, 2], [9, 0, 11], [0, 1, 9], [2, 3, 11], [5, 10, 6],
    [0, 8, 2], [8, 11, 5], [11, 6, 5], [8, 5, 2], [5, 10, 2], [0, 8, 2], [8, 11, 2], [5, 10, 6],
    [0, 8, 10], [8, 5, 10], [8, 11, 5], [11, 2, 5], [2, 0, 5], [0, 6, 5], [0, 10, 6], [2, 3, 10],
    [3, 11, 5], [11, 6, 5], [3, 5, 10], [2, 3, 11], [5, 10, 6], [2, 6, 3], [6, 5, 3], [5, 9, 3],
    [9, 8, 3], [0, 2, 9], [2, 6, 9], [6, 5, 9], [0, 8, 1], [8, 3, 6], [3, 2, 6], [8, 6, 1],
    [6, 5, 1], [0, 8, 3], [1, 2, 5], [2, 6, 5], [0, 8, 6], [8, 2, 6], [8, 5, 2], [8, 3, 5],
    [3, 0, 5], [0, 6, 5], [5, 1, 2], [1, 2, 5], [2, 6, 5], [1, 10, 3], [10, 6, 3], [6, 5, 3],
    [5, 9, 3], [9, 8, 3], [1, 9, 3], [9, 8, 3], [5, 10, 6], [1, 9, 6], [9, 8, 6], [8, 10, 6],
    [8, 5, 10], [8, 3, 5], [3, 6, 5], [3, 1, 6], [0, 1, 6], [1, 10, 6], [0, 6, 9], [6, 5, 9],
    [0, 1, 9], [5, 10, 6], [0, 8, 3], [5, 10, 6], [0, 8, 5], [8, 6, 5], [8, 10, 6], [8, 3, 10],
    [3, 0, 10], [0, 5, 10], [5, 10, 6], [5, 7, 10], [7, 11, 10], [0, 3, 8], [5, 7, 10],
    [7, 11, 10], [0, 3, 5], [3, 10, 5], [3, 8, 10], [8, 0, 10], [0, 7, 10], [0, 5, 7], [7, 11, 10],
    [0, 3, 10], [3, 11, 10], [0, 10, 8], [10, 5, 8], [5, 7, 8], [0, 9, 1], [5, 7, 10], [7, 11, 10],
    [0, 11, 5], [0, 9, 11], [9, 7, 11], [11, 10, 5], [9, 1, 7], [1, 0, 7], [0, 5, 7], [0, 9, 7],
    [9, 5, 7], [0, 7, 1], [7, 11, 1], [11, 10, 1], [1, 3, 9], [3, 8, 9], [5, 7, 10], [7, 11, 10],
    [1, 3, 12], [3, 8, 12], [8, 9, 12], [9, 11, 12], [11, 10, 12], [10, 5, 12], [5, 7, 12],
    [7, 1, 12], [9, 1, 11], [1, 7, 11], [12, 1, 3], [12, 3, 8], [12, 8, 9], [12, 9, 5], [12, 5, 7],
    [12, 7, 11], [12, 11, 10], [12, 10, 1], [12, 1, 3], [12, 3, 11], [12, 11, 10], [12, 10, 5],
    [12, 5, 7], [12, 7, 8], [12, 8, 9], [12, 9, 1], [1, 3, 10], [3, 11, 10], [5, 7, 9], [7, 8, 9],
    [1, 3, 12], [3, 11, 12], [11, 10, 12], [10, 8, 12], [8, 9, 12], [9, 5, 12], [5, 7, 12],
    [7, 1, 12], [10, 1, 8], [1, 7, 8], [1, 5, 2], [5, 7, 2], [7, 11, 2], [0, 3, 8], [1, 5, 2],
    [5, 7, 2], [7, 11, 2], [0, 5, 7], [0, 3, 5], [3, 8, 5], [8, 1, 5], [8, 0, 12], [0, 7, 12],
    [7, 11, 12], [11, 2, 12], [2, 1, 12], [1, 8, 12], [12, 0, 3], [12, 3, 11], [12, 11, 2],
    [12, 2, 1], [12, 1, 5], [12, 5, 7], [12, 7, 8], [12, 8, 0], [12, 0, 1], [12, 1, 5], [12, 5, 7],
    [12, 7, 11], [12, 11, 2], [12, 2, 3], [12, 3, 8], [12, 8, 0], [0, 1, 8], [1, 5, 8], [5, 7, 8],
    [2, 3, 11], [0, 1, 11], [1, 5, 11], [5, 3, 11], [5, 2, 3], [5, 7, 2], [7, 8, 12], [8, 0, 12],
    [0, 11, 12], [11, 2, 12], [2, 7, 12], [0, 9, 2], [9, 5, 2], [5, 7, 2], [7, 11, 2], [2, 3, 9],
    [3, 8, 9], [2, 9, 11], [9, 5, 11], [5, 7, 11], [2, 3, 11], [5, 7, 9], [7, 8, 9], [2, 3, 5],
    [3, 9, 5], [3, 11, 9], [11, 2, 9], [2, 7, 9], [2, 5, 7], [7, 8, 9], [2, 10, 3], [10, 5, 3],
    [5, 7, 3], [0, 2, 8], [2, 10, 8], [10, 5, 8], [5, 7, 8], [0, 9, 1], [2, 10, 3], [10, 5, 3],
    [5, 7, 3], [0, 9, 12], [9, 2, 12], [2, 10, 12], [10, 0, 12], [9, 7, 2], [9, 1, 7], [1, 0, 7],
    [0, 10, 7], [10, 5, 7], [7, 3, 2], [12, 0, 9], [12, 9, 5], [12, 5, 7], [12, 7, 3], [12, 3, 2],
    [12, 2, 10], [12, 10, 1], [12, 1, 0], [12, 0, 9], [12, 9, 1], [12, 1, 2], [12, 2, 10],
    [12, 10, 5], [12, 5, 7], [12, 7, 3], [12, 3, 0], [0, 9, 3], [9, 5, 3], [5, 7, 3], [1, 2, 10],
    [0, 9, 12], [9, 2, 12], [2, 10, 12], [10, 0, 12], [9, 5, 2], [5, 7, 2], [7, 1, 2], [7, 10, 1],
    [7, 3, 10], [3, 0, 10], [1, 2, 9], [2, 10, 7], [10, 5, 7], [2, 7, 9], [7, 8, 9], [1, 2, 10],
    [5, 7, 9], [7, 8, 9], [1, 2, 7], [2, 5, 7], [2, 8, 5], [2, 10, 8], [10, 1, 8], [1, 7, 8],
    [8, 9, 5], [1, 5, 3], [5, 7, 3], [0, 1, 8], [1, 5, 8], [5, 7, 8], [0, 9, 3], [9, 5, 3],
    [5, 7, 3], [5, 7, 9], [7, 8, 9], [4, 8, 5], [8, 11, 5], [11, 10, 5], [0, 3, 4], [3, 11, 4],
    [11, 10, 4], [10, 5, 4], [0, 9, 1], [4, 8, 5], [8, 11, 5], [11, 10, 5], [0, 11, 10],
    [0, 9, 11], [9, 1, 11], [1, 4, 11], [4, 8, 11], [1, 0, 12], [0, 10, 12], [10, 5, 12],
    [5, 4, 12], [4, 1, 12], [12, 0, 8], [12, 8, 11], [12, 11, 10], [12, 10, 5], [12, 5, 4],
    [12, 4, 9], [12, 9, 1], [12, 1, 0], [12, 0, 9], [12, 9, 5], [12, 5, 4], [12, 4, 8],
    [12, 8, 11], [12, 11, 10], [12, 10, 1], [12, 1, 0], [0, 8, 1], [8, 11, 1], [11, 10, 1],
    [4, 9, 5], [0, 8, 5], [8, 11, 5], [11, 9, 5], [11, 4, 9], [11, 10, 4], [10, 1, 12], [1, 0, 12],
    [0, 5, 12], [5, 4, 12], [4, 10, 12], [1, 3, 9], [3, 11, 9], [11, 10, 4], [10, 5, 4],
    [11, 4, 9], [1, 3, 10], [3, 11, 10], [4, 9, 5], [1, 3, 4], [3, 5, 4], [3, 9, 5], [3, 11, 9],
    [11, 4, 9], [11, 10, 4], [10, 1, 4], [1, 5, 2], [5, 4, 2], [4, 8, 2], [8, 11, 2], [0, 3, 4],
    [3, 11, 4], [11, 2, 4], [2, 1, 4], [1, 5, 4], [0, 1, 4], [1, 5, 4], [2, 3, 11], [0, 1, 11],
    [1, 5, 11], [5, 3, 11], [5, 2, 3], [5, 4, 2], [4, 11, 2], [4, 0, 11], [0, 9, 2], [9, 5, 2],
    [5, 4, 2], [4, 8, 2], [8, 11, 2], [0, 8, 2], [8, 11, 2], [4, 9, 5], [0, 8, 5], [8, 11, 5],
    [11, 9, 5], [11, 4, 9], [11, 2, 4], [2, 5, 4], [2, 0, 5], [2, 3, 11], [4, 9, 5], [2, 3, 4],
    [3, 5, 4], [3, 9, 5], [3, 11, 9], [11, 2, 9], [2, 4, 9], [2, 10, 3], [10, 5, 3], [5, 4, 3],
    [4, 8, 3], [0, 2, 4], [2, 10, 4], [10, 5, 4], [0, 9, 1], [2, 10, 3], [10, 5, 3], [5, 4, 3],
    [4, 8, 3], [0, 9, 1], [2, 10, 5], [2, 5, 4], [2, 4, 8], [2, 8, 12], [2, 12, 9], [2, 9, 3],
    [3, 9, 12], [3, 12, 10], [3, 10, 8], [8, 10, 12], [12, 0, 8], [12, 8, 3], [12, 3, 2],
    [12, 2, 10], [12, 10, 5], [12, 5, 4], [12, 4, 9], [12, 9, 1], [12, 1, 0], [12, 0, 9],
    [12, 9, 5], [12, 5, 4], [12, 4, 8], [12, 8, 3], [12, 3, 2], [12, 2, 10], [12, 10, 1],
    [12, 1, 0], [0, 8, 1], [8, 3, 10], [3, 2, 10], [8, 10, 1], [4, 9, 5], [8, 3, 5], [3, 9, 5],
    [3, 4, 9], [3, 2, 4], [2, 5, 4], [2, 8, 5], [2, 10, 8], [10, 1, 8], [1, 0, 8], [12, 0, 9],
    [12, 9, 1], [12, 1, 2], [12, 2, 10], [12, 10, 5], [12, 5, 4], [12, 4, 8], [12, 8, 3],
    [12, 3, 0], [0, 8, 3], [1, 2, 9], [2, 10, 4], [10, 5, 4], [2, 4, 9], [0, 8, 10], [8, 2, 10],
    [8, 5, 2], [8, 3, 5], [3, 0, 5], [0, 10, 5], [5, 4, 2], [4, 9, 2], [9, 1, 2], [0, 9, 3],
    [9, 5, 3], [5, 4, 3], [4, 8, 3], [1, 2, 10], [5, 4, 2], [4, 1, 2], [4, 8, 1], [8, 10, 1],
    [8, 2, 10], [8, 5, 2], [8, 3, 5], [3, 0, 5], [0, 9, 5], [0, 8, 3], [1, 2, 10], [4, 9, 5],
    [1, 2, 9], [2, 10, 4], [10, 5, 4], [2, 4, 9], [1, 2, 10], [4, 9, 5], [1, 5, 3], [5, 4, 3],
    [4, 8, 3], [0, 1, 4], [1, 5, 4], [0, 9, 3], [9, 5, 3], [5, 4, 3], [4, 8, 3], [0, 8, 3],
    [4, 9, 5], [4, 9, 5], [4, 7, 9], [7, 11, 9], [11, 10, 9], [0, 3, 8], [4, 7, 9], [7, 11, 9],
    [11, 10, 9], [0, 3, 12], [3, 4, 12], [4, 7, 12], [7, 0, 12], [3, 10, 4], [3, 8, 10],
    [8, 0, 10], [0, 7, 10], [7, 11, 10], [10, 9, 4], [12, 0, 3], [12, 3, 8], [12, 8, 4],
    [12, 4, 7], [12, 7, 11], [12, 11, 10], [12, 10, 9], [12, 9, 0], [12, 0, 3], [12, 3, 11],
    [12, 11, 10], [12, 10, 9], [12, 9, 4], [12, 4, 7], [12, 7, 8], [12, 8, 0], [0, 3, 9],
    [3, 11, 9], [11, 10, 9], [4, 7, 8], [0, 3, 12], [3, 4, 12], [4, 7, 12], [7, 0, 12], [3, 11, 4],
    [11, 10, 4], [10, 8, 4], [10, 7, 8], [10, 9, 7], [9, 0, 7], [0, 4, 1], [4, 7, 1], [7, 11, 1],
    [11, 10, 1], [1, 3, 10], [3, 8, 10], [8, 4, 10], [4, 7, 10], [7, 11, 10], [1, 3, 10],
    [3, 11, 10], [4, 7, 8], [1, 3, 4], [3, 11, 4], [11, 10, 4], [10, 8, 4], [10, 7, 8], [10, 1, 7],
    [1, 4, 7], [1, 9, 2], [9, 4, 2], [4, 7, 2], [7, 11, 2], [0, 3, 8], [1, 9, 2], [9, 4, 2],
    [4, 7, 2], [7, 11, 2], [0, 3, 8], [1, 9, 4], [1, 4, 7], [1, 7, 11], [1, 11, 12], [1, 12, 8],
    [1, 8, 2], [2, 8, 12], [2, 12, 9], [2, 9, 11], [9, 12, 11], [12, 0, 3], [12, 3, 8], [12, 8, 4],
    [12, 4, 7], [12, 7, 11], [12, 11, 2], [12, 2, 1], [12, 1, 9], [12, 9, 0], [12, 0, 3],
    [12, 3, 11], [12, 11, 2], [12, 2, 1], [12, 1, 9], [12, 9, 4], [12, 4, 7], [12, 7, 8],
    [12, 8, 0], [0, 3, 9], [3, 11, 9], [11, 2, 9], [2, 1, 9], [4, 7, 8], [11, 2, 4], [2, 8, 4],
    [2, 7, 8], [2, 1, 7], [1, 4, 7], [1, 11, 4], [1, 9, 11], [9, 0, 11], [0, 3, 11], [12, 0, 1],
    [12, 1, 9], [12, 9, 4], [12, 4, 7], [12, 7, 11], [12, 11, 2], [12, 2, 3], [12, 3, 8],
    [12, 8, 0], [0, 1, 9], [2, 3, 4], [3, 8, 4], [2, 4, 11], [4, 7, 11], [0, 1, 7], [1, 4, 7],
    [1, 11, 4], [1, 9, 11], [9, 0, 11], [0, 7, 11], [11, 2, 4], [2, 3, 4], [3, 8, 4], [0, 1, 8],
    [1, 9, 7], [9, 4, 7], [1, 7, 8], [2, 3, 11], [1, 9, 11], [9, 3, 11], [9, 2, 3], [9, 4, 2],
    [4, 11, 2], [4, 1, 11], [4, 7, 1], [7, 8, 1], [8, 0, 1], [0, 1, 9], [2, 3, 11], [4, 7, 8],
    [0, 4, 2], [4, 7, 2], [7, 11, 2], [2, 3, 4], [3, 8, 4], [2, 4, 11], [4, 7, 11], [2, 3, 11],
    [4, 7, 8], [2, 10, 3], [10, 9, 3], [9, 4, 3], [4, 7, 3], [0, 2, 8], [2, 10, 8], [10, 9, 7],
    [9, 4, 7], [10, 7, 8], [0, 2, 9], [2, 10, 9], [4, 7, 8], [0, 2, 7], [2, 4, 7], [2, 10, 4],
    [10, 8, 4], [10, 7, 8], [10, 9, 7], [9, 0, 7], [0, 4, 1], [4, 7, 1], [7, 3, 10], [3, 2, 10],
    [7, 10, 1], [0, 4, 3], [4, 7, 3], [1, 2, 10], [0, 4, 10], [4, 2, 10], [4, 1, 2], [4, 7, 1],
    [7, 10, 1], [7, 3, 10], [3, 0, 10], [1, 2, 10], [4, 7, 8], [1, 2, 4], [2, 8, 4], [2, 7, 8],
    [2, 10, 7], [10, 1, 7], [1, 4, 7], [1, 9, 3], [9, 4, 3], [4, 7, 3], [0, 1, 8], [1, 9, 7],
    [9, 4, 7], [1, 7, 8], [0, 1, 9], [4, 7, 8], [0, 4, 3], [4, 7, 3], [4, 7, 8], [8, 11, 9],
    [11, 10, 9], [0, 3, 9], [3, 11, 9], [11, 10, 9], [0, 8, 1], [8, 11, 1], [11, 10, 1],
    [1, 3, 10], [3, 11, 10], [1, 9, 2], [9, 8, 2], [8, 11, 2], [0, 3, 9], [3, 11, 9], [11, 2, 9],
    [2, 1, 9], [0, 1, 9], [2, 3, 11], [0, 8, 2], [8, 11, 2], [2, 3, 11], [2, 10, 3], [10, 9, 3],
    [9, 8, 3], [0, 2, 9], [2, 10, 9], [0, 8, 1], [8, 3, 10], [3, 2, 10], [8, 10, 1], [0, 8, 3],
    [1, 2, 10], [1, 2, 10], [1, 9, 3], [9, 8, 3], [0, 1, 9], [0, 8, 3],
];

/// Classic (non-topology-resolved) edge table: bit `e` is set when
/// cube edge `e` crosses the surface for the given sign pattern.
pub(crate) const CLASSIC_EDGE_TABLE: [u16; 256] = [
    0x000, 0x109, 0x203, 0x30A, 0x406, 0x50F, 0x605, 0x70C, 0x80C, 0x905, 0xA0F, 0xB06, 0xC0A,
    0xD03, 0xE09, 0xF00, 0x190, 0x099, 0x393, 0x29A, 0x596, 0x49F, 0x795, 0x69C, 0x99C, 0x895,
    0xB9F, 0xA96, 0xD9A, 0xC93, 0xF99, 0xE90, 0x230, 0x339, 0x033, 0x13A, 0x636, 0x73F, 0x435,
    0x53C, 0xA3C, 0xB35, 0x83F, 0x936, 0xE3A, 0xF33, 0xC39, 0xD30, 0x3A0, 0x2A9, 0x1A3, 0x0AA,
    0x7A6, 0x6AF, 0x5A5, 0x4AC, 0xBAC, 0xAA5, 0x9AF, 0x8A6, 0xFAA, 0xEA3, 0xDA9, 0xCA0, 0x460,
    0x569, 0x663, 0x76A, 0x066, 0x16F, 0x265, 0x36C, 0xC6C, 0xD65, 0xE6F, 0xF66, 0x86A, 0x963,
    0xA69, 0xB60, 0x5F0, 0x4F9, 0x7F3, 0x6FA, 0x1F6, 0x0FF, 0x3F5, 0x2FC, 0xDFC, 0xCF5, 0xFFF,
    0xEF6, 0x9FA, 0x8F3, 0xBF9, 0xAF0, 0x650, 0x759, 0x453, 0x55A, 0x256, 0x35F, 0x055, 0x15C,
    0xE5C, 0xF55, 0xC5F, 0xD56, 0xA5A, 0xB53, 0x859, 0x950, 0x7C0, 0x6C9, 0x5C3, 0x4CA, 0x3C6,
    0x2CF, 0x1C5, 0x0CC, 0xFCC, 0xEC5, 0xDCF, 0xCC6, 0xBCA, 0xAC3, 0x9C9, 0x8C0, 0x8C0, 0x9C9,
    0xAC3, 0xBCA, 0xCC6, 0xDCF, 0xEC5, 0xFCC, 0x0CC, 0x1C5, 0x2CF, 0x3C6, 0x4CA, 0x5C3, 0x6C9,
    0x7C0, 0x950, 0x859, 0xB53, 0xA5A, 0xD56, 0xC5F, 0xF55, 0xE5C, 0x15C, 0x055, 0x35F, 0x256,
    0x55A, 0x453, 0x759, 0x650, 0xAF0, 0xBF9, 0x8F3, 0x9FA, 0xEF6, 0xFFF, 0xCF5, 0xDFC, 0x2FC,
    0x3F5, 0x0FF, 0x1F6, 0x6FA, 0x7F3, 0x4F9, 0x5F0, 0xB60, 0xA69, 0x963, 0x86A, 0xF66, 0xE6F,
    0xD65, 0xC6C, 0x36C, 0x265, 0x16F, 0x066, 0x76A, 0x663, 0x569, 0x460, 0xCA0, 0xDA9, 0xEA3,
    0xFAA, 0x8A6, 0x9AF, 0xAA5, 0xBAC, 0x4AC, 0x5A5, 0x6AF, 0x7A6, 0x0AA, 0x1A3, 0x2A9, 0x3A0,
    0xD30, 0xC39, 0xF33, 0xE3A, 0x936, 0x83F, 0xB35, 0xA3C, 0x53C, 0x435, 0x73F, 0x636, 0x13A,
    0x033, 0x339, 0x230, 0xE90, 0xF99, 0xC93, 0xD9A, 0xA96, 0xB9F, 0x895, 0x99C, 0x69C, 0x795,
    0x49F, 0x596, 0x29A, 0x393, 0x099, 0x190, 0xF00, 0xE09, 0xD03, 0xC0A, 0xB06, 0xA0F, 0x905,
    0x80C, 0x70C, 0x605, 0x50F, 0x406, 0x30A, 0x203, 0x109, 0x000,
];

/// Classic triangle table, `0xFF` terminated rows. Indexed by the
/// below-level sign pattern (the historical convention), which makes
/// its windings match [`TILING_TRIS`] under the above-level pattern's
/// complement.
pub(crate) const CLASSIC_TRI_TABLE: [[u8; 16]; 256] = [
    [255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [0, 8, 3, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [0, 1, 9, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [1, 8, 3, 9, 8, 1, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [1, 2, 10, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [0, 8, 3, 1, 2, 10, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [9, 2, 10, 0, 2, 9, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [2, 8, 3, 2, 10, 8, 10, 9, 8, 255, 255, 255, 255, 255, 255, 255],
    [3, 11, 2, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [0, 11, 2, 8, 11, 0, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [1, 9, 0, 2, 3, 11, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [1, 11, 2, 1, 9, 11, 9, 8, 11, 255, 255, 255, 255, 255, 255, 255],
    [3, 10, 1, 11, 10, 3, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [0, 10, 1, 0, 8, 10, 8, 11, 10, 255, 255, 255, 255, 255, 255, 255],
    [3, 9, 0, 3, 11, 9, 11, 10, 9, 255, 255, 255, 255, 255, 255, 255],
    [9, 8, 10, 10, 8, 11, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [4, 7, 8, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [4, 3, 0, 7, 3, 4, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [0, 1, 9, 8, 4, 7, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [4, 1, 9, 4, 7, 1, 7, 3, 1, 255, 255, 255, 255, 255, 255, 255],
    [1, 2, 10, 8, 4, 7, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [3, 4, 7, 3, 0, 4, 1, 2, 10, 255, 255, 255, 255, 255, 255, 255],
    [9, 2, 10, 9, 0, 2, 8, 4, 7, 255, 255, 255, 255, 255, 255, 255],
    [2, 10, 9, 2, 9, 7, 2, 7, 3, 7, 9, 4, 255, 255, 255, 255],
    [8, 4, 7, 3, 11, 2, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [11, 4, 7, 11, 2, 4, 2, 0, 4, 255, 255, 255, 255, 255, 255, 255],
    [9, 0, 1, 8, 4, 7, 2, 3, 11, 255, 255, 255, 255, 255, 255, 255],
    [4, 7, 11, 9, 4, 11, 9, 11, 2, 9, 2, 1, 255, 255, 255, 255],
    [3, 10, 1, 3, 11, 10, 7, 8, 4, 255, 255, 255, 255, 255, 255, 255],
    [1, 11, 10, 1, 4, 11, 1, 0, 4, 7, 11, 4, 255, 255, 255, 255],
    [4, 7, 8, 9, 0, 11, 9, 11, 10, 11, 0, 3, 255, 255, 255, 255],
    [4, 7, 11, 4, 11, 9, 9, 11, 10, 255, 255, 255, 255, 255, 255, 255],
    [9, 5, 4, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [9, 5, 4, 0, 8, 3, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [0, 5, 4, 1, 5, 0, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [8, 5, 4, 8, 3, 5, 3, 1, 5, 255, 255, 255, 255, 255, 255, 255],
    [1, 2, 10, 9, 5, 4, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [3, 0, 8, 1, 2, 10, 4, 9, 5, 255, 255, 255, 255, 255, 255, 255],
    [5, 2, 10, 5, 4, 2, 4, 0, 2, 255, 255, 255, 255, 255, 255, 255],
    [2, 10, 5, 3, 2, 5, 3, 5, 4, 3, 4, 8, 255, 255, 255, 255],
    [9, 5, 4, 2, 3, 11, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [0, 11, 2, 0, 8, 11, 4, 9, 5, 255, 255, 255, 255, 255, 255, 255],
    [0, 5, 4, 0, 1, 5, 2, 3, 11, 255, 255, 255, 255, 255, 255, 255],
    [2, 1, 5, 2, 5, 8, 2, 8, 11, 4, 8, 5, 255, 255, 255, 255],
    [10, 3, 11, 10, 1, 3, 9, 5, 4, 255, 255, 255, 255, 255, 255, 255],
    [4, 9, 5, 0, 8, 1, 8, 10, 1, 8, 11, 10, 255, 255, 255, 255],
    [5, 4, 0, 5, 0, 11, 5, 11, 10, 11, 0, 3, 255, 255, 255, 255],
    [5, 4, 8, 5, 8, 10, 10, 8, 11, 255, 255, 255, 255, 255, 255, 255],
    [9, 7, 8, 5, 7, 9, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [9, 3, 0, 9, 5, 3, 5, 7, 3, 255, 255, 255, 255, 255, 255, 255],
    [0, 7, 8, 0, 1, 7, 1, 5, 7, 255, 255, 255, 255, 255, 255, 255],
    [1, 5, 3, 3, 5, 7, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [9, 7, 8, 9, 5, 7, 10, 1, 2, 255, 255, 255, 255, 255, 255, 255],
    [10, 1, 2, 9, 5, 0, 5, 3, 0, 5, 7, 3, 255, 255, 255, 255],
    [8, 0, 2, 8, 2, 5, 8, 5, 7, 10, 5, 2, 255, 255, 255, 255],
    [2, 10, 5, 2, 5, 3, 3, 5, 7, 255, 255, 255, 255, 255, 255, 255],
    [7, 9, 5, 7, 8, 9, 3, 11, 2, 255, 255, 255, 255, 255, 255, 255],
    [9, 5, 7, 9, 7, 2, 9, 2, 0, 2, 7, 11, 255, 255, 255, 255],
    [2, 3, 11, 0, 1, 8, 1, 7, 8, 1, 5, 7, 255, 255, 255, 255],
    [11, 2, 1, 11, 1, 7, 7, 1, 5, 255, 255, 255, 255, 255, 255, 255],
    [9, 5, 8, 8, 5, 7, 10, 1, 3, 10, 3, 11, 255, 255, 255, 255],
    [5, 7, 0, 5, 0, 9, 7, 11, 0, 1, 0, 10, 11, 10, 0, 255],
    [11, 10, 0, 11, 0, 3, 10, 5, 0, 8, 0, 7, 5, 7, 0, 255],
    [11, 10, 5, 7, 11, 5, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [10, 6, 5, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [0, 8, 3, 5, 10, 6, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [9, 0, 1, 5, 10, 6, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [1, 8, 3, 1, 9, 8, 5, 10, 6, 255, 255, 255, 255, 255, 255, 255],
    [1, 6, 5, 2, 6, 1, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [1, 6, 5, 1, 2, 6, 3, 0, 8, 255, 255, 255, 255, 255, 255, 255],
    [9, 6, 5, 9, 0, 6, 0, 2, 6, 255, 255, 255, 255, 255, 255, 255],
    [5, 9, 8, 5, 8, 2, 5, 2, 6, 3, 2, 8, 255, 255, 255, 255],
    [2, 3, 11, 10, 6, 5, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [11, 0, 8, 11, 2, 0, 10, 6, 5, 255, 255, 255, 255, 255, 255, 255],
    [0, 1, 9, 2, 3, 11, 5, 10, 6, 255, 255, 255, 255, 255, 255, 255],
    [5, 10, 6, 1, 9, 2, 9, 11, 2, 9, 8, 11, 255, 255, 255, 255],
    [6, 3, 11, 6, 5, 3, 5, 1, 3, 255, 255, 255, 255, 255, 255, 255],
    [0, 8, 11, 0, 11, 5, 0, 5, 1, 5, 11, 6, 255, 255, 255, 255],
    [3, 11, 6, 0, 3, 6, 0, 6, 5, 0, 5, 9, 255, 255, 255, 255],
    [6, 5, 9, 6, 9, 11, 11, 9, 8, 255, 255, 255, 255, 255, 255, 255],
    [5, 10, 6, 4, 7, 8, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [4, 3, 0, 4, 7, 3, 6, 5, 10, 255, 255, 255, 255, 255, 255, 255],
    [1, 9, 0, 5, 10, 6, 8, 4, 7, 255, 255, 255, 255, 255, 255, 255],
    [10, 6, 5, 1, 9, 7, 1, 7, 3, 7, 9, 4, 255, 255, 255, 255],
    [6, 1, 2, 6, 5, 1, 4, 7, 8, 255, 255, 255, 255, 255, 255, 255],
    [1, 2, 5, 5, 2, 6, 3, 0, 4, 3, 4, 7, 255, 255, 255, 255],
    [8, 4, 7, 9, 0, 5, 0, 6, 5, 0, 2, 6, 255, 255, 255, 255],
    [7, 3, 9, 7, 9, 4, 3, 2, 9, 5, 9, 6, 2, 6, 9, 255],
    [3, 11, 2, 7, 8, 4, 10, 6, 5, 255, 255, 255, 255, 255, 255, 255],
    [5, 10, 6, 4, 7, 2, 4, 2, 0, 2, 7, 11, 255, 255, 255, 255],
    [0, 1, 9, 4, 7, 8, 2, 3, 11, 5, 10, 6, 255, 255, 255, 255],
    [9, 2, 1, 9, 11, 2, 9, 4, 11, 7, 11, 4, 5, 10, 6, 255],
    [8, 4, 7, 3, 11, 5, 3, 5, 1, 5, 11, 6, 255, 255, 255, 255],
    [5, 1, 11, 5, 11, 6, 1, 0, 11, 7, 11, 4, 0, 4, 11, 255],
    [0, 5, 9, 0, 6, 5, 0, 3, 6, 11, 6, 3, 8, 4, 7, 255],
    [6, 5, 9, 6, 9, 11, 4, 7, 9, 7, 11, 9, 255, 255, 255, 255],
    [10, 4, 9, 6, 4, 10, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [4, 10, 6, 4, 9, 10, 0, 8, 3, 255, 255, 255, 255, 255, 255, 255],
    [10, 0, 1, 10, 6, 0, 6, 4, 0, 255, 255, 255, 255, 255, 255, 255],
    [8, 3, 1, 8, 1, 6, 8, 6, 4, 6, 1, 10, 255, 255, 255, 255],
    [1, 4, 9, 1, 2, 4, 2, 6, 4, 255, 255, 255, 255, 255, 255, 255],
    [3, 0, 8, 1, 2, 9, 2, 4, 9, 2, 6, 4, 255, 255, 255, 255],
    [0, 2, 4, 4, 2, 6, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [8, 3, 2, 8, 2, 4, 4, 2, 6, 255, 255, 255, 255, 255, 255, 255],
    [10, 4, 9, 10, 6, 4, 11, 2, 3, 255, 255, 255, 255, 255, 255, 255],
    [0, 8, 2, 2, 8, 11, 4, 9, 10, 4, 10, 6, 255, 255, 255, 255],
    [3, 11, 2, 0, 1, 6, 0, 6, 4, 6, 1, 10, 255, 255, 255, 255],
    [6, 4, 1, 6, 1, 10, 4, 8, 1, 2, 1, 11, 8, 11, 1, 255],
    [9, 6, 4, 9, 3, 6, 9, 1, 3, 11, 6, 3, 255, 255, 255, 255],
    [8, 11, 1, 8, 1, 0, 11, 6, 1, 9, 1, 4, 6, 4, 1, 255],
    [3, 11, 6, 3, 6, 0, 0, 6, 4, 255, 255, 255, 255, 255, 255, 255],
    [6, 4, 8, 11, 6, 8, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [7, 10, 6, 7, 8, 10, 8, 9, 10, 255, 255, 255, 255, 255, 255, 255],
    [0, 7, 3, 0, 10, 7, 0, 9, 10, 6, 7, 10, 255, 255, 255, 255],
    [10, 6, 7, 1, 10, 7, 1, 7, 8, 1, 8, 0, 255, 255, 255, 255],
    [10, 6, 7, 10, 7, 1, 1, 7, 3, 255, 255, 255, 255, 255, 255, 255],
    [1, 2, 6, 1, 6, 8, 1, 8, 9, 8, 6, 7, 255, 255, 255, 255],
    [2, 6, 9, 2, 9, 1, 6, 7, 9, 0, 9, 3, 7, 3, 9, 255],
    [7, 8, 0, 7, 0, 6, 6, 0, 2, 255, 255, 255, 255, 255, 255, 255],
    [7, 3, 2, 6, 7, 2, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [2, 3, 11, 10, 6, 8, 10, 8, 9, 8, 6, 7, 255, 255, 255, 255],
    [2, 0, 7, 2, 7, 11, 0, 9, 7, 6, 7, 10, 9, 10, 7, 255],
    [1, 8, 0, 1, 7, 8, 1, 10, 7, 6, 7, 10, 2, 3, 11, 255],
    [11, 2, 1, 11, 1, 7, 10, 6, 1, 6, 7, 1, 255, 255, 255, 255],
    [8, 9, 6, 8, 6, 7, 9, 1, 6, 11, 6, 3, 1, 3, 6, 255],
    [0, 9, 1, 11, 6, 7, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [7, 8, 0, 7, 0, 6, 3, 11, 0, 11, 6, 0, 255, 255, 255, 255],
    [7, 11, 6, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [7, 6, 11, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [3, 0, 8, 11, 7, 6, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [0, 1, 9, 11, 7, 6, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [8, 1, 9, 8, 3, 1, 11, 7, 6, 255, 255, 255, 255, 255, 255, 255],
    [10, 1, 2, 6, 11, 7, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [1, 2, 10, 3, 0, 8, 6, 11, 7, 255, 255, 255, 255, 255, 255, 255],
    [2, 9, 0, 2, 10, 9, 6, 11, 7, 255, 255, 255, 255, 255, 255, 255],
    [6, 11, 7, 2, 10, 3, 10, 8, 3, 10, 9, 8, 255, 255, 255, 255],
    [7, 2, 3, 6, 2, 7, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [7, 0, 8, 7, 6, 0, 6, 2, 0, 255, 255, 255, 255, 255, 255, 255],
    [2, 7, 6, 2, 3, 7, 0, 1, 9, 255, 255, 255, 255, 255, 255, 255],
    [1, 6, 2, 1, 8, 6, 1, 9, 8, 8, 7, 6, 255, 255, 255, 255],
    [10, 7, 6, 10, 1, 7, 1, 3, 7, 255, 255, 255, 255, 255, 255, 255],
    [10, 7, 6, 1, 7, 10, 1, 8, 7, 1, 0, 8, 255, 255, 255, 255],
    [0, 3, 7, 0, 7, 10, 0, 10, 9, 6, 10, 7, 255, 255, 255, 255],
    [7, 6, 10, 7, 10, 8, 8, 10, 9, 255, 255, 255, 255, 255, 255, 255],
    [6, 8, 4, 11, 8, 6, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [3, 6, 11, 3, 0, 6, 0, 4, 6, 255, 255, 255, 255, 255, 255, 255],
    [8, 6, 11, 8, 4, 6, 9, 0, 1, 255, 255, 255, 255, 255, 255, 255],
    [9, 4, 6, 9, 6, 3, 9, 3, 1, 11, 3, 6, 255, 255, 255, 255],
    [6, 8, 4, 6, 11, 8, 2, 10, 1, 255, 255, 255, 255, 255, 255, 255],
    [1, 2, 10, 3, 0, 11, 0, 6, 11, 0, 4, 6, 255, 255, 255, 255],
    [4, 11, 8, 4, 6, 11, 0, 2, 9, 2, 10, 9, 255, 255, 255, 255],
    [10, 9, 3, 10, 3, 2, 9, 4, 3, 11, 3, 6, 4, 6, 3, 255],
    [8, 2, 3, 8, 4, 2, 4, 6, 2, 255, 255, 255, 255, 255, 255, 255],
    [0, 4, 2, 4, 6, 2, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [1, 9, 0, 2, 3, 4, 2, 4, 6, 4, 3, 8, 255, 255, 255, 255],
    [1, 9, 4, 1, 4, 2, 2, 4, 6, 255, 255, 255, 255, 255, 255, 255],
    [8, 1, 3, 8, 6, 1, 8, 4, 6, 6, 10, 1, 255, 255, 255, 255],
    [10, 1, 0, 10, 0, 6, 6, 0, 4, 255, 255, 255, 255, 255, 255, 255],
    [4, 6, 3, 4, 3, 8, 6, 10, 3, 0, 3, 9, 10, 9, 3, 255],
    [10, 9, 4, 6, 10, 4, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [4, 9, 5, 7, 6, 11, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [0, 8, 3, 4, 9, 5, 11, 7, 6, 255, 255, 255, 255, 255, 255, 255],
    [5, 0, 1, 5, 4, 0, 7, 6, 11, 255, 255, 255, 255, 255, 255, 255],
    [11, 7, 6, 8, 3, 4, 3, 5, 4, 3, 1, 5, 255, 255, 255, 255],
    [9, 5, 4, 10, 1, 2, 7, 6, 11, 255, 255, 255, 255, 255, 255, 255],
    [6, 11, 7, 1, 2, 10, 0, 8, 3, 4, 9, 5, 255, 255, 255, 255],
    [7, 6, 11, 5, 4, 10, 4, 2, 10, 4, 0, 2, 255, 255, 255, 255],
    [3, 4, 8, 3, 5, 4, 3, 2, 5, 10, 5, 2, 11, 7, 6, 255],
    [7, 2, 3, 7, 6, 2, 5, 4, 9, 255, 255, 255, 255, 255, 255, 255],
    [9, 5, 4, 0, 8, 6, 0, 6, 2, 6, 8, 7, 255, 255, 255, 255],
    [3, 6, 2, 3, 7, 6, 1, 5, 0, 5, 4, 0, 255, 255, 255, 255],
    [6, 2, 8, 6, 8, 7, 2, 1, 8, 4, 8, 5, 1, 5, 8, 255],
    [9, 5, 4, 10, 1, 6, 1, 7, 6, 1, 3, 7, 255, 255, 255, 255],
    [1, 6, 10, 1, 7, 6, 1, 0, 7, 8, 7, 0, 9, 5, 4, 255],
    [4, 0, 10, 4, 10, 5, 0, 3, 10, 6, 10, 7, 3, 7, 10, 255],
    [7, 6, 10, 7, 10, 8, 5, 4, 10, 4, 8, 10, 255, 255, 255, 255],
    [6, 9, 5, 6, 11, 9, 11, 8, 9, 255, 255, 255, 255, 255, 255, 255],
    [3, 6, 11, 0, 6, 3, 0, 5, 6, 0, 9, 5, 255, 255, 255, 255],
    [0, 11, 8, 0, 5, 11, 0, 1, 5, 5, 6, 11, 255, 255, 255, 255],
    [6, 11, 3, 6, 3, 5, 5, 3, 1, 255, 255, 255, 255, 255, 255, 255],
    [1, 2, 10, 9, 5, 11, 9, 11, 8, 11, 5, 6, 255, 255, 255, 255],
    [0, 11, 3, 0, 6, 11, 0, 9, 6, 5, 6, 9, 1, 2, 10, 255],
    [11, 8, 5, 11, 5, 6, 8, 0, 5, 10, 5, 2, 0, 2, 5, 255],
    [6, 11, 3, 6, 3, 5, 2, 10, 3, 10, 5, 3, 255, 255, 255, 255],
    [5, 8, 9, 5, 2, 8, 5, 6, 2, 3, 8, 2, 255, 255, 255, 255],
    [9, 5, 6, 9, 6, 0, 0, 6, 2, 255, 255, 255, 255, 255, 255, 255],
    [1, 5, 8, 1, 8, 0, 5, 6, 8, 3, 8, 2, 6, 2, 8, 255],
    [1, 5, 6, 2, 1, 6, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [1, 3, 6, 1, 6, 10, 3, 8, 6, 5, 6, 9, 8, 9, 6, 255],
    [10, 1, 0, 10, 0, 6, 9, 5, 0, 5, 6, 0, 255, 255, 255, 255],
    [0, 3, 8, 5, 6, 10, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [10, 5, 6, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [11, 5, 10, 7, 5, 11, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [11, 5, 10, 11, 7, 5, 8, 3, 0, 255, 255, 255, 255, 255, 255, 255],
    [5, 11, 7, 5, 10, 11, 1, 9, 0, 255, 255, 255, 255, 255, 255, 255],
    [10, 7, 5, 10, 11, 7, 9, 8, 1, 8, 3, 1, 255, 255, 255, 255],
    [11, 1, 2, 11, 7, 1, 7, 5, 1, 255, 255, 255, 255, 255, 255, 255],
    [0, 8, 3, 1, 2, 7, 1, 7, 5, 7, 2, 11, 255, 255, 255, 255],
    [9, 7, 5, 9, 2, 7, 9, 0, 2, 2, 11, 7, 255, 255, 255, 255],
    [7, 5, 2, 7, 2, 11, 5, 9, 2, 3, 2, 8, 9, 8, 2, 255],
    [2, 5, 10, 2, 3, 5, 3, 7, 5, 255, 255, 255, 255, 255, 255, 255],
    [8, 2, 0, 8, 5, 2, 8, 7, 5, 10, 2, 5, 255, 255, 255, 255],
    [9, 0, 1, 5, 10, 3, 5, 3, 7, 3, 10, 2, 255, 255, 255, 255],
    [9, 8, 2, 9, 2, 1, 8, 7, 2, 10, 2, 5, 7, 5, 2, 255],
    [1, 3, 5, 3, 7, 5, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [0, 8, 7, 0, 7, 1, 1, 7, 5, 255, 255, 255, 255, 255, 255, 255],
    [9, 0, 3, 9, 3, 5, 5, 3, 7, 255, 255, 255, 255, 255, 255, 255],
    [9, 8, 7, 5, 9, 7, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [5, 8, 4, 5, 10, 8, 10, 11, 8, 255, 255, 255, 255, 255, 255, 255],
    [5, 0, 4, 5, 11, 0, 5, 10, 11, 11, 3, 0, 255, 255, 255, 255],
    [0, 1, 9, 8, 4, 10, 8, 10, 11, 10, 4, 5, 255, 255, 255, 255],
    [10, 11, 4, 10, 4, 5, 11, 3, 4, 9, 4, 1, 3, 1, 4, 255],
    [2, 5, 1, 2, 8, 5, 2, 11, 8, 4, 5, 8, 255, 255, 255, 255],
    [0, 4, 11, 0, 11, 3, 4, 5, 11, 2, 11, 1, 5, 1, 11, 255],
    [0, 2, 5, 0, 5, 9, 2, 11, 5, 4, 5, 8, 11, 8, 5, 255],
    [9, 4, 5, 2, 11, 3, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [2, 5, 10, 3, 5, 2, 3, 4, 5, 3, 8, 4, 255, 255, 255, 255],
    [5, 10, 2, 5, 2, 4, 4, 2, 0, 255, 255, 255, 255, 255, 255, 255],
    [3, 10, 2, 3, 5, 10, 3, 8, 5, 4, 5, 8, 0, 1, 9, 255],
    [5, 10, 2, 5, 2, 4, 1, 9, 2, 9, 4, 2, 255, 255, 255, 255],
    [8, 4, 5, 8, 5, 3, 3, 5, 1, 255, 255, 255, 255, 255, 255, 255],
    [0, 4, 5, 1, 0, 5, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [8, 4, 5, 8, 5, 3, 9, 0, 5, 0, 3, 5, 255, 255, 255, 255],
    [9, 4, 5, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [4, 11, 7, 4, 9, 11, 9, 10, 11, 255, 255, 255, 255, 255, 255, 255],
    [0, 8, 3, 4, 9, 7, 9, 11, 7, 9, 10, 11, 255, 255, 255, 255],
    [1, 10, 11, 1, 11, 4, 1, 4, 0, 7, 4, 11, 255, 255, 255, 255],
    [3, 1, 4, 3, 4, 8, 1, 10, 4, 7, 4, 11, 10, 11, 4, 255],
    [4, 11, 7, 9, 11, 4, 9, 2, 11, 9, 1, 2, 255, 255, 255, 255],
    [9, 7, 4, 9, 11, 7, 9, 1, 11, 2, 11, 1, 0, 8, 3, 255],
    [11, 7, 4, 11, 4, 2, 2, 4, 0, 255, 255, 255, 255, 255, 255, 255],
    [11, 7, 4, 11, 4, 2, 8, 3, 4, 3, 2, 4, 255, 255, 255, 255],
    [2, 9, 10, 2, 7, 9, 2, 3, 7, 7, 4, 9, 255, 255, 255, 255],
    [9, 10, 7, 9, 7, 4, 10, 2, 7, 8, 7, 0, 2, 0, 7, 255],
    [3, 7, 10, 3, 10, 2, 7, 4, 10, 1, 10, 0, 4, 0, 10, 255],
    [1, 10, 2, 8, 7, 4, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [4, 9, 1, 4, 1, 7, 7, 1, 3, 255, 255, 255, 255, 255, 255, 255],
    [4, 9, 1, 4, 1, 7, 0, 8, 1, 8, 7, 1, 255, 255, 255, 255],
    [4, 0, 3, 7, 4, 3, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [4, 8, 7, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [9, 10, 8, 10, 11, 8, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [3, 0, 9, 3, 9, 11, 11, 9, 10, 255, 255, 255, 255, 255, 255, 255],
    [0, 1, 10, 0, 10, 8, 8, 10, 11, 255, 255, 255, 255, 255, 255, 255],
    [3, 1, 10, 11, 3, 10, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [1, 2, 11, 1, 11, 9, 9, 11, 8, 255, 255, 255, 255, 255, 255, 255],
    [3, 0, 9, 3, 9, 11, 1, 2, 9, 2, 11, 9, 255, 255, 255, 255],
    [0, 2, 11, 8, 0, 11, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [3, 2, 11, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [2, 3, 8, 2, 8, 10, 10, 8, 9, 255, 255, 255, 255, 255, 255, 255],
    [9, 10, 2, 0, 9, 2, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [2, 3, 8, 2, 8, 10, 0, 1, 8, 1, 10, 8, 255, 255, 255, 255],
    [1, 10, 2, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [1, 3, 8, 9, 1, 8, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [0, 9, 1, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [0, 3, 8, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
    [255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255],
];

#[cfg(test)]
mod tests {
    use super::*;

    fn crossed_edges(pattern: usize) -> u16 {
        let mut bits = 0u16;
        for (e, &(a, b)) in EDGE_ENDPOINTS.iter().enumerate() {
            if (pattern >> a & 1) != (pattern >> b & 1) {
                bits |= 1 << e;
            }
        }
        bits
    }

    fn tiling(span: u16) -> &'static [[u8; 3]] {
        let (off, len) = TILING_SPANS[span as usize];
        &TILING_TRIS[off as usize..off as usize + len as usize]
    }

    #[test]
    fn class_histogram_matches_known_multiplicities() {
        let expected: [usize; 15] = [2, 16, 24, 24, 8, 48, 48, 16, 6, 8, 6, 12, 24, 2, 12];
        let mut histogram = [0usize; 15];
        for entry in &CASES {
            histogram[entry.class as usize] += 1;
        }
        assert_eq!(histogram, expected);
    }

    #[test]
    fn combo_offsets_cover_all_face_test_outcomes() {
        let mut offset = 0u16;
        for entry in &CASES {
            assert_eq!(entry.combo_offset, offset);
            offset += 1 << entry.face_count;
        }
        assert_eq!(offset as usize, COMBOS.len());
    }

    #[test]
    fn ambiguous_faces_have_alternating_corner_signs() {
        for (pattern, entry) in CASES.iter().enumerate() {
            for k in 0..6 {
                let face = entry.faces[k];
                if k < entry.face_count as usize {
                    let [p0, p1, p2, p3] = FACE_CORNERS[face as usize];
                    let diag0 = (pattern >> p0 & 1) == (pattern >> p2 & 1);
                    let diag1 = (pattern >> p1 & 1) == (pattern >> p3 & 1);
                    let mixed = (pattern >> p0 & 1) != (pattern >> p1 & 1);
                    assert!(diag0 && diag1 && mixed, "pattern {pattern} face {face}");
                } else {
                    assert_eq!(face, -1);
                }
            }
        }
    }

    #[test]
    fn spans_stay_in_bounds() {
        for &(off, len) in &TILING_SPANS {
            assert!(off as usize + len as usize <= TILING_TRIS.len());
        }
        for combo in &COMBOS {
            assert!((combo.disk as usize) < TILING_SPANS.len());
            if combo.tunnel == NO_TILING {
                assert_eq!(combo.sides, 0);
            } else {
                assert!((combo.tunnel as usize) < TILING_SPANS.len());
                assert_ne!(combo.sides, 0);
            }
        }
    }

    /// Every tiling must be an oriented patch whose boundary crosses
    /// each sign-changed cube edge exactly once: that is what makes
    /// adjacent cells glue without cracks.
    #[test]
    fn tilings_bound_exactly_the_crossed_edges() {
        for (pattern, entry) in CASES.iter().enumerate() {
            let crossed = crossed_edges(pattern);
            let combo_count = 1u16 << entry.face_count;
            for c in 0..combo_count {
                let combo = &COMBOS[(entry.combo_offset + c) as usize];
                let mut spans = vec![combo.disk];
                if combo.tunnel != NO_TILING {
                    spans.push(combo.tunnel);
                }
                for span in spans {
                    let mut directed = hashbrown::HashMap::new();
                    for tri in tiling(span) {
                        for i in 0..3 {
                            let u = tri[i];
                            let v = tri[(i + 1) % 3];
                            assert!(u <= CENTER_VERTEX && v <= CENTER_VERTEX);
                            if u < CENTER_VERTEX {
                                assert_ne!(crossed >> u & 1, 0, "pattern {pattern}");
                            }
                            *directed.entry((u, v)).or_insert(0u32) += 1;
                        }
                    }
                    let mut boundary = 0u16;
                    for (&(u, v), &n) in &directed {
                        assert_eq!(n, 1, "duplicated edge {u}-{v} in pattern {pattern}");
                        if !directed.contains_key(&(v, u)) {
                            // boundary edges live on cube faces
                            assert!(u < CENTER_VERTEX && v < CENTER_VERTEX);
                            boundary |= 1 << u;
                        }
                    }
                    assert_eq!(boundary, crossed, "pattern {pattern}");
                }
            }
        }
    }

    /// Internal tiling edges must never lie in a cube face plane: the
    /// neighbouring cell could emit the same segment with an unrelated
    /// tiling, pinching the surface into a non-manifold edge. Boundary
    /// chords are exempt, they are the shared face isolines.
    #[test]
    fn internal_edges_avoid_face_planes() {
        let edge_in_face = |e: u8, corners: &[u8; 4]| {
            let (a, b) = EDGE_ENDPOINTS[e as usize];
            corners.contains(&a) && corners.contains(&b)
        };
        for span in 0..TILING_SPANS.len() as u16 {
            let mut directed = hashbrown::HashSet::new();
            for tri in tiling(span) {
                for i in 0..3 {
                    directed.insert((tri[i], tri[(i + 1) % 3]));
                }
            }
            for &(u, v) in &directed {
                if u >= CENTER_VERTEX || v >= CENTER_VERTEX || !directed.contains(&(v, u)) {
                    continue;
                }
                let coplanar = FACE_CORNERS
                    .iter()
                    .any(|corners| edge_in_face(u, corners) && edge_in_face(v, corners));
                assert!(!coplanar, "span {span} edge {u}-{v} lies in a face");
            }
        }
    }

    #[test]
    fn classic_edge_table_matches_edge_endpoints() {
        for pattern in 0..256usize {
            assert_eq!(CLASSIC_EDGE_TABLE[pattern], crossed_edges(pattern));
        }
    }

    #[test]
    fn classic_triangles_use_only_crossed_edges() {
        for pattern in 0..256usize {
            let crossed = CLASSIC_EDGE_TABLE[pattern];
            let row = &CLASSIC_TRI_TABLE[pattern];
            let len = row.iter().position(|&v| v == 255).unwrap_or(16);
            assert_eq!(len % 3, 0);
            for &e in &row[..len] {
                assert_ne!(crossed >> e & 1, 0, "pattern {pattern} edge {e}");
            }
        }
    }
}
