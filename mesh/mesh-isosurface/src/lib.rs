//! Isosurface extraction from sampled 3-D scalar fields.
//!
//! This crate turns a scalar volume and a threshold value (the level)
//! into a triangle mesh of the surface where the field equals that
//! level, using marching cubes with full topological disambiguation.
//!
//! # Overview
//!
//! Extraction works cell by cell over the sampling lattice:
//! 1. Classify each cell of 8 neighboring samples by which corners are
//!    on the inside of the level
//! 2. Resolve ambiguous sign patterns with bilinear face tests and a
//!    trilinear interior connectivity test, so adjacent cells never
//!    disagree about a shared face
//! 3. Interpolate vertex positions along the crossed cell edges, with
//!    gradient-based normals and interpolated field strengths
//! 4. Deduplicate vertices through a canonical edge cache and assemble
//!    the global index mesh
//!
//! The disambiguation step is what makes the output watertight: the
//! classic 15-case table (also available, as
//! [`ExtractionMethod::Classic`]) can tile the two sides of an
//! ambiguous face incompatibly and leave holes.
//!
//! # Example
//!
//! ```
//! use mesh_isosurface::{extract_isosurface, IsosurfaceConfig, ScalarVolume};
//!
//! // Sample a sphere of radius 3 on a 9^3 grid
//! let volume = ScalarVolume::from_fn((9, 9, 9), |x, y, z| {
//!     let dx = x as f64 - 4.0;
//!     let dy = y as f64 - 4.0;
//!     let dz = z as f64 - 4.0;
//!     3.0 - (dx * dx + dy * dy + dz * dz).sqrt()
//! })
//! .unwrap();
//!
//! let config = IsosurfaceConfig::default().with_level(0.0);
//! let mesh = extract_isosurface(&volume, &config).unwrap();
//!
//! // A sphere inside the grid comes out closed, with outward normals
//! assert!(mesh.face_count() > 0);
//! assert_eq!(mesh.vertex_count(), mesh.normals.len());
//! ```
//!
//! # Conventions
//!
//! A sample is *inside* when its value is greater than or equal to the
//! level; samples exactly on the level are deterministically inside.
//! Faces wind counter-clockwise seen from outside, and normals point
//! from the inside region outward (the field's descent direction).
//! [`GradientDirection::Ascent`] flips both for fields where the
//! object is darker than the background.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod builder;
mod classic;
mod config;
mod cube;
mod error;
mod extract;
mod filter;
mod lewiner;
mod mesh;
mod tables;
mod volume;

pub use config::{ExtractionMethod, GradientDirection, IsosurfaceConfig};
pub use error::{IsosurfaceError, IsosurfaceResult};
pub use extract::extract_isosurface;
pub use mesh::SurfaceMesh;
pub use volume::ScalarVolume;
