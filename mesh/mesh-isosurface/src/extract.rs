//! Isosurface extraction entry point.

use tracing::{debug, info};

use crate::classic;
use crate::config::{ExtractionMethod, GradientDirection, IsosurfaceConfig};
use crate::error::{IsosurfaceError, IsosurfaceResult};
use crate::filter::{keep_largest_component, remove_degenerate_faces};
use crate::lewiner;
use crate::mesh::SurfaceMesh;
use crate::volume::ScalarVolume;

/// Extract the isosurface of a scalar volume as a triangle mesh.
///
/// Walks every cell of the sampling lattice, triangulates the level
/// crossing inside it, and assembles a deduplicated mesh with
/// per-vertex normals and field strengths. With the default
/// [`ExtractionMethod::Lewiner`] the result is watertight wherever the
/// surface does not leave the sampled (and unmasked) region.
///
/// # Errors
///
/// Returns an error if:
/// - The step size is zero
/// - Any spacing component is not finite and positive
/// - The mask length differs from the volume length
/// - The level lies outside the volume's value range
/// - The level surface does not intersect the eligible region
///   ([`IsosurfaceError::NoSurface`])
///
/// # Example
///
/// ```
/// use mesh_isosurface::{extract_isosurface, IsosurfaceConfig, ScalarVolume};
///
/// // a sphere of radius 3 sampled on a 9^3 grid
/// let volume = ScalarVolume::from_fn((9, 9, 9), |x, y, z| {
///     let (dx, dy, dz) = (x as f64 - 4.0, y as f64 - 4.0, z as f64 - 4.0);
///     3.0 - (dx * dx + dy * dy + dz * dz).sqrt()
/// })
/// .unwrap();
///
/// let mesh = extract_isosurface(&volume, &IsosurfaceConfig::default().with_level(0.0)).unwrap();
/// assert!(!mesh.is_empty());
/// ```
pub fn extract_isosurface(
    volume: &ScalarVolume,
    config: &IsosurfaceConfig,
) -> IsosurfaceResult<SurfaceMesh> {
    if config.step_size < 1 {
        return Err(IsosurfaceError::InvalidStepSize(config.step_size));
    }
    if let Some(spacing) = config.spacing {
        for (axis, &value) in spacing.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(IsosurfaceError::InvalidSpacing { axis, value });
            }
        }
    }
    if let Some(mask) = &config.mask {
        if mask.len() != volume.len() {
            return Err(IsosurfaceError::MaskShapeMismatch {
                expected: volume.len(),
                actual: mask.len(),
            });
        }
    }

    let (min, max) = volume.min_max();
    let level = config.level.unwrap_or_else(|| 0.5 * (min + max));
    if level < min || level > max {
        return Err(IsosurfaceError::LevelOutOfRange { level, min, max });
    }

    let (nx, ny, nz) = volume.dimensions();
    info!(
        nx,
        ny,
        nz,
        level,
        step_size = config.step_size,
        method = ?config.method,
        "extracting isosurface"
    );

    let mask = config.mask.as_deref();
    let mut mesh = match config.method {
        ExtractionMethod::Lewiner => lewiner::extract(volume, level, config.step_size, mask),
        ExtractionMethod::Classic => classic::extract(volume, level, config.step_size, mask),
    };

    if config.gradient_direction == GradientDirection::Ascent {
        mesh.flip_orientation();
    }
    if !config.allow_degenerate {
        remove_degenerate_faces(&mut mesh);
    }
    if config.single_mesh {
        keep_largest_component(&mut mesh);
    }
    if let Some(spacing) = config.spacing {
        mesh.apply_spacing(spacing);
    }

    if mesh.vertices.is_empty() {
        return Err(IsosurfaceError::NoSurface);
    }
    debug!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "isosurface extracted"
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ramp() -> ScalarVolume {
        ScalarVolume::from_fn((2, 2, 2), |_, _, z| z as f64).unwrap()
    }

    fn sphere(n: usize, radius: f64) -> ScalarVolume {
        let c = (n - 1) as f64 / 2.0;
        ScalarVolume::from_fn((n, n, n), |x, y, z| {
            let dx = x as f64 - c;
            let dy = y as f64 - c;
            let dz = z as f64 - c;
            radius - (dx * dx + dy * dy + dz * dz).sqrt()
        })
        .unwrap()
    }

    #[test]
    fn default_level_is_the_midpoint_of_the_range() {
        // range [0, 1], midpoint 0.5: quad at z = 0.5
        let mesh = extract_isosurface(&ramp(), &IsosurfaceConfig::default()).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        for v in &mesh.vertices {
            assert_relative_eq!(v.z, 0.5);
        }
    }

    #[test]
    fn rejects_invalid_parameters() {
        let volume = ramp();
        assert!(matches!(
            extract_isosurface(&volume, &IsosurfaceConfig::default().with_step_size(0)),
            Err(IsosurfaceError::InvalidStepSize(0))
        ));
        assert!(matches!(
            extract_isosurface(
                &volume,
                &IsosurfaceConfig::default().with_spacing([1.0, -2.0, 1.0])
            ),
            Err(IsosurfaceError::InvalidSpacing { axis: 1, .. })
        ));
        assert!(matches!(
            extract_isosurface(&volume, &IsosurfaceConfig::default().with_mask(vec![true; 3])),
            Err(IsosurfaceError::MaskShapeMismatch {
                expected: 8,
                actual: 3
            })
        ));
        assert!(matches!(
            extract_isosurface(&volume, &IsosurfaceConfig::default().with_level(2.0)),
            Err(IsosurfaceError::LevelOutOfRange { .. })
        ));
    }

    #[test]
    fn constant_volume_has_no_surface() {
        let volume = ScalarVolume::from_values((2, 2, 2), vec![1.0; 8]).unwrap();
        assert!(matches!(
            extract_isosurface(&volume, &IsosurfaceConfig::default()),
            Err(IsosurfaceError::NoSurface)
        ));
    }

    #[test]
    fn mask_excluding_every_cell_has_no_surface() {
        let config = IsosurfaceConfig::default().with_mask(vec![false; 8]);
        assert!(matches!(
            extract_isosurface(&ramp(), &config),
            Err(IsosurfaceError::NoSurface)
        ));
    }

    #[test]
    fn ascent_flips_winding_and_normals() {
        let descent = extract_isosurface(&ramp(), &IsosurfaceConfig::default()).unwrap();
        let ascent = extract_isosurface(
            &ramp(),
            &IsosurfaceConfig::default().with_gradient_direction(GradientDirection::Ascent),
        )
        .unwrap();
        assert_eq!(descent.faces[0][0], ascent.faces[0][0]);
        assert_eq!(descent.faces[0][1], ascent.faces[0][2]);
        for (d, a) in descent.normals.iter().zip(&ascent.normals) {
            assert_relative_eq!(d.z, -a.z);
        }
    }

    #[test]
    fn spacing_scales_vertex_positions() {
        let config = IsosurfaceConfig::default().with_spacing([1.0, 1.0, 2.0]);
        let mesh = extract_isosurface(&ramp(), &config).unwrap();
        for v in &mesh.vertices {
            assert_relative_eq!(v.z, 1.0);
        }
        for n in &mesh.normals {
            assert_relative_eq!(n.norm(), 1.0);
        }
    }

    #[test]
    fn degenerate_filter_empties_a_flat_contact() {
        // the only triangle is zero-area, collapsed onto corner 0
        let mut values = vec![-1.0; 8];
        values[0] = 0.0;
        let volume = ScalarVolume::from_values((2, 2, 2), values).unwrap();
        let config = IsosurfaceConfig::default().with_level(0.0);
        assert_eq!(
            extract_isosurface(&volume, &config).unwrap().face_count(),
            1
        );
        let strict = config.with_allow_degenerate(false);
        assert!(matches!(
            extract_isosurface(&volume, &strict),
            Err(IsosurfaceError::NoSurface)
        ));
    }

    #[test]
    fn single_mesh_keeps_the_larger_of_two_spheres() {
        let volume = ScalarVolume::from_fn((17, 9, 9), |x, y, z| {
            let dy = y as f64 - 4.0;
            let dz = z as f64 - 4.0;
            let a = 3.0 - ((x as f64 - 4.0).powi(2) + dy * dy + dz * dz).sqrt();
            let b = 2.0 - ((x as f64 - 12.0).powi(2) + dy * dy + dz * dz).sqrt();
            a.max(b)
        })
        .unwrap();
        let config = IsosurfaceConfig::default().with_level(0.0);
        let both = extract_isosurface(&volume, &config).unwrap();
        let single =
            extract_isosurface(&volume, &config.clone().with_single_mesh(true)).unwrap();
        assert!(single.face_count() < both.face_count());
        assert!(single.face_count() > both.face_count() / 2);
    }

    #[test]
    fn larger_step_still_yields_a_closed_coarser_mesh() {
        let volume = sphere(13, 5.0);
        let config = IsosurfaceConfig::default().with_level(0.0);
        let fine = extract_isosurface(&volume, &config).unwrap();
        let coarse =
            extract_isosurface(&volume, &config.clone().with_step_size(2)).unwrap();
        assert!(coarse.face_count() < fine.face_count());

        let mut half = hashbrown::HashMap::new();
        for &[a, b, c] in &coarse.faces {
            for (u, v) in [(a, b), (b, c), (c, a)] {
                *half.entry((u, v)).or_insert(0u32) += 1;
            }
        }
        assert!(half
            .iter()
            .all(|(&(u, v), &n)| n == 1 && half.get(&(v, u)) == Some(&1)));
    }

    #[test]
    fn sphere_normals_point_radially_outward() {
        // inside is above the level, so normals leave the ball
        let volume = sphere(11, 4.0);
        let mesh =
            extract_isosurface(&volume, &IsosurfaceConfig::default().with_level(0.0)).unwrap();
        let center = nalgebra::Point3::new(5.0, 5.0, 5.0);
        for (v, n) in mesh.vertices.iter().zip(&mesh.normals) {
            assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-9);
            assert!((v - center).dot(n) > 0.0);
        }
    }

    #[test]
    fn classic_method_honors_the_mask() {
        let volume = sphere(9, 3.0);
        let mask = vec![true; volume.len()];
        let config = IsosurfaceConfig::default()
            .with_level(0.0)
            .with_method(ExtractionMethod::Classic)
            .with_mask(mask);
        let masked = extract_isosurface(&volume, &config).unwrap();
        let unmasked = extract_isosurface(
            &volume,
            &IsosurfaceConfig::default()
                .with_level(0.0)
                .with_method(ExtractionMethod::Classic),
        )
        .unwrap();
        assert_eq!(masked.face_count(), unmasked.face_count());
    }
}
