//! Configuration for isosurface extraction.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which cell triangulation scheme to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExtractionMethod {
    /// Topologically consistent triangulation that resolves face and
    /// interior ambiguities of the trilinear interpolant. Guarantees a
    /// watertight surface on volumes whose boundary samples are below
    /// the level.
    #[default]
    Lewiner,
    /// The classic 15-case triangulation. Faster and simpler, but
    /// ambiguous cells can leave holes between neighboring cells.
    Classic,
}

/// Which way the scalar field changes across the surface, seen from
/// the front (CCW) side of the output faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GradientDirection {
    /// Values decrease in the direction the faces point. This is the
    /// convention for volumes where the object is brighter than the
    /// background, and the default.
    #[default]
    Descent,
    /// Values increase in the direction the faces point.
    Ascent,
}

/// Configuration for [`extract_isosurface`](crate::extract_isosurface).
///
/// The defaults extract at the midpoint of the volume's value range
/// with unit spacing and full resolution.
///
/// # Example
///
/// ```
/// use mesh_isosurface::IsosurfaceConfig;
///
/// let config = IsosurfaceConfig::default()
///     .with_level(0.0)
///     .with_spacing([0.5, 0.5, 1.0]);
/// ```
#[derive(Debug, Clone)]
pub struct IsosurfaceConfig {
    /// Contour value to search for. `None` selects the midpoint of the
    /// volume's minimum and maximum.
    pub level: Option<f64>,
    /// World-space size of one lattice step along each axis. Vertex
    /// positions and normals are expressed in these units.
    pub spacing: Option<[f64; 3]>,
    /// Lattice stride; a value of `n` samples every n-th point along
    /// each axis. Must be at least 1.
    pub step_size: usize,
    /// Triangulation scheme.
    pub method: ExtractionMethod,
    /// Orientation convention for faces and normals.
    pub gradient_direction: GradientDirection,
    /// Keep zero-area triangles produced when samples sit exactly on
    /// the level. Disabling welds coincident vertices and drops the
    /// collapsed faces.
    pub allow_degenerate: bool,
    /// Return only the largest connected component of the surface.
    pub single_mesh: bool,
    /// Per-sample inclusion mask, same shape as the volume. A cell is
    /// triangulated only if all eight of its corners are included.
    pub mask: Option<Vec<bool>>,
}

impl Default for IsosurfaceConfig {
    fn default() -> Self {
        Self {
            level: None,
            spacing: None,
            step_size: 1,
            method: ExtractionMethod::default(),
            gradient_direction: GradientDirection::default(),
            allow_degenerate: true,
            single_mesh: false,
            mask: None,
        }
    }
}

impl IsosurfaceConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the contour level.
    #[must_use]
    pub fn with_level(mut self, level: f64) -> Self {
        self.level = Some(level);
        self
    }

    /// Set the per-axis lattice spacing.
    #[must_use]
    pub fn with_spacing(mut self, spacing: [f64; 3]) -> Self {
        self.spacing = Some(spacing);
        self
    }

    /// Set the lattice stride.
    #[must_use]
    pub fn with_step_size(mut self, step_size: usize) -> Self {
        self.step_size = step_size;
        self
    }

    /// Set the triangulation scheme.
    #[must_use]
    pub fn with_method(mut self, method: ExtractionMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the orientation convention.
    #[must_use]
    pub fn with_gradient_direction(mut self, direction: GradientDirection) -> Self {
        self.gradient_direction = direction;
        self
    }

    /// Set whether degenerate triangles are kept.
    #[must_use]
    pub fn with_allow_degenerate(mut self, allow: bool) -> Self {
        self.allow_degenerate = allow;
        self
    }

    /// Set whether only the largest connected component is returned.
    #[must_use]
    pub fn with_single_mesh(mut self, single: bool) -> Self {
        self.single_mesh = single;
        self
    }

    /// Set the per-sample inclusion mask.
    #[must_use]
    pub fn with_mask(mut self, mask: Vec<bool>) -> Self {
        self.mask = Some(mask);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_new() {
        let d = IsosurfaceConfig::default();
        assert_eq!(d.step_size, IsosurfaceConfig::new().step_size);
        assert!(d.level.is_none());
        assert_eq!(d.method, ExtractionMethod::Lewiner);
        assert_eq!(d.gradient_direction, GradientDirection::Descent);
    }

    #[test]
    fn builders_chain() {
        let config = IsosurfaceConfig::new()
            .with_level(1.5)
            .with_step_size(2)
            .with_method(ExtractionMethod::Classic)
            .with_single_mesh(true);
        assert_eq!(config.level, Some(1.5));
        assert_eq!(config.step_size, 2);
        assert_eq!(config.method, ExtractionMethod::Classic);
        assert!(config.single_mesh);
    }
}
