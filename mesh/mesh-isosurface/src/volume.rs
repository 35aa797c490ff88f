//! 3D scalar volume sampled on a regular lattice.

use nalgebra::Vector3;

use crate::error::{IsosurfaceError, IsosurfaceResult};

/// A 3D scalar field sampled on a regular grid.
///
/// Values are stored in row-major order with x varying fastest, then
/// y, then z: sample `(ix, iy, iz)` lives at `ix + iy*nx + iz*nx*ny`.
#[derive(Debug, Clone)]
pub struct ScalarVolume {
    /// Sample values (x varies fastest).
    values: Vec<f64>,
    /// Grid dimensions (nx, ny, nz).
    dimensions: (usize, usize, usize),
}

impl ScalarVolume {
    /// Create a volume from raw samples.
    ///
    /// # Errors
    ///
    /// Returns an error when any dimension is smaller than 2, the
    /// buffer length does not equal `nx * ny * nz`, or a sample is not
    /// finite.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_isosurface::ScalarVolume;
    ///
    /// let volume = ScalarVolume::from_values((2, 2, 2), vec![0.0; 8]).unwrap();
    /// assert_eq!(volume.dimensions(), (2, 2, 2));
    /// ```
    pub fn from_values(
        dimensions: (usize, usize, usize),
        values: Vec<f64>,
    ) -> IsosurfaceResult<Self> {
        let (nx, ny, nz) = dimensions;
        if nx < 2 || ny < 2 || nz < 2 {
            return Err(IsosurfaceError::VolumeTooSmall { nx, ny, nz });
        }
        let expected = nx * ny * nz;
        if values.len() != expected {
            return Err(IsosurfaceError::ValueCountMismatch {
                expected,
                actual: values.len(),
            });
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(IsosurfaceError::NonFiniteValue { index });
        }
        Ok(Self { values, dimensions })
    }

    /// Sample the field with a closure over lattice coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error when any dimension is smaller than 2 or the
    /// closure produces a non-finite value.
    pub fn from_fn(
        dimensions: (usize, usize, usize),
        mut f: impl FnMut(usize, usize, usize) -> f64,
    ) -> IsosurfaceResult<Self> {
        let (nx, ny, nz) = dimensions;
        let mut values = Vec::with_capacity(nx * ny * nz);
        for iz in 0..nz {
            for iy in 0..ny {
                for ix in 0..nx {
                    values.push(f(ix, iy, iz));
                }
            }
        }
        Self::from_values(dimensions, values)
    }

    /// Grid dimensions (nx, ny, nz).
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize, usize) {
        self.dimensions
    }

    /// Total number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the volume holds no samples (never true for a
    /// constructed volume).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw samples, x varying fastest.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Linear index of a lattice coordinate.
    #[inline]
    #[must_use]
    pub fn index(&self, ix: usize, iy: usize, iz: usize) -> usize {
        debug_assert!(ix < self.dimensions.0 && iy < self.dimensions.1 && iz < self.dimensions.2);
        ix + iy * self.dimensions.0 + iz * self.dimensions.0 * self.dimensions.1
    }

    /// Value at a lattice coordinate.
    #[inline]
    #[must_use]
    pub fn value(&self, ix: usize, iy: usize, iz: usize) -> f64 {
        self.values[self.index(ix, iy, iz)]
    }

    /// Smallest and largest sample value.
    #[must_use]
    pub fn min_max(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &self.values {
            min = min.min(v);
            max = max.max(v);
        }
        (min, max)
    }

    /// Negative central-difference gradient at a lattice point, with
    /// one-sided differences at the borders.
    ///
    /// Points from higher values toward lower values, so on a level
    /// set it points away from the above-level region. `step` is the
    /// lattice stride used by the extraction traversal.
    #[must_use]
    pub(crate) fn descent_direction(
        &self,
        ix: usize,
        iy: usize,
        iz: usize,
        step: usize,
    ) -> Vector3<f64> {
        let (nx, ny, nz) = self.dimensions;
        let diff = |lo: f64, hi: f64, centered: bool| {
            if centered {
                (lo - hi) / 2.0
            } else {
                lo - hi
            }
        };
        let gx = {
            let lo = if ix >= step { ix - step } else { ix };
            let hi = if ix + step < nx { ix + step } else { ix };
            diff(
                self.value(lo, iy, iz),
                self.value(hi, iy, iz),
                lo != ix && hi != ix,
            )
        };
        let gy = {
            let lo = if iy >= step { iy - step } else { iy };
            let hi = if iy + step < ny { iy + step } else { iy };
            diff(
                self.value(ix, lo, iz),
                self.value(ix, hi, iz),
                lo != iy && hi != iy,
            )
        };
        let gz = {
            let lo = if iz >= step { iz - step } else { iz };
            let hi = if iz + step < nz { iz + step } else { iz };
            diff(
                self.value(ix, iy, lo),
                self.value(ix, iy, hi),
                lo != iz && hi != iz,
            )
        };
        Vector3::new(gx, gy, gz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn from_values_validates_dimensions() {
        assert!(matches!(
            ScalarVolume::from_values((1, 2, 2), vec![0.0; 4]),
            Err(IsosurfaceError::VolumeTooSmall { .. })
        ));
        assert!(matches!(
            ScalarVolume::from_values((2, 2, 2), vec![0.0; 7]),
            Err(IsosurfaceError::ValueCountMismatch { expected: 8, actual: 7 })
        ));
    }

    #[test]
    fn from_values_rejects_non_finite_samples() {
        let mut values = vec![0.0; 8];
        values[3] = f64::NAN;
        assert!(matches!(
            ScalarVolume::from_values((2, 2, 2), values),
            Err(IsosurfaceError::NonFiniteValue { index: 3 })
        ));
    }

    #[test]
    fn indexing_is_x_fastest() {
        let volume = ScalarVolume::from_fn((3, 4, 5), |ix, iy, iz| {
            (ix + 10 * iy + 100 * iz) as f64
        })
        .unwrap();
        assert_relative_eq!(volume.value(2, 3, 4), 432.0);
        assert_eq!(volume.index(1, 2, 3), 1 + 2 * 3 + 3 * 12);
    }

    #[test]
    fn min_max_scans_all_samples() {
        let volume =
            ScalarVolume::from_values((2, 2, 2), vec![3.0, -1.0, 2.0, 0.5, 7.0, 0.0, -4.0, 1.0])
                .unwrap();
        assert_eq!(volume.min_max(), (-4.0, 7.0));
    }

    #[test]
    fn descent_direction_points_down_gradient() {
        // f = x: gradient +x, descent direction -x
        let volume = ScalarVolume::from_fn((4, 4, 4), |ix, _, _| ix as f64).unwrap();
        let d = volume.descent_direction(1, 1, 1, 1);
        assert_relative_eq!(d.x, -1.0);
        assert_relative_eq!(d.y, 0.0);
        assert_relative_eq!(d.z, 0.0);
        // one-sided at the border
        let d = volume.descent_direction(0, 1, 1, 1);
        assert_relative_eq!(d.x, -1.0);
    }
}
