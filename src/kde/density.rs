//! Total-weight kernel density estimation on a padded grid.
//!
//! Unlike a conventional KDE, whose curve integrates to one, the curve
//! produced here integrates to the number of observations. Cellos drawn from
//! samples of different sizes therefore keep comparable absolute widths once a
//! shared scale factor is applied.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::kernel::gaussian;
use crate::error::{Error, Result};
use crate::grid::Grid;

/// A kernel density estimator with a fixed bandwidth.
///
/// # Examples
///
/// ```
/// use cello::kde::DensityEstimator;
///
/// let estimator = DensityEstimator::new(1.0).unwrap();
/// let estimate = estimator.estimate(&[0.0, 0.0, 10.0], 50).unwrap();
///
/// // The curve integrates to the sample count, not to one.
/// assert!((estimate.integral() - 3.0).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DensityEstimator {
    bandwidth: f64,
}

impl DensityEstimator {
    /// Creates an estimator with the given kernel bandwidth.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidBandwidth` if `bandwidth` is not positive and finite.
    pub fn new(bandwidth: f64) -> Result<Self> {
        validate_bandwidth(bandwidth)?;
        Ok(Self { bandwidth })
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Estimates the density of `sample` on a grid of `points` coordinates.
    ///
    /// For each grid coordinate `g` the raw curve is `Σ_i K((g - x_i) / h)`.
    /// The raw curve is then rescaled so that `Σ density · spacing` equals the
    /// sample count. An empty sample yields an all-zero curve on `[-0.5, 0.5]`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPoints` if `points < 2`.
    pub fn estimate(&self, sample: &[f64], points: usize) -> Result<DensityEstimate> {
        let grid = Grid::for_sample(sample, self.bandwidth, points)?;
        let density = self.evaluate(sample, &grid);
        Ok(DensityEstimate { grid, density })
    }

    /// Evaluates the total-weight normalized density of `sample` on `grid`.
    #[allow(clippy::cast_precision_loss)]
    pub fn evaluate(&self, sample: &[f64], grid: &Grid) -> Vec<f64> {
        let inv_bandwidth = 1.0 / self.bandwidth;
        let mut density: Vec<f64> = grid
            .iter()
            .map(|g| {
                sample
                    .iter()
                    .map(|&xi| gaussian((g - xi) * inv_bandwidth))
                    .sum()
            })
            .collect();

        let mass = density.iter().sum::<f64>() * grid.spacing();
        if mass > 0.0 {
            let factor = sample.len() as f64 / mass;
            for d in &mut density {
                *d *= factor;
            }
        }

        trace_debug!(
            n = sample.len(),
            points = grid.points(),
            bandwidth = self.bandwidth,
            "density evaluated"
        );

        density
    }
}

/// Estimates the density of `sample` with `bandwidth` on `points` grid coordinates.
///
/// Shorthand for [`DensityEstimator::new`] followed by [`DensityEstimator::estimate`].
///
/// # Errors
///
/// Returns `Error::InvalidBandwidth` if `bandwidth` is not positive and finite.
/// Returns `Error::InvalidPoints` if `points < 2`.
pub fn estimate(sample: &[f64], bandwidth: f64, points: usize) -> Result<DensityEstimate> {
    DensityEstimator::new(bandwidth)?.estimate(sample, points)
}

/// A density curve together with the grid it was evaluated on.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DensityEstimate {
    /// The evaluation coordinates.
    pub grid: Grid,
    /// Non-negative density, one value per grid coordinate.
    pub density: Vec<f64>,
}

impl DensityEstimate {
    /// Rectangle-rule integral of the curve: `Σ density · spacing`.
    #[must_use]
    pub fn integral(&self) -> f64 {
        self.density.iter().sum::<f64>() * self.grid.spacing()
    }

    /// Grid coordinate and value of the highest density, `None` for a flat zero curve.
    #[must_use]
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.grid
            .iter()
            .zip(self.density.iter().copied())
            .filter(|&(_, d)| d > 0.0)
            .fold(None, |best, (g, d)| match best {
                Some((_, bd)) if bd >= d => best,
                _ => Some((g, d)),
            })
    }
}

pub(crate) fn validate_bandwidth(bandwidth: f64) -> Result<()> {
    if bandwidth > 0.0 && bandwidth.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidBandwidth(bandwidth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_maxima(density: &[f64]) -> Vec<usize> {
        density
            .windows(3)
            .enumerate()
            .filter(|(_, w)| w[1] > w[0] && w[1] >= w[2])
            .map(|(i, _)| i + 1)
            .collect()
    }

    #[test]
    fn test_density_non_negative() {
        let sample = vec![-4.0, -1.5, 0.0, 0.2, 3.3, 9.0];
        for &bw in &[0.05, 0.5, 2.0, 10.0] {
            let est = estimate(&sample, bw, 80).unwrap();
            assert_eq!(est.density.len(), 80);
            assert!(est.density.iter().all(|&d| d >= 0.0));
        }
    }

    #[test]
    fn test_density_integrates_to_sample_count() {
        let sample = vec![0.0, 1.0, 1.5, 2.0, 4.0, 4.1, 7.0];
        for &bw in &[0.3, 0.5, 1.0, 3.0] {
            for &points in &[50, 100, 400] {
                let est = estimate(&sample, bw, points).unwrap();
                let integral = est.integral();
                assert!(
                    (integral - 7.0).abs() < 1e-9,
                    "integral = {integral} for bw = {bw}, points = {points}"
                );
            }
        }
    }

    #[test]
    fn test_empty_sample_is_flat_zero() {
        let est = estimate(&[], 0.5, 100).unwrap();
        assert_eq!(est.density.len(), 100);
        assert!(est.density.iter().all(|&d| d == 0.0));
        assert!((est.grid.start() - -0.5).abs() < f64::EPSILON);
        assert!((est.grid.end() - 0.5).abs() < f64::EPSILON);
        assert_eq!(est.peak(), None);
    }

    #[test]
    fn test_single_sample_peaks_at_value() {
        let est = estimate(&[2.5], 1.0, 101).unwrap();
        let (at, _) = est.peak().unwrap();
        assert!((at - 2.5).abs() < 1e-12);
        assert!((est.integral() - 1.0).abs() < 1e-9);

        // Symmetric around the single observation.
        let n = est.density.len();
        for i in 0..n / 2 {
            assert!((est.density[i] - est.density[n - 1 - i]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_bimodal_sample_keeps_two_peaks() {
        let est = estimate(&[0.0, 0.0, 0.0, 10.0, 10.0, 10.0], 1.0, 50).unwrap();
        let maxima = local_maxima(&est.density);
        assert_eq!(maxima.len(), 2, "maxima at {maxima:?}");

        let grid = est.grid.as_slice();
        let (left, right) = (maxima[0], maxima[1]);
        assert!(grid[left].abs() < 0.5);
        assert!((grid[right] - 10.0).abs() < 0.5);

        let trough = est.density[left..=right]
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        let peak = est.density[left].min(est.density[right]);
        assert!(trough < 0.1 * peak, "trough {trough} vs peak {peak}");
    }

    #[test]
    fn test_wider_bandwidth_flattens_peak() {
        let sample = vec![0.0, 0.1, -0.1, 0.05];
        let narrow = estimate(&sample, 0.2, 200).unwrap().peak().unwrap().1;
        let wide = estimate(&sample, 2.0, 200).unwrap().peak().unwrap().1;
        assert!(narrow > wide);
    }

    #[test]
    fn test_zero_bandwidth() {
        assert!(matches!(
            DensityEstimator::new(0.0),
            Err(Error::InvalidBandwidth(_))
        ));
    }

    #[test]
    fn test_negative_bandwidth() {
        assert!(matches!(
            estimate(&[1.0, 2.0], -1.0, 50),
            Err(Error::InvalidBandwidth(_))
        ));
    }

    #[test]
    fn test_non_finite_bandwidth() {
        assert!(matches!(
            DensityEstimator::new(f64::NAN),
            Err(Error::InvalidBandwidth(_))
        ));
        assert!(matches!(
            DensityEstimator::new(f64::INFINITY),
            Err(Error::InvalidBandwidth(_))
        ));
    }

    #[test]
    fn test_too_few_points() {
        assert!(matches!(
            estimate(&[1.0], 1.0, 1),
            Err(Error::InvalidPoints(1))
        ));
    }
}
