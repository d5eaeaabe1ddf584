//! Bandwidth selection for density and color smoothing.
//!
//! A [`Bandwidth`] describes how each group's kernel width is chosen: a fixed
//! value, a rule applied per group or to all groups pooled, or an explicit
//! value per group.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::density::validate_bandwidth;
use crate::error::{Error, Result};

/// Bandwidth used when the rule cannot be applied to a degenerate sample.
const FALLBACK_BANDWIDTH: f64 = 1.0;

/// Ratio between the interquartile range and the standard deviation of a normal distribution.
const IQR_TO_STD: f64 = 1.349;

/// A rule of thumb that derives a bandwidth from the sample itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BandwidthRule {
    /// Scott's rule: `h = σ · n^(-1/5)`.
    #[default]
    Scott,
    /// Silverman's rule: `h = (3n/4)^(-1/5) · min(σ, IQR / 1.349)`.
    Silverman,
}

impl BandwidthRule {
    /// Applies the rule to a sample.
    ///
    /// Empty samples and samples without spread have no meaningful width, so
    /// they fall back to a bandwidth of `1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn apply(self, sample: &[f64]) -> f64 {
        if sample.is_empty() {
            return FALLBACK_BANDWIDTH;
        }

        let n = sample.len() as f64;
        let std_dev = std_dev(sample);

        let h = match self {
            Self::Scott => std_dev * n.powf(-0.2),
            Self::Silverman => {
                let iqr = (percentile(sample, 75.0) - percentile(sample, 25.0)) / IQR_TO_STD;
                let spread = if iqr > 0.0 { std_dev.min(iqr) } else { std_dev };
                (n * 3.0 / 4.0).powf(-0.2) * spread
            }
        };

        if h < f64::EPSILON {
            FALLBACK_BANDWIDTH
        } else {
            h
        }
    }
}

/// How the bandwidth of every group is chosen.
///
/// # Examples
///
/// ```
/// use cello::kde::{Bandwidth, BandwidthRule};
///
/// let groups = vec![vec![0.0, 1.0, 2.0], vec![10.0, 20.0, 30.0]];
///
/// let fixed = Bandwidth::Fixed(0.5).resolve(&groups).unwrap();
/// assert_eq!(fixed, vec![0.5, 0.5]);
///
/// let local = Bandwidth::Local(BandwidthRule::Scott).resolve(&groups).unwrap();
/// assert!(local[1] > local[0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Bandwidth {
    /// The same bandwidth for every group.
    Fixed(f64),
    /// A rule applied to each group separately.
    Local(BandwidthRule),
    /// A rule applied once to all groups pooled; every group shares the result.
    Global(BandwidthRule),
    /// One explicit bandwidth per group.
    PerGroup(Vec<f64>),
}

impl Default for Bandwidth {
    fn default() -> Self {
        Self::Fixed(0.5)
    }
}

impl From<f64> for Bandwidth {
    fn from(value: f64) -> Self {
        Self::Fixed(value)
    }
}

impl From<BandwidthRule> for Bandwidth {
    fn from(rule: BandwidthRule) -> Self {
        Self::Local(rule)
    }
}

impl Bandwidth {
    /// Resolves one bandwidth per group.
    ///
    /// # Errors
    ///
    /// Returns `Error::BandwidthCountMismatch` if a `PerGroup` list has the wrong length.
    /// Returns `Error::InvalidBandwidth` if any resolved bandwidth is not positive and finite.
    pub fn resolve<S: AsRef<[f64]>>(&self, groups: &[S]) -> Result<Vec<f64>> {
        let resolved = match self {
            Self::Fixed(h) => vec![*h; groups.len()],
            Self::Local(rule) => groups.iter().map(|g| rule.apply(g.as_ref())).collect(),
            Self::Global(rule) => {
                let pooled: Vec<f64> = groups
                    .iter()
                    .flat_map(|g| g.as_ref().iter().copied())
                    .collect();
                vec![rule.apply(&pooled); groups.len()]
            }
            Self::PerGroup(values) => {
                if values.len() != groups.len() {
                    return Err(Error::BandwidthCountMismatch {
                        expected: groups.len(),
                        got: values.len(),
                    });
                }
                values.clone()
            }
        };

        for &h in &resolved {
            validate_bandwidth(h)?;
        }
        Ok(resolved)
    }

    /// Validates the parts of the selection that do not depend on the data.
    pub(crate) fn validate(&self) -> Result<()> {
        match self {
            Self::Fixed(h) => validate_bandwidth(*h),
            Self::PerGroup(values) => values.iter().try_for_each(|&h| validate_bandwidth(h)),
            Self::Local(_) | Self::Global(_) => Ok(()),
        }
    }
}

/// Population standard deviation.
#[allow(clippy::cast_precision_loss)]
fn std_dev(sample: &[f64]) -> f64 {
    let n = sample.len() as f64;
    let mean = sample.iter().sum::<f64>() / n;
    let variance = sample.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

/// Percentile `q` (0-100) with linear interpolation between order statistics.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn percentile(sample: &[f64], q: f64) -> f64 {
    let mut sorted = sample.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = q / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let frac = rank - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * frac
}
