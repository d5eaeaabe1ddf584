//! Evenly spaced evaluation grids shared by density and color estimation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::kde::PAD_BANDWIDTHS;

/// An ordered, evenly spaced sequence of evaluation coordinates.
///
/// The density curve and the blended colors of a group are both evaluated on
/// the same `Grid`, so their arrays line up index-for-index.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    coords: Vec<f64>,
}

impl Grid {
    /// Creates `points` evenly spaced coordinates from `start` to `end`, inclusive.
    ///
    /// Coordinate `i` is `start + (end - start) * i / (points - 1)`, which keeps
    /// the midpoint of an odd-length grid exact.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPoints` if `points < 2`.
    #[allow(clippy::cast_precision_loss)]
    pub fn linspace(start: f64, end: f64, points: usize) -> Result<Self> {
        if points < 2 {
            return Err(Error::InvalidPoints(points));
        }

        let last = (points - 1) as f64;
        let span = end - start;
        let coords = (0..points)
            .map(|i| {
                if i == points - 1 {
                    end
                } else {
                    start + span * i as f64 / last
                }
            })
            .collect();

        Ok(Self { coords })
    }

    /// Creates the grid a sample is evaluated on.
    ///
    /// The grid spans `[min - 3·bandwidth, max + 3·bandwidth]` so the kernel has
    /// decayed close to zero at both ends. An empty sample gets the unit
    /// interval centred on zero.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPoints` if `points < 2`.
    pub fn for_sample(sample: &[f64], bandwidth: f64, points: usize) -> Result<Self> {
        match min_max(sample) {
            Some((lo, hi)) => {
                let pad = PAD_BANDWIDTHS * bandwidth;
                Self::linspace(lo - pad, hi + pad, points)
            }
            None => Self::linspace(-0.5, 0.5, points),
        }
    }

    /// Number of coordinates.
    #[must_use]
    pub fn points(&self) -> usize {
        self.coords.len()
    }

    /// Distance between consecutive coordinates.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn spacing(&self) -> f64 {
        (self.end() - self.start()) / (self.coords.len() - 1) as f64
    }

    /// First coordinate.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.coords[0]
    }

    /// Last coordinate.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.coords[self.coords.len() - 1]
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.coords
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.coords.iter().copied()
    }
}

impl AsRef<[f64]> for Grid {
    fn as_ref(&self) -> &[f64] {
        &self.coords
    }
}

/// Smallest and largest value of a sample, `None` when it is empty.
pub(crate) fn min_max(sample: &[f64]) -> Option<(f64, f64)> {
    let (&first, rest) = sample.split_first()?;
    Some(
        rest.iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}
