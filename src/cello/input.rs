//! Caller-facing input shapes: observation values and baseline positions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Observations to plot: one sample, or one sample per group.
///
/// A single sample produces a [`PlotResult::Single`](crate::PlotResult::Single);
/// grouped input produces one result per group, in input order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Values {
    /// A single one-dimensional sample.
    Single(Vec<f64>),
    /// One sample per group.
    Groups(Vec<Vec<f64>>),
}

impl Values {
    /// Number of groups; a single sample counts as one.
    #[must_use]
    pub fn n_groups(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Groups(groups) => groups.len(),
        }
    }

    #[must_use]
    pub fn is_single(&self) -> bool {
        matches!(self, Self::Single(_))
    }

    pub(crate) fn into_groups(self) -> Vec<Vec<f64>> {
        match self {
            Self::Single(sample) => vec![sample],
            Self::Groups(groups) => groups,
        }
    }
}

impl From<Vec<f64>> for Values {
    fn from(sample: Vec<f64>) -> Self {
        Self::Single(sample)
    }
}

impl From<&[f64]> for Values {
    fn from(sample: &[f64]) -> Self {
        Self::Single(sample.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Values {
    fn from(sample: [f64; N]) -> Self {
        Self::Single(sample.to_vec())
    }
}

impl From<Vec<Vec<f64>>> for Values {
    fn from(groups: Vec<Vec<f64>>) -> Self {
        Self::Groups(groups)
    }
}

/// Where each group's baseline sits on the non-value axis.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Position {
    /// `0` for a single sample; `1, 2, 3, …` for groups.
    #[default]
    Auto,
    /// A single sample sits at this position; groups sit at `p, p + 1, p + 2, …`.
    At(f64),
    /// One explicit position per group.
    Explicit(Vec<f64>),
}

impl From<f64> for Position {
    fn from(position: f64) -> Self {
        Self::At(position)
    }
}

impl From<Vec<f64>> for Position {
    fn from(positions: Vec<f64>) -> Self {
        Self::Explicit(positions)
    }
}

impl Position {
    /// Resolves one baseline position per group.
    ///
    /// # Errors
    ///
    /// Returns `Error::PositionCountMismatch` if an explicit list does not have
    /// exactly `n_groups` entries.
    #[allow(clippy::cast_precision_loss)]
    pub fn resolve(&self, n_groups: usize, single: bool) -> Result<Vec<f64>> {
        match self {
            Self::Auto if single => Ok(vec![0.0]),
            Self::Auto => Ok((1..=n_groups).map(|i| i as f64).collect()),
            Self::At(p) => Ok((0..n_groups).map(|i| p + i as f64).collect()),
            Self::Explicit(positions) => {
                if positions.len() == n_groups {
                    Ok(positions.clone())
                } else {
                    Err(Error::PositionCountMismatch {
                        expected: n_groups,
                        got: positions.len(),
                    })
                }
            }
        }
    }
}
