//! Core types shared by the estimator and the orchestrator.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which half of the mirrored density envelope is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    /// Mirror the envelope around the baseline (a classic violin).
    #[default]
    Both,
    /// Draw only the half below the baseline position; the other edge is flat.
    Left,
    /// Draw only the half above the baseline position; the other edge is flat.
    Right,
}

/// How the value axis and the baseline axis map onto the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Observation values run along `y`; baseline positions along `x`.
    #[default]
    Vertical,
    /// Observation values run along `x`; baseline positions along `y`.
    Horizontal,
}

impl Orientation {
    /// Map a `(value, offset)` pair onto plane coordinates.
    #[must_use]
    pub fn place(self, value: f64, offset: f64) -> (f64, f64) {
        match self {
            Self::Vertical => (offset, value),
            Self::Horizontal => (value, offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_place_swaps_axes() {
        assert_eq!(Orientation::Vertical.place(3.0, 1.0), (1.0, 3.0));
        assert_eq!(Orientation::Horizontal.place(3.0, 1.0), (3.0, 1.0));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Side::default(), Side::Both);
        assert_eq!(Orientation::default(), Orientation::Vertical);
    }
}
