//! Per-group results and the envelope geometry derived from them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::grid::Grid;
use crate::types::{Orientation, Side};

/// Everything a renderer needs to draw one cello.
///
/// Built once per group by [`Cello::plot`](crate::Cello::plot) and never
/// modified afterwards. The density is stored unscaled; [`half_widths`]
/// applies the plot's `scale` when converting it to spatial offsets.
///
/// [`half_widths`]: GroupResult::half_widths
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroupResult {
    pub(crate) index: usize,
    pub(crate) grid: Grid,
    pub(crate) density: Vec<f64>,
    pub(crate) colors: Option<Vec<Rgba>>,
    pub(crate) position: f64,
    pub(crate) side: Side,
    pub(crate) orientation: Orientation,
    pub(crate) scale: f64,
    pub(crate) bandwidth: f64,
    pub(crate) color_bandwidth: f64,
    pub(crate) data_range: Option<(f64, f64)>,
}

impl GroupResult {
    /// Index of the group in the caller's input.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Total-weight normalized density, one value per grid coordinate.
    #[must_use]
    pub fn density(&self) -> &[f64] {
        &self.density
    }

    /// Blended colors, one per grid coordinate, or `None` when no color was given.
    #[must_use]
    pub fn colors(&self) -> Option<&[Rgba]> {
        self.colors.as_deref()
    }

    /// Baseline position on the non-value axis.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Bandwidth the density was estimated with.
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Bandwidth the colors were blended with.
    #[must_use]
    pub fn color_bandwidth(&self) -> f64 {
        self.color_bandwidth
    }

    /// Smallest and largest observation, `None` for an empty group.
    #[must_use]
    pub fn data_range(&self) -> Option<(f64, f64)> {
        self.data_range
    }

    /// Density multiplied by the plot scale.
    #[must_use]
    pub fn half_widths(&self) -> Vec<f64> {
        self.density.iter().map(|d| d * self.scale).collect()
    }

    /// Offsets of the two envelope edges relative to the baseline, as `(lower, upper)`.
    ///
    /// `Both` mirrors the scaled density; `Left` and `Right` keep one half and
    /// pin the other edge at exactly zero.
    #[must_use]
    pub fn offsets(&self) -> (Vec<f64>, Vec<f64>) {
        let half = self.half_widths();
        let zeros = vec![0.0; half.len()];
        match self.side {
            Side::Both => (half.iter().map(|h| -h).collect(), half),
            Side::Left => (half.iter().map(|h| -h).collect(), zeros),
            Side::Right => (zeros, half),
        }
    }

    /// Absolute coordinates of the two envelope edges on the baseline axis.
    #[must_use]
    pub fn edges(&self) -> (Vec<f64>, Vec<f64>) {
        let (lower, upper) = self.offsets();
        let shift = |v: Vec<f64>| -> Vec<f64> {
            v.into_iter().map(|o| self.position + o).collect()
        };
        (shift(lower), shift(upper))
    }

    /// Closed outline of the envelope as plane `(x, y)` points.
    ///
    /// Walks the lower edge along the grid and returns along the upper edge,
    /// so the polygon has `2 · points` vertices.
    #[must_use]
    pub fn outline(&self) -> Vec<(f64, f64)> {
        let (lower, upper) = self.edges();
        let grid = self.grid.as_slice();

        let forward = grid.iter().zip(&lower);
        let backward = grid.iter().zip(&upper).rev();
        forward
            .chain(backward)
            .map(|(&v, &o)| self.orientation.place(v, o))
            .collect()
    }

    /// Segment along the baseline covering the whole grid.
    #[must_use]
    pub fn baseline(&self) -> [(f64, f64); 2] {
        [
            self.orientation.place(self.grid.start(), self.position),
            self.orientation.place(self.grid.end(), self.position),
        ]
    }

    /// Segment along the baseline covering the observed data, `None` for an empty group.
    #[must_use]
    pub fn data_span(&self) -> Option<[(f64, f64); 2]> {
        self.data_range.map(|(lo, hi)| {
            [
                self.orientation.place(lo, self.position),
                self.orientation.place(hi, self.position),
            ]
        })
    }
}

/// The value returned by [`Cello::plot`](crate::Cello::plot).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlotResult {
    /// Result for one-dimensional input.
    Single(GroupResult),
    /// Results for grouped input, in input order.
    Groups(Vec<GroupResult>),
}

impl PlotResult {
    /// All group results, in input order.
    #[must_use]
    pub fn groups(&self) -> &[GroupResult] {
        match self {
            Self::Single(group) => core::slice::from_ref(group),
            Self::Groups(groups) => groups,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups().is_empty()
    }

    /// The result of one-dimensional input, `None` for grouped input.
    #[must_use]
    pub fn single(&self) -> Option<&GroupResult> {
        match self {
            Self::Single(group) => Some(group),
            Self::Groups(_) => None,
        }
    }

    #[must_use]
    pub fn into_groups(self) -> Vec<GroupResult> {
        match self {
            Self::Single(group) => vec![group],
            Self::Groups(groups) => groups,
        }
    }
}
