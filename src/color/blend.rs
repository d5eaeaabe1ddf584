//! Kernel-weighted color blending along a density grid.
//!
//! Every grid coordinate receives the kernel-weighted mean of the observation
//! colors, channel by channel. The kernel is the one used for the density, but
//! with its own bandwidth so color transitions can be sharper or softer than
//! the shape.
//!
//! Far from every observation all raw weights underflow and the mean turns
//! into `0 / 0`. To avoid that, weights are taken relative to the nearest
//! observation: `w_i = exp(-(u_i² - min_j u_j²))`. The ratio is unchanged, the
//! nearest observation always weighs `1`, and the blend slides continuously
//! into the nearest observation's color far outside the data.

use super::ColorField;
use super::rgba::Rgba;
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::kde::validate_bandwidth;

/// Blends observation colors on a grid with a fixed color bandwidth.
///
/// # Examples
///
/// ```
/// use cello::color::{ColorBlender, ColorField, Rgba};
/// use cello::grid::Grid;
///
/// let grid = Grid::linspace(-3.0, 5.0, 101).unwrap();
/// let field = ColorField::PerSample(vec![Rgba::rgb(1.0, 0.0, 0.0), Rgba::rgb(0.0, 0.0, 1.0)]);
/// let colors = ColorBlender::new(1.0).unwrap().blend(&[0.0, 2.0], &field, &grid).unwrap();
///
/// // Halfway between the observations both colors weigh the same.
/// assert_eq!(colors[50], Rgba::rgb(0.5, 0.0, 0.5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorBlender {
    bandwidth: f64,
}

impl ColorBlender {
    /// Creates a blender with the given color bandwidth.
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

    /// Blends `field` over `grid`, returning one color per grid coordinate.
    ///
    /// The grid must be the one the group's density was evaluated on; it is
    /// never regenerated here. A uniform field is broadcast unchanged. An
    /// empty sample with per-observation colors has nothing to blend and
    /// yields [`Rgba::TRANSPARENT`] everywhere.
    ///
    /// # Errors
    ///
    /// Returns `Error::ColorLengthMismatch` if a per-observation field does not
    /// have one color per observation.
    pub fn blend(&self, sample: &[f64], field: &ColorField, grid: &Grid) -> Result<Vec<Rgba>> {
        let colors = match field {
            ColorField::Uniform(color) => return Ok(vec![*color; grid.points()]),
            ColorField::PerSample(colors) => colors,
        };

        if colors.len() != sample.len() {
            return Err(Error::ColorLengthMismatch {
                expected: sample.len(),
                got: colors.len(),
                group: 0,
            });
        }
        if sample.is_empty() {
            return Ok(vec![Rgba::TRANSPARENT; grid.points()]);
        }

        let inv_bandwidth = 1.0 / self.bandwidth;
        let mut sq = vec![0.0; sample.len()];

        let blended: Vec<Rgba> = grid
            .iter()
            .map(|g| {
                for (s, &xi) in sq.iter_mut().zip(sample) {
                    let u = (g - xi) * inv_bandwidth;
                    *s = u * u;
                }
                let nearest = sq.iter().copied().fold(f64::INFINITY, f64::min);

                let mut total = 0.0;
                let mut acc = [0.0; 4];
                for (&s, color) in sq.iter().zip(colors) {
                    let w = (nearest - s).exp();
                    total += w;
                    for (a, c) in acc.iter_mut().zip(color.channels()) {
                        *a += w * c;
                    }
                }

                Rgba::from_channels(acc.map(|a| a / total)).clamp()
            })
            .collect();

        trace_debug!(
            n = sample.len(),
            points = grid.points(),
            bandwidth = self.bandwidth,
            "colors blended"
        );

        Ok(blended)
    }
}

/// Blends `field` over `grid` with the given color bandwidth.
///
/// Shorthand for [`ColorBlender::new`] followed by [`ColorBlender::blend`].
///
/// # Errors
///
/// Returns `Error::InvalidBandwidth` if `bandwidth` is not positive and finite.
/// Returns `Error::ColorLengthMismatch` if the field does not match the sample.
pub fn blend(sample: &[f64], field: &ColorField, grid: &Grid, bandwidth: f64) -> Result<Vec<Rgba>> {
    ColorBlender::new(bandwidth)?.blend(sample, field, grid)
}
