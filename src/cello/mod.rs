//! Group orchestration: from raw observations to per-group cello results.
//!
//! A [`Cello`] holds the plot configuration. [`Cello::plot`] resolves
//! bandwidths, colors and positions once, then runs one density estimate and
//! one color blend per group. Groups never share state, so with the
//! `parallel` feature they are computed concurrently; the output keeps the
//! input order either way.

mod builder;
mod input;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use builder::CelloBuilder;
pub use input::{Position, Values};

use crate::color::{ColorBlender, ColorField, ColorSpec};
use crate::error::{Error, Result};
use crate::grid::min_max;
use crate::kde::{Bandwidth, DensityEstimator};
use crate::result::{GroupResult, PlotResult};
use crate::types::{Orientation, Side};

/// Configuration of a cello plot.
///
/// # Examples
///
/// ```
/// use cello::prelude::*;
///
/// let cello = Cello::builder()
///     .bandwidth(1.0)
///     .color(Rgba::rgb(0.2, 0.4, 0.8))
///     .build()
///     .unwrap();
///
/// let result = cello
///     .plot(vec![vec![0.0, 0.5, 1.0], vec![2.0, 2.5, 4.0]])
///     .unwrap();
///
/// assert_eq!(result.len(), 2);
/// assert_eq!(result.groups()[1].position(), 2.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cello {
    pub(crate) bandwidth: Bandwidth,
    pub(crate) color_bandwidth: Option<Bandwidth>,
    pub(crate) scale: f64,
    pub(crate) points: usize,
    pub(crate) side: Side,
    pub(crate) orientation: Orientation,
    pub(crate) color: ColorSpec,
    pub(crate) position: Position,
}

/// One group's resolved inputs, ready to be computed independently.
struct GroupJob {
    index: usize,
    sample: Vec<f64>,
    colors: Option<ColorField>,
    position: f64,
    bandwidth: f64,
    color_bandwidth: f64,
}

impl Cello {
    /// Creates a cello configuration with default settings.
    ///
    /// See [`CelloBuilder`] for the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bandwidth: Bandwidth::default(),
            color_bandwidth: None,
            scale: 10.0,
            points: 100,
            side: Side::Both,
            orientation: Orientation::Vertical,
            color: ColorSpec::None,
            position: Position::Auto,
        }
    }

    #[must_use]
    pub fn builder() -> CelloBuilder {
        CelloBuilder::new()
    }

    #[must_use]
    pub fn bandwidth(&self) -> &Bandwidth {
        &self.bandwidth
    }

    /// The separate color bandwidth, `None` when it follows the density bandwidth.
    #[must_use]
    pub fn color_bandwidth(&self) -> Option<&Bandwidth> {
        self.color_bandwidth.as_ref()
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn points(&self) -> usize {
        self.points
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
    pub fn color(&self) -> &ColorSpec {
        &self.color
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Computes one cello per group.
    ///
    /// Everything that can fail is checked before the first grid is built.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyInput` if grouped input holds no groups.
    /// Returns `Error::NonFiniteValue` if any observation is NaN or infinite.
    /// Returns `Error::InvalidBandwidth` or `Error::BandwidthCountMismatch` if
    /// a bandwidth cannot be resolved.
    /// Returns `Error::ColorLengthMismatch` if the colors do not fit the groups.
    /// Returns `Error::PositionCountMismatch` if explicit positions do not fit the groups.
    pub fn plot(&self, values: impl Into<Values>) -> Result<PlotResult> {
        let values = values.into();
        let single = values.is_single();
        let groups = values.into_groups();

        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!(
            "cello_plot",
            n_groups = groups.len(),
            points = self.points,
            side = ?self.side
        )
        .entered();

        let jobs = self.resolve(groups, single)?;

        #[cfg(feature = "parallel")]
        let results = jobs
            .into_par_iter()
            .map(|job| self.compute(job))
            .collect::<Result<Vec<_>>>()?;

        #[cfg(not(feature = "parallel"))]
        let results = jobs
            .into_iter()
            .map(|job| self.compute(job))
            .collect::<Result<Vec<_>>>()?;

        trace_info!(n_groups = results.len(), "cello plot computed");

        if single {
            results
                .into_iter()
                .next()
                .map(PlotResult::Single)
                .ok_or(Error::EmptyInput)
        } else {
            Ok(PlotResult::Groups(results))
        }
    }

    /// Validates the input and resolves per-group bandwidths, colors and positions.
    fn resolve(&self, groups: Vec<Vec<f64>>, single: bool) -> Result<Vec<GroupJob>> {
        if groups.is_empty() {
            return Err(Error::EmptyInput);
        }
        for (group, sample) in groups.iter().enumerate() {
            if let Some(index) = sample.iter().position(|v| !v.is_finite()) {
                return Err(Error::NonFiniteValue { group, index });
            }
        }

        let bandwidths = self.bandwidth.resolve(&groups)?;
        let color_bandwidths = match &self.color_bandwidth {
            Some(cbw) => cbw.resolve(&groups)?,
            None => bandwidths.clone(),
        };
        let colors = self.color.resolve(&groups)?;
        let positions = self.position.resolve(groups.len(), single)?;

        Ok(groups
            .into_iter()
            .zip(colors)
            .zip(positions)
            .zip(bandwidths.into_iter().zip(color_bandwidths))
            .enumerate()
            .map(
                |(index, (((sample, colors), position), (bandwidth, color_bandwidth)))| GroupJob {
                    index,
                    sample,
                    colors,
                    position,
                    bandwidth,
                    color_bandwidth,
                },
            )
            .collect())
    }

    fn compute(&self, job: GroupJob) -> Result<GroupResult> {
        let estimate = DensityEstimator::new(job.bandwidth)?.estimate(&job.sample, self.points)?;

        let colors = match &job.colors {
            Some(field) => Some(
                ColorBlender::new(job.color_bandwidth)?.blend(&job.sample, field, &estimate.grid)?,
            ),
            None => None,
        };

        trace_debug!(
            group = job.index,
            n = job.sample.len(),
            position = job.position,
            bandwidth = job.bandwidth,
            "group computed"
        );

        Ok(GroupResult {
            index: job.index,
            grid: estimate.grid,
            density: estimate.density,
            colors,
            position: job.position,
            side: self.side,
            orientation: self.orientation,
            scale: self.scale,
            bandwidth: job.bandwidth,
            color_bandwidth: job.color_bandwidth,
            data_range: min_max(&job.sample),
        })
    }
}

impl Default for Cello {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes one cello per group from explicit arguments.
///
/// `cbw` falls back to `bw` when `None`. Equivalent to configuring a [`Cello`]
/// with the same values and calling [`Cello::plot`], but always returns the
/// results as a sequence.
///
/// # Errors
///
/// Returns every error of [`CelloBuilder::build`] and [`Cello::plot`].
#[allow(clippy::too_many_arguments)]
pub fn plot_groups(
    values: impl Into<Values>,
    color: impl Into<ColorSpec>,
    positions: impl Into<Position>,
    bw: impl Into<Bandwidth>,
    cbw: Option<Bandwidth>,
    scale: f64,
    points: usize,
    side: Side,
) -> Result<Vec<GroupResult>> {
    let mut builder = Cello::builder()
        .color(color)
        .position(positions)
        .bandwidth(bw)
        .scale(scale)
        .points(points)
        .side(side);
    if let Some(cbw) = cbw {
        builder = builder.color_bandwidth(cbw);
    }
    Ok(builder.build()?.plot(values)?.into_groups())
}
