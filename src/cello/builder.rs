use crate::color::ColorSpec;
use crate::error::{Error, Result};
use crate::kde::Bandwidth;
use crate::types::{Orientation, Side};

use super::{Cello, Position};

/// A builder for constructing [`Cello`] configurations with a fluent API.
///
/// Created via [`Cello::builder()`]. Values are validated in [`build`](Self::build).
///
/// # Defaults
///
/// - Bandwidth: [`Bandwidth::Fixed(0.5)`](Bandwidth::Fixed)
/// - Color bandwidth: same as the bandwidth
/// - Scale: `10.0`
/// - Points: `100`
/// - Side: [`Both`](Side::Both)
/// - Orientation: [`Vertical`](Orientation::Vertical)
/// - Color: [`ColorSpec::None`]
/// - Position: [`Position::Auto`]
///
/// # Examples
///
/// ```
/// use cello::prelude::*;
///
/// let cello = Cello::builder()
///     .bandwidth(0.8)
///     .color_bandwidth(0.2)
///     .scale(4.0)
///     .points(64)
///     .side(Side::Right)
///     .horizontal(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(cello.points(), 64);
/// assert_eq!(cello.orientation(), Orientation::Horizontal);
/// ```
#[derive(Clone, Debug)]
pub struct CelloBuilder {
    bandwidth: Bandwidth,
    color_bandwidth: Option<Bandwidth>,
    scale: f64,
    points: usize,
    side: Side,
    orientation: Orientation,
    color: ColorSpec,
    position: Position,
}

impl CelloBuilder {
    /// Creates a new builder with default settings.
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

    /// Sets how the density bandwidth of each group is chosen.
    ///
    /// Accepts a plain `f64`, a [`BandwidthRule`](crate::kde::BandwidthRule)
    /// applied per group, or any [`Bandwidth`].
    #[must_use]
    pub fn bandwidth(mut self, bandwidth: impl Into<Bandwidth>) -> Self {
        self.bandwidth = bandwidth.into();
        self
    }

    /// Sets the color bandwidth independently of the density bandwidth.
    ///
    /// A smaller color bandwidth gives sharper color transitions without
    /// changing the shape.
    #[must_use]
    pub fn color_bandwidth(mut self, bandwidth: impl Into<Bandwidth>) -> Self {
        self.color_bandwidth = Some(bandwidth.into());
        self
    }

    /// Sets the factor converting density into spatial width.
    #[must_use]
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the number of grid coordinates per group.
    #[must_use]
    pub fn points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    #[must_use]
    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Lays the value axis along `x` when `true`, along `y` otherwise.
    #[must_use]
    pub fn horizontal(mut self, horizontal: bool) -> Self {
        self.orientation = if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.color = color.into();
        self
    }

    #[must_use]
    pub fn position(mut self, position: impl Into<Position>) -> Self {
        self.position = position.into();
        self
    }

    /// Builds the configured [`Cello`].
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidBandwidth` if a fixed or per-group bandwidth is not positive.
    /// Returns `Error::InvalidScale` if `scale` is not finite.
    /// Returns `Error::InvalidPoints` if `points < 2`.
    pub fn build(self) -> Result<Cello> {
        self.bandwidth.validate()?;
        if let Some(cbw) = &self.color_bandwidth {
            cbw.validate()?;
        }
        if !self.scale.is_finite() {
            return Err(Error::InvalidScale(self.scale));
        }
        if self.points < 2 {
            return Err(Error::InvalidPoints(self.points));
        }

        Ok(Cello {
            bandwidth: self.bandwidth,
            color_bandwidth: self.color_bandwidth,
            scale: self.scale,
            points: self.points,
            side: self.side,
            orientation: self.orientation,
            color: self.color,
            position: self.position,
        })
    }
}

impl Default for CelloBuilder {
    fn default() -> Self {
        Self::new()
    }
}
