#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Numerical core of cello plots: smoothed, optionally color-blended density
//! shapes drawn as a symmetric or one-sided alternative to violin plots.
//!
//! The crate computes the numbers a renderer needs and nothing else: for each
//! group an evaluation grid, a density curve on that grid, and optionally one
//! blended color per grid coordinate. Turning those into polygons or meshes is
//! left to the caller; [`GroupResult::outline`] gives the envelope as plane
//! coordinates to make that step short.
//!
//! # Getting Started
//!
//! ```
//! use cello::prelude::*;
//!
//! let cello = Cello::builder()
//!     .bandwidth(1.0)
//!     .scale(5.0)
//!     .color(vec![Rgba::rgb(1.0, 0.0, 0.0), Rgba::rgb(0.0, 0.0, 1.0), Rgba::GRAY])
//!     .build()
//!     .unwrap();
//!
//! let result = cello.plot(vec![0.0, 2.0, 3.5]).unwrap();
//! let group = result.single().unwrap();
//!
//! assert_eq!(group.density().len(), 100);
//! assert_eq!(group.colors().unwrap().len(), 100);
//! assert_eq!(group.outline().len(), 200);
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`DensityEstimator`](kde::DensityEstimator) | Kernel density on a padded grid, normalized to the sample count. |
//! | [`ColorBlender`](color::ColorBlender) | Kernel-weighted mean of observation colors on the same grid. |
//! | [`Cello`] | Resolves groups, bandwidths, colors and positions; runs one estimate per group. |
//! | [`GroupResult`] | Grid, density, colors and placement of one group, plus its envelope geometry. |
//!
//! # Density normalization
//!
//! The density is a raw kernel sum rescaled so that `Σ density · spacing`
//! equals the number of observations, not one. A group with twice the
//! observations draws twice as wide at the same `scale`.
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `parallel` | Groups computed concurrently with [`rayon`](https://docs.rs/rayon) | off |
//! | `serde` | `Serialize`/`Deserialize` on configuration and result types | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod cello;
pub mod color;
mod error;
pub mod grid;
pub mod kde;
mod result;
mod types;

pub use cello::{Cello, CelloBuilder, Position, Values, plot_groups};
pub use error::{Error, Result};
pub use result::{GroupResult, PlotResult};
pub use types::{Orientation, Side};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use cello::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cello::{Cello, CelloBuilder, Position, Values, plot_groups};
    pub use crate::color::{ColorBlender, ColorField, ColorSpec, Rgba};
    pub use crate::error::{Error, Result};
    pub use crate::grid::Grid;
    pub use crate::kde::{Bandwidth, BandwidthRule, DensityEstimate, DensityEstimator};
    pub use crate::result::{GroupResult, PlotResult};
    pub use crate::types::{Orientation, Side};
}
