//! Kernel density estimation over one-dimensional samples.
//!
//! This module provides the density half of a cello: a Gaussian-shaped kernel
//! sum evaluated on a padded grid and normalized to the sample's total weight.
//!
//! - [`kernel`] - The smoothing kernel and its grid padding
//! - [`density`] - The [`DensityEstimator`] and its [`DensityEstimate`] output
//! - [`bandwidth`] - Fixed and rule-based bandwidth selection

mod bandwidth;
mod density;
mod kernel;

pub use bandwidth::{Bandwidth, BandwidthRule};
pub use density::{DensityEstimate, DensityEstimator, estimate};
pub(crate) use density::validate_bandwidth;
pub(crate) use kernel::PAD_BANDWIDTHS;
