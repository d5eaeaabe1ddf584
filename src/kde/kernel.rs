//! The smoothing kernel shared by density estimation and color blending.

/// Grid padding beyond the data range, in bandwidths.
///
/// At three bandwidths the kernel has decayed to `exp(-9) ≈ 1.2e-4` of its peak.
pub(crate) const PAD_BANDWIDTHS: f64 = 3.0;

/// Gaussian-shaped kernel `K(u) = exp(-u²)` evaluated at `u = distance / bandwidth`.
///
/// `K(0) = 1`, `K(u) = K(-u)`, and `K` decays monotonically in `|u|`. No
/// normalization constant is applied; the estimator normalizes the whole
/// curve afterwards.
#[inline]
pub(crate) fn gaussian(u: f64) -> f64 {
    (-u * u).exp()
}
