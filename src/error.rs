/// Errors returned while estimating densities, blending colors, or
/// assembling cello groups.
///
/// Every variant is raised before any grid is built, so a failed call
/// leaves nothing half-computed behind.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Returned when a density or color bandwidth is not a positive, finite number.
    #[error("invalid bandwidth: {0} must be positive and finite")]
    InvalidBandwidth(f64),

    /// Returned when an explicit per-group bandwidth list has the wrong length.
    #[error("bandwidth count mismatch: expected {expected} bandwidths but got {got}")]
    BandwidthCountMismatch {
        /// The number of groups.
        expected: usize,
        /// The number of bandwidths supplied.
        got: usize,
    },

    /// Returned when a color sequence disagrees with the sample or group count.
    #[error("color length mismatch in group {group}: expected {expected} colors but got {got}")]
    ColorLengthMismatch {
        /// The number of colors required.
        expected: usize,
        /// The number of colors supplied.
        got: usize,
        /// The group the colors were resolved for.
        group: usize,
    },

    /// Returned when an explicit position list disagrees with the group count.
    #[error("position count mismatch: expected {expected} positions but got {got}")]
    PositionCountMismatch {
        /// The number of groups.
        expected: usize,
        /// The number of positions supplied.
        got: usize,
    },

    /// Returned when no groups are supplied at all.
    ///
    /// A group holding zero observations is valid and renders flat.
    #[error("at least one group is required")]
    EmptyInput,

    /// Returned when fewer than two grid points are requested.
    #[error("invalid points: {0} must be at least 2")]
    InvalidPoints(usize),

    /// Returned when the width scale is not finite.
    #[error("invalid scale: {0} must be finite")]
    InvalidScale(f64),

    /// Returned when an observation is NaN or infinite.
    #[error("non-finite value at index {index} of group {group}")]
    NonFiniteValue {
        /// The group holding the offending observation.
        group: usize,
        /// The index of the observation inside its group.
        index: usize,
    },

    /// Returned when a color string cannot be parsed.
    #[error("invalid color: '{0}'")]
    InvalidColor(String),
}

pub type Result<T> = core::result::Result<T, Error>;
