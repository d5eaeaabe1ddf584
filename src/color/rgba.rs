//! RGBA colors with floating-point channels.

use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An RGBA color with every channel in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// Base colors accepted by name, as `(name, r, g, b)`.
const NAMED: &[(&str, f64, f64, f64)] = &[
    ("black", 0.0, 0.0, 0.0),
    ("white", 1.0, 1.0, 1.0),
    ("red", 1.0, 0.0, 0.0),
    ("green", 0.0, 0.5, 0.0),
    ("blue", 0.0, 0.0, 1.0),
    ("cyan", 0.0, 1.0, 1.0),
    ("magenta", 1.0, 0.0, 1.0),
    ("yellow", 1.0, 1.0, 0.0),
    ("gray", 0.5, 0.5, 0.5),
    ("grey", 0.5, 0.5, 0.5),
    ("orange", 1.0, 0.647_058_823_529_411_8, 0.0),
    ("purple", 0.501_960_784_313_725_5, 0.0, 0.501_960_784_313_725_5),
    ("skyblue", 0.529_411_764_705_882_4, 0.807_843_137_254_902, 0.921_568_627_450_980_4),
];

impl Rgba {
    /// Mid-gray, a neutral fill for groups without a color.
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    /// An opaque color.
    #[must_use]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[must_use]
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidColor` if `hex` is not one of those forms.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let byte = |s: &str| u8::from_str_radix(s, 16).map(|v| f64::from(v) / 255.0);
        let channels = match digits.len() {
            3 => digits
                .chars()
                .map(|c| byte(&c.to_string().repeat(2)))
                .collect::<core::result::Result<Vec<_>, _>>(),
            6 | 8 => (0..digits.len())
                .step_by(2)
                .map(|i| byte(&digits[i..i + 2]))
                .collect::<core::result::Result<Vec<_>, _>>(),
            _ => return Err(invalid()),
        }
        .map_err(|_| invalid())?;

        Ok(match channels[..] {
            [r, g, b] => Self::rgb(r, g, b),
            [r, g, b, a] => Self::rgba(r, g, b, a),
            _ => return Err(invalid()),
        })
    }

    /// Channels as `[r, g, b, a]`.
    #[must_use]
    pub fn channels(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[must_use]
    pub fn from_channels([r, g, b, a]: [f64; 4]) -> Self {
        Self { r, g, b, a }
    }

    /// Clamps every channel into `[0, 1]`.
    #[must_use]
    pub fn clamp(self) -> Self {
        Self::from_channels(self.channels().map(|c| c.clamp(0.0, 1.0)))
    }

    /// Returns the same color with a different alpha.
    #[must_use]
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        if name.starts_with('#') {
            return Self::from_hex(name);
        }
        NAMED
            .iter()
            .find(|(n, ..)| n.eq_ignore_ascii_case(name))
            .map(|&(_, r, g, b)| Self::rgb(r, g, b))
            .ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl From<(f64, f64, f64)> for Rgba {
    fn from((r, g, b): (f64, f64, f64)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<(f64, f64, f64, f64)> for Rgba {
    fn from((r, g, b, a): (f64, f64, f64, f64)) -> Self {
        Self::rgba(r, g, b, a)
    }
}
