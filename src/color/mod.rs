//! Color specification, resolution and kernel-weighted blending.
//!
//! Callers describe colors with a [`ColorSpec`]. The orchestrator resolves it
//! once into one optional [`ColorField`] per group, so the blender never has to
//! look at the shape of the caller's input.
//!
//! - [`Rgba`] - Colors with floating-point channels, parsed from hex or names
//! - [`ColorBlender`] - Kernel-weighted blending on a density grid

mod blend;
mod rgba;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use blend::{ColorBlender, blend};
pub use rgba::Rgba;

use crate::error::{Error, Result};

/// Colors as supplied by the caller, before they are matched to groups.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorSpec {
    /// No color; the renderer picks its own fill.
    #[default]
    None,
    /// One color for every group.
    Single(Rgba),
    /// One color per observation, shared by every group (each group must have
    /// exactly this many observations).
    PerSample(Vec<Rgba>),
    /// One uniform color per group.
    PerGroup(Vec<Rgba>),
    /// One per-observation color list per group.
    PerGroupSample(Vec<Vec<Rgba>>),
}

impl From<Rgba> for ColorSpec {
    fn from(color: Rgba) -> Self {
        Self::Single(color)
    }
}

impl From<Vec<Rgba>> for ColorSpec {
    fn from(colors: Vec<Rgba>) -> Self {
        Self::PerSample(colors)
    }
}

/// The colors of a single group, ready for blending.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorField {
    /// The whole group has one color.
    Uniform(Rgba),
    /// Every observation carries its own color.
    PerSample(Vec<Rgba>),
}

impl ColorSpec {
    /// Resolves the colors into one optional color field per group.
    ///
    /// # Errors
    ///
    /// Returns `Error::ColorLengthMismatch` if a per-sample list disagrees with
    /// a group's observation count, or a per-group list disagrees with the
    /// number of groups.
    pub fn resolve<S: AsRef<[f64]>>(&self, groups: &[S]) -> Result<Vec<Option<ColorField>>> {
        match self {
            Self::None => Ok(vec![None; groups.len()]),
            Self::Single(color) => Ok(vec![Some(ColorField::Uniform(*color)); groups.len()]),
            Self::PerSample(colors) => groups
                .iter()
                .enumerate()
                .map(|(group, g)| -> Result<Option<ColorField>> {
                    check_len(g.as_ref().len(), colors.len(), group)?;
                    Ok(Some(ColorField::PerSample(colors.clone())))
                })
                .collect(),
            Self::PerGroup(colors) => {
                check_len(groups.len(), colors.len(), 0)?;
                Ok(colors
                    .iter()
                    .map(|&c| Some(ColorField::Uniform(c)))
                    .collect())
            }
            Self::PerGroupSample(lists) => {
                check_len(groups.len(), lists.len(), 0)?;
                groups
                    .iter()
                    .zip(lists)
                    .enumerate()
                    .map(|(group, (g, colors))| -> Result<Option<ColorField>> {
                        check_len(g.as_ref().len(), colors.len(), group)?;
                        Ok(Some(ColorField::PerSample(colors.clone())))
                    })
                    .collect()
            }
        }
    }
}

fn check_len(expected: usize, got: usize, group: usize) -> Result<()> {
    if expected == got {
        Ok(())
    } else {
        Err(Error::ColorLengthMismatch {
            expected,
            got,
            group,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::rgb(1.0, 0.0, 0.0);
    const BLUE: Rgba = Rgba::rgb(0.0, 0.0, 1.0);

    #[test]
    fn test_resolve_none_and_single() {
        let groups = vec![vec![1.0, 2.0], vec![3.0]];
        assert_eq!(ColorSpec::None.resolve(&groups).unwrap(), vec![None, None]);
        assert_eq!(
            ColorSpec::Single(RED).resolve(&groups).unwrap(),
            vec![
                Some(ColorField::Uniform(RED)),
                Some(ColorField::Uniform(RED))
            ]
        );
    }

    #[test]
    fn test_resolve_per_sample() {
        let groups = vec![vec![1.0, 2.0]];
        let resolved = ColorSpec::PerSample(vec![RED, BLUE])
            .resolve(&groups)
            .unwrap();
        assert_eq!(
            resolved,
            vec![Some(ColorField::PerSample(vec![RED, BLUE]))]
        );
    }

    #[test]
    fn test_resolve_per_sample_length_mismatch() {
        let groups = vec![vec![1.0, 2.0], vec![1.0, 2.0, 3.0]];
        let result = ColorSpec::PerSample(vec![RED, BLUE]).resolve(&groups);
        assert!(matches!(
            result,
            Err(Error::ColorLengthMismatch {
                expected: 3,
                got: 2,
                group: 1
            })
        ));
    }

    #[test]
    fn test_resolve_per_group() {
        let groups = vec![vec![1.0], vec![2.0]];
        let resolved = ColorSpec::PerGroup(vec![RED, BLUE])
            .resolve(&groups)
            .unwrap();
        assert_eq!(resolved[1], Some(ColorField::Uniform(BLUE)));

        let result = ColorSpec::PerGroup(vec![RED]).resolve(&groups);
        assert!(matches!(
            result,
            Err(Error::ColorLengthMismatch {
                expected: 2,
                got: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_resolve_per_group_sample() {
        let groups = vec![vec![1.0], vec![2.0, 3.0]];
        let ok = ColorSpec::PerGroupSample(vec![vec![RED], vec![RED, BLUE]]).resolve(&groups);
        assert!(ok.is_ok());

        let bad = ColorSpec::PerGroupSample(vec![vec![RED], vec![BLUE]]).resolve(&groups);
        assert!(matches!(
            bad,
            Err(Error::ColorLengthMismatch { group: 1, .. })
        ));
    }
}
