//! Grouped cellos: several samples side by side as half-cellos.
//!
//! Each group is estimated independently with its own Scott's-rule bandwidth
//! and drawn as a right half with a uniform color per group. Enable the
//! `parallel` feature to compute the groups concurrently.
//!
//! Run with: `cargo run --example grouped_cellos`

use cello::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(7);
    let groups: Vec<Vec<f64>> = (0..4)
        .map(|g| {
            let center = f64::from(g) * 1.5;
            (0..100 + g * 50)
                .map(|_| center + rng.random_range(-1.0..1.0) + rng.random_range(-1.0..1.0))
                .collect()
        })
        .collect();

    let palette = ["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728"]
        .iter()
        .map(|hex| hex.parse::<Rgba>())
        .collect::<Result<Vec<_>>>()?;

    let cello = Cello::builder()
        .bandwidth(BandwidthRule::Scott)
        .color(ColorSpec::PerGroup(palette))
        .side(Side::Right)
        .scale(0.01)
        .build()?;

    let result = cello.plot(groups)?;
    for group in result.groups() {
        let widest = group
            .half_widths()
            .into_iter()
            .fold(0.0, f64::max);
        let (lo, hi) = group.data_range().unwrap_or((0.0, 0.0));
        println!(
            "group {} at {:.1}: bandwidth {:.3}, data [{lo:.2}, {hi:.2}], widest {widest:.3}, {} outline vertices",
            group.index(),
            group.position(),
            group.bandwidth(),
            group.outline().len()
        );
    }

    Ok(())
}
