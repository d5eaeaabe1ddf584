//! Basic cello example: one sample, one color per observation.
//!
//! Estimates the density of a small bimodal sample, blends a red-to-blue
//! color ramp along it and prints the envelope a renderer would fill.
//!
//! Run with: `cargo run --example basic_cello`

use cello::prelude::*;

fn main() -> Result<()> {
    let values = vec![-1.2, -0.8, -0.5, 0.1, 2.9, 3.2, 3.4, 3.9];

    // Color each observation by its value: low values red, high values blue.
    let colors: Vec<Rgba> = values
        .iter()
        .map(|v| {
            let t = (v + 1.2) / 5.1;
            Rgba::rgb(1.0 - t, 0.2, t)
        })
        .collect();

    let cello = Cello::builder()
        .bandwidth(0.5)
        .color_bandwidth(0.3)
        .scale(2.0)
        .points(25)
        .color(colors)
        .build()?;

    let result = cello.plot(values)?;
    let group = result.single().expect("one-dimensional input yields a single group");
    let colors = group.colors().expect("colors were supplied");
    let (lower, upper) = group.edges();

    println!("{:>8} {:>8} {:>8} {:>8}  color", "value", "density", "lower", "upper");
    for (i, value) in group.grid().iter().enumerate() {
        let c = colors[i];
        println!(
            "{value:>8.3} {:>8.4} {:>8.3} {:>8.3}  ({:.2}, {:.2}, {:.2})",
            group.density()[i],
            lower[i],
            upper[i],
            c.r,
            c.g,
            c.b
        );
    }

    Ok(())
}
