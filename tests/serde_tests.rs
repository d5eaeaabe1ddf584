#![cfg(feature = "serde")]

use cello::prelude::*;

#[test]
fn round_trip_configuration() {
    let cello = Cello::builder()
        .bandwidth(Bandwidth::PerGroup(vec![0.3, 0.6]))
        .color(ColorSpec::PerGroup(vec![Rgba::GRAY, Rgba::rgb(1.0, 0.0, 0.0)]))
        .side(Side::Left)
        .horizontal(true)
        .build()
        .unwrap();

    let json = serde_json::to_string(&cello).unwrap();
    let restored: Cello = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, cello);
}

#[test]
fn round_trip_plot_result() {
    let result = Cello::builder()
        .color(vec![Rgba::GRAY, Rgba::rgb(0.0, 0.0, 1.0)])
        .points(16)
        .build()
        .unwrap()
        .plot(vec![1.0, 2.0])
        .unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let restored: PlotResult = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.len(), 1);

    let (a, b) = (result.single().unwrap(), restored.single().unwrap());
    assert_eq!(a.grid().points(), b.grid().points());
    assert_eq!(a.side(), b.side());
    for (x, y) in a.density().iter().zip(b.density()) {
        assert!((x - y).abs() < 1e-12);
    }
}
