//! End-to-end tests of grouped cello plots.

use cello::prelude::*;

fn plot_with_side(side: Side) -> GroupResult {
    let cello = Cello::builder()
        .bandwidth(0.8)
        .scale(3.0)
        .side(side)
        .position(2.0)
        .build()
        .unwrap();
    let result = cello.plot(vec![0.0, 0.4, 1.5, 2.0, 3.7]).unwrap();
    result.single().unwrap().clone()
}

#[test]
fn test_half_cellos_mirror_the_full_envelope() {
    let (both_lo, both_hi) = plot_with_side(Side::Both).offsets();
    let (left_lo, left_hi) = plot_with_side(Side::Left).offsets();
    let (right_lo, right_hi) = plot_with_side(Side::Right).offsets();

    assert_eq!(left_lo, both_lo);
    assert_eq!(right_hi, both_hi);
    assert!(left_hi.iter().all(|&o| o == 0.0));
    assert!(right_lo.iter().all(|&o| o == 0.0));

    for (lo, hi) in both_lo.iter().zip(&both_hi) {
        assert!((lo + hi).abs() < f64::EPSILON);
    }
}

#[test]
fn test_flat_edge_sits_on_the_baseline() {
    let left = plot_with_side(Side::Left);
    let (_, upper) = left.edges();
    assert!(upper.iter().all(|&e| e == 2.0));

    let right = plot_with_side(Side::Right);
    let (lower, _) = right.edges();
    assert!(lower.iter().all(|&e| e == 2.0));
}

#[test]
fn test_scale_only_changes_width() {
    let narrow = Cello::builder().scale(1.0).build().unwrap();
    let wide = Cello::builder().scale(8.0).build().unwrap();
    let sample = vec![1.0, 2.0, 2.5, 6.0];

    let a = narrow.plot(sample.clone()).unwrap();
    let b = wide.plot(sample).unwrap();
    let (a, b) = (a.single().unwrap(), b.single().unwrap());

    assert_eq!(a.density(), b.density());
    for (ha, hb) in a.half_widths().iter().zip(b.half_widths()) {
        assert!((ha * 8.0 - hb).abs() < 1e-12);
    }
}

#[test]
fn test_default_positions_never_overlap() {
    let groups = vec![vec![0.0; 100], vec![5.0; 100]];
    let result = Cello::new().plot(groups).unwrap();
    let positions: Vec<f64> = result.groups().iter().map(GroupResult::position).collect();
    assert_eq!(positions, vec![1.0, 2.0]);
}

#[test]
fn test_short_position_list_is_rejected() {
    let cello = Cello::builder().position(vec![1.0, 2.0]).build().unwrap();
    let result = cello.plot(vec![vec![0.0], vec![1.0], vec![2.0]]);
    assert!(matches!(
        result,
        Err(Error::PositionCountMismatch {
            expected: 3,
            got: 2
        })
    ));
}

#[test]
fn test_groups_keep_input_order() {
    let groups: Vec<Vec<f64>> = (0..8).map(|i| vec![f64::from(i) * 10.0]).collect();
    let result = Cello::new().plot(groups).unwrap();
    for (i, group) in result.groups().iter().enumerate() {
        assert_eq!(group.index(), i);
        let (lo, hi) = group.data_range().unwrap();
        assert_eq!(lo, hi);
        assert!((lo - i as f64 * 10.0).abs() < f64::EPSILON);
    }
}

#[test]
fn test_per_sample_colors_across_groups() {
    let cello = Cello::builder()
        .color(ColorSpec::PerGroupSample(vec![
            vec![Rgba::rgb(1.0, 0.0, 0.0), Rgba::rgb(0.0, 0.0, 1.0)],
            vec![Rgba::GRAY],
        ]))
        .build()
        .unwrap();
    let result = cello.plot(vec![vec![0.0, 3.0], vec![1.0]]).unwrap();

    let first = result.groups()[0].colors().unwrap();
    assert_eq!(first.len(), 100);
    // The ends of the grid take the color of the nearest observation.
    assert!((first[0].r - 1.0).abs() < 1e-9 && first[0].b < 1e-9);
    assert!((first[99].b - 1.0).abs() < 1e-9 && first[99].r < 1e-9);

    let second = result.groups()[1].colors().unwrap();
    assert!(second.iter().all(|&c| c == Rgba::GRAY));
}

#[test]
fn test_rule_bandwidths_are_resolved_per_group() {
    let cello = Cello::builder()
        .bandwidth(BandwidthRule::Scott)
        .build()
        .unwrap();
    let result = cello
        .plot(vec![vec![0.0, 1.0, 2.0], vec![0.0, 10.0, 20.0]])
        .unwrap();
    let groups = result.groups();
    assert!(groups[1].bandwidth() > groups[0].bandwidth());
    assert_eq!(groups[0].bandwidth(), groups[0].color_bandwidth());
}

#[test]
fn test_horizontal_outline_puts_values_on_x() {
    let cello = Cello::builder().horizontal(true).build().unwrap();
    let result = cello.plot(vec![4.0, 5.0]).unwrap();
    let group = result.single().unwrap();

    let outline = group.outline();
    let grid = group.grid();
    assert_eq!(outline.len(), 2 * grid.points());
    assert_eq!(outline[0].0, grid.start());
    assert_eq!(outline[0].1, -group.half_widths()[0]);
    assert_eq!(group.baseline(), [(grid.start(), 0.0), (grid.end(), 0.0)]);
    assert_eq!(group.data_span(), Some([(4.0, 0.0), (5.0, 0.0)]));
}

#[test]
fn test_plot_groups_matches_builder() {
    let values = vec![vec![0.0, 1.0, 1.5], vec![3.0, 3.5]];
    let direct = plot_groups(
        values.clone(),
        Rgba::GRAY,
        Position::At(5.0),
        0.4,
        Some(Bandwidth::Fixed(0.1)),
        2.0,
        40,
        Side::Right,
    )
    .unwrap();

    let built = Cello::builder()
        .color(Rgba::GRAY)
        .position(5.0)
        .bandwidth(0.4)
        .color_bandwidth(0.1)
        .scale(2.0)
        .points(40)
        .side(Side::Right)
        .build()
        .unwrap()
        .plot(values)
        .unwrap()
        .into_groups();

    assert_eq!(direct, built);
    assert_eq!(direct[1].position(), 6.0);
}
