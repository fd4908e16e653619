use std::collections::HashSet;
use std::f64::consts::PI;

use nalgebra::Matrix2;
use proptest::prelude::*;

use super::*;
use crate::construction::seeds;
use crate::geom::{Circle, GeomCfg, Point};

fn hash(canon: &Canonicalizer, circles: &[Circle]) -> CanonicalHash {
    canon.hash(circles, &GeomCfg::default()).unwrap()
}

fn rotation(theta: f64) -> Matrix2<f64> {
    let (s, c) = theta.sin_cos();
    Matrix2::new(c, -s, s, c)
}

fn transform(circles: &[Circle], m: &Matrix2<f64>, t: Point) -> Vec<Circle> {
    circles
        .iter()
        .map(|c| Circle::new(m * c.center + t, c.r))
        .collect()
}

fn sqrt3() -> f64 {
    3f64.sqrt()
}

#[test]
fn quantize_scales_and_rounds() {
    assert_eq!(i64::from(quantize(1.0).unwrap()), 10i64.pow(HASH_DECIMALS));
    assert_eq!(quantize(1.0).unwrap(), 100_000_000);
    assert_eq!(quantize(-0.5).unwrap(), -50_000_000);
    assert_eq!(quantize(0.123_456_784_9).unwrap(), 12_345_678);
    assert_eq!(quantize(21.0).unwrap(), 2_100_000_000);
}

#[test]
fn quantize_rejects_out_of_range_and_nan() {
    assert!(matches!(quantize(22.0), Err(CanonError::OutOfRange { .. })));
    assert!(matches!(quantize(-22.0), Err(CanonError::OutOfRange { .. })));
    assert!(quantize(f64::NAN).is_err());
    assert!(quantize(f64::INFINITY).is_err());
}

#[test]
fn hash_surfaces_out_of_range_coordinates() {
    let circles = [Circle::from_xyr(0.0, 0.0, 1.0), Circle::from_xyr(40.0, 0.0, 1.0)];
    let err = Canonicalizer::Pairwise
        .hash(&circles, &GeomCfg::default())
        .unwrap_err();
    assert!(matches!(err, CanonError::OutOfRange { .. }));
}

#[test]
fn empty_single_and_concentric_sets() {
    for canon in [
        Canonicalizer::Pairwise,
        Canonicalizer::FixedTable(FrameTable::hexagonal()),
    ] {
        assert!(hash(&canon, &[]).is_empty());

        let single = hash(&canon, &[Circle::from_xyr(3.0, 4.0, 1.0)]);
        assert_eq!(
            single.tokens(),
            &[CircleToken { r: 100_000_000, x: 0, y: 0 }]
        );

        let concentric = hash(
            &canon,
            &[Circle::from_xyr(1.0, 1.0, 2.0), Circle::from_xyr(1.0, 1.0, 1.0)],
        );
        assert_eq!(
            concentric.tokens(),
            &[
                CircleToken { r: 100_000_000, x: 0, y: 0 },
                CircleToken { r: 200_000_000, x: 0, y: 0 },
            ]
        );
    }
}

#[test]
fn display_is_hex_tokens() {
    let h = hash(&Canonicalizer::Pairwise, &[Circle::from_xyr(0.0, 0.0, 1.0)]);
    assert_eq!(h.to_string(), "05f5e1000000000000000000");
    assert_eq!(h.len(), 1);
}

#[test]
fn pairwise_puts_first_center_at_origin_on_x_axis() {
    let circles = [Circle::from_xyr(5.0, 5.0, 1.0), Circle::from_xyr(5.0, 6.0, 1.0)];
    let h = hash(&Canonicalizer::Pairwise, &circles);
    assert_eq!(
        h.tokens(),
        &[
            CircleToken { r: 100_000_000, x: 0, y: 0 },
            CircleToken { r: 100_000_000, x: 100_000_000, y: 0 },
        ]
    );
}

#[test]
fn pairwise_distinguishes_non_congruent_sets() {
    let a = [
        Circle::from_xyr(0.0, 0.0, 1.0),
        Circle::from_xyr(1.0, 0.0, 1.0),
        Circle::from_xyr(0.5, sqrt3() / 2.0, 1.0),
    ];
    let b = [
        Circle::from_xyr(0.0, 0.0, 1.0),
        Circle::from_xyr(1.0, 0.0, 1.0),
        Circle::from_xyr(0.5, sqrt3() / 2.0, sqrt3()),
    ];
    let c = [
        Circle::from_xyr(0.0, 0.0, 1.0),
        Circle::from_xyr(1.0, 0.0, 1.0),
        Circle::from_xyr(-1.0, 0.0, 1.0),
    ];
    let hashes: HashSet<_> = [&a[..], &b[..], &c[..]]
        .into_iter()
        .map(|cs| hash(&Canonicalizer::Pairwise, cs))
        .collect();
    assert_eq!(hashes.len(), 3);
}

#[test]
fn four_circle_frontier_hashes_are_distinct() {
    let table = seeds::four_circle_frontier();
    assert_eq!(table.len(), 10);
    for canon in [
        Canonicalizer::Pairwise,
        Canonicalizer::FixedTable(FrameTable::hexagonal()),
    ] {
        let hashes: HashSet<_> = table.iter().map(|s| hash(&canon, &s.circles)).collect();
        assert_eq!(hashes.len(), 10, "{} collapsed frontier entries", canon.name());
    }
}

#[test]
fn fixed_table_is_invariant_under_hexagonal_motions() {
    let canon = Canonicalizer::FixedTable(FrameTable::hexagonal());
    for seed in seeds::four_circle_frontier() {
        let base = hash(&canon, &seed.circles);
        for k in 1..6 {
            let m = rotation(PI / 3.0 * k as f64);
            let moved = transform(&seed.circles, &m, Point::new(1.0, 0.0));
            assert_eq!(hash(&canon, &moved), base);
        }
        // Reflection across the x-axis.
        let flip = Matrix2::new(1.0, 0.0, 0.0, -1.0);
        assert_eq!(hash(&canon, &transform(&seed.circles, &flip, Point::zeros())), base);
    }
}

#[test]
fn dihedral_table_holds_rotations_then_reflections() {
    let t = FrameTable::dihedral(6);
    assert_eq!(t.matrices().len(), 12);
    for (k, m) in t.matrices().iter().enumerate() {
        let det = m.determinant();
        let expected = if k < 6 { 1.0 } else { -1.0 };
        assert!((det - expected).abs() < 1e-12);
        assert!((m * m.transpose() - Matrix2::identity()).norm() < 1e-12);
    }
}

#[test]
fn anchored_forgets_order_only() {
    let circles = vec![
        Circle::from_xyr(0.0, 0.0, 1.0),
        Circle::from_xyr(1.0, 0.0, 1.0),
        Circle::from_xyr(0.5, sqrt3() / 2.0, 1.0),
    ];
    let mut reversed = circles.clone();
    reversed.reverse();
    let canon = Canonicalizer::Anchored;
    assert_eq!(hash(&canon, &circles), hash(&canon, &reversed));

    let shifted = transform(&circles, &Matrix2::identity(), Point::new(0.25, 0.0));
    assert_ne!(hash(&canon, &circles), hash(&canon, &shifted));
    // The congruence hash still identifies the two.
    assert_eq!(
        hash(&Canonicalizer::Pairwise, &circles),
        hash(&Canonicalizer::Pairwise, &shifted)
    );
}

#[test]
fn snap_replaces_noise_with_reference_values() {
    let table = MagnitudeTable::hexagonal();
    assert_eq!(table.len(), 29);
    let half_sqrt3 = sqrt3() / 2.0;
    assert_eq!(table.snap(half_sqrt3 + 1e-14).unwrap(), 0.8660254037844386);
    assert_eq!(table.snap(-0.5 - 1e-13).unwrap(), -0.5);
    assert_eq!(table.snap(3.0).unwrap(), 3.0);
    assert_eq!(table.snap(0.0).unwrap(), 0.0);
    let p = table.snap_point(Point::new(0.5 + 2e-16, -half_sqrt3)).unwrap();
    assert_eq!(p, Point::new(0.5, -0.8660254037844386));
}

#[test]
fn snap_rejects_unknown_magnitudes() {
    let table = MagnitudeTable::hexagonal();
    let err = table.snap(0.123).unwrap_err();
    assert!(matches!(err, SnapError::Uncanonical { value, .. } if value == 0.123));
    assert!(table.snap(10.0).is_err());
    assert!(table.snap(0.5 + 1e-9).is_err());
}

#[test]
fn custom_table_sorts_and_dedups() {
    let table = MagnitudeTable::new([2.0, -1.0, 1.0, 0.5], 1e-9);
    assert_eq!(table.len(), 3);
    assert_eq!(table.snap(-2.0 + 1e-12).unwrap(), -2.0);
    assert!(MagnitudeTable::new(std::iter::empty(), 1e-9).snap(0.0).is_err());
}

fn arb_circles() -> impl Strategy<Value = Vec<Circle>> {
    prop::collection::vec((-2.0f64..2.0, -2.0f64..2.0, 0.1f64..2.0), 2..=5)
        .prop_map(|v| v.into_iter().map(|(x, y, r)| Circle::from_xyr(x, y, r)).collect())
}

proptest! {
    #[test]
    fn pairwise_hash_ignores_rigid_motions(
        circles in arb_circles(),
        theta in 0.0f64..std::f64::consts::TAU,
        tx in -3.0f64..3.0,
        ty in -3.0f64..3.0,
        mirror in any::<bool>(),
    ) {
        let canon = Canonicalizer::Pairwise;
        let base = hash(&canon, &circles);
        let mut m = rotation(theta);
        if mirror {
            m *= Matrix2::new(1.0, 0.0, 0.0, -1.0);
        }
        let moved = transform(&circles, &m, Point::new(tx, ty));
        prop_assert_eq!(hash(&canon, &moved), base);
    }

    #[test]
    fn pairwise_hash_ignores_order(circles in arb_circles(), shift in 0usize..5) {
        let canon = Canonicalizer::Pairwise;
        let mut rotated = circles.clone();
        let k = shift % rotated.len();
        rotated.rotate_left(k);
        let last = rotated.len() - 1;
        rotated.swap(0, last);
        prop_assert_eq!(hash(&canon, &rotated), hash(&canon, &circles));
    }
}
