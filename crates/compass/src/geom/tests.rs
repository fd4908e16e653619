use super::*;
use nalgebra::vector;
use proptest::prelude::*;

fn cfg() -> GeomCfg {
    GeomCfg::default()
}

#[test]
fn unit_circles_cross_at_hexagon_vertices() {
    let a = Circle::from_xyr(0.0, 0.0, 1.0);
    let b = Circle::from_xyr(1.0, 0.0, 1.0);
    let hits = intersect(&a, &b, cfg());
    let pts = hits.points();
    assert_eq!(pts.len(), 2);
    let h = 3f64.sqrt() / 2.0;
    assert!(pts.iter().any(|p| point_eq(*p, vector![0.5, h], EPS)));
    assert!(pts.iter().any(|p| point_eq(*p, vector![0.5, -h], EPS)));
}

#[test]
fn external_and_internal_tangency_yield_one_point() {
    let a = Circle::from_xyr(0.0, 0.0, 1.0);
    let b = Circle::from_xyr(2.0, 0.0, 1.0);
    match intersect(&a, &b, cfg()) {
        Intersection::Tangent(p) => assert!(point_eq(p, vector![1.0, 0.0], EPS)),
        other => panic!("expected tangent, got {other:?}"),
    }

    let big = Circle::from_xyr(0.0, 0.0, 2.0);
    let small = Circle::from_xyr(1.0, 0.0, 1.0);
    match intersect(&big, &small, cfg()) {
        Intersection::Tangent(p) => assert!(point_eq(p, vector![2.0, 0.0], EPS)),
        other => panic!("expected tangent, got {other:?}"),
    }
}

#[test]
fn irrational_tangency_is_not_split_by_rounding() {
    // r = √3 on both, centers 2√3 apart along (1/2, √3/2).
    let s = 3f64.sqrt();
    let a = Circle::from_xyr(0.5, s / 2.0, s);
    let b = Circle::from_xyr(0.5 + s, s / 2.0 + 3.0, s);
    let hits = intersect(&a, &b, cfg());
    assert_eq!(hits.points().len(), 1, "{hits:?}");
}

#[test]
fn disjoint_nested_and_concentric_yield_nothing() {
    let a = Circle::from_xyr(0.0, 0.0, 1.0);
    assert!(intersect(&a, &Circle::from_xyr(3.0, 0.0, 1.0), cfg()).is_empty());
    assert!(intersect(&a, &Circle::from_xyr(0.1, 0.0, 0.2), cfg()).is_empty());
    assert!(intersect(&a, &Circle::from_xyr(0.0, 0.0, 2.0), cfg()).is_empty());
    assert!(intersect(&a, &a, cfg()).is_empty());
}

#[test]
fn equality_is_epsilon_tolerant() {
    let a = Circle::from_xyr(0.0, 0.0, 1.0);
    let b = Circle::from_xyr(1e-9, -1e-9, 1.0 + 2e-9);
    let c = Circle::from_xyr(1e-7, 0.0, 1.0);
    assert!(circle_eq(&a, &b, EPS));
    assert!(!circle_eq(&a, &c, EPS));
    assert!(eq(distance(vector![0.0, 0.0], vector![3.0, 4.0]), 5.0, EPS));
}

#[test]
fn through_uses_distance_as_radius() {
    let c = Circle::through(vector![1.0, 1.0], vector![1.0, 3.0]);
    assert!(eq(c.r, 2.0, EPS));
    assert!(c.offset(vector![3.0, 1.0]).abs() < EPS);
}

proptest! {
    #[test]
    fn crossing_points_lie_on_both_circles(
        x1 in -2.0f64..2.0,
        y1 in -2.0f64..2.0,
        r1 in 0.2f64..3.0,
        r2 in 0.2f64..3.0,
        theta in 0.0f64..std::f64::consts::TAU,
        t in 0.05f64..0.95,
    ) {
        let lo = (r1 - r2).abs();
        let hi = r1 + r2;
        let d = lo + t * (hi - lo);
        let a = Circle::from_xyr(x1, y1, r1);
        let b = Circle::from_xyr(x1 + d * theta.cos(), y1 + d * theta.sin(), r2);
        let hits = intersect(&a, &b, cfg());
        let pts = hits.points();
        prop_assert_eq!(pts.len(), 2);
        for p in pts {
            prop_assert!(a.offset(*p).abs() < 1e-9);
            prop_assert!(b.offset(*p).abs() < 1e-9);
        }
    }

    #[test]
    fn separated_pairs_have_no_points(
        r1 in 0.2f64..3.0,
        r2 in 0.2f64..3.0,
        gap in 1e-6f64..2.0,
    ) {
        let a = Circle::from_xyr(0.0, 0.0, r1);
        let apart = Circle::from_xyr(r1 + r2 + gap, 0.0, r2);
        prop_assert!(intersect(&a, &apart, cfg()).is_empty());
        let (big, small) = if r1 >= r2 { (r1, r2) } else { (r2, r1) };
        let outer = Circle::from_xyr(0.0, 0.0, big + small + gap);
        let inner = Circle::from_xyr(big.min(gap) * 0.5, 0.0, small);
        prop_assert!(intersect(&outer, &inner, cfg()).is_empty());
    }
}
