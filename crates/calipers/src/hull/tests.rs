use super::*;
use crate::geom2::rand::{draw_points, fixture_polygon, PointSet, ReplayToken, SampleCfg};
use nalgebra::vector;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn pts(raw: &[(f64, f64)]) -> Vec<Vec2> {
    raw.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
}

/// `b` is `a` up to a cyclic shift.
fn same_cycle(a: &[Vec2], b: &[Vec2]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    match b.iter().position(|p| *p == a[0]) {
        Some(k) => (0..a.len()).all(|i| a[i] == b[(i + k) % b.len()]),
        None => false,
    }
}

fn both(points: &[Vec2]) -> [Vec<Vec2>; 2] {
    [
        convex_hull(points, HullAlgo::Quick),
        convex_hull(points, HullAlgo::AngleScan),
    ]
}

#[test]
fn square_is_its_own_hull() {
    let square = pts(&[(1.0, 0.0), (0.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    let expected = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    for hull in both(&square) {
        assert!(same_cycle(&expected, &hull), "{hull:?}");
    }
    assert_eq!(quick_hull(&square), expected);
}

#[test]
fn triangle_passes_through() {
    let tri = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
    for hull in both(&tri) {
        assert_eq!(hull, tri);
    }
    // clockwise input comes back counterclockwise
    let cw = pts(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0)]);
    assert_eq!(quick_hull(&cw), tri);
}

#[test]
fn collinear_input_collapses_to_extremes() {
    let line = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    let expected = pts(&[(0.0, 0.0), (2.0, 0.0)]);
    for hull in both(&line) {
        assert_eq!(hull, expected);
    }
    let diagonal = pts(&[(3.0, 3.0), (1.0, 1.0), (0.0, 0.0), (2.0, 2.0)]);
    for hull in both(&diagonal) {
        assert!(same_cycle(&hull, &pts(&[(0.0, 0.0), (3.0, 3.0)])), "{hull:?}");
    }
}

#[test]
fn tiny_and_empty_inputs() {
    for hull in both(&[]) {
        assert!(hull.is_empty());
    }
    let one = pts(&[(2.0, -1.0)]);
    for hull in both(&one) {
        assert_eq!(hull, one);
    }
    // fewer than 3 points: quick hull keeps the input order
    let two = pts(&[(1.0, 1.0), (0.0, 0.0)]);
    assert_eq!(quick_hull(&two), two);
    assert_eq!(angle_scan_hull(&two), pts(&[(0.0, 0.0), (1.0, 1.0)]));
}

#[test]
fn identical_points_give_single_vertex() {
    let same = pts(&[(4.0, 4.0); 5]);
    for hull in both(&same) {
        assert_eq!(hull, pts(&[(4.0, 4.0)]));
    }
}

#[test]
fn duplicates_and_interior_points_are_dropped() {
    let cloud = pts(&[
        (0.0, 0.0),
        (4.0, 0.0),
        (4.0, 0.0),
        (2.0, 1.0),
        (4.0, 3.0),
        (1.0, 2.0),
        (0.0, 3.0),
        (0.0, 0.0),
        (2.0, 0.0),
        (4.0, 3.0),
    ]);
    let expected = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]);
    for hull in both(&cloud) {
        assert!(same_cycle(&expected, &hull), "{hull:?}");
    }
}

#[test]
fn fixture_polygon_hulls() {
    let fixture = fixture_polygon();
    let quick = quick_hull(&fixture);
    assert_eq!(
        quick,
        pts(&[
            (0.0, 4.0),
            (5.0, 1.0),
            (7.0, 0.0),
            (11.0, 0.0),
            (15.0, 4.0),
            (15.0, 5.0),
            (12.0, 12.0),
            (4.0, 12.0),
            (2.0, 11.0),
            (0.0, 9.0),
        ])
    );
    let scan = angle_scan_hull(&fixture);
    assert_eq!(scan[0], vector![7.0, 0.0]);
    assert!(same_cycle(&quick, &scan));
}

#[test]
fn raster_points_keep_postcondition() {
    // exact collinear runs and duplicates
    let cfg = SampleCfg {
        count: 300,
        ..SampleCfg::default()
    };
    for index in 0..5 {
        let set = PointSet::RandomInRaster { raster: 40 };
        let points = draw_points(set, cfg, ReplayToken { seed: 11, index }).unwrap();
        for hull in both(&points) {
            assert!(is_convex_ccw(&hull, 0.0));
            assert!(points.iter().all(|p| hull_contains(&hull, *p, 0.0)));
            for (i, a) in hull.iter().enumerate() {
                assert!(hull[i + 1..].iter().all(|b| b != a), "duplicate vertex {a:?}");
            }
        }
    }
}

#[test]
fn random_clouds_agree_seeded() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let n = rng.gen_range(3..80);
        let points: Vec<Vec2> = (0..n)
            .map(|_| Vec2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
            .collect();
        let [quick, scan] = both(&points);
        assert!(same_cycle(&quick, &scan), "{quick:?} vs {scan:?}");
    }
}

#[test]
fn angle_scan_keeps_farthest_point_on_nearly_equal_rays() {
    // far, near, mid on rays a few 1e-14 apart: the far corner must survive
    let points = pts(&[
        (0.0, 0.0),
        (1000.0, 0.0),
        (0.0, 1000.0),
        (1000.0, 1000.0),
        (1.0, 1.0 + 1e-13),
        (10.0, 10.0 + 2e-12),
    ]);
    let scan = angle_scan_hull(&points);
    assert!(hull_contains(&scan, vector![1000.0, 1000.0], 1e-9), "{scan:?}");
    assert!(same_cycle(&quick_hull(&points), &scan), "{scan:?}");
    for p in &points {
        assert!(hull_contains(&scan, *p, 1e-9), "{p:?} outside {scan:?}");
    }
}

#[test]
fn angle_dedup_does_not_chain_past_tolerance() {
    // each step is within eps of the previous point, the last is not within
    // eps of the ray's first point
    let cfg = GeomCfg {
        eps_angle: 0.01,
        ..GeomCfg::default()
    };
    let points = pts(&[(0.0, 0.0), (10.0, 0.0), (5.0, 0.04), (20.0, 0.32), (0.0, 10.0)]);
    let scan = angle_scan_hull_with_cfg(&points, cfg);
    assert_eq!(
        scan,
        pts(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.32), (0.0, 10.0)])
    );
    assert!(same_cycle(&quick_hull(&points), &scan));
}

#[test]
fn containment_helper_on_degenerate_hulls() {
    let seg = pts(&[(0.0, 0.0), (2.0, 0.0)]);
    assert!(hull_contains(&seg, vector![1.0, 0.0], 0.0));
    assert!(!hull_contains(&seg, vector![3.0, 0.0], 1e-9));
    assert!(!hull_contains(&seg, vector![1.0, 0.1], 1e-9));
    assert!(hull_contains(&pts(&[(1.0, 1.0)]), vector![1.0, 1.0], 0.0));
    assert!(!hull_contains(&[], vector![0.0, 0.0], 1.0));
    assert!(!is_convex_ccw(
        &pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]),
        0.0
    ));
}

fn cloud() -> impl Strategy<Value = Vec<Vec2>> {
    prop::collection::vec((-100.0..100.0f64, -100.0..100.0f64), 3..60)
        .prop_map(|raw| raw.into_iter().map(|(x, y)| Vec2::new(x, y)).collect())
}

proptest! {
    #[test]
    fn hulls_are_convex_and_contain_input(points in cloud()) {
        for hull in both(&points) {
            prop_assert!(is_convex_ccw(&hull, 1e-9));
            for p in &points {
                prop_assert!(hull_contains(&hull, *p, 1e-9));
            }
        }
    }

    #[test]
    fn hulls_are_idempotent(points in cloud()) {
        let quick = quick_hull(&points);
        prop_assert!(same_cycle(&quick, &quick_hull(&quick)));
        let scan = angle_scan_hull(&points);
        prop_assert_eq!(angle_scan_hull(&scan), scan);
    }

    #[test]
    fn builders_agree_on_vertices(points in cloud()) {
        let [quick, scan] = both(&points);
        prop_assert!(same_cycle(&quick, &scan));
    }
}
