//! Curated API for the CLI, benches and examples (UNSTABLE).
//!
//! Prefer these re-exports over reaching into submodules; internal layout may
//! move without notice.

// Hulls
pub use crate::hull::{
    angle_scan_hull, convex_hull, convex_hull_with_cfg, hull_contains, is_convex_ccw, quick_hull,
    HullAlgo,
};
// Rotating calipers
pub use crate::calipers::criteria::{max_ratio, min_area, min_perimeter, min_ratio, min_width};
pub use crate::calipers::{
    all_oriented_rectangles, all_oriented_rectangles_from_points, best_oriented_rectangle,
    best_oriented_rectangle_from_points, best_oriented_rectangle_with_cfg, Criterion, Sweep,
    SweepState,
};
pub use crate::rect::OrientedRectangle;
// Point samplers
pub use crate::geom2::rand::{
    alignment_test, draw_points, fixture_polygon, regular_polygon, PointSet, ReplayToken,
    SampleCfg, SampleError,
};
pub use crate::geom2::{GeomCfg, Vec2};
