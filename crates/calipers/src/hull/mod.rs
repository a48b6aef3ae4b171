//! Planar convex hulls.
//!
//! Purpose
//! - Turn an arbitrary point collection into the ordered hull that the
//!   rotating calipers consume.
//! - Two independent builders with the same postcondition: `quick_hull`
//!   (divide and conquer) and `angle_scan_hull` (Graham-scan family). They
//!   agree on general-position input; on exactly collinear boundary points they
//!   may differ in which boundary points they keep.
//!
//! Postcondition (both builders, for inputs with at least 3 distinct points)
//! - No duplicate vertices, counterclockwise in y-up coordinates, every input
//!   point on or inside the polygon.
//! - Degenerate inputs give degenerate hulls: the quick hull returns inputs of
//!   fewer than 3 points unchanged, and collinear inputs collapse to their two
//!   extreme points.
//!
//! Code cross-refs: `calipers::Sweep`, `geom2::{cross, relative_ccw}`

mod angle_scan;
mod quick;

pub use angle_scan::{angle_scan_hull, angle_scan_hull_with_cfg};
pub use quick::quick_hull;

use crate::geom2::{cross, GeomCfg, Vec2};

/// Hull builder selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HullAlgo {
    #[default]
    Quick,
    AngleScan,
}

/// Build the convex hull with the selected algorithm.
pub fn convex_hull(points: &[Vec2], algo: HullAlgo) -> Vec<Vec2> {
    convex_hull_with_cfg(points, algo, GeomCfg::default())
}

/// As `convex_hull`, with explicit tolerances (only the angle scan uses them).
pub fn convex_hull_with_cfg(points: &[Vec2], algo: HullAlgo, cfg: GeomCfg) -> Vec<Vec2> {
    match algo {
        HullAlgo::Quick => quick_hull(points),
        HullAlgo::AngleScan => angle_scan_hull_with_cfg(points, cfg),
    }
}

/// Every consecutive (cyclic) triple turns left or goes straight, within an
/// absolute cross-product slack `eps`.
///
/// Hulls with fewer than 3 vertices count as convex.
pub fn is_convex_ccw(hull: &[Vec2], eps: f64) -> bool {
    let n = hull.len();
    if n < 3 {
        return true;
    }
    (0..n).all(|i| cross(hull[i], hull[(i + 1) % n], hull[(i + 2) % n]) >= -eps)
}

/// Whether `p` lies inside or on the counterclockwise convex polygon `hull`,
/// with an absolute cross-product slack `eps`.
///
/// Degenerate hulls: a single point contains only itself (within `eps` per
/// axis); a segment contains the points on it.
pub fn hull_contains(hull: &[Vec2], p: Vec2, eps: f64) -> bool {
    match hull.len() {
        0 => false,
        1 => (hull[0] - p).amax() <= eps,
        2 => {
            let (a, b) = (hull[0], hull[1]);
            let on_line = cross(a, b, p).abs() <= eps;
            let t = (p - a).dot(&(b - a));
            on_line && t >= -eps && t <= (b - a).norm_squared() + eps
        }
        n => (0..n).all(|i| cross(hull[i], hull[(i + 1) % n], p) >= -eps),
    }
}

#[cfg(test)]
mod tests;
