//! Quick hull: divide and conquer around the farthest-x baseline.
//!
//! Only points strictly outside a segment (signed distance `> 0.0`, no
//! epsilon) are carried into the recursion, so collinear and boundary points
//! never become vertices unless they are the distal point of some segment.
//!
//! Complexity: expected O(n log n), O(n²) on adversarial inputs. Recursion
//! depth is bounded by the hull size, so huge near-convex inputs can get deep.

use crate::geom2::{cross, Vec2};

/// Directed segment `p0 → p1`.
#[derive(Clone, Copy, Debug)]
struct Segment {
    p0: Vec2,
    p1: Vec2,
}

impl Segment {
    #[inline]
    fn reversed(self) -> Self {
        Segment {
            p0: self.p1,
            p1: self.p0,
        }
    }

    /// Unnormalized distance of `p` to the right of `p0 → p1` (positive
    /// outside when the hull is walked counterclockwise).
    #[inline]
    fn outside_distance(&self, p: Vec2) -> f64 {
        -cross(self.p0, self.p1, p)
    }
}

/// Convex hull in counterclockwise order (y up), starting at the minimum-x
/// point (ties: minimum y).
///
/// Fewer than 3 points are returned unchanged; exactly 3 still run through the
/// algorithm so the winding is normalized. All-identical input collapses to a
/// single point.
pub fn quick_hull(points: &[Vec2]) -> Vec<Vec2> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let baseline = min_max_x(points);
    if baseline.p0 == baseline.p1 {
        return vec![baseline.p0];
    }
    let mut hull = Vec::new();
    add_segments(&mut hull, baseline, points);
    add_segments(&mut hull, baseline.reversed(), points);
    hull
}

/// Leftmost (ties: lowest) to rightmost (ties: highest) point.
fn min_max_x(points: &[Vec2]) -> Segment {
    let mut lo = points[0];
    let mut hi = points[0];
    for &p in &points[1..] {
        if p.x < lo.x || (p.x == lo.x && p.y < lo.y) {
            lo = p;
        }
        if p.x > hi.x || (p.x == hi.x && p.y > hi.y) {
            hi = p;
        }
    }
    Segment { p0: lo, p1: hi }
}

/// Points strictly outside `seg`, plus the first one at maximal distance.
fn distal_points(seg: Segment, points: &[Vec2]) -> (Vec<Vec2>, Option<Vec2>) {
    let mut outer = Vec::new();
    let mut distal = None;
    let mut max_distance = 0.0;
    for &p in points {
        let d = seg.outside_distance(p);
        if d > 0.0 {
            outer.push(p);
            if d > max_distance {
                max_distance = d;
                distal = Some(p);
            }
        }
    }
    (outer, distal)
}

fn add_segments(hull: &mut Vec<Vec2>, seg: Segment, points: &[Vec2]) {
    let (outer, distal) = distal_points(seg, points);
    match distal {
        None => hull.push(seg.p0),
        Some(far) => {
            add_segments(hull, Segment { p0: seg.p0, p1: far }, &outer);
            add_segments(hull, Segment { p0: far, p1: seg.p1 }, &outer);
        }
    }
}
