//! Rotating calipers: edge-aligned bounding rectangles of a convex hull.
//!
//! Purpose
//! - Enumerate the bounding rectangles with one side flush against a hull
//!   edge, and pick the best one under a caller-chosen criterion (minimum
//!   area, minimum width, aspect ratio, ...).
//!
//! Model
//! - Four calipers start on the axis-aligned extremes (right, top, left,
//!   bottom) facing up, left, down and right. They turn together,
//!   counterclockwise, always by the smallest angle any of them needs to lie
//!   flat on its next edge. The rectangle after each turn is a candidate.
//! - The initial axis-aligned box is not a candidate by itself; a hull with an
//!   axis-aligned edge still produces it at some later stop.
//! - Degenerate hulls work: a single point yields one zero-size rectangle, a
//!   segment yields zero-width rectangles along it.
//!
//! Why this design
//! - `Sweep` is an `Iterator`, so "all" is `collect()` and "best" is a fold;
//!   callers can stop early without paying for the full sweep.
//! - Predicates are plain `FnMut(candidate, best) -> bool`; `criteria` has the
//!   common ones.
//!
//! Code cross-refs: `hull::convex_hull`, `rect::OrientedRectangle`

mod caliper;
pub mod criteria;
mod sweep;

pub use criteria::Criterion;
pub use sweep::{Sweep, SweepState};

use crate::geom2::{GeomCfg, Vec2};
use crate::hull::{angle_scan_hull, quick_hull};
use crate::rect::OrientedRectangle;

/// Best candidate of a full sweep over `hull`.
///
/// `is_better(candidate, best)` decides replacement; on ties the earlier
/// candidate stays. `None` only for an empty hull.
pub fn best_oriented_rectangle<F>(hull: &[Vec2], is_better: F) -> Option<OrientedRectangle>
where
    F: FnMut(&OrientedRectangle, &OrientedRectangle) -> bool,
{
    best_of(Sweep::new(hull), is_better)
}

/// As `best_oriented_rectangle`, with explicit tolerances.
pub fn best_oriented_rectangle_with_cfg<F>(
    hull: &[Vec2],
    cfg: GeomCfg,
    is_better: F,
) -> Option<OrientedRectangle>
where
    F: FnMut(&OrientedRectangle, &OrientedRectangle) -> bool,
{
    best_of(Sweep::with_cfg(hull, cfg), is_better)
}

/// Quick hull of `points`, then `best_oriented_rectangle`.
pub fn best_oriented_rectangle_from_points<F>(
    points: &[Vec2],
    is_better: F,
) -> Option<OrientedRectangle>
where
    F: FnMut(&OrientedRectangle, &OrientedRectangle) -> bool,
{
    let hull = quick_hull(points);
    best_oriented_rectangle(&hull, is_better)
}

/// Every candidate of a full sweep, in sweep order (`hull.len()` of them).
pub fn all_oriented_rectangles(hull: &[Vec2]) -> Vec<OrientedRectangle> {
    Sweep::new(hull).collect()
}

/// Angle-scan hull of `points`, then `all_oriented_rectangles`.
pub fn all_oriented_rectangles_from_points(points: &[Vec2]) -> Vec<OrientedRectangle> {
    let hull = angle_scan_hull(points);
    all_oriented_rectangles(&hull)
}

fn best_of<I, F>(mut candidates: I, mut is_better: F) -> Option<OrientedRectangle>
where
    I: Iterator<Item = OrientedRectangle>,
    F: FnMut(&OrientedRectangle, &OrientedRectangle) -> bool,
{
    let first = candidates.next()?;
    Some(candidates.fold(first, |best, c| {
        if is_better(&c, &best) {
            c
        } else {
            best
        }
    }))
}
