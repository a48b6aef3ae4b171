//! Angle-scan hull (Graham scan family).
//!
//! Sort by polar angle around the lowest point, keep only the farthest point
//! on each ray, then one stack pass that accepts left-or-straight turns.

use std::cmp::Ordering;

use crate::geom2::{
    angle_to_x, cmp_angle_about, cmp_yx, compose, dist_sq, min_by_cmp, relative_ccw, GeomCfg,
    Vec2,
};

/// Convex hull in counterclockwise order (y up), starting at the
/// colexicographic minimum (lowest y, then lowest x).
///
/// Empty input gives an empty hull and all-identical input a single point.
/// Uses `GeomCfg::default()` tolerances.
pub fn angle_scan_hull(points: &[Vec2]) -> Vec<Vec2> {
    angle_scan_hull_with_cfg(points, GeomCfg::default())
}

/// As `angle_scan_hull`, with an explicit angle-dedup tolerance
/// (`cfg.eps_angle`).
pub fn angle_scan_hull_with_cfg(points: &[Vec2], cfg: GeomCfg) -> Vec<Vec2> {
    let Some(pivot) = min_by_cmp(points, cmp_yx) else {
        return Vec::new();
    };
    let mut sorted = points.to_vec();
    let by_angle = |a: &Vec2, b: &Vec2| cmp_angle_about(pivot, a, b);
    let cmps: [&dyn Fn(&Vec2, &Vec2) -> Ordering; 2] = [&by_angle, &cmp_yx];
    let cmp = compose(&cmps);
    sorted.sort_by(|a, b| cmp(a, b));

    let unique = farthest_per_angle(&sorted, cfg.eps_angle);
    if unique.len() <= 3 {
        return unique;
    }
    scan(&unique)
}

/// Collapse runs of (nearly) equal polar angle to their farthest point.
///
/// `sorted[0]` must be the pivot. Copies of the pivot are dropped. A ray is
/// anchored at the angle of the point that opened it, so a run of small
/// steps cannot drift further than `eps` from that angle.
fn farthest_per_angle(sorted: &[Vec2], eps: f64) -> Vec<Vec2> {
    let pivot = sorted[0];
    let mut out = vec![pivot];
    // larger than any angle from the pivot, so the first ray always opens
    let mut ray_angle = std::f64::consts::TAU;
    // squared distance of `out.last()`
    let mut kept_dist_sq = f64::MAX;
    for &p in &sorted[1..] {
        let d = dist_sq(pivot, p);
        if d == 0.0 {
            continue;
        }
        let angle = angle_to_x(pivot, p);
        if (angle - ray_angle).abs() > eps {
            out.push(p);
            ray_angle = angle;
            kept_dist_sq = d;
        } else if d > kept_dist_sq {
            if let Some(last) = out.last_mut() {
                *last = p;
                kept_dist_sq = d;
            }
        }
    }
    out
}

fn scan(points: &[Vec2]) -> Vec<Vec2> {
    let mut stack: Vec<Vec2> = Vec::with_capacity(points.len());
    stack.extend_from_slice(&points[..2]);
    for &p in &points[2..] {
        // keep `>= 0`; pop on right turns and straight continuations
        while stack.len() >= 2 && relative_ccw(p, stack[stack.len() - 1], stack[stack.len() - 2]) < 0
        {
            stack.pop();
        }
        stack.push(p);
    }
    stack
}
