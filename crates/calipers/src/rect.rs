//! Oriented (arbitrarily rotated) rectangle given by its four corners.
//!
//! Side lengths are stored squared; every accessor without `_squared` in its
//! name takes one square root on demand.

use crate::geom2::{cross, Vec2};

/// Rectangle with corners `v0 → v1 → v2 → v3` in cyclic order.
///
/// Invariants:
/// - `width_squared = |v0 - v1|²`, `height_squared = |v1 - v2|²`, fixed at
///   construction.
/// - Immutable; all derived quantities are non-negative.
/// - Degenerate (zero-width or zero-height) rectangles are representable;
///   their `ratio` is `NaN` when both sides vanish.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientedRectangle {
    v: [Vec2; 4],
    width_squared: f64,
    height_squared: f64,
}

impl Default for OrientedRectangle {
    /// All four corners at the origin.
    fn default() -> Self {
        Self::new(Vec2::zeros(), Vec2::zeros(), Vec2::zeros(), Vec2::zeros())
    }
}

impl OrientedRectangle {
    pub fn new(v0: Vec2, v1: Vec2, v2: Vec2, v3: Vec2) -> Self {
        Self {
            v: [v0, v1, v2, v3],
            width_squared: (v0 - v1).norm_squared(),
            height_squared: (v1 - v2).norm_squared(),
        }
    }

    #[inline]
    pub fn vertices(&self) -> [Vec2; 4] {
        self.v
    }
    #[inline]
    pub fn width_squared(&self) -> f64 {
        self.width_squared
    }
    #[inline]
    pub fn height_squared(&self) -> f64 {
        self.height_squared
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.width_squared.sqrt()
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.height_squared.sqrt()
    }
    #[inline]
    pub fn area_squared(&self) -> f64 {
        self.width_squared * self.height_squared
    }
    #[inline]
    pub fn area(&self) -> f64 {
        self.area_squared().sqrt()
    }
    #[inline]
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width() + self.height())
    }
    #[inline]
    pub fn min_side_squared(&self) -> f64 {
        self.width_squared.min(self.height_squared)
    }
    #[inline]
    pub fn max_side_squared(&self) -> f64 {
        self.width_squared.max(self.height_squared)
    }
    #[inline]
    pub fn min_side(&self) -> f64 {
        self.min_side_squared().sqrt()
    }
    #[inline]
    pub fn max_side(&self) -> f64 {
        self.max_side_squared().sqrt()
    }
    /// `min_side² / max_side²`, in `(0, 1]` for non-degenerate rectangles.
    #[inline]
    pub fn ratio_squared(&self) -> f64 {
        self.min_side_squared() / self.max_side_squared()
    }
    /// Aspect ratio `min_side / max_side`; 1 for a square.
    #[inline]
    pub fn ratio(&self) -> f64 {
        self.ratio_squared().sqrt()
    }

    /// Midpoint of the diagonal `v0 – v2`.
    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.v[0] + self.v[2]) * 0.5
    }

    /// Whether `p` lies inside or on the rectangle, allowing an absolute slack
    /// of `eps` (in length units) outside each side.
    ///
    /// Works for either winding. Degenerate rectangles contain the points of
    /// their segment (or point) within `eps`.
    pub fn contains_eps(&self, p: Vec2, eps: f64) -> bool {
        let o = self.v[1];
        let u = self.v[0] - o;
        let w = self.v[2] - o;
        let q = p - o;
        let within = |axis: Vec2, len_sq: f64| {
            if len_sq == 0.0 {
                return true;
            }
            let len = len_sq.sqrt();
            let t = q.dot(&axis) / len;
            t >= -eps && t <= len + eps
        };
        let inside = within(u, self.width_squared) && within(w, self.height_squared);
        if self.width_squared == 0.0 && self.height_squared == 0.0 {
            return q.norm() <= eps;
        }
        if self.width_squared == 0.0 || self.height_squared == 0.0 {
            // segment: also bound the distance off the segment's line
            let axis = if self.width_squared == 0.0 { w } else { u };
            let off = cross(o, o + axis, p).abs() / axis.norm();
            return inside && off <= eps;
        }
        inside
    }
}
