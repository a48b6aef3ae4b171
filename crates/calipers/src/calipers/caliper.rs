//! A single caliper: a directed support line through one hull vertex.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::geom2::{angle_to_x, normalize_angle, GeomCfg, Vec2};

/// Support line through `hull[vertex_index]` at angle `orientation`.
///
/// Invariants:
/// - `orientation ∈ [0, 2π)`.
/// - `vertex`, `slope`, `intercept` and `angle_to_next_point` always match the
///   current `(vertex_index, orientation)`; `recalc` runs after every change.
/// - `angle_to_next_point ∈ [0, 2π)` is how far the line must turn
///   counterclockwise to lie along the edge `hull[i] → hull[i + 1]`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Caliper<'h> {
    hull: &'h [Vec2],
    vertex_index: usize,
    orientation: f64,
    cfg: GeomCfg,
    vertex: Vec2,
    slope: f64,
    intercept: f64,
    angle_to_next_point: f64,
}

impl<'h> Caliper<'h> {
    /// `hull` must be non-empty and `vertex_index < hull.len()`.
    pub(crate) fn new(hull: &'h [Vec2], vertex_index: usize, orientation: f64, cfg: GeomCfg) -> Self {
        let mut c = Self {
            hull,
            vertex_index,
            orientation: normalize_angle(orientation),
            cfg,
            vertex: hull[vertex_index],
            slope: 0.0,
            intercept: 0.0,
            angle_to_next_point: 0.0,
        };
        c.recalc();
        c
    }

    fn recalc(&mut self) {
        let n = self.hull.len();
        self.vertex = self.hull[self.vertex_index];
        let next = self.hull[(self.vertex_index + 1) % n];
        self.slope = self.orientation.tan();
        self.intercept = self.vertex.y - self.slope * self.vertex.x;

        let edge = normalize_angle(angle_to_x(self.vertex, next));
        let mut remaining = normalize_angle(edge - self.orientation);
        // an edge parallel to the line may land just below a full turn
        if remaining > TAU - self.cfg.eps_rotation {
            remaining = 0.0;
        }
        self.angle_to_next_point = remaining;
    }

    #[inline]
    pub(crate) fn angle_to_next_point(&self) -> f64 {
        self.angle_to_next_point
    }

    pub(crate) fn is_horizontal(&self) -> bool {
        let o = self.orientation;
        let eps = self.cfg.eps_axis;
        o.abs() < eps || (o - PI).abs() < eps || (o - TAU).abs() < eps
    }

    pub(crate) fn is_vertical(&self) -> bool {
        let o = self.orientation;
        let eps = self.cfg.eps_axis;
        (o - FRAC_PI_2).abs() < eps || (o - 3.0 * FRAC_PI_2).abs() < eps
    }

    /// Intersection with a perpendicular caliper.
    ///
    /// Axis-aligned lines take the explicit branch; otherwise both slope
    /// forms `y = m x + c` are solved for `x`.
    pub(crate) fn intersect_with(&self, other: &Caliper<'_>) -> Vec2 {
        if self.is_vertical() {
            Vec2::new(self.vertex.x, other.vertex.y)
        } else if self.is_horizontal() {
            Vec2::new(other.vertex.x, self.vertex.y)
        } else {
            let x = (other.intercept - self.intercept) / (self.slope - other.slope);
            Vec2::new(x, self.slope * x + self.intercept)
        }
    }

    /// Turn counterclockwise by `angle`. If that reaches the next edge (within
    /// `eps_rotation`) the caliper moves on to the next vertex and returns the
    /// index it left.
    pub(crate) fn rotate_by(&mut self, angle: f64) -> Option<usize> {
        let left = if (self.angle_to_next_point - angle).abs() < self.cfg.eps_rotation {
            let left = self.vertex_index;
            self.vertex_index = (left + 1) % self.hull.len();
            Some(left)
        } else {
            None
        };
        self.orientation = normalize_angle(self.orientation + angle);
        self.recalc();
        left
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn unit_square() -> Vec<Vec2> {
        vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ]
    }

    #[test]
    fn angle_to_next_edge() {
        let hull = unit_square();
        // at (1,0) facing 0°, the next edge points up: a quarter turn away
        let c = Caliper::new(&hull, 1, 0.0, GeomCfg::default());
        assert!((c.angle_to_next_point() - FRAC_PI_2).abs() < 1e-12);
        // at (0,0) facing 0°, the next edge is already parallel
        let c = Caliper::new(&hull, 0, 0.0, GeomCfg::default());
        assert_eq!(c.angle_to_next_point(), 0.0);
        // just past parallel counts as parallel, not as a full turn
        let c = Caliper::new(&hull, 0, 1e-12, GeomCfg::default());
        assert_eq!(c.angle_to_next_point(), 0.0);
    }

    #[test]
    fn rotation_advances_only_on_reaching_the_edge() {
        let hull = unit_square();
        let mut c = Caliper::new(&hull, 1, 0.0, GeomCfg::default());
        assert_eq!(c.rotate_by(0.25), None);
        assert_eq!(c.vertex_index, 1);
        let rest = c.angle_to_next_point();
        assert_eq!(c.rotate_by(rest), Some(1));
        assert_eq!(c.vertex_index, 2);
        assert!((c.orientation - FRAC_PI_2).abs() < 1e-12);
        assert!(c.is_vertical());
    }

    #[test]
    fn orientation_wraps_around() {
        let hull = unit_square();
        let mut c = Caliper::new(&hull, 0, 1.5 * PI, GeomCfg::default());
        c.rotate_by(FRAC_PI_2);
        assert!(c.orientation < 1e-12 || c.orientation > TAU - 1e-12);
        assert!(c.is_horizontal());
        assert!(!c.is_vertical());
    }

    #[test]
    fn intersections_axis_aligned_and_general() {
        let hull = unit_square();
        let cfg = GeomCfg::default();
        let right = Caliper::new(&hull, 2, FRAC_PI_2, cfg);
        let top = Caliper::new(&hull, 3, PI, cfg);
        assert_eq!(right.intersect_with(&top), vector![1.0, 1.0]);
        assert_eq!(top.intersect_with(&right), vector![1.0, 1.0]);

        // lines at 45° through (1,0) and 135° through (1,1) meet at (1.5, 0.5)
        let a = Caliper::new(&hull, 1, PI / 4.0, cfg);
        let b = Caliper::new(&hull, 2, 3.0 * PI / 4.0, cfg);
        let p = a.intersect_with(&b);
        assert!((p - vector![1.5, 0.5]).norm() < 1e-12);
        let q = b.intersect_with(&a);
        assert!((p - q).norm() < 1e-12);
    }

    #[test]
    fn single_point_hull_has_zero_length_edge() {
        let hull = vec![vector![3.0, 4.0]];
        let mut c = Caliper::new(&hull, 0, 0.0, GeomCfg::default());
        assert_eq!(c.angle_to_next_point(), 0.0);
        assert_eq!(c.rotate_by(0.0), Some(0));
        assert_eq!(c.vertex_index, 0);
    }
}
