use std::f64::consts::TAU;

use super::types::Vec2;

/// Angle of the ray `p0 → p1` against the x-axis, in `(-π, π]`.
///
/// Coincident points give `0.0` (`atan2(0, 0)`).
#[inline]
pub fn angle_to_x(p0: Vec2, p1: Vec2) -> f64 {
    let d = p1 - p0;
    d.y.atan2(d.x)
}

/// Map any finite angle into `[0, 2π)`.
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid may round up to exactly TAU for tiny negative inputs
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// z-component of `(b - a) × (c - a)`.
///
/// Positive when `a → b → c` turns left (counterclockwise, y up), negative
/// for a right turn, zero when collinear.
#[inline]
pub fn cross(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Strict left turn `a → b → c`.
#[inline]
pub fn forms_left_turn(a: Vec2, b: Vec2, c: Vec2) -> bool {
    cross(a, b, c) > 0.0
}

/// Squared euclidean distance.
#[inline]
pub fn dist_sq(a: Vec2, b: Vec2) -> f64 {
    (b - a).norm_squared()
}

/// Side of `p` relative to the directed segment `p1 → p2`.
///
/// Same classification as `java.awt.geom.Line2D.relativeCCW`, mirrored into
/// y-up coordinates:
/// - `1` if `p` lies to the right of `p1 → p2`; `-1` if it lies to the left.
/// - For collinear `p`: `-1` if it lies before `p1` (behind the segment
///   start), `1` if it lies beyond `p2`, `0` if it lies on the segment.
///
/// In the angle scan this is called as `relative_ccw(p, last, second_last)`,
/// so `>= 0` reads as "second_last → last → p does not turn right".
pub fn relative_ccw(p: Vec2, p1: Vec2, p2: Vec2) -> i8 {
    let d = p2 - p1;
    let mut q = p - p1;
    let mut ccw = q.x * d.y - q.y * d.x;
    if ccw == 0.0 {
        // Collinear: classify by projection onto the segment.
        ccw = q.dot(&d);
        if ccw > 0.0 {
            q -= d;
            ccw = q.dot(&d);
            if ccw < 0.0 {
                ccw = 0.0;
            }
        }
    }
    if ccw < 0.0 {
        -1
    } else if ccw > 0.0 {
        1
    } else {
        0
    }
}
