//! Basic 2D types and tolerances shared by the hull builders and the calipers.
//!
//! - `Vec2`: the point type (`nalgebra::Vector2<f64>`), compared exactly.
//! - `GeomCfg`: centralizes the epsilons for angle dedup, caliper advancement,
//!   and axis-aligned caliper detection.
//!
//! Code cross-refs: `hull::angle_scan`, `calipers::Caliper`

use nalgebra::Vector2;

/// Planar point / vector. Equality is component-wise and exact.
pub type Vec2 = Vector2<f64>;

/// Geometry configuration (tolerances).
///
/// The defaults are tuned for `f64` coordinates of moderate magnitude
/// (roughly 1e-3 ..= 1e6). Inputs at extreme scales should rescale first or
/// pass a config of their own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Two polar angles (radians) closer than this count as the same ray in
    /// the angle-scan dedup pass.
    pub eps_angle: f64,
    /// A caliper whose remaining angle is within this of the rotation step
    /// advances to the next hull vertex.
    pub eps_rotation: f64,
    /// Orientation slack (radians) under which a caliper is treated as exactly
    /// horizontal or vertical when intersecting.
    pub eps_axis: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_angle: 1e-12,
            eps_rotation: 1e-9,
            eps_axis: 1e-9,
        }
    }
}
