//! 2D primitives: point type, tolerances, orientation predicates, orderings.
//!
//! Purpose
//! - Provide the stateless building blocks the hull builders and the
//!   rotating calipers share: `Vec2`, `GeomCfg`, cross products and turn
//!   tests, polar-angle and colexicographic orderings.
//! - Keep everything pure and `Copy`; no module-level state.
//!
//! Conventions
//! - y points up; "left turn" means counterclockwise. In screen coordinates
//!   (y down) every statement about winding flips.
//! - Angles are radians; `normalize_angle` maps into `[0, 2π)`.
//!
//! Code cross-refs: `hull`, `calipers`, `rect`

pub mod ordering;
pub mod rand;
mod types;
mod util;

pub use ordering::{cmp_angle_about, cmp_yx, compose, min_by_cmp};
pub use types::{GeomCfg, Vec2};
pub use util::{angle_to_x, cross, dist_sq, forms_left_turn, normalize_angle, relative_ccw};
