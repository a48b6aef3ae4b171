//! Convex hulls and rotating-calipers bounding rectangles in the plane.
//!
//! Pipeline: points → `hull::convex_hull` (counterclockwise, y up) →
//! `calipers::Sweep` (edge-aligned candidates) → `best_oriented_rectangle`
//! with a predicate from `calipers::criteria`.
//!
//! API Policy
//! - No stability promise yet; `api` is the curated surface for callers
//!   (the CLI, benches, examples). Internal modules may change freely.

pub mod api;
pub mod calipers;
pub mod geom2;
pub mod hull;
pub mod rect;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{GeomCfg, Vec2};
pub use rect::OrientedRectangle;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::calipers::criteria::{max_ratio, min_area, min_perimeter, min_ratio, min_width};
    pub use crate::calipers::{
        all_oriented_rectangles, all_oriented_rectangles_from_points, best_oriented_rectangle,
        best_oriented_rectangle_from_points, Criterion, Sweep,
    };
    pub use crate::geom2::{GeomCfg, Vec2};
    pub use crate::hull::{convex_hull, HullAlgo};
    pub use crate::rect::OrientedRectangle;
}

