//! Ready-made "is better" predicates for `best_oriented_rectangle`.
//!
//! Each takes `(candidate, current_best)` and answers whether the candidate
//! should replace the current best. Ties keep the earlier rectangle.

use crate::rect::OrientedRectangle;

/// Relative tolerance under which two side lengths count as equal.
pub const SIDE_TIE_REL: f64 = 1e-9;

/// Smallest area.
pub fn min_area(candidate: &OrientedRectangle, best: &OrientedRectangle) -> bool {
    candidate.area_squared() < best.area_squared()
}

/// Smallest perimeter.
pub fn min_perimeter(candidate: &OrientedRectangle, best: &OrientedRectangle) -> bool {
    candidate.perimeter() < best.perimeter()
}

/// Smallest short side (the minimum-width strip); near-equal short sides fall
/// back to the smaller long side.
pub fn min_width(candidate: &OrientedRectangle, best: &OrientedRectangle) -> bool {
    let a = candidate.min_side_squared();
    let b = best.min_side_squared();
    if (a - b).abs() <= SIDE_TIE_REL * a.max(b) {
        candidate.max_side_squared() < best.max_side_squared()
    } else {
        a < b
    }
}

/// Most elongated (smallest short/long ratio).
pub fn min_ratio(candidate: &OrientedRectangle, best: &OrientedRectangle) -> bool {
    candidate.ratio_squared() < best.ratio_squared()
}

/// Closest to a square (largest short/long ratio).
pub fn max_ratio(candidate: &OrientedRectangle, best: &OrientedRectangle) -> bool {
    candidate.ratio_squared() > best.ratio_squared()
}

/// Named selection criterion, for callers that pick one at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Criterion {
    MinArea,
    MinPerimeter,
    MinWidth,
    MinRatio,
    MaxRatio,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::MinArea,
        Criterion::MinPerimeter,
        Criterion::MinWidth,
        Criterion::MinRatio,
        Criterion::MaxRatio,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Criterion::MinArea => "min-area",
            Criterion::MinPerimeter => "min-perimeter",
            Criterion::MinWidth => "min-width",
            Criterion::MinRatio => "min-ratio",
            Criterion::MaxRatio => "max-ratio",
        }
    }

    pub fn predicate(self) -> fn(&OrientedRectangle, &OrientedRectangle) -> bool {
        match self {
            Criterion::MinArea => min_area,
            Criterion::MinPerimeter => min_perimeter,
            Criterion::MinWidth => min_width,
            Criterion::MinRatio => min_ratio,
            Criterion::MaxRatio => max_ratio,
        }
    }

    pub fn is_better(self, candidate: &OrientedRectangle, best: &OrientedRectangle) -> bool {
        (self.predicate())(candidate, best)
    }
}
