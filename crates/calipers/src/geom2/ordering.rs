//! Point orderings used while sorting hull input.
//!
//! All comparers are plain functions; context (the polar center) is an explicit
//! argument and chaining is done with `compose`.

use std::cmp::Ordering;

use super::types::Vec2;
use super::util::{angle_to_x, normalize_angle};

/// Colexicographic order: by `y`, then by `x`.
///
/// NaN coordinates compare as equal.
#[inline]
pub fn cmp_yx(a: &Vec2, b: &Vec2) -> Ordering {
    a.y.partial_cmp(&b.y)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
}

/// Order by the polar angle of `center → p`, normalized into `[0, 2π)`.
///
/// `center` itself has angle `0`.
#[inline]
pub fn cmp_angle_about(center: Vec2, a: &Vec2, b: &Vec2) -> Ordering {
    let aa = normalize_angle(angle_to_x(center, *a));
    let bb = normalize_angle(angle_to_x(center, *b));
    aa.partial_cmp(&bb).unwrap_or(Ordering::Equal)
}

/// Chain comparers in priority order: the first non-`Equal` result wins.
pub fn compose<'a, T>(
    cmps: &'a [&'a dyn Fn(&T, &T) -> Ordering],
) -> impl Fn(&T, &T) -> Ordering + 'a {
    move |a, b| {
        cmps.iter()
            .map(|cmp| cmp(a, b))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

/// First minimum of `items` under `cmp`; `None` when empty.
#[inline]
pub fn min_by_cmp<T: Copy>(items: &[T], cmp: impl Fn(&T, &T) -> Ordering) -> Option<T> {
    items.iter().copied().min_by(|a, b| cmp(a, b))
}
