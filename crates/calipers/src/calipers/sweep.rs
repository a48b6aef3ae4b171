//! The rotating sweep: four calipers turning together around a hull.

use std::f64::consts::{FRAC_PI_2, PI};
use std::iter::FusedIterator;

use super::caliper::Caliper;
use crate::geom2::{GeomCfg, Vec2};
use crate::rect::OrientedRectangle;

/// Where a sweep is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepState {
    /// Calipers sit at the axis-aligned extremes; nothing yielded yet.
    Initialized,
    /// At least one rotation happened and vertices remain unvisited.
    Rotated,
    /// No further candidates.
    Done,
}

/// Lazy iterator over the edge-aligned bounding rectangles of a
/// counterclockwise convex hull.
///
/// Each step turns all four calipers by the smallest angle any of them needs
/// to lie flat on its next edge. Every caliper that reaches its edge moves to
/// the next vertex and marks the vertex it left as visited. One rectangle is
/// yielded per newly visited vertex, so a stop where several calipers align
/// at once repeats the same rectangle, and a full sweep yields exactly
/// `hull.len()` rectangles.
///
/// The sweep ends when every vertex was visited, or early if a stop visits
/// nothing new.
#[derive(Clone, Debug)]
pub struct Sweep<'h> {
    calipers: Option<[Caliper<'h>; 4]>,
    visited: Vec<bool>,
    unvisited: usize,
    state: SweepState,
    current: OrientedRectangle,
    repeat: usize,
}

impl<'h> Sweep<'h> {
    /// Sweep with `GeomCfg::default()` tolerances.
    pub fn new(hull: &'h [Vec2]) -> Self {
        Self::with_cfg(hull, GeomCfg::default())
    }

    /// `hull` must be convex and counterclockwise (y up) without duplicate
    /// vertices, as produced by `hull::convex_hull`. An empty hull yields
    /// nothing.
    pub fn with_cfg(hull: &'h [Vec2], cfg: GeomCfg) -> Self {
        let calipers = if hull.is_empty() {
            None
        } else {
            Some([
                Caliper::new(hull, extreme_index(hull, upper_right), FRAC_PI_2, cfg),
                Caliper::new(hull, extreme_index(hull, upper_left), PI, cfg),
                Caliper::new(hull, extreme_index(hull, lower_left), 3.0 * FRAC_PI_2, cfg),
                Caliper::new(hull, extreme_index(hull, lower_right), 0.0, cfg),
            ])
        };
        let state = if calipers.is_some() {
            SweepState::Initialized
        } else {
            SweepState::Done
        };
        Self {
            calipers,
            visited: vec![false; hull.len()],
            unvisited: hull.len(),
            state,
            current: OrientedRectangle::default(),
            repeat: 0,
        }
    }

    pub fn state(&self) -> SweepState {
        self.state
    }

    /// Turn every caliper by the smallest pending angle; returns how many
    /// vertices were visited for the first time.
    fn rotate_by_smallest_angle(&mut self) -> usize {
        let Some(calipers) = self.calipers.as_mut() else {
            return 0;
        };
        let step = calipers
            .iter()
            .map(|c| c.angle_to_next_point())
            .fold(f64::INFINITY, f64::min);
        let mut fresh = 0;
        for c in calipers.iter_mut() {
            if let Some(left) = c.rotate_by(step) {
                if !self.visited[left] {
                    self.visited[left] = true;
                    self.unvisited -= 1;
                    fresh += 1;
                }
            }
        }
        fresh
    }

    /// Corners are the pairwise intersections of neighbouring calipers, in
    /// the order `(3∩0, 0∩1, 1∩2, 2∩3)`.
    fn rectangle(&self) -> Option<OrientedRectangle> {
        let [c0, c1, c2, c3] = self.calipers.as_ref()?;
        Some(OrientedRectangle::new(
            c3.intersect_with(c0),
            c0.intersect_with(c1),
            c1.intersect_with(c2),
            c2.intersect_with(c3),
        ))
    }
}

impl Iterator for Sweep<'_> {
    type Item = OrientedRectangle;

    fn next(&mut self) -> Option<OrientedRectangle> {
        if self.repeat > 0 {
            self.repeat -= 1;
            return Some(self.current);
        }
        if self.state == SweepState::Done {
            return None;
        }
        let fresh = self.rotate_by_smallest_angle();
        let rect = match self.rectangle() {
            Some(rect) if fresh > 0 => rect,
            _ => {
                self.state = SweepState::Done;
                return None;
            }
        };
        self.state = if self.unvisited == 0 {
            SweepState::Done
        } else {
            SweepState::Rotated
        };
        self.current = rect;
        self.repeat = fresh - 1;
        Some(rect)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            SweepState::Done => (self.repeat, Some(self.repeat)),
            _ => (self.repeat, Some(self.repeat + self.unvisited)),
        }
    }
}

impl FusedIterator for Sweep<'_> {}

/// Index of the first vertex no other vertex beats.
fn extreme_index(hull: &[Vec2], beats: fn(Vec2, Vec2) -> bool) -> usize {
    let mut best = 0;
    for (i, &p) in hull.iter().enumerate().skip(1) {
        if beats(p, hull[best]) {
            best = i;
        }
    }
    best
}

fn upper_right(p: Vec2, q: Vec2) -> bool {
    p.x > q.x || (p.x == q.x && p.y > q.y)
}

fn upper_left(p: Vec2, q: Vec2) -> bool {
    p.y > q.y || (p.y == q.y && p.x < q.x)
}

fn lower_left(p: Vec2, q: Vec2) -> bool {
    p.x < q.x || (p.x == q.x && p.y < q.y)
}

fn lower_right(p: Vec2, q: Vec2) -> bool {
    p.y < q.y || (p.y == q.y && p.x > q.x)
}
