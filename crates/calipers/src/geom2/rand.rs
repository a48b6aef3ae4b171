//! Point-set samplers for exercising the hull builders and calipers.
//!
//! Purpose
//! - Reproducible point clouds of the shapes that stress the algorithms:
//!   uniform points in an ellipse, the same snapped to a raster (many exact
//!   collinear and duplicate points), near-square quadrilaterals for edge
//!   alignment, and a fixed 10-vertex convex polygon.
//!
//! Model
//! - Random sets draw uniformly in the `width × height` box and reject points
//!   outside the inscribed ellipse, then shift by `margin`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `hull::convex_hull`, `calipers::all_oriented_rectangles`

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Vec2;
use crate::rect::OrientedRectangle;

/// Which family of points to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointSet {
    /// Uniform inside the ellipse inscribed in the sampling box.
    Random,
    /// Like `Random`, coordinates snapped down to multiples of `raster`.
    RandomInRaster { raster: u32 },
    /// Four corners of a square, each coordinate shifted by one bit of `index`.
    AlignmentTest { index: u8 },
    /// Fixed 10-vertex convex polygon.
    Fixture,
}

/// Sampling box and size for the random families.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub count: usize,
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            count: 10,
            width: 640.0,
            height: 480.0,
            margin: 80.0,
        }
    }
}

/// Side length and per-bit corner shift of the alignment-test square.
pub const ALIGNMENT_SIZE: f64 = 200.0;
pub const ALIGNMENT_SHIFT: f64 = 40.0;

/// Error type for sampler parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    InvalidParams { reason: String },
}

impl SampleError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sampler params: {reason}"),
        }
    }
}

impl std::error::Error for SampleError {}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer on both halves.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a point set of the requested family.
///
/// `AlignmentTest` and `Fixture` ignore `cfg.count` and the token.
pub fn draw_points(set: PointSet, cfg: SampleCfg, tok: ReplayToken) -> Result<Vec<Vec2>, SampleError> {
    match set {
        PointSet::Random => random_in_ellipse(cfg, None, tok),
        PointSet::RandomInRaster { raster } => {
            if raster == 0 {
                return Err(SampleError::invalid("raster must be > 0"));
            }
            random_in_ellipse(cfg, Some(raster), tok)
        }
        PointSet::AlignmentTest { index } => Ok(alignment_test(index, cfg.margin).0),
        PointSet::Fixture => Ok(fixture_polygon()),
    }
}

fn random_in_ellipse(
    cfg: SampleCfg,
    raster: Option<u32>,
    tok: ReplayToken,
) -> Result<Vec<Vec2>, SampleError> {
    if cfg.count == 0 {
        return Err(SampleError::invalid("count must be > 0"));
    }
    if !(cfg.width.is_finite() && cfg.height.is_finite()) || cfg.width <= 0.0 || cfg.height <= 0.0
    {
        return Err(SampleError::invalid("width and height must be finite and > 0"));
    }
    let mut rng = tok.to_std_rng();
    let (w, h) = (cfg.width, cfg.height);
    let (rx, ry) = (0.5 * w, 0.5 * h);
    let mut out = Vec::with_capacity(cfg.count);
    while out.len() < cfg.count {
        let x = w * rng.gen::<f64>();
        let y = h * rng.gen::<f64>();
        let ex = (x - rx) / rx;
        let ey = (y - ry) / ry;
        if ex * ex + ey * ey > 1.0 {
            continue;
        }
        let (x, y) = match raster {
            Some(r) => {
                let r = f64::from(r);
                ((x / r).floor() * r, (y / r).floor() * r)
            }
            None => (x, y),
        };
        out.push(Vec2::new(x + cfg.margin, y + cfg.margin));
    }
    Ok(out)
}

/// Quadrilateral near a square: bit `2k` of `index` shifts corner `k` in x,
/// bit `2k + 1` in y. Returns the points and the unshifted base square.
///
/// Index 0 is the exact axis-aligned square.
pub fn alignment_test(index: u8, margin: f64) -> (Vec<Vec2>, OrientedRectangle) {
    let shift = |bit: u8| {
        if index & (1 << bit) != 0 {
            ALIGNMENT_SHIFT
        } else {
            0.0
        }
    };
    let m = 2.0 * margin;
    let s = ALIGNMENT_SIZE;
    let points = vec![
        Vec2::new(m + shift(0), m + shift(1)),
        Vec2::new(s + m + shift(2), m + shift(3)),
        Vec2::new(s + m + shift(4), s + m + shift(5)),
        Vec2::new(m + shift(6), s + m + shift(7)),
    ];
    let base = OrientedRectangle::new(
        Vec2::new(m, m),
        Vec2::new(s + m, m),
        Vec2::new(s + m, s + m),
        Vec2::new(m, s + m),
    );
    (points, base)
}

/// The fixed 10-vertex convex polygon (clockwise in y-up coordinates).
pub fn fixture_polygon() -> Vec<Vec2> {
    [
        (4.0, 12.0),
        (12.0, 12.0),
        (15.0, 5.0),
        (15.0, 4.0),
        (11.0, 0.0),
        (7.0, 0.0),
        (5.0, 1.0),
        (0.0, 4.0),
        (0.0, 9.0),
        (2.0, 11.0),
    ]
    .into_iter()
    .map(|(x, y)| Vec2::new(x, y))
    .collect()
}

/// Vertices of a regular `n`-gon around the origin, counterclockwise from
/// angle `phase`.
pub fn regular_polygon(n: usize, radius: f64, phase: f64) -> Vec<Vec2> {
    let delta = std::f64::consts::TAU / n.max(1) as f64;
    (0..n)
        .map(|k| {
            let th = phase + k as f64 * delta;
            Vec2::new(radius * th.cos(), radius * th.sin())
        })
        .collect()
}
