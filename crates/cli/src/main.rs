use anyhow::{bail, Context, Result};
use calipers::api::{
    alignment_test, best_oriented_rectangle_with_cfg, convex_hull_with_cfg, draw_points,
    fixture_polygon, Criterion, GeomCfg, HullAlgo, OrientedRectangle, PointSet, ReplayToken,
    SampleCfg, Sweep,
};
use calipers::Vec2;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod record;

use points::{read_points, to_pairs, write_json, write_points};
use record::{Counts, RunRecord, Tolerances};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hulls and rotating-calipers rectangles for point sets")]
struct Cmd {
    /// Angle tolerance for collapsing rays in the angle-scan hull
    #[arg(long, global = true)]
    eps_angle: Option<f64>,

    /// Tolerance for a caliper reaching its next edge
    #[arg(long, global = true)]
    eps_rotation: Option<f64>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Convex hull of a point set
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = AlgoArg::Quick)]
        algo: AlgoArg,
        /// Write JSON here instead of printing `x y` lines
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Best (or all) edge-aligned bounding rectangles of a point set
    Rect {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = AlgoArg::Quick)]
        algo: AlgoArg,
        #[arg(long, value_enum, default_value_t = CriterionArg::MinArea)]
        criterion: CriterionArg,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Draw a reproducible point set (.json or .csv by extension)
    Sample {
        #[arg(long, value_enum)]
        set: SetArg,
        #[arg(long, default_value_t = 10)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Replay index; for `alignment` the 8 shift bits
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 10)]
        raster: u32,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print the library version, default tolerances, hull algorithms and criteria
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
enum AlgoArg {
    Quick,
    AngleScan,
}

impl From<AlgoArg> for HullAlgo {
    fn from(a: AlgoArg) -> Self {
        match a {
            AlgoArg::Quick => HullAlgo::Quick,
            AlgoArg::AngleScan => HullAlgo::AngleScan,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
enum CriterionArg {
    MinArea,
    MinPerimeter,
    MinWidth,
    MinRatio,
    MaxRatio,
    /// Every candidate of the sweep
    All,
}

impl CriterionArg {
    fn criterion(self) -> Option<Criterion> {
        match self {
            CriterionArg::MinArea => Some(Criterion::MinArea),
            CriterionArg::MinPerimeter => Some(Criterion::MinPerimeter),
            CriterionArg::MinWidth => Some(Criterion::MinWidth),
            CriterionArg::MinRatio => Some(Criterion::MinRatio),
            CriterionArg::MaxRatio => Some(Criterion::MaxRatio),
            CriterionArg::All => None,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
enum SetArg {
    Random,
    Raster,
    Alignment,
    Fixture,
}

#[derive(Serialize)]
struct HullOut {
    algo: AlgoArg,
    input_points: usize,
    hull: Vec<[f64; 2]>,
}

#[derive(Debug, Serialize)]
struct RectOut {
    vertices: Vec<[f64; 2]>,
    width: f64,
    height: f64,
    area: f64,
    perimeter: f64,
    ratio: f64,
}

impl RectsOut {
    fn counts(&self) -> Counts {
        Counts {
            points: Some(self.input_points),
            hull: Some(self.hull_points),
            rectangles: Some(self.rectangles.len()),
        }
    }
}

impl From<&OrientedRectangle> for RectOut {
    fn from(r: &OrientedRectangle) -> Self {
        Self {
            vertices: to_pairs(&r.vertices()),
            width: r.width(),
            height: r.height(),
            area: r.area(),
            perimeter: r.perimeter(),
            ratio: r.ratio(),
        }
    }
}

#[derive(Debug, Serialize)]
struct RectsOut {
    criterion: CriterionArg,
    input_points: usize,
    hull_points: usize,
    rectangles: Vec<RectOut>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = geom_cfg(cmd.eps_angle, cmd.eps_rotation)?;
    match cmd.action {
        Action::Hull { input, algo, out } => {
            let res = hull(&input, algo, cfg)?;
            match out {
                Some(out) => {
                    let counts = Counts {
                        points: Some(res.input_points),
                        hull: Some(res.hull.len()),
                        rectangles: None,
                    };
                    let params = json!({"input": input, "algo": algo});
                    let record = RunRecord::new("hull", params, counts);
                    emit(&out, &res, record.with_tolerances(cfg))
                }
                None => {
                    for [x, y] in &res.hull {
                        println!("{x} {y}");
                    }
                    Ok(())
                }
            }
        }
        Action::Rect {
            input,
            algo,
            criterion,
            out,
        } => {
            let res = rect(&input, algo, criterion, cfg)?;
            match out {
                Some(out) => {
                    let params = json!({"input": input, "algo": algo, "criterion": criterion});
                    let record = RunRecord::new("rect", params, res.counts());
                    emit(&out, &res, record.with_tolerances(cfg))
                }
                None => {
                    println!("{}", serde_json::to_string_pretty(&res)?);
                    Ok(())
                }
            }
        }
        Action::Sample {
            set,
            count,
            seed,
            index,
            raster,
            out,
        } => {
            let points = sample(set, count, seed, index, raster)?;
            write_points(&out, &points)?;
            let params = json!({
                "set": set, "count": count, "seed": seed, "index": index, "raster": raster
            });
            let counts = Counts {
                points: Some(points.len()),
                ..Counts::default()
            };
            let run = RunRecord::new("sample", params, counts).write_beside(&out)?;
            tracing::info!(points = points.len(), out = %out.display(), run = %run.display(), "sample");
            Ok(())
        }
        Action::Report => {
            println!("{}", serde_json::to_string_pretty(&report())?);
            Ok(())
        }
    }
}

fn geom_cfg(eps_angle: Option<f64>, eps_rotation: Option<f64>) -> Result<GeomCfg> {
    let mut cfg = GeomCfg::default();
    if let Some(e) = eps_angle {
        if !(e >= 0.0 && e.is_finite()) {
            bail!("--eps-angle must be a finite non-negative number, got {e}");
        }
        cfg.eps_angle = e;
    }
    if let Some(e) = eps_rotation {
        if !(e > 0.0 && e.is_finite()) {
            bail!("--eps-rotation must be a finite positive number, got {e}");
        }
        cfg.eps_rotation = e;
    }
    Ok(cfg)
}

fn load_hull(input: &Path, algo: AlgoArg, cfg: GeomCfg) -> Result<(usize, Vec<Vec2>)> {
    let points = read_points(input).with_context(|| format!("loading {}", input.display()))?;
    let hull = convex_hull_with_cfg(&points, algo.into(), cfg);
    tracing::info!(points = points.len(), hull = hull.len(), algo = ?algo, "hull");
    Ok((points.len(), hull))
}

fn hull(input: &Path, algo: AlgoArg, cfg: GeomCfg) -> Result<HullOut> {
    let (input_points, hull) = load_hull(input, algo, cfg)?;
    Ok(HullOut {
        algo,
        input_points,
        hull: to_pairs(&hull),
    })
}

fn rect(input: &Path, algo: AlgoArg, criterion: CriterionArg, cfg: GeomCfg) -> Result<RectsOut> {
    let (input_points, hull) = load_hull(input, algo, cfg)?;
    if hull.is_empty() {
        bail!("{}: no points, no bounding rectangle", input.display());
    }
    let rects: Vec<OrientedRectangle> = match criterion.criterion() {
        Some(c) => best_oriented_rectangle_with_cfg(&hull, cfg, c.predicate())
            .into_iter()
            .collect(),
        None => Sweep::with_cfg(&hull, cfg).collect(),
    };
    if let [best] = rects.as_slice() {
        tracing::info!(
            criterion = ?criterion,
            area = best.area(),
            ratio = best.ratio(),
            "rect"
        );
    } else {
        tracing::info!(candidates = rects.len(), "rect");
    }
    Ok(RectsOut {
        criterion,
        input_points,
        hull_points: hull.len(),
        rectangles: rects.iter().map(RectOut::from).collect(),
    })
}

fn sample(set: SetArg, count: usize, seed: u64, index: u64, raster: u32) -> Result<Vec<Vec2>> {
    let cfg = SampleCfg {
        count,
        ..SampleCfg::default()
    };
    let tok = ReplayToken { seed, index };
    let points = match set {
        SetArg::Random => draw_points(PointSet::Random, cfg, tok)?,
        SetArg::Raster => draw_points(PointSet::RandomInRaster { raster }, cfg, tok)?,
        SetArg::Alignment => {
            let bits = u8::try_from(index).context("alignment --index must be in 0..=255")?;
            alignment_test(bits, cfg.margin).0
        }
        SetArg::Fixture => fixture_polygon(),
    };
    Ok(points)
}

fn emit<T: Serialize>(out: &Path, value: &T, record: RunRecord) -> Result<()> {
    write_json(out, value)?;
    let run = record.write_beside(out)?;
    tracing::info!(out = %out.display(), run = %run.display(), "wrote");
    Ok(())
}

fn report() -> serde_json::Value {
    let criteria: Vec<&str> = Criterion::ALL.iter().map(|c| c.name()).collect();
    json!({
        "version": calipers::VERSION,
        "tolerances": Tolerances::from(GeomCfg::default()),
        "algos": [AlgoArg::Quick, AlgoArg::AngleScan],
        "criteria": criteria,
    })
}
