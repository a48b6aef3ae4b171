use anyhow::{bail, Context, Result};
use calipers::Vec2;
use polars::prelude::*;
use std::fs;
use std::path::Path;

/// Read a point set from `.csv` (columns `x`, `y`) or `.json` (`[[x, y], ...]`).
pub fn read_points(path: &Path) -> Result<Vec<Vec2>> {
    match extension(path).as_deref() {
        Some("csv") => read_csv(path),
        Some("json") => read_json(path),
        _ => bail!(
            "unsupported input {}: expected .csv or .json",
            path.display()
        ),
    }
}

/// Write a point set as `.csv` or `.json`, chosen by extension (JSON otherwise).
pub fn write_points(path: &Path, points: &[Vec2]) -> Result<()> {
    create_parent(path)?;
    if extension(path).as_deref() == Some("csv") {
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        let mut df = df!("x" => xs, "y" => ys)?;
        let mut file =
            fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
        CsvWriter::new(&mut file)
            .finish(&mut df)
            .with_context(|| format!("writing {}", path.display()))?;
        return Ok(());
    }
    write_json(path, &to_pairs(points))
}

pub fn to_pairs(points: &[Vec2]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

pub fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    create_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

fn read_csv(path: &Path) -> Result<Vec<Vec2>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns of {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Vec2::new(x, y)),
            _ => bail!("{}: row {row} has a missing coordinate", path.display()),
        })
        .collect()
}

fn read_json(path: &Path) -> Result<Vec<Vec2>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let pairs: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    Ok(pairs.into_iter().map(|[x, y]| Vec2::new(x, y)).collect())
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}
