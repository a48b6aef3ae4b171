//! Run records: a `<stem>.run.json` next to every written artifact, saying
//! which command, inputs and tolerances produced it and how large the result
//! was.

use anyhow::Result;
use calipers::GeomCfg;
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::points::write_json;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Tolerances {
    pub eps_angle: f64,
    pub eps_rotation: f64,
    pub eps_axis: f64,
}

impl From<GeomCfg> for Tolerances {
    fn from(cfg: GeomCfg) -> Self {
        Self {
            eps_angle: cfg.eps_angle,
            eps_rotation: cfg.eps_rotation,
            eps_axis: cfg.eps_axis,
        }
    }
}

/// Sizes along the pipeline; absent stages are left out of the JSON.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct Counts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hull: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rectangles: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RunRecord {
    pub version: &'static str,
    pub command: &'static str,
    pub params: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tolerances: Option<Tolerances>,
    pub counts: Counts,
}

impl RunRecord {
    pub fn new(command: &'static str, params: Value, counts: Counts) -> Self {
        Self {
            version: calipers::VERSION,
            command,
            params,
            tolerances: None,
            counts,
        }
    }

    pub fn with_tolerances(mut self, cfg: GeomCfg) -> Self {
        self.tolerances = Some(cfg.into());
        self
    }

    /// Write the record next to `artifact` and return its path.
    pub fn write_beside(&self, artifact: &Path) -> Result<PathBuf> {
        let path = record_path(artifact);
        write_json(&path, self)?;
        Ok(path)
    }
}

fn record_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "points".into());
    name.push(".run.json");
    artifact.with_file_name(name)
}
