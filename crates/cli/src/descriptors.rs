//! JSON polygon input, descriptor records, and artifact writing.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use humoments::{ContourMoments, Polygon, Ring};

/// One polygon as parsed from the input array: rings of [x, y] pairs,
/// outer ring first, holes wound oppositely.
#[derive(Debug, Deserialize)]
pub struct PolygonInput {
    pub rings: Vec<Vec<[f64; 2]>>,
}

/// Per-polygon output record. Failed items carry `error` instead of values.
#[derive(Debug, Serialize)]
pub struct DescriptorRecord {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m00: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hu: Option<[f64; 7]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DescriptorRecord {
    pub fn ok(index: usize, m00: f64, hu: [f64; 7]) -> Self {
        Self {
            index,
            m00: Some(m00),
            hu: Some(hu),
            error: None,
        }
    }

    pub fn failed(index: usize, error: String) -> Self {
        Self {
            index,
            m00: None,
            hu: None,
            error: Some(error),
        }
    }
}

pub fn to_polygon(input: &PolygonInput) -> Result<Polygon> {
    let mut rings = input.rings.iter().map(|r| Ring::from_coords(r));
    let Some(outer) = rings.next() else {
        bail!("polygon has no rings");
    };
    Ok(Polygon::with_holes(outer, rings.collect()))
}

/// m00 plus the seven scale-normalized Hu invariants of one polygon.
pub fn describe(input: &PolygonInput) -> Result<(f64, [f64; 7])> {
    let polygon = to_polygon(input)?;
    let moments = ContourMoments::new(&polygon)?;
    let m00 = moments.compute(0, 0, false, false)?;
    let mut hu = [0.0_f64; 7];
    for (k, slot) in hu.iter_mut().enumerate() {
        *slot = moments.compute_hu(k as u32, true)?;
    }
    Ok((m00, hu))
}

/// Write a pretty-printed JSON artifact, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
