use anyhow::{Context, Result};
use hulls::Point;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;

/// Alpha used when neither the request nor the command line sets one.
pub const DEFAULT_ALPHA: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct XY {
    pub x: f64,
    pub y: f64,
}

impl From<XY> for Point {
    fn from(p: XY) -> Self {
        Point::new(p.x, p.y)
    }
}

impl From<&Point> for XY {
    fn from(p: &Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// `{"points": [{"x": .., "y": ..}], "alpha": ..}`; both fields optional.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PointsDoc {
    #[serde(default)]
    pub points: Vec<XY>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
}

impl PointsDoc {
    pub fn points(&self) -> Vec<Point> {
        self.points.iter().copied().map(Point::from).collect()
    }
}

/// `{"hull": [{"x": .., "y": ..}]}`
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HullDoc {
    pub hull: Vec<XY>,
}

impl HullDoc {
    pub fn from_points(points: &[Point]) -> Self {
        Self {
            hull: points.iter().map(XY::from).collect(),
        }
    }
}

/// Read a `PointsDoc` from a file, or from stdin when `input` is `-`.
pub fn read_points(input: &str) -> Result<PointsDoc> {
    let text = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading points from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading {input}"))?
    };
    serde_json::from_str(&text).with_context(|| format!("parsing points JSON from {input}"))
}

/// Pretty JSON to `out` (parent dirs created), or to stdout when `None`.
pub fn write_json<T: Serialize>(value: &T, out: Option<&str>) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value)?;
    match out {
        Some(out) => {
            let out_path = Path::new(out);
            if let Some(parent) = out_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            std::fs::write(out_path, bytes).with_context(|| format!("writing {out}"))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
