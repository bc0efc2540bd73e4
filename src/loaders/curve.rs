use std::path::Path;

use glam::Vec3;
use serde::Deserialize;
use serde_json::Value;

use crate::error::CurveLoadError;
use crate::math::{CurveOptions, CurvePath};

/// One control point record; any extra fields are ignored
#[derive(Debug, Deserialize)]
struct PointRecord {
    x: f32,
    y: f32,
    z: f32,
}

impl From<PointRecord> for Vec3 {
    fn from(record: PointRecord) -> Self {
        Vec3::new(record.x, record.y, record.z)
    }
}

/// Decodes the control points of a curve document.
///
/// Accepts `{"points": [{"x": .., "y": .., "z": ..}, ..]}` or a bare array of records.
pub fn parse_control_points(text: &str) -> Result<Vec<Vec3>, CurveLoadError> {
    let document: Value = serde_json::from_str(text)?;

    let records = match document {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut fields) => fields.remove("points").ok_or_else(|| {
            CurveLoadError::Format("missing \"points\" field".to_string())
        })?,
        other => {
            return Err(CurveLoadError::Format(format!(
                "expected an object or array, found {}",
                json_kind(&other)
            )))
        }
    };

    let records: Vec<PointRecord> = serde_json::from_value(records)?;
    Ok(records.into_iter().map(Vec3::from).collect())
}

/// Parses a curve document and fits a path through its points
pub fn parse_curve_json(text: &str, options: &CurveOptions) -> Result<CurvePath, CurveLoadError> {
    let points = parse_control_points(text)?;
    CurvePath::from_points(points, options)
}

/// Loads the curve document at `path`. Nothing is returned unless the whole load succeeds.
///
/// The file is read synchronously and the future completes on its first poll. The
/// `async` signature lets a host await the load once before its frame loop; the
/// binary drives it with `pollster::block_on`, so do not await it on a shared
/// async runtime's worker threads.
pub async fn load_curve_path(
    path: impl AsRef<Path>,
    options: &CurveOptions,
) -> Result<CurvePath, CurveLoadError> {
    let path = path.as_ref();
    log::debug!("Loading curve document: {:?}", path);

    let text = std::fs::read_to_string(path).map_err(|source| CurveLoadError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let curve = parse_curve_json(&text, options)?;
    log::info!(
        "Loaded curve {:?}: {} control points, {:?} spline, length {:.2}",
        path,
        curve.control_points().len(),
        curve.curve_type(),
        curve.length()
    );
    Ok(curve)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
