use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while building a curve. All of them are fatal to session start.
#[derive(Error, Debug)]
pub enum CurveLoadError {
    #[error("Curve source {path:?} is unavailable: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed curve document: {0}")]
    Format(String),

    #[error("Curve needs at least two distinct control points, found {found}")]
    InsufficientPoints { found: usize },
}

impl From<serde_json::Error> for CurveLoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Format(err.to_string())
    }
}
