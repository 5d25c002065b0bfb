use thiserror::Error;

/// Errors produced while normalizing host-supplied payloads.
///
/// These never escape the public rasterization API: the [`host`](crate::host)
/// boundary logs them and degrades to an empty/default result, matching the
/// contract that the rasterizer itself never fails.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Failed to parse region JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected an array of regions, got {0}")]
    MalformedRegions(&'static str),

    #[error("Expected a rectangle of 4 numeric values, got {0}")]
    MalformedRect(&'static str),

    #[error("Expected a [height, width] pair of positive integers, got {0}")]
    MalformedDims(&'static str),

    #[error("Expected a numeric scalar (or a singleton array of one), got {0}")]
    MalformedScalar(&'static str),
}
