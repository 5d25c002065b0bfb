//! Normalization of loosely-shaped host payloads.
//!
//! Node-graph hosts deliver geometry in a handful of JSON-ish shapes
//! depending on how nodes were wired upstream: a rectangle may arrive as
//! `[x, y, w, h]` or wrapped as `[[x, y, w, h]]`, and scalars sometimes show
//! up inside a singleton array. This module is the single place where those
//! conventions are resolved into canonical types; the rasterizers themselves
//! never see the ambiguity.
//!
//! The `*_from_value` functions return precise errors for callers that want
//! them. [`rects_or_default`] applies the degrade-to-empty policy expected at
//! a node boundary: malformed payloads are logged and replaced by an empty
//! region list, so no error ever crosses into the host.

use log::{debug, warn};
use serde_json::Value;

use crate::error::RasterError;
use crate::geom::RectXYWH;

/// Names a JSON value's type for error messages.
fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parses exactly four numbers into a rectangle.
fn rect_from_items(items: &[Value]) -> Option<RectXYWH> {
    if items.len() != 4 {
        return None;
    }
    let mut nums = [0.0f64; 4];
    for (slot, item) in nums.iter_mut().zip(items) {
        *slot = item.as_f64()?;
    }
    Some(RectXYWH::new(nums[0], nums[1], nums[2], nums[3]))
}

/// Parses a single rectangle from `[x, y, w, h]` or `[[x, y, w, h]]`.
///
/// If the first element is itself an array, the payload is treated as the
/// wrapped form and unwrapped one level.
pub fn rect_from_value(value: &Value) -> Result<RectXYWH, RasterError> {
    let items = match value.as_array() {
        Some(items) => items,
        None => return Err(RasterError::MalformedRect(kind(value))),
    };
    let flat = match items.first() {
        Some(Value::Array(inner)) => inner.as_slice(),
        _ => items.as_slice(),
    };
    rect_from_items(flat).ok_or(RasterError::MalformedRect(kind(value)))
}

/// Parses a list of rectangles, accepting both flat and wrapped entries.
///
/// Entries that are neither `[x, y, w, h]` nor `[[x, y, w, h]]` with numeric
/// components are skipped (with a debug log), so one malformed region never
/// poisons the rest of the list. A non-array root is an error.
pub fn rects_from_value(value: &Value) -> Result<Vec<RectXYWH>, RasterError> {
    let items = match value.as_array() {
        Some(items) => items,
        None => return Err(RasterError::MalformedRegions(kind(value))),
    };
    let mut rects = Vec::with_capacity(items.len());
    for (idx, entry) in items.iter().enumerate() {
        match rect_from_value(entry) {
            Ok(rect) => rects.push(rect),
            Err(_) => debug!("skipping malformed rectangle at index {idx}"),
        }
    }
    Ok(rects)
}

/// Parses a rectangle list from raw JSON bytes.
///
/// Useful for fuzzing and for hosts that hand over unparsed payloads.
pub fn rects_from_slice(bytes: &[u8]) -> Result<Vec<RectXYWH>, RasterError> {
    let value: Value = serde_json::from_slice(bytes)?;
    rects_from_value(&value)
}

/// Parses a rectangle list from a JSON string.
pub fn rects_from_str(json: &str) -> Result<Vec<RectXYWH>, RasterError> {
    rects_from_slice(json.as_bytes())
}

/// The degrade-to-empty policy for a node boundary: malformed region payloads
/// become an empty list, with a warning in the log.
pub fn rects_or_default(value: &Value) -> Vec<RectXYWH> {
    match rects_from_value(value) {
        Ok(rects) => rects,
        Err(err) => {
            warn!("discarding region payload: {err}");
            Vec::new()
        }
    }
}

/// Parses a scalar that may arrive wrapped in a singleton array.
///
/// This is the "confidence as a one-element array" convention: `0.95` and
/// `[0.95]` both normalize to `0.95`.
pub fn scalar_from_value(value: &Value) -> Result<f64, RasterError> {
    match value {
        Value::Number(n) => n.as_f64().ok_or(RasterError::MalformedScalar("a number")),
        Value::Array(items) if items.len() == 1 => items[0]
            .as_f64()
            .ok_or_else(|| RasterError::MalformedScalar(kind(&items[0]))),
        other => Err(RasterError::MalformedScalar(kind(other))),
    }
}

/// Parses a `[height, width]` canvas dimension pair.
///
/// Both values must be positive integers that fit in `u32`.
pub fn dims_from_value(value: &Value) -> Result<(u32, u32), RasterError> {
    let err = || RasterError::MalformedDims(kind(value));
    let items = value.as_array().ok_or_else(err)?;
    if items.len() != 2 {
        return Err(err());
    }
    let height = items[0].as_u64().ok_or_else(err)?;
    let width = items[1].as_u64().ok_or_else(err)?;
    if height == 0 || width == 0 {
        return Err(err());
    }
    let height = u32::try_from(height).map_err(|_| err())?;
    let width = u32::try_from(width).map_err(|_| err())?;
    Ok((height, width))
}
