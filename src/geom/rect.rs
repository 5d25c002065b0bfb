//! Rectangle types in XYWH and XYXY form.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};

use super::span::Span;

/// An axis-aligned rectangle in XYWH format (offset + extent).
///
/// Note: this type does NOT enforce positive extents or in-canvas offsets.
/// This is intentional - hosts routinely produce boxes that hang off the
/// canvas edge or collapse to nothing, and [`clamp_to`](Self::clamp_to)
/// resolves those to an empty [`Span`] rather than an error.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct RectXYWH {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// An axis-aligned rectangle in XYXY format (two corners).
///
/// Used for segment placement regions. Like [`RectXYWH`], malformed boxes
/// (x2 < x1, non-finite values) are representable and clamp to empty.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct RectXYXY {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Truncates toward zero then clamps into `[0, limit]`.
#[inline]
fn clamp_axis(value: i64, limit: u32) -> u32 {
    value.clamp(0, i64::from(limit)) as u32
}

impl RectXYWH {
    /// Creates a new rectangle from offset and extent.
    #[inline]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Converts to XYXY form.
    #[inline]
    pub fn to_xyxy(&self) -> RectXYXY {
        RectXYXY {
            x1: self.x,
            y1: self.y,
            x2: self.x + self.w,
            y2: self.y + self.h,
        }
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite()
    }

    /// Clamps this rectangle to a `width x height` canvas.
    ///
    /// Each component is truncated toward zero first, then the corners
    /// `(x, y)` and `(x + w, y + h)` are clamped into canvas bounds.
    /// Degenerate extents, fully-outside rectangles, and non-finite
    /// components all yield an empty span.
    pub fn clamp_to(&self, width: u32, height: u32) -> Span {
        if !self.is_finite() {
            return Span::empty();
        }
        let x = self.x as i64;
        let y = self.y as i64;
        let w = self.w as i64;
        let h = self.h as i64;
        Span {
            x1: clamp_axis(x, width),
            y1: clamp_axis(y, height),
            x2: clamp_axis(x + w, width),
            y2: clamp_axis(y + h, height),
        }
    }
}

impl RectXYXY {
    /// Creates a new rectangle from two corners.
    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Converts to XYWH form.
    #[inline]
    pub fn to_xywh(&self) -> RectXYWH {
        RectXYWH {
            x: self.x1,
            y: self.y1,
            w: self.x2 - self.x1,
            h: self.y2 - self.y1,
        }
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x1.is_finite() && self.y1.is_finite() && self.x2.is_finite() && self.y2.is_finite()
    }

    /// Clamps this rectangle to a `width x height` canvas.
    ///
    /// Corners are truncated toward zero then clamped independently into
    /// canvas bounds; see [`RectXYWH::clamp_to`] for the degenerate cases.
    pub fn clamp_to(&self, width: u32, height: u32) -> Span {
        if !self.is_finite() {
            return Span::empty();
        }
        Span {
            x1: clamp_axis(self.x1 as i64, width),
            y1: clamp_axis(self.y1 as i64, height),
            x2: clamp_axis(self.x2 as i64, width),
            y2: clamp_axis(self.y2 as i64, height),
        }
    }
}

impl From<RectXYWH> for RectXYXY {
    fn from(rect: RectXYWH) -> Self {
        rect.to_xyxy()
    }
}

impl From<RectXYXY> for RectXYWH {
    fn from(rect: RectXYXY) -> Self {
        rect.to_xywh()
    }
}

impl std::fmt::Debug for RectXYWH {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RectXYWH")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("w", &self.w)
            .field("h", &self.h)
            .finish()
    }
}

impl std::fmt::Debug for RectXYXY {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RectXYXY")
            .field("x1", &self.x1)
            .field("y1", &self.y1)
            .field("x2", &self.x2)
            .field("y2", &self.y2)
            .finish()
    }
}

// Rectangles travel on the wire as flat 4-element arrays, so serde uses the
// tuple shape rather than named fields.
impl Serialize for RectXYWH {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.x, self.y, self.w, self.h].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RectXYWH {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [x, y, w, h] = <[f64; 4]>::deserialize(deserializer)?;
        Ok(Self { x, y, w, h })
    }
}

impl Serialize for RectXYXY {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.x1, self.y1, self.x2, self.y2].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RectXYXY {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = <[f64; 4]>::deserialize(deserializer)
            .map_err(|_| D::Error::custom("expected a [x1, y1, x2, y2] array"))?;
        let [x1, y1, x2, y2] = values;
        Ok(Self { x1, y1, x2, y2 })
    }
}
