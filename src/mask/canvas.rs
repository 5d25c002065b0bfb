//! The 2D mask grid.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};

use crate::geom::{RectXYWH, Span};

/// A 2D grid of mask values in `[0, 1]`.
///
/// Row-major storage, origin at the top-left, x growing rightward and y
/// growing downward. Canvases are created zeroed and owned exclusively by
/// one rasterization call; nothing in this crate shares or persists them.
///
/// The `width * height == data.len()` invariant is maintained by every
/// constructor and checked when deserializing.
#[derive(Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl Canvas {
    /// Creates an all-zero canvas.
    pub fn zeros(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width as usize * height as usize],
        }
    }

    /// Creates a canvas with every pixel set to `value`.
    pub fn filled(width: u32, height: u32, value: f32) -> Self {
        Self {
            width,
            height,
            data: vec![value; width as usize * height as usize],
        }
    }

    /// Creates a canvas from row-major pixel data.
    ///
    /// Returns `None` if `data.len() != width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Option<Self> {
        if data.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// Returns the canvas width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the canvas height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the row-major pixel data.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns the pixel at `(x, y)`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f32 {
        debug_assert!(x < self.width && y < self.height);
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Sets the pixel at `(x, y)`.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f32) {
        debug_assert!(x < self.width && y < self.height);
        self.data[y as usize * self.width as usize + x as usize] = value;
    }

    /// Sets every pixel to `value`.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Fills a span with `value`.
    ///
    /// Spans come from clamping, so they are in-bounds by construction; an
    /// empty span writes nothing.
    pub fn fill_span(&mut self, span: Span, value: f32) {
        if span.is_empty() {
            return;
        }
        let width = self.width as usize;
        for y in span.y1..span.y2 {
            let row = y as usize * width;
            self.data[row + span.x1 as usize..row + span.x2 as usize].fill(value);
        }
    }

    /// Unions `other` into this canvas via per-pixel maximum.
    ///
    /// Overlapping fills never push a value past 1.0, which is what makes
    /// this a union rather than an accumulation.
    pub fn union_in_place(&mut self, other: &Canvas) {
        assert_eq!(
            (self.width, self.height),
            (other.width, other.height),
            "union requires canvases of identical dimensions"
        );
        for (dst, src) in self.data.iter_mut().zip(&other.data) {
            *dst = dst.max(*src);
        }
    }

    /// Replaces every pixel `v` with `1.0 - v`.
    pub fn invert_in_place(&mut self) {
        for v in &mut self.data {
            *v = 1.0 - *v;
        }
    }

    /// Copies the top-left window of `sub` into this canvas at the span
    /// origin.
    ///
    /// Only the overlapping `min(sub height, span height) x min(sub width,
    /// span width)` window is copied; if the sub-mask is smaller than the
    /// span, the remainder of the span stays untouched, and if it is larger
    /// it is cropped. No scaling or interpolation.
    pub fn blit_top_left(&mut self, span: Span, sub: &Canvas) {
        if span.is_empty() {
            return;
        }
        let copy_h = span.height().min(sub.height) as usize;
        let copy_w = span.width().min(sub.width) as usize;
        let width = self.width as usize;
        for row in 0..copy_h {
            let dst_start = (span.y1 as usize + row) * width + span.x1 as usize;
            let src_start = row * sub.width as usize;
            self.data[dst_start..dst_start + copy_w]
                .copy_from_slice(&sub.data[src_start..src_start + copy_w]);
        }
    }

    /// Sums all pixel values.
    pub fn sum(&self) -> f64 {
        self.data.iter().map(|&v| f64::from(v)).sum()
    }

    /// Counts pixels with value `>= threshold`.
    pub fn count_at_least(&self, threshold: f32) -> usize {
        self.data.iter().filter(|&&v| v >= threshold).count()
    }

    /// Returns the percentage of the canvas covered by pixels `>= threshold`.
    pub fn area_percent(&self, threshold: f32) -> f64 {
        let total = self.data.len();
        if total == 0 {
            return 0.0;
        }
        self.count_at_least(threshold) as f64 / total as f64 * 100.0
    }

    /// Returns the tight bounding box of all pixels `> threshold`, in XYWH
    /// form with inclusive extents (a single lit pixel yields a 1x1 box).
    ///
    /// Returns `None` when no pixel exceeds the threshold.
    pub fn bounding_rect(&self, threshold: f32) -> Option<RectXYWH> {
        let mut x_min = u32::MAX;
        let mut y_min = u32::MAX;
        let mut x_max = 0u32;
        let mut y_max = 0u32;
        let mut any = false;

        for y in 0..self.height {
            let row = y as usize * self.width as usize;
            for x in 0..self.width {
                if self.data[row + x as usize] > threshold {
                    any = true;
                    x_min = x_min.min(x);
                    y_min = y_min.min(y);
                    x_max = x_max.max(x);
                    y_max = y_max.max(y);
                }
            }
        }

        if !any {
            return None;
        }
        Some(RectXYWH::new(
            f64::from(x_min),
            f64::from(y_min),
            f64::from(x_max - x_min + 1),
            f64::from(y_max - y_min + 1),
        ))
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("sum", &self.sum())
            .finish()
    }
}

impl Serialize for Canvas {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Canvas", 3)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("data", &self.data)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Canvas {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct CanvasData {
            width: u32,
            height: u32,
            data: Vec<f32>,
        }
        let raw = CanvasData::deserialize(deserializer)?;
        Canvas::from_data(raw.width, raw.height, raw.data).ok_or_else(|| {
            D::Error::custom("canvas data length does not match width * height")
        })
    }
}
