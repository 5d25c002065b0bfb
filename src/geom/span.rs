//! Clamped integer canvas regions.

/// An integer region of a canvas, guaranteed in-bounds by construction.
///
/// Spans are only produced by the clamping methods on
/// [`RectXYWH`](super::RectXYWH) and [`RectXYXY`](super::RectXYXY), so
/// `x1 <= x2 <= canvas width` and `y1 <= y2 <= canvas height` always hold.
/// A degenerate or fully-outside rectangle clamps to an empty span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl Span {
    /// Creates a span covering no pixels.
    #[inline]
    pub fn empty() -> Self {
        Self {
            x1: 0,
            y1: 0,
            x2: 0,
            y2: 0,
        }
    }

    /// Returns true if the span covers no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x2 <= self.x1 || self.y2 <= self.y1
    }

    /// Returns the width of the span in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.x2.saturating_sub(self.x1)
    }

    /// Returns the height of the span in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.y2.saturating_sub(self.y1)
    }
}
