//! Rectangle geometry for mask rasterization.
//!
//! All geometry is in pixel space: origin at the top-left corner of the
//! canvas, x growing rightward, y growing downward. Two rectangle
//! representations coexist because hosts use both:
//!
//! - [`RectXYWH`]: offset + extent, the shape used for bounding-box lists.
//! - [`RectXYXY`]: two corners, the shape used for segment placement regions.
//!
//! # Design Principles
//!
//! 1. **Permissive Construction**: rectangle types allow "invalid" data to be
//!    represented (negative extents, out-of-canvas offsets, non-finite
//!    values). Clamping resolves them to an in-bounds [`Span`], never an
//!    error; degenerate input clamps to an empty span.
//!
//! 2. **Truncation, not rounding**: fractional coordinates are truncated
//!    toward zero before clamping, matching the behavior detection pipelines
//!    rely on.
//!
//! # Example
//!
//! ```
//! use rastermask::geom::RectXYWH;
//!
//! let rect = RectXYWH::new(-10.0, -10.0, 100.0, 100.0);
//! let span = rect.clamp_to(256, 256);
//! assert_eq!((span.x1, span.y1, span.x2, span.y2), (0, 0, 90, 90));
//! ```

mod rect;
mod span;

pub use rect::{RectXYWH, RectXYXY};
pub use span::Span;
