//! Rastermask: rasterize detection regions into binary masks.
//!
//! Rastermask turns axis-aligned rectangles and cropped segmentation masks
//! into full-resolution mask canvases. It is the geometry core behind
//! bbox-to-mask and segments-to-mask conversion steps in node-graph image
//! pipelines: the host hands over region geometry, this crate hands back
//! per-region masks plus a combined union mask.
//!
//! The rasterization entry points never fail. Degenerate or out-of-bounds
//! geometry degrades to zero-valued masks (or dropped segments, for the
//! segment path) so downstream consumers always receive a usable canvas.
//!
//! # Modules
//!
//! - [`geom`]: Rectangle types (XYWH and XYXY) and clamping to canvas bounds
//! - [`mask`]: The [`Canvas`] mask grid and its pixel operations
//! - [`raster`]: The rectangle and segment rasterizers
//! - [`filter`]: Shell-style wildcard label filtering
//! - [`host`]: Normalization of loosely-shaped host payloads
//! - [`error`]: Error types for boundary normalization

pub mod error;
pub mod filter;
pub mod geom;
pub mod host;
pub mod mask;
pub mod raster;

pub use error::RasterError;
pub use filter::LabelFilter;
pub use geom::{RectXYWH, RectXYXY, Span};
pub use mask::Canvas;
pub use raster::rectangles::{rasterize_rectangle, rasterize_rectangles, RectanglesOutput};
pub use raster::segments::{
    rasterize_segments, Segment, SegmentOptions, SegmentSet, SegmentsOutput, SortOrder,
};
