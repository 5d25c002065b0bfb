//! Mask canvases and their pixel operations.

mod canvas;

pub use canvas::Canvas;
