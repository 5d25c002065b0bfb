//! The rasterizers: regions in, mask canvases out.
//!
//! Two entry points with deliberately different degenerate-input policies:
//!
//! - [`rectangles`]: every input rectangle produces an output mask, even if
//!   it clamps to nothing (arity in == arity out).
//! - [`segments`]: invalid segments are dropped entirely and only surviving
//!   groups produce masks.
//!
//! The asymmetry is load-bearing for downstream consumers of each path and
//! must not be "unified".

pub mod rectangles;
pub mod segments;
