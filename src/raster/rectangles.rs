//! Rasterization of XYWH rectangles into binary masks.

use log::debug;

use crate::geom::RectXYWH;
use crate::mask::Canvas;

/// Output of [`rasterize_rectangles`].
#[derive(Clone, Debug)]
pub struct RectanglesOutput {
    /// Union (per-pixel max) of every non-degenerate input rectangle.
    pub combined: Canvas,

    /// One mask per input rectangle, in input order. Degenerate rectangles
    /// keep their slot as an all-zero mask so output arity always matches
    /// input arity. Empty input yields exactly one all-zero placeholder.
    pub per_region: Vec<Canvas>,

    /// Number of input rectangles processed (0 for empty input, even though
    /// a placeholder mask is still returned).
    pub count: usize,
}

/// Rasterizes a single rectangle into a `width x height` mask.
///
/// The rectangle is truncated and clamped to canvas bounds; the clamped
/// region is filled with 1.0 (or, with `invert`, zeroed on an all-ones
/// canvas). A rectangle that clamps to nothing yields an all-zero mask
/// regardless of `invert`.
///
/// Never fails: geometry problems degrade to a zero mask.
pub fn rasterize_rectangle(rect: RectXYWH, width: u32, height: u32, invert: bool) -> Canvas {
    let mut mask = Canvas::zeros(width, height);
    let span = rect.clamp_to(width, height);
    if span.is_empty() {
        debug!("rectangle {rect:?} clamps to nothing on {width}x{height}");
        return mask;
    }
    if invert {
        mask.fill(1.0);
        mask.fill_span(span, 0.0);
    } else {
        mask.fill_span(span, 1.0);
    }
    mask
}

/// Rasterizes a list of rectangles into per-region masks and a combined
/// union mask.
///
/// Every input rectangle gets a per-region mask in input order; degenerate
/// ones contribute an all-zero mask and are excluded from the union. With
/// `invert`, all masks (combined and per-region, including zero
/// placeholders) are flipped after the union is built.
///
/// Empty input returns one all-zero placeholder mask and `count == 0`, so
/// callers never receive an empty mask collection.
pub fn rasterize_rectangles(
    rects: &[RectXYWH],
    width: u32,
    height: u32,
    invert: bool,
) -> RectanglesOutput {
    if rects.is_empty() {
        return RectanglesOutput {
            combined: Canvas::zeros(width, height),
            per_region: vec![Canvas::zeros(width, height)],
            count: 0,
        };
    }

    let mut combined = Canvas::zeros(width, height);
    let mut per_region = Vec::with_capacity(rects.len());

    for rect in rects {
        let mut mask = Canvas::zeros(width, height);
        let span = rect.clamp_to(width, height);
        if span.is_empty() {
            debug!("rectangle {rect:?} clamps to nothing on {width}x{height}");
        } else {
            mask.fill_span(span, 1.0);
            combined.fill_span(span, 1.0);
        }
        per_region.push(mask);
    }

    if invert {
        combined.invert_in_place();
        for mask in &mut per_region {
            mask.invert_in_place();
        }
    }

    let count = per_region.len();
    RectanglesOutput {
        combined,
        per_region,
        count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_rectangle_fill() {
        let mask = rasterize_rectangle(RectXYWH::new(10.0, 10.0, 50.0, 50.0), 256, 256, false);
        assert_eq!(mask.sum(), 2500.0);
        assert_eq!(mask.get(10, 10), 1.0);
        assert_eq!(mask.get(59, 59), 1.0);
        assert_eq!(mask.get(60, 60), 0.0);
        assert_eq!(mask.get(9, 9), 0.0);
    }

    #[test]
    fn test_single_rectangle_invert() {
        let mask = rasterize_rectangle(RectXYWH::new(10.0, 20.0, 100.0, 100.0), 256, 256, true);
        assert_eq!(mask.sum(), (256.0 * 256.0) - (100.0 * 100.0));
        assert_eq!(mask.get(10, 20), 0.0);
        assert_eq!(mask.get(0, 0), 1.0);
    }

    #[test]
    fn test_single_degenerate_stays_zero_even_inverted() {
        // A rectangle that clamps to nothing never triggers the invert fill.
        let mask = rasterize_rectangle(RectXYWH::new(300.0, 300.0, 50.0, 50.0), 256, 256, true);
        assert_eq!(mask.sum(), 0.0);
    }

    #[test]
    fn test_arity_preserved_with_degenerate_entries() {
        let rects = [
            RectXYWH::new(10.0, 10.0, 50.0, 50.0),
            RectXYWH::new(0.0, 0.0, -5.0, 20.0),
            RectXYWH::new(500.0, 500.0, 10.0, 10.0),
        ];
        let out = rasterize_rectangles(&rects, 256, 256, false);
        assert_eq!(out.per_region.len(), 3);
        assert_eq!(out.count, 3);
        assert_eq!(out.per_region[0].sum(), 2500.0);
        assert_eq!(out.per_region[1].sum(), 0.0);
        assert_eq!(out.per_region[2].sum(), 0.0);
        assert_eq!(out.combined.sum(), 2500.0);
    }

    #[test]
    fn test_empty_input_placeholder() {
        let out = rasterize_rectangles(&[], 128, 64, false);
        assert_eq!(out.count, 0);
        assert_eq!(out.per_region.len(), 1);
        assert_eq!(out.per_region[0].sum(), 0.0);
        assert_eq!(out.combined.sum(), 0.0);
        assert_eq!(out.combined.width(), 128);
        assert_eq!(out.combined.height(), 64);
    }

    #[test]
    fn test_empty_input_ignores_invert() {
        // The empty-input short circuit happens before inversion.
        let out = rasterize_rectangles(&[], 64, 64, true);
        assert_eq!(out.combined.sum(), 0.0);
        assert_eq!(out.per_region[0].sum(), 0.0);
    }

    #[test]
    fn test_overlapping_union_stays_binary() {
        let rects = [
            RectXYWH::new(0.0, 0.0, 40.0, 40.0),
            RectXYWH::new(20.0, 20.0, 40.0, 40.0),
        ];
        let out = rasterize_rectangles(&rects, 128, 128, false);
        // 2 * 1600 minus the 20x20 overlap counted once
        assert_eq!(out.combined.sum(), 1600.0 + 1600.0 - 400.0);
        assert_eq!(out.combined.get(30, 30), 1.0);
    }

    #[test]
    fn test_invert_flips_placeholder_masks() {
        let rects = [RectXYWH::new(-10.0, -10.0, 5.0, 5.0)];
        let out = rasterize_rectangles(&rects, 32, 32, true);
        // The degenerate region's zero mask becomes all ones under invert.
        assert_eq!(out.per_region[0].sum(), 32.0 * 32.0);
        assert_eq!(out.combined.sum(), 32.0 * 32.0);
    }

    #[test]
    fn test_partial_clamp() {
        let out = rasterize_rectangles(&[RectXYWH::new(-10.0, -10.0, 100.0, 100.0)], 256, 256, false);
        assert_eq!(out.combined.sum(), 90.0 * 90.0);
        assert_eq!(out.combined.get(0, 0), 1.0);
        assert_eq!(out.combined.get(89, 89), 1.0);
        assert_eq!(out.combined.get(90, 90), 0.0);
    }
}
