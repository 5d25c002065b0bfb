//! Rasterization of segmentation results into binary masks.
//!
//! A segment is a cropped mask plus the XYXY region it was cropped from,
//! tagged with a label and a confidence score. Rasterization places each
//! surviving segment's crop back onto a full-size canvas, optionally merging
//! segments that share a label into one group, and unions the groups into a
//! combined mask.

use std::cmp::Ordering;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::filter::LabelFilter;
use crate::geom::RectXYXY;
use crate::mask::Canvas;

/// Pixels at or above this value count as covered for the area filter.
const COVERAGE_THRESHOLD: f32 = 0.5;

/// One segmentation result: a cropped mask and where it belongs.
///
/// This is a plain record - callers adapt whatever shape their detector
/// produces into it before rasterizing. A segment with no mask can still
/// carry a confidence score (some detectors report detections they could not
/// segment), but it contributes no pixels.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Segment {
    /// The cropped mask, sized to the crop region (or not - mismatches are
    /// resolved by top-left-aligned copy, never scaling).
    pub mask: Option<Canvas>,

    /// Placement region on the full canvas, in XYXY form.
    pub region: RectXYXY,

    /// Detector label, e.g. `"person_0"`.
    #[serde(default)]
    pub label: String,

    /// Confidence score in `[0, 1]`.
    #[serde(default = "default_confidence")]
    pub confidence: f64,
}

fn default_confidence() -> f64 {
    1.0
}

/// A set of segments together with the canvas dimensions they refer to.
///
/// Dimensions are `(height, width)` ordered, matching the wire convention of
/// segmentation hosts.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SegmentSet {
    pub height: u32,
    pub width: u32,
    pub segments: Vec<Segment>,
}

/// Iteration order applied to segments before grouping.
///
/// Sorting never changes which pixels end up set (union is order
/// independent); it changes the order of groups in the output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Preserve input order.
    #[default]
    Default,
    /// Sort by the region's left edge, ties broken by top edge.
    XThenY,
    /// Sort by the region's top edge, ties broken by left edge.
    YThenX,
    /// Sort by confidence, highest first.
    ConfidenceHighToLow,
}

impl SortOrder {
    /// Parses the host-facing string form (`"x_then_y"` etc.).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "default" => Some(Self::Default),
            "x_then_y" => Some(Self::XThenY),
            "y_then_x" => Some(Self::YThenX),
            "confidence_high_to_low" => Some(Self::ConfidenceHighToLow),
            _ => None,
        }
    }
}

/// Filtering, grouping, and output options for [`rasterize_segments`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SegmentOptions {
    /// Wildcard pattern a segment's label must match. `"*"` keeps everything.
    pub label_filter: String,

    /// Segments below this confidence are ignored.
    pub min_confidence: f64,

    /// Groups covering less than this percentage of the canvas are dropped.
    pub min_area_percent: f64,

    /// Iteration order applied before grouping.
    pub sort_order: SortOrder,

    /// Merge segments sharing a label into one group (union of their masks,
    /// max of their confidences).
    pub union_same_labels: bool,

    /// Flip all output masks after union and filtering.
    pub invert: bool,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            label_filter: "*".to_string(),
            min_confidence: 0.0,
            min_area_percent: 0.0,
            sort_order: SortOrder::Default,
            union_same_labels: true,
            invert: false,
        }
    }
}

/// Output of [`rasterize_segments`].
#[derive(Clone, Debug)]
pub struct SegmentsOutput {
    /// Union (per-pixel max) of every surviving group.
    pub combined: Canvas,

    /// One mask per surviving group, in group iteration order. If nothing
    /// survives this holds exactly one all-zero placeholder.
    pub groups: Vec<Canvas>,

    /// One `"<label>: <confidence>"` string per surviving group (confidence
    /// formatted with two decimal places). A single empty string if nothing
    /// survives.
    pub labels: Vec<String>,

    /// Number of surviving groups (0 if nothing survives, even though a
    /// placeholder mask is still returned).
    pub count: usize,
}

fn empty_output(width: u32, height: u32) -> SegmentsOutput {
    SegmentsOutput {
        combined: Canvas::zeros(width, height),
        groups: vec![Canvas::zeros(width, height)],
        labels: vec![String::new()],
        count: 0,
    }
}

/// Rasterizes a segment set into per-group masks and a combined union mask.
///
/// Processing order: sort, group by label (when requested), then per group
/// filter members by label pattern and confidence, place each surviving
/// crop on the canvas, union into the group mask, and finally drop groups
/// below the minimum area. Invalid segments (no mask, or a region that
/// clamps to nothing) are dropped entirely rather than kept as zero
/// placeholders - deliberately unlike the rectangle rasterizer.
///
/// Never fails; when nothing survives the output is a single all-zero group
/// mask, one empty label, and a count of zero. Inversion is applied to the
/// combined mask before that substitution, so filtering everything away under
/// `invert` yields an all-ones combined mask next to the zero placeholder.
/// An empty segment list short-circuits earlier and stays all-zero.
pub fn rasterize_segments(set: &SegmentSet, opts: &SegmentOptions) -> SegmentsOutput {
    let (width, height) = (set.width, set.height);
    if set.segments.is_empty() {
        return empty_output(width, height);
    }

    let mut order: Vec<&Segment> = set.segments.iter().collect();
    sort_segments(&mut order, opts.sort_order);

    let groups = if opts.union_same_labels {
        group_by_label(&order)
    } else {
        order
            .iter()
            .map(|seg| (seg.label.clone(), vec![*seg]))
            .collect()
    };

    let filter = LabelFilter::new(&opts.label_filter);
    let total_pixels = height as u64 * width as u64;
    // Pixel-unit comparison so a group covering exactly the requested
    // percentage survives (a float percent compare would lose it to slop).
    let min_pixels = (total_pixels as f64 * opts.min_area_percent / 100.0).floor() as u64;

    let mut combined = Canvas::zeros(width, height);
    let mut masks: Vec<Canvas> = Vec::new();
    let mut labels: Vec<String> = Vec::new();

    for (label, members) in groups {
        let mut group_mask = Canvas::zeros(width, height);
        let mut max_confidence = 0.0f64;
        let mut has_pixels = false;

        for seg in members {
            if !filter.matches(&seg.label) {
                continue;
            }
            if seg.confidence < opts.min_confidence {
                continue;
            }
            // Confidence counts toward the group even when the mask is
            // missing or unplaceable.
            max_confidence = max_confidence.max(seg.confidence);

            let Some(sub) = seg.mask.as_ref() else {
                continue;
            };
            let span = seg.region.clamp_to(width, height);
            if span.is_empty() {
                debug!(
                    "dropping segment {:?}: region {:?} clamps to nothing on {width}x{height}",
                    seg.label, seg.region
                );
                continue;
            }

            let mut placed = Canvas::zeros(width, height);
            placed.blit_top_left(span, sub);
            group_mask.union_in_place(&placed);
            has_pixels = true;
        }

        if !has_pixels {
            continue;
        }
        if (group_mask.count_at_least(COVERAGE_THRESHOLD) as u64) < min_pixels {
            debug!(
                "dropping group {label:?}: below {} percent area",
                opts.min_area_percent
            );
            continue;
        }

        combined.union_in_place(&group_mask);
        masks.push(group_mask);
        labels.push(format!("{}: {:.2}", label, max_confidence));
    }

    // Invert happens before the placeholder substitution below: when every
    // group was filtered away under invert, the combined mask comes back all
    // ones while the placeholder group mask stays zero.
    if opts.invert {
        combined.invert_in_place();
        for mask in &mut masks {
            mask.invert_in_place();
        }
    }

    if masks.is_empty() {
        return SegmentsOutput {
            combined,
            groups: vec![Canvas::zeros(width, height)],
            labels: vec![String::new()],
            count: 0,
        };
    }

    let count = masks.len();
    SegmentsOutput {
        combined,
        groups: masks,
        labels,
        count,
    }
}

/// Stable-sorts segments per the requested order.
fn sort_segments(order: &mut [&Segment], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Default => {}
        SortOrder::XThenY => {
            order.sort_by_key(|seg| (seg.region.x1 as i64, seg.region.y1 as i64));
        }
        SortOrder::YThenX => {
            order.sort_by_key(|seg| (seg.region.y1 as i64, seg.region.x1 as i64));
        }
        SortOrder::ConfidenceHighToLow => {
            order.sort_by(|a, b| {
                b.confidence
                    .partial_cmp(&a.confidence)
                    .unwrap_or(Ordering::Equal)
            });
        }
    }
}

/// Groups segments by identical label, preserving first-seen label order.
fn group_by_label<'a>(order: &[&'a Segment]) -> Vec<(String, Vec<&'a Segment>)> {
    let mut groups: Vec<(String, Vec<&'a Segment>)> = Vec::new();
    for &seg in order {
        match groups.iter_mut().find(|(label, _)| *label == seg.label) {
            Some((_, members)) => members.push(seg),
            None => groups.push((seg.label.clone(), vec![seg])),
        }
    }
    groups
}
