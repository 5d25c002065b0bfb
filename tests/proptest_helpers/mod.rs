#![allow(dead_code)]

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

use rastermask::{Canvas, RectXYWH, RectXYXY, Segment};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Rectangles that may be degenerate, fractional, or hang off the canvas.
pub fn arb_rect_xywh() -> BoxedStrategy<RectXYWH> {
    (
        -300.0f64..300.0,
        -300.0f64..300.0,
        -100.0f64..300.0,
        -100.0f64..300.0,
    )
        .prop_map(|(x, y, w, h)| RectXYWH::new(x, y, w, h))
        .boxed()
}

pub fn arb_rects(max: usize) -> BoxedStrategy<Vec<RectXYWH>> {
    proptest::collection::vec(arb_rect_xywh(), 0..=max).boxed()
}

/// Segments with small all-ones crops placed anywhere around a 128x128
/// canvas, drawn from a handful of labels so grouping actually triggers.
pub fn arb_segment() -> BoxedStrategy<Segment> {
    (
        1u32..40,
        1u32..40,
        -50.0f64..170.0,
        -50.0f64..170.0,
        prop_oneof![
            Just("person_0".to_string()),
            Just("person_1".to_string()),
            Just("car_0".to_string()),
            Just(String::new()),
        ],
        0.0f64..=1.0,
        prop::bool::ANY,
    )
        .prop_map(|(w, h, x1, y1, label, confidence, has_mask)| Segment {
            mask: has_mask.then(|| Canvas::filled(w, h, 1.0)),
            region: RectXYXY::new(x1, y1, x1 + f64::from(w), y1 + f64::from(h)),
            label,
            confidence,
        })
        .boxed()
}

pub fn arb_segments(max: usize) -> BoxedStrategy<Vec<Segment>> {
    proptest::collection::vec(arb_segment(), 0..=max).boxed()
}

/// Largest pixel value in a canvas.
pub fn max_pixel(canvas: &Canvas) -> f32 {
    canvas.data().iter().fold(0.0f32, |acc, &v| acc.max(v))
}
