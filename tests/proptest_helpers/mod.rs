#![allow(dead_code)]

use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

use segset::annotation::Shape;

pub const LABELS: [&str; 6] = ["car", "truck", "bus", "person", "dog", "tree"];

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

/// Source image sizes that survive stride alignment.
pub fn arb_image_size() -> impl Strategy<Value = u32> {
    32u32..=4096
}

/// A point inside a square image of side `size`.
pub fn arb_point_within(size: u32) -> impl Strategy<Value = (f64, f64)> {
    let max = size as f64;
    (0.0..=max, 0.0..=max)
}

/// A polygon with up to 12 points inside an image of side `size`.
pub fn arb_polygon_within(size: u32) -> impl Strategy<Value = Vec<(f64, f64)>> {
    proptest::collection::vec(arb_point_within(size), 0..=12)
}

/// Shapes drawn from a small label pool so labels repeat.
pub fn arb_shapes_within(size: u32, max_shapes: usize) -> impl Strategy<Value = Vec<Shape>> {
    proptest::collection::vec(
        (proptest::sample::select(LABELS.to_vec()), arb_polygon_within(size))
            .prop_map(|(label, points)| Shape::new(label, points)),
        0..=max_shapes,
    )
}

/// An image size together with shapes that fit inside it.
pub fn arb_sized_record(max_shapes: usize) -> impl Strategy<Value = (u32, Vec<Shape>)> {
    arb_image_size().prop_flat_map(move |size| (Just(size), arb_shapes_within(size, max_shapes)))
}
