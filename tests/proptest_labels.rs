use std::collections::HashSet;

use proptest::prelude::*;
use segset::resize::{stride_aligned_size, STRIDE};
use segset::split::{draw_partition, validation_count, Split};
use segset::yolo::{label_lines, parse_label_line};
use segset::ClassTable;

mod proptest_helpers;

proptest! {
    #![proptest_config(proptest_helpers::proptest_config())]

    #[test]
    fn points_inside_image_normalize_into_unit_range(
        (size, shapes) in proptest_helpers::arb_sized_record(8)
    ) {
        let mut classes = ClassTable::new();
        let text = label_lines(&shapes, size, &mut classes);

        let lines: Vec<&str> = text.lines().collect();
        prop_assert_eq!(lines.len(), shapes.len());

        for (line, shape) in lines.iter().zip(&shapes) {
            let (class_id, points) = parse_label_line(line).expect("well-formed line");
            prop_assert_eq!(Some(class_id), classes.get(&shape.label).map(|id| id.as_usize()));
            prop_assert_eq!(points.len(), shape.points.len());
            for (x, y) in points {
                prop_assert!((0.0..=1.0).contains(&x), "x={} out of range", x);
                prop_assert!((0.0..=1.0).contains(&y), "y={} out of range", y);
            }
        }
    }

    #[test]
    fn class_ids_are_contiguous_in_first_seen_order(
        (size, shapes) in proptest_helpers::arb_sized_record(20)
    ) {
        let mut classes = ClassTable::new();
        label_lines(&shapes, size, &mut classes);

        let mut seen: Vec<&str> = Vec::new();
        for shape in &shapes {
            if !seen.contains(&shape.label.as_str()) {
                seen.push(shape.label.as_str());
            }
        }

        let table: Vec<(usize, &str)> = classes.iter().map(|(id, name)| (id.as_usize(), name)).collect();
        let expected: Vec<(usize, &str)> = seen.into_iter().enumerate().collect();
        prop_assert_eq!(table, expected);
    }

    #[test]
    fn stride_aligned_size_is_largest_multiple(dim in 0u32..100_000) {
        let size = stride_aligned_size(dim);
        prop_assert_eq!(size % STRIDE, 0);
        prop_assert!(size <= dim);
        prop_assert!(dim - size < STRIDE);
    }

    #[test]
    fn partition_covers_every_record_once(
        total in 0usize..200,
        ratio in -0.5f64..1.5,
        seed in proptest::option::of(any::<u64>()),
    ) {
        let partition = draw_partition(total, ratio, seed);

        let val: HashSet<usize> = (0..total)
            .filter(|idx| partition.split_of(*idx) == Split::Val)
            .collect();
        let train = (0..total).filter(|idx| partition.split_of(*idx) == Split::Train).count();

        prop_assert_eq!(val.len(), validation_count(total, ratio));
        prop_assert_eq!(val.len() + train, total);
        prop_assert_eq!(partition.train_count(), train);
        prop_assert_eq!(partition.total(), total);
        prop_assert_eq!(partition.validation_indices().collect::<HashSet<_>>(), val);
    }
}
