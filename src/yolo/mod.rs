//! YOLO segmentation label files.
//!
//! Each shape becomes one line: the class ID followed by the polygon's points
//! as normalized `x y` pairs. Points are divided by the *source* image size,
//! not the resized one.

pub mod layout;
pub mod manifest;

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::annotation::Shape;
use crate::class_table::{ClassId, ClassTable};
use crate::error::SegsetError;

pub use layout::OutputLayout;
pub use manifest::{render_manifest, write_manifest, MANIFEST_FILE_NAME};

/// Scales a pixel-space point into unit range by the source image size.
#[inline]
pub fn normalize_point((x, y): (f64, f64), input_size: u32) -> (f64, f64) {
    let size = input_size as f64;
    (x / size, y / size)
}

/// Appends one label line for a polygon.
pub fn push_label_line(
    out: &mut String,
    class_id: ClassId,
    points: &[(f64, f64)],
    input_size: u32,
) {
    // Writing into a String cannot fail.
    let _ = write!(out, "{}", class_id);
    for &point in points {
        let (x, y) = normalize_point(point, input_size);
        let _ = write!(out, " {:?} {:?}", x, y);
    }
    out.push('\n');
}

/// Renders the label file for one record, assigning class IDs to new labels
/// as they are met.
pub fn label_lines(shapes: &[Shape], input_size: u32, classes: &mut ClassTable) -> String {
    let mut out = String::with_capacity(shapes.len() * 64);
    for shape in shapes {
        let class_id = classes.get_or_insert(&shape.label);
        push_label_line(&mut out, class_id, &shape.points, input_size);
    }
    out
}

/// Writes a rendered label file, replacing any existing one.
pub fn write_label_file(path: &Path, contents: &str) -> Result<(), SegsetError> {
    fs::write(path, contents).map_err(|source| SegsetError::LabelWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses one label line back into its class ID and coordinate list.
///
/// Returns `None` for blank lines or lines that are not a class ID followed
/// by an even number of floats.
pub fn parse_label_line(line: &str) -> Option<(usize, Vec<(f64, f64)>)> {
    let mut tokens = line.split_whitespace();
    let class_id = tokens.next()?.parse::<usize>().ok()?;
    let values = tokens
        .map(|token| token.parse::<f64>().ok())
        .collect::<Option<Vec<f64>>>()?;

    if values.len() % 2 != 0 {
        return None;
    }

    let points = values.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect();
    Some((class_id, points))
}
