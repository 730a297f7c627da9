//! LabelMe annotation files.
//!
//! Only the fields the converter consumes are modelled. Everything else a
//! LabelMe file carries (`imageData`, `flags`, `shape_type`, ...) is skipped
//! during deserialization.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::SegsetError;

/// One annotation file: the polygons drawn on a single image.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Annotation {
    pub shapes: Vec<Shape>,
}

/// A labelled polygon in pixel coordinates.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Shape {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl Shape {
    pub fn new(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }
}

/// Reads an annotation from a LabelMe JSON file.
///
/// # Errors
/// Returns an error if the file cannot be opened or is not valid LabelMe JSON.
pub fn read_annotation(path: &Path) -> Result<Annotation, SegsetError> {
    let file = File::open(path).map_err(|source| SegsetError::AnnotationRead {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| SegsetError::AnnotationParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses an annotation from a JSON string.
///
/// Useful for testing without file I/O.
pub fn from_annotation_str(json: &str) -> Result<Annotation, serde_json::Error> {
    serde_json::from_str(json)
}
