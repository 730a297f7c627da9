//! Input records: annotation files and the images they describe.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::SegsetError;

const ANNOTATION_EXTENSION: &str = "json";
const IMAGE_EXTENSION: &str = "png";
const LABEL_EXTENSION: &str = "txt";

/// One annotation file plus its paired image, sharing a base name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// File name of the annotation without its `.json` extension. Kept as an
    /// OS string so names that are not valid UTF-8 still pair up.
    pub base_name: OsString,
    pub image_path: PathBuf,
    pub annotation_path: PathBuf,
}

impl Record {
    /// Builds the record for an annotation file, pairing it with
    /// `<base_name>.png` in the same directory.
    pub fn from_annotation_path(annotation_path: &Path) -> Self {
        let base_name = annotation_path
            .file_stem()
            .map(OsStr::to_os_string)
            .unwrap_or_default();

        Self {
            image_path: annotation_path.with_extension(IMAGE_EXTENSION),
            annotation_path: annotation_path.to_path_buf(),
            base_name,
        }
    }

    /// Label file name written for this record.
    pub fn label_file_name(&self) -> OsString {
        self.file_name_with(LABEL_EXTENSION)
    }

    /// Image file name written for this record.
    pub fn image_file_name(&self) -> OsString {
        self.file_name_with(IMAGE_EXTENSION)
    }

    /// Base name for log lines; invalid UTF-8 is replaced.
    pub fn display_name(&self) -> Cow<'_, str> {
        self.base_name.to_string_lossy()
    }

    // `a.b` becomes `a.b.txt`, not `a.txt`.
    fn file_name_with(&self, extension: &str) -> OsString {
        let mut name = self.base_name.clone();
        name.push(".");
        name.push(extension);
        name
    }
}

/// Lists every annotation file directly inside `input_dir`.
///
/// Records come back sorted by base name so the processing order, and with it
/// the class ID assignment, does not depend on directory iteration order.
///
/// # Errors
/// - [`SegsetError::InputDirNotFound`] if `input_dir` is not a directory.
/// - [`SegsetError::NoAnnotations`] if it holds no `*.json` files.
pub fn enumerate_records(input_dir: &Path) -> Result<Vec<Record>, SegsetError> {
    if !input_dir.is_dir() {
        return Err(SegsetError::InputDirNotFound {
            path: input_dir.to_path_buf(),
        });
    }

    let mut records = Vec::new();
    for entry in WalkDir::new(input_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| SegsetError::InputDirRead {
            path: input_dir.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_file() || !is_annotation_file(entry.path()) {
            continue;
        }

        records.push(Record::from_annotation_path(entry.path()));
    }

    if records.is_empty() {
        return Err(SegsetError::NoAnnotations {
            path: input_dir.to_path_buf(),
        });
    }

    records.sort_by(|a, b| a.base_name.cmp(&b.base_name));
    Ok(records)
}

fn is_annotation_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(ANNOTATION_EXTENSION))
}
