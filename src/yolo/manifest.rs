//! `dataset.yaml`, the descriptor training pipelines load.

use std::fs;
use std::path::{Path, PathBuf};

use super::layout::OutputLayout;
use crate::class_table::ClassTable;
use crate::error::SegsetError;
use crate::split::Split;

pub const MANIFEST_FILE_NAME: &str = "dataset.yaml";

/// Renders the manifest for a dataset rooted at `root`.
///
/// The comment lines are part of the format consumers expect, which is why
/// the document is assembled by hand rather than serialized.
pub fn render_manifest(root: &Path, classes: &ClassTable) -> Result<String, SegsetError> {
    let root_str = root.display().to_string();
    let mut yaml = String::new();

    yaml.push_str(&format!("path: {}\n", yaml_scalar(&root_str)?));
    yaml.push_str(&format!(
        "train: {}\n",
        OutputLayout::images_subpath(Split::Train)
    ));
    yaml.push_str(&format!("val: {}\n", OutputLayout::images_subpath(Split::Val)));
    yaml.push_str("test: # no test\n");
    yaml.push_str("# number of class\n");
    yaml.push_str(&format!("nc: {}\n", classes.len()));
    yaml.push_str("# class names\n");
    yaml.push_str("names:\n");
    for (id, name) in classes.iter() {
        yaml.push_str(&format!("  {}: {}\n", id, yaml_scalar(name)?));
    }

    Ok(yaml)
}

/// Writes `dataset.yaml` into the layout root and returns its path.
pub fn write_manifest(layout: &OutputLayout, classes: &ClassTable) -> Result<PathBuf, SegsetError> {
    let yaml = render_manifest(&layout.root, classes)?;
    let path = layout.root.join(MANIFEST_FILE_NAME);
    fs::write(&path, yaml).map_err(|source| SegsetError::ManifestWrite {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Encodes `raw` as an inline YAML scalar, quoting only when needed.
fn yaml_scalar(raw: &str) -> Result<String, SegsetError> {
    let encoded = serde_yaml::to_string(raw).map_err(|source| SegsetError::ManifestEncode {
        label: raw.to_string(),
        source,
    })?;
    let encoded = encoded.trim_end_matches('\n');

    // Multi-line values come back as block scalars, which cannot sit inline.
    if encoded.contains('\n') {
        return Ok(double_quoted(raw));
    }

    Ok(encoded.to_string())
}

fn double_quoted(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    out.push('"');
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}
