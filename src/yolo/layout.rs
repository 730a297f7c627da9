//! Output directory tree of a generated dataset.
//!
//! ```text
//! <root>/
//!   dataset.yaml
//!   images/{train,val}/<base>.png
//!   labels/{train,val}/<base>.txt
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SegsetError;
use crate::split::Split;

/// Resolved output paths. Existing files are left alone; later writes to the
/// same names overwrite them.
#[derive(Clone, Debug)]
pub struct OutputLayout {
    pub root: PathBuf,
    pub images_train: PathBuf,
    pub images_val: PathBuf,
    pub labels_train: PathBuf,
    pub labels_val: PathBuf,
}

impl OutputLayout {
    /// Computes the layout under `root` without touching the filesystem.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            images_train: root.join("images").join(Split::Train.dir_name()),
            images_val: root.join("images").join(Split::Val.dir_name()),
            labels_train: root.join("labels").join(Split::Train.dir_name()),
            labels_val: root.join("labels").join(Split::Val.dir_name()),
        }
    }

    /// Computes the layout and creates all four split directories.
    ///
    /// # Errors
    /// Returns [`SegsetError::OutputDirCreate`] naming the directory that
    /// could not be created.
    pub fn prepare(root: &Path) -> Result<Self, SegsetError> {
        let layout = Self::new(root);
        for dir in [
            &layout.images_train,
            &layout.images_val,
            &layout.labels_train,
            &layout.labels_val,
        ] {
            fs::create_dir_all(dir).map_err(|source| SegsetError::OutputDirCreate {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(layout)
    }

    pub fn images_dir(&self, split: Split) -> &Path {
        match split {
            Split::Train => &self.images_train,
            Split::Val => &self.images_val,
        }
    }

    pub fn labels_dir(&self, split: Split) -> &Path {
        match split {
            Split::Train => &self.labels_train,
            Split::Val => &self.labels_val,
        }
    }

    /// Subpath of a split's images relative to the root, as written to the
    /// manifest.
    pub fn images_subpath(split: Split) -> String {
        format!("images/{}", split.dir_name())
    }
}
