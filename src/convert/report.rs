//! Summary printed after a conversion run.

use std::fmt;
use std::path::PathBuf;

use crate::class_table::ClassTable;

/// What a conversion run produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DatasetReport {
    pub output_dir: PathBuf,
    pub manifest_path: PathBuf,
    /// Source size of the last processed image.
    pub input_image_size: u32,
    /// Stride-aligned size of the last processed image.
    pub output_image_size: u32,
    pub train_count: usize,
    pub val_count: usize,
    /// Class names in ID order.
    pub classes: Vec<String>,
}

impl DatasetReport {
    pub fn total(&self) -> usize {
        self.train_count + self.val_count
    }

    pub(crate) fn class_names(classes: &ClassTable) -> Vec<String> {
        classes.iter().map(|(_, name)| name.to_string()).collect()
    }
}

impl fmt::Display for DatasetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----------  Dataset Info  ----------")?;
        writeln!(f, "    Path: {}", self.output_dir.display())?;
        writeln!(
            f,
            "    Image Size: {} (Input)  --->  {} (output) # image size is a multiplication of 32.",
            self.input_image_size, self.output_image_size
        )?;
        writeln!(f, "    Number of training images:   {}", self.train_count)?;
        writeln!(f, "    Number of validation images: {}", self.val_count)?;
        writeln!(f, "    Available classes: ")?;
        for (id, name) in self.classes.iter().enumerate() {
            writeln!(f, "  {}: {}", id, name)?;
        }
        Ok(())
    }
}
