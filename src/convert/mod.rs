//! The conversion pipeline.
//!
//! A run is one sequential pass:
//!
//! 1. enumerate annotation files in the input directory
//! 2. create the output tree
//! 3. draw the train/validation partition
//! 4. per record: resize the image, rewrite its polygons as label lines,
//!    write both into the record's split
//! 5. write `dataset.yaml`
//!
//! The first failing record aborts the run. Files written before the failure
//! stay on disk and no manifest is written.

pub mod report;

pub use report::DatasetReport;

use std::path::PathBuf;

use indicatif::ProgressBar;

use crate::annotation::read_annotation;
use crate::class_table::ClassTable;
use crate::error::SegsetError;
use crate::record::{enumerate_records, Record};
use crate::resize::{load_and_resize, save_png};
use crate::split::{draw_partition, Split};
use crate::yolo::{label_lines, write_label_file, write_manifest, OutputLayout};

/// Inputs for a conversion run.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvertOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Fraction of records sent to validation. Values outside `[0, 1]` are
    /// accepted and clamp to "none" or "all".
    pub val_ratio: f64,
    /// Makes the split reproducible when set.
    pub seed: Option<u64>,
}

impl ConvertOptions {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            val_ratio: 0.2,
            seed: None,
        }
    }
}

/// Result of transforming a single record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordOutcome {
    pub input_size: u32,
    pub output_size: u32,
    pub shape_count: usize,
}

/// Converts a whole input directory without progress output.
pub fn convert_dataset(opts: &ConvertOptions) -> Result<DatasetReport, SegsetError> {
    convert_dataset_with_progress(opts, &ProgressBar::hidden())
}

/// Converts a whole input directory, ticking `progress` once per record.
pub fn convert_dataset_with_progress(
    opts: &ConvertOptions,
    progress: &ProgressBar,
) -> Result<DatasetReport, SegsetError> {
    let records = enumerate_records(&opts.input_dir)?;
    log::info!(
        "found {} annotation file(s) in {}",
        records.len(),
        opts.input_dir.display()
    );

    let layout = OutputLayout::prepare(&opts.output_dir)?;

    if !(0.0..=1.0).contains(&opts.val_ratio) {
        log::warn!(
            "val_ratio {} is outside [0, 1]; the validation split will be empty or hold everything",
            opts.val_ratio
        );
    }
    let partition = draw_partition(records.len(), opts.val_ratio, opts.seed);
    log::info!(
        "split {} record(s): {} train, {} val",
        partition.total(),
        partition.train_count(),
        partition.val_count()
    );

    let mut classes = ClassTable::new();
    let mut sizes = (0, 0);

    progress.set_length(records.len() as u64);
    for (index, record) in records.iter().enumerate() {
        let outcome = transform_record(record, partition.split_of(index), &layout, &mut classes)?;
        sizes = (outcome.input_size, outcome.output_size);
        progress.inc(1);
    }
    progress.finish_and_clear();

    let manifest_path = write_manifest(&layout, &classes)?;
    log::info!("wrote {}", manifest_path.display());

    Ok(DatasetReport {
        output_dir: opts.output_dir.clone(),
        manifest_path,
        input_image_size: sizes.0,
        output_image_size: sizes.1,
        train_count: partition.train_count(),
        val_count: partition.val_count(),
        classes: DatasetReport::class_names(&classes),
    })
}

/// Resizes one record's image and writes it with its label file into `split`.
///
/// New labels are added to `classes`. Coordinates are normalized by the
/// source image height, not the resized one.
pub fn transform_record(
    record: &Record,
    split: Split,
    layout: &OutputLayout,
    classes: &mut ClassTable,
) -> Result<RecordOutcome, SegsetError> {
    let resized = load_and_resize(&record.image_path)?;
    let annotation = read_annotation(&record.annotation_path)?;
    let labels = label_lines(&annotation.shapes, resized.input_size, classes);

    let image_path = layout.images_dir(split).join(record.image_file_name());
    let label_path = layout.labels_dir(split).join(record.label_file_name());
    save_png(&resized.image, &image_path)?;
    write_label_file(&label_path, &labels)?;

    log::debug!(
        "{} -> {} ({} shape(s), {}px -> {}px)",
        record.display_name(),
        split,
        annotation.shapes.len(),
        resized.input_size,
        resized.output_size
    );

    Ok(RecordOutcome {
        input_size: resized.input_size,
        output_size: resized.output_size,
        shape_count: annotation.shapes.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use std::fs;
    use std::path::Path;

    fn write_record(dir: &Path, name: &str, size: u32, json: &str) -> Record {
        RgbImage::new(size, size)
            .save(dir.join(format!("{name}.png")))
            .expect("write png");
        let annotation_path = dir.join(format!("{name}.json"));
        fs::write(&annotation_path, json).expect("write json");
        Record::from_annotation_path(&annotation_path)
    }

    #[test]
    fn transform_writes_into_chosen_split() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let input = temp.path().join("in");
        fs::create_dir_all(&input).unwrap();
        let record = write_record(
            &input,
            "img",
            100,
            r#"{"shapes": [{"label": "car", "points": [[50, 100], [0, 25]]}]}"#,
        );
        let layout = OutputLayout::prepare(&temp.path().join("out")).unwrap();
        let mut classes = ClassTable::new();

        let outcome = transform_record(&record, Split::Val, &layout, &mut classes).unwrap();

        assert_eq!(outcome.input_size, 100);
        assert_eq!(outcome.output_size, 96);
        assert_eq!(outcome.shape_count, 1);
        assert_eq!(
            fs::read_to_string(layout.labels_val.join("img.txt")).unwrap(),
            "0 0.5 1.0 0.0 0.25\n"
        );
        assert!(layout.images_val.join("img.png").is_file());
        assert!(!layout.images_train.join("img.png").exists());
    }

    #[test]
    fn missing_image_aborts_before_labels_are_assigned() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let annotation_path = temp.path().join("orphan.json");
        fs::write(
            &annotation_path,
            r#"{"shapes": [{"label": "car", "points": []}]}"#,
        )
        .unwrap();
        let record = Record::from_annotation_path(&annotation_path);
        let layout = OutputLayout::prepare(&temp.path().join("out")).unwrap();
        let mut classes = ClassTable::new();

        let err = transform_record(&record, Split::Train, &layout, &mut classes).unwrap_err();
        assert!(matches!(err, SegsetError::ImageRead { .. }));
        assert!(classes.is_empty());
    }
}
