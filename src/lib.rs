//! Segset: build a YOLO segmentation dataset from LabelMe polygons.
//!
//! Segset reads a directory of `<name>.png` + `<name>.json` pairs and writes
//! a training-ready dataset: square, stride-aligned images, one label file
//! per image with normalized polygons, a random train/validation split and a
//! `dataset.yaml` manifest listing the classes.
//!
//! # Modules
//!
//! - [`annotation`]: LabelMe JSON input
//! - [`record`]: input enumeration
//! - [`class_table`]: label to class ID assignment
//! - [`split`]: train/validation partitioning
//! - [`resize`]: stride-aligned resizing
//! - [`yolo`]: label lines, output layout and manifest
//! - [`convert`]: the end-to-end pipeline
//! - [`error`]: error types for segset operations

pub mod annotation;
pub mod class_table;
pub mod convert;
pub mod error;
pub mod record;
pub mod resize;
pub mod split;
pub mod yolo;

use std::path::PathBuf;

use clap::Parser;

pub use class_table::{ClassId, ClassTable};
pub use convert::{convert_dataset, convert_dataset_with_progress, ConvertOptions, DatasetReport};
pub use error::SegsetError;

/// The segset CLI application.
#[derive(Parser, Debug)]
#[command(name = "segset")]
#[command(version, about)]
struct Cli {
    /// Input directory containing images (<name>.png) and jsons (<name>.json).
    #[arg(short = 'i', long = "input_dir")]
    input_dir: PathBuf,

    /// Output directory for the generated dataset.
    #[arg(short = 'o', long = "output_dir")]
    output_dir: PathBuf,

    /// Ratio of records moved to the validation split.
    #[arg(
        short = 'r',
        long = "val_ratio",
        default_value_t = 0.2,
        allow_negative_numbers = true
    )]
    val_ratio: f64,

    /// Seed for a reproducible train/validation split.
    #[arg(long = "seed")]
    seed: Option<u64>,
}

impl Cli {
    fn into_options(self) -> ConvertOptions {
        ConvertOptions {
            input_dir: self.input_dir,
            output_dir: self.output_dir,
            val_ratio: self.val_ratio,
            seed: self.seed,
        }
    }
}

/// Run the segset CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), SegsetError> {
    let opts = Cli::parse().into_options();

    log::info!("generating dataset into {}", opts.output_dir.display());
    let progress = progress_bar();
    let report = convert_dataset_with_progress(&opts, &progress)?;

    print!("{}", report);
    Ok(())
}

fn progress_bar() -> indicatif::ProgressBar {
    let pb = indicatif::ProgressBar::new(0);
    if let Ok(style) = indicatif::ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
    {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb
}
