use std::path::PathBuf;
use thiserror::Error;

/// The main error type for segset operations.
#[derive(Debug, Error)]
pub enum SegsetError {
    #[error("cannot find the input dir.")]
    InputDirNotFound { path: PathBuf },

    #[error("no data in the input dir.")]
    NoAnnotations { path: PathBuf },

    #[error("Failed to list input dir {path}: {source}")]
    InputDirRead {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("catch error when preparing your dataset folder {path}: {source}")]
    OutputDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read annotation {path}: {source}")]
    AnnotationRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse annotation JSON from {path}: {source}")]
    AnnotationParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read image {path}: {source}")]
    ImageRead {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image {path} is {size}px high, below the {stride}px stride")]
    ImageTooSmall {
        path: PathBuf,
        size: u32,
        stride: u32,
    },

    #[error("Failed to write image {path}: {source}")]
    ImageWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write label file {path}: {source}")]
    LabelWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write manifest {path}: {source}")]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode class name {label:?} for the manifest: {source}")]
    ManifestEncode {
        label: String,
        #[source]
        source: serde_yaml::Error,
    },
}
