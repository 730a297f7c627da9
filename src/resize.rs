//! Stride-aligned image resizing.

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

use crate::error::SegsetError;

/// Training input sizes must be a multiple of this.
pub const STRIDE: u32 = 32;

/// Largest multiple of [`STRIDE`] not exceeding `dim`.
pub fn stride_aligned_size(dim: u32) -> u32 {
    dim / STRIDE * STRIDE
}

/// A decoded source image and its resized counterpart.
#[derive(Debug)]
pub struct ResizedImage {
    pub image: DynamicImage,
    /// Source height, the dimension coordinates are normalized by.
    pub input_size: u32,
    pub output_size: u32,
}

/// Loads the image at `path` and resizes it to a square stride-aligned size.
///
/// The source height is authoritative: a non-square image is resized using its
/// height for both sides, and a warning is logged.
///
/// # Errors
/// Returns an error if the image cannot be decoded or is shorter than one
/// stride.
pub fn load_and_resize(path: &Path) -> Result<ResizedImage, SegsetError> {
    let image = image::open(path).map_err(|source| SegsetError::ImageRead {
        path: path.to_path_buf(),
        source,
    })?;

    resize_to_stride(image, path)
}

/// Resizes an already decoded image; `path` is only used for diagnostics.
pub fn resize_to_stride(image: DynamicImage, path: &Path) -> Result<ResizedImage, SegsetError> {
    let (width, height) = image.dimensions();
    if width != height {
        log::warn!(
            "{} is {}x{}, not square; using height {} for both sides",
            path.display(),
            width,
            height,
            height
        );
    }

    let output_size = stride_aligned_size(height);
    if output_size == 0 {
        return Err(SegsetError::ImageTooSmall {
            path: path.to_path_buf(),
            size: height,
            stride: STRIDE,
        });
    }

    let resized = image.resize_exact(output_size, output_size, FilterType::Triangle);

    Ok(ResizedImage {
        image: resized,
        input_size: height,
        output_size,
    })
}

/// Writes `image` as PNG.
pub fn save_png(image: &DynamicImage, path: &Path) -> Result<(), SegsetError> {
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| SegsetError::ImageWrite {
            path: path.to_path_buf(),
            source,
        })
}
