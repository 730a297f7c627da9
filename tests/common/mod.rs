#![allow(dead_code)]

use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};

/// Writes a solid-colour PNG of the given size.
pub fn write_png(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    RgbImage::from_pixel(width, height, Rgb([40, 120, 200]))
        .save(path)
        .expect("write png file");
}

/// Builds a LabelMe document from `(label, points)` pairs.
pub fn labelme_json(shapes: &[(&str, &[(f64, f64)])], size: u32) -> String {
    let shapes: Vec<serde_json::Value> = shapes
        .iter()
        .map(|(label, points)| {
            serde_json::json!({
                "label": label,
                "points": points.iter().map(|(x, y)| [x, y]).collect::<Vec<_>>(),
                "group_id": null,
                "shape_type": "polygon",
                "flags": {}
            })
        })
        .collect();

    serde_json::json!({
        "version": "5.2.1",
        "flags": {},
        "shapes": shapes,
        "imagePath": "",
        "imageData": null,
        "imageHeight": size,
        "imageWidth": size
    })
    .to_string()
}

/// Writes a `<name>.png` + `<name>.json` record into `dir`.
pub fn write_record(dir: &Path, name: &str, size: u32, shapes: &[(&str, &[(f64, f64)])]) {
    write_png(&dir.join(format!("{name}.png")), size, size);
    fs::write(dir.join(format!("{name}.json")), labelme_json(shapes, size))
        .expect("write annotation");
}

/// Lists file names in `dir`, sorted.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|entry| {
            entry
                .expect("dir entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

/// Strips the extension from each name.
pub fn stems(names: &[String]) -> Vec<String> {
    names
        .iter()
        .map(|name| {
            Path::new(name)
                .file_stem()
                .expect("file stem")
                .to_string_lossy()
                .into_owned()
        })
        .collect()
}
