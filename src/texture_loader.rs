use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

fn extension_of(path: &Path) -> String {
    path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase()
}

pub fn is_image(path: &Path) -> bool {
    IMAGE_EXTENSIONS.contains(&extension_of(path).as_str())
}

/// Image files directly inside `dir_path`, sorted by file name.
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir_path)
        .with_context(|| format!("failed to read directory {}", dir_path.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.context("failed to read directory entry")?.path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        bail!("no image files found in directory {}", dir_path.display());
    }
    Ok(paths)
}

/// EXIF orientation tag of a JPEG, 1 (upright) when absent or unreadable.
pub fn exif_orientation(file_bytes: &[u8]) -> u16 {
    let exif = match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif,
        Err(e) => {
            debug!("no usable EXIF data: {}", e);
            return 1;
        }
    };

    match exif.get_field(Tag::Orientation, In::PRIMARY).map(|f| &f.value) {
        Some(Value::Short(values)) => values.first().copied().unwrap_or(1),
        _ => 1,
    }
}

/// Width of an image of `width` x `height` once scaled to `slide_height`.
pub fn intrinsic_width(width: i32, height: i32, slide_height: f32) -> f32 {
    if width <= 0 || height <= 0 {
        return 0.0;
    }
    width as f32 * slide_height / height as f32
}

/// Loads an image, applies its EXIF rotation and uploads it as a texture.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("failed to read file {}", image_path.display()))?;

    let extension = extension_of(image_path);
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(&file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| anyhow::anyhow!("failed to decode {}: {}", image_path.display(), e))?;

    // Flipped orientations (2, 4, 5, 7) are left as is.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!(orientation, "rotated {}", image_path.display());
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow::anyhow!("failed to create texture for {}: {}", image_path.display(), e))
}

/// Loads every image of `dir_path`, skipping the ones that fail.
pub fn load_directory(rl: &mut RaylibHandle, thread: &RaylibThread, dir_path: &Path) -> Result<Vec<Texture2D>> {
    let mut textures = Vec::new();
    for path in load_sorted_image_paths(dir_path)? {
        match load_texture_with_exif_rotation(rl, thread, &path) {
            Ok(texture) => textures.push(texture),
            Err(e) => warn!("skipping image: {:#}", e),
        }
    }
    Ok(textures)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_image_extensions() {
        assert!(is_image(Path::new("a/photo.JPG")));
        assert!(is_image(Path::new("b.png")));
        assert!(!is_image(Path::new("notes.txt")));
        assert!(!is_image(Path::new("README")));
    }

    #[test]
    fn scales_width_to_slide_height() {
        assert_eq!(intrinsic_width(400, 300, 150.0), 200.0);
        assert_eq!(intrinsic_width(300, 600, 180.0), 90.0);
        assert_eq!(intrinsic_width(0, 600, 180.0), 0.0);
        assert_eq!(intrinsic_width(300, 0, 180.0), 0.0);
    }

    #[test]
    fn garbage_has_upright_orientation() {
        assert_eq!(exif_orientation(b"definitely not a jpeg"), 1);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let err = load_sorted_image_paths(Path::new("/nonexistent/rhythm-test-dir")).unwrap_err();
        assert!(err.to_string().contains("failed to read directory"));
    }
}
