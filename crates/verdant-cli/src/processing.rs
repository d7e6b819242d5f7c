//! Input file handling and path utilities.

use std::path::{Path, PathBuf};

/// Supported image extensions for batch processing
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tif", "tiff", "bmp", "webp"];

/// Determine the output path for a processed image.
///
/// The output keeps the input stem with a `_vegetation` suffix and is
/// always written as PNG into `output_dir`.
pub fn determine_output_path(input: &Path, output_dir: &Path) -> Result<PathBuf, String> {
    let stem = input
        .file_stem()
        .ok_or_else(|| format!("Invalid input filename: {}", input.display()))?
        .to_string_lossy();
    Ok(output_dir.join(format!("{}_vegetation.png", stem)))
}

/// Gather the image files to process from a mix of file and directory
/// arguments.
///
/// Files named explicitly are taken as-is; directories contribute every
/// entry with a supported image extension, and with `recursive` nested
/// directories are walked too. The result is sorted so batch output is
/// deterministic.
pub fn expand_inputs(inputs: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>, String> {
    let mut images = Vec::new();
    let mut pending = Vec::new();

    for input in inputs {
        if input.is_file() {
            images.push(input.clone());
        } else if input.is_dir() {
            pending.push(input.clone());
        } else {
            return Err(format!("No such file or directory: {}", input.display()));
        }
    }

    while let Some(dir) = pending.pop() {
        let entries = std::fs::read_dir(&dir)
            .map_err(|e| format!("Cannot read directory {}: {}", dir.display(), e))?;
        for entry in entries {
            let path = entry
                .map_err(|e| format!("Cannot read entry in {}: {}", dir.display(), e))?
                .path();
            if path.is_dir() {
                if recursive {
                    pending.push(path);
                }
            } else if is_supported_image(&path) {
                images.push(path);
            }
        }
    }

    images.sort();
    Ok(images)
}

/// Whether a path carries one of the supported image extensions.
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_determine_output_path_keeps_stem() {
        let output = determine_output_path(Path::new("/tmp/in/leaf.jpg"), Path::new("/tmp/out"))
            .unwrap();
        assert_eq!(output, Path::new("/tmp/out/leaf_vegetation.png"));
    }

    #[test]
    fn test_expand_inputs_scans_directories_for_images() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("b.png")).unwrap();
        File::create(dir.path().join("a.jpg")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();

        let files = expand_inputs(&[dir.path().to_path_buf()], false).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.jpg"));
        assert!(files[1].ends_with("b.png"));
    }

    #[test]
    fn test_expand_inputs_rejects_missing_paths() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.png");
        assert!(expand_inputs(&[missing], false).is_err());
    }
}
