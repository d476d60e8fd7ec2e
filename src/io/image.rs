//! PNG decoding of component images and encoding of the finished canvas

use crate::SourceImage;
use crate::io::error::{CollageError, Result, file_system_error};
use crate::layout::Canvas;
use image::ImageFormat;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Read and decode a PNG component image at 16 bits per channel
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The bytes are not a decodable PNG
pub fn load_source_image(path: &Path) -> Result<SourceImage> {
    let bytes = std::fs::read(path).map_err(file_system_error(path, "read image"))?;
    let image = image::load_from_memory_with_format(&bytes, ImageFormat::Png).map_err(|e| {
        CollageError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    Ok(image.to_rgba16())
}

/// Encode the canvas as PNG and write it to `output_path`
///
/// The image is encoded into a temporary file next to `output_path` and
/// renamed into place, so a failed export never leaves a partial file.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The temporary file cannot be created or written
/// - The image cannot be encoded
/// - The temporary file cannot be moved to `output_path`
pub fn export_canvas(canvas: &Canvas, output_path: &Path) -> Result<()> {
    let parent = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent)
                .map_err(file_system_error(parent, "create directory"))?;
            parent
        }
        _ => Path::new("."),
    };

    let mut staged = tempfile::Builder::new()
        .prefix(".huesort-")
        .suffix(".png")
        .tempfile_in(parent)
        .map_err(file_system_error(parent, "create temporary file"))?;

    let mut writer = BufWriter::new(staged.as_file_mut());
    canvas
        .as_image()
        .write_to(&mut writer, ImageFormat::Png)
        .map_err(|e| CollageError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;
    writer
        .flush()
        .map_err(file_system_error(output_path, "write image"))?;
    drop(writer);

    staged
        .persist(output_path)
        .map_err(|e| CollageError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "replace output",
            source: e.error,
        })?;

    Ok(())
}
