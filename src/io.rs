//! PNG export for the session's committed buffer.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError};

use crate::canvas::PixelBuffer;

/// Failure to export the canvas. The only error class the engine surfaces
/// to the caller; everything else in the core clamps or no-ops.
#[derive(Debug)]
pub enum ExportError {
    Io(std::io::Error),
    Encode(ImageError),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "export I/O error: {}", e),
            ExportError::Encode(e) => write!(f, "PNG encode error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(e) => Some(e),
            ExportError::Encode(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Io(e)
    }
}

impl From<ImageError> for ExportError {
    fn from(e: ImageError) -> Self {
        ExportError::Encode(e)
    }
}

/// Append a `.png` extension unless the path already carries one
/// (ASCII case-insensitive, so `canvas.PNG` is left alone).
fn with_png_extension(path: &Path) -> PathBuf {
    let has_png = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if has_png {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(".png");
        PathBuf::from(name)
    }
}

/// Encode `buf` as RGBA8 PNG at `path`, fixing up the extension first.
/// Returns the path actually written.
pub fn export_png(buf: &PixelBuffer, path: &Path) -> Result<PathBuf, ExportError> {
    let path = with_png_extension(path);
    let image = buf.to_rgba_image();
    let file = File::create(&path)?;
    let writer = BufWriter::new(file);
    PngEncoder::new(writer).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;
    log_info!("exported {}x{} canvas to {}", buf.width(), buf.height(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_extension_is_appended_case_insensitively() {
        assert_eq!(with_png_extension(Path::new("a/b/c")), PathBuf::from("a/b/c.png"));
        assert_eq!(with_png_extension(Path::new("out.png")), PathBuf::from("out.png"));
        assert_eq!(with_png_extension(Path::new("out.PNG")), PathBuf::from("out.PNG"));
        assert_eq!(with_png_extension(Path::new("out.jpg")), PathBuf::from("out.jpg.png"));
    }
}
