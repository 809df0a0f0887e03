use std::path::Path;

use tracing::debug;

use crate::core::raster::Image;
use crate::error::Result;

/// File extensions picked up by directory batch processing.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tif", "tiff", "bmp", "webp"];

/// Decode any image the `image` crate understands into an 8-bit RGB [`Image`].
/// Alpha is dropped and grayscale is expanded.
pub fn read_image(path: &Path) -> Result<Image> {
    let decoded = image::open(path)?;
    debug!(
        "Decoded {:?}: {}x{} {:?}",
        path,
        decoded.width(),
        decoded.height(),
        decoded.color()
    );
    from_rgb8(decoded.to_rgb8())
}

pub fn from_rgb8(buffer: image::RgbImage) -> Result<Image> {
    let (width, height) = buffer.dimensions();
    Image::from_raw(
        width as usize,
        height as usize,
        Image::CHANNELS,
        buffer.into_raw(),
    )
}

pub fn is_supported_input(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .is_some_and(|e| SUPPORTED_EXTENSIONS.contains(&e.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn reads_png_as_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("src.png");
        let mut rgba = image::RgbaImage::new(3, 2);
        rgba.put_pixel(2, 1, image::Rgba([10, 20, 30, 0]));
        rgba.save(&path).unwrap();

        let img = read_image(&path).unwrap();
        assert_eq!((img.width(), img.height(), img.channels()), (3, 2, 3));
        assert_eq!(img.pixel(2, 1), [10, 20, 30]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_image(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, Error::Decode(_) | Error::Io(_)));
    }

    #[test]
    fn supported_extensions_are_case_insensitive() {
        assert!(is_supported_input(Path::new("pano.JPG")));
        assert!(is_supported_input(Path::new("a/b/pano.tiff")));
        assert!(!is_supported_input(Path::new("notes.txt")));
        assert!(!is_supported_input(Path::new("noext")));
    }
}
