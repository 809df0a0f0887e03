use jpeg_encoder::{ColorType, Encoder};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::core::raster::Image;

pub const JPEG_QUALITY: u8 = 95;

pub fn write_rgb_jpeg(output: &Path, image: &Image) -> Result<(), Box<dyn std::error::Error>> {
    let (cols, rows) = jpeg_dims(image.width(), image.height())?;
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, JPEG_QUALITY);
    encoder.encode(image.as_raw(), cols, rows, ColorType::Rgb)?;
    Ok(())
}

fn jpeg_dims(cols: usize, rows: usize) -> Result<(u16, u16), Box<dyn std::error::Error>> {
    match (u16::try_from(cols), u16::try_from(rows)) {
        (Ok(c), Ok(r)) => Ok((c, r)),
        _ => Err(format!("{}x{} exceeds the JPEG size limit of 65535x65535", cols, rows).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_decodable_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        let img = Image::filled(16, 8, [0, 128, 255]).unwrap();
        write_rgb_jpeg(&path, &img).unwrap();
        assert_eq!(image::image_dimensions(&path).unwrap(), (16, 8));
    }

    #[test]
    fn rejects_oversized_dimensions() {
        assert!(jpeg_dims(70_000, 10).is_err());
        assert_eq!(jpeg_dims(65_535, 1).unwrap(), (65_535, 1));
    }
}
