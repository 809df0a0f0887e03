use std::path::Path;

use crate::core::raster::Image;

pub fn write_rgb_png(output: &Path, image: &Image) -> Result<(), Box<dyn std::error::Error>> {
    image::save_buffer_with_format(
        output,
        image.as_raw(),
        u32::try_from(image.width())?,
        u32::try_from(image.height())?,
        image::ExtendedColorType::Rgb8,
        image::ImageFormat::Png,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_is_lossless() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let img = Image::from_fn(4, 4, |x, y| [(x * 50) as u8, (y * 50) as u8, 9]).unwrap();
        write_rgb_png(&path, &img).unwrap();

        let back = image::open(&path).unwrap().to_rgb8();
        assert_eq!(back.as_raw().as_slice(), img.as_raw());
    }
}
