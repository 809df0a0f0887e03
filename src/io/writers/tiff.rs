use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tiff::encoder::{TiffEncoder, colortype};

use crate::core::raster::Image;

pub fn write_rgb_tiff(output: &Path, image: &Image) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(output)?;
    let mut encoder = TiffEncoder::new(BufWriter::new(file))?;
    encoder.write_image::<colortype::RGB8>(
        u32::try_from(image.width())?,
        u32::try_from(image.height())?,
        image.as_raw(),
    )?;
    Ok(())
}
