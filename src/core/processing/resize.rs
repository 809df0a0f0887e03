use crate::core::raster::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image as FirImage};
use tracing::{info, warn};

/// Dimensions with the long side scaled to `target_size`, preserving aspect.
/// Never upscales.
pub fn calculate_resize_dimensions(
    original_cols: usize,
    original_rows: usize,
    target_size: usize,
) -> (usize, usize) {
    let short_side = original_rows.min(original_cols);
    let long_side = original_rows.max(original_cols);

    if target_size >= long_side {
        if target_size > long_side {
            warn!(
                "Target size {} is larger than original long side {}. Keeping original dimensions {}x{}",
                target_size, long_side, original_cols, original_rows
            );
        }
        return (original_cols, original_rows);
    }

    let scale_factor = target_size as f64 / long_side as f64;
    let new_short_side = ((short_side as f64 * scale_factor).round() as usize).max(1);

    if original_cols > original_rows {
        (target_size, new_short_side)
    } else {
        (new_short_side, target_size)
    }
}

pub fn resize_rgb_image(
    image: &Image,
    target_cols: usize,
    target_rows: usize,
) -> Result<Image, Box<dyn std::error::Error>> {
    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = FirImage::from_vec_u8(
        image.width() as u32,
        image.height() as u32,
        image.as_raw().to_vec(),
        PixelType::U8x3,
    )?;
    let mut dst_image = FirImage::new(target_cols as u32, target_rows as u32, PixelType::U8x3);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    Ok(Image::from_raw(
        target_cols,
        target_rows,
        Image::CHANNELS,
        dst_image.into_vec(),
    )?)
}

/// Downscale so the long side is at most `size`; returns a copy when no
/// scaling is needed.
pub fn make_preview(image: &Image, size: usize) -> Result<Image, Box<dyn std::error::Error>> {
    if size == 0 {
        return Err("preview size must be greater than 0".into());
    }
    let (cols, rows) = calculate_resize_dimensions(image.width(), image.height(), size);
    if (cols, rows) == (image.width(), image.height()) {
        return Ok(image.clone());
    }
    info!(
        "Preview: {}x{} -> {}x{}",
        image.width(),
        image.height(),
        cols,
        rows
    );
    resize_rgb_image(image, cols, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_side_is_scaled_to_target() {
        assert_eq!(calculate_resize_dimensions(4096, 2048, 800), (800, 400));
        assert_eq!(calculate_resize_dimensions(1000, 3000, 300), (100, 300));
    }

    #[test]
    fn never_upscales() {
        assert_eq!(calculate_resize_dimensions(640, 320, 2048), (640, 320));
        assert_eq!(calculate_resize_dimensions(640, 320, 640), (640, 320));
    }

    #[test]
    fn short_side_never_collapses() {
        assert_eq!(calculate_resize_dimensions(1000, 1, 10), (10, 1));
    }

    #[test]
    fn preview_of_uniform_image_keeps_colour() {
        let img = Image::filled(64, 32, [200, 100, 50]).unwrap();
        let preview = make_preview(&img, 16).unwrap();
        assert_eq!((preview.width(), preview.height()), (16, 8));
        let px = preview.pixel(5, 3);
        for (got, want) in px.iter().zip([200u8, 100, 50]) {
            assert!(got.abs_diff(want) <= 1, "{:?}", px);
        }
    }

    #[test]
    fn preview_without_scaling_is_a_copy() {
        let img = Image::filled(8, 4, [1, 2, 3]).unwrap();
        assert_eq!(make_preview(&img, 100).unwrap(), img);
        assert!(make_preview(&img, 0).is_err());
    }
}
