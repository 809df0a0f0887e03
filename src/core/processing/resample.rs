//! Bilinear resampler over 8-bit RGB images.
use crate::core::processing::mapper::SourceCoordinate;
use crate::core::raster::Image;
use crate::types::Rgb;

/// Bilinear sample at fractional `(x, y)`.
///
/// Coordinates are clamped into the image first, so any input is safe.
/// Integer coordinates return the stored pixel unchanged.
#[inline]
pub fn sample(image: &Image, x: f64, y: f64) -> Rgb {
    let data = image.as_array();
    let max_x = (image.width() - 1) as f64;
    let max_y = (image.height() - 1) as f64;
    let x = x.clamp(0.0, max_x);
    let y = y.clamp(0.0, max_y);

    let x1 = x.floor() as usize;
    let y1 = y.floor() as usize;
    let x2 = (x1 + 1).min(image.width() - 1);
    let y2 = (y1 + 1).min(image.height() - 1);
    let dx = x - x1 as f64;
    let dy = y - y1 as f64;

    let w11 = (1.0 - dx) * (1.0 - dy);
    let w21 = dx * (1.0 - dy);
    let w12 = (1.0 - dx) * dy;
    let w22 = dx * dy;

    let mut out = [0u8; 3];
    for (c, slot) in out.iter_mut().enumerate() {
        let v = w11 * data[[y1, x1, c]] as f64
            + w21 * data[[y1, x2, c]] as f64
            + w12 * data[[y2, x1, c]] as f64
            + w22 * data[[y2, x2, c]] as f64;
        *slot = v.round().clamp(0.0, 255.0) as u8;
    }
    out
}

/// Sample at `coordinate`, or return `default` when it is undefined.
#[inline]
pub fn sample_or_default(image: &Image, coordinate: Option<SourceCoordinate>, default: Rgb) -> Rgb {
    match coordinate {
        Some(c) => sample(image, c.x, c.y),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient() -> Image {
        Image::from_fn(4, 3, |x, y| [(x * 60) as u8, (y * 100) as u8, 7]).unwrap()
    }

    #[test]
    fn integer_coordinates_are_exact() {
        let img = gradient();
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(sample(&img, x as f64, y as f64), img.pixel(x, y));
            }
        }
    }

    #[test]
    fn blends_between_neighbours() {
        let img = gradient();
        // halfway between x=0 (0) and x=1 (60)
        assert_eq!(sample(&img, 0.5, 0.0), [30, 0, 7]);
        // quarter step down from row 1 (100) to row 2 (200)
        assert_eq!(sample(&img, 0.0, 1.25), [0, 125, 7]);
        // centre of a 2x2 block
        assert_eq!(sample(&img, 1.5, 0.5), [90, 50, 7]);
    }

    #[test]
    fn rounds_to_nearest() {
        let img = Image::from_fn(2, 1, |x, _| if x == 0 { [0, 0, 0] } else { [1, 3, 255] }).unwrap();
        // 0.5 * 1 = 0.5 rounds away from zero, 0.5 * 3 = 1.5 -> 2
        assert_eq!(sample(&img, 0.5, 0.0), [1, 2, 128]);
        assert_eq!(sample(&img, 0.4, 0.0), [0, 1, 102]);
    }

    #[test]
    fn clamps_out_of_range_coordinates() {
        let img = gradient();
        assert_eq!(sample(&img, -5.0, -1.0), img.pixel(0, 0));
        assert_eq!(sample(&img, 100.0, 100.0), img.pixel(3, 2));
        assert_eq!(sample(&img, 3.0, 2.0), img.pixel(3, 2));
    }

    #[test]
    fn single_pixel_image() {
        let img = Image::filled(1, 1, [9, 8, 7]).unwrap();
        assert_eq!(sample(&img, 0.3, 0.9), [9, 8, 7]);
    }

    #[test]
    fn undefined_coordinate_uses_default() {
        let img = gradient();
        assert_eq!(sample_or_default(&img, None, [1, 2, 3]), [1, 2, 3]);
        let c = SourceCoordinate { x: 1.0, y: 1.0 };
        assert_eq!(sample_or_default(&img, Some(c), [1, 2, 3]), img.pixel(1, 1));
    }
}
