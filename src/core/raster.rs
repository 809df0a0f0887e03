use ndarray::Array3;

use crate::error::{Error, Result};
use crate::types::Rgb;

/// Row-major 8-bit RGB raster backed by an `(height, width, 3)` array.
///
/// Constructors validate shape, so every `Image` in circulation has a
/// non-zero area and exactly three channels. There is no public mutable
/// access; conversions build a fresh output instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    data: Array3<u8>,
}

impl Image {
    pub const CHANNELS: usize = 3;

    /// Build from an interleaved buffer of `width * height * channels` samples.
    pub fn from_raw(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        check_shape(width, height, channels)?;
        let expected = width
            .checked_mul(height)
            .and_then(|v| v.checked_mul(channels))
            .ok_or_else(|| Error::invalid_image("image dimensions overflow"))?;
        if data.len() != expected {
            return Err(Error::invalid_image(format!(
                "expected {} samples for {}x{}x{}, got {}",
                expected,
                width,
                height,
                channels,
                data.len()
            )));
        }
        let data = Array3::from_shape_vec((height, width, channels), data)
            .map_err(|e| Error::invalid_image(e.to_string()))?;
        Ok(Self { data })
    }

    /// Wrap an existing `(height, width, channels)` array.
    pub fn from_array(data: Array3<u8>) -> Result<Self> {
        let (height, width, channels) = data.dim();
        check_shape(width, height, channels)?;
        // Standard layout keeps `into_raw` row-major.
        let data = if data.is_standard_layout() {
            data
        } else {
            data.as_standard_layout().to_owned()
        };
        Ok(Self { data })
    }

    /// Uniform image of the given colour.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Result<Self> {
        check_shape(width, height, Self::CHANNELS)?;
        let data = Array3::from_shape_fn((height, width, Self::CHANNELS), |(_, _, c)| color[c]);
        Ok(Self { data })
    }

    /// Build by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: usize, height: usize, f: F) -> Result<Self>
    where
        F: Fn(usize, usize) -> Rgb,
    {
        check_shape(width, height, Self::CHANNELS)?;
        let data = Array3::from_shape_fn((height, width, Self::CHANNELS), |(y, x, c)| f(x, y)[c]);
        Ok(Self { data })
    }

    pub(crate) fn from_validated(data: Array3<u8>) -> Self {
        debug_assert_eq!(data.dim().2, Self::CHANNELS);
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    /// Pixel at column `x`, row `y`. Panics when out of bounds, like slice indexing.
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        [
            self.data[[y, x, 0]],
            self.data[[y, x, 1]],
            self.data[[y, x, 2]],
        ]
    }

    pub fn as_array(&self) -> &Array3<u8> {
        &self.data
    }

    /// Interleaved row-major samples.
    pub fn as_raw(&self) -> &[u8] {
        // from_array/from_shape_vec/from_shape_fn all produce standard layout
        self.data
            .as_slice()
            .expect("image storage is always in standard layout")
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data.into_raw_vec()
    }
}

fn check_shape(width: usize, height: usize, channels: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::invalid_image(format!(
            "zero-area image {}x{}",
            width, height
        )));
    }
    if channels != Image::CHANNELS {
        return Err(Error::invalid_image(format!(
            "expected {} channels, got {}",
            Image::CHANNELS,
            channels
        )));
    }
    Ok(())
}
