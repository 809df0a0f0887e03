//! Orchestration: validate, map, resample, return a fresh equirectangular image.
//!
//! Output rows are independent, so both paths fan rows out over rayon via
//! `ndarray::Zip::par_for_each`. The remap path builds a [`CoordinateMap`]
//! first; the per-pixel path maps inline. Both go through the same
//! [`ProjectionMapper`] and [`sample_or_default`], so their output is
//! byte-identical.
use std::sync::atomic::{AtomicBool, Ordering};

use ndarray::{Array3, Axis, Zip};
use tracing::debug;

use crate::core::processing::coordinate_map::{CoordinateMap, check_output_dims};
use crate::core::processing::mapper::ProjectionMapper;
use crate::core::processing::resample::sample_or_default;
use crate::core::raster::Image;
use crate::error::{Error, Result};
use crate::types::{BLACK, ConversionMethod, ProjectionModel, Rgb};

/// Knobs for a single conversion call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    pub method: ConversionMethod,
    /// Colour for output pixels outside the source camera's frustum.
    pub background: Rgb,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            method: ConversionMethod::Remap,
            background: BLACK,
        }
    }
}

/// Cylindrical panorama -> equirectangular, mapping each pixel inline.
pub fn convert_cylindrical(source: &Image, output_width: usize, output_height: usize) -> Result<Image> {
    convert_with_options(
        source,
        output_width,
        output_height,
        ProjectionModel::Cylindrical,
        &ConvertOptions {
            method: ConversionMethod::PerPixel,
            ..ConvertOptions::default()
        },
    )
}

/// Rectilinear source -> equirectangular, mapping each pixel inline.
/// Pixels the camera cannot see are black.
pub fn convert_rectilinear(
    source: &Image,
    fov_h_deg: f64,
    fov_v_deg: f64,
    output_width: usize,
    output_height: usize,
) -> Result<Image> {
    convert_with_options(
        source,
        output_width,
        output_height,
        ProjectionModel::Rectilinear {
            fov_horizontal_deg: fov_h_deg,
            fov_vertical_deg: fov_v_deg,
        },
        &ConvertOptions {
            method: ConversionMethod::PerPixel,
            ..ConvertOptions::default()
        },
    )
}

/// Batched path: build the coordinate map once, then resample in one pass.
pub fn convert_via_map(
    source: &Image,
    output_width: usize,
    output_height: usize,
    model: ProjectionModel,
) -> Result<Image> {
    convert_with_options(
        source,
        output_width,
        output_height,
        model,
        &ConvertOptions::default(),
    )
}

pub fn convert_with_options(
    source: &Image,
    output_width: usize,
    output_height: usize,
    model: ProjectionModel,
    options: &ConvertOptions,
) -> Result<Image> {
    convert_cancellable(source, output_width, output_height, model, options, None)
}

/// Like [`convert_with_options`], checking `cancel` before each output row.
///
/// Once the flag is observed the remaining rows are skipped and
/// [`Error::Cancelled`] is returned; the partial buffer is dropped.
pub fn convert_cancellable(
    source: &Image,
    output_width: usize,
    output_height: usize,
    model: ProjectionModel,
    options: &ConvertOptions,
    cancel: Option<&AtomicBool>,
) -> Result<Image> {
    check_output_dims(output_width, output_height)?;
    let mapper = ProjectionMapper::new(model, source.width(), source.height())?;

    debug!(
        "Converting {}x{} {} source to {}x{} equirectangular ({})",
        source.width(),
        source.height(),
        model,
        output_width,
        output_height,
        options.method
    );

    let is_cancelled = || cancel.is_some_and(|flag| flag.load(Ordering::Relaxed));
    if is_cancelled() {
        return Err(Error::Cancelled);
    }

    let mut output = Array3::<u8>::zeros((output_height, output_width, Image::CHANNELS));
    let background = options.background;

    match options.method {
        ConversionMethod::Remap => {
            let map = CoordinateMap::build(&mapper, output_width, output_height)?;
            debug!(
                "Coordinate map covers {} of {} output pixels",
                map.covered(),
                output_width * output_height
            );
            if is_cancelled() {
                return Err(Error::Cancelled);
            }
            Zip::from(output.axis_iter_mut(Axis(0)))
                .and(map.as_array().axis_iter(Axis(0)))
                .par_for_each(|mut row, coords| {
                    if is_cancelled() {
                        return;
                    }
                    for (mut px, &coord) in row.outer_iter_mut().zip(coords.iter()) {
                        let rgb = sample_or_default(source, coord, background);
                        px.assign(&ndarray::aview1(&rgb));
                    }
                });
        }
        ConversionMethod::PerPixel => {
            Zip::indexed(output.axis_iter_mut(Axis(0))).par_for_each(|y, mut row| {
                if is_cancelled() {
                    return;
                }
                for (x, mut px) in row.outer_iter_mut().enumerate() {
                    let coord = mapper.map_pixel(x, y, output_width, output_height);
                    let rgb = sample_or_default(source, coord, background);
                    px.assign(&ndarray::aview1(&rgb));
                }
            });
        }
    }

    if is_cancelled() {
        return Err(Error::Cancelled);
    }
    Ok(Image::from_validated(output))
}
