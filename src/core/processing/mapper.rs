//! Projection mapper: equirectangular output pixel -> source pixel coordinate.
//!
//! Every output pixel is first turned into a point on the unit sphere
//! (longitude grows left to right, north pole at row 0), then projected into
//! the source under the selected camera model. Everything here stays in `f64`;
//! integer sample positions are only formed by the resampler.
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::error::{Error, Result};
use crate::types::ProjectionModel;

/// Angular position of one output pixel on the unit sphere, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoordinate {
    pub longitude: f64,
    pub latitude: f64,
}

/// Fractional pixel position in source-image space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceCoordinate {
    pub x: f64,
    pub y: f64,
}

/// Longitude/latitude of output pixel `(x_out, y_out)`.
#[inline]
pub fn output_to_spherical(
    x_out: usize,
    y_out: usize,
    output_width: usize,
    output_height: usize,
) -> SphericalCoordinate {
    SphericalCoordinate {
        longitude: (x_out as f64 / output_width as f64) * TAU - PI,
        latitude: FRAC_PI_2 - (y_out as f64 / output_height as f64) * PI,
    }
}

#[derive(Debug, Clone, Copy)]
enum Frame {
    Cylindrical,
    Rectilinear { fx: f64, fy: f64, cx: f64, cy: f64 },
}

/// A projection model bound to concrete source dimensions.
///
/// Focal lengths and the principal point are computed once here, so the
/// per-pixel and coordinate-map paths run the exact same arithmetic.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionMapper {
    model: ProjectionModel,
    source_width: usize,
    source_height: usize,
    frame: Frame,
}

impl ProjectionMapper {
    /// Validate `model` and bind it to a source of the given size.
    pub fn new(model: ProjectionModel, source_width: usize, source_height: usize) -> Result<Self> {
        if source_width == 0 || source_height == 0 {
            return Err(Error::invalid_image(format!(
                "zero-area source {}x{}",
                source_width, source_height
            )));
        }
        validate_model(&model)?;
        Ok(Self::bind(model, source_width, source_height))
    }

    fn bind(model: ProjectionModel, source_width: usize, source_height: usize) -> Self {
        let frame = match model {
            ProjectionModel::Cylindrical => Frame::Cylindrical,
            ProjectionModel::Rectilinear {
                fov_horizontal_deg,
                fov_vertical_deg,
            } => {
                let fov_h = fov_horizontal_deg.to_radians();
                let fov_v = fov_vertical_deg.to_radians();
                Frame::Rectilinear {
                    fx: source_width as f64 / (2.0 * (fov_h / 2.0).tan()),
                    fy: source_height as f64 / (2.0 * (fov_v / 2.0).tan()),
                    // Principal point sits on the centre pixel.
                    cx: (source_width / 2) as f64,
                    cy: (source_height / 2) as f64,
                }
            }
        };
        Self {
            model,
            source_width,
            source_height,
            frame,
        }
    }

    pub fn model(&self) -> ProjectionModel {
        self.model
    }

    pub fn source_dims(&self) -> (usize, usize) {
        (self.source_width, self.source_height)
    }

    /// Source coordinate for a point on the sphere, or `None` when the
    /// rectilinear camera cannot see it.
    #[inline]
    pub fn project(&self, point: SphericalCoordinate) -> Option<SourceCoordinate> {
        let w = self.source_width as f64;
        let h = self.source_height as f64;
        match self.frame {
            Frame::Cylindrical => {
                let x = (point.longitude + PI) / TAU * w;
                let y = (FRAC_PI_2 - point.latitude) / PI * h;
                // Saturate at the border; horizontal wrap-around is not modelled.
                Some(SourceCoordinate {
                    x: x.clamp(0.0, w - 1.0),
                    y: y.clamp(0.0, h - 1.0),
                })
            }
            Frame::Rectilinear { fx, fy, cx, cy } => {
                let (sin_lat, cos_lat) = point.latitude.sin_cos();
                let (sin_lon, cos_lon) = point.longitude.sin_cos();
                let rx = cos_lat * sin_lon;
                let ry = sin_lat;
                let rz = cos_lat * cos_lon;
                if rz <= 0.0 {
                    return None;
                }
                let x = fx * (rx / rz) + cx;
                let y = fy * (-ry / rz) + cy;
                if (0.0..w).contains(&x) && (0.0..h).contains(&y) {
                    Some(SourceCoordinate { x, y })
                } else {
                    None
                }
            }
        }
    }

    /// Source coordinate for output pixel `(x_out, y_out)`.
    #[inline]
    pub fn map_pixel(
        &self,
        x_out: usize,
        y_out: usize,
        output_width: usize,
        output_height: usize,
    ) -> Option<SourceCoordinate> {
        self.project(output_to_spherical(
            x_out,
            y_out,
            output_width,
            output_height,
        ))
    }
}

/// One-shot mapping of a single output pixel.
///
/// Callers are expected to pass non-zero dimensions and, for rectilinear
/// models, field-of-view angles in (0, 180). Use [`ProjectionMapper::new`]
/// to have those checked. Zero dimensions map nothing.
pub fn map_pixel(
    x_out: usize,
    y_out: usize,
    output_width: usize,
    output_height: usize,
    model: ProjectionModel,
    source_width: usize,
    source_height: usize,
) -> Option<SourceCoordinate> {
    if output_width == 0 || output_height == 0 || source_width == 0 || source_height == 0 {
        return None;
    }
    ProjectionMapper::bind(model, source_width, source_height).map_pixel(
        x_out,
        y_out,
        output_width,
        output_height,
    )
}

pub fn validate_model(model: &ProjectionModel) -> Result<()> {
    if let ProjectionModel::Rectilinear {
        fov_horizontal_deg,
        fov_vertical_deg,
    } = *model
    {
        check_fov("fov_horizontal_deg", fov_horizontal_deg)?;
        check_fov("fov_vertical_deg", fov_vertical_deg)?;
    }
    Ok(())
}

fn check_fov(arg: &'static str, deg: f64) -> Result<()> {
    if deg.is_finite() && deg > 0.0 && deg < 180.0 {
        Ok(())
    } else {
        Err(Error::invalid_parameter(arg, deg))
    }
}
