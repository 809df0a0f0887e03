//! Shared types and enums used across equirect.
//! Includes the `ProjectionModel` sum type, the CLI-facing `ProjectionKind`,
//! `ConversionMethod`, `OutputFormat`, and the `Rgb` pixel alias.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One 8-bit RGB sample triple.
pub type Rgb = [u8; 3];

/// Background written where a rectilinear source has no coverage.
pub const BLACK: Rgb = [0, 0, 0];

/// Camera model the source panorama was captured under.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProjectionModel {
    /// Source wraps 360° horizontally; height spans the full vertical angle.
    Cylindrical,
    /// Standard perspective camera. Both angles in degrees, each in (0, 180).
    Rectilinear {
        fov_horizontal_deg: f64,
        fov_vertical_deg: f64,
    },
}

impl ProjectionModel {
    pub fn kind(&self) -> ProjectionKind {
        match self {
            ProjectionModel::Cylindrical => ProjectionKind::Cylindrical,
            ProjectionModel::Rectilinear { .. } => ProjectionKind::Rectilinear,
        }
    }
}

impl std::fmt::Display for ProjectionModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectionModel::Cylindrical => write!(f, "Cylindrical"),
            ProjectionModel::Rectilinear {
                fov_horizontal_deg,
                fov_vertical_deg,
            } => write!(
                f,
                "Rectilinear({}°x{}°)",
                fov_horizontal_deg, fov_vertical_deg
            ),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionKind {
    Cylindrical,
    Rectilinear,
}

impl std::fmt::Display for ProjectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectionKind::Cylindrical => write!(f, "Cylindrical"),
            ProjectionKind::Rectilinear => write!(f, "Rectilinear"),
        }
    }
}

/// How the conversion drives the mapper.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ConversionMethod {
    /// Build a coordinate map once, then resample in a single pass.
    #[default]
    Remap,
    /// Recompute the mapping for every output pixel.
    PerPixel,
}

impl std::fmt::Display for ConversionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionMethod::Remap => write!(f, "Remap"),
            ConversionMethod::PerPixel => write!(f, "PerPixel"),
        }
    }
}

#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Debug,
    ValueEnum,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum OutputFormat {
    JPEG, // Lossy
    TIFF,
    PNG,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::JPEG => "jpg",
            OutputFormat::TIFF => "tiff",
            OutputFormat::PNG => "png",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::JPEG => write!(f, "JPEG"),
            OutputFormat::TIFF => write!(f, "TIFF"),
            OutputFormat::PNG => write!(f, "PNG"),
        }
    }
}
