use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::types::{ConversionMethod, ProjectionModel, Rgb};

/// Conversion record written next to an output image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionMetadata {
    pub source: Option<String>,
    pub source_width: usize,
    pub source_height: usize,
    pub output_width: usize,
    pub output_height: usize,
    pub source_projection: ProjectionModel,
    pub output_projection: String,
    pub method: ConversionMethod,
    pub background: Rgb,
    /// Fraction of output pixels that received source samples
    pub coverage: f64,
    pub created: String,
    pub software: String,
}

impl ConversionMetadata {
    pub fn new(
        source: Option<&Path>,
        source_dims: (usize, usize),
        output_dims: (usize, usize),
        projection: ProjectionModel,
        method: ConversionMethod,
        background: Rgb,
    ) -> Self {
        Self {
            source: source.map(|p| p.display().to_string()),
            source_width: source_dims.0,
            source_height: source_dims.1,
            output_width: output_dims.0,
            output_height: output_dims.1,
            source_projection: projection,
            output_projection: "equirectangular".to_string(),
            method,
            background,
            coverage: estimate_coverage(projection),
            created: chrono::Utc::now().to_rfc3339(),
            software: format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Fraction of the sphere a source camera sees.
///
/// Cylindrical sources cover everything. For a rectilinear camera this is
/// the solid angle of its rectangular frustum over 4π.
pub fn estimate_coverage(projection: ProjectionModel) -> f64 {
    match projection {
        ProjectionModel::Cylindrical => 1.0,
        ProjectionModel::Rectilinear {
            fov_horizontal_deg,
            fov_vertical_deg,
        } => {
            let a = (fov_horizontal_deg.to_radians() / 2.0).sin();
            let b = (fov_vertical_deg.to_radians() / 2.0).sin();
            4.0 * (a * b).asin() / (4.0 * std::f64::consts::PI)
        }
    }
}

/// Sidecar path: `<output>.json`, keeping the image extension.
pub fn sidecar_path(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_os_string();
    name.push(".json");
    PathBuf::from(name)
}

/// Write the metadata as pretty JSON next to `output`; returns the sidecar path.
pub fn create_metadata_sidecar(
    output: &Path,
    metadata: &ConversionMetadata,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = sidecar_path(output);
    let json = serde_json::to_string_pretty(metadata)?;
    std::fs::write(&path, json)?;
    info!("Metadata sidecar written: {:?}", path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sidecar_keeps_image_extension() {
        assert_eq!(
            sidecar_path(Path::new("/out/pano.jpg")),
            PathBuf::from("/out/pano.jpg.json")
        );
    }

    #[test]
    fn coverage_of_known_frusta() {
        assert_abs_diff_eq!(estimate_coverage(ProjectionModel::Cylindrical), 1.0);
        // A 90°x90° camera is one face of a cube.
        let cube_face = ProjectionModel::Rectilinear {
            fov_horizontal_deg: 90.0,
            fov_vertical_deg: 90.0,
        };
        assert_abs_diff_eq!(estimate_coverage(cube_face), 1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn sidecar_round_trips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("pano.png");
        let meta = ConversionMetadata::new(
            Some(Path::new("in.jpg")),
            (400, 200),
            (800, 400),
            ProjectionModel::Cylindrical,
            ConversionMethod::Remap,
            [0, 0, 0],
        );
        let path = create_metadata_sidecar(&output, &meta).unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        let back: ConversionMetadata = serde_json::from_str(&text).unwrap();
        assert_eq!(back, meta);
        assert!(text.contains("\"kind\": \"cylindrical\""));
    }
}
