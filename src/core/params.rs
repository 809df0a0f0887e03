use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::processing::convert::ConvertOptions;
use crate::core::processing::mapper::validate_model;
use crate::error::{Error, Result};
use crate::types::{BLACK, ConversionMethod, OutputFormat, ProjectionModel, Rgb};

/// Conversion parameters suitable for config files and CLI presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionParams {
    pub projection: ProjectionModel,
    pub width: usize,
    pub height: usize,
    pub method: ConversionMethod,
    pub format: OutputFormat,
    /// Fill colour where the source camera has no coverage
    pub background: Rgb,
    /// Long side of an extra downscaled JPEG preview; None disables it
    pub preview_size: Option<usize>,
    /// Write a JSON sidecar next to the output
    pub metadata: bool,
}

impl Default for ConversionParams {
    fn default() -> Self {
        Self {
            projection: ProjectionModel::Cylindrical,
            width: 4096,
            height: 2048,
            method: ConversionMethod::Remap,
            format: OutputFormat::JPEG,
            background: BLACK,
            preview_size: None,
            metadata: true,
        }
    }
}

impl ConversionParams {
    /// Load from a JSON file; missing fields fall back to defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&text)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::invalid_parameter("width", self.width));
        }
        if self.height == 0 {
            return Err(Error::invalid_parameter("height", self.height));
        }
        if self.preview_size == Some(0) {
            return Err(Error::invalid_parameter("preview_size", 0));
        }
        validate_model(&self.projection)
    }

    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            method: self.method,
            background: self.background,
        }
    }
}
