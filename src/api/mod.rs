//! High-level, ergonomic library API: convert files to files or in-memory
//! images, batch helpers for directories, and a typed save helper. Prefer these
//! entrypoints over the low-level processing modules when integrating equirect.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::params::ConversionParams;
use crate::core::processing::convert::convert_with_options;
use crate::core::processing::resize::make_preview;
use crate::core::raster::Image;
use crate::error::{Error, Result};
use crate::io::reader::{is_supported_input, read_image};
use crate::io::writers::jpeg::write_rgb_jpeg;
use crate::io::writers::metadata::{ConversionMetadata, create_metadata_sidecar};
use crate::io::writers::png::write_rgb_png;
use crate::io::writers::tiff::write_rgb_tiff;
use crate::types::OutputFormat;

/// Outcome counts for a directory batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Decode `input` and convert it in memory (no disk output)
pub fn convert_file_to_buffer(input: &Path, params: &ConversionParams) -> Result<Image> {
    params.validate()?;
    let source = read_image(input)?;
    convert_with_options(
        &source,
        params.width,
        params.height,
        params.projection,
        &params.convert_options(),
    )
}

/// Encode `image` to `output` in the given format
pub fn save_image(image: &Image, output: &Path, format: OutputFormat) -> Result<()> {
    let written = match format {
        OutputFormat::JPEG => write_rgb_jpeg(output, image),
        OutputFormat::TIFF => write_rgb_tiff(output, image),
        OutputFormat::PNG => write_rgb_png(output, image),
    };
    written.map_err(|e| Error::external(e))?;
    info!(
        "Saved {} {}x{} to {:?}",
        format,
        image.width(),
        image.height(),
        output
    );
    Ok(())
}

/// Preview path next to `output`: `<stem>_preview.jpg`
pub fn preview_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    output.with_file_name(format!("{}_preview.jpg", stem))
}

/// Decode, convert, and write `output`, plus the preview and sidecar when enabled
pub fn convert_file_to_path(input: &Path, output: &Path, params: &ConversionParams) -> Result<()> {
    params.validate()?;
    let source = read_image(input)?;
    info!(
        "Input image size: {}x{} ({})",
        source.width(),
        source.height(),
        params.projection
    );

    let converted = convert_with_options(
        &source,
        params.width,
        params.height,
        params.projection,
        &params.convert_options(),
    )?;

    save_image(&converted, output, params.format)?;

    if let Some(size) = params.preview_size {
        let preview = make_preview(&converted, size).map_err(|e| Error::external(e))?;
        save_image(&preview, &preview_path(output), OutputFormat::JPEG)?;
    }

    if params.metadata {
        let meta = ConversionMetadata::new(
            Some(input),
            (source.width(), source.height()),
            (converted.width(), converted.height()),
            params.projection,
            params.method,
            params.background,
        );
        create_metadata_sidecar(output, &meta).map_err(|e| Error::external(e))?;
    }

    Ok(())
}

/// Convert every supported image directly inside `input_dir` into `output_dir`.
///
/// Outputs are named `<stem>.<ext>` for the configured format. Non-image
/// entries and subdirectories are counted as skipped. With
/// `continue_on_error = false` the first failure is returned.
pub fn convert_directory_to_path(
    input_dir: &Path,
    output_dir: &Path,
    params: &ConversionParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    params.validate()?;
    fs::create_dir_all(output_dir)?;

    let mut entries: Vec<PathBuf> = fs::read_dir(input_dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::result::Result<_, _>>()?;
    entries.sort();

    let mut report = BatchReport::default();
    for path in entries {
        if !path.is_file() || !is_supported_input(&path) {
            info!("Skipping unsupported entry: {:?}", path);
            report.skipped += 1;
            continue;
        }

        let stem = match path.file_stem() {
            Some(s) => s.to_string_lossy().into_owned(),
            None => {
                report.skipped += 1;
                continue;
            }
        };
        let output_path = output_dir.join(format!("{}.{}", stem, params.format.extension()));
        info!("Processing: {:?} -> {:?}", path, output_path);

        match convert_file_to_path(&path, &output_path, params) {
            Ok(()) => report.processed += 1,
            Err(e) if continue_on_error => {
                warn!("Error processing {:?}: {}", path, e);
                report.errors += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "Batch complete: processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_sits_next_to_output() {
        assert_eq!(
            preview_path(Path::new("/out/pano.tiff")),
            PathBuf::from("/out/pano_preview.jpg")
        );
    }
}
