use clap::Parser;
use std::path::PathBuf;

use equirect::types::{ConversionMethod, OutputFormat, ProjectionKind};

#[derive(Parser, Debug)]
#[command(
    name = "equirect",
    version,
    about = "Convert cylindrical or rectilinear panoramas to equirectangular"
)]
pub struct CliArgs {
    /// Input image (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input directory containing images (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output filename (single file mode)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output directory for batch processing (batch mode)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// JSON file with conversion parameters; replaces the conversion flags below
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Projection the source was captured with
    #[arg(long, value_enum, default_value_t = ProjectionKind::Cylindrical)]
    pub projection: ProjectionKind,

    /// Horizontal field of view in degrees (rectilinear only)
    #[arg(long, default_value_t = 120.0)]
    pub fov_h: f64,

    /// Vertical field of view in degrees (rectilinear only)
    #[arg(long, default_value_t = 60.0)]
    pub fov_v: f64,

    /// Output width in pixels
    #[arg(long, default_value_t = 4096)]
    pub width: usize,

    /// Output height in pixels
    #[arg(long, default_value_t = 2048)]
    pub height: usize,

    /// Conversion method (remap builds a coordinate map once; per-pixel recomputes)
    #[arg(long, value_enum, default_value_t = ConversionMethod::Remap)]
    pub method: ConversionMethod,

    /// Output format (jpeg, tiff or png)
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::JPEG)]
    pub format: OutputFormat,

    /// Fill colour for areas the source does not cover, as r,g,b
    #[arg(long, default_value = "0,0,0")]
    pub background: String,

    /// Also write a downscaled JPEG preview with this long side
    #[arg(long)]
    pub preview_size: Option<usize>,

    /// Do not write the JSON metadata sidecar
    #[arg(long, default_value_t = false)]
    pub no_metadata: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Batch mode: continue processing other files when one fails
    #[arg(long, default_value_t = false)]
    pub batch: bool,
}
