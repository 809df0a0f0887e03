use tracing::info;
use tracing_subscriber::EnvFilter;

use equirect::types::{ProjectionKind, ProjectionModel, Rgb};
use equirect::{ConversionParams, convert_directory_to_path, convert_file_to_path};

use super::args::CliArgs;
use super::errors::AppError;

fn parse_background(value: &str) -> Result<Rgb, AppError> {
    let invalid = || AppError::InvalidBackground {
        value: value.to_string(),
    };
    let parts: Vec<u8> = value
        .split(',')
        .map(|p| p.trim().parse::<u8>())
        .collect::<Result<_, _>>()
        .map_err(|_| invalid())?;
    match parts.as_slice() {
        [r, g, b] => Ok([*r, *g, *b]),
        _ => Err(invalid()),
    }
}

fn params_from_args(args: &CliArgs) -> Result<ConversionParams, AppError> {
    if let Some(path) = &args.config {
        info!("Loading conversion parameters from {:?}", path);
        return Ok(ConversionParams::from_json_file(path)?);
    }

    let projection = match args.projection {
        ProjectionKind::Cylindrical => ProjectionModel::Cylindrical,
        ProjectionKind::Rectilinear => ProjectionModel::Rectilinear {
            fov_horizontal_deg: args.fov_h,
            fov_vertical_deg: args.fov_v,
        },
    };

    let params = ConversionParams {
        projection,
        width: args.width,
        height: args.height,
        method: args.method,
        format: args.format,
        background: parse_background(&args.background)?,
        preview_size: args.preview_size,
        metadata: !args.no_metadata,
    };
    params.validate()?;
    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let params = params_from_args(&args)?;
    let batch_mode = args.batch || args.input_dir.is_some();

    if batch_mode {
        let input_dir = args.input_dir.ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;
        let output_dir = args.output_dir.ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;

        info!("Starting batch conversion from directory: {:?}", input_dir);
        info!("Output directory: {:?}", output_dir);

        let report = convert_directory_to_path(&input_dir, &output_dir, &params, args.batch)
            .map_err(AppError::from)?;

        info!("Batch conversion complete!");
        info!("Processed: {}", report.processed);
        info!("Skipped: {}", report.skipped);
        info!("Errors: {}", report.errors);
    } else {
        let input = args.input.ok_or(AppError::MissingArgument {
            arg: "--input".to_string(),
        })?;
        let output = args.output.ok_or(AppError::MissingArgument {
            arg: "--output".to_string(),
        })?;

        convert_file_to_path(&input, &output, &params).map_err(AppError::from)?;
        info!("Successfully converted: {:?} -> {:?}", input, output);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use equirect::types::{ConversionMethod, OutputFormat};

    #[test]
    fn background_parsing() {
        assert_eq!(parse_background("0,0,0").unwrap(), [0, 0, 0]);
        assert_eq!(parse_background(" 255, 128 ,7").unwrap(), [255, 128, 7]);
        assert!(parse_background("1,2").is_err());
        assert!(parse_background("1,2,3,4").is_err());
        assert!(parse_background("256,0,0").is_err());
        assert!(parse_background("red").is_err());
    }

    #[test]
    fn defaults_follow_cylindrical_remap() {
        let args = CliArgs::parse_from(["equirect", "-i", "in.jpg", "-o", "out.jpg"]);
        let params = params_from_args(&args).unwrap();
        assert_eq!(params.projection, ProjectionModel::Cylindrical);
        assert_eq!((params.width, params.height), (4096, 2048));
        assert_eq!(params.method, ConversionMethod::Remap);
        assert_eq!(params.format, OutputFormat::JPEG);
        assert!(params.metadata);
    }

    #[test]
    fn rectilinear_flags_build_model() {
        let args = CliArgs::parse_from([
            "equirect",
            "--projection",
            "rectilinear",
            "--fov-h",
            "90",
            "--fov-v",
            "45",
            "--method",
            "per-pixel",
            "-f",
            "png",
            "--background",
            "10,20,30",
            "--no-metadata",
        ]);
        let params = params_from_args(&args).unwrap();
        assert_eq!(
            params.projection,
            ProjectionModel::Rectilinear {
                fov_horizontal_deg: 90.0,
                fov_vertical_deg: 45.0
            }
        );
        assert_eq!(params.method, ConversionMethod::PerPixel);
        assert_eq!(params.format, OutputFormat::PNG);
        assert_eq!(params.background, [10, 20, 30]);
        assert!(!params.metadata);
    }

    #[test]
    fn out_of_range_fov_is_rejected() {
        let args = CliArgs::parse_from(["equirect", "--projection", "rectilinear", "--fov-h", "180"]);
        assert!(matches!(
            params_from_args(&args),
            Err(AppError::Library(equirect::Error::InvalidParameters { .. }))
        ));
    }
}
