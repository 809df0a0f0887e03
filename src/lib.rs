#![doc = r#"
equirect — reproject panoramas into the equirectangular projection.

This crate converts a single, already-rectified source panorama captured under a
cylindrical or rectilinear (perspective) camera model into the equirectangular
layout that 360° viewers expect. It powers the `equirect` CLI and can be embedded
in your own Rust applications, either on decoded pixel buffers or file to file.

How it works
------------
For every output pixel the **projection mapper** computes a longitude/latitude
on the unit sphere and projects it into the source. Cylindrical sources cover
the whole sphere (borders saturate); rectilinear sources only cover their
frustum, and everything else gets a background colour. The **resampler** then
blends the four nearest source pixels bilinearly. Rows are independent and run
in parallel.

Two paths produce byte-identical output:
- **remap** (default): build a dense [`CoordinateMap`] once, then resample it in
  a single pass with no trigonometry in the hot loop.
- **per-pixel**: recompute the mapping inline; handy for testing.

Convert in memory
-----------------
```rust
use equirect::{Image, ProjectionModel, convert_cylindrical, convert_via_map};

fn main() -> equirect::Result<()> {
    let source = Image::filled(4, 2, [255, 0, 0])?;

    let pano = convert_cylindrical(&source, 8, 4)?;
    assert_eq!(pano.pixel(3, 2), [255, 0, 0]);

    let model = ProjectionModel::Rectilinear {
        fov_horizontal_deg: 120.0,
        fov_vertical_deg: 60.0,
    };
    let pano = convert_via_map(&source, 16, 8, model)?;
    assert_eq!(pano.pixel(0, 4), [0, 0, 0]); // behind the camera
    Ok(())
}
```

Convert a file
--------------
```rust,no_run
use std::path::Path;
use equirect::{ConversionParams, OutputFormat, ProjectionModel, convert_file_to_path};

fn main() -> equirect::Result<()> {
    let params = ConversionParams {
        projection: ProjectionModel::Rectilinear {
            fov_horizontal_deg: 120.0,
            fov_vertical_deg: 60.0,
        },
        width: 2048,
        height: 1024,
        format: OutputFormat::JPEG,
        preview_size: Some(800),
        ..ConversionParams::default()
    };

    convert_file_to_path(
        Path::new("/data/pano.jpg"),
        Path::new("/out/pano_equirect.jpg"),
        &params,
    )
}
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use equirect::{ConversionParams, convert_directory_to_path};

fn main() -> equirect::Result<()> {
    let report = convert_directory_to_path(
        Path::new("/data/panoramas"),
        Path::new("/out"),
        &ConversionParams::default(),
        true, // continue_on_error
    )?;

    println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
    Ok(())
}
```

Error handling
--------------
All public functions return `equirect::Result<T>`. Malformed images fail with
`Error::InvalidImage` and out-of-range dimensions or fields of view with
`Error::InvalidParameters`, both before any pixel work starts. Pixels outside a
rectilinear frustum are not an error.

```rust
use equirect::{Error, Image, convert_rectilinear};

let source = Image::filled(4, 4, [0, 0, 0]).unwrap();
match convert_rectilinear(&source, 180.0, 60.0, 8, 4) {
    Err(Error::InvalidParameters { arg, .. }) => assert_eq!(arg, "fov_horizontal_deg"),
    other => panic!("unexpected: {other:?}"),
}
```

Useful modules
--------------
- [`api`] — high-level, file-oriented entry points.
- [`core`] — the `Image` raster, parameters, mapper, resampler, and orchestration.
- [`io`] — image decoding and JPEG/TIFF/PNG/JSON writers.
- [`types`] — `ProjectionModel` and the other shared enums.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::ConversionParams;
pub use crate::core::raster::Image;
pub use crate::error::{Error, Result};
pub use crate::types::{ConversionMethod, OutputFormat, ProjectionKind, ProjectionModel, Rgb};

// Mapper and resampler
pub use crate::core::processing::coordinate_map::CoordinateMap;
pub use crate::core::processing::mapper::{
    ProjectionMapper, SourceCoordinate, SphericalCoordinate, map_pixel, output_to_spherical,
};
pub use crate::core::processing::resample::{sample, sample_or_default};

// Conversion entry points
pub use crate::core::processing::convert::{
    ConvertOptions, convert_cancellable, convert_cylindrical, convert_rectilinear,
    convert_via_map, convert_with_options,
};

// High-level API re-exports
pub use crate::api::{
    BatchReport, convert_directory_to_path, convert_file_to_buffer, convert_file_to_path,
    save_image,
};
pub use crate::io::reader::read_image;
