//! Core building blocks: the validated `Image` raster, conversion parameters,
//! and the reprojection pipeline. These are internal primitives consumed by
//! the high-level `api` module, and are public for callers that already hold
//! decoded pixels.
pub mod params;
pub mod processing;
pub mod raster;
