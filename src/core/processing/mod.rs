//! Reprojection building blocks: the projection mapper, the bilinear
//! resampler, the dense coordinate map, conversion orchestration, and
//! preview downscaling.
pub mod convert;
pub mod coordinate_map;
pub mod mapper;
pub mod resample;
pub mod resize;
