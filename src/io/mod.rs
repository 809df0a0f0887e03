//! I/O layer: decode source panoramas from disk (`reader`) and encode
//! converted images as JPEG/TIFF/PNG with optional JSON sidecars (`writers`).
pub mod reader;
pub use reader::{is_supported_input, read_image};

pub mod writers;
