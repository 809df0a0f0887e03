//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, decoder, and config errors, and provides semantic variants
//! for image validation, parameter validation, and cancellation.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid image: {reason}")]
    InvalidImage { reason: String },

    #[error("Invalid parameter: {arg}={value}")]
    InvalidParameters { arg: &'static str, value: String },

    #[error("Conversion cancelled")]
    Cancelled,

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }

    pub(crate) fn invalid_image(reason: impl Into<String>) -> Self {
        Error::InvalidImage {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_parameter(arg: &'static str, value: impl std::fmt::Display) -> Self {
        Error::InvalidParameters {
            arg,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_caller_fault(err: &Error) -> bool {
        match err {
            Error::InvalidImage { .. } | Error::InvalidParameters { .. } => true,
            Error::Io(_) | Error::Decode(_) | Error::Config(_) | Error::Cancelled | Error::External(_) => {
                false
            }
        }
    }

    #[test]
    fn validation_errors_are_classified() {
        let err = Error::invalid_parameter("output_width", 0);
        assert_eq!(err.to_string(), "Invalid parameter: output_width=0");
        assert!(is_caller_fault(&err));
        assert!(is_caller_fault(&Error::invalid_image("empty")));
        assert!(!is_caller_fault(&Error::Cancelled));
        assert!(!is_caller_fault(&Error::external("boom")));
    }
}
