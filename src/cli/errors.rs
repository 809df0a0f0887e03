use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid background colour: {value}. Expected r,g,b with values 0-255")]
    InvalidBackground { value: String },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error(transparent)]
    Library(#[from] equirect::Error),
}
