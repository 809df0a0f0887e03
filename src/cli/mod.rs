//! Command Line Interface (CLI) layer for equirect.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for single-file and batch
//! conversion flows. It wires user-provided options to the library's
//! high-level `equirect::api`.
//!
//! If you are embedding equirect into another application, prefer using
//! `equirect::api` directly instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
