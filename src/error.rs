//! Error handling for the whitelabel generator.
//! Defines the error taxonomy and the result alias used throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for generator operations.
///
/// Loader and validator errors are raised before the filesystem is touched.
/// `CopyFailure` is raised after the output directory was created and leaves
/// it in place. `MissingTargetFile` is only ever reported as a warning.
#[derive(Error, Debug)]
pub enum Error {
    /// No configuration document at any candidate location.
    #[error("Configuration file '{path}' not found (tried: {tried}).")]
    ConfigNotFound { path: String, tried: String },

    /// The configuration document exists but is not valid structured data.
    #[error("Invalid configuration in '{path}' at line {line}, column {column}: {message}.")]
    MalformedConfig { path: String, line: usize, column: usize, message: String },

    /// One or more semantic rules were violated. Every violation is listed.
    #[error("Configuration errors:\n{}", format_violations(.0))]
    ValidationFailed(Vec<String>),

    /// The user declined to replace an existing output directory.
    #[error("Cancelled.")]
    UserCancelled,

    /// A filesystem operation failed while copying the template tree.
    #[error("Failed to copy '{}': {source}.", .path.display())]
    CopyFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output directory is the template itself or one of its ancestors.
    #[error("Output directory '{}' contains the template '{}'; refusing to replace it.", .output.display(), .template.display())]
    OutputContainsTemplate { output: PathBuf, template: PathBuf },

    /// A file scheduled for substitution does not exist in the output.
    #[error("{path} does not exist, skipping...")]
    MissingTargetFile { path: String },

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents failures of the interactive prompt
    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),

    /// Represents failures compiling a built-in pattern
    #[error("Pattern error: {0}.")]
    RegexError(#[from] regex::Error),
}

fn format_violations(violations: &[String]) -> String {
    violations.iter().map(|v| format!("  - {v}")).collect::<Vec<_>>().join("\n")
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// A declined overwrite is a clean cancellation and exits with status 0.
/// Every other error exits with status 1.
pub fn default_error_handler(err: Error) {
    match err {
        Error::UserCancelled => {
            println!("{err}");
            std::process::exit(0);
        }
        _ => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
