/*!
 * Error types for the lyrsync application.
 *
 * This module contains custom error types for the file-driven shell,
 * using the thiserror crate for ergonomic error definitions. The parsing
 * core itself has no fatal errors: malformed lyric lines are skipped and
 * absent tracks are treated as empty, so nothing in `lyric` returns these.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error reading the configuration file
    #[error("Failed to read config file: {0}")]
    Read(String),

    /// Error parsing the configuration file
    #[error("Failed to parse config file: {0}")]
    Parse(String),

    /// Configuration values failed validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors that can occur when writing the merged timeline
#[derive(Error, Debug)]
pub enum OutputError {
    /// Error serializing the timeline to JSON
    #[error("Failed to serialize timeline: {0}")]
    Serialize(String),

    /// Error writing the output file
    #[error("Failed to write output file: {0}")]
    Write(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from configuration handling
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Error from timeline output
    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
