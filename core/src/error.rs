//! Error types for catalog loading and configuration

use std::path::PathBuf;
use thiserror::Error;

/// Errors while fetching or decoding the remote catalog
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to decode catalog")]
    Decode(#[from] serde_json::Error),

    #[error("catalog document is not a JSON array")]
    NotAnArray,
}

/// Errors while reading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
}
