//! Error types for codemagic-sync.
//!
//! Every failure ends the run with exit code 1. Variants carry enough
//! context for `main` to print one line and, where useful, a hint.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::sources::SecretSource;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A required input file does not exist.
    #[error("missing {kind}: {}", .path.display())]
    MissingFile { kind: SecretSource, path: PathBuf },

    /// An input file exists but could not be read.
    #[error("failed to read {kind} {}: {source}", .path.display())]
    Read {
        kind: SecretSource,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The API answered with a status of 300 or above.
    #[error("Codemagic API error {status}: {body}")]
    Api { status: u16, body: String },

    /// The request never produced a response.
    #[error("request to Codemagic failed: {0}")]
    Network(#[source] reqwest::Error),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Invalid command-line input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("app id cannot be empty")]
    EmptyAppId,

    #[error("invalid app id '{app_id}': {reason}")]
    InvalidAppId { app_id: String, reason: String },

    #[error("API token cannot be empty")]
    EmptyToken,

    #[error("API token contains characters not allowed in an HTTP header")]
    InvalidToken,

    #[error("invalid API url '{0}': must start with http:// or https://")]
    InvalidApiUrl(String),
}

impl Error {
    /// Suggested next step for the user, if there is an obvious one.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Api { status: 401 | 403, .. } => Some("check the API token passed with --token"),
            Error::Api { status: 404, .. } => Some("check the app id passed with --app-id"),
            Error::MissingFile { .. } => Some("nothing was uploaded"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
