//! Local secret inputs and their conversion to variable values.
//!
//! The `.env` file is uploaded as text. The two native config files are
//! uploaded as standard base64 without line breaks.

use std::fmt;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use crate::core::constants;
use crate::core::domain::UploadRequest;
use crate::core::validation::ensure_exists;
use crate::error::{Error, Result};

/// One of the three inputs, in upload order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretSource {
    EnvFile,
    AndroidConfig,
    IosConfig,
}

impl SecretSource {
    /// All sources in the order they are checked and uploaded.
    pub const ALL: [SecretSource; 3] = [
        SecretSource::EnvFile,
        SecretSource::AndroidConfig,
        SecretSource::IosConfig,
    ];

    /// Name of the Codemagic variable this source is stored under.
    pub fn variable_name(self) -> &'static str {
        match self {
            SecretSource::EnvFile => constants::FIREBASE_ENV_FILE,
            SecretSource::AndroidConfig => constants::ANDROID_GOOGLE_SERVICES_JSON,
            SecretSource::IosConfig => constants::IOS_GOOGLE_SERVICE_INFO_PLIST,
        }
    }

    /// Whether the file content is base64-encoded before upload.
    pub fn is_encoded(self) -> bool {
        !matches!(self, SecretSource::EnvFile)
    }
}

impl fmt::Display for SecretSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SecretSource::EnvFile => "env file",
            SecretSource::AndroidConfig => "Android config",
            SecretSource::IosConfig => "iOS config",
        };
        f.write_str(label)
    }
}

/// Paths to the three input files.
#[derive(Debug, Clone)]
pub struct SourcePaths {
    pub env_file: PathBuf,
    pub android_json: PathBuf,
    pub ios_plist: PathBuf,
}

impl SourcePaths {
    /// Path for a given source.
    pub fn get(&self, source: SecretSource) -> &Path {
        match source {
            SecretSource::EnvFile => &self.env_file,
            SecretSource::AndroidConfig => &self.android_json,
            SecretSource::IosConfig => &self.ios_plist,
        }
    }
}

/// Read the env file as UTF-8 text, unmodified.
///
/// # Errors
///
/// Returns `Error::Read` if the file cannot be read or is not valid UTF-8.
pub fn read_env_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Read {
        kind: SecretSource::EnvFile,
        path: path.to_path_buf(),
        source,
    })
}

/// Read a file as bytes and encode it as standard base64.
///
/// # Errors
///
/// Returns `Error::Read` if the file cannot be read.
pub fn encode_file(kind: SecretSource, path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| Error::Read {
        kind,
        path: path.to_path_buf(),
        source,
    })?;
    Ok(encode_bytes(&bytes))
}

/// Standard alphabet, padded, single line.
pub fn encode_bytes(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// The ordered set of uploads for one run.
#[derive(Debug)]
pub struct SyncPlan {
    requests: Vec<UploadRequest>,
}

impl SyncPlan {
    /// Check that every input exists, then read and encode all of them.
    ///
    /// Existence is checked for all three files before any is read, so a
    /// missing iOS config is reported without touching the others.
    pub fn load(paths: &SourcePaths) -> Result<Self> {
        for source in SecretSource::ALL {
            ensure_exists(source, paths.get(source))?;
        }

        let mut requests = Vec::with_capacity(SecretSource::ALL.len());
        for source in SecretSource::ALL {
            let path = paths.get(source);
            let value = if source.is_encoded() {
                encode_file(source, path)?
            } else {
                read_env_file(path)?
            };
            debug!(
                variable = source.variable_name(),
                path = %path.display(),
                len = value.len(),
                "input loaded"
            );
            requests.push(UploadRequest::new(source.variable_name(), value));
        }

        Ok(Self { requests })
    }

    /// Uploads in execution order.
    pub fn requests(&self) -> &[UploadRequest] {
        &self.requests
    }
}
