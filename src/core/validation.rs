//! Input validation run before any file read or network call.

use std::path::Path;

use crate::core::sources::SecretSource;
use crate::error::{Error, Result, ValidationError};

/// Validate a Codemagic application id.
///
/// The id is interpolated into the request path, so only ASCII letters,
/// digits, `-` and `_` are accepted. This rules out separators, dot-segments
/// and percent-escapes that the URL parser would resolve to another resource.
///
/// # Errors
///
/// Returns `ValidationError::EmptyAppId` or `ValidationError::InvalidAppId`.
pub fn validate_app_id(app_id: &str) -> Result<()> {
    if app_id.trim().is_empty() {
        return Err(ValidationError::EmptyAppId.into());
    }

    if let Some(ch) = app_id
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_')))
    {
        return Err(ValidationError::InvalidAppId {
            app_id: app_id.to_string(),
            reason: format!("character '{}' is not allowed", ch.escape_default()),
        }
        .into());
    }

    Ok(())
}

/// Validate the API token. Only emptiness is checked.
pub fn validate_token(token: &str) -> Result<()> {
    if token.trim().is_empty() {
        return Err(ValidationError::EmptyToken.into());
    }
    Ok(())
}

/// Validate the API base url scheme.
pub fn validate_api_url(url: &str) -> Result<()> {
    if url.starts_with("https://") || url.starts_with("http://") {
        Ok(())
    } else {
        Err(ValidationError::InvalidApiUrl(url.to_string()).into())
    }
}

/// Fail with `MissingFile` unless `path` exists.
pub fn ensure_exists(kind: SecretSource, path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::MissingFile {
            kind,
            path: path.to_path_buf(),
        })
    }
}
