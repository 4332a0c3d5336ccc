//! Upload request type.
//!
//! The JSON body of one "create or update environment variable" call.

use serde::Serialize;
use zeroize::Zeroize;

use crate::core::types::{VariableName, VariableValue};

/// One secure variable to upsert.
///
/// Serializes to `{"name": ..., "value": ..., "secure": true}`. The value is
/// wiped from memory on drop and never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct UploadRequest {
    name: VariableName,
    value: VariableValue,
    secure: bool,
}

impl UploadRequest {
    /// Create a secure variable upload
    pub fn new(name: impl Into<VariableName>, value: impl Into<VariableValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            secure: true,
        }
    }

    /// Variable name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variable value as uploaded
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Always true: uploads are stored as secure variables
    pub fn is_secure(&self) -> bool {
        self.secure
    }
}

impl Drop for UploadRequest {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

impl std::fmt::Debug for UploadRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadRequest")
            .field("name", &self.name)
            .field("value", &format_args!("<{} bytes>", self.value.len()))
            .field("secure", &self.secure)
            .finish()
    }
}

impl std::fmt::Display for UploadRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
