//! Test support utilities for codemagic-sync integration tests.
//!
//! Each test gets its own temp directory with the three input files and
//! talks to its own wiremock server.

#![allow(dead_code)]

pub mod commands;
pub mod fixtures;
pub mod mock_api;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use mock_api::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated input directory.
pub struct Test {
    /// Directory holding the input files
    pub dir: TempDir,
}

impl Test {
    /// Create a test environment with all three inputs written.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let t = Self { dir };
        t.write(ENV_FILE, SAMPLE_ENV.as_bytes());
        t.write(ANDROID_JSON, SAMPLE_GOOGLE_SERVICES_JSON.as_bytes());
        t.write(IOS_PLIST, SAMPLE_PLIST_BYTES);
        t
    }

    /// Absolute path of a file inside the test directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write (or overwrite) a file inside the test directory.
    pub fn write(&self, name: &str, contents: &[u8]) {
        std::fs::write(self.path(name), contents).expect("failed to write fixture");
    }

    /// Delete a fixture to simulate a missing input.
    pub fn remove(&self, name: &str) {
        std::fs::remove_file(self.path(name)).expect("failed to remove fixture");
    }
}
