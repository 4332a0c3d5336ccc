//! codemagic-sync - upload Firebase secrets to Codemagic.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── output        # Terminal output helpers
//! │   └── sync          # Validate, load, upload
//! ├── core/             # Core library components
//! │   ├── client        # Codemagic REST client
//! │   ├── constants     # Endpoints and variable names
//! │   ├── domain        # UploadRequest
//! │   ├── sources       # Input files and base64 encoding
//! │   ├── types         # Type aliases
//! │   └── validation    # Pre-flight checks
//! └── error             # Error types
//! ```
//!
//! # Uploaded variables
//!
//! | Variable | Source | Encoding |
//! |---|---|---|
//! | `FIREBASE_ENV_FILE` | `--env-file` | UTF-8 text, verbatim |
//! | `ANDROID_GOOGLE_SERVICES_JSON` | `--android-json` | base64 |
//! | `IOS_GOOGLE_SERVICE_INFO_PLIST` | `--ios-plist` | base64 |
//!
//! All three are stored as secure variables.

pub mod cli;
pub mod core;
pub mod error;
