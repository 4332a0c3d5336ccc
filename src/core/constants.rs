//! Constants used throughout codemagic-sync.
//!
//! Centralizes endpoint paths, header names and variable names.

/// Default Codemagic API host.
pub const DEFAULT_API_URL: &str = "https://api.codemagic.io";

/// Header carrying the Codemagic API token.
pub const AUTH_HEADER: &str = "x-auth-token";

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Variable holding the verbatim contents of the Firebase `.env` file.
pub const FIREBASE_ENV_FILE: &str = "FIREBASE_ENV_FILE";

/// Variable holding base64 of `google-services.json`.
pub const ANDROID_GOOGLE_SERVICES_JSON: &str = "ANDROID_GOOGLE_SERVICES_JSON";

/// Variable holding base64 of `GoogleService-Info.plist`.
pub const IOS_GOOGLE_SERVICE_INFO_PLIST: &str = "IOS_GOOGLE_SERVICE_INFO_PLIST";

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "CODEMAGIC_SYNC_LOG";

/// Build the environment-variables endpoint for an application.
///
/// A trailing slash on `api_url` is ignored.
pub fn variables_url(api_url: &str, app_id: &str) -> String {
    format!(
        "{}/apps/{}/environment-variables",
        api_url.trim_end_matches('/'),
        app_id
    )
}
