//! Command-line interface.

pub mod output;
pub mod sync;

use std::path::PathBuf;

use clap::Parser;

use crate::core::constants;

/// Upload Firebase secrets to Codemagic as secure environment variables.
#[derive(Parser)]
#[command(
    name = "codemagic-sync",
    about = "Upload Firebase secrets to Codemagic as secure environment variables",
    version,
    after_help = "Uploads FIREBASE_ENV_FILE, ANDROID_GOOGLE_SERVICES_JSON and IOS_GOOGLE_SERVICE_INFO_PLIST."
)]
pub struct Cli {
    /// Codemagic app ID
    #[arg(long, env = "CODEMAGIC_APP_ID")]
    pub app_id: String,

    /// Codemagic API token
    #[arg(long, env = "CODEMAGIC_API_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Path to the Firebase .env file
    #[arg(long)]
    pub env_file: PathBuf,

    /// Path to android/app/google-services.json
    #[arg(long)]
    pub android_json: PathBuf,

    /// Path to ios/Runner/GoogleService-Info.plist
    #[arg(long)]
    pub ios_plist: PathBuf,

    /// Codemagic API base url
    #[arg(long, env = "CODEMAGIC_API_URL", default_value = constants::DEFAULT_API_URL)]
    pub api_url: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the sync described by the parsed arguments.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    sync::execute(&sync::SyncArgs::from(cli))
}
