//! Sync command - upload the three Firebase inputs to Codemagic.

use std::path::PathBuf;

use tracing::info;

use crate::cli::output;
use crate::cli::Cli;
use crate::core::client::CodemagicClient;
use crate::core::sources::{SourcePaths, SyncPlan};
use crate::core::types::AppId;
use crate::core::validation::{validate_api_url, validate_app_id, validate_token};
use crate::error::Result;

/// Inputs for one sync run.
#[derive(Clone)]
pub struct SyncArgs {
    pub api_url: String,
    pub app_id: AppId,
    pub token: String,
    pub paths: SourcePaths,
}

impl From<Cli> for SyncArgs {
    fn from(cli: Cli) -> Self {
        Self {
            api_url: cli.api_url,
            app_id: cli.app_id,
            token: cli.token,
            paths: SourcePaths {
                env_file: cli.env_file,
                android_json: cli.android_json,
                ios_plist: cli.ios_plist,
            },
        }
    }
}

impl SyncArgs {
    /// Convenience constructor against the default API host.
    pub fn new(
        app_id: impl Into<AppId>,
        token: impl Into<String>,
        env_file: impl Into<PathBuf>,
        android_json: impl Into<PathBuf>,
        ios_plist: impl Into<PathBuf>,
    ) -> Self {
        Self {
            api_url: crate::core::constants::DEFAULT_API_URL.to_string(),
            app_id: app_id.into(),
            token: token.into(),
            paths: SourcePaths {
                env_file: env_file.into(),
                android_json: android_json.into(),
                ios_plist: ios_plist.into(),
            },
        }
    }
}

/// Validate inputs, load every file, then upload in order.
///
/// Nothing is sent until all three files have been read. The first failed
/// upload stops the run; variables already uploaded stay uploaded.
pub fn execute(args: &SyncArgs) -> Result<()> {
    validate_api_url(&args.api_url)?;
    validate_app_id(&args.app_id)?;
    validate_token(&args.token)?;

    let plan = SyncPlan::load(&args.paths)?;
    info!(app_id = %args.app_id, variables = plan.requests().len(), "plan loaded");

    let client = CodemagicClient::new(&args.api_url, &args.app_id, &args.token)?;

    for request in plan.requests() {
        client.upsert_variable(request)?;
        output::updated(request.name());
    }

    Ok(())
}
