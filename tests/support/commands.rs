//! Command helper methods for Test.

use super::fixtures::*;
use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a codemagic-sync command isolated from the caller's environment.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd =
            Command::cargo_bin("codemagic-sync").expect("failed to find codemagic-sync binary");
        cmd.current_dir(self.dir.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("CODEMAGIC_APP_ID");
        cmd.env_remove("CODEMAGIC_API_TOKEN");
        cmd.env_remove("CODEMAGIC_API_URL");
        cmd.env_remove("CODEMAGIC_SYNC_LOG");
        cmd
    }

    /// Command with every required flag pointing at the fixtures.
    pub fn sync_cmd(&self, api_url: &str, app_id: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("--app-id")
            .arg(app_id)
            .arg("--token")
            .arg(TOKEN)
            .arg("--env-file")
            .arg(self.path(ENV_FILE))
            .arg("--android-json")
            .arg(self.path(ANDROID_JSON))
            .arg("--ios-plist")
            .arg(self.path(IOS_PLIST))
            .arg("--api-url")
            .arg(api_url);
        cmd
    }

    /// Run a full sync against `api_url` for the default app id.
    pub fn sync(&self, api_url: &str) -> Output {
        self.sync_cmd(api_url, APP_ID)
            .output()
            .expect("failed to run codemagic-sync")
    }
}
