//! Test fixtures and constants.

pub const ENV_FILE: &str = ".env.firebase";
pub const ANDROID_JSON: &str = "google-services.json";
pub const IOS_PLIST: &str = "GoogleService-Info.plist";

pub const APP_ID: &str = "foo";
pub const TOKEN: &str = "cm-test-token-123";

/// Variable names in upload order.
pub const ALL_VARIABLES: [&str; 3] = [
    "FIREBASE_ENV_FILE",
    "ANDROID_GOOGLE_SERVICES_JSON",
    "IOS_GOOGLE_SERVICE_INFO_PLIST",
];

/// Sample Firebase .env with comments, quoting and a trailing newline.
pub const SAMPLE_ENV: &str = r#"# Firebase
FIREBASE_API_KEY=AIzaSyD-test
FIREBASE_PROJECT_ID="demo-project"
FIREBASE_APP_ID='1:1234:android:abcd'

EMPTY=
"#;

pub const SAMPLE_GOOGLE_SERVICES_JSON: &str = r#"{
  "project_info": {
    "project_number": "1234567890",
    "project_id": "demo-project"
  },
  "client": []
}
"#;

/// Binary plist header followed by bytes that are not valid UTF-8.
pub const SAMPLE_PLIST_BYTES: &[u8] = b"bplist00\xd1\x01\x02\xff\xfe\x00\x80";
