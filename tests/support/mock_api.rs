//! Mock Codemagic API helpers.

use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Request path for an app's environment variables.
pub fn variables_path(app_id: &str) -> String {
    format!("/apps/{}/environment-variables", app_id)
}

/// Respond to the upload of `name` with `status`.
pub async fn mock_variable(server: &MockServer, app_id: &str, name: &str, status: u16) {
    Mock::given(method("POST"))
        .and(path(variables_path(app_id)))
        .and(body_partial_json(json!({ "name": name })))
        .respond_with(ResponseTemplate::new(status).set_body_string(format!("status {}", status)))
        .mount(server)
        .await;
}

/// Accept every upload for `app_id` with 200.
pub async fn mock_all_ok(server: &MockServer, app_id: &str) {
    Mock::given(method("POST"))
        .and(path(variables_path(app_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .mount(server)
        .await;
}

/// Every request the server saw, in arrival order.
pub async fn received(server: &MockServer) -> Vec<Request> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled by default")
}

/// JSON body of a recorded request.
pub fn body(request: &Request) -> Value {
    request.body_json().expect("request body is not JSON")
}

/// Variable names posted, in arrival order.
pub fn posted_names(requests: &[Request]) -> Vec<String> {
    requests
        .iter()
        .map(|r| body(r)["name"].as_str().unwrap_or_default().to_string())
        .collect()
}
