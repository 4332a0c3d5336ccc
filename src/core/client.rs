//! Codemagic REST API client.
//!
//! Wraps a blocking `reqwest` client bound to one application. Every upload
//! is a POST to `/apps/{app_id}/environment-variables`; Codemagic treats it
//! as create-or-update.

use reqwest::blocking::Client;
use reqwest::header::HeaderValue;
use reqwest::redirect::Policy;
use tracing::{debug, info};

use crate::core::constants;
use crate::core::domain::UploadRequest;
use crate::core::validation::{validate_api_url, validate_app_id, validate_token};
use crate::error::{Error, Result, ValidationError};

/// Client for one Codemagic application.
pub struct CodemagicClient {
    http: Client,
    url: String,
    token: HeaderValue,
}

impl CodemagicClient {
    /// Build a client for `app_id` against `api_url`.
    ///
    /// Redirects are not followed, so a 3xx surfaces as an API error.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for a bad url, app id or token, or
    /// `Error::Client` if the HTTP client cannot be built.
    pub fn new(api_url: &str, app_id: &str, token: &str) -> Result<Self> {
        validate_api_url(api_url)?;
        validate_app_id(app_id)?;
        validate_token(token)?;

        let mut token =
            HeaderValue::from_str(token).map_err(|_| ValidationError::InvalidToken)?;
        token.set_sensitive(true);

        let http = Client::builder()
            .user_agent(constants::USER_AGENT)
            .redirect(Policy::none())
            .build()
            .map_err(Error::Client)?;

        Ok(Self {
            http,
            url: constants::variables_url(api_url, app_id),
            token,
        })
    }

    /// Endpoint every upload is posted to.
    pub fn variables_url(&self) -> &str {
        &self.url
    }

    /// Create or update one secure variable.
    ///
    /// Any status below 300 is success and the body is discarded. Otherwise
    /// the body is returned unparsed in `Error::Api`.
    pub fn upsert_variable(&self, request: &UploadRequest) -> Result<()> {
        debug!(url = %self.url, variable = request.name(), "posting variable");

        let response = self
            .http
            .post(&self.url)
            .header(constants::AUTH_HEADER, self.token.clone())
            .json(request)
            .send()
            .map_err(Error::Network)?;

        let status = response.status();
        debug!(status = status.as_u16(), variable = request.name(), "response received");

        if status.as_u16() >= 300 {
            let body = response
                .text()
                .unwrap_or_else(|e| format!("<unreadable response body: {}>", e));
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        info!(variable = request.name(), "variable updated");
        Ok(())
    }
}

impl std::fmt::Debug for CodemagicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodemagicClient")
            .field("url", &self.url)
            .field("token", &"<redacted>")
            .finish()
    }
}
