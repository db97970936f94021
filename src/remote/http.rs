//! Shared HTTP plumbing for remote services.
//!
//! Wraps a blocking [`reqwest`] client so every remote call reports
//! failures the same way: transport errors and non-2xx responses become
//! [`AutoPushError::Remote`], undecodable bodies become
//! [`AutoPushError::MalformedResponse`], and registered secrets are scrubbed
//! from every message.

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt::Display;
use std::time::Duration;
use tracing::debug;

use crate::credentials::OutputMasker;
use crate::error::{AutoPushError, Result};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Longest raw error body quoted in an error message.
const MAX_ERROR_BODY: usize = 200;

/// Error body shape shared by GitHub REST and OpenWeatherMap.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Blocking HTTP client with uniform error reporting.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    masker: OutputMasker,
}

impl ApiClient {
    /// Create a client with the default 30-second timeout.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("auto-push/", env!("CARGO_PKG_VERSION")))
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| AutoPushError::Other(e.into()))?;

        Ok(Self {
            client,
            masker: OutputMasker::new(),
        })
    }

    /// Register a secret that must never appear in error messages.
    pub fn with_secret(mut self, secret: &str) -> Self {
        self.masker.add_secret(secret);
        self
    }

    /// The underlying client, for building requests.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Send a request, failing on transport errors and non-2xx statuses.
    pub fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        debug!("{} {}", status.as_u16(), self.masker.mask(response.url().as_str()));

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        Err(AutoPushError::Remote {
            status: Some(status.as_u16()),
            message: self.masker.mask(&error_message(&body, status.canonical_reason())),
        })
    }

    /// Send a request and read the whole body as text.
    pub fn execute_text(&self, request: RequestBuilder) -> Result<String> {
        self.execute(request)?
            .text()
            .map_err(|e| self.transport_error(&e))
    }

    /// Send a request and decode a JSON body.
    pub fn execute_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        decode_json(&self.execute_text(request)?)
    }

    /// reqwest errors quote the request URL, query string included.
    fn transport_error(&self, e: &dyn Display) -> AutoPushError {
        AutoPushError::Remote {
            status: None,
            message: self.masker.mask(&e.to_string()),
        }
    }
}

/// Decode a JSON body, mapping any shape mismatch to a malformed-response error.
pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| AutoPushError::malformed(e.to_string()))
}

/// Pick the most useful message out of an error response body.
fn error_message(body: &str, reason: Option<&str>) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return reason.unwrap_or("no response body").to_string();
    }
    trimmed.chars().take(MAX_ERROR_BODY).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn error_message_prefers_json_message() {
        let msg = error_message(r#"{"message":"Bad credentials"}"#, Some("Unauthorized"));
        assert_eq!(msg, "Bad credentials");
    }

    #[test]
    fn error_message_falls_back_to_body() {
        assert_eq!(error_message("  gateway down ", None), "gateway down");
    }

    #[test]
    fn error_message_falls_back_to_reason() {
        assert_eq!(error_message("", Some("Not Found")), "Not Found");
    }

    #[test]
    fn error_message_truncates_long_bodies() {
        let body = "x".repeat(1000);
        assert_eq!(error_message(&body, None).len(), MAX_ERROR_BODY);
    }

    #[test]
    fn decode_json_reports_malformed() {
        let result: Result<Vec<u32>> = decode_json("{}");
        assert!(matches!(result, Err(AutoPushError::MalformedResponse { .. })));
    }

    #[test]
    fn execute_returns_remote_error_with_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/fail");
            then.status(403).body(r#"{"message":"Forbidden here"}"#);
        });

        let client = ApiClient::new().unwrap();
        let err = client
            .execute(client.inner().get(server.url("/fail")))
            .unwrap_err();

        match err {
            AutoPushError::Remote { status, message } => {
                assert_eq!(status, Some(403));
                assert_eq!(message, "Forbidden here");
            }
            other => panic!("expected remote error, got {other:?}"),
        }
    }

    #[test]
    fn execute_masks_registered_secrets() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/echo");
            then.status(400).body("bad key s3cr3t-value");
        });

        let client = ApiClient::new().unwrap().with_secret("s3cr3t-value");
        let err = client
            .execute(client.inner().get(server.url("/echo")))
            .unwrap_err();

        let text = err.to_string();
        assert!(!text.contains("s3cr3t-value"));
        assert!(text.contains("[REDACTED]"));
    }

    #[test]
    fn execute_reports_transport_failure_without_status() {
        let client = ApiClient::new().unwrap();
        let err = client
            .execute(client.inner().get("http://127.0.0.1:1/unreachable"))
            .unwrap_err();

        assert!(matches!(err, AutoPushError::Remote { status: None, .. }));
    }

    #[test]
    fn transport_errors_mask_secrets_in_url() {
        let client = ApiClient::new().unwrap().with_secret("s3cr3t-value");
        let err = client
            .execute_text(
                client
                    .inner()
                    .get("http://127.0.0.1:1/data?appid=s3cr3t-value"),
            )
            .unwrap_err();

        assert!(matches!(err, AutoPushError::Remote { status: None, .. }));
        assert!(!err.to_string().contains("s3cr3t-value"));
    }

    #[test]
    fn transport_error_masks_message() {
        let client = ApiClient::new().unwrap().with_secret("s3cr3t-value");
        let err = client.transport_error(
            &"error decoding response body for url (http://h/x?appid=s3cr3t-value)",
        );

        match err {
            AutoPushError::Remote { status, message } => {
                assert_eq!(status, None);
                assert!(!message.contains("s3cr3t-value"));
                assert!(message.contains("[REDACTED]"));
            }
            other => panic!("expected remote error, got {other:?}"),
        }
    }

    #[test]
    fn execute_text_returns_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/ok");
            then.status(200).body("plain body");
        });

        let client = ApiClient::new().unwrap();
        let body = client
            .execute_text(client.inner().get(server.url("/ok")))
            .unwrap();

        assert_eq!(body, "plain body");
    }
}
