use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Google's siteverify endpoint for reCAPTCHA tokens.
pub const SITEVERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("reCAPTCHA secret is not configured")]
    MissingSecret,

    #[error("verification request failed: {0}")]
    Unreachable(#[from] reqwest::Error),
}

/// Body returned by the siteverify endpoint. Only the success flag matters;
/// everything else the provider sends is ignored.
#[derive(Debug, Deserialize)]
pub struct SiteverifyResponse {
    pub success: bool,
}

/// Client for the third-party bot-verification service.
///
/// Holds the shared HTTP client and the secret credential. The secret comes
/// from runtime configuration only; when it is absent every call fails fast
/// with [`VerifyError::MissingSecret`] without touching the network. Calls
/// are independent and stateless: no retry, no caching.
#[derive(Clone)]
pub struct CaptchaVerifier {
    http: reqwest::Client,
    secret: Option<String>,
    endpoint: String,
}

impl CaptchaVerifier {
    pub fn new(secret: Option<String>) -> Self {
        Self::with_endpoint(secret, SITEVERIFY_URL)
    }

    /// Point the verifier at an alternate endpoint. Used by tests to stand in
    /// a local siteverify mock.
    pub fn with_endpoint(secret: Option<String>, endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret,
            endpoint: endpoint.into(),
        }
    }

    fn request_url(&self, secret: &str, token: &str) -> String {
        // Secret and token travel as raw query parameters on the request URL,
        // no body, exactly as the upstream API expects them.
        format!("{}?secret={}&response={}", self.endpoint, secret, token)
    }

    /// Ask the remote service whether the token belongs to a human.
    ///
    /// Returns the provider's boolean verdict; both outcomes are successful
    /// results. A network failure or a non-JSON body is
    /// [`VerifyError::Unreachable`].
    pub async fn verify(&self, token: &str) -> Result<bool, VerifyError> {
        let secret = self.secret.as_deref().ok_or(VerifyError::MissingSecret)?;

        let url = self.request_url(secret, token);
        let response: SiteverifyResponse = self.http.post(&url).send().await?.json().await?;

        debug!(success = response.success, "siteverify responded");
        Ok(response.success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_embeds_secret_and_token() {
        let verifier = CaptchaVerifier::with_endpoint(
            Some("s3cret".to_string()),
            "http://127.0.0.1:9/siteverify",
        );

        let url = verifier.request_url("s3cret", "tok-123");
        assert_eq!(
            url,
            "http://127.0.0.1:9/siteverify?secret=s3cret&response=tok-123"
        );
    }

    #[test]
    fn test_siteverify_response_parses_extra_fields() {
        let body = r#"{"success": true, "challenge_ts": "2024-01-01T00:00:00Z", "hostname": "example.com"}"#;
        let parsed: SiteverifyResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.success);
    }

    #[tokio::test]
    async fn test_missing_secret_fails_before_any_request() {
        // Port 9 (discard) would hang or refuse; MissingSecret must win first.
        let verifier = CaptchaVerifier::with_endpoint(None, "http://127.0.0.1:9/siteverify");

        let result = verifier.verify("tok-123").await;
        assert!(matches!(result, Err(VerifyError::MissingSecret)));
    }
}
