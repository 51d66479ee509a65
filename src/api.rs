//! HTTP client for the dialogue generation API.
//!
//! All endpoints answer JSON and report failures as a `detail` field in the
//! body, either a plain string or a list of `{ "msg": ... }` objects. The
//! client splits every response into status and body first, so a rejection
//! keeps whatever detail the server sent alongside the status code.

use crate::compose::Payload;
use crate::types::DialogueResponse;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

static HTTP: Lazy<Client> = Lazy::new(Client::new);

// ============================================
// Error Types
// ============================================

#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a response (refused connection, timeout,
    /// bad address).
    Transport(reqwest::Error),
    /// The server answered with a non-success status.
    Rejected { status: u16, detail: Option<String> },
    /// The server answered success but the body did not match the expected
    /// shape.
    Decode(serde_json::Error),
}

impl ApiError {
    fn rejected(status: u16, body: &str) -> Self {
        ApiError::Rejected {
            status,
            detail: extract_detail(body),
        }
    }

    /// Server-sent detail when there is one, the caller's fallback text
    /// otherwise. Auth screens use this so a bare 401 still reads like a
    /// sentence.
    pub fn detail_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Rejected { detail: None, .. } => fallback.to_string(),
            other => other.to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(err) => write!(f, "{err}"),
            ApiError::Rejected {
                detail: Some(detail),
                ..
            } => write!(f, "{detail}"),
            ApiError::Rejected {
                status,
                detail: None,
            } => write!(f, "HTTP error! status: {status}"),
            ApiError::Decode(err) => write!(f, "unexpected response body: {err}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(err) => Some(err),
            ApiError::Decode(err) => Some(err),
            ApiError::Rejected { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Pulls the `detail` field out of an error body. FastAPI-style validation
/// errors arrive as a list of objects; plain rejections as a string.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(text) => Some(text.clone()),
        Value::Array(items) => items
            .first()?
            .get("msg")?
            .as_str()
            .map(|msg| msg.to_string()),
        _ => None,
    }
}

// ============================================
// Client
// ============================================

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

#[derive(Deserialize)]
struct TokenGrant {
    access_token: String,
}

#[derive(Deserialize)]
struct ApiTokenGrant {
    api_token: String,
}

#[derive(Serialize)]
struct SignupBody<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Reads `DIALOGUE_API_URL`, falling back to the bundled default.
    pub fn from_env() -> Self {
        let base_url =
            env::var("DIALOGUE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Submits a composed payload and returns the generated script.
    pub async fn generate_dialogue(&self, payload: &Payload) -> ApiResult<DialogueResponse> {
        let response = HTTP
            .post(self.url("/generate_dialogue"))
            .json(payload)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "dialogue generation rejected");
            return Err(ApiError::rejected(status.as_u16(), &body));
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Exchanges credentials for a bearer token. The token endpoint takes a
    /// form-encoded body, not JSON.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<String> {
        let response = HTTP
            .post(self.url("/auth/token"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::rejected(status.as_u16(), &body));
        }
        let grant: TokenGrant = serde_json::from_str(&body)?;
        Ok(grant.access_token)
    }

    /// Registers a new account. Success carries no payload the UI needs.
    pub async fn signup(&self, username: &str, email: &str, password: &str) -> ApiResult<()> {
        let response = HTTP
            .post(self.url("/auth/signup"))
            .json(&SignupBody {
                username,
                email,
                password,
            })
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::rejected(status.as_u16(), &body));
        }
        Ok(())
    }

    /// Mints a long-lived API token for the signed-in user.
    pub async fn generate_api_token(&self, bearer: &str) -> ApiResult<String> {
        let response = HTTP
            .post(self.url("/auth/generate-api-token"))
            .bearer_auth(bearer)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::rejected(status.as_u16(), &body));
        }
        let grant: ApiTokenGrant = serde_json::from_str(&body)?;
        Ok(grant.api_token)
    }
}
