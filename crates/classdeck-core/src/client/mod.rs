//! Role-scoped REST client.
//!
//! All role-scoped endpoints live under `/admin`, `/tutor`, or `/student`;
//! the scope changes the URL prefix, never the request shape. Every request
//! carries `Authorization: Bearer <token>` and `Accept: application/json`.
//! On 401 the shared [`AuthHandle`] is cleared before the error propagates.
//! No retries: a single failed fetch surfaces directly to the caller.

mod endpoints;

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::auth::AuthHandle;
use crate::envelope::{Envelope, Page};
use crate::error::{Error, Result};
use crate::models::Role;
use crate::util::compact_text;

pub use endpoints::{AssignmentSubmission, EnrollmentPayload, GradePayload, ListEndpoint};

/// A stalled request must surface as an error, not an eternal loading state.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The one HTTP client constructor; every outgoing request, auth included,
/// carries the same timeout.
pub(crate) fn build_http_client() -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?)
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    role: Role,
    http: reqwest::Client,
    auth: AuthHandle,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, role: Role, auth: AuthHandle) -> Result<Self> {
        Ok(Self {
            base_url: base_url.into(),
            role,
            http: build_http_client()?,
            auth,
        })
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    fn scoped_url(&self, path: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_url,
            self.role.scope(),
            path.trim_start_matches('/')
        )
    }

    /// Callers must not fetch without a token; this is the no-op guard.
    fn bearer(&self) -> Result<String> {
        self.auth.token().ok_or(Error::NotSignedIn)
    }

    fn prepare(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        Ok(request
            .bearer_auth(self.bearer()?)
            .header("Accept", "application/json"))
    }

    /// Fetch one page of a role-scoped collection
    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        path: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Page<T>> {
        let request = self
            .prepare(self.http.get(self.scoped_url(path)))?
            .query(&[("page", page), ("per_page", per_page)]);
        tracing::debug!(path, page, "fetching collection page");
        self.decode(request.send().await?).await
    }

    /// POST where only the envelope status matters
    pub async fn post_unit<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<()> {
        let request = self.prepare(self.http.post(self.scoped_url(path)))?.json(body);
        self.decode_unit(request.send().await?).await
    }

    pub async fn delete_unit(&self, path: &str) -> Result<()> {
        let request = self.prepare(self.http.delete(self.scoped_url(path)))?;
        self.decode_unit(request.send().await?).await
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let response = self.check(response).await?;
        response.json::<Envelope<T>>().await?.into_data()
    }

    async fn decode_unit(&self, response: Response) -> Result<()> {
        let response = self.check(response).await?;
        let envelope = response.json::<Envelope<serde_json::Value>>().await?;
        match envelope.status {
            crate::envelope::EnvelopeStatus::Success => Ok(()),
            crate::envelope::EnvelopeStatus::Error => Err(Error::Envelope(
                envelope
                    .message
                    .unwrap_or_else(|| "error envelope without message".to_string()),
            )),
        }
    }

    /// Map non-2xx statuses to the error taxonomy, clearing auth on 401
    async fn check(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("received 401, clearing auth session");
            self.auth.clear();
            return Err(Error::Unauthorized);
        }
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        if let Some(fields) = parse_field_errors(&body) {
            return Err(Error::ServerValidation(fields));
        }
        Err(Error::Api {
            status: status.as_u16(),
            message: parse_api_error(status, &body),
        })
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    #[serde(default)]
    errors: Option<BTreeMap<String, String>>,
}

/// Extract the server's message text from an error body, falling back to
/// the raw body or the bare status code.
pub(crate) fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = payload.message {
            let message = message.trim();
            if !message.is_empty() {
                return message.to_string();
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        compact_text(trimmed)
    }
}

/// Structured `errors: {field: message}` payloads map back onto the same
/// per-field error state local validation uses.
fn parse_field_errors(body: &str) -> Option<BTreeMap<String, String>> {
    let payload = serde_json::from_str::<ApiErrorBody>(body).ok()?;
    payload.errors.filter(|errors| !errors.is_empty())
}
