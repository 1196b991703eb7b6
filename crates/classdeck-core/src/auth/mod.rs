//! Auth session service.
//!
//! One [`AuthHandle`] owns the process-wide bearer token. Every API caller
//! is injected with a clone and observes current auth validity through it;
//! a 401 anywhere clears the handle before the error propagates, forcing
//! re-authentication. Persistence is delegated to a [`TokenStore`] so each
//! surface can choose its own secure storage.

use std::fmt;
use std::sync::{Arc, RwLock};

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::client::{build_http_client, parse_api_error};
use crate::error::{Error, Result};
use crate::models::UserProfile;

/// An authenticated session: opaque bearer token plus the signed-in profile
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub profile: UserProfile,
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AuthSession")
            .field("token", &"[REDACTED]")
            .field("profile", &self.profile)
            .finish()
    }
}

/// Persistence seam for the auth session (keychain, file, in-memory double)
pub trait TokenStore: Send + Sync + 'static {
    fn load(&self) -> Result<Option<AuthSession>>;
    fn save(&self, session: &AuthSession) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// A `TokenStore` that keeps nothing; sessions last for the process only
#[derive(Debug, Clone, Copy, Default)]
pub struct EphemeralStore;

impl TokenStore for EphemeralStore {
    fn load(&self) -> Result<Option<AuthSession>> {
        Ok(None)
    }

    fn save(&self, _session: &AuthSession) -> Result<()> {
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        Ok(())
    }
}

struct AuthInner {
    session: RwLock<Option<AuthSession>>,
    store: Box<dyn TokenStore>,
    changes: watch::Sender<bool>,
}

/// Shared handle to the process-wide auth state
#[derive(Clone)]
pub struct AuthHandle {
    inner: Arc<AuthInner>,
}

impl AuthHandle {
    /// Create a handle backed by `store`, restoring any persisted session.
    pub fn new(store: impl TokenStore) -> Result<Self> {
        let restored = store.load()?;
        let (changes, _) = watch::channel(restored.is_some());
        Ok(Self {
            inner: Arc::new(AuthInner {
                session: RwLock::new(restored),
                store: Box::new(store),
                changes,
            }),
        })
    }

    /// Current session, if signed in
    #[must_use]
    pub fn session(&self) -> Option<AuthSession> {
        self.inner
            .session
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Current bearer token, if signed in
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.session().map(|session| session.token)
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.token().is_some()
    }

    /// Replace the current session and persist it
    pub fn set_session(&self, session: AuthSession) -> Result<()> {
        self.inner.store.save(&session)?;
        if let Ok(mut guard) = self.inner.session.write() {
            *guard = Some(session);
        }
        let _ = self.inner.changes.send(true);
        Ok(())
    }

    /// Clear the session everywhere.
    ///
    /// In-memory state is cleared even when the backing store fails, so a
    /// 401-triggered clear can never be blocked by storage trouble.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.session.write() {
            *guard = None;
        }
        if let Err(error) = self.inner.store.clear() {
            tracing::warn!("Failed to clear persisted session: {error}");
        }
        let _ = self.inner.changes.send(false);
    }

    /// Subscribe to signed-in/signed-out transitions
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.inner.changes.subscribe()
    }
}

#[derive(Debug, Deserialize)]
struct SignInData {
    token: String,
    user: UserProfile,
}

/// Client for the unscoped auth endpoints (`/login`, `/logout`)
#[derive(Clone)]
pub struct AuthApi {
    base_url: String,
    http: reqwest::Client,
    auth: AuthHandle,
}

impl AuthApi {
    pub fn new(base_url: impl Into<String>, auth: AuthHandle) -> Result<Self> {
        Ok(Self {
            base_url: base_url.into(),
            http: build_http_client()?,
            auth,
        })
    }

    /// Sign in and install the returned session into the shared handle
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession> {
        let email = email.trim();
        if email.is_empty() {
            return Err(Error::InvalidInput("Email is required".to_string()));
        }
        if password.trim().is_empty() {
            return Err(Error::InvalidInput("Password is required".to_string()));
        }

        let payload = serde_json::json!({ "email": email, "password": password });
        let response = self
            .http
            .post(format!("{}/login", self.base_url))
            .header("Accept", "application/json")
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message: parse_api_error(status, &body),
            });
        }

        let envelope = response
            .json::<crate::envelope::Envelope<SignInData>>()
            .await?;
        let data = envelope.into_data()?;
        let session = AuthSession {
            token: data.token,
            profile: data.user,
        };
        self.auth.set_session(session.clone())?;
        Ok(session)
    }

    /// Sign out server-side, then clear the local session.
    ///
    /// A 401 from the server is tolerated: the token is already dead and
    /// the local clear is what matters.
    pub async fn sign_out(&self) -> Result<()> {
        if let Some(token) = self.auth.token() {
            let response = self
                .http
                .post(format!("{}/logout", self.base_url))
                .header("Accept", "application/json")
                .bearer_auth(token)
                .send()
                .await?;

            if !(response.status().is_success() || response.status() == StatusCode::UNAUTHORIZED) {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(Error::Api {
                    status: status.as_u16(),
                    message: parse_api_error(status, &body),
                });
            }
        }

        self.auth.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::models::Role;

    use super::*;

    fn sample_session() -> AuthSession {
        AuthSession {
            token: "secret-bearer-token".to_string(),
            profile: UserProfile {
                id: 1,
                name: "Amina Yusuf".to_string(),
                email: "amina@example.com".to_string(),
                role: Role::Student,
            },
        }
    }

    #[test]
    fn session_debug_redacts_token() {
        let rendered = format!("{:?}", sample_session());
        assert!(!rendered.contains("secret-bearer-token"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn set_and_clear_round_trip() {
        let auth = AuthHandle::new(EphemeralStore).unwrap();
        assert!(!auth.is_signed_in());

        auth.set_session(sample_session()).unwrap();
        assert_eq!(auth.token().as_deref(), Some("secret-bearer-token"));

        auth.clear();
        assert!(auth.token().is_none());
    }

    #[tokio::test]
    async fn sign_in_rejects_blank_credentials_before_any_request() {
        let auth = AuthHandle::new(EphemeralStore).unwrap();
        let api = AuthApi::new("https://api.classdeck.io", auth.clone()).unwrap();

        assert!(api.sign_in("  ", "secret").await.is_err());
        assert!(api.sign_in("amina@example.com", " ").await.is_err());
        assert!(!auth.is_signed_in());
    }

    #[test]
    fn subscribers_observe_transitions() {
        let auth = AuthHandle::new(EphemeralStore).unwrap();
        let receiver = auth.subscribe();
        assert!(!*receiver.borrow());

        auth.set_session(sample_session()).unwrap();
        assert!(*receiver.borrow());

        auth.clear();
        assert!(!*receiver.borrow());
    }
}
