//! Client configuration.
//!
//! A `ClientConfig` holds the public endpoint and role scope a surface
//! needs to talk to the backend. Secrets (the bearer token) never live
//! here; they belong to the auth session store.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::Role;
use crate::util::is_http_url;

const DEFAULT_PER_PAGE: u32 = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub role: Role,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

const fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

impl ClientConfig {
    pub fn new(api_base_url: impl AsRef<str>, role: Role) -> Result<Self> {
        Ok(Self {
            api_base_url: normalize_base_url(api_base_url.as_ref())?,
            role,
            per_page: DEFAULT_PER_PAGE,
        })
    }

    /// Re-validate after deserialization (config files bypass `new`).
    pub fn validated(mut self) -> Result<Self> {
        self.api_base_url = normalize_base_url(&self.api_base_url)?;
        if self.per_page == 0 {
            return Err(Error::InvalidInput(
                "per_page must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Require an http(s) scheme and strip any trailing slash
pub fn normalize_base_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(Error::InvalidInput(
            "API base URL must not be empty".to_string(),
        ));
    }
    if !is_http_url(trimmed) {
        return Err(Error::InvalidInput(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn normalize_base_url_trims_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://api.classdeck.io/v1/").unwrap(),
            "https://api.classdeck.io/v1"
        );
        assert!(normalize_base_url("api.classdeck.io").is_err());
        assert!(normalize_base_url("   ").is_err());
    }

    #[test]
    fn config_files_reject_unknown_fields_and_bad_values() {
        let parsed: ClientConfig = serde_json::from_str(
            r#"{"api_base_url":"https://api.classdeck.io/v1","role":"tutor"}"#,
        )
        .unwrap();
        let config = parsed.validated().unwrap();
        assert_eq!(config.per_page, 15);

        let unknown = serde_json::from_str::<ClientConfig>(
            r#"{"api_base_url":"https://x.io","role":"tutor","theme":"dark"}"#,
        );
        assert!(unknown.is_err());
    }
}
