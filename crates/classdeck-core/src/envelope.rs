//! Wire envelope and pagination types.
//!
//! Every REST response is wrapped in `{status, message, data}`; list
//! endpoints additionally carry a `pagination` object alongside the item
//! array. Decoding is strict about the envelope shape but tolerant about
//! optional fields, in the same spirit as the backend's own serializers.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Standard `{status, message, data}` wrapper returned by every REST call.
///
/// The explicit bound keeps the derive from demanding `T: Default` for the
/// defaulted `data` field; payload types never need `Default`.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct Envelope<T> {
    pub status: EnvelopeStatus,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

impl<T> Envelope<T> {
    /// Unwrap the payload, treating an `error` status inside a 2xx body as
    /// an API failure carrying the envelope message.
    pub fn into_data(self) -> Result<T> {
        match (self.status, self.data) {
            (EnvelopeStatus::Success, Some(data)) => Ok(data),
            (EnvelopeStatus::Success, None) => {
                Err(Error::Envelope("success envelope without data".to_string()))
            }
            (EnvelopeStatus::Error, _) => Err(Error::Envelope(
                self.message
                    .unwrap_or_else(|| "error envelope without message".to_string()),
            )),
        }
    }
}

/// Pagination object `{current_page, per_page, total, last_page}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub per_page: u32,
    pub total: u64,
    pub last_page: u32,
}

impl PageMeta {
    /// Single empty page; the state before any fetch has completed
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            current_page: 1,
            per_page: 0,
            total: 0,
            last_page: 1,
        }
    }
}

/// One fetched page of a remote collection
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: PageMeta,
}
