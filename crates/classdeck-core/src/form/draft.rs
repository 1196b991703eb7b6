//! In-progress enrollment draft persistence.
//!
//! The enrollment flow is multi-step; the form state (including the parsed
//! date of birth) is saved between steps and restored if the user returns
//! before completing it. Storage is behind a trait so surfaces can choose
//! their own session-scoped store.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::EnrollmentForm;

/// A saved draft plus the moment it was saved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentDraft {
    pub form: EnrollmentForm,
    pub saved_at: DateTime<Utc>,
}

impl EnrollmentDraft {
    #[must_use]
    pub fn new(form: EnrollmentForm, saved_at: DateTime<Utc>) -> Self {
        Self { form, saved_at }
    }
}

/// Persistence seam for enrollment drafts
pub trait DraftStore {
    fn load(&self) -> Result<Option<EnrollmentDraft>>;
    fn save(&self, draft: &EnrollmentDraft) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// In-memory store used in tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    slot: Mutex<Option<EnrollmentDraft>>,
}

impl MemoryDraftStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStore for MemoryDraftStore {
    fn load(&self) -> Result<Option<EnrollmentDraft>> {
        Ok(self
            .slot
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default())
    }

    fn save(&self, draft: &EnrollmentDraft) -> Result<()> {
        if let Ok(mut guard) = self.slot.lock() {
            *guard = Some(draft.clone());
        }
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if let Ok(mut guard) = self.slot.lock() {
            *guard = None;
        }
        Ok(())
    }
}
