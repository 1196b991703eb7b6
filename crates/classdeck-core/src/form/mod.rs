//! Modal mutation flow.
//!
//! Per-form state machine `Closed -> Open -> Submitting -> Closed`.
//! Opening seeds local form state with a copy of the item (edits never
//! touch the source list until confirmed). Submission validates locally
//! first and only then hits the network; on failure the form stays open
//! with the entered input preserved and the server message shown verbatim.

mod draft;
mod validation;

use std::collections::BTreeMap;

use crate::error::Error;

pub use draft::{DraftStore, EnrollmentDraft, MemoryDraftStore};
pub use validation::{
    is_valid_email, is_valid_meeting_link, is_valid_phone, validate_enrollment, validate_grade,
    validate_submission, EnrollmentForm, ADULT_AGE_YEARS,
};

/// Per-field validation errors, rendered identically whether they came
/// from local validation or from the server's `errors` payload
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Closed,
    Open,
    Submitting,
}

/// Outcome of completing a submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Mutation confirmed; the form closed and the owning collection
    /// should be re-fetched
    Completed,
    /// Mutation rejected; the form stays open with errors populated
    Rejected,
}

/// State machine for one modal form over field type `F`
#[derive(Debug, Clone)]
pub struct FormFlow<F: Clone> {
    phase: FormPhase,
    fields: Option<F>,
    errors: FieldErrors,
    server_message: Option<String>,
}

impl<F: Clone> Default for FormFlow<F> {
    fn default() -> Self {
        Self {
            phase: FormPhase::Closed,
            fields: None,
            errors: FieldErrors::new(),
            server_message: None,
        }
    }
}

impl<F: Clone> FormFlow<F> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        self.server_message.as_deref()
    }

    #[must_use]
    pub const fn fields(&self) -> Option<&F> {
        self.fields.as_ref()
    }

    /// Editable form state; input is frozen while a submission is in flight
    pub fn fields_mut(&mut self) -> Option<&mut F> {
        if self.phase == FormPhase::Open {
            self.fields.as_mut()
        } else {
            None
        }
    }

    /// Open the form seeded with a copy of `seed`.
    ///
    /// Refused while a submission is in flight.
    pub fn open(&mut self, seed: F) -> bool {
        if self.phase == FormPhase::Submitting {
            return false;
        }
        self.phase = FormPhase::Open;
        self.fields = Some(seed);
        self.errors.clear();
        self.server_message = None;
        true
    }

    /// Close/cancel. Blocked while submitting: the flow has no way to
    /// abort the in-flight mutation.
    pub fn close(&mut self) -> bool {
        if self.phase == FormPhase::Submitting {
            return false;
        }
        self.phase = FormPhase::Closed;
        self.fields = None;
        self.errors.clear();
        self.server_message = None;
        true
    }

    /// Validate and, if clean, enter `Submitting`.
    ///
    /// Returns the fields to send when validation passes. A second call
    /// while already submitting returns `None`, which is the uniform
    /// double-submission guard. Validation failures populate the per-field
    /// errors and never reach the network.
    pub fn begin_submit(&mut self, validator: impl FnOnce(&F) -> FieldErrors) -> Option<F> {
        if self.phase != FormPhase::Open {
            return None;
        }
        let fields = self.fields.as_ref()?;
        let errors = validator(fields);
        if errors.is_empty() {
            self.errors.clear();
            self.server_message = None;
            self.phase = FormPhase::Submitting;
            Some(fields.clone())
        } else {
            self.errors = errors;
            None
        }
    }

    /// Record the network result of the in-flight submission.
    pub fn finish_submit(&mut self, result: Result<(), Error>) -> SubmitOutcome {
        debug_assert_eq!(self.phase, FormPhase::Submitting);
        match result {
            Ok(()) => {
                self.phase = FormPhase::Closed;
                self.fields = None;
                self.errors.clear();
                self.server_message = None;
                SubmitOutcome::Completed
            }
            Err(Error::ServerValidation(fields)) => {
                self.errors = fields;
                self.phase = FormPhase::Open;
                SubmitOutcome::Rejected
            }
            Err(error) => {
                self.server_message = Some(error.user_message());
                self.phase = FormPhase::Open;
                SubmitOutcome::Rejected
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn require_title(fields: &String) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if fields.trim().is_empty() {
            errors.insert("title".to_string(), "Title is required".to_string());
        }
        errors
    }

    #[test]
    fn open_seeds_a_copy_and_close_discards_it() {
        let mut flow = FormFlow::new();
        assert!(flow.open("Lab report".to_string()));
        assert_eq!(flow.phase(), FormPhase::Open);
        assert_eq!(flow.fields().unwrap(), "Lab report");

        assert!(flow.close());
        assert_eq!(flow.phase(), FormPhase::Closed);
        assert!(flow.fields().is_none());
    }

    #[test]
    fn local_validation_failure_never_enters_submitting() {
        let mut flow = FormFlow::new();
        flow.open(String::new());
        assert!(flow.begin_submit(require_title).is_none());
        assert_eq!(flow.phase(), FormPhase::Open);
        assert_eq!(flow.errors().get("title").unwrap(), "Title is required");
    }

    #[test]
    fn submitting_blocks_close_and_double_submit() {
        let mut flow = FormFlow::new();
        flow.open("Lab report".to_string());
        assert!(flow.begin_submit(require_title).is_some());
        assert_eq!(flow.phase(), FormPhase::Submitting);

        assert!(!flow.close());
        assert!(flow.begin_submit(require_title).is_none());
        assert!(flow.fields_mut().is_none());
    }

    #[test]
    fn success_closes_and_clears() {
        let mut flow = FormFlow::new();
        flow.open("Lab report".to_string());
        flow.begin_submit(require_title).unwrap();
        assert_eq!(flow.finish_submit(Ok(())), SubmitOutcome::Completed);
        assert_eq!(flow.phase(), FormPhase::Closed);
    }

    #[test]
    fn network_failure_preserves_input_and_shows_server_message() {
        let mut flow = FormFlow::new();
        flow.open("Lab report".to_string());
        flow.begin_submit(require_title).unwrap();

        let outcome = flow.finish_submit(Err(Error::Api {
            status: 500,
            message: "Storage quota exceeded".to_string(),
        }));
        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(flow.phase(), FormPhase::Open);
        assert_eq!(flow.fields().unwrap(), "Lab report");
        assert_eq!(flow.server_message(), Some("Storage quota exceeded"));
    }

    #[test]
    fn server_field_errors_land_in_the_same_error_state() {
        let mut flow = FormFlow::new();
        flow.open("Lab report".to_string());
        flow.begin_submit(require_title).unwrap();

        let mut fields = FieldErrors::new();
        fields.insert("title".to_string(), "Title already used".to_string());
        flow.finish_submit(Err(Error::ServerValidation(fields)));
        assert_eq!(flow.errors().get("title").unwrap(), "Title already used");
        assert_eq!(flow.phase(), FormPhase::Open);
    }
}
