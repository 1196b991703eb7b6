//! Enrollment command: multi-step form with a persisted draft.
//!
//! Each invocation merges the provided flags into the saved draft. With
//! `--submit` the draft is validated (age-gated guardian rules included)
//! and sent; the draft is cleared only after the server accepts it.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use classdeck_core::client::ApiClient;
use classdeck_core::form::{
    validate_enrollment, DraftStore, EnrollmentDraft, EnrollmentForm, FormFlow, SubmitOutcome,
};
use classdeck_core::notify::NoticeBoard;
use classdeck_core::{Error, Result as CoreResult};

use crate::cli::EnrollArgs;
use crate::commands::assignments::print_field_errors;
use crate::commands::common::render_notices;
use crate::error::CliError;

const DRAFT_FILE_NAME: &str = "enroll-draft.json";

/// Draft persistence in the CLI config directory
pub struct FileDraftStore {
    path: PathBuf,
}

impl FileDraftStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("classdeck")
            .join(DRAFT_FILE_NAME)
    }
}

impl DraftStore for FileDraftStore {
    fn load(&self) -> CoreResult<Option<EnrollmentDraft>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw =
            std::fs::read_to_string(&self.path).map_err(|error| Error::Store(error.to_string()))?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&self, draft: &EnrollmentDraft) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| Error::Store(error.to_string()))?;
        }
        let raw = serde_json::to_string_pretty(draft)?;
        std::fs::write(&self.path, raw).map_err(|error| Error::Store(error.to_string()))
    }

    fn clear(&self) -> CoreResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(Error::Store(error.to_string())),
        }
    }
}

pub async fn run_enroll(
    client: Arc<ApiClient>,
    store: &impl DraftStore,
    args: &EnrollArgs,
) -> Result<(), CliError> {
    if args.discard_draft {
        store.clear()?;
        println!("Draft discarded.");
        return Ok(());
    }

    let draft = store.load()?;
    let had_draft = draft.is_some();
    let mut form = draft.map(|draft| draft.form).unwrap_or_default();
    let provided_flags = merge_args(&mut form, args)?;
    if args.submit && !had_draft && !provided_flags {
        return Err(CliError::NoDraft);
    }

    if !args.submit {
        store.save(&EnrollmentDraft::new(form, Utc::now()))?;
        println!("Draft saved. Re-run with --submit when complete.");
        return Ok(());
    }

    let mut board = NoticeBoard::new();
    let mut flow = FormFlow::new();
    flow.open(form.clone());

    let today = Utc::now().date_naive();
    let Some(fields) = flow.begin_submit(|form| validate_enrollment(form, today)) else {
        print_field_errors(flow.errors());
        // Keep the draft so nothing typed so far is lost.
        store.save(&EnrollmentDraft::new(form, Utc::now()))?;
        return Err(
            Error::InvalidInput("enrollment rejected by local validation".to_string()).into(),
        );
    };

    let payload = fields.to_payload()?;
    let result = client.enroll(&payload).await;

    match flow.finish_submit(result) {
        SubmitOutcome::Completed => {
            store.clear()?;
            board.post_success("Enrollment submitted", Utc::now());
            render_notices(&board);
            Ok(())
        }
        SubmitOutcome::Rejected => {
            print_field_errors(flow.errors());
            if let Some(message) = flow.server_message() {
                board.post_error(message.to_string(), Utc::now());
            }
            render_notices(&board);
            // Entered input survives the failure for the next attempt.
            store.save(&EnrollmentDraft::new(form, Utc::now()))?;
            Err(Error::InvalidInput("enrollment rejected by the server".to_string()).into())
        }
    }
}

/// Merge provided flags into the draft, leaving absent flags untouched.
/// Returns whether any flag was actually provided.
pub fn merge_args(form: &mut EnrollmentForm, args: &EnrollArgs) -> Result<bool, CliError> {
    let mut provided = false;
    let mut assign = |target: &mut String, value: &Option<String>| {
        if let Some(value) = value {
            *target = value.trim().to_string();
            provided = true;
        }
    };

    assign(&mut form.full_name, &args.full_name);
    assign(&mut form.email, &args.email);
    assign(&mut form.phone, &args.phone);
    assign(&mut form.password, &args.password);
    assign(&mut form.password_confirmation, &args.password_confirmation);
    assign(&mut form.guardian_name, &args.guardian_name);
    assign(&mut form.guardian_email, &args.guardian_email);
    assign(&mut form.guardian_phone, &args.guardian_phone);
    assign(&mut form.course_code, &args.course_code);

    if let Some(raw) = &args.date_of_birth {
        let parsed = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
            CliError::Config(format!("Invalid --date-of-birth '{raw}', expected YYYY-MM-DD"))
        })?;
        form.date_of_birth = Some(parsed);
        provided = true;
    }
    Ok(provided)
}
