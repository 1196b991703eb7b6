//! Assignment commands: listing plus the submit/grade mutation flows.

use std::sync::Arc;

use chrono::Utc;

use classdeck_core::client::{ApiClient, AssignmentSubmission, GradePayload};
use classdeck_core::form::{validate_grade, validate_submission, FormFlow, SubmitOutcome};
use classdeck_core::models::{Assignment, AssignmentId};
use classdeck_core::notify::NoticeBoard;

use crate::cli::ListArgs;
use crate::commands::common::{
    column, format_relative_time, load_list, render_list, render_notices,
};
use crate::error::CliError;

pub async fn run_list(
    client: Arc<ApiClient>,
    per_page: u32,
    args: &ListArgs,
) -> Result<(), CliError> {
    let controller = load_list::<Assignment>(client, "assignments", per_page, args).await?;
    render_list(&controller, args.json, |assignment, now| {
        let grade = assignment
            .grade
            .map_or_else(|| "-".to_string(), |grade| format!("{grade:.0}"));
        format!(
            "{}  {}  {}  {}  {}  due {}",
            column(&assignment.id.to_string(), 6),
            column(&assignment.course_code, 10),
            column(&assignment.title, 32),
            column(assignment.status.as_str(), 9),
            column(&grade, 4),
            format_relative_time(assignment.due_at, now)
        )
    })
}

#[derive(Clone)]
struct SubmissionForm {
    url: String,
    comment: Option<String>,
}

pub async fn run_submit(
    client: Arc<ApiClient>,
    id: i64,
    url: &str,
    comment: Option<String>,
) -> Result<(), CliError> {
    let mut board = NoticeBoard::new();
    let mut flow = FormFlow::new();
    flow.open(SubmissionForm {
        url: url.to_string(),
        comment,
    });

    let Some(fields) = flow.begin_submit(|form| validate_submission(&form.url)) else {
        print_field_errors(flow.errors());
        return Err(classdeck_core::Error::InvalidInput(
            "submission rejected by local validation".to_string(),
        )
        .into());
    };

    let payload = AssignmentSubmission {
        submission_url: fields.url,
        comment: fields.comment,
    };
    let result = client.submit_assignment(AssignmentId(id), &payload).await;

    match flow.finish_submit(result) {
        SubmitOutcome::Completed => {
            board.post_success(format!("Assignment {id} submitted"), Utc::now());
            render_notices(&board);
            Ok(())
        }
        SubmitOutcome::Rejected => {
            print_field_errors(flow.errors());
            if let Some(message) = flow.server_message() {
                board.post_error(message.to_string(), Utc::now());
            }
            render_notices(&board);
            Err(classdeck_core::Error::InvalidInput(
                "submission rejected by the server".to_string(),
            )
            .into())
        }
    }
}

#[derive(Clone)]
struct GradeForm {
    grade: f64,
    feedback: Option<String>,
}

pub async fn run_grade(
    client: Arc<ApiClient>,
    id: i64,
    grade: f64,
    feedback: Option<String>,
) -> Result<(), CliError> {
    let mut board = NoticeBoard::new();
    let mut flow = FormFlow::new();
    flow.open(GradeForm { grade, feedback });

    let Some(fields) = flow.begin_submit(|form| validate_grade(form.grade)) else {
        print_field_errors(flow.errors());
        return Err(classdeck_core::Error::InvalidInput(
            "grade rejected by local validation".to_string(),
        )
        .into());
    };

    let payload = GradePayload {
        grade: fields.grade,
        feedback: fields.feedback,
    };
    let result = client.grade_assignment(AssignmentId(id), &payload).await;

    match flow.finish_submit(result) {
        SubmitOutcome::Completed => {
            board.post_success(format!("Assignment {id} graded"), Utc::now());
            render_notices(&board);
            Ok(())
        }
        SubmitOutcome::Rejected => {
            print_field_errors(flow.errors());
            if let Some(message) = flow.server_message() {
                board.post_error(message.to_string(), Utc::now());
            }
            render_notices(&board);
            Err(
                classdeck_core::Error::InvalidInput("grade rejected by the server".to_string())
                    .into(),
            )
        }
    }
}

pub fn print_field_errors(errors: &classdeck_core::form::FieldErrors) {
    for (field, message) in errors {
        eprintln!("  {field}: {message}");
    }
}
