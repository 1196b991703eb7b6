//! Notification commands: listing and the bulk mark-read/delete actions.

use std::sync::Arc;

use classdeck_core::bulk::{run_sequential, BulkReport, BulkStatus};
use classdeck_core::client::ApiClient;
use classdeck_core::collection::{ListController, PageSource};
use classdeck_core::models::{ListItem, Notification, NotificationId};

use crate::cli::ListArgs;
use crate::commands::common::{column, format_relative_time, load_list, render_list};
use crate::error::CliError;

pub async fn run_list(
    client: Arc<ApiClient>,
    per_page: u32,
    args: &ListArgs,
) -> Result<(), CliError> {
    let controller = load_list::<Notification>(client, "notifications", per_page, args).await?;
    render_list(&controller, args.json, |notification, now| {
        let read_marker = if notification.is_read { " " } else { "*" };
        format!(
            "{read_marker} {}  {}  {}  {}",
            column(&notification.id.to_string(), 6),
            column(notification.kind.as_str(), 10),
            column(&notification.title, 40),
            format_relative_time(notification.created_at, now)
        )
    })
}

pub async fn run_mark_read(
    client: Arc<ApiClient>,
    per_page: u32,
    ids: &[i64],
    all: bool,
    args: &ListArgs,
) -> Result<(), CliError> {
    let mut controller =
        load_list::<Notification>(client.clone(), "notifications", per_page, args).await?;
    let targets = select_targets(&mut controller, ids, all)?;

    let report = run_sequential(targets, |id| {
        let client = client.clone();
        async move { client.mark_notification_read(id).await }
    })
    .await;

    // Re-fetch so the read flags are current and stale selection is pruned.
    controller.refresh().await?;
    print_report("mark-read", &report);
    finish(report)
}

pub async fn run_delete(
    client: Arc<ApiClient>,
    per_page: u32,
    ids: &[i64],
    all: bool,
    args: &ListArgs,
) -> Result<(), CliError> {
    let mut controller =
        load_list::<Notification>(client.clone(), "notifications", per_page, args).await?;
    let targets = select_targets(&mut controller, ids, all)?;

    let report = run_sequential(targets, |id| {
        let client = client.clone();
        async move { client.delete_notification(id).await }
    })
    .await;

    // Deleted ids must never stay selected: the refresh prunes them.
    controller.refresh().await?;
    print_report("delete", &report);
    finish(report)
}

/// Build the target set: the whole filtered view for `--all`, or the
/// explicit ids in fetched-page order.
///
/// Explicit ids are checked against the fetched page up front; an id that
/// is not there is an error, never a silent no-op. They also bypass the
/// filter view: the user named them directly.
pub(crate) fn select_targets<S: PageSource<Notification>>(
    controller: &mut ListController<Notification, S>,
    ids: &[i64],
    all: bool,
) -> Result<Vec<NotificationId>, CliError> {
    if all {
        controller.toggle_all();
        let targets = controller.selected_in_order();
        if targets.is_empty() {
            return Err(CliError::EmptyIdSet);
        }
        return Ok(targets);
    }

    if ids.is_empty() {
        return Err(CliError::EmptyIdSet);
    }

    let fetched: Vec<NotificationId> = controller.all_items().iter().map(ListItem::id).collect();
    let unknown: Vec<String> = ids
        .iter()
        .filter(|id| !fetched.contains(&NotificationId(**id)))
        .map(ToString::to_string)
        .collect();
    if !unknown.is_empty() {
        return Err(CliError::UnknownIds(unknown.join(", ")));
    }

    for id in ids {
        controller.toggle(NotificationId(*id));
    }
    Ok(controller.selection().in_order(&fetched))
}

fn print_report(action: &str, report: &BulkReport<NotificationId>) {
    for outcome in &report.outcomes {
        let status = match &outcome.status {
            BulkStatus::Succeeded => "ok".to_string(),
            BulkStatus::Failed(reason) => format!("failed: {reason}"),
            BulkStatus::Skipped => "skipped".to_string(),
        };
        println!("{}  {status}", column(&outcome.id.to_string(), 6));
    }
    println!(
        "{action}: {} ok, {} failed, {} skipped",
        report.succeeded(),
        report.failed(),
        report.skipped()
    );
}

fn finish(report: BulkReport<NotificationId>) -> Result<(), CliError> {
    if report.is_complete_success() {
        Ok(())
    } else {
        Err(classdeck_core::Error::InvalidInput(
            "bulk action did not complete for every item".to_string(),
        )
        .into())
    }
}
