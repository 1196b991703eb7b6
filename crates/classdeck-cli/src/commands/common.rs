//! Shared plumbing for the list commands: criteria assembly, fetching,
//! and row/JSON rendering helpers.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use classdeck_core::client::{ApiClient, ListEndpoint};
use classdeck_core::collection::{
    DateFilter, Facet, FilterCriteria, ListController, LoadState, SortOrder,
};
use classdeck_core::models::ListItem;
use classdeck_core::notify::{NoticeBoard, NoticeKind};

use crate::cli::{DateChoice, ListArgs, SortChoice};
use crate::error::CliError;

/// Map CLI flags onto the engine's filter criteria
#[must_use]
pub fn build_criteria(args: &ListArgs) -> FilterCriteria {
    let facet = |value: &Option<String>| match value {
        Some(value) if !value.trim().is_empty() => Facet::Only(value.trim().to_lowercase()),
        _ => Facet::All,
    };

    FilterCriteria {
        search: args.search.clone().unwrap_or_default(),
        status: facet(&args.status),
        category: facet(&args.category),
        date: match args.date {
            DateChoice::All => DateFilter::All,
            DateChoice::Today => DateFilter::Today,
            DateChoice::Week => DateFilter::ThisWeek,
            DateChoice::Month => DateFilter::ThisMonth,
        },
        sort: match args.sort {
            SortChoice::Newest => SortOrder::Newest,
            SortChoice::Oldest => SortOrder::Oldest,
        },
    }
}

/// Fetch the requested page and apply the flag-derived criteria.
pub async fn load_list<T>(
    client: Arc<ApiClient>,
    path: &str,
    per_page: u32,
    args: &ListArgs,
) -> Result<ListController<T, ListEndpoint<T>>, CliError>
where
    T: ListItem + DeserializeOwned,
{
    let endpoint = ListEndpoint::new(client, path, per_page);
    let mut controller = ListController::new(endpoint);
    controller.refresh().await?;
    if args.page != 1 {
        controller.set_page(args.page).await?;
    }

    let criteria = build_criteria(args);
    controller.set_search(criteria.search.clone());
    controller.set_status(criteria.status.clone());
    controller.set_category(criteria.category.clone());
    controller.set_date(criteria.date);
    controller.set_sort(criteria.sort);
    Ok(controller)
}

/// Render a list result: JSON or rows, plus the empty/failed states.
pub fn render_list<T, S, R>(
    controller: &ListController<T, S>,
    as_json: bool,
    row: R,
) -> Result<(), CliError>
where
    T: ListItem + Serialize,
    S: classdeck_core::collection::PageSource<T>,
    R: Fn(&T, DateTime<Utc>) -> String,
{
    let visible = controller.visible();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    match controller.state() {
        LoadState::Failed(message) => println!("Error: {message}"),
        LoadState::Loading => println!("Loading..."),
        LoadState::Ready if visible.is_empty() => println!("Nothing to show."),
        LoadState::Ready => {
            let now = Utc::now();
            for item in &visible {
                println!("{}", row(item, now));
            }
            let pager = controller.pager();
            println!(
                "page {}/{}  ({} shown)",
                pager.current_page(),
                pager.last_page(),
                visible.len()
            );
        }
    }
    Ok(())
}

/// Print accumulated notices the way the dashboard shows toasts
pub fn render_notices(board: &NoticeBoard) {
    let now = Utc::now();
    for notice in board.active(now) {
        match notice.kind {
            NoticeKind::Success => println!("ok: {}", notice.message),
            NoticeKind::Error => eprintln!("error: {}", notice.message),
        }
    }
}

/// Compact "2h ago" style rendering for list rows
#[must_use]
pub fn format_relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(then);
    let minutes = delta.num_minutes();
    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = delta.num_hours();
    if hours < 24 {
        return format!("{hours}h ago");
    }
    let days = delta.num_days();
    if days < 30 {
        return format!("{days}d ago");
    }
    then.format("%Y-%m-%d").to_string()
}

/// Left-pad/truncate to a fixed column width
#[must_use]
pub fn column(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    while out.chars().count() < width {
        out.push(' ');
    }
    out
}
