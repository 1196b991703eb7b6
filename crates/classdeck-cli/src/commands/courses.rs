use std::sync::Arc;

use classdeck_core::client::ApiClient;
use classdeck_core::models::Course;

use crate::cli::ListArgs;
use crate::commands::common::{column, format_relative_time, load_list, render_list};
use crate::error::CliError;

pub async fn run_list(
    client: Arc<ApiClient>,
    per_page: u32,
    args: &ListArgs,
) -> Result<(), CliError> {
    let controller = load_list::<Course>(client, "courses", per_page, args).await?;
    render_list(&controller, args.json, |course, now| {
        format!(
            "{}  {}  {}  {}  {}",
            column(&course.id.to_string(), 6),
            column(&course.code, 10),
            column(&course.title, 32),
            column(course.status.as_str(), 9),
            format_relative_time(course.created_at, now)
        )
    })
}
