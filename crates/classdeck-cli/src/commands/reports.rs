use std::sync::Arc;

use classdeck_core::client::ApiClient;
use classdeck_core::models::Report;

use crate::cli::ListArgs;
use crate::commands::common::{column, format_relative_time, load_list, render_list};
use crate::error::CliError;

pub async fn run_list(
    client: Arc<ApiClient>,
    per_page: u32,
    args: &ListArgs,
) -> Result<(), CliError> {
    let controller = load_list::<Report>(client, "reports", per_page, args).await?;
    render_list(&controller, args.json, |report, now| {
        format!(
            "{}  {}  {}  {}  {}",
            column(&report.id.to_string(), 6),
            column(&report.month, 8),
            column(&report.title, 32),
            column(&report.student_name, 20),
            format_relative_time(report.created_at, now)
        )
    })
}
