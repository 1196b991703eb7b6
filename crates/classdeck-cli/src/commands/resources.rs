use std::sync::Arc;

use classdeck_core::client::ApiClient;
use classdeck_core::models::Resource;

use crate::cli::ListArgs;
use crate::commands::common::{column, format_relative_time, load_list, render_list};
use crate::error::CliError;

pub async fn run_list(
    client: Arc<ApiClient>,
    per_page: u32,
    args: &ListArgs,
) -> Result<(), CliError> {
    let controller = load_list::<Resource>(client, "resources", per_page, args).await?;
    render_list(&controller, args.json, |resource, now| {
        format!(
            "{}  {}  {}  {}  {}",
            column(&resource.id.to_string(), 6),
            column(resource.kind.as_str(), 6),
            column(&resource.title, 32),
            column(&resource.course_code, 10),
            format_relative_time(resource.uploaded_at, now)
        )
    })
}
