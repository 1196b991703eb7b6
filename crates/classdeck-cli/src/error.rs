use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] classdeck_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Password is required. Pass --password or set CLASSDECK_PASSWORD.")]
    MissingPassword,
    #[error("No ids given. Pass one or more ids, or --all for the visible set.")]
    EmptyIdSet,
    #[error("Ids not on the fetched page: {0}. Use --page to fetch the page they are on.")]
    UnknownIds(String),
    #[error("No enrollment draft found. Start one with `classdeck enroll`.")]
    NoDraft,
    #[error(
        "No profile is configured. Run `classdeck config init --api-base-url <URL> --role <ROLE>` first."
    )]
    ProfileNotConfigured,
}
