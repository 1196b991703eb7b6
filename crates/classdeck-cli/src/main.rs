//! Classdeck CLI - the e-learning dashboard from the command line
//!
//! Lists, filters, and mutates the same role-scoped collections the web
//! dashboard shows, against the same backend API.

use std::sync::Arc;

use clap::Parser;

use classdeck_core::auth::{AuthApi, AuthHandle};
use classdeck_core::client::ApiClient;
use classdeck_core::config::ClientConfig;

use crate::auth::KeyringTokenStore;
use crate::cli::{AssignmentCommands, Cli, Commands, ConfigCommands, NotificationCommands};
use crate::commands::enroll::FileDraftStore;
use crate::config_profiles::CliProfilesConfig;
use crate::error::CliError;

mod auth;
mod cli;
mod commands;
mod config_profiles;
mod error;
#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

/// Everything a signed-in command needs: resolved profile plus clients
struct Context {
    profile_name: String,
    config: ClientConfig,
    auth: AuthHandle,
}

impl Context {
    fn resolve(global_profile: Option<&str>) -> Result<Self, CliError> {
        let profiles = CliProfilesConfig::load()?;
        let profile_name = profiles.resolve_profile_name(global_profile);
        let profile = profiles
            .profile(&profile_name)
            .ok_or(CliError::ProfileNotConfigured)?;
        let config = profile.to_client_config()?;
        let auth = AuthHandle::new(KeyringTokenStore::new(&profile_name))?;
        Ok(Self {
            profile_name,
            config,
            auth,
        })
    }

    fn api_client(&self) -> Result<Arc<ApiClient>, CliError> {
        Ok(Arc::new(ApiClient::new(
            self.config.api_base_url.clone(),
            self.config.role,
            self.auth.clone(),
        )?))
    }

    fn auth_api(&self) -> Result<AuthApi, CliError> {
        Ok(AuthApi::new(
            self.config.api_base_url.clone(),
            self.auth.clone(),
        )?)
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("classdeck=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let global_profile = cli.profile.as_deref();

    match cli.command {
        Commands::Login { email, password } => {
            let context = Context::resolve(global_profile)?;
            commands::auth_cmd::run_login(
                &context.auth_api()?,
                &context.profile_name,
                &email,
                password,
            )
            .await?;
        }
        Commands::Logout => {
            let context = Context::resolve(global_profile)?;
            commands::auth_cmd::run_logout(&context.auth_api()?, &context.profile_name).await?;
        }
        Commands::Whoami { json } => {
            let context = Context::resolve(global_profile)?;
            commands::auth_cmd::run_whoami(&context.auth, &context.profile_name, json)?;
        }
        Commands::Courses { list } => {
            let context = Context::resolve(global_profile)?;
            commands::courses::run_list(context.api_client()?, context.config.per_page, &list)
                .await?;
        }
        Commands::Assignments { command } => {
            let context = Context::resolve(global_profile)?;
            let client = context.api_client()?;
            match command {
                AssignmentCommands::List { list } => {
                    commands::assignments::run_list(client, context.config.per_page, &list)
                        .await?;
                }
                AssignmentCommands::Submit { id, url, comment } => {
                    commands::assignments::run_submit(client, id, &url, comment).await?;
                }
                AssignmentCommands::Grade {
                    id,
                    grade,
                    feedback,
                } => {
                    commands::assignments::run_grade(client, id, grade, feedback).await?;
                }
            }
        }
        Commands::Reports { list } => {
            let context = Context::resolve(global_profile)?;
            commands::reports::run_list(context.api_client()?, context.config.per_page, &list)
                .await?;
        }
        Commands::Resources { list } => {
            let context = Context::resolve(global_profile)?;
            commands::resources::run_list(context.api_client()?, context.config.per_page, &list)
                .await?;
        }
        Commands::Notifications { command } => {
            let context = Context::resolve(global_profile)?;
            let client = context.api_client()?;
            let per_page = context.config.per_page;
            match command {
                NotificationCommands::List { list } => {
                    commands::notifications::run_list(client, per_page, &list).await?;
                }
                NotificationCommands::MarkRead { ids, all, list } => {
                    commands::notifications::run_mark_read(client, per_page, &ids, all, &list)
                        .await?;
                }
                NotificationCommands::Delete { ids, all, list } => {
                    commands::notifications::run_delete(client, per_page, &ids, all, &list)
                        .await?;
                }
            }
        }
        Commands::Enroll(args) => {
            let context = Context::resolve(global_profile)?;
            let store = FileDraftStore::new(FileDraftStore::default_path());
            commands::enroll::run_enroll(context.api_client()?, &store, &args).await?;
        }
        Commands::Config { command } => match command {
            ConfigCommands::Init {
                api_base_url,
                role,
                per_page,
                activate,
            } => {
                commands::config::run_init(global_profile, api_base_url, role, per_page, activate)?;
            }
            ConfigCommands::Show => commands::config::run_show(global_profile)?,
        },
        Commands::Completions { shell, output } => {
            commands::completions::run_completions(shell, output.as_deref())?;
        }
    }

    Ok(())
}
