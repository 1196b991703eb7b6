//! Session commands: login, logout, whoami.

use std::env;

use classdeck_core::auth::{AuthApi, AuthHandle};

use crate::error::CliError;

pub async fn run_login(
    auth_api: &AuthApi,
    profile_name: &str,
    email: &str,
    password: Option<String>,
) -> Result<(), CliError> {
    let password = password
        .or_else(|| env::var("CLASSDECK_PASSWORD").ok())
        .filter(|value| !value.trim().is_empty())
        .ok_or(CliError::MissingPassword)?;

    let session = auth_api.sign_in(email, &password).await?;
    println!(
        "Signed in profile '{profile_name}' as {} ({})",
        session.profile.name,
        session.profile.role.as_str()
    );
    Ok(())
}

pub async fn run_logout(auth_api: &AuthApi, profile_name: &str) -> Result<(), CliError> {
    auth_api.sign_out().await?;
    println!("Signed out profile '{profile_name}'");
    Ok(())
}

pub fn run_whoami(auth: &AuthHandle, profile_name: &str, as_json: bool) -> Result<(), CliError> {
    match auth.session() {
        Some(session) => {
            if as_json {
                println!("{}", serde_json::to_string_pretty(&session.profile)?);
            } else {
                println!(
                    "{} <{}> ({})",
                    session.profile.name,
                    session.profile.email,
                    session.profile.role.as_str()
                );
            }
        }
        None => println!("Profile '{profile_name}' is not signed in."),
    }
    Ok(())
}
