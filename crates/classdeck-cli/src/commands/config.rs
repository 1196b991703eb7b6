//! Profile configuration commands.

use std::str::FromStr;

use classdeck_core::config::normalize_base_url;
use classdeck_core::models::Role;
use classdeck_core::util::normalize_text_option;

use crate::config_profiles::CliProfilesConfig;
use crate::error::CliError;

pub fn run_init(
    global_profile: Option<&str>,
    api_base_url: Option<String>,
    role: Option<String>,
    per_page: Option<u32>,
    activate: bool,
) -> Result<(), CliError> {
    let mut config = CliProfilesConfig::load()?;
    let profile_name = config.resolve_profile_name(global_profile);

    let explicit_api_base_url = normalize_text_option(api_base_url)
        .map(|url| normalize_base_url(&url))
        .transpose()?;
    let explicit_role = normalize_text_option(role)
        .map(|value| Role::from_str(&value).map_err(CliError::Config))
        .transpose()?;

    if let Some(per_page) = per_page {
        if per_page == 0 {
            return Err(CliError::Config(
                "per_page must be at least 1".to_string(),
            ));
        }
    }

    let profile = config.profile_mut_or_default(&profile_name);
    if let Some(url) = explicit_api_base_url {
        profile.api_base_url = Some(url);
    }
    if let Some(role) = explicit_role {
        profile.role = Some(role);
    }
    if let Some(per_page) = per_page {
        profile.per_page = Some(per_page);
    }

    if activate {
        config.active_profile = Some(profile_name.clone());
    }

    let path = config.save()?;
    println!(
        "Profile '{}' saved at {}",
        profile_name,
        path.display()
    );

    let profile = config
        .profile(&profile_name)
        .ok_or_else(|| CliError::Config("Failed to persist profile".to_string()))?;
    let mut missing_fields = Vec::new();
    if profile.api_base_url.is_none() {
        missing_fields.push("api_base_url");
    }
    if profile.role.is_none() {
        missing_fields.push("role");
    }
    if missing_fields.is_empty() {
        println!(
            "Profile '{profile_name}' is ready. Run `classdeck login <email>` to sign in."
        );
    } else {
        println!(
            "Profile '{}' is missing: {}",
            profile_name,
            missing_fields.join(", ")
        );
    }

    Ok(())
}

pub fn run_show(global_profile: Option<&str>) -> Result<(), CliError> {
    let config = CliProfilesConfig::load()?;
    let profile_name = config.resolve_profile_name(global_profile);

    let Some(profile) = config.profile(&profile_name) else {
        println!("Profile '{profile_name}' is not configured.");
        return Ok(());
    };

    println!("profile:       {profile_name}");
    println!(
        "api_base_url:  {}",
        profile.api_base_url.as_deref().unwrap_or("(not set)")
    );
    println!(
        "role:          {}",
        profile.role.map_or("(not set)", Role::as_str)
    );
    match profile.per_page {
        Some(per_page) => println!("per_page:      {per_page}"),
        None => println!("per_page:      (default)"),
    }
    Ok(())
}
