use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;

use classdeck_core::collection::{DateFilter, Facet, ListController, PageSource, SortOrder};
use classdeck_core::envelope::{Page, PageMeta};
use classdeck_core::form::{DraftStore, EnrollmentDraft, EnrollmentForm};
use classdeck_core::models::{Notification, NotificationId, NotificationKind, Role};

use crate::cli::{CompletionShell, DateChoice, EnrollArgs, ListArgs, SortChoice};
use crate::commands::common::{build_criteria, column, format_relative_time};
use crate::commands::completions::run_completions;
use crate::commands::enroll::{merge_args, FileDraftStore};
use crate::commands::notifications::select_targets;
use crate::config_profiles::{normalize_profile_name, CliProfile, CliProfilesConfig};
use crate::error::CliError;

fn temp_path(label: &str) -> PathBuf {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_nanos())
        .unwrap_or_default();
    let unique = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("classdeck-test-{label}-{nanos}-{unique}"))
}

#[test]
fn build_criteria_maps_flags_onto_the_filter_pipeline() {
    let args = ListArgs {
        search: Some("algebra".to_string()),
        status: Some("  Pending ".to_string()),
        category: None,
        date: DateChoice::Week,
        sort: SortChoice::Oldest,
        page: 1,
        json: false,
    };

    let criteria = build_criteria(&args);
    assert_eq!(criteria.search, "algebra");
    assert_eq!(criteria.status, Facet::Only("pending".to_string()));
    assert_eq!(criteria.category, Facet::All);
    assert_eq!(criteria.date, DateFilter::ThisWeek);
    assert_eq!(criteria.sort, SortOrder::Oldest);
}

#[test]
fn build_criteria_defaults_to_the_identity_view() {
    let criteria = build_criteria(&ListArgs::default());
    assert_eq!(criteria.search, "");
    assert_eq!(criteria.status, Facet::All);
    assert_eq!(criteria.category, Facet::All);
    assert_eq!(criteria.date, DateFilter::All);
    assert_eq!(criteria.sort, SortOrder::Newest);
}

#[test]
fn format_relative_time_picks_sensible_units() {
    let now = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
    let minutes_ago = Utc.with_ymd_and_hms(2026, 3, 10, 11, 15, 0).unwrap();
    let hours_ago = Utc.with_ymd_and_hms(2026, 3, 10, 7, 0, 0).unwrap();
    let days_ago = Utc.with_ymd_and_hms(2026, 3, 4, 12, 0, 0).unwrap();
    let long_ago = Utc.with_ymd_and_hms(2025, 11, 1, 12, 0, 0).unwrap();

    assert_eq!(format_relative_time(now, now), "just now");
    assert_eq!(format_relative_time(minutes_ago, now), "45m ago");
    assert_eq!(format_relative_time(hours_ago, now), "5h ago");
    assert_eq!(format_relative_time(days_ago, now), "6d ago");
    assert_eq!(format_relative_time(long_ago, now), "2025-11-01");
}

#[test]
fn column_pads_and_truncates_to_width() {
    assert_eq!(column("abc", 5), "abc  ");
    assert_eq!(column("abcdefgh", 5), "abcde");
    assert_eq!(column("", 3), "   ");
}

#[test]
fn profile_names_are_trimmed_and_empty_rejected() {
    assert_eq!(normalize_profile_name(Some("  work ")), Some("work".to_string()));
    assert_eq!(normalize_profile_name(Some("   ")), None);
    assert_eq!(normalize_profile_name(None), None);
}

#[test]
fn explicit_profile_name_wins_over_active() {
    let config = CliProfilesConfig {
        active_profile: Some("home".to_string()),
        ..CliProfilesConfig::default()
    };
    assert_eq!(config.resolve_profile_name(Some("work")), "work");
}

#[test]
fn profiles_config_round_trips_through_disk() {
    let path = temp_path("profiles").join("cli-config.json");

    let mut config = CliProfilesConfig::default();
    config.active_profile = Some("work".to_string());
    let profile = config.profile_mut_or_default("work");
    profile.api_base_url = Some("https://api.classdeck.io/v1".to_string());
    profile.role = Some(Role::Tutor);
    profile.per_page = Some(25);

    config.save_to_path(&path).unwrap();
    let loaded = CliProfilesConfig::load_from_path(&path).unwrap();
    assert_eq!(loaded, config);

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn loading_a_missing_config_yields_the_default() {
    let path = temp_path("missing-config");
    let loaded = CliProfilesConfig::load_from_path(&path).unwrap();
    assert_eq!(loaded, CliProfilesConfig::default());
}

#[test]
fn incomplete_profile_cannot_build_a_client_config() {
    let incomplete = CliProfile {
        api_base_url: Some("https://api.classdeck.io".to_string()),
        role: None,
        per_page: None,
    };
    assert!(matches!(
        incomplete.to_client_config(),
        Err(CliError::ProfileNotConfigured)
    ));

    let complete = CliProfile {
        api_base_url: Some("https://api.classdeck.io/".to_string()),
        role: Some(Role::Student),
        per_page: Some(50),
    };
    let config = complete.to_client_config().unwrap();
    assert_eq!(config.api_base_url, "https://api.classdeck.io");
    assert_eq!(config.per_page, 50);
}

#[test]
fn merge_args_overlays_only_provided_flags() {
    let mut form = EnrollmentForm {
        full_name: "Amina Yusuf".to_string(),
        course_code: "MATH-101".to_string(),
        ..EnrollmentForm::default()
    };
    let args = EnrollArgs {
        email: Some("  amina@example.com ".to_string()),
        date_of_birth: Some("2010-06-01".to_string()),
        ..EnrollArgs::default()
    };

    let provided = merge_args(&mut form, &args).unwrap();
    assert!(provided);
    assert_eq!(form.full_name, "Amina Yusuf");
    assert_eq!(form.email, "amina@example.com");
    assert_eq!(form.date_of_birth, NaiveDate::from_ymd_opt(2010, 6, 1));
    assert_eq!(form.course_code, "MATH-101");
}

#[test]
fn merge_args_reports_when_nothing_was_provided() {
    let mut form = EnrollmentForm::default();
    let provided = merge_args(&mut form, &EnrollArgs::default()).unwrap();
    assert!(!provided);
}

#[test]
fn merge_args_rejects_a_malformed_birth_date() {
    let mut form = EnrollmentForm::default();
    let args = EnrollArgs {
        date_of_birth: Some("01/06/2010".to_string()),
        ..EnrollArgs::default()
    };
    assert!(matches!(
        merge_args(&mut form, &args),
        Err(CliError::Config(_))
    ));
}

#[test]
fn draft_store_round_trips_and_clears() {
    let path = temp_path("draft").join("enroll-draft.json");
    let store = FileDraftStore::new(path.clone());

    assert_eq!(store.load().unwrap(), None);

    let form = EnrollmentForm {
        full_name: "Amina Yusuf".to_string(),
        course_code: "MATH-101".to_string(),
        ..EnrollmentForm::default()
    };
    let saved_at = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
    store.save(&EnrollmentDraft::new(form.clone(), saved_at)).unwrap();

    let restored = store.load().unwrap().unwrap();
    assert_eq!(restored.form, form);
    assert_eq!(restored.saved_at, saved_at);

    store.clear().unwrap();
    assert_eq!(store.load().unwrap(), None);
    // Clearing twice is fine.
    store.clear().unwrap();

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

struct StaticPage(Vec<Notification>);

impl PageSource<Notification> for StaticPage {
    async fn fetch_page(&self, page: u32) -> classdeck_core::Result<Page<Notification>> {
        Ok(Page {
            items: self.0.clone(),
            pagination: PageMeta {
                current_page: page,
                per_page: 15,
                total: self.0.len() as u64,
                last_page: 1,
            },
        })
    }
}

fn notification(id: i64, read: bool) -> Notification {
    Notification {
        id: NotificationId(id),
        title: format!("Notice {id}"),
        body: String::new(),
        kind: NotificationKind::System,
        is_read: read,
        created_at: Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap(),
    }
}

async fn loaded_controller(
    items: Vec<Notification>,
) -> ListController<Notification, StaticPage> {
    let mut controller = ListController::new(StaticPage(items));
    controller.refresh().await.unwrap();
    controller
}

#[tokio::test]
async fn explicit_ids_missing_from_the_page_are_an_error() {
    let mut controller = loaded_controller(vec![notification(5, false)]).await;

    match select_targets(&mut controller, &[5, 42], false) {
        Err(CliError::UnknownIds(ids)) => assert_eq!(ids, "42"),
        other => panic!("expected UnknownIds, got {other:?}"),
    }
}

#[tokio::test]
async fn explicit_ids_bypass_the_filter_view_and_keep_page_order() {
    let mut controller = loaded_controller(vec![
        notification(5, true),
        notification(7, false),
        notification(9, true),
    ])
    .await;
    // Id 5 is read and thus filtered out of the visible set, but the user
    // named it directly.
    controller.set_status(Facet::Only("unread".to_string()));

    let targets = select_targets(&mut controller, &[9, 5], false).unwrap();
    assert_eq!(targets, vec![NotificationId(5), NotificationId(9)]);
}

#[tokio::test]
async fn an_empty_target_set_is_an_error() {
    let mut controller = loaded_controller(vec![notification(5, true)]).await;
    assert!(matches!(
        select_targets(&mut controller, &[], false),
        Err(CliError::EmptyIdSet)
    ));

    // --all over a filtered-to-empty view selects nothing.
    controller.set_status(Facet::Only("unread".to_string()));
    assert!(matches!(
        select_targets(&mut controller, &[], true),
        Err(CliError::EmptyIdSet)
    ));
}

#[test]
fn completions_write_to_the_requested_path() {
    let path = temp_path("completions.bash");
    run_completions(CompletionShell::Bash, Some(&path)).unwrap();

    let script = std::fs::read_to_string(&path).unwrap();
    assert!(script.contains("classdeck"));

    let _ = std::fs::remove_file(&path);
}
