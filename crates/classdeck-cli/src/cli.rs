use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "classdeck")]
#[command(about = "Work with your Classdeck dashboard from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// CLI profile name for endpoint/auth configuration
    #[arg(long, global = true, value_name = "NAME")]
    pub profile: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and store the session
    Login {
        /// Account email
        email: String,
        /// Account password (falls back to CLASSDECK_PASSWORD)
        #[arg(long)]
        password: Option<String>,
    },
    /// Sign out and clear the stored session
    Logout,
    /// Show the signed-in user
    Whoami {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List courses
    Courses {
        #[command(flatten)]
        list: ListArgs,
    },
    /// Work with assignments
    Assignments {
        #[command(subcommand)]
        command: AssignmentCommands,
    },
    /// List progress reports
    Reports {
        #[command(flatten)]
        list: ListArgs,
    },
    /// List shared resources
    Resources {
        #[command(flatten)]
        list: ListArgs,
    },
    /// Work with notifications
    Notifications {
        #[command(subcommand)]
        command: NotificationCommands,
    },
    /// Fill in (and submit) the enrollment form; progress is kept as a draft
    Enroll(Box<EnrollArgs>),
    /// Configure CLI profiles
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum AssignmentCommands {
    /// List assignments
    List {
        #[command(flatten)]
        list: ListArgs,
    },
    /// Submit work for an assignment
    Submit {
        /// Assignment id
        id: i64,
        /// Link to the submitted work
        #[arg(long, value_name = "URL")]
        url: String,
        /// Optional comment for the tutor
        #[arg(long)]
        comment: Option<String>,
    },
    /// Grade a submission (tutor/admin)
    Grade {
        /// Assignment id
        id: i64,
        /// Grade out of 100
        #[arg(long)]
        grade: f64,
        /// Optional feedback text
        #[arg(long)]
        feedback: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum NotificationCommands {
    /// List notifications
    List {
        #[command(flatten)]
        list: ListArgs,
    },
    /// Mark notifications as read
    MarkRead {
        /// Notification ids
        ids: Vec<i64>,
        /// Apply to the whole visible (filtered) set instead of explicit ids
        #[arg(long)]
        all: bool,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Delete notifications
    Delete {
        /// Notification ids
        ids: Vec<i64>,
        /// Apply to the whole visible (filtered) set instead of explicit ids
        #[arg(long)]
        all: bool,
        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Initialize or update a profile
    Init {
        /// Backend API base URL
        #[arg(long, value_name = "URL")]
        api_base_url: Option<String>,
        /// Dashboard role (admin, tutor, student)
        #[arg(long, value_name = "ROLE")]
        role: Option<String>,
        /// Page size for list fetches
        #[arg(long, value_name = "N")]
        per_page: Option<u32>,
        /// Make this profile the active one
        #[arg(long)]
        activate: bool,
    },
    /// Show the resolved profile configuration
    Show,
}

/// Shared flags for every list command
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Case-insensitive substring search
    #[arg(long)]
    pub search: Option<String>,
    /// Status facet (e.g. pending, graded, unread); omit for all
    #[arg(long)]
    pub status: Option<String>,
    /// Category facet (course code, subject, kind, month); omit for all
    #[arg(long)]
    pub category: Option<String>,
    /// Date range filter
    #[arg(long, value_enum, default_value_t = DateChoice::All)]
    pub date: DateChoice,
    /// Sort order on the item date
    #[arg(long, value_enum, default_value_t = SortChoice::Newest)]
    pub sort: SortChoice,
    /// Page to fetch (clamped to the server's last page)
    #[arg(long, default_value = "1")]
    pub page: u32,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct EnrollArgs {
    #[arg(long)]
    pub full_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub password_confirmation: Option<String>,
    /// Date of birth as YYYY-MM-DD
    #[arg(long, value_name = "DATE")]
    pub date_of_birth: Option<String>,
    #[arg(long)]
    pub guardian_name: Option<String>,
    #[arg(long)]
    pub guardian_email: Option<String>,
    #[arg(long)]
    pub guardian_phone: Option<String>,
    #[arg(long)]
    pub course_code: Option<String>,
    /// Validate and submit the enrollment instead of saving a draft
    #[arg(long)]
    pub submit: bool,
    /// Discard the saved draft and start over
    #[arg(long)]
    pub discard_draft: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Default, ValueEnum)]
pub enum DateChoice {
    #[default]
    All,
    Today,
    Week,
    Month,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Default, ValueEnum)]
pub enum SortChoice {
    #[default]
    Newest,
    Oldest,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
