//! Course model

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ListItem;

/// Server-assigned course identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub i64);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    Active,
    Completed,
    Archived,
}

impl CourseStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Archived => "archived",
        }
    }
}

/// A course/class as shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    /// Short code used for cross-references (e.g. `PHY-101`)
    pub code: String,
    #[serde(default)]
    pub description: String,
    /// Subject grouping used as the category facet
    pub subject: String,
    #[serde(default)]
    pub tutor_name: Option<String>,
    pub status: CourseStatus,
    pub created_at: DateTime<Utc>,
}

impl ListItem for Course {
    type Id = CourseId;

    fn id(&self) -> CourseId {
        self.id
    }

    fn search_haystack(&self) -> String {
        let tutor = self.tutor_name.as_deref().unwrap_or("");
        format!("{} {} {} {tutor}", self.title, self.code, self.description)
    }

    fn status_key(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn category_key(&self) -> Option<&str> {
        Some(&self.subject)
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }
}
