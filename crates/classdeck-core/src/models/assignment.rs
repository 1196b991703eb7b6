//! Assignment model

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ListItem;

/// Server-assigned assignment identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignmentId(pub i64);

impl fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle of an assignment as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Pending,
    Submitted,
    Graded,
    Overdue,
}

impl AssignmentStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Submitted => "submitted",
            Self::Graded => "graded",
            Self::Overdue => "overdue",
        }
    }
}

/// An assignment visible to a tutor or student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: AssignmentId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Short course code the assignment belongs to (e.g. `PHY-101`)
    pub course_code: String,
    /// Assigned student, absent on admin-wide views
    #[serde(default)]
    pub student_name: Option<String>,
    pub status: AssignmentStatus,
    pub due_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    /// Grade out of 100, present once marked
    #[serde(default)]
    pub grade: Option<f64>,
    /// Opaque URL of the submitted work, passed through unchanged
    #[serde(default)]
    pub submission_url: Option<String>,
}

impl ListItem for Assignment {
    type Id = AssignmentId;

    fn id(&self) -> AssignmentId {
        self.id
    }

    fn search_haystack(&self) -> String {
        let student = self.student_name.as_deref().unwrap_or("");
        format!(
            "{} {} {} {student}",
            self.title, self.description, self.course_code
        )
    }

    fn status_key(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn category_key(&self) -> Option<&str> {
        Some(&self.course_code)
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.due_at
    }
}
