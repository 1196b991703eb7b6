//! Progress report model

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ListItem;

/// Server-assigned report identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(pub i64);

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A monthly progress report for one student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: ReportId,
    pub title: String,
    pub student_name: String,
    /// Reporting month in `YYYY-MM` form, used as the category facet
    pub month: String,
    #[serde(default)]
    pub summary: String,
    pub created_at: DateTime<Utc>,
}

impl ListItem for Report {
    type Id = ReportId;

    fn id(&self) -> ReportId {
        self.id
    }

    fn search_haystack(&self) -> String {
        format!("{} {} {}", self.title, self.student_name, self.summary)
    }

    fn category_key(&self) -> Option<&str> {
        Some(&self.month)
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn reports_have_no_status_facet() {
        let report = Report {
            id: ReportId(1),
            title: "Physics Report".to_string(),
            student_name: "Amina Yusuf".to_string(),
            month: "2026-02".to_string(),
            summary: String::new(),
            created_at: Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap(),
        };
        assert_eq!(report.status_key(), None);
        assert_eq!(report.category_key(), Some("2026-02"));
    }
}
