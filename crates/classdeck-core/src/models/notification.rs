//! Notification model

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ListItem;

/// Server-assigned notification identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(pub i64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    System,
    Assignment,
    Payment,
    Message,
}

impl NotificationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Assignment => "assignment",
            Self::Payment => "payment",
            Self::Message => "message",
        }
    }
}

/// An inbox notification supporting mark-read and delete bulk actions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub kind: NotificationKind,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl ListItem for Notification {
    type Id = NotificationId;

    fn id(&self) -> NotificationId {
        self.id
    }

    fn search_haystack(&self) -> String {
        format!("{} {}", self.title, self.body)
    }

    fn status_key(&self) -> Option<&str> {
        Some(if self.is_read { "read" } else { "unread" })
    }

    fn category_key(&self) -> Option<&str> {
        Some(self.kind.as_str())
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
    fn read_state_is_the_status_facet() {
        let mut notification = Notification {
            id: NotificationId(3),
            title: "Fee due".to_string(),
            body: String::new(),
            kind: NotificationKind::Payment,
            is_read: false,
            created_at: Utc.with_ymd_and_hms(2026, 1, 5, 8, 0, 0).unwrap(),
        };
        assert_eq!(notification.status_key(), Some("unread"));
        notification.is_read = true;
        assert_eq!(notification.status_key(), Some("read"));
    }
}
