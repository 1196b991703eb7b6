//! Transient user notices.
//!
//! Successes auto-dismiss after a fixed delay; errors persist until the
//! user dismisses them. Severity carries no extra semantics beyond the
//! kind, matching the dashboard's toast behavior.

use chrono::{DateTime, Duration, Utc};

/// How long a success notice stays visible
const SUCCESS_TTL_SECONDS: i64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub posted_at: DateTime<Utc>,
    /// `None` means the notice persists until dismissed
    pub expires_at: Option<DateTime<Utc>>,
}

impl Notice {
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|deadline| now >= deadline)
    }
}

/// Ordered queue of active notices
#[derive(Debug, Clone, Default)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
}

impl NoticeBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post_success(&mut self, message: impl Into<String>, now: DateTime<Utc>) {
        self.notices.push(Notice {
            kind: NoticeKind::Success,
            message: message.into(),
            posted_at: now,
            expires_at: Some(now + Duration::seconds(SUCCESS_TTL_SECONDS)),
        });
    }

    pub fn post_error(&mut self, message: impl Into<String>, now: DateTime<Utc>) {
        self.notices.push(Notice {
            kind: NoticeKind::Error,
            message: message.into(),
            posted_at: now,
            expires_at: None,
        });
    }

    /// Drop expired notices
    pub fn sweep(&mut self, now: DateTime<Utc>) {
        self.notices.retain(|notice| !notice.is_expired(now));
    }

    /// Notices still visible at `now`, oldest first
    #[must_use]
    pub fn active(&self, now: DateTime<Utc>) -> Vec<&Notice> {
        self.notices
            .iter()
            .filter(|notice| !notice.is_expired(now))
            .collect()
    }

    /// Dismiss the notice at `index` as rendered by `active` at `now`.
    ///
    /// Expired notices are swept first so the index always addresses what
    /// the user is looking at, never an expired leftover.
    pub fn dismiss(&mut self, index: usize, now: DateTime<Utc>) {
        self.sweep(now);
        if index < self.notices.len() {
            self.notices.remove(index);
        }
    }

    pub fn dismiss_all(&mut self) {
        self.notices.clear();
    }
}
