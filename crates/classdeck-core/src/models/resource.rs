//! Learning resource model

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ListItem;

/// Server-assigned resource identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub i64);

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// File kind of a distributed resource; the file itself is an opaque URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Pdf,
    Image,
    Doc,
    Video,
    Link,
}

impl ResourceKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Image => "image",
            Self::Doc => "doc",
            Self::Video => "video",
            Self::Link => "link",
        }
    }
}

/// A study material shared with a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub course_code: String,
    pub kind: ResourceKind,
    /// Download/view URL, emitted unchanged
    pub url: String,
    pub uploaded_at: DateTime<Utc>,
}

impl ListItem for Resource {
    type Id = ResourceId;

    fn id(&self) -> ResourceId {
        self.id
    }

    fn search_haystack(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.course_code)
    }

    fn category_key(&self) -> Option<&str> {
        Some(self.kind.as_str())
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.uploaded_at
    }
}
