//! Domain models shared by every Classdeck client surface.
//!
//! Each collection item (course, assignment, report, resource, notification)
//! implements [`ListItem`] so the list engine in [`crate::collection`] can
//! filter, sort, select, and paginate any of them generically.

mod assignment;
mod course;
mod notification;
mod report;
mod resource;
mod user;

use std::fmt::Display;
use std::hash::Hash;

use chrono::{DateTime, Utc};

pub use assignment::{Assignment, AssignmentId, AssignmentStatus};
pub use course::{Course, CourseId, CourseStatus};
pub use notification::{Notification, NotificationId, NotificationKind};
pub use report::{Report, ReportId};
pub use resource::{Resource, ResourceId, ResourceKind};
pub use user::{Role, UserProfile};

/// A collection item the generic list engine can operate on.
///
/// `search_haystack` concatenates every free-text field that substring
/// search should cover. `status_key`/`category_key` expose the categorical
/// filter facets; items without a facet return `None` and pass every
/// categorical filter except an explicit `Facet::Only`.
pub trait ListItem: Clone {
    /// Unique identifier within one fetched page
    type Id: Clone + Eq + Hash + Ord + Display;

    fn id(&self) -> Self::Id;

    /// Lowercased text searched by the substring filter
    fn search_haystack(&self) -> String;

    /// Value matched by the status facet, when the item has one
    fn status_key(&self) -> Option<&str> {
        None
    }

    /// Value matched by the category facet, when the item has one
    fn category_key(&self) -> Option<&str> {
        None
    }

    /// Date field the list sorts and date-filters on
    fn timestamp(&self) -> DateTime<Utc>;
}
