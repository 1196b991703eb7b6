//! Generic filterable remote collection engine.
//!
//! Every dashboard list (courses, assignments, reports, resources,
//! notifications) is one instantiation of this engine: a fetched page of
//! items, filter criteria, a pure filter/sort pipeline producing the
//! visible subset, a selection set for bulk actions, and a clamped pager.

mod controller;
mod pager;
mod selection;

use chrono::{DateTime, Datelike, Utc};

use crate::models::ListItem;

pub use controller::{ListController, LoadState, PageSource};
pub use pager::Pager;
pub use selection::Selection;

/// Categorical filter facet; `All` is the identity filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Facet {
    #[default]
    All,
    Only(String),
}

impl Facet {
    /// `All` passes everything. `Only` requires an exact key match, so an
    /// item without that facet never matches a concrete filter.
    #[must_use]
    pub fn matches(&self, key: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => key == Some(wanted.as_str()),
        }
    }
}

/// Date-range filter, evaluated against an explicit reference time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilter {
    #[default]
    All,
    Today,
    ThisWeek,
    ThisMonth,
    Custom {
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    },
}

impl DateFilter {
    /// Membership test against `reference` (snapshotted by the caller, so a
    /// list left open across midnight does not silently reclassify items).
    #[must_use]
    pub fn contains(&self, timestamp: DateTime<Utc>, reference: DateTime<Utc>) -> bool {
        match self {
            Self::All => true,
            Self::Today => timestamp.date_naive() == reference.date_naive(),
            Self::ThisWeek => {
                let a = timestamp.iso_week();
                let b = reference.iso_week();
                a.year() == b.year() && a.week() == b.week()
            }
            Self::ThisMonth => {
                timestamp.year() == reference.year() && timestamp.month() == reference.month()
            }
            Self::Custom { from, to } => *from <= timestamp && timestamp <= *to,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

/// Full criteria set for one list view.
///
/// Defaults are the identity criteria: with them, the visible set equals
/// the fetched set in fetch order (after the stable sort).
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub search: String,
    pub status: Facet,
    pub category: Facet,
    pub date: DateFilter,
    pub sort: SortOrder,
}

/// Apply the pipeline in its fixed order: substring search, categorical
/// facets, date-range membership, then a stable sort on the item timestamp.
#[must_use]
pub fn apply_filters<T: ListItem>(
    items: &[T],
    criteria: &FilterCriteria,
    reference: DateTime<Utc>,
) -> Vec<T> {
    let needle = criteria.search.trim().to_lowercase();

    let mut visible: Vec<T> = items
        .iter()
        .filter(|item| {
            needle.is_empty() || item.search_haystack().to_lowercase().contains(&needle)
        })
        .filter(|item| criteria.status.matches(item.status_key()))
        .filter(|item| criteria.category.matches(item.category_key()))
        .filter(|item| criteria.date.contains(item.timestamp(), reference))
        .cloned()
        .collect();

    // Vec::sort_by is stable, so equal timestamps keep fetch order.
    match criteria.sort {
        SortOrder::Newest => visible.sort_by(|a, b| b.timestamp().cmp(&a.timestamp())),
        SortOrder::Oldest => visible.sort_by(|a, b| a.timestamp().cmp(&b.timestamp())),
    }
    visible
}
