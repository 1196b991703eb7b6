//! List controller composing fetch, filter, selection, and paging.

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::envelope::Page;
use crate::error::Result;
use crate::models::ListItem;

use super::{apply_filters, DateFilter, Facet, FilterCriteria, Pager, Selection, SortOrder};

/// Fetch seam for one remote collection; implemented by API endpoints and
/// by in-memory fakes in tests.
pub trait PageSource<T> {
    fn fetch_page(&self, page: u32) -> impl Future<Output = Result<Page<T>>> + Send;
}

/// The three mutually exclusive render conditions of a list view.
///
/// An empty visible set under `Ready` is the explicit empty state,
/// distinct from both `Loading` and `Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// One dashboard list: fetched page, criteria, selection, pager, state.
///
/// All work happens inside the caller's future; nothing is spawned, so
/// dropping a controller (or an in-flight `refresh`) cancels its request
/// and no state can be touched after the owner is gone.
pub struct ListController<T: ListItem, S: PageSource<T>> {
    source: S,
    all_items: Vec<T>,
    criteria: FilterCriteria,
    /// Snapshot the date filters evaluate against, renewed on every
    /// criteria change and successful fetch
    reference_time: DateTime<Utc>,
    selection: Selection<T::Id>,
    pager: Pager,
    state: LoadState,
}

impl<T: ListItem, S: PageSource<T>> ListController<T, S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            all_items: Vec::new(),
            criteria: FilterCriteria::default(),
            reference_time: Utc::now(),
            selection: Selection::new(),
            pager: Pager::new(),
            state: LoadState::Loading,
        }
    }

    /// Re-fetch the current page.
    ///
    /// The previous items are replaced only after new data arrives; on
    /// failure the old collection is kept and the state records the
    /// user-facing message. Selection is pruned against the fresh page so
    /// deleted items never stay selected.
    pub async fn refresh(&mut self) -> Result<()> {
        self.state = LoadState::Loading;
        match self.source.fetch_page(self.pager.current_page()).await {
            Ok(page) => {
                self.pager.adopt(&page.pagination);
                self.all_items = page.items;
                let ids: Vec<T::Id> = self.all_items.iter().map(ListItem::id).collect();
                self.selection.prune(&ids);
                self.reference_time = Utc::now();
                self.state = LoadState::Ready;
                Ok(())
            }
            Err(error) => {
                self.state = LoadState::Failed(error.user_message());
                Err(error)
            }
        }
    }

    #[must_use]
    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    #[must_use]
    pub fn all_items(&self) -> &[T] {
        &self.all_items
    }

    /// The post-filter, post-sort subset actually rendered
    #[must_use]
    pub fn visible(&self) -> Vec<T> {
        apply_filters(&self.all_items, &self.criteria, self.reference_time)
    }

    #[must_use]
    pub fn visible_ids(&self) -> Vec<T::Id> {
        self.visible().iter().map(ListItem::id).collect()
    }

    /// `Ready` with nothing to show; the explicit empty state
    #[must_use]
    pub fn is_empty_view(&self) -> bool {
        self.state == LoadState::Ready && self.visible().is_empty()
    }

    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
        self.touch_reference();
    }

    pub fn set_status(&mut self, status: Facet) {
        self.criteria.status = status;
        self.touch_reference();
    }

    pub fn set_category(&mut self, category: Facet) {
        self.criteria.category = category;
        self.touch_reference();
    }

    pub fn set_date(&mut self, date: DateFilter) {
        self.criteria.date = date;
        self.touch_reference();
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.criteria.sort = sort;
        self.touch_reference();
    }

    fn touch_reference(&mut self) {
        self.reference_time = Utc::now();
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection<T::Id> {
        &self.selection
    }

    pub fn toggle(&mut self, id: T::Id) {
        self.selection.toggle(id);
    }

    /// Select-all scoped to the current filter view
    pub fn toggle_all(&mut self) {
        let visible = self.visible_ids();
        self.selection.toggle_all(&visible);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Selected ids in visible list order, the order bulk actions run in
    #[must_use]
    pub fn selected_in_order(&self) -> Vec<T::Id> {
        self.selection.in_order(&self.visible_ids())
    }

    #[must_use]
    pub const fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Change page (clamped) and re-fetch only when the page moved.
    ///
    /// Returns whether a fetch was issued.
    pub async fn set_page(&mut self, n: u32) -> Result<bool> {
        if self.pager.set_page(n) {
            self.refresh().await?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
