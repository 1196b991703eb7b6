//! Clamped pagination controller.

use crate::envelope::PageMeta;

/// Current/last page pair driving re-fetches on page change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current_page: u32,
    last_page: u32,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            current_page: 1,
            last_page: 1,
        }
    }
}

impl Pager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    #[must_use]
    pub const fn last_page(&self) -> u32 {
        self.last_page
    }

    /// Adopt the server-asserted pagination envelope after a fetch
    pub fn adopt(&mut self, meta: &PageMeta) {
        self.last_page = meta.last_page.max(1);
        self.current_page = meta.current_page.clamp(1, self.last_page);
    }

    /// Request page `n`, clamped to `[1, last_page]`.
    ///
    /// Returns `true` when the page actually changed and a fetch is
    /// warranted; a request clamped back onto the current page must not
    /// issue a fetch.
    pub fn set_page(&mut self, n: u32) -> bool {
        let clamped = n.clamp(1, self.last_page);
        if clamped == self.current_page {
            return false;
        }
        self.current_page = clamped;
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn meta(current: u32, last: u32) -> PageMeta {
        PageMeta {
            current_page: current,
            per_page: 15,
            total: u64::from(last) * 15,
            last_page: last,
        }
    }

    #[test]
    fn set_page_clamps_and_reports_whether_to_fetch() {
        let mut pager = Pager::new();
        pager.adopt(&meta(1, 4));

        assert!(pager.set_page(3));
        assert_eq!(pager.current_page(), 3);

        // Out-of-range values clamp; clamping onto the current page is a no-op.
        assert!(pager.set_page(99));
        assert_eq!(pager.current_page(), 4);
        assert!(!pager.set_page(99));

        assert!(pager.set_page(0));
        assert_eq!(pager.current_page(), 1);
        assert!(!pager.set_page(0));
    }

    #[test]
    fn adopt_keeps_invariants_on_odd_server_values() {
        let mut pager = Pager::new();
        pager.adopt(&PageMeta {
            current_page: 9,
            per_page: 15,
            total: 0,
            last_page: 0,
        });
        assert_eq!(pager.last_page(), 1);
        assert_eq!(pager.current_page(), 1);
    }
}
