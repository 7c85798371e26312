//! Page arithmetic.
//!
//! Pages are 1-based and hold [`PAGE_SIZE`] rows. Navigation mirrors the
//! First/Previous/Next/Last controls: a move whose control would be disabled
//! resolves to `None`.

use std::ops::Range;

/// Rows per page.
pub const PAGE_SIZE: usize = 10;

/// Navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    /// Page 1.
    First,
    /// One page back.
    Previous,
    /// One page forward.
    Next,
    /// Last page.
    Last,
    /// Jump to a specific 1-based page.
    To(usize),
}

/// Current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self { page: 1 }
    }
}

/// Number of pages for `len` rows: `ceil(len / PAGE_SIZE)`, 0 when empty.
pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

impl PageState {
    /// 1-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Index range of the page's rows within a list of `len` rows.
    ///
    /// Empty when the page lies past the end.
    pub fn slice_range(&self, len: usize) -> Range<usize> {
        let start = (self.page - 1) * PAGE_SIZE;
        if start >= len {
            return len..len;
        }
        start..(start + PAGE_SIZE).min(len)
    }

    /// First/Previous are enabled.
    pub fn can_go_back(&self) -> bool {
        self.page > 1
    }

    /// Next/Last are enabled for `len` rows.
    pub fn can_go_forward(&self, len: usize) -> bool {
        self.page < total_pages(len)
    }

    /// Resolve a navigation against `len` rows.
    ///
    /// Returns `None` when the corresponding control is disabled or the target
    /// is out of range.
    pub fn resolve(&self, nav: PageNav, len: usize) -> Option<usize> {
        let total = total_pages(len);
        match nav {
            PageNav::First if self.can_go_back() => Some(1),
            PageNav::Previous if self.can_go_back() => Some(self.page - 1),
            PageNav::Next if self.can_go_forward(len) => Some(self.page + 1),
            PageNav::Last if self.can_go_forward(len) => Some(total),
            PageNav::To(n) if n >= 1 && n <= total.max(1) => Some(n),
            _ => None,
        }
    }

    /// Set the page. Returns `true` if it changed.
    pub fn set(&mut self, page: usize) -> bool {
        let page = page.max(1);
        let changed = page != self.page;
        self.page = page;
        changed
    }

    /// Pull the page back into `[1, max(1, total_pages(len))]`.
    pub fn clamp(&mut self, len: usize) {
        self.page = self.page.clamp(1, total_pages(len).max(1));
    }
}
