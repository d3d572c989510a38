//! Paginator implementation

use super::types::{PageState, PageSummary, DEFAULT_ITEMS_PER_PAGE};
use crate::adapter::Adapter;
use crate::error::{Error, Result};
use once_cell::unsync::OnceCell;
use std::cell::Cell;
use std::fmt;
use std::num::NonZeroUsize;
use tracing::{debug, trace};

const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(DEFAULT_ITEMS_PER_PAGE) {
    Some(size) => size,
    None => panic!("default page size must be non-zero"),
};

/// Stateful page calculator over an adapter
///
/// Accessors take `&self`; the current page is resolved to page 1 on first
/// read and the page items are fetched on first access. Both are cached until
/// [`set_items_per_page`](Paginator::set_items_per_page) or
/// [`set_current_page`](Paginator::set_current_page) succeeds.
///
/// A paginator is a single-owner helper. It does no locking of its own.
///
/// ```
/// use pagekit::{ArrayAdapter, Paginator};
///
/// let adapter: ArrayAdapter<u32> = (1..=25).collect();
/// let mut paginator = Paginator::new(&adapter);
///
/// assert_eq!(paginator.count_pages(), 3);
/// assert_eq!(paginator.current_page(), Some(1));
///
/// paginator.set_current_page(3)?;
/// assert_eq!(paginator.first_item_on_page(), Some(21));
/// assert_eq!(paginator.last_item_on_page(), Some(25));
/// assert_eq!(paginator.items(), &[21, 22, 23, 24, 25]);
/// # Ok::<(), pagekit::Error>(())
/// ```
pub struct Paginator<A: Adapter> {
    adapter: A,
    items_per_page: NonZeroUsize,
    /// `None` until resolved, or while the source is empty
    current_page: Cell<Option<usize>>,
    /// Items of the current page, filled on first access
    items: OnceCell<Vec<A::Item>>,
}

impl<A: Adapter> Paginator<A> {
    /// Create a new paginator over the given adapter
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            items_per_page: DEFAULT_PAGE_SIZE,
            current_page: Cell::new(None),
            items: OnceCell::new(),
        }
    }

    /// Get the wrapped adapter
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Unwrap the paginator, returning the adapter
    pub fn into_adapter(self) -> A {
        self.adapter
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Set number of items per page
    ///
    /// Fails with an invalid-argument error when `items < 1`. On success the
    /// current page falls back to unresolved, so the next read lands on page 1.
    /// Sizes beyond `usize::MAX` are clamped to it.
    pub fn set_items_per_page(&mut self, items: i64) -> Result<&mut Self> {
        let items_per_page = (items >= 1)
            .then(|| usize::try_from(items).unwrap_or(usize::MAX))
            .and_then(NonZeroUsize::new)
            .ok_or_else(|| Error::invalid_items_per_page(items))?;

        debug!(items_per_page = items, "Setting items per page");
        self.items_per_page = items_per_page;
        self.current_page.set(None);
        self.invalidate();

        Ok(self)
    }

    /// Builder form of [`set_items_per_page`](Paginator::set_items_per_page)
    pub fn with_items_per_page(mut self, items: i64) -> Result<Self> {
        self.set_items_per_page(items)?;
        Ok(self)
    }

    /// Get number of items per page
    pub fn items_per_page(&self) -> usize {
        self.items_per_page.get()
    }

    /// Set current page number
    ///
    /// Fails with an invalid-argument error when the source is empty or when
    /// `page` is outside `1..=count_pages()`. Items per page is left alone.
    pub fn set_current_page(&mut self, page: i64) -> Result<&mut Self> {
        let pages = self.count_pages();
        if pages == 0 {
            return Err(Error::empty_paginator(page));
        }

        let current = usize::try_from(page)
            .ok()
            .filter(|p| (1..=pages).contains(p))
            .ok_or_else(|| Error::page_out_of_range(page, pages))?;

        debug!(page = current, pages, "Setting current page");
        self.current_page.set(Some(current));
        self.invalidate();

        Ok(self)
    }

    /// Builder form of [`set_current_page`](Paginator::set_current_page)
    pub fn with_current_page(mut self, page: i64) -> Result<Self> {
        self.set_current_page(page)?;
        Ok(self)
    }

    fn invalidate(&mut self) {
        if self.items.take().is_some() {
            trace!("Dropped cached page items");
        }
    }

    // ========================================================================
    // Counts
    // ========================================================================

    /// Get total number of items to paginate
    pub fn count(&self) -> usize {
        self.adapter.count()
    }

    /// Count total number of pages
    pub fn count_pages(&self) -> usize {
        self.count().div_ceil(self.items_per_page.get())
    }

    // ========================================================================
    // Page boundaries
    // ========================================================================

    /// Resolve the current page
    ///
    /// An unresolved page becomes page 1 as soon as the source holds any
    /// items. Every page and item accessor goes through here.
    pub fn resolve(&self) -> PageState {
        if let Some(page) = self.current_page.get() {
            return PageState::Page(page);
        }

        if self.count_pages() == 0 {
            return PageState::Empty;
        }

        trace!("Resolved current page to 1");
        self.current_page.set(Some(1));
        PageState::Page(1)
    }

    /// Get current page number, or `None` if the source is empty
    pub fn current_page(&self) -> Option<usize> {
        self.resolve().page()
    }

    /// Get first page number, or `None` if there are no pages
    pub fn first_page(&self) -> Option<usize> {
        self.current_page().map(|_| 1)
    }

    /// Get previous page number, or `None` if the current page is the first
    pub fn previous_page(&self) -> Option<usize> {
        self.current_page()
            .filter(|&current| current > 1)
            .map(|current| current - 1)
    }

    /// Get next page number, or `None` if the current page is the last
    pub fn next_page(&self) -> Option<usize> {
        let current = self.current_page()?;
        if Some(current) == self.last_page() {
            return None;
        }
        Some(current + 1)
    }

    /// Get last page number, or `None` if there are no pages
    pub fn last_page(&self) -> Option<usize> {
        match self.count_pages() {
            0 => None,
            pages => Some(pages),
        }
    }

    // ========================================================================
    // Item boundaries
    // ========================================================================

    /// Get the 1-based number of the first item on the current page
    pub fn first_item_on_page(&self) -> Option<usize> {
        // (current - 1) * per_page < count, so this never overflows
        let current = self.current_page()?;
        Some((current - 1) * self.items_per_page.get() + 1)
    }

    /// Get the 1-based number of the last item on the current page
    ///
    /// Clipped to [`count`](Paginator::count) on a partial last page.
    pub fn last_item_on_page(&self) -> Option<usize> {
        let first = self.first_item_on_page()?;
        let last = first.saturating_add(self.items_per_page.get() - 1);
        Some(last.min(self.count()))
    }

    // ========================================================================
    // Page items
    // ========================================================================

    /// Get the items on the current page
    ///
    /// Fetched from the adapter on first access and cached until the
    /// configuration changes. Empty when the source is empty.
    pub fn items(&self) -> &[A::Item] {
        if let Some(items) = self.items.get() {
            trace!(len = items.len(), "Reusing cached page items");
            return items;
        }

        self.items.get_or_init(|| {
            let Some(first) = self.first_item_on_page() else {
                return Vec::new();
            };
            let limit = self.items_per_page.get();
            let offset = first - 1;
            debug!(limit, offset, "Fetching page items");
            self.adapter.slice(limit, offset)
        })
    }

    /// Iterate over the items on the current page
    pub fn iter(&self) -> std::slice::Iter<'_, A::Item> {
        self.items().iter()
    }

    /// Snapshot every boundary value for the current page
    pub fn summary(&self) -> PageSummary {
        PageSummary {
            items_per_page: self.items_per_page(),
            total_items: self.count(),
            total_pages: self.count_pages(),
            current_page: self.current_page(),
            first_page: self.first_page(),
            previous_page: self.previous_page(),
            next_page: self.next_page(),
            last_page: self.last_page(),
            first_item: self.first_item_on_page(),
            last_item: self.last_item_on_page(),
        }
    }
}

impl<'a, A: Adapter> IntoIterator for &'a Paginator<A> {
    type Item = &'a A::Item;
    type IntoIter = std::slice::Iter<'a, A::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A> fmt::Debug for Paginator<A>
where
    A: Adapter + fmt::Debug,
    A::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("adapter", &self.adapter)
            .field("items_per_page", &self.items_per_page)
            .field("current_page", &self.current_page.get())
            .field("items", &self.items.get())
            .finish()
    }
}
