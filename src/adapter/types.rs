//! Adapter trait
//!
//! Defines the capability every data source must provide.

/// Core trait for paginated data sources
///
/// Implementations must be order-stable: two calls to [`slice`](Adapter::slice)
/// with the same arguments return the same items in the same order unless the
/// underlying data changed in between.
pub trait Adapter {
    /// Item type produced by [`slice`](Adapter::slice)
    type Item;

    /// Total number of items available
    fn count(&self) -> usize;

    /// Return up to `limit` items starting at the 0-based `offset`
    ///
    /// Returns fewer items near the end of the source, and an empty vector
    /// when `offset` is at or past [`count`](Adapter::count). Never fails.
    fn slice(&self, limit: usize, offset: usize) -> Vec<Self::Item>;

    /// Check if the source holds no items
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl<A: Adapter + ?Sized> Adapter for &A {
    type Item = A::Item;

    fn count(&self) -> usize {
        (**self).count()
    }

    fn slice(&self, limit: usize, offset: usize) -> Vec<Self::Item> {
        (**self).slice(limit, offset)
    }
}

impl<A: Adapter + ?Sized> Adapter for &mut A {
    type Item = A::Item;

    fn count(&self) -> usize {
        (**self).count()
    }

    fn slice(&self, limit: usize, offset: usize) -> Vec<Self::Item> {
        (**self).slice(limit, offset)
    }
}

impl<A: Adapter + ?Sized> Adapter for Box<A> {
    type Item = A::Item;

    fn count(&self) -> usize {
        (**self).count()
    }

    fn slice(&self, limit: usize, offset: usize) -> Vec<Self::Item> {
        (**self).slice(limit, offset)
    }
}
