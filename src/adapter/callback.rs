//! Closure-backed adapter
//!
//! Lets a caller paginate a source that lives elsewhere (a database query, a
//! remote listing) without writing a dedicated adapter type.

use super::types::Adapter;
use std::fmt;

/// Adapter built from a count function and a slice function
///
/// ```
/// use pagekit::{Adapter, CallbackAdapter};
///
/// let rows: Vec<u32> = (1..=30).collect();
/// let adapter = CallbackAdapter::new(
///     || rows.len(),
///     |limit, offset| rows.iter().skip(offset).take(limit).copied().collect(),
/// );
/// assert_eq!(adapter.count(), 30);
/// assert_eq!(adapter.slice(2, 28), vec![29, 30]);
/// ```
pub struct CallbackAdapter<C, S> {
    count_fn: C,
    slice_fn: S,
}

impl<C, S> CallbackAdapter<C, S> {
    /// Create a new callback adapter
    pub fn new<T>(count_fn: C, slice_fn: S) -> Self
    where
        C: Fn() -> usize,
        S: Fn(usize, usize) -> Vec<T>,
    {
        Self { count_fn, slice_fn }
    }
}

impl<T, C, S> Adapter for CallbackAdapter<C, S>
where
    C: Fn() -> usize,
    S: Fn(usize, usize) -> Vec<T>,
{
    type Item = T;

    fn count(&self) -> usize {
        (self.count_fn)()
    }

    fn slice(&self, limit: usize, offset: usize) -> Vec<T> {
        (self.slice_fn)(limit, offset)
    }
}

impl<C, S> fmt::Debug for CallbackAdapter<C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackAdapter").finish_non_exhaustive()
    }
}
