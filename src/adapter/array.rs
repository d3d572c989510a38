//! In-memory adapter

use super::types::Adapter;

/// Adapter over an owned, ordered vector of items
///
/// Slices are cloned out of the backing vector, so the paginator never
/// borrows into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrayAdapter<T> {
    data: Vec<T>,
}

impl<T> ArrayAdapter<T> {
    /// Create a new array adapter
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Get the wrapped items
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Unwrap the adapter, returning the backing vector
    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}

impl<T: Clone> Adapter for ArrayAdapter<T> {
    type Item = T;

    fn count(&self) -> usize {
        self.data.len()
    }

    fn slice(&self, limit: usize, offset: usize) -> Vec<T> {
        let start = offset.min(self.data.len());
        let end = offset.saturating_add(limit).min(self.data.len());
        self.data[start..end].to_vec()
    }
}

impl<T> From<Vec<T>> for ArrayAdapter<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T> FromIterator<T> for ArrayAdapter<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
