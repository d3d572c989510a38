//! Adapter module
//!
//! Supports: in-memory arrays, closure-backed sources
//!
//! # Overview
//!
//! An adapter is the data source a [`Paginator`](crate::paginator::Paginator)
//! reads from. It only has to answer two questions: how many items exist, and
//! which items sit in a bounded window starting at a 0-based offset. Anything
//! that can answer both (a `Vec`, a SQL table, a remote listing endpoint) can
//! be paginated.

mod array;
mod callback;
mod types;

pub use array::ArrayAdapter;
pub use callback::CallbackAdapter;
pub use types::Adapter;
