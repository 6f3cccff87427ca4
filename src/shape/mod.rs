//! Message shaping: turning a decoded JSON document into notification text.
//!
//! [`filter::select`] restricts a document to a route's top-level filter
//! keys, and [`flatten::Flattener`] renders the (possibly trimmed) object as
//! indented `key: value` lines.

pub mod filter;
pub mod flatten;

pub use filter::{select, FilterKeySet};
pub use flatten::{Flattener, DEFAULT_MAX_DEPTH};
