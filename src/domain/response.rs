//! Result envelope for asynchronous operations.
//!
//! Every repository operation publishes its lifecycle through this type:
//!
//! ```text
//! Loading ──→ Success(data)
//!         ──→ Empty
//!         ──→ Error(message)
//! ```
//!
//! `Loading` is emitted before any network activity starts; at most one
//! terminal variant follows. Each value is a full replacement of the
//! previous one, never a delta, so consumers keep only the latest.

/// Observable outcome of a single asynchronous operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response<T> {
    /// Operation in flight, no payload yet.
    Loading,
    /// Operation completed with a value.
    Success(T),
    /// Operation completed, well-formed, but carried no content
    /// (e.g. an empty story feed).
    Empty,
    /// Operation failed. The message comes from the server's structured
    /// error body when one was present.
    Error(Option<String>),
}
