//! View-models and presentation helpers.
//!
//! Each view-model holds the latest [`Response`](crate::domain::Response)
//! per operation in a `watch` slot (`None` until first invoked), forwards
//! actions to the repository, and owns the tasks it spawns. Frontends
//! subscribe to the slots and render; they never call the repository
//! directly.
//!
//! Concurrent invocations of the same operation are not deduplicated or
//! cancelled. Their emissions interleave by completion order and the last
//! writer wins; teardown is the only cancellation point.

mod auth;
mod detail;
pub mod diff;
mod stories;
mod tasks;
mod upload;

pub use auth::AuthViewModel;
pub use detail::DetailViewModel;
pub use stories::StoriesViewModel;
pub use upload::UploadViewModel;
