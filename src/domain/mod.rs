//! Domain types shared by the repository, view-models, and frontend.

mod response;
mod story;

pub use response::Response;
pub use story::{Login, Posted, Register, Story};
