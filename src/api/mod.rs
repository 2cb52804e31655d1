//! Wire types and HTTP access to the story service.

mod client;
mod error;
pub mod wire;

pub use client::ApiClient;
pub use error::ApiError;
