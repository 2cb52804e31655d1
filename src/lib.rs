//! Client library for a story sharing service.
//!
//! Users sign in, browse a feed of photo stories, open a story's detail,
//! and upload new stories. Every asynchronous operation reports through the
//! same envelope, [`domain::Response`]: `Loading`, then `Success`, `Empty`,
//! or `Error`. The [`repository`] turns API calls into streams of those
//! values, the view-models in [`ui`] republish them as observable state,
//! and a frontend (here, the `storia` binary) renders whatever is current.

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod domain;
pub mod repository;
pub mod trace;
pub mod ui;
pub mod validation;
