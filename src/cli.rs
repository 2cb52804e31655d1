//! Terminal frontend.
//!
//! Each subcommand plays the part of one screen: it issues an action into a
//! view-model, observes the published state until the operation settles,
//! and renders the outcome. Error messages are shown only when the server
//! provided one; any non-success outcome exits nonzero.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::pin;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::sync::watch;

use crate::api::ApiClient;
use crate::auth::{AuthStore, AuthToken};
use crate::config::Config;
use crate::domain::{Response, Story};
use crate::repository::StoryRepository;
use crate::ui::diff::{diff, ListUpdate};
use crate::ui::{AuthViewModel, DetailViewModel, StoriesViewModel, UploadViewModel};
use crate::validation;

#[derive(Parser)]
#[command(name = "storia")]
#[command(about = "Terminal client for a story sharing service")]
#[command(version)]
pub struct Cli {
    /// Bearer token for authenticated commands; falls back to the
    /// STORIA_TOKEN environment variable.
    #[arg(long, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sign in and print the session token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Print the story feed.
    Stories {
        /// Poll repeatedly and print what changed between fetches.
        #[arg(long)]
        watch: bool,
        /// Seconds between polls in watch mode.
        #[arg(long, default_value_t = 10)]
        interval: u64,
    },
    /// Show one story.
    Detail {
        id: String,
        /// Display name for the heading, as passed along by the feed.
        #[arg(long)]
        name: Option<String>,
    },
    /// Upload a new story from a photo file.
    Upload {
        photo: PathBuf,
        #[arg(long)]
        description: String,
    },
    /// Drop the in-process session.
    Logout,
}

pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = Config::load()?;
    let api = ApiClient::new(&config)?;
    let repository = StoryRepository::new(api);
    let auth_store = AuthStore::new();

    match cli.command {
        Command::Login { email, password } => {
            login(repository, auth_store, &email, &password).await
        }
        Command::Register {
            name,
            email,
            password,
        } => register(repository, auth_store, &name, &email, &password).await,
        Command::Stories { watch, interval } => {
            let token = resolve_token(cli.token, &auth_store)?;
            stories(repository, &token, watch, interval).await
        }
        Command::Detail { id, name } => {
            let token = resolve_token(cli.token, &auth_store)?;
            detail(repository, &token, &id, name.as_deref()).await
        }
        Command::Upload { photo, description } => {
            let token = resolve_token(cli.token, &auth_store)?;
            upload(repository, &token, &photo, &description).await
        }
        Command::Logout => logout(&auth_store),
    }
}

/// Pick the session token for an authenticated command: explicit flag,
/// then environment, then whatever the store holds.
fn resolve_token(flag: Option<String>, auth_store: &AuthStore) -> anyhow::Result<AuthToken> {
    flag.map(AuthToken::new)
        .or_else(|| {
            std::env::var("STORIA_TOKEN")
                .ok()
                .filter(|token| !token.is_empty())
                .map(AuthToken::new)
        })
        .or_else(|| auth_store.token())
        .context("no session token; run `storia login` or pass --token / STORIA_TOKEN")
}

/// Observe a state slot until the operation settles.
///
/// Resolves on the first terminal value, or with whatever is current once
/// `join` reports the view-model's tasks are done. The second arm covers
/// the login boundary where a stream can end after `Loading` without a
/// terminal item.
async fn drive<T, F>(
    state: &mut watch::Receiver<Option<Response<T>>>,
    join: F,
) -> Option<Response<T>>
where
    T: Clone,
    F: Future<Output = ()>,
{
    let mut join = pin!(join);
    loop {
        tokio::select! {
            changed = state.changed() => {
                if changed.is_err() {
                    return state.borrow().clone();
                }
                match state.borrow_and_update().clone() {
                    Some(Response::Loading) | None => {}
                    terminal => return terminal,
                }
            }
            () = &mut join => {
                return state.borrow().clone();
            }
        }
    }
}

/// Render a failed outcome: the message when the server sent one,
/// nothing otherwise.
fn render_failure<T>(state: Option<Response<T>>) -> ExitCode {
    if let Some(Response::Error(Some(message))) = state {
        eprintln!("{message}");
    }
    ExitCode::FAILURE
}

async fn login(
    repository: StoryRepository,
    auth_store: AuthStore,
    email: &str,
    password: &str,
) -> anyhow::Result<ExitCode> {
    if !validation::is_valid_email(email) {
        anyhow::bail!("'{email}' is not a valid email address");
    }

    let vm = AuthViewModel::new(repository, auth_store);
    let mut state = vm.login_state();
    vm.login(email, password);

    match drive(&mut state, vm.join()).await {
        Some(Response::Success(session)) => {
            vm.update_auth_token(AuthToken::new(session.token.clone()));
            println!("signed in as {}", session.name);
            println!("export STORIA_TOKEN={}", session.token);
            Ok(ExitCode::SUCCESS)
        }
        other => Ok(render_failure(other)),
    }
}

async fn register(
    repository: StoryRepository,
    auth_store: AuthStore,
    name: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<ExitCode> {
    if !validation::is_valid_name(name) {
        anyhow::bail!("name must not be empty");
    }
    if !validation::is_valid_email(email) {
        anyhow::bail!("'{email}' is not a valid email address");
    }
    if !validation::is_valid_password(password) {
        anyhow::bail!("password must be at least 6 characters");
    }

    let vm = AuthViewModel::new(repository, auth_store);
    let mut state = vm.register_state();
    vm.register(name, email, password);

    match drive(&mut state, vm.join()).await {
        Some(Response::Success(outcome)) => {
            if outcome.message.is_empty() {
                println!("registered");
            } else {
                println!("{}", outcome.message);
            }
            Ok(ExitCode::SUCCESS)
        }
        other => Ok(render_failure(other)),
    }
}

async fn stories(
    repository: StoryRepository,
    token: &AuthToken,
    watch: bool,
    interval: u64,
) -> anyhow::Result<ExitCode> {
    let vm = StoriesViewModel::new(repository);

    if watch {
        return watch_stories(&vm, token, interval).await;
    }

    let mut state = vm.stories();
    vm.get_stories(token);

    match drive(&mut state, vm.join()).await {
        Some(Response::Success(feed)) => {
            print_stories(&feed);
            Ok(ExitCode::SUCCESS)
        }
        Some(Response::Empty) => {
            println!("(no stories)");
            Ok(ExitCode::SUCCESS)
        }
        other => Ok(render_failure(other)),
    }
}

/// Poll the feed forever, rendering the full list once and only the edits
/// afterwards. Failed polls are logged and the previous list is kept.
async fn watch_stories(
    vm: &StoriesViewModel,
    token: &AuthToken,
    interval: u64,
) -> anyhow::Result<ExitCode> {
    let mut current: Vec<Story> = Vec::new();
    let mut rendered = false;

    loop {
        let mut state = vm.stories();
        vm.get_stories(token);

        match drive(&mut state, vm.join()).await {
            Some(Response::Success(feed)) => {
                if rendered {
                    print_updates(&current, &feed);
                } else {
                    print_stories(&feed);
                    rendered = true;
                }
                current = feed;
            }
            Some(Response::Empty) => {
                if !rendered || !current.is_empty() {
                    println!("(no stories)");
                }
                current = Vec::new();
                rendered = true;
            }
            Some(Response::Error(message)) => {
                tracing::warn!(message = message.as_deref(), "feed poll failed");
            }
            _ => {}
        }

        tokio::time::sleep(Duration::from_secs(interval)).await;
    }
}

async fn detail(
    repository: StoryRepository,
    token: &AuthToken,
    id: &str,
    name: Option<&str>,
) -> anyhow::Result<ExitCode> {
    let vm = DetailViewModel::new(repository);
    let mut state = vm.story();
    vm.get_story_detail(token, id);

    match drive(&mut state, vm.join()).await {
        Some(Response::Success(story)) => {
            println!("{}", name.unwrap_or(&story.name));
            println!("{}", story.description);
            println!("{} ({})", story.photo_url, story.created_at);
            Ok(ExitCode::SUCCESS)
        }
        Some(Response::Empty) => {
            println!("(no story)");
            Ok(ExitCode::SUCCESS)
        }
        other => Ok(render_failure(other)),
    }
}

async fn upload(
    repository: StoryRepository,
    token: &AuthToken,
    photo: &Path,
    description: &str,
) -> anyhow::Result<ExitCode> {
    let vm = UploadViewModel::new(repository);
    let mut state = vm.upload_state();
    vm.upload_new_story(token, photo, description);

    match drive(&mut state, vm.join()).await {
        Some(Response::Success(posted)) => {
            if posted.message.is_empty() {
                println!("story uploaded");
            } else {
                println!("{}", posted.message);
            }
            Ok(ExitCode::SUCCESS)
        }
        other => Ok(render_failure(other)),
    }
}

fn logout(auth_store: &AuthStore) -> anyhow::Result<ExitCode> {
    auth_store.clear();
    println!("session cleared; unset STORIA_TOKEN if it is exported");
    Ok(ExitCode::SUCCESS)
}

fn print_stories(feed: &[Story]) {
    if feed.is_empty() {
        println!("(no stories)");
        return;
    }
    for story in feed {
        println!("{}", describe(story));
        println!("    {} ({})", story.photo_url, story.created_at);
    }
}

fn print_updates(old: &[Story], new: &[Story]) {
    for edit in diff(old, new) {
        match edit {
            ListUpdate::Inserted { index } => println!("+ {}", describe(&new[index])),
            ListUpdate::Removed { index } => println!("- {}", describe(&old[index])),
            ListUpdate::Changed { index } => println!("~ {}", describe(&new[index])),
        }
    }
}

fn describe(story: &Story) -> String {
    format!("[{}] {}: {}", story.id, story.name, story.description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Login;
    use futures_util::future;

    #[tokio::test]
    async fn test_drive_resolves_on_terminal_state() {
        let (slot, mut state) = watch::channel(None);

        let publisher = tokio::spawn(async move {
            slot.send_replace(Some(Response::Loading));
            tokio::time::sleep(Duration::from_millis(10)).await;
            slot.send_replace(Some(Response::Error(Some("denied".to_string()))));
        });

        let outcome: Option<Response<Login>> = drive(&mut state, future::pending()).await;
        assert_eq!(outcome, Some(Response::Error(Some("denied".to_string()))));
        publisher.await.unwrap();
    }

    #[tokio::test]
    async fn test_drive_resolves_when_tasks_end_without_terminal() {
        let (slot, mut state) = watch::channel(None);
        slot.send_replace(Some(Response::<Login>::Loading));

        let outcome = drive(&mut state, async {}).await;
        assert_eq!(outcome, Some(Response::Loading));
    }

    #[test]
    fn test_token_flag_wins_over_store() {
        let store = AuthStore::new();
        store.set(AuthToken::new("stored"));

        let token = resolve_token(Some("flagged".to_string()), &store).unwrap();
        assert_eq!(token.expose(), "flagged");
    }

    #[test]
    fn test_token_falls_back_to_store() {
        std::env::remove_var("STORIA_TOKEN");
        let store = AuthStore::new();
        store.set(AuthToken::new("stored"));

        let token = resolve_token(None, &store).unwrap();
        assert_eq!(token.expose(), "stored");
    }

    #[test]
    fn test_missing_token_is_an_error() {
        std::env::remove_var("STORIA_TOKEN");
        let store = AuthStore::new();
        assert!(resolve_token(None, &store).is_err());
    }
}
