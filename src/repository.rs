//! Translation of API outcomes into `Response` sequences.
//!
//! Every operation follows the same shape: `Loading` first, then one network
//! call, then at most one terminal value. Failures never escape as errors;
//! they become `Response::Error` items. The streams are lazy, so `Loading`
//! is observed before any connection is attempted.

use std::path::Path;

use futures_util::future;
use futures_util::stream::{self, Stream, StreamExt};

use crate::api::ApiClient;
use crate::auth::AuthToken;
use crate::domain::{Login, Posted, Register, Response, Story};

/// The sole translator between the story service and `Response` values.
#[derive(Clone)]
pub struct StoryRepository {
    api: ApiClient,
}

impl StoryRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Sign in with credentials.
    ///
    /// A success body whose `loginResult` is null produces no terminal item
    /// at all; the stream completes after `Loading`. Callers must not wait
    /// on a terminal value unconditionally.
    pub fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Stream<Item = Response<Login>> + Send + 'static {
        let api = self.api.clone();
        let email = email.to_string();
        let password = password.to_string();

        stream::once(future::ready(Some(Response::Loading)))
            .chain(stream::once(async move {
                tracing::debug!("login requested");
                match api.login(&email, &password).await {
                    Ok(body) => body
                        .login_result
                        .map(|result| Response::Success(result.into())),
                    Err(err) => Some(Response::Error(err.server_message())),
                }
            }))
            .filter_map(future::ready)
    }

    /// Create an account.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> impl Stream<Item = Response<Register>> + Send + 'static {
        let api = self.api.clone();
        let name = name.to_string();
        let email = email.to_string();
        let password = password.to_string();

        stream::once(future::ready(Response::Loading)).chain(stream::once(async move {
            tracing::debug!("registration requested");
            match api.register(&name, &email, &password).await {
                Ok(body) => Response::Success(body.into()),
                Err(err) => Response::Error(err.server_message()),
            }
        }))
    }

    /// Fetch the story feed.
    ///
    /// A null `listStory` field is `Empty`; a present but empty list is
    /// still `Success`.
    pub fn get_stories(
        &self,
        token: &AuthToken,
    ) -> impl Stream<Item = Response<Vec<Story>>> + Send + 'static {
        let api = self.api.clone();
        let token = token.clone();

        stream::once(future::ready(Response::Loading)).chain(stream::once(async move {
            tracing::debug!("feed requested");
            match api.stories(&token).await {
                Ok(body) => match body.list_story {
                    Some(list) => Response::Success(list.into_iter().map(Story::from).collect()),
                    None => Response::Empty,
                },
                Err(err) => Response::Error(err.server_message()),
            }
        }))
    }

    /// Fetch one story by id.
    pub fn get_story_detail(
        &self,
        token: &AuthToken,
        id: &str,
    ) -> impl Stream<Item = Response<Story>> + Send + 'static {
        let api = self.api.clone();
        let token = token.clone();
        let id = id.to_string();

        stream::once(future::ready(Response::Loading)).chain(stream::once(async move {
            tracing::debug!(id, "detail requested");
            match api.story_detail(&token, &id).await {
                Ok(body) => match body.story {
                    Some(story) => Response::Success(story.into()),
                    None => Response::Empty,
                },
                Err(err) => Response::Error(err.server_message()),
            }
        }))
    }

    /// Upload a new story from a photo file and a caption.
    ///
    /// This is the only operation that catches local failures: an unreadable
    /// photo or a path without a file name becomes `Error(Some(reason))`
    /// before anything is sent.
    pub fn add_story(
        &self,
        token: &AuthToken,
        photo_path: &Path,
        description: &str,
    ) -> impl Stream<Item = Response<Posted>> + Send + 'static {
        let api = self.api.clone();
        let token = token.clone();
        let photo_path = photo_path.to_path_buf();
        let description = description.to_string();

        stream::once(future::ready(Response::Loading)).chain(stream::once(async move {
            tracing::debug!(path = %photo_path.display(), "upload requested");
            let file_name = match photo_path.file_name().and_then(|name| name.to_str()) {
                Some(name) => name.to_string(),
                None => {
                    return Response::Error(Some(format!(
                        "photo path {} has no file name",
                        photo_path.display()
                    )))
                }
            };
            let photo = match tokio::fs::read(&photo_path).await {
                Ok(bytes) => bytes,
                Err(err) => return Response::Error(Some(err.to_string())),
            };

            match api.add_story(&token, &file_name, photo, &description).await {
                Ok(body) => Response::Success(body.into()),
                Err(err) => Response::Error(err.server_message()),
            }
        }))
    }
}
