//! HTTP client for the story service.
//!
//! One thin method per backend operation; each returns the decoded success
//! body or an [`ApiError`]. The `Authorization` header is built here from
//! [`AuthToken`], never by callers.

use reqwest::multipart;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::api::error::ApiError;
use crate::api::wire::{
    AddStoryResponse, ErrorResponse, LoginResponse, RegisterResponse, StoriesResponse,
    StoryDetailResponse,
};
use crate::auth::AuthToken;
use crate::config::Config;

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from configuration.
    ///
    /// Timeouts are applied at the connection and whole-request level so a
    /// stalled call always resolves into a `Transport` error.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(ApiError::Build)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// `POST login` with form-encoded credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let response = self
            .client
            .post(self.endpoint("login"))
            .form(&[("email", email), ("password", password)])
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `POST register` with form-encoded profile fields.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisterResponse, ApiError> {
        let response = self
            .client
            .post(self.endpoint("register"))
            .form(&[("name", name), ("email", email), ("password", password)])
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `GET stories` for the authenticated user's feed.
    pub async fn stories(&self, token: &AuthToken) -> Result<StoriesResponse, ApiError> {
        let response = self
            .client
            .get(self.endpoint("stories"))
            .bearer_auth(token.expose())
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `GET stories/{id}` for a single story.
    pub async fn story_detail(
        &self,
        token: &AuthToken,
        id: &str,
    ) -> Result<StoryDetailResponse, ApiError> {
        let response = self
            .client
            .get(self.endpoint(&format!("stories/{id}")))
            .bearer_auth(token.expose())
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `POST stories` as multipart: the photo bytes under `photo` with the
    /// source file name and `image/jpeg` content type, the caption under
    /// `description` as `text/plain`.
    pub async fn add_story(
        &self,
        token: &AuthToken,
        file_name: &str,
        photo: Vec<u8>,
        description: &str,
    ) -> Result<AddStoryResponse, ApiError> {
        let photo_part = multipart::Part::bytes(photo)
            .file_name(file_name.to_string())
            .mime_str("image/jpeg")?;
        let description_part =
            multipart::Part::text(description.to_string()).mime_str("text/plain")?;
        let form = multipart::Form::new()
            .part("photo", photo_part)
            .part("description", description_part);

        let response = self
            .client
            .post(self.endpoint("stories"))
            .bearer_auth(token.expose())
            .multipart(form)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Decode a success body, or fold a non-2xx response into
    /// [`ApiError::Server`] with whatever message its body carried.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.message);
            tracing::debug!(%status, message = message.as_deref(), "server rejected request");
            return Err(ApiError::Server { status, message });
        }

        Ok(response.json::<T>().await?)
    }
}
