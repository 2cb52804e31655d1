//! Wire payloads of the story service.
//!
//! Every field the server may omit is optional here; translation into the
//! domain records fills missing strings with `""`. Anything the backend
//! sends beyond the declared fields is ignored.

use serde::Deserialize;

use crate::domain::{Login, Posted, Register, Story};

/// Structured error body returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub message: Option<String>,
}

/// Success body of `POST login`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub login_result: Option<LoginResultDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResultDto {
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub token: Option<String>,
}

/// Success body of `POST register`.
#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    pub message: Option<String>,
}

/// Success body of `GET stories`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoriesResponse {
    pub list_story: Option<Vec<StoryDto>>,
}

/// Success body of `GET stories/{id}`.
#[derive(Debug, Deserialize)]
pub struct StoryDetailResponse {
    pub story: Option<StoryDto>,
}

/// Success body of `POST stories` (multipart upload).
#[derive(Debug, Deserialize)]
pub struct AddStoryResponse {
    pub message: Option<String>,
}

/// One story record as the server sends it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryDto {
    pub id: Option<String>,
    pub photo_url: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<String>,
    /// Coordinates are on the wire but not carried into the domain record.
    pub lon: Option<f64>,
    pub lat: Option<f64>,
}

impl From<StoryDto> for Story {
    fn from(dto: StoryDto) -> Self {
        Story {
            id: dto.id.unwrap_or_default(),
            name: dto.name.unwrap_or_default(),
            description: dto.description.unwrap_or_default(),
            photo_url: dto.photo_url.unwrap_or_default(),
            created_at: dto.created_at.unwrap_or_default(),
        }
    }
}

impl From<LoginResultDto> for Login {
    fn from(dto: LoginResultDto) -> Self {
        Login {
            user_id: dto.user_id.unwrap_or_default(),
            name: dto.name.unwrap_or_default(),
            token: dto.token.unwrap_or_default(),
        }
    }
}

impl From<RegisterResponse> for Register {
    fn from(body: RegisterResponse) -> Self {
        Register {
            message: body.message.unwrap_or_default(),
        }
    }
}

impl From<AddStoryResponse> for Posted {
    fn from(body: AddStoryResponse) -> Self {
        Posted {
            message: body.message.unwrap_or_default(),
        }
    }
}
