//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use storia::api::ApiClient;
use storia::config::Config;
use storia::repository::StoryRepository;

use mock_api::MockApi;

/// Config pointed at a mock server, with short timeouts.
pub fn test_config(base_url: &str) -> Config {
    Config {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}

/// Repository wired to a running mock server.
pub fn repository_for(mock: &MockApi) -> StoryRepository {
    let config = test_config(&mock.base_url());
    let api = ApiClient::new(&config).expect("client builds");
    StoryRepository::new(api)
}

/// A feed entry body as the server would send it.
pub fn story_json(id: &str, name: &str, description: &str) -> String {
    format!(
        r#"{{"id": "{id}", "name": "{name}", "description": "{description}", "photoUrl": "https://cdn.example.com/{id}.jpg", "createdAt": "2022-02-22T22:22:22Z", "lon": 110.36, "lat": -7.8}}"#
    )
}
