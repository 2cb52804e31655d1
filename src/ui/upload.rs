//! State holder for the new-story screen.

use std::path::Path;

use tokio::sync::watch;

use crate::auth::AuthToken;
use crate::domain::{Posted, Response};
use crate::repository::StoryRepository;
use crate::ui::tasks::{publish, TaskSet};

pub struct UploadViewModel {
    repository: StoryRepository,
    upload_state: watch::Sender<Option<Response<Posted>>>,
    tasks: TaskSet,
}

impl UploadViewModel {
    pub fn new(repository: StoryRepository) -> Self {
        let (upload_state, _) = watch::channel(None);
        Self {
            repository,
            upload_state,
            tasks: TaskSet::new(),
        }
    }

    /// Latest upload outcome; `None` until
    /// [`UploadViewModel::upload_new_story`] runs.
    pub fn upload_state(&self) -> watch::Receiver<Option<Response<Posted>>> {
        self.upload_state.subscribe()
    }

    pub fn upload_new_story(&self, token: &AuthToken, photo_path: &Path, description: &str) {
        let stream = self.repository.add_story(token, photo_path, description);
        self.tasks.spawn(publish(stream, self.upload_state.clone()));
    }

    pub async fn join(&self) {
        self.tasks.join_all().await;
    }

    pub fn shutdown(&self) {
        self.tasks.abort_all();
    }
}
