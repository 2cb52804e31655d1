//! State holder for the story detail screen.
//!
//! The display name shown in the heading comes from the caller (the feed
//! passes it along when navigating); only the story body is fetched here.

use tokio::sync::watch;

use crate::auth::AuthToken;
use crate::domain::{Response, Story};
use crate::repository::StoryRepository;
use crate::ui::tasks::{publish, TaskSet};

pub struct DetailViewModel {
    repository: StoryRepository,
    story: watch::Sender<Option<Response<Story>>>,
    tasks: TaskSet,
}

impl DetailViewModel {
    pub fn new(repository: StoryRepository) -> Self {
        let (story, _) = watch::channel(None);
        Self {
            repository,
            story,
            tasks: TaskSet::new(),
        }
    }

    /// Latest detail state; `None` until
    /// [`DetailViewModel::get_story_detail`] runs.
    pub fn story(&self) -> watch::Receiver<Option<Response<Story>>> {
        self.story.subscribe()
    }

    pub fn get_story_detail(&self, token: &AuthToken, id: &str) {
        let stream = self.repository.get_story_detail(token, id);
        self.tasks.spawn(publish(stream, self.story.clone()));
    }

    pub async fn join(&self) {
        self.tasks.join_all().await;
    }

    pub fn shutdown(&self) {
        self.tasks.abort_all();
    }
}
