//! State holder for the story feed screen.

use tokio::sync::watch;

use crate::auth::AuthToken;
use crate::domain::{Response, Story};
use crate::repository::StoryRepository;
use crate::ui::tasks::{publish, TaskSet};

pub struct StoriesViewModel {
    repository: StoryRepository,
    stories: watch::Sender<Option<Response<Vec<Story>>>>,
    tasks: TaskSet,
}

impl StoriesViewModel {
    pub fn new(repository: StoryRepository) -> Self {
        let (stories, _) = watch::channel(None);
        Self {
            repository,
            stories,
            tasks: TaskSet::new(),
        }
    }

    /// Latest feed state; `None` until [`StoriesViewModel::get_stories`]
    /// runs. Repeated fetches replace the whole list.
    pub fn stories(&self) -> watch::Receiver<Option<Response<Vec<Story>>>> {
        self.stories.subscribe()
    }

    pub fn get_stories(&self, token: &AuthToken) {
        let stream = self.repository.get_stories(token);
        self.tasks.spawn(publish(stream, self.stories.clone()));
    }

    pub async fn join(&self) {
        self.tasks.join_all().await;
    }

    pub fn shutdown(&self) {
        self.tasks.abort_all();
    }
}
