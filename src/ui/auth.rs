//! State holder for the sign-in and registration screens.

use tokio::sync::watch;

use crate::auth::{AuthStore, AuthToken};
use crate::domain::{Login, Register, Response};
use crate::repository::StoryRepository;
use crate::ui::tasks::{publish, TaskSet};

pub struct AuthViewModel {
    repository: StoryRepository,
    auth_store: AuthStore,
    login_state: watch::Sender<Option<Response<Login>>>,
    register_state: watch::Sender<Option<Response<Register>>>,
    tasks: TaskSet,
}

impl AuthViewModel {
    pub fn new(repository: StoryRepository, auth_store: AuthStore) -> Self {
        let (login_state, _) = watch::channel(None);
        let (register_state, _) = watch::channel(None);
        Self {
            repository,
            auth_store,
            login_state,
            register_state,
            tasks: TaskSet::new(),
        }
    }

    /// Latest login outcome; `None` until [`AuthViewModel::login`] runs.
    pub fn login_state(&self) -> watch::Receiver<Option<Response<Login>>> {
        self.login_state.subscribe()
    }

    /// Latest registration outcome; `None` until
    /// [`AuthViewModel::register`] runs.
    pub fn register_state(&self) -> watch::Receiver<Option<Response<Register>>> {
        self.register_state.subscribe()
    }

    /// Session token changes, as held by the auth store.
    pub fn auth_token(&self) -> watch::Receiver<Option<AuthToken>> {
        self.auth_store.subscribe()
    }

    pub fn login(&self, email: &str, password: &str) {
        let stream = self.repository.login(email, password);
        self.tasks.spawn(publish(stream, self.login_state.clone()));
    }

    pub fn register(&self, name: &str, email: &str, password: &str) {
        let stream = self.repository.register(name, email, password);
        self.tasks.spawn(publish(stream, self.register_state.clone()));
    }

    pub fn update_auth_token(&self, token: AuthToken) {
        self.auth_store.set(token);
    }

    pub fn remove_auth_token(&self) {
        self.auth_store.clear();
    }

    /// Wait for in-flight operations to finish publishing.
    pub async fn join(&self) {
        self.tasks.join_all().await;
    }

    /// Abort in-flight operations. The latest published state stays.
    pub fn shutdown(&self) {
        self.tasks.abort_all();
    }
}
