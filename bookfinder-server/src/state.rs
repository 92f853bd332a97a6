//! Application state

use anyhow::Result;
use bookfinder_core::{BookApi, Config, HttpBookApi, SearchClient};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

/// A UI session: one page load's client state
pub type Session = Arc<Mutex<SearchClient>>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Backend used by every new session
    pub api: Arc<dyn BookApi>,

    /// Live UI sessions
    pub sessions: Arc<RwLock<SessionStore>>,
}

/// Sessions keyed by id, evicted oldest-first once `max_sessions` is reached
pub struct SessionStore {
    sessions: HashMap<Uuid, Session>,
    order: VecDeque<Uuid>,
    max_sessions: usize,
}

impl SessionStore {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: HashMap::new(),
            order: VecDeque::new(),
            max_sessions: max_sessions.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn get(&self, id: &Uuid) -> Option<Session> {
        self.sessions.get(id).cloned()
    }

    /// Insert a session, evicting the oldest ones to stay within capacity
    pub fn insert(&mut self, id: Uuid, session: Session) {
        while self.sessions.len() >= self.max_sessions {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.sessions.remove(&oldest);
            tracing::debug!(session = %oldest, "evicted session");
        }
        self.sessions.insert(id, session);
        self.order.push_back(id);
    }
}

impl AppState {
    /// Create application state talking to the configured backend
    pub fn new(config: &Config) -> Result<Self> {
        let api = HttpBookApi::from_config(config)?;
        Ok(Self::with_api(Arc::new(api), config.max_sessions))
    }

    /// Create application state around an existing backend client
    pub fn with_api(api: Arc<dyn BookApi>, max_sessions: usize) -> Self {
        Self {
            api,
            sessions: Arc::new(RwLock::new(SessionStore::new(max_sessions))),
        }
    }

    /// Start a new session in its initial state
    pub async fn create_session(&self) -> (Uuid, Session) {
        let id = Uuid::new_v4();
        let session = Arc::new(Mutex::new(SearchClient::new(Arc::clone(&self.api))));
        self.sessions.write().await.insert(id, Arc::clone(&session));
        tracing::debug!(session = %id, "created session");
        (id, session)
    }

    /// Look up a live session
    pub async fn session(&self, id: &Uuid) -> Option<Session> {
        self.sessions.read().await.get(id)
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sessions_are_evicted_oldest_first() {
        let config = Config {
            max_sessions: 2,
            ..Config::default()
        };
        let state = AppState::new(&config).unwrap();

        let (first, _) = state.create_session().await;
        let (second, _) = state.create_session().await;
        let (third, _) = state.create_session().await;

        assert_eq!(state.session_count().await, 2);
        assert!(state.session(&first).await.is_none());
        assert!(state.session(&second).await.is_some());
        assert!(state.session(&third).await.is_some());
    }
}
