//! Explicit session liveness registry.
//!
//! The actor keeps a non-owning back-reference to its browser session: a
//! `SessionId` into this registry. The automation layer registers a session
//! when it comes up and removes it on teardown; every actor operation starts
//! with a liveness lookup and reports `Ok(false)` when the session is gone.
//! This replaces automatic weak-reference collection with an explicit
//! relation the caller controls.

use std::sync::Arc;

use dashmap::DashMap;
use ghosthand_core_types::SessionId;
use tracing::debug;

use crate::ports::SessionPort;

#[derive(Default)]
pub struct SessionRegistry {
    sessions: DashMap<SessionId, Arc<dyn SessionPort>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Register a session and hand back the id actors use to reach it.
    pub fn register(&self, session: Arc<dyn SessionPort>) -> SessionId {
        let id = SessionId::new();
        self.sessions.insert(id.clone(), session);
        debug!(session = %id, "session registered");
        id
    }

    /// Tear a session down. Actors holding its id degrade to no-op failures.
    pub fn remove(&self, id: &SessionId) -> Option<Arc<dyn SessionPort>> {
        let removed = self.sessions.remove(id).map(|(_, s)| s);
        if removed.is_some() {
            debug!(session = %id, "session removed");
        }
        removed
    }

    pub fn get(&self, id: &SessionId) -> Option<Arc<dyn SessionPort>> {
        self.sessions.get(id).map(|entry| entry.value().clone())
    }

    pub fn is_alive(&self, id: &SessionId) -> bool {
        self.sessions.contains_key(id)
    }
}
