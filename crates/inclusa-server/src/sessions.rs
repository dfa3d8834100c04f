use std::collections::HashMap;
use std::time::Duration;

use inclusa_core::session::SessionState;
use tokio::sync::Mutex;
use tokio::time::Instant;
use uuid::Uuid;

struct Entry {
    session: SessionState,
    last_seen: Instant,
}

impl Entry {
    fn expired(&self, now: Instant, ttl: Duration) -> bool {
        now.duration_since(self.last_seen) > ttl
    }
}

/// In-memory sessions keyed by id.
///
/// Idle sessions are dropped lazily: on access and whenever a new session
/// is inserted. The lock is only held for synchronous work.
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, Entry>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Store a new session. Returns the ids of sessions that expired.
    pub async fn insert(&self, session: SessionState) -> Vec<Uuid> {
        let now = Instant::now();
        let mut sessions = self.sessions.lock().await;
        let expired: Vec<Uuid> = sessions
            .iter()
            .filter(|(_, entry)| entry.expired(now, self.ttl))
            .map(|(id, _)| *id)
            .collect();
        for id in &expired {
            sessions.remove(id);
        }
        sessions.insert(
            session.id(),
            Entry {
                session,
                last_seen: now,
            },
        );
        expired
    }

    /// Run `f` against a live session and mark it as seen.
    ///
    /// `Err(Expired)` is returned once for a session that outlived the TTL;
    /// after that it is simply unknown.
    pub async fn with_session<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut SessionState) -> R,
    ) -> Result<R, Lookup> {
        let now = Instant::now();
        let mut sessions = self.sessions.lock().await;
        let Some(entry) = sessions.get_mut(&id) else {
            return Err(Lookup::Unknown);
        };
        if entry.expired(now, self.ttl) {
            sessions.remove(&id);
            return Err(Lookup::Expired);
        }
        entry.last_seen = now;
        Ok(f(&mut entry.session))
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Why a session lookup failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Unknown,
    Expired,
}
