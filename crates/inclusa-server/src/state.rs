use std::sync::Arc;

use inclusa_audit::{AuditAction, AuditEvent};
use inclusa_core::session::SessionState;
use inclusa_dashboard::synthetic::{CategoryPools, dataset_rng, generate_participants};
use inclusa_i18n::LocalizationTable;
use inclusa_render::Renderer;
use jiff::Zoned;
use jiff::civil::{Date, DateTime};
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::sessions::{Lookup, SessionStore};
use crate::sink::SubmissionSink;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub catalog: Arc<LocalizationTable>,
    pub renderer: Arc<Renderer>,
    pub pools: Arc<CategoryPools>,
    pub sink: Arc<dyn SubmissionSink>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Load the catalogs and templates. Any failure here is fatal.
    pub fn new(config: ServerConfig, sink: Arc<dyn SubmissionSink>) -> eyre::Result<Self> {
        let catalog = LocalizationTable::embedded()?;
        let renderer = Renderer::new()?;
        let pools = CategoryPools::from_catalog(&catalog)?;

        Ok(Self {
            sessions: Arc::new(SessionStore::new(config.session_ttl)),
            catalog: Arc::new(catalog),
            renderer: Arc::new(renderer),
            pools: Arc::new(pools),
            sink,
            config: Arc::new(config),
        })
    }

    /// Start a session with defaults and a freshly drawn dataset.
    pub async fn create_session(&self) -> Result<Uuid, ApiError> {
        let id = Uuid::new_v4();
        let mut rng = dataset_rng(self.config.dataset_seed);
        let participants =
            generate_participants(&mut rng, self.config.participants, &self.pools, now())?;

        let expired = self.sessions.insert(SessionState::new(id, participants)).await;
        for old in expired {
            AuditEvent::new(AuditAction::SessionExpired, old).emit();
        }
        AuditEvent::new(AuditAction::SessionStarted, id).emit();
        Ok(id)
    }

    pub async fn with_session<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut SessionState) -> R,
    ) -> Result<R, ApiError> {
        match self.sessions.with_session(id, f).await {
            Ok(result) => Ok(result),
            Err(Lookup::Expired) => {
                AuditEvent::new(AuditAction::SessionExpired, id).emit();
                Err(ApiError::NotFound(format!("session expired: {id}")))
            }
            Err(Lookup::Unknown) => Err(ApiError::NotFound(format!("session not found: {id}"))),
        }
    }

    /// A copy of the session, for rendering outside the lock.
    pub async fn session(&self, id: Uuid) -> Result<SessionState, ApiError> {
        self.with_session(id, |session| session.clone()).await
    }

    pub async fn simulate_delay(&self) {
        if !self.config.simulated_delay.is_zero() {
            tokio::time::sleep(self.config.simulated_delay).await;
        }
    }
}

pub fn now() -> DateTime {
    Zoned::now().datetime()
}

pub fn today() -> Date {
    Zoned::now().date()
}
