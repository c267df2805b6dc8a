//! Stand-ins for the backend the app talks to.
//!
//! Every call resolves after a fixed delay with a canned payload and never fails.

use crate::chat::CANNED_REPLY;
use crate::config::Delays;
use crate::models::{MoodEntry, UserProfile};
use crate::mood_log::MoodDraft;
use crate::quotes::{QuoteSource, RotatingQuotes};
use crate::session::{profile_for, Credentials};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::time::sleep;
use tracing::debug;

#[async_trait]
pub trait AuthService: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> UserProfile;
}

#[async_trait]
pub trait MoodRepository: Send + Sync {
    async fn save(&self, draft: MoodDraft, date: NaiveDate) -> MoodEntry;
}

#[async_trait]
pub trait AssistantClient: Send + Sync {
    async fn reply(&self, prompt: &str) -> String;
}

#[derive(Clone)]
pub struct Collaborators {
    pub auth: Arc<dyn AuthService>,
    pub moods: Arc<dyn MoodRepository>,
    pub assistant: Arc<dyn AssistantClient>,
    pub quotes: Arc<dyn QuoteSource>,
}

impl Collaborators {
    pub fn simulated(delays: Delays) -> Self {
        let backend = Arc::new(SimulatedBackend::new(delays));
        Self {
            auth: backend.clone(),
            moods: backend.clone(),
            assistant: backend,
            quotes: Arc::new(RotatingQuotes::default()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SimulatedBackend {
    delays: Delays,
}

impl SimulatedBackend {
    pub fn new(delays: Delays) -> Self {
        Self { delays }
    }
}

#[async_trait]
impl AuthService for SimulatedBackend {
    async fn authenticate(&self, credentials: &Credentials) -> UserProfile {
        debug!(mode = ?credentials.mode, "simulating sign-in");
        sleep(self.delays.auth).await;
        profile_for(credentials)
    }
}

#[async_trait]
impl MoodRepository for SimulatedBackend {
    async fn save(&self, draft: MoodDraft, date: NaiveDate) -> MoodEntry {
        sleep(self.delays.submit).await;
        draft.into_entry(date)
    }
}

#[async_trait]
impl AssistantClient for SimulatedBackend {
    async fn reply(&self, _prompt: &str) -> String {
        sleep(self.delays.chat).await;
        CANNED_REPLY.to_string()
    }
}
