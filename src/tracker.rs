use crate::chat::Transcript;
use crate::errors::{TrackerError, TransitionError};
use crate::models::{MoodEntry, MoodForm, Tab, UserProfile};
use crate::mood_log::{MoodDraft, MoodLog};
use crate::quotes::{QuotePanel, QuoteSource};
use crate::session::Session;
use crate::storage::PersistedSession;
use chrono::{DateTime, Utc};
use tracing::info;

/// Everything the signed-in view shows, owned in one place.
///
/// Operations that wait on a collaborator are split into a `begin_*` and a
/// `complete_*` half so callers can release their lock while the collaborator
/// runs.
#[derive(Debug, Clone)]
pub struct Tracker {
    session: Session,
    active_tab: Tab,
    moods: MoodLog,
    mood_form: MoodForm,
    chat: Transcript,
    quote: QuotePanel,
}

impl Tracker {
    pub fn new(persisted: &PersistedSession) -> Self {
        Self::with_moods(persisted, MoodLog::seeded())
    }

    pub fn with_moods(persisted: &PersistedSession, moods: MoodLog) -> Self {
        Self {
            session: Session::restore(persisted.auth_token.as_deref()),
            active_tab: Tab::default(),
            moods,
            mood_form: MoodForm::default(),
            chat: Transcript::default(),
            quote: QuotePanel::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn moods(&self) -> &MoodLog {
        &self.moods
    }

    pub fn mood_form(&self) -> &MoodForm {
        &self.mood_form
    }

    pub fn chat(&self) -> &Transcript {
        &self.chat
    }

    pub fn quote(&self) -> &str {
        self.quote.current()
    }

    pub fn require_user(&self) -> Result<&UserProfile, TransitionError> {
        self.session.user().ok_or(TransitionError::NotSignedIn)
    }

    pub fn begin_auth(&mut self) -> Result<(), TransitionError> {
        self.session.begin()
    }

    pub fn complete_auth(&mut self, profile: UserProfile) -> Result<(), TransitionError> {
        let email = profile.email.clone();
        self.session.complete(profile)?;
        info!(%email, "signed in");
        Ok(())
    }

    /// Drops the profile and sends the view back to the dashboard.
    pub fn logout(&mut self) -> Option<UserProfile> {
        self.active_tab = Tab::default();
        let user = self.session.logout();
        if let Some(user) = &user {
            info!(email = %user.email, "signed out");
        }
        user
    }

    pub fn select_tab(&mut self, tab: Tab) -> Result<Tab, TransitionError> {
        self.require_user()?;
        self.active_tab = tab;
        Ok(tab)
    }

    /// Captures the form and reserves the submission slot.
    ///
    /// Invalid input stays in the form buffer so it can be shown again.
    pub fn begin_mood_submit(&mut self, form: MoodForm) -> Result<MoodDraft, TrackerError> {
        self.require_user()?;
        if self.moods.is_pending() {
            return Err(TransitionError::SubmitPending.into());
        }
        self.mood_form = form;
        let draft = self.mood_form.parse()?;
        self.moods.begin_submit()?;
        Ok(draft)
    }

    /// Appends the saved entry. A sign-out while the save was in flight
    /// discards it and frees the submission slot.
    pub fn complete_mood_submit(&mut self, entry: MoodEntry) -> Result<&MoodEntry, TransitionError> {
        if self.session.user().is_none() {
            self.moods.abort_submit();
            self.mood_form.clear();
            return Err(TransitionError::NotSignedIn);
        }
        let entry = self.moods.complete_submit(entry)?;
        self.mood_form.clear();
        info!(date = %entry.date, mood = entry.mood, "mood entry logged");
        Ok(entry)
    }

    /// Returns whether a reply is now owed; blank input is dropped silently.
    pub fn send_chat(&mut self, text: &str, at: DateTime<Utc>) -> Result<bool, TransitionError> {
        self.require_user()?;
        Ok(self.chat.send(text, at)?.is_some())
    }

    /// Replies that arrive after sign-out are dropped.
    pub fn deliver_reply(&mut self, content: String, at: DateTime<Utc>) -> Result<(), TransitionError> {
        if self.session.user().is_none() {
            self.chat.abandon_reply();
            return Err(TransitionError::NotSignedIn);
        }
        self.chat.deliver_reply(content, at)?;
        Ok(())
    }

    pub fn refresh_quote(&mut self, source: &dyn QuoteSource) -> Result<&str, TransitionError> {
        self.require_user()?;
        Ok(self.quote.refresh(source))
    }
}
