use crate::analytics::{build_analytics, build_dashboard};
use crate::errors::AppError;
use crate::models::{
    AnalyticsResponse, AuthForm, ChatRequest, ChatResponse, DashboardResponse, MoodForm,
    MoodsResponse, QuoteResponse, SessionResponse, TabRequest,
};
use crate::quotes::DEFAULT_QUOTE;
use crate::session::AuthMode;
use crate::state::AppState;
use crate::storage::{persist_session, PersistedSession};
use crate::tracker::Tracker;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};
use chrono::{NaiveDate, Utc};
use tokio::task::JoinHandle;
use tracing::warn;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let tracker = state.tracker.lock().await;
    let quote = match tracker.require_user() {
        Ok(_) => tracker.quote(),
        Err(_) => DEFAULT_QUOTE,
    };
    Html(render_index(quote))
}

pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let tracker = state.tracker.lock().await;
    Json(to_session_response(&tracker))
}

pub async fn login(
    State(state): State<AppState>,
    Json(form): Json<AuthForm>,
) -> Result<Json<SessionResponse>, AppError> {
    authenticate(&state, AuthMode::Login, form).await.map(Json)
}

pub async fn register(
    State(state): State<AppState>,
    Json(form): Json<AuthForm>,
) -> Result<Json<SessionResponse>, AppError> {
    authenticate(&state, AuthMode::Register, form).await.map(Json)
}

pub async fn logout(State(state): State<AppState>) -> Result<Json<SessionResponse>, AppError> {
    let mut tracker = state.tracker.lock().await;
    tracker.logout();
    persist_session(&state.data_path, &PersistedSession::default()).await?;
    Ok(Json(to_session_response(&tracker)))
}

pub async fn select_tab(
    State(state): State<AppState>,
    Json(payload): Json<TabRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let mut tracker = state.tracker.lock().await;
    tracker.select_tab(payload.tab)?;
    Ok(Json(to_session_response(&tracker)))
}

pub async fn list_moods(State(state): State<AppState>) -> Result<Json<MoodsResponse>, AppError> {
    let tracker = state.tracker.lock().await;
    tracker.require_user()?;
    Ok(Json(to_moods_response(&tracker)))
}

pub async fn submit_mood(
    State(state): State<AppState>,
    Json(form): Json<MoodForm>,
) -> Result<Json<MoodsResponse>, AppError> {
    let draft = state.tracker.lock().await.begin_mood_submit(form)?;

    let task = tokio::spawn(async move {
        let entry = state.services.moods.save(draft, today()).await;
        let mut tracker = state.tracker.lock().await;
        tracker.complete_mood_submit(entry)?;
        Ok::<_, AppError>(to_moods_response(&tracker))
    });
    finish(task).await.map(Json)
}

pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let tracker = state.tracker.lock().await;
    tracker.require_user()?;
    Ok(Json(build_dashboard(tracker.moods().entries())))
}

pub async fn get_analytics(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let tracker = state.tracker.lock().await;
    tracker.require_user()?;
    Ok(Json(build_analytics(tracker.moods().entries())))
}

pub async fn get_quote(State(state): State<AppState>) -> Result<Json<QuoteResponse>, AppError> {
    let tracker = state.tracker.lock().await;
    tracker.require_user()?;
    Ok(Json(QuoteResponse {
        quote: tracker.quote().to_string(),
    }))
}

pub async fn refresh_quote(
    State(state): State<AppState>,
) -> Result<Json<QuoteResponse>, AppError> {
    let mut tracker = state.tracker.lock().await;
    let quote = tracker.refresh_quote(state.services.quotes.as_ref())?;
    Ok(Json(QuoteResponse {
        quote: quote.to_string(),
    }))
}

pub async fn get_chat(State(state): State<AppState>) -> Result<Json<ChatResponse>, AppError> {
    let tracker = state.tracker.lock().await;
    tracker.require_user()?;
    Ok(Json(to_chat_response(&tracker)))
}

pub async fn send_chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    {
        let mut tracker = state.tracker.lock().await;
        if !tracker.send_chat(&payload.message, Utc::now())? {
            return Ok(Json(to_chat_response(&tracker)));
        }
    }

    let task = tokio::spawn(async move {
        let reply = state.services.assistant.reply(&payload.message).await;
        let mut tracker = state.tracker.lock().await;
        tracker.deliver_reply(reply, Utc::now())?;
        Ok::<_, AppError>(to_chat_response(&tracker))
    });
    finish(task).await.map(Json)
}

async fn authenticate(
    state: &AppState,
    mode: AuthMode,
    form: AuthForm,
) -> Result<SessionResponse, AppError> {
    let credentials = form.validate(mode)?;
    state.tracker.lock().await.begin_auth()?;

    let state = state.clone();
    let task = tokio::spawn(async move {
        let profile = state.services.auth.authenticate(&credentials).await;
        let mut tracker = state.tracker.lock().await;
        tracker.complete_auth(profile)?;
        if let Err(err) = persist_session(&state.data_path, &PersistedSession::signed_in()).await {
            warn!("could not store auth token, signing out: {}", err.message);
            tracker.logout();
            return Err(err);
        }
        Ok::<_, AppError>(to_session_response(&tracker))
    });
    finish(task).await
}

/// Awaits a detached collaborator task. The tracker update inside the task
/// runs to completion even when this future is dropped.
async fn finish<T>(task: JoinHandle<Result<T, AppError>>) -> Result<T, AppError> {
    task.await.map_err(AppError::internal)?
}

fn to_session_response(tracker: &Tracker) -> SessionResponse {
    SessionResponse {
        status: tracker.session().status(),
        user: tracker.session().user().cloned(),
        active_tab: tracker.active_tab(),
    }
}

fn to_moods_response(tracker: &Tracker) -> MoodsResponse {
    MoodsResponse {
        entries: tracker.moods().entries().to_vec(),
        form: tracker.mood_form().clone(),
        pending: tracker.moods().is_pending(),
    }
}

fn to_chat_response(tracker: &Tracker) -> ChatResponse {
    ChatResponse {
        messages: tracker.chat().messages().to_vec(),
        awaiting_reply: tracker.chat().is_awaiting_reply(),
    }
}

/// Entry dates follow the UTC calendar day.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Delays;
    use crate::models::SessionStatus;
    use crate::services::Collaborators;
    use std::time::Duration;
    use tokio::time::{sleep, timeout};

    const DELAY: Duration = Duration::from_millis(100);

    fn app_state(name: &str, persisted: &PersistedSession) -> AppState {
        let mut path = std::env::temp_dir();
        path.push(format!("mood_logger_handlers_{}_{name}.json", std::process::id()));
        let delays = Delays {
            auth: DELAY,
            submit: DELAY,
            chat: DELAY,
        };
        AppState::new(path, Tracker::new(persisted), Collaborators::simulated(delays))
    }

    fn chat(message: &str) -> Json<ChatRequest> {
        Json(ChatRequest {
            message: message.to_string(),
        })
    }

    fn mood(value: &str) -> Json<MoodForm> {
        Json(MoodForm {
            mood: value.into(),
            energy: value.into(),
            activity: "Work".into(),
            sleep: value.into(),
            notes: String::new(),
        })
    }

    #[tokio::test]
    async fn abandoned_chat_request_still_gets_its_reply() {
        let state = app_state("chat", &PersistedSession::signed_in());

        let cut_short = timeout(
            Duration::from_millis(10),
            send_chat(State(state.clone()), chat("hello")),
        )
        .await;
        assert!(cut_short.is_err());
        sleep(DELAY * 3).await;

        let Json(before) = get_chat(State(state.clone())).await.unwrap();
        assert_eq!(before.messages.len(), 2);
        assert!(!before.awaiting_reply);

        let Json(after) = send_chat(State(state), chat("again")).await.unwrap();
        assert_eq!(after.messages.len(), 4);
    }

    #[tokio::test]
    async fn abandoned_mood_submit_still_lands() {
        let state = app_state("mood", &PersistedSession::signed_in());

        let cut_short = timeout(
            Duration::from_millis(10),
            submit_mood(State(state.clone()), mood("6")),
        )
        .await;
        assert!(cut_short.is_err());
        sleep(DELAY * 3).await;

        let Json(settled) = list_moods(State(state.clone())).await.unwrap();
        assert_eq!(settled.entries.len(), 8);
        assert!(!settled.pending);

        let Json(after) = submit_mood(State(state), mood("7")).await.unwrap();
        assert_eq!(after.entries.len(), 9);
        assert_eq!(after.entries.last().map(|e| e.date), Some(today()));
    }

    #[tokio::test]
    async fn abandoned_login_still_signs_in() {
        let state = app_state("login", &PersistedSession::default());
        let form = AuthForm {
            email: "ana@example.com".into(),
            password: "pw".into(),
            name: String::new(),
        };

        let cut_short = timeout(
            Duration::from_millis(10),
            login(State(state.clone()), Json(form)),
        )
        .await;
        assert!(cut_short.is_err());
        sleep(DELAY * 3).await;

        let Json(session) = get_session(State(state.clone())).await;
        assert_eq!(session.status, SessionStatus::LoggedIn);
        let _ = tokio::fs::remove_file(&state.data_path).await;
    }

    #[tokio::test]
    async fn signed_out_index_shows_default_quote() {
        let state = app_state("index", &PersistedSession::signed_in());
        refresh_quote(State(state.clone())).await.unwrap();
        logout(State(state.clone())).await.unwrap();

        let Html(page) = index(State(state.clone())).await;
        assert!(page.contains("Steve Jobs"));
        assert!(!page.contains("Churchill"));
        let _ = tokio::fs::remove_file(&state.data_path).await;
    }
}
