use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post, put}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/session", get(handlers::get_session))
        .route("/api/login", post(handlers::login))
        .route("/api/register", post(handlers::register))
        .route("/api/logout", post(handlers::logout))
        .route("/api/tab", put(handlers::select_tab))
        .route("/api/moods", get(handlers::list_moods).post(handlers::submit_mood))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/analytics", get(handlers::get_analytics))
        .route("/api/quote", get(handlers::get_quote))
        .route("/api/quote/refresh", post(handlers::refresh_quote))
        .route("/api/chat", get(handlers::get_chat).post(handlers::send_chat))
        .with_state(state)
}
