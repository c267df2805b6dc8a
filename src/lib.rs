pub mod analytics;
pub mod app;
pub mod chat;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod mood_log;
pub mod quotes;
pub mod services;
pub mod session;
pub mod state;
pub mod storage;
pub mod tracker;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{load_session, resolve_data_path};
pub use tracker::Tracker;
