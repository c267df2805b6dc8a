use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub const DEMO_TOKEN: &str = "demo-token";

/// What survives a restart: only whether someone was signed in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    #[serde(rename = "authToken", default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

impl PersistedSession {
    pub fn signed_in() -> Self {
        Self {
            auth_token: Some(DEMO_TOKEN.to_string()),
        }
    }
}

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/session.json")
}

pub async fn load_session(path: &Path) -> PersistedSession {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(session) => session,
            Err(err) => {
                error!("failed to parse session file: {err}");
                PersistedSession::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => PersistedSession::default(),
        Err(err) => {
            error!("failed to read session file: {err}");
            PersistedSession::default()
        }
    }
}

pub async fn persist_session(path: &Path, session: &PersistedSession) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(session).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("mood_logger_{}_{name}.json", std::process::id()));
        path
    }

    #[tokio::test]
    async fn missing_file_means_signed_out() {
        let session = load_session(&temp_path("missing")).await;
        assert_eq!(session, PersistedSession::default());
    }

    #[tokio::test]
    async fn token_survives_round_trip_under_auth_token_key() {
        let path = temp_path("round_trip");
        persist_session(&path, &PersistedSession::signed_in())
            .await
            .unwrap();

        let raw: serde_json::Value = serde_json::from_slice(&fs::read(&path).await.unwrap()).unwrap();
        assert_eq!(raw["authToken"], DEMO_TOKEN);
        assert_eq!(load_session(&path).await, PersistedSession::signed_in());

        persist_session(&path, &PersistedSession::default())
            .await
            .unwrap();
        assert_eq!(load_session(&path).await.auth_token, None);
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn corrupt_file_falls_back_to_signed_out() {
        let path = temp_path("corrupt");
        fs::write(&path, b"not json").await.unwrap();
        assert_eq!(load_session(&path).await, PersistedSession::default());
        let _ = fs::remove_file(&path).await;
    }
}
