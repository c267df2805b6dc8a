use crate::services::Collaborators;
use crate::tracker::Tracker;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub tracker: Arc<Mutex<Tracker>>,
    pub services: Collaborators,
}

impl AppState {
    pub fn new(data_path: PathBuf, tracker: Tracker, services: Collaborators) -> Self {
        Self {
            data_path,
            tracker: Arc::new(Mutex::new(tracker)),
            services,
        }
    }
}
