use crate::models::CalendarSettings;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub settings_path: PathBuf,
    pub settings: Arc<Mutex<CalendarSettings>>,
}

impl AppState {
    pub fn new(settings_path: PathBuf, settings: CalendarSettings) -> Self {
        Self {
            settings_path,
            settings: Arc::new(Mutex::new(settings)),
        }
    }
}
