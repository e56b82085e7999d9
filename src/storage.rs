use crate::errors::AppError;
use crate::models::CalendarSettings;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info};

pub fn resolve_settings_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("HEATMAP_SETTINGS_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/settings.json"))
}

/// Stored settings, or the defaults when the file is missing or unreadable.
pub async fn load_settings(path: &Path) -> CalendarSettings {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(settings) => settings,
            Err(err) => {
                error!("failed to parse settings file: {err}");
                CalendarSettings::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            info!("no settings at {}, using defaults", path.display());
            CalendarSettings::default()
        }
        Err(err) => {
            error!("failed to read settings file: {err}");
            CalendarSettings::default()
        }
    }
}

pub async fn persist_settings(path: &Path, settings: &CalendarSettings) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(settings).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
