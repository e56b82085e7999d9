use crate::calendar::{build_calendar, validate_settings};
use crate::errors::AppError;
use crate::models::{CalendarData, CalendarSettings, HeatmapCalendar, IndexQuery};
use crate::state::AppState;
use crate::storage::persist_settings;
use crate::ui::{render_calendar, render_index};
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::Local;
use tracing::info;

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Result<Html<String>, AppError> {
    let settings = state.settings.lock().await;
    let data = CalendarData {
        year: query.year,
        entries: settings.entries.clone(),
        ..CalendarData::default()
    };
    let calendar = build_calendar(&settings, &data)?;
    Ok(Html(render_index(&calendar)))
}

pub async fn calendar_json(
    State(state): State<AppState>,
    Json(data): Json<CalendarData>,
) -> Result<Json<HeatmapCalendar>, AppError> {
    let settings = state.settings.lock().await;
    Ok(Json(build_calendar(&settings, &data)?))
}

pub async fn calendar_html(
    State(state): State<AppState>,
    Json(data): Json<CalendarData>,
) -> Result<Html<String>, AppError> {
    let settings = state.settings.lock().await;
    let calendar = build_calendar(&settings, &data)?;
    Ok(Html(render_calendar(&calendar)))
}

pub async fn get_settings(State(state): State<AppState>) -> Json<CalendarSettings> {
    Json(state.settings.lock().await.clone())
}

pub async fn put_settings(
    State(state): State<AppState>,
    Json(updated): Json<CalendarSettings>,
) -> Result<Json<CalendarSettings>, AppError> {
    validate_settings(Local::now().date_naive(), &updated)?;

    let mut settings = state.settings.lock().await;
    persist_settings(&state.settings_path, &updated).await?;
    *settings = updated;
    info!("saved settings to {}", state.settings_path.display());

    Ok(Json(settings.clone()))
}
