pub mod app;
pub mod calendar;
pub mod dates;
pub mod errors;
pub mod handlers;
pub mod intensity;
pub mod models;
pub mod palette;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use calendar::{build_calendar, build_calendar_at};
pub use state::AppState;
pub use storage::{load_settings, resolve_settings_path};
