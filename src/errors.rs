use axum::http::StatusCode;
use thiserror::Error;

/// Failures while resolving a calendar request against the stored settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),
    #[error("year {0} is out of range")]
    InvalidYear(i32),
    #[error("start date {start} is after end date {end}")]
    InvalidRange { start: String, end: String },
    #[error("date range spans {0} days, more than the supported maximum")]
    RangeTooLarge(i64),
    #[error("palette {0:?} has no colors")]
    EmptyPalette(String),
    #[error("no color palettes configured")]
    NoPalettes,
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl From<CalendarError> for AppError {
    fn from(err: CalendarError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
