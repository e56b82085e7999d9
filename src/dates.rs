use crate::errors::CalendarError;
use chrono::{Datelike, NaiveDate};

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Whole days from `start` to `end`; negative when `end` comes first.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

pub fn month_range(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    Some((first, last_day_of_month(year, month)?))
}

pub fn year_range(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    Some((
        NaiveDate::from_ymd_opt(year, 1, 1)?,
        NaiveDate::from_ymd_opt(year, 12, 31)?,
    ))
}

/// Blank cells needed before `date` so that it lands in its row of a Monday-first grid.
pub fn leading_empty_days(date: NaiveDate) -> usize {
    (date.weekday().num_days_from_sunday() as usize + 6) % 7
}

pub fn parse_date(value: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| CalendarError::InvalidDate(value.to_string()))
}

pub fn month_label(month: u32) -> &'static str {
    MONTH_LABELS[(month.clamp(1, 12) - 1) as usize]
}

/// Last two digits of the year, as shown in the corner of the grid.
pub fn year_label(year: i32) -> String {
    format!("{:02}", year.rem_euclid(100))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn days_between_spans_years() {
        assert_eq!(days_between(ymd(2023, 1, 1), ymd(2023, 1, 1)), 0);
        assert_eq!(days_between(ymd(2023, 12, 31), ymd(2024, 1, 1)), 1);
        assert_eq!(days_between(ymd(2023, 1, 1), ymd(2025, 1, 1)), 731);
        assert_eq!(days_between(ymd(2023, 1, 2), ymd(2023, 1, 1)), -1);
    }

    #[test]
    fn last_day_of_month_handles_february_and_december() {
        assert_eq!(last_day_of_month(2023, 2), Some(ymd(2023, 2, 28)));
        assert_eq!(last_day_of_month(2024, 2), Some(ymd(2024, 2, 29)));
        assert_eq!(last_day_of_month(2023, 12), Some(ymd(2023, 12, 31)));
        assert_eq!(last_day_of_month(2023, 13), None);
    }

    #[test]
    fn month_and_year_ranges() {
        assert_eq!(month_range(2024, 4), Some((ymd(2024, 4, 1), ymd(2024, 4, 30))));
        assert_eq!(month_range(2024, 0), None);
        assert_eq!(year_range(2022), Some((ymd(2022, 1, 1), ymd(2022, 12, 31))));
    }

    #[test]
    fn leading_empty_days_is_monday_first() {
        // 2024-01-01 was a Monday, 2023-01-01 a Sunday, 2022-01-01 a Saturday.
        assert_eq!(leading_empty_days(ymd(2024, 1, 1)), 0);
        assert_eq!(leading_empty_days(ymd(2023, 1, 1)), 6);
        assert_eq!(leading_empty_days(ymd(2022, 1, 1)), 5);
        assert_eq!(leading_empty_days(ymd(2025, 1, 1)), 2);
    }

    #[test]
    fn parse_date_accepts_iso_days_only() {
        assert_eq!(parse_date(" 2024-02-29 "), Ok(ymd(2024, 2, 29)));
        assert_eq!(
            parse_date("2023-02-29"),
            Err(CalendarError::InvalidDate("2023-02-29".to_string()))
        );
        assert!(parse_date("29/02/2024").is_err());
    }

    #[test]
    fn labels() {
        assert_eq!(month_label(1), "Jan");
        assert_eq!(month_label(12), "Dec");
        assert_eq!(year_label(2022), "22");
        assert_eq!(year_label(2005), "05");
    }
}
