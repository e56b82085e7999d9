use crate::dates::{
    WEEKDAY_LABELS, days_between, last_day_of_month, leading_empty_days, month_label,
    month_range, parse_date, year_label, year_range,
};
use crate::errors::CalendarError;
use crate::intensity::IntensityScale;
use crate::models::{CalendarData, CalendarSettings, DayBox, Entry, HeatmapCalendar, MonthHeader};
use crate::palette;
use chrono::{Datelike, Duration, Local, NaiveDate};
use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use tracing::{debug, warn};

/// Longest range a single grid may cover.
pub const MAX_SPAN_DAYS: i64 = 3660;

const DAYS_PER_WEEK: usize = 7;

pub fn build_calendar(
    settings: &CalendarSettings,
    data: &CalendarData,
) -> Result<HeatmapCalendar, CalendarError> {
    build_calendar_at(Local::now().date_naive(), settings, data)
}

pub fn build_calendar_at(
    today: NaiveDate,
    settings: &CalendarSettings,
    data: &CalendarData,
) -> Result<HeatmapCalendar, CalendarError> {
    let (year, start, end) = resolve_range(today, settings, data)?;

    let palettes = palette::resolve(data.colors.as_ref(), &settings.colors);
    palette::validate(&palettes)?;

    let entries = entries_in_range(&data.entries, start, end);

    let scale = IntensityScale::from_intensities(
        entries
            .iter()
            .filter_map(|(_, entry)| entry.intensity)
            .filter(|value| *value != 0.0),
        IntensityScale {
            start: settings.intensity_scale_start,
            end: settings.intensity_scale_end,
        },
        data.intensity_scale_start,
        data.intensity_scale_end,
    );
    let default_intensity = data
        .default_entry_intensity
        .unwrap_or(settings.default_entry_intensity);
    let show_today = data
        .show_current_day_border
        .unwrap_or(settings.show_current_day_border);

    // Later entries for the same day replace earlier ones.
    let by_offset: BTreeMap<i64, &Entry> = entries
        .iter()
        .map(|(date, entry)| (days_between(start, *date), *entry))
        .collect();

    let leading = leading_empty_days(start);
    let span = days_between(start, end) + 1;
    let mut boxes = Vec::with_capacity(leading + span as usize);
    boxes.extend((0..leading).map(|_| DayBox {
        background_color: Some("transparent".to_string()),
        ..DayBox::default()
    }));

    for offset in 0..span {
        let date = start + Duration::days(offset);
        let mut day = DayBox::default();

        if show_today && date == today {
            day.class_names.push("today".to_string());
        }

        match by_offset.get(&offset) {
            Some(entry) => {
                day.class_names.push("hasData".to_string());
                day.date = Some(date_key(date));
                if !entry.content.is_empty() {
                    day.content = Some(entry.content.clone());
                }

                let intensity = entry.intensity.unwrap_or(default_intensity);
                day.background_color = palette::palette_for(&palettes, &entry.color)
                    .and_then(|colors| {
                        let shades = NonZeroUsize::new(colors.len())?;
                        palette::shade_color(colors, scale.shade(intensity, shades))
                    })
                    .map(str::to_string);
            }
            None => day.class_names.push("isEmpty".to_string()),
        }

        boxes.push(day);
    }

    debug!(
        %start,
        %end,
        entries = by_offset.len(),
        boxes = boxes.len(),
        "built heatmap calendar"
    );

    Ok(HeatmapCalendar {
        year,
        year_label: year_label(year),
        start_date: date_key(start),
        end_date: date_key(end),
        months: month_headers(start, end, leading),
        weekdays: WEEKDAY_LABELS.iter().map(|d| d.to_string()).collect(),
        boxes,
    })
}

/// Checks that stored settings on their own resolve to a renderable grid.
pub(crate) fn validate_settings(
    today: NaiveDate,
    settings: &CalendarSettings,
) -> Result<(), CalendarError> {
    palette::validate(&settings.colors)?;
    resolve_range(today, settings, &CalendarData::default()).map(|_| ())
}

/// Resolves the displayed year and the inclusive date range.
///
/// A month override wins, then an explicit start/end from the call, then a bare year from the
/// call, then the stored start/end. Missing ends default to the bounds of the resolved year.
fn resolve_range(
    today: NaiveDate,
    settings: &CalendarSettings,
    data: &CalendarData,
) -> Result<(i32, NaiveDate, NaiveDate), CalendarError> {
    let call_start = parse_optional(data.start_date.as_deref())?;
    let call_end = parse_optional(data.end_date.as_deref())?;
    let has_call_range = call_start.is_some() || call_end.is_some();

    let (stored_start, stored_end) = if has_call_range || data.year.is_some() {
        (None, None)
    } else {
        (
            parse_optional(settings.start_date.as_deref())?,
            parse_optional(settings.end_date.as_deref())?,
        )
    };

    let year = data
        .year
        .or(call_start.map(|date| date.year()))
        .or(call_end.map(|date| date.year()))
        .or(stored_start.map(|date| date.year()))
        .or(stored_end.map(|date| date.year()))
        .or(settings.year)
        .unwrap_or(today.year());

    let (start, end) = match data.month {
        Some(month) => {
            if !(1..=12).contains(&month) {
                return Err(CalendarError::InvalidMonth(month));
            }
            month_range(year, month).ok_or(CalendarError::InvalidYear(year))?
        }
        None => {
            let (year_start, year_end) = year_range(year).ok_or(CalendarError::InvalidYear(year))?;
            (
                call_start.or(stored_start).unwrap_or(year_start),
                call_end.or(stored_end).unwrap_or(year_end),
            )
        }
    };

    if start > end {
        return Err(CalendarError::InvalidRange {
            start: date_key(start),
            end: date_key(end),
        });
    }
    let span = days_between(start, end) + 1;
    if span > MAX_SPAN_DAYS {
        return Err(CalendarError::RangeTooLarge(span));
    }

    Ok((year, start, end))
}

fn parse_optional(value: Option<&str>) -> Result<Option<NaiveDate>, CalendarError> {
    value.map(parse_date).transpose()
}

fn entries_in_range(entries: &[Entry], start: NaiveDate, end: NaiveDate) -> Vec<(NaiveDate, &Entry)> {
    entries
        .iter()
        .filter_map(|entry| match parse_date(&entry.date) {
            Ok(date) => Some((date, entry)),
            Err(err) => {
                warn!("skipping calendar entry: {err}");
                None
            }
        })
        .filter(|(date, _)| *date >= start && *date <= end)
        .collect()
}

/// One header per month touching the range, placed in the week column of its first shown day.
fn month_headers(start: NaiveDate, end: NaiveDate, leading: usize) -> Vec<MonthHeader> {
    let mut headers = Vec::new();
    let mut cursor = start;

    loop {
        let offset = days_between(start, cursor) as usize;
        headers.push(MonthHeader {
            label: month_label(cursor.month()).to_string(),
            year: cursor.year(),
            month: cursor.month(),
            column: (leading + offset) / DAYS_PER_WEEK,
        });

        let next = last_day_of_month(cursor.year(), cursor.month()).and_then(|last| last.succ_opt());
        match next {
            Some(next) if next <= end => cursor = next,
            _ => break,
        }
    }

    headers
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
