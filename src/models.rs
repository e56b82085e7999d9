use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type PaletteMap = BTreeMap<String, Vec<String>>;

pub const DEFAULT_PALETTE: [&str; 5] = ["#c6e48b", "#7bc96f", "#49af5d", "#2e8840", "#196127"];

/// A single dated value plotted on the calendar.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub content: String,
}

/// Either the name of a stored palette or a full set of palettes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Colors {
    Named(String),
    Palettes(PaletteMap),
}

/// Per-call overrides. Anything left out falls back to [`CalendarSettings`].
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CalendarData {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub colors: Option<Colors>,
    #[serde(default)]
    pub entries: Vec<Entry>,
    pub show_current_day_border: Option<bool>,
    pub default_entry_intensity: Option<f64>,
    pub intensity_scale_start: Option<f64>,
    pub intensity_scale_end: Option<f64>,
}

/// Persisted defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CalendarSettings {
    /// `None` renders the current year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub colors: PaletteMap,
    pub entries: Vec<Entry>,
    pub show_current_day_border: bool,
    pub default_entry_intensity: f64,
    pub intensity_scale_start: f64,
    pub intensity_scale_end: f64,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        let mut colors = PaletteMap::new();
        colors.insert(
            "default".to_string(),
            DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        );

        Self {
            year: None,
            start_date: None,
            end_date: None,
            colors,
            entries: vec![Entry {
                date: "1900-01-01".to_string(),
                intensity: Some(5.0),
                color: "#7bc96f".to_string(),
                content: String::new(),
            }],
            show_current_day_border: true,
            default_entry_intensity: 4.0,
            intensity_scale_start: 1.0,
            intensity_scale_end: 5.0,
        }
    }
}

/// Render descriptor for one grid cell.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DayBox {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub class_names: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MonthHeader {
    pub label: String,
    pub year: i32,
    pub month: u32,
    /// Week column holding the month's first displayed day.
    pub column: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCalendar {
    pub year: i32,
    pub year_label: String,
    pub start_date: String,
    pub end_date: String,
    pub months: Vec<MonthHeader>,
    pub weekdays: Vec<String>,
    pub boxes: Vec<DayBox>,
}

#[derive(Debug, Deserialize, Default)]
pub struct IndexQuery {
    pub year: Option<i32>,
}
