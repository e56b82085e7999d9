use crate::models::{DayBox, HeatmapCalendar};
use std::fmt::Write;

/// The calendar grid as an HTML fragment, ready to drop into a page.
pub fn render_calendar(calendar: &HeatmapCalendar) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"heatmap-calendar-graph\">");
    let _ = write!(
        html,
        "<div class=\"heatmap-calendar-year\">{}</div>",
        html_escape(&calendar.year_label)
    );

    html.push_str("<ul class=\"heatmap-calendar-months\">");
    for month in &calendar.months {
        let _ = write!(
            html,
            "<li style=\"grid-column-start: {};\">{}</li>",
            month.column + 1,
            html_escape(&month.label)
        );
    }
    html.push_str("</ul>");

    html.push_str("<ul class=\"heatmap-calendar-days\">");
    for day in &calendar.weekdays {
        let _ = write!(html, "<li>{}</li>", html_escape(day));
    }
    html.push_str("</ul>");

    html.push_str("<ul class=\"heatmap-calendar-boxes\">");
    for day in &calendar.boxes {
        render_box(&mut html, day);
    }
    html.push_str("</ul></div>");
    html
}

fn render_box(html: &mut String, day: &DayBox) {
    html.push_str("<li");
    if let Some(color) = &day.background_color {
        let _ = write!(html, " style=\"background-color: {};\"", html_escape(color));
    }
    if let Some(date) = &day.date {
        let _ = write!(html, " data-date=\"{}\"", html_escape(date));
    }
    if !day.class_names.is_empty() {
        let _ = write!(html, " class=\"{}\"", html_escape(&day.class_names.join(" ")));
    }
    let _ = write!(
        html,
        "><span class=\"heatmap-calendar-content\">{}</span></li>",
        html_escape(day.content.as_deref().unwrap_or_default())
    );
}

pub fn render_index(calendar: &HeatmapCalendar) -> String {
    INDEX_HTML
        .replace("{{YEAR}}", &calendar.year.to_string())
        .replace("{{RANGE}}", &format!("{} to {}", calendar.start_date, calendar.end_date))
        .replace("{{CALENDAR}}", &render_calendar(calendar))
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Heatmap Calendar {{YEAR}}</title>
  <style>
    :root {
      --bg: #f8f3e6;
      --ink: #2b2a28;
      --card: rgba(255, 255, 255, 0.9);
      --empty: #ebedf0;
      --today: #ff6b4a;
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1040px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 20px;
      overflow-x: auto;
    }

    h1 {
      margin: 0;
      font-size: 1.8rem;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
    }

    .heatmap-calendar-graph {
      display: grid;
      grid-template-columns: auto 1fr;
      grid-template-areas:
        "year months"
        "days boxes";
      gap: 4px 8px;
      font-size: 0.7rem;
    }

    .heatmap-calendar-graph ul {
      list-style: none;
      margin: 0;
      padding: 0;
    }

    .heatmap-calendar-year {
      grid-area: year;
      font-weight: 600;
    }

    .heatmap-calendar-months {
      grid-area: months;
      display: grid;
      grid-auto-columns: 14px;
      grid-auto-flow: column;
      gap: 3px;
    }

    .heatmap-calendar-months li {
      grid-row: 1;
      white-space: nowrap;
    }

    .heatmap-calendar-days {
      grid-area: days;
      display: grid;
      grid-template-rows: repeat(7, 14px);
      gap: 3px;
    }

    .heatmap-calendar-boxes {
      grid-area: boxes;
      display: grid;
      grid-template-rows: repeat(7, 14px);
      grid-auto-columns: 14px;
      grid-auto-flow: column;
      gap: 3px;
    }

    .heatmap-calendar-boxes li {
      position: relative;
      border-radius: 3px;
      background-color: var(--empty);
    }

    .heatmap-calendar-boxes li.today {
      border: 2px solid var(--today);
    }

    .heatmap-calendar-content {
      display: none;
    }

    .heatmap-calendar-boxes li.hasData:hover .heatmap-calendar-content {
      display: block;
      position: absolute;
      top: 16px;
      left: 0;
      z-index: 1;
      padding: 4px 8px;
      border-radius: 6px;
      background: white;
      box-shadow: var(--shadow);
      white-space: nowrap;
    }

    .heatmap-calendar-content:empty {
      display: none !important;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Heatmap Calendar</h1>
      <p class="subtitle">{{RANGE}}</p>
    </header>
    {{CALENDAR}}
  </main>
</body>
</html>
"#;
