//! iCalendar export of benefit deadlines.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::slugify;
use crate::matcher::deadline;

pub const CONTENT_TYPE: &str = "text/calendar; charset=utf-8";
pub const FILE_NAME: &str = "bonusperme-scadenze.ics";

/// One benefit selected for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarItem {
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(rename = "scadenza", default)]
    pub deadline: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    #[error("selezione bonus non valida: {0}")]
    MalformedSelection(#[from] serde_json::Error),
}

/// Decode the `bonuses` query parameter.
pub fn parse_selection(raw: &str) -> Result<Vec<CalendarItem>, CalendarError> {
    Ok(serde_json::from_str(raw)?)
}

/// Date used for the event: the parsed deadline, else 31 December of the current year.
pub fn event_date(deadline_text: &str, now: DateTime<Utc>) -> NaiveDate {
    deadline::parse_date(deadline_text)
        .or_else(|| NaiveDate::from_ymd_opt(now.year(), 12, 31))
        .unwrap_or_else(|| now.date_naive())
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

/// Render a calendar with one all-day event per named item. `None` when nothing is left to export.
pub fn render_ics(items: &[CalendarItem], now: DateTime<Utc>) -> Option<String> {
    let named: Vec<&CalendarItem> = items
        .iter()
        .filter(|item| !item.name.trim().is_empty())
        .collect();
    if named.is_empty() {
        return None;
    }

    let stamp = now.format("%Y%m%dT%H%M%SZ");
    let mut ics = String::new();
    ics.push_str("BEGIN:VCALENDAR\r\n");
    ics.push_str("VERSION:2.0\r\n");
    ics.push_str("PRODID:-//BonusPerMe//IT\r\n");
    ics.push_str("CALSCALE:GREGORIAN\r\n");
    ics.push_str("METHOD:PUBLISH\r\n");

    for item in named {
        let name = escape(item.name.trim());
        let start = event_date(&item.deadline, now);
        let end = start.checked_add_days(Days::new(1)).unwrap_or(start);

        ics.push_str(&format!(
            "BEGIN:VEVENT\r\n\
             UID:{uid}@bonusperme.it\r\n\
             DTSTAMP:{stamp}\r\n\
             DTSTART;VALUE=DATE:{start}\r\n\
             DTEND;VALUE=DATE:{end}\r\n\
             SUMMARY:Scadenza: {name}\r\n\
             DESCRIPTION:Ricorda di presentare domanda per {name} prima della scadenza. Verifica i requisiti su BonusPerMe.\r\n\
             BEGIN:VALARM\r\n\
             TRIGGER:-P7D\r\n\
             ACTION:DISPLAY\r\n\
             DESCRIPTION:Scadenza tra 7 giorni: {name}\r\n\
             END:VALARM\r\n\
             BEGIN:VALARM\r\n\
             TRIGGER:-P1D\r\n\
             ACTION:DISPLAY\r\n\
             DESCRIPTION:Scadenza domani: {name}\r\n\
             END:VALARM\r\n\
             END:VEVENT\r\n",
            uid = slugify(&item.name),
            start = start.format("%Y%m%d"),
            end = end.format("%Y%m%d"),
        ));
    }

    ics.push_str("END:VCALENDAR\r\n");
    Some(ics)
}
