//! Best-effort reading of free-text Italian deadlines.
//!
//! Recognised shapes are the long form (`31 dicembre 2026`), the slash form (`31/12/2026`) and,
//! as a last resort, a bare year. Anything else is treated as still open.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::DeadlineKind;

/// Phrases marking recurring or open-ended deadlines. They win over any date in the same text.
const NEVER_EXPIRES: &[&str] = &[
    "in vigore",
    "permanente",
    "erogazione automatica",
    "entro 60 giorni",
    "bando",
    "per arretrati",
    "esaurimento fondi",
    "annuale",
];

const MONTHS: [&str; 12] = [
    "gennaio",
    "febbraio",
    "marzo",
    "aprile",
    "maggio",
    "giugno",
    "luglio",
    "agosto",
    "settembre",
    "ottobre",
    "novembre",
    "dicembre",
];

static LONG_FORM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(\d{1,2})\s+(gennaio|febbraio|marzo|aprile|maggio|giugno|luglio|agosto|settembre|ottobre|novembre|dicembre)\s+(\d{4})",
    )
    .expect("long-form date pattern compiles")
});

static SLASH_FORM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{2})/(\d{2})/(\d{4})").expect("slash date pattern compiles"));

static BARE_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(20\d{2})\b").expect("year pattern compiles"));

fn never_expires(lower: &str) -> bool {
    NEVER_EXPIRES.iter().any(|phrase| lower.contains(phrase))
}

fn month_number(name: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|month| *month == name)
        .and_then(|index| u32::try_from(index + 1).ok())
}

fn long_form(lower: &str) -> Option<NaiveDate> {
    let captures = LONG_FORM.captures(lower)?;
    let day = captures[1].parse().ok()?;
    let month = month_number(&captures[2])?;
    let year = captures[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn slash_form(text: &str) -> Option<NaiveDate> {
    let captures = SLASH_FORM.captures(text)?;
    let day = captures[1].parse().ok()?;
    let month = captures[2].parse().ok()?;
    let year = captures[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// First calendar date found in the text, long form before slash form.
/// Impossible dates such as `31 febbraio 2026` are skipped.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let lower = text.to_lowercase();
    long_form(&lower).or_else(|| slash_form(text))
}

fn end_of_day(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(23, 59, 59)
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Whether the deadline described by `text` has passed at `now`.
pub fn is_expired(text: &str, now: DateTime<Utc>) -> bool {
    let lower = text.trim().to_lowercase();
    if lower.is_empty() || never_expires(&lower) {
        return false;
    }

    if let Some(cutoff) = parse_date(&lower).and_then(end_of_day) {
        return now > cutoff;
    }

    BARE_YEAR
        .captures(&lower)
        .and_then(|captures| captures[1].parse::<i32>().ok())
        .map_or(false, |year| year < now.year())
}

/// Classify a deadline string for the `tipo_scadenza` field.
pub fn classify(text: &str) -> DeadlineKind {
    let lower = text.trim().to_lowercase();
    if lower.is_empty() {
        DeadlineKind::Permanente
    } else if lower.contains("esaurimento") {
        DeadlineKind::EsaurimentoFondi
    } else if lower.contains("bando") {
        DeadlineKind::BandoAnnuale
    } else if never_expires(&lower) {
        DeadlineKind::Permanente
    } else if parse_date(&lower).is_some() {
        DeadlineKind::DataFissa
    } else {
        DeadlineKind::Permanente
    }
}
