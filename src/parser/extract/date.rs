use chrono::{NaiveDate, NaiveTime};
use tracing::warn;

/// Canonical form of a raw date token: `DD/MM/YY` plus an epoch-millisecond
/// timestamp usable as a sort key. Unparseable tokens keep the raw string and
/// sort as 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDate {
    pub formatted: String,
    pub sortable_ms: i64,
}

/// Normalize a raw date token. Formats are attempted in order; the first one
/// producing a real calendar date wins (Feb 30 and friends are rejected by the
/// attempt and fall through to the next format).
pub fn normalize(token: &str) -> NormalizedDate {
    const ATTEMPTS: &[fn(&str) -> Option<NaiveDate>] =
        &[parse_dash_short_year, parse_slash, parse_iso];

    for attempt in ATTEMPTS {
        if let Some(date) = attempt(token) {
            return NormalizedDate {
                formatted: date.format("%d/%m/%y").to_string(),
                sortable_ms: date.and_time(NaiveTime::MIN).and_utc().timestamp_millis(),
            };
        }
    }

    warn!(
        "No se pudo parsear la fecha: \"{}\". Usando la cadena original.",
        token
    );
    NormalizedDate {
        formatted: token.to_string(),
        sortable_ms: 0,
    }
}

/// `DD-MM-YY`. Two-digit years split at 70: 00–69 map to 2000–2069, 70–99 to
/// 1970–1999. The threshold is load-bearing for all affected dates and must
/// not change.
fn parse_dash_short_year(token: &str) -> Option<NaiveDate> {
    let (day, month, year) = three_parts(token, '-')?;
    let year = if year < 70 { 2000 + year } else { 1900 + year };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// `DD/MM/YYYY` or `D/M/YYYY`, year taken literally.
fn parse_slash(token: &str) -> Option<NaiveDate> {
    let (day, month, year) = three_parts(token, '/')?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// `YYYY-MM-DD`, only when the first component is exactly 4 digits.
fn parse_iso(token: &str) -> Option<NaiveDate> {
    if token.split('-').next().map(str::len) != Some(4) {
        return None;
    }
    let (year, month, day) = three_parts(token, '-')?;
    NaiveDate::from_ymd_opt(year as i32, month, u32::try_from(day).ok()?)
}

fn three_parts(token: &str, sep: char) -> Option<(u32, u32, i32)> {
    let parts: Vec<&str> = token.split(sep).collect();
    if parts.len() != 3 {
        return None;
    }
    let first = parts[0].parse::<u32>().ok()?;
    let second = parts[1].parse::<u32>().ok()?;
    let third = parts[2].parse::<i32>().ok()?;
    Some((first, second, third))
}

// ── Tests ──
