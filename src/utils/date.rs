use chrono::{DateTime, Local, TimeZone, Utc};

pub fn now_local() -> DateTime<Local> {
    Local::now()
}

/// Render a UTC instant in the caller's timezone with the given format.
pub fn format_in_zone<Tz: TimeZone>(ts: DateTime<Utc>, tz: &Tz, fmt: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.with_timezone(tz).format(fmt).to_string()
}

/// "Today" or the weekday name, relative to `now`. Mirrors the day label
/// shown next to each record.
pub fn day_label<Tz: TimeZone>(ts: DateTime<Utc>, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let local = ts.with_timezone(&now.timezone());
    if local.date_naive() == now.date_naive() {
        "Today".to_string()
    } else {
        local.format("%A").to_string()
    }
}
