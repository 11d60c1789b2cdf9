//! Record filter engine.
//!
//! Pure, single-pass filtering of already-fetched punches by time window and
//! optional employee. The input is assumed sorted newest-first by the store;
//! relative order is preserved and nothing is re-sorted here.
//!
//! The reference instant (and with it the timezone used for calendar
//! comparisons) is an explicit argument so the engine stays deterministic
//! and testable; only the CLI boundary passes `Local::now()`.

use crate::models::punch::Punch;
use crate::models::window::Window;
use chrono::{DateTime, Datelike, Duration, NaiveTime, TimeZone};

pub fn filter_punches<Tz: TimeZone>(
    punches: &[Punch],
    window: Window,
    employee_id: Option<&str>,
    now: &DateTime<Tz>,
) -> Vec<Punch> {
    // An empty selector means "all employees".
    let employee = employee_id.filter(|id| !id.is_empty());

    punches
        .iter()
        .filter(|p| in_window(p, window, now))
        .filter(|p| employee.is_none_or(|id| p.employee_id == id))
        .cloned()
        .collect()
}

fn in_window<Tz: TimeZone>(punch: &Punch, window: Window, now: &DateTime<Tz>) -> bool {
    let local = punch.timestamp.with_timezone(&now.timezone());

    match window {
        Window::All => true,
        Window::Today => local.date_naive() == now.date_naive(),
        Window::Week => {
            // Week starts on the most recent Sunday, at midnight local time.
            // Future-dated punches beyond `now` are excluded.
            let days_back = now.weekday().num_days_from_sunday() as i64;
            let week_start =
                (now.date_naive() - Duration::days(days_back)).and_time(NaiveTime::MIN);
            let t = local.naive_local();
            t >= week_start && t <= now.naive_local()
        }
        Window::Month => local.year() == now.year() && local.month() == now.month(),
        Window::Year => local.year() == now.year(),
    }
}
