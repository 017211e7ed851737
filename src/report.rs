//! Roster presentation: console lines and JSON export.

use std::fmt::Write as _;

use chrono::NaiveTime;

use crate::error::ShiftResult;
use crate::models::{AssignedShift, Roster};
use crate::source::END_OF_DAY;

/// Formats seconds since midnight as `HH:MM:SS`.
///
/// `24:00:00` is rendered for end of day; values outside a day fall back
/// to a raw second count.
pub fn format_time_of_day(seconds: i64) -> String {
    if seconds == END_OF_DAY {
        return "24:00:00".to_string();
    }
    u32::try_from(seconds)
        .ok()
        .and_then(|secs| NaiveTime::from_num_seconds_from_midnight_opt(secs, 0))
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| format!("{seconds}s"))
}

/// One console line for a shift.
pub fn format_shift(shift: &AssignedShift) -> String {
    format!(
        "Staff: {}, Work Day: {}, Start Hour: {}, End Hour: {}",
        shift.name,
        shift.day.index(),
        format_time_of_day(shift.start),
        format_time_of_day(shift.end)
    )
}

/// Renders the roster one shift per line.
pub fn render_text(roster: &Roster) -> String {
    let mut out = String::new();
    for shift in &roster.shifts {
        // infallible for String
        let _ = writeln!(out, "{}", format_shift(shift));
    }
    out
}

/// Renders the roster as pretty-printed JSON.
pub fn render_json(roster: &Roster) -> ShiftResult<String> {
    Ok(serde_json::to_string_pretty(roster)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Day;

    #[test]
    fn test_format_time_of_day() {
        assert_eq!(format_time_of_day(0), "00:00:00");
        assert_eq!(format_time_of_day(36_000), "10:00:00");
        assert_eq!(format_time_of_day(30_615), "08:30:15");
        assert_eq!(format_time_of_day(86_400), "24:00:00");
        assert_eq!(format_time_of_day(86_401), "86401s");
        assert_eq!(format_time_of_day(-5), "-5s");
    }

    #[test]
    fn test_format_shift() {
        let s = AssignedShift::new("testUserName", Day::Saturday, 36_000, 54_000);
        assert_eq!(
            format_shift(&s),
            "Staff: testUserName, Work Day: 6, Start Hour: 10:00:00, End Hour: 15:00:00"
        );
    }

    #[test]
    fn test_render_text() {
        let mut r = Roster::new();
        r.extend_day(vec![
            AssignedShift::new("a", Day::Monday, 36_000, 43_200),
            AssignedShift::new("b", Day::Monday, 43_200, 75_600),
        ]);
        let text = render_text(&r);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("Staff: b, Work Day: 1"));
        assert!(render_text(&Roster::new()).is_empty());
    }

    #[test]
    fn test_render_json() {
        let mut r = Roster::new();
        r.extend_day(vec![AssignedShift::new("a", Day::Monday, 36_000, 43_200)]);
        let json = render_json(&r).unwrap();
        let back: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
        assert!(json.contains("\"Monday\""));
    }
}
