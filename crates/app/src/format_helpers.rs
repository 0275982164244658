//! Shared formatting utilities for the UI layer.

use chrono::{DateTime, NaiveDate, Utc};

/// Format a date as "Nov 20, 2023".
pub fn format_date_human(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format a timestamp as "Nov 20, 2023 9:35 PM" (UTC, 12-hour clock).
pub fn format_datetime_human(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y %-I:%M %p").to_string()
}

/// Axis label for a mark date: "Sep 15".
pub fn format_date_short(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Average rating with two decimals, or "N/A" when nobody has rated.
pub fn format_rating(avg: Option<f64>) -> String {
    avg.map(|a| format!("{a:.2}")).unwrap_or_else(|| "N/A".to_string())
}

/// "1 mentee" / "3 mentees".
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Join a list for display, "None listed" when empty.
pub fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None listed".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn dates_are_human_readable() {
        assert_eq!(format_date_human(day(2023, 11, 5)), "Nov 5, 2023");
        assert_eq!(format_date_short(day(2023, 9, 15)), "Sep 15");
    }

    #[test]
    fn timestamps_use_twelve_hour_clock() {
        let ts = Utc.with_ymd_and_hms(2023, 11, 20, 21, 35, 0).unwrap();
        assert_eq!(format_datetime_human(ts), "Nov 20, 2023 9:35 PM");
        let midnight = Utc.with_ymd_and_hms(2023, 11, 20, 0, 5, 0).unwrap();
        assert_eq!(format_datetime_human(midnight), "Nov 20, 2023 12:05 AM");
    }

    #[test]
    fn ratings_show_two_decimals() {
        assert_eq!(format_rating(Some(14.0 / 3.0)), "4.67");
        assert_eq!(format_rating(None), "N/A");
    }

    #[test]
    fn pluralize_counts() {
        assert_eq!(pluralize(1, "mentee", "mentees"), "1 mentee");
        assert_eq!(pluralize(0, "mentee", "mentees"), "0 mentees");
    }

    #[test]
    fn empty_lists_say_so() {
        assert_eq!(join_or_none(&[]), "None listed");
        assert_eq!(join_or_none(&["A".into(), "B".into()]), "A, B");
    }
}
