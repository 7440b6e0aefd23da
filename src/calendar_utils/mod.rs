//! A bunch of utils for working with calendar stuff

pub mod calendar;
mod month_date;

pub use calendar::CalendarMonth;
use chrono::{Datelike, NaiveDate, Weekday};
pub use month_date::MonthDate;

pub fn weekday_short_name(val: Weekday) -> &'static str {
    all_weekdays_short_en()[val.num_days_from_sunday() as usize]
}

pub fn weekday_full_name(val: Weekday) -> &'static str {
    all_weekdays_en()[val.num_days_from_sunday() as usize]
}

/// Sunday-first, matching the grid columns
pub const fn all_weekdays() -> [Weekday; 7] {
    [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ]
}

pub const fn all_weekdays_short_en() -> [&'static str; 7] {
    ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
}

pub const fn all_weekdays_en() -> [&'static str; 7] {
    [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ]
}

/// Matches a full English weekday name, ignoring case and surrounding whitespace
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    let name = name.trim();
    all_weekdays()
        .into_iter()
        .find(|day| weekday_full_name(*day).eq_ignore_ascii_case(name))
}

/// Every date of the month falling on `weekday_name`, ascending.
///
/// An unknown weekday name or an invalid year/month yields an empty list.
pub fn dates_for_weekday(year: i32, month: u32, weekday_name: &str) -> Vec<NaiveDate> {
    let Some(weekday) = parse_weekday(weekday_name) else {
        return Vec::new();
    };
    let Some(calendar) = CalendarMonth::new(year, month) else {
        return Vec::new();
    };
    calendar
        .days_iter()
        .filter(|date| date.weekday() == weekday)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn wednesdays_of_january_2025() {
        let dates = dates_for_weekday(2025, 1, "Wednesday");
        let expected: Vec<_> = [1, 8, 15, 22, 29]
            .into_iter()
            .map(|day| ymd(2025, 1, day))
            .collect();
        assert_eq!(dates, expected);
    }

    #[test]
    fn december_weekdays_stay_in_december() {
        let dates = dates_for_weekday(2025, 12, "Wednesday");
        assert_eq!(dates.first(), Some(&ymd(2025, 12, 3)));
        assert_eq!(dates.last(), Some(&ymd(2025, 12, 31)));
        assert_eq!(dates.len(), 5);
    }

    #[test]
    fn weekday_names_are_case_insensitive() {
        assert_eq!(parse_weekday("friday"), Some(Weekday::Fri));
        assert_eq!(parse_weekday("  SUNDAY "), Some(Weekday::Sun));
    }

    #[test]
    fn invalid_weekday_yields_nothing() {
        assert!(dates_for_weekday(2025, 1, "Funday").is_empty());
        assert!(dates_for_weekday(2025, 1, "Wed").is_empty());
        assert!(dates_for_weekday(2025, 1, "").is_empty());
    }

    #[test]
    fn invalid_month_yields_nothing() {
        assert!(dates_for_weekday(2025, 13, "Monday").is_empty());
    }

    #[test]
    fn short_names_follow_sunday_first_order() {
        assert_eq!(weekday_short_name(Weekday::Sun), "Sun");
        assert_eq!(weekday_short_name(Weekday::Sat), "Sat");
    }
}
