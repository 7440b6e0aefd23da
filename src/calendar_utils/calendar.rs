use core::ops::Range;

use chrono::{Datelike, Days, Month, NaiveDate, Weekday};

use super::MonthDate;

/// Iterates over every date of a [`CalendarMonth`] in ascending order
pub struct DaysIter {
    start: NaiveDate,
    range: Range<u32>,
}

impl DaysIter {
    fn new(calendar: &CalendarMonth) -> Self {
        Self {
            start: calendar.start_date(),
            range: 0..calendar.days_amount(),
        }
    }
}

impl Iterator for DaysIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.range.next()?;
        self.start.checked_add_days(Days::new(idx.into()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

/// Data used to describe a calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    date: MonthDate,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        MonthDate::new(year, month).map(Self::from_month_date)
    }

    pub const fn from_month_date(date: MonthDate) -> Self {
        Self { date }
    }

    pub fn days_iter(&self) -> DaysIter {
        DaysIter::new(self)
    }

    pub const fn start_date(&self) -> NaiveDate {
        self.date.to_start_day_naive()
    }

    /// Get the amount of days in this month
    pub fn days_amount(&self) -> u32 {
        match self.date.next() {
            Some(next) => {
                let days = next
                    .to_start_day_naive()
                    .signed_duration_since(self.start_date())
                    .num_days();
                days as u32
            }
            // Only December of chrono's last representable year has no successor
            None => 31,
        }
    }

    /// Get the day of the week this month starts on
    pub fn start_weekday(&self) -> Weekday {
        self.start_date().weekday()
    }

    /// Columns to skip before day 1 in a Sunday-first week
    pub fn first_weekday_offset(&self) -> u32 {
        self.start_weekday().num_days_from_sunday()
    }

    /// Get the month this month is from
    pub fn month(&self) -> Month {
        self.date.month()
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// `None` when `day` is not a day of this month
    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        if day == 0 || day > self.days_amount() {
            return None;
        }
        NaiveDate::from_ymd_opt(self.year(), self.month().number_from_month(), day)
    }

    /// "March 2025"
    pub fn title(&self) -> String {
        format!("{} {}", self.month().name(), self.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_amount_handles_leap_years() {
        assert_eq!(CalendarMonth::new(2024, 2).unwrap().days_amount(), 29);
        assert_eq!(CalendarMonth::new(2025, 2).unwrap().days_amount(), 28);
        assert_eq!(CalendarMonth::new(1900, 2).unwrap().days_amount(), 28);
        assert_eq!(CalendarMonth::new(2000, 2).unwrap().days_amount(), 29);
    }

    #[test]
    fn december_has_31_days() {
        assert_eq!(CalendarMonth::new(2025, 12).unwrap().days_amount(), 31);
    }

    #[test]
    fn offset_counts_from_sunday() {
        // March 1st 2025 is a Saturday, June 1st 2025 a Sunday
        assert_eq!(CalendarMonth::new(2025, 3).unwrap().first_weekday_offset(), 6);
        assert_eq!(CalendarMonth::new(2025, 6).unwrap().first_weekday_offset(), 0);
    }

    #[test]
    fn days_iter_covers_whole_month() {
        let calendar = CalendarMonth::new(2025, 4).unwrap();
        let days: Vec<_> = calendar.days_iter().collect();
        assert_eq!(days.len(), 30);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
        assert_eq!(days[29], NaiveDate::from_ymd_opt(2025, 4, 30).unwrap());
    }

    #[test]
    fn date_of_rejects_out_of_month_days() {
        let calendar = CalendarMonth::new(2025, 4).unwrap();
        assert!(calendar.date_of(0).is_none());
        assert!(calendar.date_of(31).is_none());
        assert_eq!(
            calendar.date_of(30),
            NaiveDate::from_ymd_opt(2025, 4, 30)
        );
    }

    #[test]
    fn title_is_month_name_and_year() {
        assert_eq!(CalendarMonth::new(2025, 3).unwrap().title(), "March 2025");
    }
}
