use chrono::{Datelike, Month, Months, NaiveDate};
use num_traits::FromPrimitive;

/// A calendar month, anchored at its first day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthDate {
    start: NaiveDate,
    month: Month,
}

impl MonthDate {
    /// `None` when `month` is not in `1..=12` or the year is outside chrono's range
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let month = Month::from_u32(month)?;
        let start = NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)?;
        Some(Self { start, month })
    }

    pub fn new_from_date(date: NaiveDate) -> Option<Self> {
        Self::new(date.year(), date.month())
    }

    pub fn year(self) -> i32 {
        self.start.year()
    }

    pub fn month(self) -> Month {
        self.month
    }

    pub const fn to_start_day_naive(self) -> NaiveDate {
        self.start
    }

    /// Month arithmetic with year rollover, December + 1 is January of the next year
    pub fn checked_add(self, rhs: Months) -> Option<Self> {
        let start = self.start.checked_add_months(rhs)?;
        Self::new_from_date(start)
    }

    pub fn next(self) -> Option<Self> {
        self.checked_add(Months::new(1))
    }
}
