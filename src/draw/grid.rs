//! Month grid geometry: which cell each day lands in, and where that cell is

use embedded_graphics::prelude::*;

use crate::{
    calendar_utils::CalendarMonth,
    config::RenderConfig,
    error::{CalendarError, Result},
};

/// Shape of a month in a Sunday-first, seven column grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    pub days_in_month: u32,
    /// 0 = Sunday .. 6 = Saturday
    pub first_weekday_offset: u32,
    pub rows_needed: u32,
}

pub fn compute_grid(year: i32, month: u32) -> Result<MonthGrid> {
    CalendarMonth::new(year, month)
        .map(|calendar| MonthGrid::from_calendar(&calendar))
        .ok_or(CalendarError::InvalidMonth { year, month })
}

impl MonthGrid {
    pub fn from_calendar(calendar: &CalendarMonth) -> Self {
        let days_in_month = calendar.days_amount();
        let first_weekday_offset = calendar.first_weekday_offset();
        Self {
            days_in_month,
            first_weekday_offset,
            rows_needed: (days_in_month + first_weekday_offset).div_ceil(7),
        }
    }

    /// `(row, col)` of a 1-based day, row 0 being the first week
    pub fn cell_of(&self, day: u32) -> Option<(u32, u32)> {
        if day == 0 || day > self.days_in_month {
            return None;
        }
        let idx = self.first_weekday_offset + day - 1;
        Some((idx / 7, idx % 7))
    }

    pub fn day_origin(&self, config: &RenderConfig, day: u32) -> Option<Point> {
        self.cell_of(day)
            .map(|(row, col)| cell_top_left(config, row, col))
    }

    /// Header row plus one row per week, plus margins
    pub fn image_size(&self, config: &RenderConfig) -> Size {
        let height = config.grid_origin.y.max(0) as u32
            + (self.rows_needed + 1) * config.cell_size.height
            + config.bottom_margin;
        Size::new(config.image_width, height)
    }
}

/// Top-left corner of a week cell, the header row sits above row 0
pub fn cell_top_left(config: &RenderConfig, row: u32, col: u32) -> Point {
    let Size { width, height } = config.cell_size;
    config.grid_origin + Point::new((col * width) as i32, ((row + 1) * height) as i32)
}

/// Top-left corner of the weekday header for column `col`
pub fn header_top_left(config: &RenderConfig, col: u32) -> Point {
    config.grid_origin + Point::new((col * config.cell_size.width) as i32, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_cover_every_day() {
        for year in [1999, 2024, 2025, 2100] {
            for month in 1..=12 {
                let grid = compute_grid(year, month).unwrap();
                let cells = grid.days_in_month + grid.first_weekday_offset;
                assert!(grid.rows_needed * 7 >= cells, "{year}-{month}");
                assert!((grid.rows_needed - 1) * 7 < cells, "{year}-{month}");
            }
        }
    }

    #[test]
    fn march_2025_needs_six_rows() {
        let grid = compute_grid(2025, 3).unwrap();
        assert_eq!(
            grid,
            MonthGrid {
                days_in_month: 31,
                first_weekday_offset: 6,
                rows_needed: 6,
            }
        );
    }

    #[test]
    fn february_2015_fits_four_rows() {
        // Starts on a Sunday and has 28 days
        assert_eq!(compute_grid(2015, 2).unwrap().rows_needed, 4);
    }

    #[test]
    fn invalid_month_is_an_error() {
        assert!(matches!(
            compute_grid(2025, 13),
            Err(CalendarError::InvalidMonth { year: 2025, month: 13 })
        ));
    }

    #[test]
    fn days_flow_across_rows() {
        let grid = compute_grid(2025, 3).unwrap();
        assert_eq!(grid.cell_of(1), Some((0, 6)));
        assert_eq!(grid.cell_of(2), Some((1, 0)));
        assert_eq!(grid.cell_of(10), Some((2, 1)));
        assert_eq!(grid.cell_of(31), Some((5, 1)));
        assert_eq!(grid.cell_of(32), None);
        assert_eq!(grid.cell_of(0), None);
    }

    #[test]
    fn cells_sit_below_header_row() {
        let config = RenderConfig::default();
        assert_eq!(cell_top_left(&config, 0, 0), Point::new(50, 320));
        assert_eq!(cell_top_left(&config, 2, 1), Point::new(270, 720));
        assert_eq!(header_top_left(&config, 3), Point::new(710, 120));
    }

    #[test]
    fn image_height_follows_rows() {
        let config = RenderConfig::default();
        let grid = compute_grid(2025, 3).unwrap();
        assert_eq!(grid.image_size(&config), Size::new(1800, 120 + 7 * 200 + 100));
    }
}
