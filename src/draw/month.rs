use std::path::{Path, PathBuf};

use chrono::Datelike;
use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyleBuilder, Rectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use image::RgbImage;
use log::{debug, info};

use super::{
    canvas::ImageCanvas,
    cell::{CellRenderer, EventBox},
    grid::{header_top_left, MonthGrid},
    text_styles::{style, StyleType},
};
use crate::{
    calendar_utils::{all_weekdays, weekday_short_name, CalendarMonth},
    config::RenderConfig,
    error::{self, CalendarError},
    events::EventStore,
};

/// `calendar_<year>_<month>.png`
pub fn file_name(year: i32, month: u32) -> String {
    format!("calendar_{year}_{month}.png")
}

/// Draws a whole month: title, weekday headers and one cell per day
pub struct MonthRenderer {
    config: RenderConfig,
    title_style: StyleType,
    header_style: StyleType,
    text_style: StyleType,
}

impl MonthRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            title_style: style(config.title_size, config.ink),
            header_style: style(config.header_size, config.ink),
            text_style: style(config.text_size, config.ink),
            config,
        }
    }

    fn calendar(year: i32, month: u32) -> error::Result<CalendarMonth> {
        CalendarMonth::new(year, month).ok_or(CalendarError::InvalidMonth { year, month })
    }

    fn cell_renderer(&self) -> CellRenderer<'_> {
        CellRenderer::new(&self.config, self.text_style)
    }

    /// Event boxes of one day, positioned in image coordinates
    pub fn layout_day(
        &self,
        store: &EventStore,
        year: i32,
        month: u32,
        day: u32,
    ) -> error::Result<Vec<EventBox>> {
        let calendar = Self::calendar(year, month)?;
        let grid = MonthGrid::from_calendar(&calendar);
        let (Some(date), Some(origin)) =
            (calendar.date_of(day), grid.day_origin(&self.config, day))
        else {
            return Err(CalendarError::InvalidDay { year, month, day });
        };
        let events = store.colored_events_for(date, self.config.event_fallback);
        Ok(self.cell_renderer().layout(origin, &events))
    }

    pub fn draw_calendar<D>(
        &self,
        calendar: &CalendarMonth,
        store: &EventStore,
        display: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let config = &self.config;
        let grid = MonthGrid::from_calendar(calendar);
        let top_left = TextStyleBuilder::new().baseline(Baseline::Top).build();

        let title = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Top)
            .build();
        let centre = Point::new((config.image_width / 2) as i32, config.title_top);
        Text::with_text_style(&calendar.title(), centre, self.title_style, title)
            .draw(display)?;

        let inset = Point::new(config.day_number_inset.x, 0);
        for (col, weekday) in all_weekdays().into_iter().enumerate() {
            let position = header_top_left(config, col as u32) + inset;
            Text::with_text_style(
                weekday_short_name(weekday),
                position,
                self.header_style,
                top_left,
            )
            .draw(display)?;
        }

        let cell_style = PrimitiveStyleBuilder::new()
            .fill_color(config.cell_fill)
            .stroke_color(config.ink)
            .stroke_width(1)
            .build();
        let cells = self.cell_renderer();

        for date in calendar.days_iter() {
            let day = date.day();
            let Some(origin) = grid.day_origin(config, day) else {
                continue;
            };
            Rectangle::new(origin, config.cell_size)
                .into_styled(cell_style)
                .draw(display)?;
            Text::with_text_style(
                &day.to_string(),
                origin + config.day_number_inset,
                self.text_style,
                top_left,
            )
            .draw(display)?;

            let events = store.colored_events_for(date, self.config.event_fallback);
            if events.is_empty() {
                continue;
            }
            debug!("drawing {} event(s) on {date}", events.len());
            cells.draw(&cells.layout(origin, &events), display)?;
        }
        Ok(())
    }

    pub fn render(&self, store: &EventStore, year: i32, month: u32) -> error::Result<RgbImage> {
        let calendar = Self::calendar(year, month)?;
        let size = MonthGrid::from_calendar(&calendar).image_size(&self.config);
        let mut canvas = ImageCanvas::new(size, self.config.background);
        match self.draw_calendar(&calendar, store, &mut canvas) {
            Ok(()) => {}
            Err(never) => match never {},
        }
        Ok(canvas.into_image())
    }

    /// Renders the month and writes it as a PNG into `dir`
    pub fn save(
        &self,
        store: &EventStore,
        year: i32,
        month: u32,
        dir: &Path,
    ) -> error::Result<PathBuf> {
        let image = self.render(store, year, month)?;
        let path = dir.join(file_name(year, month));
        image.save(&path)?;
        info!("wrote {}", path.display());
        Ok(path)
    }
}
