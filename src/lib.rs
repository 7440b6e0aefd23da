//! Collects events for one month and renders them into a month-grid image.

pub mod calendar_utils;
pub mod config;
pub mod draw;
pub mod error;
pub mod events;
pub mod session;

pub use calendar_utils::{dates_for_weekday, CalendarMonth};
pub use config::{RenderConfig, SessionOptions};
pub use draw::{compute_grid, MonthGrid, MonthRenderer};
pub use error::{CalendarError, Result};
pub use events::{AddOutcome, EventStore};
