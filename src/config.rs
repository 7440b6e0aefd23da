//! Layout constants and user-facing options

use std::path::PathBuf;

use embedded_graphics::{pixelcolor::Rgb888, prelude::*};

/// Geometry and styling of the rendered month image, in pixels
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub image_width: u32,
    /// Top-left of the weekday header row
    pub grid_origin: Point,
    pub cell_size: Size,
    /// Space left below the last row
    pub bottom_margin: u32,
    pub title_top: i32,

    /// Horizontal inset of event boxes on each side of a cell
    pub cell_margin: u32,
    pub day_number_inset: Point,
    /// Distance from the cell top to the first event box
    pub events_top: u32,
    pub line_height: u32,
    /// Vertical padding added to each event box, split evenly above and below the text
    pub box_padding: u32,
    pub box_gap: u32,
    /// Extra horizontal inset of event text inside its box
    pub text_inset: u32,

    pub background: Rgb888,
    pub cell_fill: Rgb888,
    pub ink: Rgb888,
    /// Box fill for a label that has no assigned color
    pub event_fallback: Rgb888,

    pub title_size: u32,
    pub header_size: u32,
    pub text_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 1800,
            grid_origin: Point::new(50, 120),
            cell_size: Size::new(220, 200),
            bottom_margin: 100,
            title_top: 20,

            cell_margin: 10,
            day_number_inset: Point::new(10, 10),
            events_top: 35,
            line_height: 25,
            box_padding: 10,
            box_gap: 5,
            text_inset: 5,

            background: Rgb888::WHITE,
            cell_fill: Rgb888::new(240, 240, 240),
            ink: Rgb888::BLACK,
            event_fallback: Rgb888::new(173, 216, 230),

            title_size: 24,
            header_size: 18,
            text_size: 12,
        }
    }
}

impl RenderConfig {
    /// Width of an event box inside one cell
    pub fn box_width(&self) -> u32 {
        self.cell_size
            .width
            .saturating_sub(2 * self.cell_margin)
    }

    /// Width left for event text inside its box
    pub fn wrap_budget(&self) -> u32 {
        self.box_width().saturating_sub(2 * self.text_inset)
    }
}

/// Options of one run of the interactive tool
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub output_dir: PathBuf,
    pub open_image: bool,
    pub render: RenderConfig,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            year: None,
            month: None,
            output_dir: PathBuf::from("."),
            open_image: true,
            render: RenderConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_budget_leaves_margins() {
        let config = RenderConfig::default();
        assert_eq!(config.box_width(), 200);
        assert_eq!(config.wrap_budget(), 190);
    }

    #[test]
    fn fallback_event_color_is_light_blue() {
        assert_eq!(
            RenderConfig::default().event_fallback,
            Rgb888::new(173, 216, 230)
        );
    }

    #[test]
    fn tiny_cells_do_not_underflow() {
        let config = RenderConfig {
            cell_size: Size::new(10, 10),
            ..RenderConfig::default()
        };
        assert_eq!(config.box_width(), 0);
        assert_eq!(config.wrap_budget(), 0);
    }
}
