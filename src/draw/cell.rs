//! Event boxes inside a single day cell

use core::mem;

use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyleBuilder, Rectangle},
    text::{Baseline, Text, TextStyleBuilder},
};

use super::text_styles::{text_width, StyleType};
use crate::config::RenderConfig;

/// Greedy word wrap: words join the current line while the joined text
/// measures strictly less than `budget`.
///
/// A word that cannot fit on a line of its own is broken between characters.
/// Never returns an empty list.
pub fn wrap_words<M>(text: &str, budget: u32, measure: M) -> Vec<String>
where
    M: Fn(&str) -> u32,
{
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_owned()
        } else {
            format!("{line} {word}")
        };
        if measure(&candidate) < budget {
            line = candidate;
            continue;
        }

        if !line.is_empty() {
            lines.push(mem::take(&mut line));
        }
        if measure(word) < budget {
            line = word.to_owned();
        } else {
            let mut pieces = break_word(word, budget, &measure);
            line = pieces.pop().unwrap_or_default();
            lines.append(&mut pieces);
        }
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

/// Splits `word` into the longest prefixes that stay under `budget`.
/// A character wider than the budget on its own still gets its own piece.
fn break_word<M>(word: &str, budget: u32, measure: &M) -> Vec<String>
where
    M: Fn(&str) -> u32,
{
    let mut pieces = Vec::new();
    let mut piece = String::new();
    for ch in word.chars() {
        piece.push(ch);
        if measure(&piece) < budget {
            continue;
        }
        if piece.chars().count() > 1 {
            piece.pop();
            pieces.push(mem::replace(&mut piece, ch.to_string()));
        } else {
            pieces.push(mem::take(&mut piece));
        }
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

/// One event label placed inside a cell
#[derive(Debug, Clone, PartialEq)]
pub struct EventBox {
    pub rect: Rectangle,
    pub color: Rgb888,
    /// Top-left of each wrapped line
    pub lines: Vec<(Point, String)>,
}

/// Lays out and draws the events of one day cell.
///
/// Boxes are stacked top to bottom in label order; they are allowed to run
/// past the bottom of the cell.
pub struct CellRenderer<'a> {
    config: &'a RenderConfig,
    text_style: StyleType,
}

impl<'a> CellRenderer<'a> {
    pub fn new(config: &'a RenderConfig, text_style: StyleType) -> Self {
        Self { config, text_style }
    }

    pub fn layout(&self, cell_origin: Point, events: &[(&str, Rgb888)]) -> Vec<EventBox> {
        let config = self.config;
        let box_width = config.box_width();
        let budget = config.wrap_budget();
        let left = cell_origin.x + config.cell_margin as i32;
        let mut top = cell_origin.y + config.events_top as i32;

        events
            .iter()
            .map(|&(label, color)| {
                let wrapped = wrap_words(label, budget, |text| {
                    text_width(&self.text_style, text)
                });
                let height = wrapped.len() as u32 * config.line_height + config.box_padding;

                let text_left = left + config.text_inset as i32;
                let text_top = top + (config.box_padding / 2) as i32;
                let lines = wrapped
                    .into_iter()
                    .enumerate()
                    .map(|(idx, line)| {
                        let y = text_top + (idx as u32 * config.line_height) as i32;
                        (Point::new(text_left, y), line)
                    })
                    .collect();

                let event_box = EventBox {
                    rect: Rectangle::new(Point::new(left, top), Size::new(box_width, height)),
                    color,
                    lines,
                };
                top += (height + config.box_gap) as i32;
                event_box
            })
            .collect()
    }

    pub fn draw<D>(&self, boxes: &[EventBox], display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let text_style = TextStyleBuilder::new().baseline(Baseline::Top).build();
        for event_box in boxes {
            let box_style = PrimitiveStyleBuilder::new()
                .fill_color(event_box.color)
                .stroke_color(self.config.ink)
                .stroke_width(1)
                .build();
            event_box.rect.into_styled(box_style).draw(display)?;

            for (position, line) in &event_box.lines {
                Text::with_text_style(line, *position, self.text_style, text_style)
                    .draw(display)?;
            }
        }
        Ok(())
    }
}
