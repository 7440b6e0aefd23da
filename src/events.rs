//! In-memory event store with per-label display colors

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use embedded_graphics::pixelcolor::Rgb888;
use log::debug;

/// Light colors so that black text stays readable on every box
pub const PALETTE: [Rgb888; 10] = [
    Rgb888::new(173, 216, 230), // light blue
    Rgb888::new(144, 238, 144), // light green
    Rgb888::new(255, 182, 193), // light pink
    Rgb888::new(255, 239, 213), // light yellow
    Rgb888::new(240, 230, 140), // khaki
    Rgb888::new(221, 160, 221), // plum
    Rgb888::new(135, 206, 250), // light sky blue
    Rgb888::new(255, 228, 196), // bisque
    Rgb888::new(175, 238, 238), // pale turquoise
    Rgb888::new(240, 255, 240), // honeydew
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// The label was already on that date and the duplicate was not confirmed
    Declined,
}

/// Events per date, in insertion order, plus one color per distinct label.
///
/// Colors are handed out from [`PALETTE`] in first-occurrence order across all
/// dates and never change once assigned.
#[derive(Debug, Default)]
pub struct EventStore {
    events: BTreeMap<NaiveDate, Vec<String>>,
    colors: HashMap<String, Rgb888>,
    next_color: usize,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `label` to `date` unconditionally
    pub fn add(&mut self, date: NaiveDate, label: impl Into<String>) {
        let label = label.into();
        self.assign_color(&label);
        debug!("adding {label:?} on {date}");
        self.events.entry(date).or_default().push(label);
    }

    /// Like [`EventStore::add`], but asks `confirm` before adding a label that
    /// is already present on `date`.
    pub fn add_with_confirmation<F, E>(
        &mut self,
        date: NaiveDate,
        label: &str,
        confirm: F,
    ) -> Result<AddOutcome, E>
    where
        F: FnOnce(NaiveDate, &str) -> Result<bool, E>,
    {
        if self.contains(date, label) && !confirm(date, label)? {
            debug!("duplicate {label:?} on {date} declined");
            return Ok(AddOutcome::Declined);
        }
        self.add(date, label);
        Ok(AddOutcome::Added)
    }

    pub fn contains(&self, date: NaiveDate, label: &str) -> bool {
        self.events_for(date).iter().any(|event| event == label)
    }

    pub fn events_for(&self, date: NaiveDate) -> &[String] {
        self.events.get(&date).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn color_of(&self, label: &str) -> Option<Rgb888> {
        self.colors.get(label).copied()
    }

    /// Labels of `date` paired with their colors, ready for layout
    pub fn colored_events_for(
        &self,
        date: NaiveDate,
        fallback: Rgb888,
    ) -> Vec<(&str, Rgb888)> {
        self.events_for(date)
            .iter()
            .map(|label| {
                let color = self.color_of(label).unwrap_or(fallback);
                (label.as_str(), color)
            })
            .collect()
    }

    fn assign_color(&mut self, label: &str) {
        if self.colors.contains_key(label) {
            return;
        }
        let color = PALETTE[self.next_color];
        self.next_color = (self.next_color + 1) % PALETTE.len();
        self.colors.insert(label.to_owned(), color);
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn always(answer: bool) -> impl FnOnce(NaiveDate, &str) -> Result<bool, Infallible> {
        move |_, _| Ok(answer)
    }

    #[test]
    fn unknown_date_has_no_events() {
        let store = EventStore::new();
        assert!(store.events_for(ymd(2025, 3, 10)).is_empty());
    }

    #[test]
    fn events_keep_insertion_order() {
        let mut store = EventStore::new();
        let date = ymd(2025, 3, 10);
        store.add(date, "Standup");
        store.add(date, "Lunch");
        store.add(date, "Retro");
        assert_eq!(store.events_for(date), ["Standup", "Lunch", "Retro"]);
    }

    #[test]
    fn color_is_shared_across_dates() {
        let mut store = EventStore::new();
        store.add(ymd(2025, 3, 3), "Gym");
        store.add(ymd(2025, 3, 4), "Dentist");
        store.add(ymd(2025, 3, 10), "Gym");
        assert_eq!(store.color_of("Gym"), Some(PALETTE[0]));
        assert_eq!(store.color_of("Dentist"), Some(PALETTE[1]));
    }

    #[test]
    fn confirmed_duplicate_keeps_its_color() {
        let mut store = EventStore::new();
        let date = ymd(2025, 3, 10);
        store.add(date, "Meeting");
        store.add(date, "Other");
        let outcome = store
            .add_with_confirmation(date, "Meeting", always(true))
            .unwrap();
        assert_eq!(outcome, AddOutcome::Added);
        assert_eq!(store.events_for(date), ["Meeting", "Other", "Meeting"]);
        assert_eq!(store.color_of("Meeting"), Some(PALETTE[0]));
    }

    #[test]
    fn declined_duplicate_is_not_added() {
        let mut store = EventStore::new();
        let date = ymd(2025, 3, 10);
        store.add(date, "Meeting");
        let outcome = store
            .add_with_confirmation(date, "Meeting", always(false))
            .unwrap();
        assert_eq!(outcome, AddOutcome::Declined);
        assert_eq!(store.events_for(date), ["Meeting"]);
    }

    #[test]
    fn confirmation_only_asked_for_duplicates() {
        let mut store = EventStore::new();
        let date = ymd(2025, 3, 10);
        store.add(ymd(2025, 3, 11), "Meeting");
        let outcome = store
            .add_with_confirmation(date, "Meeting", |_, _| -> Result<bool, Infallible> {
                panic!("no duplicate on this date")
            })
            .unwrap();
        assert_eq!(outcome, AddOutcome::Added);
    }

    #[test]
    fn confirmation_errors_propagate() {
        let mut store = EventStore::new();
        let date = ymd(2025, 3, 10);
        store.add(date, "Meeting");
        let result = store.add_with_confirmation(date, "Meeting", |_, _| Err("stdin closed"));
        assert_eq!(result, Err("stdin closed"));
        assert_eq!(store.events_for(date).len(), 1);
    }

    #[test]
    fn colored_events_use_assigned_colors() {
        let mut store = EventStore::new();
        let date = ymd(2025, 3, 10);
        store.add(ymd(2025, 3, 9), "Gym");
        store.add(date, "Meeting");
        store.add(date, "Gym");
        let fallback = Rgb888::new(1, 2, 3);
        assert_eq!(
            store.colored_events_for(date, fallback),
            [("Meeting", PALETTE[1]), ("Gym", PALETTE[0])]
        );
        assert!(store.colored_events_for(ymd(2025, 3, 11), fallback).is_empty());
    }

    #[test]
    fn palette_wraps_after_ten_labels() {
        let mut store = EventStore::new();
        let date = ymd(2025, 1, 1);
        for n in 0..11 {
            store.add(date, format!("event {n}"));
        }
        assert_eq!(store.color_of("event 10"), store.color_of("event 0"));
        assert_ne!(store.color_of("event 9"), store.color_of("event 0"));
    }
}
