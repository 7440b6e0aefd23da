//! Interactive event entry, from year/month prompts to the written image

use std::{collections::VecDeque, path::PathBuf};

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use dialoguer::{Confirm, Input};
use log::{info, warn};
use owo_colors::OwoColorize;

use crate::{
    calendar_utils::{dates_for_weekday, CalendarMonth},
    config::SessionOptions,
    draw::MonthRenderer,
    events::{AddOutcome, EventStore},
};

/// Word that ends event entry, compared case-insensitively
pub const SENTINEL: &str = "done";

/// Where the session reads answers from and reports to
pub trait Prompter {
    fn input(&mut self, prompt: &str) -> Result<String>;
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
    fn say(&mut self, message: &str);
    fn warn(&mut self, message: &str);
}

/// Prompts on the controlling terminal
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str) -> Result<String> {
        let answer = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        Ok(answer)
    }

    fn say(&mut self, message: &str) {
        println!("{}", message.green());
    }

    fn warn(&mut self, message: &str) {
        eprintln!("{}", message.red());
    }
}

/// What the user typed at the day prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayInput<'a> {
    Done,
    /// All digits; `None` when the number does not fit
    Day(Option<u32>),
    Weekday(&'a str),
}

pub fn parse_day_input(input: &str) -> DayInput<'_> {
    let input = input.trim();
    if input.eq_ignore_ascii_case(SENTINEL) {
        DayInput::Done
    } else if !input.is_empty() && input.chars().all(|ch| ch.is_ascii_digit()) {
        DayInput::Day(input.parse().ok())
    } else {
        DayInput::Weekday(input)
    }
}

/// "March 10, 2025"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// Runs a whole session and returns the path of the written image
pub fn run<P: Prompter>(prompter: &mut P, options: &SessionOptions) -> Result<PathBuf> {
    prompter.say("Enter events for the calendar. Type 'done' when finished.");

    let year = match options.year {
        Some(year) => year,
        None => prompt_year(prompter)?,
    };
    let month = match options.month {
        Some(month) => month,
        None => prompt_month(prompter)?,
    };
    let Some(calendar) = CalendarMonth::new(year, month) else {
        bail!("{year}-{month} is not a valid calendar month");
    };

    let store = collect_events(prompter, &calendar)?;

    let renderer = MonthRenderer::new(options.render.clone());
    let path = renderer
        .save(&store, year, month, &options.output_dir)
        .with_context(|| format!("Failed to write the calendar for {}", calendar.title()))?;
    prompter.say(&format!(
        "Calendar for {} generated as '{}'.",
        calendar.title(),
        path.display()
    ));

    if options.open_image {
        if let Err(err) = open::that(&path) {
            warn!("could not open {}: {err}", path.display());
        }
    }
    Ok(path)
}

fn prompt_year<P: Prompter>(prompter: &mut P) -> Result<i32> {
    loop {
        let answer = prompter.input("Enter the year for the calendar (e.g., 2025)")?;
        match answer.trim().parse::<i32>() {
            Ok(year) if CalendarMonth::new(year, 1).is_some() => return Ok(year),
            _ => prompter.warn("Invalid year. Please enter a number such as 2025."),
        }
    }
}

fn prompt_month<P: Prompter>(prompter: &mut P) -> Result<u32> {
    loop {
        let answer = prompter.input("Enter the month for the calendar (1-12)")?;
        match answer.trim().parse::<u32>() {
            Ok(month) if (1..=12).contains(&month) => return Ok(month),
            _ => prompter.warn("Invalid month. Please enter a number from 1 to 12."),
        }
    }
}

fn prompt_description<P: Prompter>(prompter: &mut P, prompt: &str) -> Result<String> {
    loop {
        let answer = prompter.input(prompt)?;
        let answer = answer.trim();
        if !answer.is_empty() {
            return Ok(answer.to_owned());
        }
        prompter.warn("The event description cannot be empty.");
    }
}

/// Reads day/weekday and description pairs until the sentinel
pub fn collect_events<P: Prompter>(
    prompter: &mut P,
    calendar: &CalendarMonth,
) -> Result<EventStore> {
    let mut store = EventStore::new();
    let (year, month) = (calendar.year(), calendar.month().number_from_month());

    loop {
        let answer = prompter.input(
            "Enter the date or weekday for the event (e.g., 'Monday' or '15', or 'done' to finish)",
        )?;
        match parse_day_input(&answer) {
            DayInput::Done => break,
            DayInput::Day(day) => {
                let Some(date) = day.and_then(|day| calendar.date_of(day)) else {
                    prompter.warn("Invalid date. Please enter a valid day number.");
                    continue;
                };
                let prompt = format!("Enter the event description for {}", long_date(date));
                let label = prompt_description(prompter, &prompt)?;
                add_checked(prompter, &mut store, date, &label)?;
            }
            DayInput::Weekday(name) => {
                let dates = dates_for_weekday(year, month, name);
                if dates.is_empty() {
                    prompter
                        .warn("Invalid weekday. Please enter a valid day name (e.g., 'Monday').");
                    continue;
                }
                let prompt = format!(
                    "Enter the event description for all {}s in {}",
                    capitalize(name),
                    calendar.month().name()
                );
                let label = prompt_description(prompter, &prompt)?;
                for date in dates {
                    add_checked(prompter, &mut store, date, &label)?;
                }
            }
        }
    }

    info!("collected events for {}", calendar.title());
    Ok(store)
}

fn add_checked<P: Prompter>(
    prompter: &mut P,
    store: &mut EventStore,
    date: NaiveDate,
    label: &str,
) -> Result<AddOutcome> {
    let outcome = store.add_with_confirmation(date, label, |date, label| {
        prompter.confirm(&format!(
            "'{label}' is already scheduled for {}. Are you sure you want to add it again?",
            long_date(date)
        ))
    })?;
    match outcome {
        AddOutcome::Added => {
            prompter.say(&format!("Event '{label}' added to {}.", long_date(date)))
        }
        AddOutcome::Declined => prompter.say("Event not added."),
    }
    Ok(outcome)
}

fn capitalize(name: &str) -> String {
    let name = name.trim().to_ascii_lowercase();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Answers prompts from a fixed script, for driving sessions without a terminal
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    inputs: VecDeque<String>,
    confirmations: VecDeque<bool>,
    pub transcript: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_confirmations(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.confirmations.extend(answers);
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &str) -> Result<String> {
        self.inputs
            .pop_front()
            .with_context(|| format!("Script ran out of answers at {prompt:?}"))
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        self.confirmations
            .pop_front()
            .with_context(|| format!("Script ran out of confirmations at {prompt:?}"))
    }

    fn say(&mut self, message: &str) {
        self.transcript.push(message.to_owned());
    }

    fn warn(&mut self, message: &str) {
        self.transcript.push(message.to_owned());
    }
}
