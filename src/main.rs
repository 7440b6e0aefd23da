use std::{env, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use log::debug;
use month_grid_calendar::{
    config::{RenderConfig, SessionOptions},
    session::{self, TerminalPrompter},
};

#[derive(Parser)]
#[command(name = "month-grid-calendar")]
#[command(about = "Enter events for a month and render them into a calendar image")]
struct Cli {
    /// Year of the calendar, prompted for when missing
    #[arg(short, long)]
    year: Option<i32>,

    /// Month of the calendar (1-12), prompted for when missing
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: Option<u32>,

    /// Directory the image is written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Do not open the image once it is written
    #[arg(long)]
    no_open: bool,

    /// Font size of day numbers and event text
    #[arg(long)]
    text_size: Option<u32>,
}

fn setup_logging() {
    if env::var("LOG").is_err() {
        env::set_var("LOG", "month_grid_calendar=info");
    }

    pretty_env_logger::init_custom_env("LOG");
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging();

    let mut render = RenderConfig::default();
    if let Some(size) = cli.text_size {
        render.text_size = size;
    }
    let options = SessionOptions {
        year: cli.year,
        month: cli.month,
        output_dir: cli.output_dir,
        open_image: !cli.no_open,
        render,
    };
    debug!("{options:?}");

    session::run(&mut TerminalPrompter, &options)?;
    Ok(())
}
