use thiserror::Error;

/// Errors that can occur while building or writing a month image.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("{year}-{month} is not a valid calendar month")]
    InvalidMonth { year: i32, month: u32 },

    #[error("{year}-{month} has no day {day}")]
    InvalidDay { year: i32, month: u32, day: u32 },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CalendarError>;
