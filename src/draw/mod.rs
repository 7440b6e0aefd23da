pub mod canvas;
pub mod cell;
pub mod grid;
pub mod month;
pub mod text_styles;

pub use canvas::ImageCanvas;
pub use cell::{wrap_words, CellRenderer, EventBox};
pub use grid::{compute_grid, MonthGrid};
pub use month::{file_name, MonthRenderer};
