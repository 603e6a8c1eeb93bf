pub mod fill_bar;
pub mod pie;

pub use fill_bar::{fill_bar_text, FillBar};
pub use pie::Pie;
