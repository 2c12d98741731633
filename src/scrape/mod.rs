mod error;
pub use error::Error;
pub use error::Result;
mod remove_excess_whitespace;
mod section;
pub mod static_selector;
mod text_from_selection;

pub use remove_excess_whitespace::remove_excess_whitespace;
pub use section::{parse_calories, parse_meal, parse_section};
pub use text_from_selection::{get_inner_text, text_from_selection};
