//! `.strings` resource file parsing

mod error;
mod strings;

pub use error::ParseError;
pub use strings::{parse_file, parse_str};
