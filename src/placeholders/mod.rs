//! Format placeholder vocabulary and scanning

mod scanner;
mod vocabulary;

pub use scanner::{has_stray_percent, scan, scan_placeholders, stray_percents};
pub use vocabulary::{
    Conversion, Escape, MAX_POSITION, Placeholder, PlaceholderVocabulary, VOCABULARY,
};
