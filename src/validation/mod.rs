mod pair;
mod placeholders;
mod reporter;
mod runner;
mod sets;


pub use pair::audit_pair;
pub use placeholders::{compare_placeholders, stray_percent_keys};
pub use reporter::Reporter;
pub use runner::Runner;
pub use sets::{SetComparison, compare_comments, compare_keys, compare_sets};
