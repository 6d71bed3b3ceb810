//! Error types produced while assembling and parsing flag sets.

mod aggregate;
mod helpers;
mod types;

pub use aggregate::AggregatedErrors;
pub use helpers::is_display_request;
pub use types::{CliffError, CliffResult, NameRule, Stage};
