//! Run summary types and helpers.

mod result;
mod run_summary;

pub use result::ReviewOutcome;
pub use run_summary::RunSummary;
