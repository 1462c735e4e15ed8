//! Report data structures for commands.
//!
//! Commands build reports from operations, then render them to an Output target.

mod check;
mod generate;
mod output;

pub use check::{CheckReport, RecordSummary};
pub use generate::GenerateReport;
pub use output::{Output, Report, TerminalOutput};
