//! Report data structures for commands.
//!
//! Operations build reports, then commands render them to an Output target.

mod generate;
mod inspect;
mod output;

pub use generate::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};
pub use inspect::InspectReport;
pub use output::{Report, TerminalOutput};
