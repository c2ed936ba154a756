//! Console adapters: the interactive prompt loop and the quote report.

pub mod prompt;
pub mod report;

pub use prompt::Prompter;
pub use report::{OutputFormat, QuoteWriter};
