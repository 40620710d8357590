//! Command implementations
//!
//! Each module corresponds to a subcommand in the CLI.

pub mod analyze;
pub mod fetch;
pub mod history;
pub mod report;
pub mod run;

// Re-export commonly used types
pub use analyze::run as analyze_run;
pub use fetch::run as fetch_run;
pub use history::run as history_run;
pub use report::{run as report_run, ReportOptions};
pub use run::{run as pipeline_run, RunArtifacts, RunOptions};
