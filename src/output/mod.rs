//! Output generation: screening reports and their renderings

pub mod formatter;
pub mod report;

pub use formatter::{OutputFormatter, ReportGenerator};
pub use report::ScreeningReport;
