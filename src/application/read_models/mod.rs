//! Read models for the report formatters
//!
//! View-ready structs built from a discovery response; formatters read
//! these and never the domain tables directly.

mod release_report;
mod release_report_builder;

pub use release_report::{ReleaseReport, ReportMetadata};
pub use release_report_builder::ReleaseReportBuilder;
