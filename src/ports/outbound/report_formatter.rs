use crate::application::read_models::ReleaseReport;
use crate::shared::Result;

/// ReportFormatter port for rendering discovered releases
///
/// This port abstracts the output format (JSON, Markdown).
pub trait ReportFormatter {
    /// Formats the release report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &ReleaseReport) -> Result<String>;
}
