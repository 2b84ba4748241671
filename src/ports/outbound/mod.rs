/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the update service, the console and the output destination.
pub mod graph_source;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use graph_source::GraphSource;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
