/// Mock implementations for testing
mod mock_graph_source;
mod mock_progress_reporter;

pub use mock_graph_source::MockGraphSource;
pub use mock_progress_reporter::MockProgressReporter;
