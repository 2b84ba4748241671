use crate::shared::GraphResult;
use crate::update_graph::domain::Graph;

/// GraphSource port for fetching the upgrade graph of one channel
///
/// Implementations turn a (channel, architecture) pair into a decoded
/// [`Graph`]. Any deadline or cancellation belongs to the implementation and
/// surfaces to the traversal only as an error.
pub trait GraphSource {
    /// Fetches the graph for `channel` and `arch`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The request cannot be sent or the body cannot be read
    /// - The service answers with a non-success status
    /// - The body is not a graph document
    fn fetch_graph(&self, channel: &str, arch: &str) -> GraphResult<Graph>;
}
