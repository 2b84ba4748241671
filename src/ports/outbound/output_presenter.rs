use crate::shared::Result;

/// OutputPresenter port for presenting the final report
///
/// This port abstracts the output destination (stdout, file).
pub trait OutputPresenter {
    /// Presents the formatted report
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
