/// ProgressReporter port for reporting traversal progress
///
/// Keeps stdout free for the report; implementations typically write to
/// stderr.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports progress through the fetch queue
    ///
    /// # Arguments
    /// * `current` - Channels fetched so far
    /// * `total` - Channels known so far (grows as channels are discovered)
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
