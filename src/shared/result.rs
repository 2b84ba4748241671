/// Result with anyhow::Error, used by adapters, configuration and the binary.
/// The discovery core returns [`crate::shared::GraphResult`] instead so callers
/// can match on [`crate::shared::GraphError`] variants.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
