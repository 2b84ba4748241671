/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: HTTP graph source,
/// console progress, filesystem output and report formatters.
pub mod outbound;
