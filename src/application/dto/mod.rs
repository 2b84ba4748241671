/// Data Transfer Objects for application layer
///
/// DTOs carry requests into the use case and results back out to the
/// adapters, keeping the domain layer isolated.
mod discovery_request;
mod discovery_response;
mod output_format;

pub use discovery_request::DiscoveryRequest;
pub use discovery_response::DiscoveryResponse;
pub use output_format::OutputFormat;
