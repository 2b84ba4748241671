/// Shared kernel - error types and result aliases used across layers
pub mod error;
mod result;

pub use error::{GraphError, GraphResult, VersionParseError};
pub use result::Result;
