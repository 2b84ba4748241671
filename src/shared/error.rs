use std::fmt;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish argument mistakes from
/// failures that happened while talking to the update service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the report was produced
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (fetch error, malformed graph, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Failure to parse a semantic version string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid semantic version {input:?}: {reason}")]
pub struct VersionParseError {
    pub input: String,
    pub reason: String,
}

impl VersionParseError {
    pub fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Errors raised by release discovery and channel-group aggregation.
///
/// Every variant carries enough context (channel, architecture, URL,
/// offending value) to diagnose the failure without re-running.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("graph URL is required")]
    MissingGraphUrl,

    #[error("invalid graph URL {url:?}: {details}")]
    InvalidGraphUrl { url: String, details: String },

    #[error("invalid channel format: {channel}")]
    InvalidChannelFormat { channel: String },

    #[error("invalid version in channel {channel}: {source}")]
    InvalidChannelVersion {
        channel: String,
        #[source]
        source: VersionParseError,
    },

    #[error("at least one start channel is required")]
    NoStartChannels,

    #[error("error fetching data from {url}: {details}")]
    Transport { url: String, details: String },

    #[error("error: status {status} when fetching data from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("error parsing JSON from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("error fetching {arch} graph for channel {channel}: {source}")]
    ChannelFetch {
        arch: String,
        channel: String,
        #[source]
        source: Box<GraphError>,
    },

    #[error("invalid edge format: expected 2 indices, got {edge:?} at index {position}")]
    MalformedEdge { edge: Vec<i64>, position: usize },

    #[error("invalid edge indices: {edge:?} at index {position} (graph has {node_count} nodes)")]
    EdgeOutOfRange {
        edge: Vec<i64>,
        position: usize,
        node_count: usize,
    },

    #[error("{version}: invalid semantic version in available upgrades[{index}]={target:?}: {source}")]
    InvalidUpgradeVersion {
        version: String,
        index: usize,
        target: String,
        #[source]
        source: VersionParseError,
    },
}

impl GraphError {
    /// Returns true for the error kinds that are raised before any fetch
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            GraphError::MissingGraphUrl
                | GraphError::InvalidGraphUrl { .. }
                | GraphError::InvalidChannelFormat { .. }
                | GraphError::InvalidChannelVersion { .. }
                | GraphError::NoStartChannels
        )
    }
}

/// Result type for the discovery and aggregation core.
pub type GraphResult<T> = std::result::Result<T, GraphError>;
