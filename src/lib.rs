//! upgrade-graph - release discovery over a channel-partitioned update graph
//!
//! Starting from one or more channels (`stable-4.16`), the library walks the
//! update service breadth-first, keeps every release at or above the start
//! channel's version, resolves unconditional and risk-gated upgrade edges,
//! and merges channels into channel groups (`stable`).
//!
//! # Architecture
//!
//! - **Domain Layer** (`update_graph`): versions, graphs, releases and the pure services
//! - **Application Layer** (`application`): the discovery use case, DTOs and read models
//! - **Ports** (`ports`): interfaces for the graph source, progress and output
//! - **Adapters** (`adapters`): HTTP client, stderr progress, formatters, file output
//! - **Shared** (`shared`): error types and result aliases
//!
//! # Example
//!
//! ```no_run
//! use upgrade_graph::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let graph_source = CincinnatiGraphSource::new(Some(CincinnatiGraphSource::DEFAULT_GRAPH_URL))?;
//! let use_case = DiscoverReleasesUseCase::new(graph_source, StderrProgressReporter::new());
//!
//! let request = DiscoveryRequest::new(vec!["stable-4.16".to_string()], "amd64")
//!     .with_accepted_risks(vec!["PreRelease".to_string()]);
//! let response = use_case.execute(request.clone())?;
//!
//! let report = ReleaseReportBuilder::build(&request, &response)?;
//! println!("{}", JsonFormatter::new().format(&report)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod shared;
pub mod update_graph;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::CincinnatiGraphSource;
    pub use crate::application::dto::{DiscoveryRequest, DiscoveryResponse, OutputFormat};
    pub use crate::application::read_models::{ReleaseReport, ReleaseReportBuilder};
    pub use crate::application::use_cases::DiscoverReleasesUseCase;
    pub use crate::ports::outbound::{
        GraphSource, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::{GraphError, GraphResult, Result};
    pub use crate::update_graph::domain::{
        Graph, Node, Release, ReleasesByChannel, Version, VersionReleases,
    };
    pub use crate::update_graph::policies::RiskAcceptance;
    pub use crate::update_graph::services::{ChannelGroupAggregator, SkippedChannel};
}
