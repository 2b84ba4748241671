use crate::update_graph::domain::Release;
use serde::Serialize;
use std::collections::BTreeMap;

/// Information about the run that produced a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportMetadata {
    pub tool: String,
    pub version: String,
    /// RFC 3339 timestamp, UTC
    pub generated_at: String,
    pub arch: String,
    pub start_channels: Vec<String>,
    pub accepted_risks: Vec<String>,
}

/// Releases ready for formatting
///
/// `channels` is keyed by channel name, or by group name when the report
/// was aggregated. Each list is in ascending version order with upgrade
/// targets sorted.
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseReport {
    pub metadata: ReportMetadata,
    pub channels: BTreeMap<String, Vec<Release>>,
    #[serde(skip)]
    pub grouped: bool,
}

impl ReleaseReport {
    pub fn release_count(&self) -> usize {
        self.channels.values().map(Vec::len).sum()
    }
}
