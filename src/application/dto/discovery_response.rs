use crate::update_graph::domain::ReleasesByChannel;
use crate::update_graph::services::SkippedChannel;

/// DiscoveryResponse - output of the release discovery use case
#[derive(Debug, Clone, Default)]
pub struct DiscoveryResponse {
    /// Releases per fetched channel
    pub releases_by_channel: ReleasesByChannel,
    /// Channels in the order they were fetched
    pub fetched_channels: Vec<String>,
    /// Discovery candidates dropped for a malformed version token
    pub skipped_channels: Vec<SkippedChannel>,
    /// Releases per channel group, present when aggregation was requested
    pub releases_by_group: Option<ReleasesByChannel>,
}

impl DiscoveryResponse {
    /// Total number of releases over every fetched channel
    pub fn release_count(&self) -> usize {
        self.releases_by_channel.values().map(|table| table.len()).sum()
    }

    /// The grouped view when present, the per-channel tables otherwise
    pub fn view(&self) -> &ReleasesByChannel {
        self.releases_by_group
            .as_ref()
            .unwrap_or(&self.releases_by_channel)
    }
}
