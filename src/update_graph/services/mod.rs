mod channel_discoverer;
mod channel_group_aggregator;
mod edge_resolver;
mod release_extractor;

pub use channel_discoverer::{ChannelDiscoverer, ChannelDiscovery, SkippedChannel};
pub use channel_group_aggregator::ChannelGroupAggregator;
pub use edge_resolver::EdgeResolver;
pub use release_extractor::ReleaseExtractor;
