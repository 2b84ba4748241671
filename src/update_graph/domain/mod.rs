pub mod channel;
pub mod graph;
pub mod release;
pub mod version;

pub use channel::{channel_group, split_channel, ChannelName, CHANNEL_SEPARATOR};
pub use graph::{
    ConditionalEdge, ConditionalEdgeGroup, Graph, Node, Risk, RELEASE_CHANNELS_METADATA_KEY,
};
pub use release::{
    releases_in_version_order, AvailableUpgrades, Release, ReleasesByChannel, VersionReleases,
};
pub use version::Version;
