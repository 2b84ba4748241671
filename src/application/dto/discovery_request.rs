/// DiscoveryRequest - input of the release discovery use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryRequest {
    /// Channels seeding the traversal, in queue order
    pub start_channels: Vec<String>,
    /// Channels fetched directly after the traversal, never used for discovery
    pub extra_channels: Vec<String>,
    /// Architecture tag sent to the graph source
    pub arch: String,
    /// Risk names under which conditional edges may be taken
    pub accepted_risks: Vec<String>,
    /// Whether to build the channel-group view
    pub aggregate: bool,
}

impl DiscoveryRequest {
    pub fn new(start_channels: Vec<String>, arch: impl Into<String>) -> Self {
        Self {
            start_channels,
            extra_channels: Vec::new(),
            arch: arch.into(),
            accepted_risks: Vec::new(),
            aggregate: true,
        }
    }

    pub fn with_extra_channels(mut self, extra_channels: Vec<String>) -> Self {
        self.extra_channels = extra_channels;
        self
    }

    pub fn with_accepted_risks(mut self, accepted_risks: Vec<String>) -> Self {
        self.accepted_risks = accepted_risks;
        self
    }

    pub fn with_aggregate(mut self, aggregate: bool) -> Self {
        self.aggregate = aggregate;
        self
    }
}
