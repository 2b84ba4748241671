use crate::update_graph::domain::{Node, Version};
use serde::Serialize;

/// Listed channel that shared a discovery prefix but whose version token
/// could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedChannel {
    pub channel: String,
    pub reason: String,
}

/// Outcome of inspecting one node's channel metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelDiscovery {
    /// Candidate channels, in metadata order
    pub candidates: Vec<String>,
    /// Candidates dropped because their version token is malformed
    pub skipped: Vec<SkippedChannel>,
}

/// ChannelDiscoverer service finding channels reachable from a node
///
/// A listed channel is a candidate when it starts with one of the discovery
/// prefixes and its trailing version is at least the minimum qualifying
/// version. Malformed trailing versions are skipped and reported, never
/// fatal.
pub struct ChannelDiscoverer;

impl ChannelDiscoverer {
    pub fn discover<P: AsRef<str>>(node: &Node, prefixes: &[P], min_version: &Version) -> ChannelDiscovery {
        let mut discovery = ChannelDiscovery::default();

        for channel in node.listed_channels() {
            let Some(prefix) = prefixes
                .iter()
                .map(|p| p.as_ref())
                .find(|prefix: &&str| channel.starts_with(*prefix))
            else {
                continue;
            };

            let token = channel[prefix.len()..].trim();
            match Version::parse(token) {
                Ok(version) if &version >= min_version => {
                    if !discovery.candidates.iter().any(|c| c == channel) {
                        discovery.candidates.push(channel.to_string());
                    }
                }
                Ok(_) => {}
                Err(e) => discovery.skipped.push(SkippedChannel {
                    channel: channel.to_string(),
                    reason: e.to_string(),
                }),
            }
        }

        discovery
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::update_graph::domain::RELEASE_CHANNELS_METADATA_KEY;
    use std::collections::HashMap;

    fn node_with_channels(channels: &str) -> Node {
        Node {
            version: Some(Version::parse("4.16.2").unwrap()),
            payload: "p".to_string(),
            metadata: HashMap::from([(
                RELEASE_CHANNELS_METADATA_KEY.to_string(),
                channels.to_string(),
            )]),
        }
    }

    fn min() -> Version {
        Version::parse("4.16").unwrap()
    }

    #[test]
    fn test_discovers_same_prefix_channels() {
        let node = node_with_channels("stable-4.16,stable-4.17");
        let discovery = ChannelDiscoverer::discover(&node, &["stable-"], &min());
        assert_eq!(discovery.candidates, vec!["stable-4.16", "stable-4.17"]);
        assert!(discovery.skipped.is_empty());
    }

    #[test]
    fn test_ignores_other_prefixes() {
        let node = node_with_channels("fast-4.17, candidate-4.18, eus-4.18");
        let discovery = ChannelDiscoverer::discover(&node, &["stable-"], &min());
        assert!(discovery.candidates.is_empty());
        assert!(discovery.skipped.is_empty());
    }

    #[test]
    fn test_ignores_channels_below_minimum() {
        let node = node_with_channels("stable-4.14,stable-4.15,stable-4.16");
        let discovery = ChannelDiscoverer::discover(&node, &["stable-"], &min());
        assert_eq!(discovery.candidates, vec!["stable-4.16"]);
    }

    #[test]
    fn test_trims_whitespace() {
        let node = node_with_channels("  stable-4.17 ,\tstable-4.18\n");
        let discovery = ChannelDiscoverer::discover(&node, &["stable-"], &min());
        assert_eq!(discovery.candidates, vec!["stable-4.17", "stable-4.18"]);
    }

    #[test]
    fn test_malformed_version_is_skipped_not_fatal() {
        let node = node_with_channels("stable-next,stable-4.17");
        let discovery = ChannelDiscoverer::discover(&node, &["stable-"], &min());
        assert_eq!(discovery.candidates, vec!["stable-4.17"]);
        assert_eq!(discovery.skipped.len(), 1);
        assert_eq!(discovery.skipped[0].channel, "stable-next");
        assert!(discovery.skipped[0].reason.contains("next"));
    }

    #[test]
    fn test_multiple_prefixes() {
        let node = node_with_channels("stable-4.17,fast-4.17,eus-4.18");
        let discovery = ChannelDiscoverer::discover(&node, &["stable-", "fast-"], &min());
        assert_eq!(discovery.candidates, vec!["stable-4.17", "fast-4.17"]);
    }

    #[test]
    fn test_node_without_metadata() {
        let node = Node::default();
        let discovery = ChannelDiscoverer::discover(&node, &["stable-"], &min());
        assert_eq!(discovery, ChannelDiscovery::default());
    }
}
