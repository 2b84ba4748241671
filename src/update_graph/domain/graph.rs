use super::Version;
use serde::Deserialize;
use std::collections::HashMap;

/// Metadata key listing every other channel a release node belongs to
pub const RELEASE_CHANNELS_METADATA_KEY: &str = "io.openshift.upgrades.graph.release.channels";

/// Upgrade graph for one (channel, architecture) pair
///
/// Edges are kept as raw integer lists; their shape and bounds are checked
/// by the edge resolver so a bad pair fails the traversal instead of the decode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Vec<i64>>,
    #[serde(default, rename = "conditionalEdges")]
    pub conditional_edges: Vec<ConditionalEdgeGroup>,
}

impl Graph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// A single release node
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Node {
    #[serde(default)]
    pub version: Option<Version>,
    #[serde(default)]
    pub payload: String,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl Node {
    /// Channels listed in the co-membership metadata, trimmed, empties dropped
    pub fn listed_channels(&self) -> Vec<&str> {
        self.metadata
            .get(RELEASE_CHANNELS_METADATA_KEY)
            .map(|channels| {
                channels
                    .split(',')
                    .map(str::trim)
                    .filter(|ch| !ch.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Named risk attached to a conditional edge group
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Risk {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Upgrade edge identified by version strings rather than node indices
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConditionalEdge {
    pub from: String,
    pub to: String,
}

/// Edges that may only be taken when every listed risk is accepted
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConditionalEdgeGroup {
    #[serde(default)]
    pub edges: Vec<ConditionalEdge>,
    #[serde(default)]
    pub risks: Vec<Risk>,
}

impl ConditionalEdgeGroup {
    pub fn risk_names(&self) -> impl Iterator<Item = &str> {
        self.risks.iter().map(|risk| risk.name.as_str())
    }
}
