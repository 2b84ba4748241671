use crate::update_graph::domain::{Node, Release, Version};

/// ReleaseExtractor service turning graph nodes into releases
///
/// Nodes without a version, or below the minimum qualifying version, are
/// dropped without error.
pub struct ReleaseExtractor;

impl ReleaseExtractor {
    /// True when `version` is present and at least `min_version`
    pub fn qualifies(version: Option<&Version>, min_version: &Version) -> bool {
        version.is_some_and(|v| v >= min_version)
    }

    /// Builds the release for `node` if it qualifies
    pub fn extract(node: &Node, channel: &str, arch: &str, min_version: &Version) -> Option<Release> {
        let version = node.version.as_ref()?;
        if !Self::qualifies(Some(version), min_version) {
            return None;
        }

        Some(Release::new(
            version.to_string(),
            channel.to_string(),
            arch.to_string(),
            node.payload.clone(),
        ))
    }
}
