use super::Version;
use crate::shared::{GraphError, GraphResult};
use serde::Serialize;
use std::collections::BTreeMap;

/// Deduplicated list of upgrade-target version strings
///
/// Targets keep insertion order until [`AvailableUpgrades::sorted`] orders
/// them by version precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AvailableUpgrades(Vec<String>);

impl AvailableUpgrades {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn contains(&self, target: &str) -> bool {
        self.0.iter().any(|existing| existing == target)
    }

    /// Returns the list with `target` appended unless already present
    pub fn with(mut self, target: &str) -> Self {
        if !self.contains(target) {
            self.0.push(target.to_string());
        }
        self
    }

    /// Union with `other`, keeping this list's order and appending new entries
    pub fn merged(self, other: &AvailableUpgrades) -> Self {
        other.iter().fold(self, |acc, target| acc.with(target))
    }

    /// Sorts ascending by version; `owner` names the release in the error
    pub fn sorted(self, owner: &str) -> GraphResult<Self> {
        let mut parsed = self
            .0
            .into_iter()
            .enumerate()
            .map(|(index, target)| match Version::parse(&target) {
                Ok(version) => Ok((version, target)),
                Err(source) => Err(GraphError::InvalidUpgradeVersion {
                    version: owner.to_string(),
                    index,
                    target,
                    source,
                }),
            })
            .collect::<GraphResult<Vec<_>>>()?;

        parsed.sort_by(|(a, _), (b, _)| a.cmp(b));
        Ok(Self(parsed.into_iter().map(|(_, target)| target).collect()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for AvailableUpgrades {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        iter.into_iter()
            .fold(AvailableUpgrades::new(), |acc, target| acc.with(&target.into()))
    }
}

/// Release discovered in one channel for one architecture
///
/// Treated as a value: updates produce a new `Release` that replaces the
/// stored one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Release {
    version: String,
    channel: String,
    arch: String,
    payload: String,
    available_upgrades: AvailableUpgrades,
}

impl Release {
    pub fn new(version: String, channel: String, arch: String, payload: String) -> Self {
        Self {
            version,
            channel,
            arch,
            payload,
            available_upgrades: AvailableUpgrades::new(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn arch(&self) -> &str {
        &self.arch
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn available_upgrades(&self) -> &AvailableUpgrades {
        &self.available_upgrades
    }

    /// Returns this release with `target` added to its upgrades
    pub fn with_upgrade(self, target: &str) -> Self {
        Self {
            available_upgrades: self.available_upgrades.with(target),
            ..self
        }
    }

    /// Returns this release with the given upgrades replacing the current list
    pub fn with_upgrades(self, available_upgrades: AvailableUpgrades) -> Self {
        Self {
            available_upgrades,
            ..self
        }
    }
}

/// Releases of one channel keyed by normalized version string
pub type VersionReleases = BTreeMap<String, Release>;

/// Per-channel (or per-group) release tables keyed by name
pub type ReleasesByChannel = BTreeMap<String, VersionReleases>;

/// Releases of a table ordered by version precedence rather than by key
pub fn releases_in_version_order(releases: &VersionReleases) -> Vec<&Release> {
    let mut ordered: Vec<(Option<Version>, &Release)> = releases
        .values()
        .map(|release| (Version::parse(release.version()).ok(), release))
        .collect();
    ordered.sort_by(|(a, ra), (b, rb)| match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        _ => ra.version().cmp(rb.version()),
    });
    ordered.into_iter().map(|(_, release)| release).collect()
}
