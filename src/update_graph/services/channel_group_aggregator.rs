use crate::shared::GraphResult;
use crate::update_graph::domain::{channel_group, ReleasesByChannel, VersionReleases};

/// ChannelGroupAggregator service merging per-channel tables into groups
///
/// Channels sharing a prefix (`stable-4.16`, `stable-4.17`) fold into one
/// group (`stable`). For a version seen in several channels, the first
/// channel in name order supplies the scalar fields and the upgrade lists
/// are unioned. Every resulting list is sorted by version precedence.
pub struct ChannelGroupAggregator;

impl ChannelGroupAggregator {
    pub fn aggregate(per_channel: &ReleasesByChannel) -> GraphResult<ReleasesByChannel> {
        let mut grouped = ReleasesByChannel::new();

        for (channel, releases) in per_channel {
            let table = grouped.entry(channel_group(channel).to_string()).or_default();
            Self::merge_into(table, releases);
        }

        grouped
            .into_iter()
            .map(|(group, table)| Ok((group, Self::sort_upgrades(table)?)))
            .collect()
    }

    fn merge_into(table: &mut VersionReleases, releases: &VersionReleases) {
        for (version, release) in releases {
            let merged = match table.get(version) {
                Some(existing) => {
                    let upgrades = existing
                        .available_upgrades()
                        .clone()
                        .merged(release.available_upgrades());
                    existing.clone().with_upgrades(upgrades)
                }
                None => release.clone(),
            };
            table.insert(version.clone(), merged);
        }
    }

    /// Sorts every release's upgrade list by version precedence
    pub fn sort_upgrades(table: VersionReleases) -> GraphResult<VersionReleases> {
        table
            .into_iter()
            .map(|(version, release)| {
                let sorted = release.available_upgrades().clone().sorted(&version)?;
                Ok((version, release.with_upgrades(sorted)))
            })
            .collect()
    }
}
