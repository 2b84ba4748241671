use super::Version;
use crate::shared::{GraphError, GraphResult};

/// Separator between a channel's group prefix and its version token
pub const CHANNEL_SEPARATOR: char = '-';

/// A channel name split at its first separator, e.g. `stable-4.16` into
/// prefix `stable-` and version `4.16`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelName {
    name: String,
    prefix: String,
    version: Version,
}

impl ChannelName {
    /// Parses a channel name, requiring a separator and a version token
    pub fn parse(channel: &str) -> GraphResult<Self> {
        let (prefix, token) = split_channel(channel)?;
        let version =
            Version::parse(token).map_err(|source| GraphError::InvalidChannelVersion {
                channel: channel.to_string(),
                source,
            })?;

        Ok(Self {
            name: channel.to_string(),
            prefix: prefix.to_string(),
            version,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Prefix including the trailing separator (`stable-`)
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Version token parsed from the part after the separator
    pub fn version(&self) -> &Version {
        &self.version
    }
}

/// Splits a channel into (prefix including separator, remainder).
pub fn split_channel(channel: &str) -> GraphResult<(&str, &str)> {
    match channel.find(CHANNEL_SEPARATOR) {
        Some(idx) => {
            let split = idx + CHANNEL_SEPARATOR.len_utf8();
            Ok((&channel[..split], &channel[split..]))
        }
        None => Err(GraphError::InvalidChannelFormat {
            channel: channel.to_string(),
        }),
    }
}

/// Group key of a channel: everything before the first separator, or the
/// whole name when there is none (`stable-4.16` -> `stable`).
pub fn channel_group(channel: &str) -> &str {
    match channel.find(CHANNEL_SEPARATOR) {
        Some(idx) => &channel[..idx],
        None => channel,
    }
}
