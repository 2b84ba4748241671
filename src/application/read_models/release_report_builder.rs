//! Builder turning a discovery response into a ReleaseReport

use super::release_report::{ReleaseReport, ReportMetadata};
use crate::application::dto::{DiscoveryRequest, DiscoveryResponse};
use crate::shared::GraphResult;
use crate::update_graph::domain::{
    releases_in_version_order, Release, ReleasesByChannel, VersionReleases,
};
use crate::update_graph::services::ChannelGroupAggregator;
use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::BTreeMap;

pub const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct ReleaseReportBuilder;

impl ReleaseReportBuilder {
    /// Builds the report, stamped with the current time
    pub fn build(
        request: &DiscoveryRequest,
        response: &DiscoveryResponse,
    ) -> GraphResult<ReleaseReport> {
        Self::build_at(request, response, Utc::now())
    }

    /// Builds the report with an explicit timestamp
    ///
    /// Uses the grouped view when the response carries one. Upgrade targets
    /// are sorted here since the traversal leaves per-channel tables in
    /// edge order.
    pub fn build_at(
        request: &DiscoveryRequest,
        response: &DiscoveryResponse,
        generated_at: DateTime<Utc>,
    ) -> GraphResult<ReleaseReport> {
        let sorted = response
            .view()
            .iter()
            .map(|(name, table)| {
                Ok((
                    name.clone(),
                    ChannelGroupAggregator::sort_upgrades(table.clone())?,
                ))
            })
            .collect::<GraphResult<ReleasesByChannel>>()?;

        Ok(ReleaseReport {
            metadata: Self::build_metadata(request, generated_at),
            channels: Self::ordered(&sorted),
            grouped: response.releases_by_group.is_some(),
        })
    }

    fn build_metadata(request: &DiscoveryRequest, generated_at: DateTime<Utc>) -> ReportMetadata {
        ReportMetadata {
            tool: TOOL_NAME.to_string(),
            version: TOOL_VERSION.to_string(),
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            arch: request.arch.clone(),
            start_channels: request.start_channels.clone(),
            accepted_risks: request.accepted_risks.clone(),
        }
    }

    fn ordered(tables: &BTreeMap<String, VersionReleases>) -> BTreeMap<String, Vec<Release>> {
        tables
            .iter()
            .map(|(name, table)| {
                let releases = releases_in_version_order(table)
                    .into_iter()
                    .cloned()
                    .collect();
                (name.clone(), releases)
            })
            .collect()
    }
}
