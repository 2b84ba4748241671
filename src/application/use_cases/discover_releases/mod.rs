use crate::application::dto::{DiscoveryRequest, DiscoveryResponse};
use crate::ports::outbound::{GraphSource, ProgressReporter};
use crate::shared::{GraphError, GraphResult};
use crate::update_graph::domain::{ChannelName, Graph, ReleasesByChannel, Version, VersionReleases};
use crate::update_graph::policies::RiskAcceptance;
use crate::update_graph::services::{
    ChannelDiscoverer, ChannelGroupAggregator, EdgeResolver, ReleaseExtractor, SkippedChannel,
};
use std::collections::{BTreeSet, VecDeque};

/// Seeds, discovery prefixes and threshold shared by one traversal
#[derive(Debug, Clone)]
struct TraversalPlan {
    seeds: Vec<String>,
    prefixes: Vec<String>,
    min_version: Version,
}

impl TraversalPlan {
    /// Derives the plan from the start channels.
    ///
    /// The minimum qualifying version is the lowest start threshold and the
    /// discovery prefixes are the union of the start prefixes.
    fn from_start_channels<S: AsRef<str>>(start_channels: &[S]) -> GraphResult<Self> {
        let parsed = start_channels
            .iter()
            .map(|channel| ChannelName::parse(channel.as_ref()))
            .collect::<GraphResult<Vec<_>>>()?;

        let min_version = parsed
            .iter()
            .map(ChannelName::version)
            .min()
            .cloned()
            .ok_or(GraphError::NoStartChannels)?;

        let mut prefixes: Vec<String> = Vec::new();
        for channel in &parsed {
            if !prefixes.iter().any(|p| p == channel.prefix()) {
                prefixes.push(channel.prefix().to_string());
            }
        }

        Ok(Self {
            seeds: parsed.iter().map(|c| c.name().to_string()).collect(),
            prefixes,
            min_version,
        })
    }
}

/// Mutable state owned by a single traversal run
#[derive(Debug, Default)]
struct TraversalState {
    queue: VecDeque<String>,
    queued: BTreeSet<String>,
    processed: BTreeSet<String>,
    releases: ReleasesByChannel,
    fetch_order: Vec<String>,
    skipped: Vec<SkippedChannel>,
}

impl TraversalState {
    fn seeded(seeds: &[String]) -> Self {
        let mut state = Self::default();
        for seed in seeds {
            state.enqueue(seed);
        }
        state
    }

    /// Queues `channel` unless it was already queued or processed
    fn enqueue(&mut self, channel: &str) -> bool {
        if self.queued.contains(channel) || self.processed.contains(channel) {
            return false;
        }
        self.queued.insert(channel.to_string());
        self.queue.push_back(channel.to_string());
        true
    }

    fn record_skipped(&mut self, skipped: SkippedChannel) -> bool {
        if self.skipped.iter().any(|s| s.channel == skipped.channel) {
            return false;
        }
        self.skipped.push(skipped);
        true
    }
}

/// Result of one traversal, before any aggregation
struct TraversalOutcome {
    releases: ReleasesByChannel,
    fetch_order: Vec<String>,
    skipped: Vec<SkippedChannel>,
}

/// DiscoverReleasesUseCase - breadth-first release discovery across channels
///
/// Starting from one or more channels, fetches each channel's graph once,
/// keeps the releases at or above the minimum qualifying version, resolves
/// their upgrade edges and follows co-membership metadata to channels that
/// share a start prefix. Any fetch or structural error aborts the whole run
/// and discards what was accumulated.
///
/// # Type Parameters
/// * `GS` - GraphSource implementation
/// * `PR` - ProgressReporter implementation
pub struct DiscoverReleasesUseCase<GS, PR> {
    graph_source: GS,
    progress_reporter: PR,
}

impl<GS, PR> DiscoverReleasesUseCase<GS, PR>
where
    GS: GraphSource,
    PR: ProgressReporter,
{
    /// Creates a new DiscoverReleasesUseCase with injected dependencies
    pub fn new(graph_source: GS, progress_reporter: PR) -> Self {
        Self {
            graph_source,
            progress_reporter,
        }
    }

    /// Discovers releases reachable from a single start channel
    ///
    /// # Errors
    /// Returns an error if the start channel is malformed, a fetch fails,
    /// or a fetched graph has an invalid edge.
    pub fn discover(
        &self,
        start_channel: &str,
        arch: &str,
        acceptance: &RiskAcceptance,
    ) -> GraphResult<ReleasesByChannel> {
        self.discover_many(&[start_channel], arch, acceptance)
    }

    /// Discovers releases from several start channels in one traversal
    pub fn discover_many<S: AsRef<str>>(
        &self,
        start_channels: &[S],
        arch: &str,
        acceptance: &RiskAcceptance,
    ) -> GraphResult<ReleasesByChannel> {
        let plan = TraversalPlan::from_start_channels(start_channels)?;
        let extra: [&str; 0] = [];
        Ok(self.traverse(&plan, &extra, arch, acceptance)?.releases)
    }

    /// Executes the full discovery request
    ///
    /// Runs the traversal, fetches the extra channels, then builds the
    /// channel-group view when requested.
    pub fn execute(&self, request: DiscoveryRequest) -> GraphResult<DiscoveryResponse> {
        let plan = TraversalPlan::from_start_channels(&request.start_channels)?;
        let acceptance = RiskAcceptance::new(request.accepted_risks.iter().cloned());

        self.progress_reporter.report(&format!(
            "🔍 Discovering {} releases from {} (minimum version {})",
            request.arch,
            plan.seeds.join(", "),
            plan.min_version
        ));

        let outcome = self.traverse(&plan, &request.extra_channels, &request.arch, &acceptance)?;

        let releases_by_group = if request.aggregate {
            self.progress_reporter
                .report("📊 Aggregating channels into groups...");
            Some(ChannelGroupAggregator::aggregate(&outcome.releases)?)
        } else {
            None
        };

        let response = DiscoveryResponse {
            releases_by_channel: outcome.releases,
            fetched_channels: outcome.fetch_order,
            skipped_channels: outcome.skipped,
            releases_by_group,
        };

        self.progress_reporter.report_completion(&format!(
            "✅ Discovered {} release(s) across {} channel(s)",
            response.release_count(),
            response.fetched_channels.len()
        ));
        if !response.skipped_channels.is_empty() {
            self.progress_reporter.report(&format!(
                "   - Skipped {} channel(s) with malformed versions",
                response.skipped_channels.len()
            ));
        }

        Ok(response)
    }

    /// The traversal loop: breadth-first over discovered channels, then a
    /// single pass over the extra channels.
    fn traverse<E: AsRef<str>>(
        &self,
        plan: &TraversalPlan,
        extra_channels: &[E],
        arch: &str,
        acceptance: &RiskAcceptance,
    ) -> GraphResult<TraversalOutcome> {
        let mut state = TraversalState::seeded(&plan.seeds);

        while let Some(channel) = state.queue.pop_front() {
            if !state.processed.insert(channel.clone()) {
                continue;
            }

            let total = Self::known_channels(&state, extra_channels);
            let graph = self.fetch(&channel, arch, &mut state, total)?;
            self.discover_channels(&graph, plan, &mut state);
            self.store_releases(&graph, &channel, arch, plan, acceptance, &mut state)?;
        }

        for extra in extra_channels {
            let channel = extra.as_ref();
            if !state.processed.insert(channel.to_string()) {
                continue;
            }

            let total = Self::known_channels(&state, extra_channels);
            let graph = self.fetch(channel, arch, &mut state, total)?;
            self.store_releases(&graph, channel, arch, plan, acceptance, &mut state)?;
        }

        Ok(TraversalOutcome {
            releases: state.releases,
            fetch_order: state.fetch_order,
            skipped: state.skipped,
        })
    }

    /// Channels queued so far plus extra channels not among them
    fn known_channels<E: AsRef<str>>(state: &TraversalState, extra_channels: &[E]) -> usize {
        let extra: BTreeSet<&str> = extra_channels
            .iter()
            .map(|e| e.as_ref())
            .filter(|e| !state.queued.contains(*e))
            .collect();
        state.queued.len() + extra.len()
    }

    /// Fetches one channel, wrapping failures with arch and channel
    fn fetch(
        &self,
        channel: &str,
        arch: &str,
        state: &mut TraversalState,
        total: usize,
    ) -> GraphResult<Graph> {
        state.fetch_order.push(channel.to_string());
        self.progress_reporter.report_progress(
            state.fetch_order.len(),
            total.max(state.fetch_order.len()),
            Some(&format!("Fetching {} ({})", channel, arch)),
        );

        self.graph_source
            .fetch_graph(channel, arch)
            .map_err(|source| GraphError::ChannelFetch {
                arch: arch.to_string(),
                channel: channel.to_string(),
                source: Box::new(source),
            })
    }

    fn store_releases(
        &self,
        graph: &Graph,
        channel: &str,
        arch: &str,
        plan: &TraversalPlan,
        acceptance: &RiskAcceptance,
        state: &mut TraversalState,
    ) -> GraphResult<()> {
        let table = Self::collect_releases(graph, channel, arch, &plan.min_version, acceptance)?;
        self.progress_reporter
            .report(&format!("   - {}: {} release(s)", channel, table.len()));
        state.releases.insert(channel.to_string(), table);
        Ok(())
    }

    /// Queues newly reachable channels and records skipped candidates
    fn discover_channels(&self, graph: &Graph, plan: &TraversalPlan, state: &mut TraversalState) {
        for node in &graph.nodes {
            let discovery = ChannelDiscoverer::discover(node, &plan.prefixes, &plan.min_version);

            for candidate in &discovery.candidates {
                state.enqueue(candidate);
            }
            for skipped in discovery.skipped {
                let message = format!(
                    "⚠️  Warning: Skipping channel '{}': {}",
                    skipped.channel, skipped.reason
                );
                if state.record_skipped(skipped) {
                    self.progress_reporter.report_error(&message);
                }
            }
        }
    }

    /// Builds one channel's release table: extraction, then edges
    fn collect_releases(
        graph: &Graph,
        channel: &str,
        arch: &str,
        min_version: &Version,
        acceptance: &RiskAcceptance,
    ) -> GraphResult<VersionReleases> {
        let mut table = VersionReleases::new();
        for node in &graph.nodes {
            if let Some(release) = ReleaseExtractor::extract(node, channel, arch, min_version) {
                table.insert(release.version().to_string(), release);
            }
        }

        EdgeResolver::resolve(graph, min_version, acceptance, &mut table)?;
        Ok(table)
    }
}

#[cfg(test)]
mod tests;
