use super::ReleaseExtractor;
use crate::shared::{GraphError, GraphResult};
use crate::update_graph::domain::{ConditionalEdgeGroup, Graph, Version, VersionReleases};
use crate::update_graph::policies::RiskAcceptance;

/// EdgeResolver service filling in each release's available upgrades
///
/// Unconditional edges reference nodes by index; conditional edges
/// reference versions by string. Either kind only updates a release that
/// already exists in the table, so both rely on the minimum-version gate
/// applied when releases were extracted.
pub struct EdgeResolver;

impl EdgeResolver {
    /// Applies unconditional edges, then every accepted conditional group
    pub fn resolve(
        graph: &Graph,
        min_version: &Version,
        acceptance: &RiskAcceptance,
        releases: &mut VersionReleases,
    ) -> GraphResult<()> {
        Self::apply_edges(graph, min_version, releases)?;
        Self::apply_conditional_edges(&graph.conditional_edges, acceptance, releases);
        Ok(())
    }

    /// Validates every index pair, returning them as node positions.
    ///
    /// The whole list is checked before anything is applied.
    pub fn edge_indices(graph: &Graph) -> GraphResult<Vec<(usize, usize)>> {
        let node_count = graph.node_count();
        let in_range = |idx: i64| usize::try_from(idx).ok().filter(|&i| i < node_count);

        graph
            .edges
            .iter()
            .enumerate()
            .map(|(position, edge)| {
                if edge.len() < 2 {
                    return Err(GraphError::MalformedEdge {
                        edge: edge.clone(),
                        position,
                    });
                }
                match (in_range(edge[0]), in_range(edge[1])) {
                    (Some(from), Some(to)) => Ok((from, to)),
                    _ => Err(GraphError::EdgeOutOfRange {
                        edge: edge.clone(),
                        position,
                        node_count,
                    }),
                }
            })
            .collect()
    }

    /// Applies the graph's unconditional edges.
    ///
    /// An edge contributes when the source version already has a release
    /// and the target version meets `min_version`. Returns the number of
    /// upgrade targets added.
    pub fn apply_edges(
        graph: &Graph,
        min_version: &Version,
        releases: &mut VersionReleases,
    ) -> GraphResult<usize> {
        let mut added = 0;

        for (from, to) in Self::edge_indices(graph)? {
            let (Some(from_version), Some(to_version)) = (
                graph.nodes[from].version.as_ref(),
                graph.nodes[to].version.as_ref(),
            ) else {
                continue;
            };
            if !ReleaseExtractor::qualifies(Some(to_version), min_version) {
                continue;
            }
            if Self::append_upgrade(releases, &from_version.to_string(), &to_version.to_string()) {
                added += 1;
            }
        }

        Ok(added)
    }

    /// Applies conditional edge groups whose risks are all accepted.
    ///
    /// Returns the number of upgrade targets added.
    pub fn apply_conditional_edges(
        groups: &[ConditionalEdgeGroup],
        acceptance: &RiskAcceptance,
        releases: &mut VersionReleases,
    ) -> usize {
        groups
            .iter()
            .filter(|group| acceptance.accepts(group))
            .flat_map(|group| group.edges.iter())
            .filter(|edge| Self::append_upgrade(releases, &edge.from, &edge.to))
            .count()
    }

    /// Read-modify-write of one release; false when nothing changed
    fn append_upgrade(releases: &mut VersionReleases, from: &str, to: &str) -> bool {
        let Some(current) = releases.get(from) else {
            return false;
        };
        if current.available_upgrades().contains(to) {
            return false;
        }
        let updated = current.clone().with_upgrade(to);
        releases.insert(from.to_string(), updated);
        true
    }
}
