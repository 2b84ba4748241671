use super::*;
use crate::update_graph::domain::{Node, RELEASE_CHANNELS_METADATA_KEY};
use std::cell::RefCell;
use std::collections::HashMap;

// Mock implementations for testing
struct MockGraphSource {
    graphs: HashMap<String, Graph>,
    fetched: RefCell<Vec<String>>,
}

impl MockGraphSource {
    fn new(graphs: Vec<(&str, Graph)>) -> Self {
        Self {
            graphs: graphs
                .into_iter()
                .map(|(channel, graph)| (channel.to_string(), graph))
                .collect(),
            fetched: RefCell::new(Vec::new()),
        }
    }
}

impl GraphSource for &MockGraphSource {
    fn fetch_graph(&self, channel: &str, _arch: &str) -> GraphResult<Graph> {
        self.fetched.borrow_mut().push(channel.to_string());
        self.graphs
            .get(channel)
            .cloned()
            .ok_or_else(|| GraphError::HttpStatus {
                status: 404,
                url: format!("http://localhost/graph?channel={}", channel),
            })
    }
}

struct MockProgressReporter;

impl ProgressReporter for MockProgressReporter {
    fn report(&self, _message: &str) {}
    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
    fn report_error(&self, _message: &str) {}
    fn report_completion(&self, _message: &str) {}
}

fn node(version: &str, channels: &str) -> Node {
    let mut metadata = HashMap::new();
    if !channels.is_empty() {
        metadata.insert(
            RELEASE_CHANNELS_METADATA_KEY.to_string(),
            channels.to_string(),
        );
    }
    Node {
        version: Some(Version::parse(version).unwrap()),
        payload: format!("quay.io/release:{}", version),
        metadata,
    }
}

fn graph(nodes: Vec<Node>, edges: Vec<Vec<i64>>) -> Graph {
    Graph {
        nodes,
        edges,
        ..Default::default()
    }
}

#[test]
fn test_plan_uses_lowest_threshold_and_union_of_prefixes() {
    let plan =
        TraversalPlan::from_start_channels(&["stable-4.17", "fast-4.16", "stable-4.16"]).unwrap();
    assert_eq!(plan.min_version, Version::parse("4.16.0").unwrap());
    assert_eq!(plan.prefixes, vec!["stable-", "fast-"]);
    assert_eq!(plan.seeds, vec!["stable-4.17", "fast-4.16", "stable-4.16"]);
}

#[test]
fn test_plan_rejects_empty_and_malformed_start_channels() {
    let empty: [&str; 0] = [];
    assert!(matches!(
        TraversalPlan::from_start_channels(&empty),
        Err(GraphError::NoStartChannels)
    ));
    assert!(matches!(
        TraversalPlan::from_start_channels(&["stable"]),
        Err(GraphError::InvalidChannelFormat { .. })
    ));
    assert!(matches!(
        TraversalPlan::from_start_channels(&["stable-four"]),
        Err(GraphError::InvalidChannelVersion { .. })
    ));
}

#[test]
fn test_malformed_start_channel_fails_before_any_fetch() {
    let source = MockGraphSource::new(vec![]);
    let use_case = DiscoverReleasesUseCase::new(&source, MockProgressReporter);

    let result = use_case.discover("stable", "amd64", &RiskAcceptance::none());

    assert!(result.is_err());
    assert!(source.fetched.borrow().is_empty());
}

#[test]
fn test_discover_single_channel_with_edge() {
    let source = MockGraphSource::new(vec![(
        "stable-4.16",
        graph(
            vec![node("4.16.1", ""), node("4.16.2", "")],
            vec![vec![0, 1]],
        ),
    )]);
    let use_case = DiscoverReleasesUseCase::new(&source, MockProgressReporter);

    let releases = use_case
        .discover("stable-4.16", "amd64", &RiskAcceptance::none())
        .unwrap();

    let table = &releases["stable-4.16"];
    assert_eq!(
        table["4.16.1"].available_upgrades().as_slice(),
        &["4.16.2".to_string()]
    );
    assert!(table["4.16.2"].available_upgrades().is_empty());
    assert_eq!(table["4.16.1"].arch(), "amd64");
}

#[test]
fn test_rediscovered_channel_is_fetched_once() {
    let source = MockGraphSource::new(vec![
        (
            "stable-4.16",
            graph(
                vec![
                    node("4.16.1", "stable-4.16,stable-4.17"),
                    node("4.16.2", "stable-4.17, stable-4.16"),
                ],
                vec![],
            ),
        ),
        (
            "stable-4.17",
            graph(vec![node("4.17.0", "stable-4.16,stable-4.17")], vec![]),
        ),
    ]);
    let use_case = DiscoverReleasesUseCase::new(&source, MockProgressReporter);

    let releases = use_case
        .discover("stable-4.16", "amd64", &RiskAcceptance::none())
        .unwrap();

    assert_eq!(*source.fetched.borrow(), vec!["stable-4.16", "stable-4.17"]);
    assert_eq!(releases.len(), 2);
}

#[test]
fn test_channel_with_no_qualifying_nodes_still_has_table() {
    let source = MockGraphSource::new(vec![(
        "stable-4.16",
        graph(vec![node("4.15.9", "")], vec![]),
    )]);
    let use_case = DiscoverReleasesUseCase::new(&source, MockProgressReporter);

    let releases = use_case
        .discover("stable-4.16", "amd64", &RiskAcceptance::none())
        .unwrap();

    assert!(releases["stable-4.16"].is_empty());
}

#[test]
fn test_fetch_failure_names_arch_and_channel() {
    let source = MockGraphSource::new(vec![(
        "stable-4.16",
        graph(vec![node("4.16.1", "stable-4.17")], vec![]),
    )]);
    let use_case = DiscoverReleasesUseCase::new(&source, MockProgressReporter);

    let err = use_case
        .discover("stable-4.16", "arm64", &RiskAcceptance::none())
        .unwrap_err();

    assert!(err
        .to_string()
        .starts_with("error fetching arm64 graph for channel stable-4.17: "));
}

#[test]
fn test_execute_fetches_extra_channels_without_discovery() {
    let source = MockGraphSource::new(vec![
        ("stable-4.16", graph(vec![node("4.16.1", "")], vec![])),
        (
            "eus-4.16",
            graph(vec![node("4.16.3", "eus-4.18")], vec![]),
        ),
    ]);
    let use_case = DiscoverReleasesUseCase::new(&source, MockProgressReporter);
    let request = DiscoveryRequest::new(vec!["stable-4.16".to_string()], "amd64")
        .with_extra_channels(vec!["eus-4.16".to_string(), "stable-4.16".to_string()]);

    let response = use_case.execute(request).unwrap();

    assert_eq!(response.fetched_channels, vec!["stable-4.16", "eus-4.16"]);
    assert!(response.releases_by_channel["eus-4.16"].contains_key("4.16.3"));
    let groups = response.releases_by_group.unwrap();
    assert_eq!(
        groups.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["eus", "stable"]
    );
}

#[test]
fn test_execute_without_aggregation() {
    let source = MockGraphSource::new(vec![(
        "stable-4.16",
        graph(vec![node("4.16.1", "")], vec![]),
    )]);
    let use_case = DiscoverReleasesUseCase::new(&source, MockProgressReporter);
    let request =
        DiscoveryRequest::new(vec!["stable-4.16".to_string()], "amd64").with_aggregate(false);

    let response = use_case.execute(request).unwrap();

    assert!(response.releases_by_group.is_none());
    assert_eq!(response.release_count(), 1);
}

#[test]
fn test_skipped_candidates_are_reported_once() {
    let source = MockGraphSource::new(vec![(
        "stable-4.16",
        graph(
            vec![
                node("4.16.1", "stable-next"),
                node("4.16.2", "stable-next"),
            ],
            vec![],
        ),
    )]);
    let use_case = DiscoverReleasesUseCase::new(&source, MockProgressReporter);

    let response = use_case
        .execute(DiscoveryRequest::new(
            vec!["stable-4.16".to_string()],
            "amd64",
        ))
        .unwrap();

    assert_eq!(response.skipped_channels.len(), 1);
    assert_eq!(response.skipped_channels[0].channel, "stable-next");
    assert_eq!(response.fetched_channels, vec!["stable-4.16"]);
}
