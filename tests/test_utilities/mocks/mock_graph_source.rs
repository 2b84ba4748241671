use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use upgrade_graph::prelude::*;

/// Decodes a graph document the same way the HTTP adapter does
fn graph_from_json(value: serde_json::Value) -> Graph {
    serde_json::from_value(value).unwrap()
}

/// Mock GraphSource serving canned graphs and recording fetch order
///
/// Channels without a graph answer 404; channels registered with
/// [`MockGraphSource::with_failure`] answer the given status.
#[derive(Default, Clone)]
pub struct MockGraphSource {
    graphs: HashMap<String, Graph>,
    failures: HashMap<String, u16>,
    fetched: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockGraphSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_graph(mut self, channel: &str, graph: Graph) -> Self {
        self.graphs.insert(channel.to_string(), graph);
        self
    }

    pub fn with_json(self, channel: &str, value: serde_json::Value) -> Self {
        self.with_graph(channel, graph_from_json(value))
    }

    pub fn with_failure(mut self, channel: &str, status: u16) -> Self {
        self.failures.insert(channel.to_string(), status);
        self
    }

    /// Channels in fetch order
    pub fn fetched_channels(&self) -> Vec<String> {
        self.fetched
            .lock()
            .unwrap()
            .iter()
            .map(|(channel, _)| channel.clone())
            .collect()
    }

    /// Architectures sent with each fetch
    pub fn fetched_arches(&self) -> Vec<String> {
        self.fetched
            .lock()
            .unwrap()
            .iter()
            .map(|(_, arch)| arch.clone())
            .collect()
    }
}

impl GraphSource for MockGraphSource {
    fn fetch_graph(&self, channel: &str, arch: &str) -> GraphResult<Graph> {
        self.fetched
            .lock()
            .unwrap()
            .push((channel.to_string(), arch.to_string()));

        let url = format!("http://mock/graph?arch={}&channel={}", arch, channel);
        if let Some(status) = self.failures.get(channel) {
            return Err(GraphError::HttpStatus {
                status: *status,
                url,
            });
        }
        self.graphs
            .get(channel)
            .cloned()
            .ok_or(GraphError::HttpStatus { status: 404, url })
    }
}
