use crate::ports::outbound::GraphSource;
use crate::shared::{GraphError, GraphResult};
use crate::update_graph::domain::Graph;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::Url;
use std::time::Duration;

/// CincinnatiGraphSource adapter fetching upgrade graphs over HTTP
///
/// Issues `GET <base>?arch=<arch>&channel=<channel>` and decodes the JSON
/// graph document. Query parameters already on the base URL are kept.
///
/// # Behavior
/// - 30 second timeout per request
/// - No retries; any failure is returned to the traversal as-is
pub struct CincinnatiGraphSource {
    client: Client,
    base_url: Url,
}

impl CincinnatiGraphSource {
    pub const DEFAULT_GRAPH_URL: &'static str = "https://api.openshift.com/api/upgrades_info/graph";
    const TIMEOUT_SECONDS: u64 = 30;

    /// Creates a graph source for `base_url`
    ///
    /// # Errors
    /// - `MissingGraphUrl` when no URL is given
    /// - `InvalidGraphUrl` when the URL does not parse or is not http(s)
    pub fn new(base_url: Option<&str>) -> GraphResult<Self> {
        let raw = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(GraphError::MissingGraphUrl)?;
        let base_url = Self::parse_url(raw)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(format!("upgrade-graph/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GraphError::Transport {
                url: raw.to_string(),
                details: e.to_string(),
            })?;

        Ok(Self { client, base_url })
    }

    /// Validates a graph URL without building a client
    pub fn parse_url(raw: &str) -> GraphResult<Url> {
        let url = Url::parse(raw).map_err(|e| GraphError::InvalidGraphUrl {
            url: raw.to_string(),
            details: e.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(GraphError::InvalidGraphUrl {
                url: raw.to_string(),
                details: format!("unsupported scheme '{}'", scheme),
            }),
        }
    }

    /// Request URL for one channel and architecture
    pub fn graph_url(&self, channel: &str, arch: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("arch", arch)
            .append_pair("channel", channel);
        url
    }
}

impl GraphSource for CincinnatiGraphSource {
    fn fetch_graph(&self, channel: &str, arch: &str) -> GraphResult<Graph> {
        let url = self.graph_url(channel, arch);
        let transport = |e: reqwest::Error| GraphError::Transport {
            url: url.to_string(),
            details: e.to_string(),
        };

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GraphError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().map_err(transport)?;
        serde_json::from_str(&body).map_err(|source| GraphError::Parse {
            url: url.to_string(),
            source,
        })
    }
}
