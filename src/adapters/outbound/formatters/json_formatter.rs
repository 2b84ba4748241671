use crate::application::read_models::ReleaseReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use anyhow::Context;

/// JsonFormatter adapter rendering the report as pretty-printed JSON
///
/// Shape: `{"metadata": {...}, "channels": {"<name>": [release, ...]}}`.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &ReleaseReport) -> Result<String> {
        serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::ReportMetadata;
    use crate::update_graph::domain::Release;
    use serde_json::{json, Value};
    use std::collections::BTreeMap;

    fn report() -> ReleaseReport {
        let release = Release::new(
            "4.16.1".to_string(),
            "stable-4.16".to_string(),
            "amd64".to_string(),
            "quay.io/ocp-release@sha256:aaa".to_string(),
        )
        .with_upgrade("4.16.2");

        ReleaseReport {
            metadata: ReportMetadata {
                tool: "upgrade-graph".to_string(),
                version: "0.4.0".to_string(),
                generated_at: "2024-06-01T00:00:00Z".to_string(),
                arch: "amd64".to_string(),
                start_channels: vec!["stable-4.16".to_string()],
                accepted_risks: vec!["RiskA".to_string()],
            },
            channels: BTreeMap::from([("stable".to_string(), vec![release])]),
            grouped: true,
        }
    }

    #[test]
    fn test_format_shape() {
        let output = JsonFormatter::new().format(&report()).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            value,
            json!({
                "metadata": {
                    "tool": "upgrade-graph",
                    "version": "0.4.0",
                    "generated_at": "2024-06-01T00:00:00Z",
                    "arch": "amd64",
                    "start_channels": ["stable-4.16"],
                    "accepted_risks": ["RiskA"]
                },
                "channels": {
                    "stable": [{
                        "version": "4.16.1",
                        "channel": "stable-4.16",
                        "arch": "amd64",
                        "payload": "quay.io/ocp-release@sha256:aaa",
                        "available_upgrades": ["4.16.2"]
                    }]
                }
            })
        );
    }

    #[test]
    fn test_format_is_pretty_printed() {
        let output = JsonFormatter::default().format(&report()).unwrap();
        assert!(output.contains("\n  \"metadata\""));
    }
}
