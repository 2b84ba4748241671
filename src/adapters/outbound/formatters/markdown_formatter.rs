use crate::application::read_models::{ReleaseReport, ReportMetadata};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use crate::update_graph::domain::Release;

/// Markdown table header for release rows
const TABLE_HEADER: &str = "| Version | Channel | Payload | Available Upgrades |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|---------|---------|---------|--------------------|\n";

/// MarkdownFormatter adapter rendering one table per channel or group
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_header(&self, output: &mut String, metadata: &ReportMetadata) {
        output.push_str("# Upgrade Graph Report\n\n");
        output.push_str(&format!("- **Architecture**: {}\n", metadata.arch));
        output.push_str(&format!(
            "- **Start channels**: {}\n",
            metadata.start_channels.join(", ")
        ));
        let risks = if metadata.accepted_risks.is_empty() {
            "none".to_string()
        } else {
            metadata.accepted_risks.join(", ")
        };
        output.push_str(&format!("- **Accepted risks**: {}\n", risks));
        output.push_str(&format!(
            "- **Generated**: {} by {} {}\n\n",
            metadata.generated_at, metadata.tool, metadata.version
        ));
    }

    fn render_section(&self, output: &mut String, title: &str, releases: &[Release]) {
        output.push_str(&format!("## {}\n\n", Self::escape_markdown_table_cell(title)));

        if releases.is_empty() {
            output.push_str("*No releases found*\n\n");
            return;
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for release in releases {
            let upgrades = if release.available_upgrades().is_empty() {
                "-".to_string()
            } else {
                release
                    .available_upgrades()
                    .iter()
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(release.version()),
                Self::escape_markdown_table_cell(release.channel()),
                Self::escape_markdown_table_cell(release.payload()),
                Self::escape_markdown_table_cell(&upgrades)
            ));
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &ReleaseReport) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, &report.metadata);

        if report.channels.is_empty() {
            output.push_str("*No channels discovered*\n");
            return Ok(output);
        }

        let kind = if report.grouped { "Group" } else { "Channel" };
        for (name, releases) in &report.channels {
            self.render_section(&mut output, &format!("{}: {}", kind, name), releases);
        }

        Ok(output)
    }
}
