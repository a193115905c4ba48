//! Markdown rendering of a run.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use strum::IntoEnumIterator;

use crate::analysis::Tier;
use crate::collect::BatchRun;

/// Renders the tier distribution and one section per tool.
pub fn render_markdown(run: &BatchRun, generated_at: DateTime<Utc>) -> String {
    let summary = run.summary();
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "# Tool Collection Report\n");
    let _ = writeln!(out, "Generated: {}", generated_at.to_rfc3339());
    let _ = writeln!(
        out,
        "Total tools: {} ({} collected, {} failed, average latency {}ms)\n",
        summary.total, summary.successful, summary.failed, summary.average_latency_ms
    );

    let _ = writeln!(out, "## Tier distribution\n");
    let _ = writeln!(out, "| Tier | Meaning | Tools |");
    let _ = writeln!(out, "|---|---|---|");
    for tier in Tier::iter() {
        let _ = writeln!(
            out,
            "| {} | {} | {} |",
            tier,
            tier.label(),
            run.tier_histogram.count(tier)
        );
    }

    let _ = writeln!(out, "\n## Results\n");
    for (index, record) in run.records.iter().enumerate() {
        let title = if record.name.is_empty() {
            &record.tool_id
        } else {
            &record.name
        };
        let _ = writeln!(out, "### {}. {}\n", index + 1, title);
        let _ = writeln!(out, "- **ID**: {}", record.tool_id);
        let _ = writeln!(out, "- **URL**: {}", record.source_url);
        let _ = writeln!(out, "- **Tier**: {} ({})", record.tier, record.tier.label());
        let _ = writeln!(
            out,
            "- **Status**: {}",
            if record.extraction_success {
                "✅ collected"
            } else {
                "❌ failed"
            }
        );
        if let Some(error) = &record.error_detail {
            let _ = writeln!(out, "- **Error**: {error}");
        }
        if let Some(framework) = record.framework {
            let _ = writeln!(out, "- **Framework**: {framework}");
        }
        for (field, value) in &record.fields {
            let _ = writeln!(out, "- **{}**: {}", field.label(), value.display());
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::{BatchTiming, FieldName, FieldValue, Tool, ToolRecord};
    use std::collections::BTreeMap;

    #[test]
    fn test_markdown_lists_tiers_and_fields() {
        let tool = Tool {
            id: "planform".to_string(),
            name: "Planform".to_string(),
            url: "https://planform.example".to_string(),
        };
        let mut record = ToolRecord::failure(&tool, &tool.url, "unused", None);
        record.tier = Tier::High;
        record.extraction_success = true;
        record.error_detail = None;
        record.fields = BTreeMap::from([
            (FieldName::Description, FieldValue::Text("Floor plans from sketches.".into())),
            (
                FieldName::Platforms,
                FieldValue::List(vec!["Web".into(), "iOS".into()]),
            ),
        ]);

        let mut run = BatchRun::new(2, 0);
        run.push_batch(
            BatchTiming {
                index: 0,
                tool_ids: vec!["planform".into()],
                started_at: Utc::now(),
                finished_at: Utc::now(),
            },
            vec![record],
        );
        run.finalize();

        let markdown = render_markdown(&run, Utc::now());
        assert!(markdown.starts_with("# Tool Collection Report"));
        assert!(markdown.contains("| 2 | high | 1 |"));
        assert!(markdown.contains("| 0 | unreachable | 0 |"));
        assert!(markdown.contains("### 1. Planform"));
        assert!(markdown.contains("- **Status**: ✅ collected"));
        assert!(markdown.contains("- **Description**: Floor plans from sketches."));
        assert!(markdown.contains("- **Platforms**: Web, iOS"));
        assert!(!markdown.contains("**Error**"));
    }
}
