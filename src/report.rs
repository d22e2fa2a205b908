//! Rendering of an [`Assessment`] for the CLI.
//!
//! Presentation glue only: nothing here computes, it formats what the
//! engine already decided.

use crate::engine::Assessment;
use crate::roi::format_currency;
use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{presets, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

pub fn render(assessment: &Assessment, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Terminal => Ok(render_terminal(assessment)),
        OutputFormat::Markdown => Ok(render_markdown(assessment)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(assessment)?),
    }
}

fn component_table(assessment: &Assessment) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_header(vec![
        "Component", "Level", "Score", "Risk", "CAPEX", "OPEX",
    ]);
    for metrics in &assessment.metrics.components {
        table.add_row(vec![
            metrics.component.to_string(),
            metrics.level.to_string(),
            format!("{:.0}", metrics.score),
            metrics.risk.to_string(),
            format!("{:.0}%", metrics.capex),
            format!("{:.0}%", metrics.opex),
        ]);
    }
    table
}

fn render_terminal(assessment: &Assessment) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}\n{}\n\n",
        "SECURITY ASSESSMENT".bold(),
        assessment.triple
    ));

    out.push_str(&format!(
        "Security score: {}\n",
        format!("{:.0}/100", assessment.metrics.score).bold()
    ));
    out.push_str(&format!(
        "Business impact level: {} (weakest link: {})\n",
        assessment.impact_level,
        assessment.triple.min_level()
    ));
    out.push_str(&format!("Residual risk: {}\n\n", assessment.overall_risk));

    out.push_str(&format!("{}\n", component_table(assessment)));

    out.push_str(&format!(
        "\nTotal CAPEX: {:.0}% of IT budget  |  Total OPEX: {:.0}% of IT budget\n",
        assessment.metrics.total_capex, assessment.metrics.total_opex
    ));

    out.push_str(&format!("\n{}\n", "BUSINESS IMPACT".bold()));
    for impact in &assessment.component_impacts {
        out.push_str(&format!(
            "  {} ({}): {}\n",
            impact.component, impact.level, impact.description.text
        ));
    }

    out.push_str(&format!("\n{}\n", "ROI".bold()));
    out.push_str(&format!(
        "  Cost {} at a {} return rate yields {}\n  {}\n",
        format_currency(assessment.implementation_cost),
        assessment.roi.percentage,
        assessment.roi.value,
        assessment.roi.description
    ));

    out.push_str(&format!("\n{}\n", "COMPLIANCE".bold()));
    for name in &assessment.compliance.compliant {
        out.push_str(&format!("  {} {}\n", "✓".green(), name));
    }
    for name in &assessment.compliance.partially_compliant {
        out.push_str(&format!("  {} {} (partial)\n", "~".yellow(), name));
    }
    for name in &assessment.compliance.non_compliant {
        out.push_str(&format!("  {} {}\n", "✗".red(), name));
    }
    if !assessment.compliance.remediation_steps.is_empty() {
        out.push_str("  Remediation:\n");
        for step in &assessment.compliance.remediation_steps {
            out.push_str(&format!("    - {}\n", step.description));
        }
    }

    out.push_str(&format!("\n{}\n", "IMPLEMENTATION".bold()));
    out.push_str(&format!(
        "  Estimated duration: {}\n  Expertise: {}\n",
        assessment.implementation_time, assessment.required_expertise
    ));
    for line in assessment.implementation_plan.lines() {
        out.push_str(&format!("  {line}\n"));
    }

    out
}

fn render_markdown(assessment: &Assessment) -> String {
    let mut out = String::new();

    out.push_str("# Security Assessment\n\n");
    out.push_str(&format!("Selection: {}\n\n", assessment.triple));
    out.push_str(&format!(
        "- Security score: {:.0}/100\n- Business impact level: {}\n- Residual risk: {}\n\n",
        assessment.metrics.score, assessment.impact_level, assessment.overall_risk
    ));

    out.push_str("## Components\n\n");
    out.push_str("| Component | Level | Score | Risk | CAPEX | OPEX |\n");
    out.push_str("|-----------|-------|-------|------|-------|------|\n");
    for metrics in &assessment.metrics.components {
        out.push_str(&format!(
            "| {} | {} | {:.0} | {} | {:.0}% | {:.0}% |\n",
            metrics.component,
            metrics.level,
            metrics.score,
            metrics.risk,
            metrics.capex,
            metrics.opex
        ));
    }
    out.push_str(&format!(
        "\nTotal CAPEX {:.0}%, total OPEX {:.0}% of IT budget.\n",
        assessment.metrics.total_capex, assessment.metrics.total_opex
    ));

    out.push_str("\n## Business impact\n\n");
    for impact in &assessment.component_impacts {
        out.push_str(&format!(
            "- **{}** ({}): {}\n",
            impact.component, impact.level, impact.description.text
        ));
    }

    out.push_str("\n## ROI\n\n");
    out.push_str(&format!(
        "Implementation cost {} at {} returns {}. {}\n",
        format_currency(assessment.implementation_cost),
        assessment.roi.percentage,
        assessment.roi.value,
        assessment.roi.description
    ));

    out.push_str("\n## Compliance\n\n");
    for name in &assessment.compliance.compliant {
        out.push_str(&format!("- [x] {name}\n"));
    }
    for name in &assessment.compliance.partially_compliant {
        out.push_str(&format!("- [ ] {name} (partially compliant)\n"));
    }
    for name in &assessment.compliance.non_compliant {
        out.push_str(&format!("- [ ] {name} (non-compliant)\n"));
    }
    if !assessment.compliance.remediation_steps.is_empty() {
        out.push_str("\nRemediation order:\n\n");
        for (i, step) in assessment.compliance.remediation_steps.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, step.description));
        }
    }

    out.push_str("\n## Implementation\n\n");
    out.push_str(&format!(
        "- Estimated duration: {}\n- Required expertise: {}\n\n",
        assessment.implementation_time, assessment.required_expertise
    ));
    for line in assessment.implementation_plan.lines() {
        out.push_str(&format!("- {line}\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SecurityLevel, SecurityLevelTriple};
    use crate::engine::AssessmentEngine;

    fn sample() -> Assessment {
        AssessmentEngine::with_default_dataset().assess(
            SecurityLevelTriple::new(
                SecurityLevel::High,
                SecurityLevel::Moderate,
                SecurityLevel::None,
            ),
            10_000.0,
        )
    }

    #[test]
    fn markdown_report_covers_every_section() {
        let report = render(&sample(), OutputFormat::Markdown).unwrap();
        for heading in [
            "# Security Assessment",
            "## Components",
            "## Business impact",
            "## ROI",
            "## Compliance",
            "## Implementation",
        ] {
            assert!(report.contains(heading), "missing {heading}");
        }
        assert!(report.contains("| Availability | High |"));
    }

    #[test]
    fn json_report_round_trips() {
        let report = render(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["metrics"]["components"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn terminal_report_mentions_compliance_buckets() {
        let report = render(&sample(), OutputFormat::Terminal).unwrap();
        assert!(report.contains("COMPLIANCE"));
        assert!(report.contains("Remediation:"));
    }
}
