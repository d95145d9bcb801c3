use crate::finding::{BatchReport, Finding, Severity};
use crate::rules::all_rules;
use serde_sarif::sarif::{
    Location, LogicalLocation, Message, MultiformatMessageString, ReportingDescriptor,
    Result as SarifResult, ResultLevel, Run, Sarif, Tool, ToolComponent,
};
use std::collections::HashMap;

/// Formats a [`BatchReport`] as SARIF 2.1.0.
///
/// Commit findings have no file location; each result carries the commit
/// sha as a logical location instead.
pub fn format(report: &BatchReport) -> String {
    let catalog = all_rules();

    let findings: Vec<(&str, &Finding)> = report
        .commits
        .iter()
        .flat_map(|c| {
            c.classification
                .errors
                .iter()
                .chain(c.classification.warnings.iter())
                .map(move |f| (c.sha.as_str(), f))
        })
        .collect();

    let mut rule_ids: Vec<&str> = findings.iter().map(|(_, f)| f.rule_id).collect();
    rule_ids.sort();
    rule_ids.dedup();

    let rule_index: HashMap<&str, i64> = rule_ids
        .iter()
        .enumerate()
        .map(|(i, id)| (*id, i as i64))
        .collect();

    let rules: Vec<ReportingDescriptor> = rule_ids
        .iter()
        .map(|id| {
            let mut rule = ReportingDescriptor::builder().id(id.to_string()).build();
            if let Some(info) = catalog.iter().find(|r| r.id == *id) {
                rule.short_description = Some(
                    MultiformatMessageString::builder()
                        .text(info.message.to_string())
                        .build(),
                );
                rule.help = Some(
                    MultiformatMessageString::builder()
                        .text(info.remediation.to_string())
                        .build(),
                );
            }
            rule
        })
        .collect();

    let results: Vec<SarifResult> = findings
        .iter()
        .map(|(sha, f)| {
            let level = match f.severity {
                Severity::Error => ResultLevel::Error,
                Severity::Warning => ResultLevel::Warning,
            };

            let mut result = SarifResult::builder()
                .message(Message::builder().text(f.message.clone()).build())
                .build();

            result.rule_id = Some(f.rule_id.to_string());
            result.level = Some(level);
            result.rule_index = rule_index.get(f.rule_id).copied();

            let mut logical = LogicalLocation::builder().build();
            logical.name = Some(sha.to_string());

            let mut location = Location::builder().build();
            location.logical_locations = Some(vec![logical]);
            result.locations = Some(vec![location]);

            result
        })
        .collect();

    let driver = ToolComponent::builder()
        .name("subsystem-lint")
        .version(env!("CARGO_PKG_VERSION").to_string())
        .rules(rules)
        .build();

    let tool = Tool::builder().driver(driver).build();

    let run = Run::builder().tool(tool).results(results).build();

    let sarif = Sarif::builder().version("2.1.0").runs(vec![run]).build();

    serde_json::to_string_pretty(&sarif).expect("SARIF serialization failed")
}
