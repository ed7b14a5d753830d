//! The audit use case: evaluate one catalog against one snapshot.

use hostaudit_domain::model::{ControlCatalog, ControlTarget, HostSnapshot};
use hostaudit_types::{
    AuditData, AuditReport, AuditRow, SCHEMA_REPORT_V1, StatusCounts, ToolMeta,
};
use time::OffsetDateTime;

/// Evaluate every control in catalog order and assemble the report envelope.
///
/// Always yields one row per control: a malformed control or missing capture
/// becomes a FAIL row, never a dropped one.
pub fn run_audit(catalog: &ControlCatalog, snapshot: &HostSnapshot) -> AuditReport {
    let started_at = OffsetDateTime::now_utc();

    let mut rows: Vec<AuditRow> = Vec::with_capacity(catalog.controls.len());
    for control in &catalog.controls {
        let file = match &control.target {
            Some(ControlTarget::File { path, .. }) => snapshot.file(path),
            _ => None,
        };
        let modules = matches!(&control.target, Some(ControlTarget::Module { .. }))
            .then_some(&snapshot.modules);

        let verdict = hostaudit_domain::evaluate(control, file, modules);
        let details = verdict.joined_details();
        rows.push(AuditRow {
            id: control.id.clone(),
            domain: control.domain.clone(),
            profile: control.profile.clone(),
            description: control.description.clone(),
            status: verdict.status,
            target: verdict.target,
            details,
        });
    }

    let summary = StatusCounts::from_rows(&rows);
    let finished_at = OffsetDateTime::now_utc();

    AuditReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "hostaudit".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        host: snapshot.host.clone(),
        data: AuditData {
            controls_evaluated: rows.len() as u32,
            summary,
        },
        rows,
    }
}

pub fn serialize_report(report: &AuditReport) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn parse_report_json(text: &str) -> anyhow::Result<AuditReport> {
    Ok(serde_json::from_str(text)?)
}

/// Map a report to an exit code: 0 = all controls passed, 2 = any failed.
pub fn report_exit_code(report: &AuditReport) -> i32 {
    if report.data.summary.fail > 0 { 2 } else { 0 }
}
