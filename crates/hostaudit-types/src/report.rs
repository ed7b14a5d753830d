use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for hostaudit reports.
pub const SCHEMA_REPORT_V1: &str = "hostaudit.report.v1";

/// Per-control outcome. There is deliberately no third state: a control that
/// cannot be evaluated fails with an explanatory detail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Fail,
}

impl Status {
    /// Report-facing spelling ("PASS" / "FAIL").
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Fail => "FAIL",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Metadata the collector recorded about the audited host. Everything is
/// optional: older collectors omit fields freely.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HostMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sudo_used: Option<String>,
}

/// One report row per control, in catalog order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuditRow {
    pub id: String,
    pub domain: String,
    pub profile: String,
    pub description: String,
    pub status: Status,
    /// The path or module name that was checked; `None` for a malformed
    /// control that declared no target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Findings joined by a single space; empty when every applicable check
    /// was satisfied.
    pub details: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StatusCounts {
    pub pass: u32,
    pub fail: u32,
}

impl StatusCounts {
    pub fn from_rows(rows: &[AuditRow]) -> Self {
        let mut counts = StatusCounts::default();
        for row in rows {
            match row.status {
                Status::Pass => counts.pass += 1,
                Status::Fail => counts.fail += 1,
            }
        }
        counts
    }
}

/// Hostaudit-specific summary payload for the report.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuditData {
    pub controls_evaluated: u32,
    pub summary: StatusCounts,
}

/// The emitted report envelope: one per (catalog, dump) pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AuditReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub host: HostMeta,
    pub data: AuditData,
    pub rows: Vec<AuditRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_counts_tally_rows() {
        let row = |status| AuditRow {
            id: "1.1".to_string(),
            domain: "SSH".to_string(),
            profile: "L1".to_string(),
            description: "desc".to_string(),
            status,
            target: Some("/etc/ssh/sshd_config".to_string()),
            details: String::new(),
        };
        let rows = vec![row(Status::Pass), row(Status::Fail), row(Status::Pass)];
        let counts = StatusCounts::from_rows(&rows);
        assert_eq!(counts.pass, 2);
        assert_eq!(counts.fail, 1);
    }

    #[test]
    fn status_spelling_is_upper_case() {
        assert_eq!(Status::Pass.as_str(), "PASS");
        assert_eq!(Status::Fail.as_str(), "FAIL");
    }
}
