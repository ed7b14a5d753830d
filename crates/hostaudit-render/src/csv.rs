use crate::{TABLE_HEADERS, target_cell};
use hostaudit_types::AuditReport;

/// CSV report: header row then one row per control, catalog order.
pub fn render_csv(report: &AuditReport) -> String {
    let mut out = String::new();
    push_row(&mut out, TABLE_HEADERS.iter().copied());

    for row in &report.rows {
        push_row(
            &mut out,
            [
                row.id.as_str(),
                row.domain.as_str(),
                row.profile.as_str(),
                row.description.as_str(),
                row.status.as_str(),
                target_cell(row.target.as_deref()),
                row.details.as_str(),
            ]
            .into_iter(),
        );
    }

    out
}

fn push_row<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&quote(field));
    }
    out.push_str("\r\n");
}

/// Quote a field when it contains a delimiter, quote, or line break.
fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostaudit_types::{
        AuditData, AuditRow, HostMeta, SCHEMA_REPORT_V1, Status, StatusCounts, ToolMeta,
    };
    use time::macros::datetime;

    fn report(rows: Vec<AuditRow>) -> AuditReport {
        let summary = StatusCounts::from_rows(&rows);
        AuditReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "hostaudit".to_string(),
                version: "0.0.0".to_string(),
            },
            started_at: datetime!(2026-01-01 00:00:00 UTC),
            finished_at: datetime!(2026-01-01 00:00:01 UTC),
            host: HostMeta::default(),
            data: AuditData {
                controls_evaluated: rows.len() as u32,
                summary,
            },
            rows,
        }
    }

    #[test]
    fn renders_header_and_rows() {
        let csv = render_csv(&report(vec![AuditRow {
            id: "5.2.20".to_string(),
            domain: "SSH".to_string(),
            profile: "L1".to_string(),
            description: "MaxSessions is 10 or less".to_string(),
            status: Status::Pass,
            target: Some("/etc/ssh/sshd_config".to_string()),
            details: String::new(),
        }]));

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Control ID,Domain,Profile"));
        assert_eq!(
            lines[1],
            "5.2.20,SSH,L1,MaxSessions is 10 or less,PASS,/etc/ssh/sshd_config,"
        );
    }

    #[test]
    fn quotes_fields_with_delimiters_and_quotes() {
        let csv = render_csv(&report(vec![AuditRow {
            id: "1.1".to_string(),
            domain: "Filesystem".to_string(),
            profile: "L2".to_string(),
            description: "desc, with comma".to_string(),
            status: Status::Fail,
            target: None,
            details: "found \"bad\" entries".to_string(),
        }]));

        assert!(csv.contains("\"desc, with comma\""));
        assert!(csv.contains("\"found \"\"bad\"\" entries\""));
        assert!(csv.contains(",N/A,"));
    }
}
