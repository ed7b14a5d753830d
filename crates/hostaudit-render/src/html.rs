use crate::{TABLE_HEADERS, target_cell};
use hostaudit_types::{AuditReport, Status};

const REPORT_TITLE: &str = "Compliance Report";

const STYLE: &str = "\
    body { font-family: Arial, sans-serif; margin: 20px; }\n\
    table { border-collapse: collapse; width: 100%; }\n\
    th, td { border: 1px solid #ddd; padding: 8px; }\n\
    th { text-align: center; background-color: #f4f4f4; }\n\
    td.status { text-align: center; font-weight: bold; }\n\
    td.profile { text-align: center; font-weight: bold; }\n\
    td.path { text-align: left; }\n\
    .pass { color: green; }\n\
    .fail { color: red; }\n";

pub fn render_html(report: &AuditReport) -> String {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("    <meta charset=\"UTF-8\">\n");
    out.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    out.push_str(&format!("    <title>{REPORT_TITLE}</title>\n"));
    out.push_str(&format!("    <style>\n{STYLE}    </style>\n"));
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("    <h1>{REPORT_TITLE}</h1>\n"));

    out.push_str("    <h2>System Information</h2>\n    <ul>\n");
    let host = &report.host;
    host_item(&mut out, "Timestamp", host.exported_at.as_deref());
    host_item(&mut out, "Hostname", host.hostname.as_deref());
    host_item(&mut out, "OS", host.os.as_deref());
    host_item(&mut out, "Uptime", host.uptime.as_deref());
    host_item(&mut out, "Current User", host.current_user.as_deref());
    host_item(&mut out, "Sudo Used", host.sudo_used.as_deref());
    out.push_str("    </ul>\n");

    out.push_str("    <h2>Summary</h2>\n    <ul>\n");
    out.push_str(&format!(
        "        <li><strong>Total PASS:</strong> {}</li>\n",
        report.data.summary.pass
    ));
    out.push_str(&format!(
        "        <li><strong>Total FAIL:</strong> {}</li>\n",
        report.data.summary.fail
    ));
    out.push_str("    </ul>\n");

    out.push_str("    <table>\n        <tr>");
    for header in TABLE_HEADERS {
        out.push_str(&format!("<th>{header}</th>"));
    }
    out.push_str("</tr>\n");

    for row in &report.rows {
        let status_class = match row.status {
            Status::Pass => "pass",
            Status::Fail => "fail",
        };
        out.push_str("        <tr>\n");
        out.push_str(&format!("            <td>{}</td>\n", escape(&row.id)));
        out.push_str(&format!("            <td>{}</td>\n", escape(&row.domain)));
        out.push_str(&format!(
            "            <td class=\"profile\">{}</td>\n",
            escape(&row.profile)
        ));
        out.push_str(&format!(
            "            <td>{}</td>\n",
            escape(&row.description)
        ));
        out.push_str(&format!(
            "            <td class=\"status {status_class}\">{}</td>\n",
            row.status.as_str()
        ));
        out.push_str(&format!(
            "            <td class=\"path\">{}</td>\n",
            escape(target_cell(row.target.as_deref()))
        ));
        out.push_str(&format!("            <td>{}</td>\n", escape(&row.details)));
        out.push_str("        </tr>\n");
    }

    out.push_str("    </table>\n</body>\n</html>\n");
    out
}

fn host_item(out: &mut String, label: &str, value: Option<&str>) {
    out.push_str(&format!(
        "        <li><strong>{label}:</strong> {}</li>\n",
        escape(value.unwrap_or(""))
    ));
}

/// Captured content and catalog text are untrusted; everything interpolated
/// into the document body gets escaped.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
