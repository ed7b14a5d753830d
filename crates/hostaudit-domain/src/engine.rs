use std::collections::BTreeMap;

use tracing::warn;

use crate::decode::decode_content;
use crate::model::{Control, ControlTarget, FileKind, FileRecord};
use crate::rules::{self, RuleKind};
use crate::verdict::ControlVerdict;
use hostaudit_types::Status;

/// Evaluate one control against the relevant snapshot fragment.
///
/// Checks run in a fixed order (existence, permission, owner, module status,
/// content rule) so findings accumulate in a reproducible sequence. Pure
/// function of its inputs; all error conditions fold into a FAIL verdict
/// with an explanatory finding instead of an error type.
pub fn evaluate(
    control: &Control,
    file: Option<&FileRecord>,
    modules: Option<&BTreeMap<String, String>>,
) -> ControlVerdict {
    let mut details: Vec<String> = Vec::new();

    let (target, failed) = match &control.target {
        Some(ControlTarget::Module {
            name,
            expected_status,
        }) => {
            let failed = check_module(name, expected_status, modules, &mut details);
            (Some(name.clone()), failed)
        }
        Some(ControlTarget::File {
            path,
            expected_permission,
            expected_owner,
            rule,
        }) => {
            let failed = check_file(
                path,
                expected_permission.as_deref(),
                expected_owner.as_deref(),
                rule.as_deref(),
                file,
                &mut details,
            );
            (Some(path.clone()), failed)
        }
        None => {
            details.push(format!(
                "Control '{}' declares neither a file nor a module target.",
                control.id
            ));
            (None, true)
        }
    };

    ControlVerdict {
        status: if failed { Status::Fail } else { Status::Pass },
        target,
        details,
    }
}

fn check_module(
    name: &str,
    expected: &str,
    modules: Option<&BTreeMap<String, String>>,
    details: &mut Vec<String>,
) -> bool {
    let observed = modules.and_then(|table| table.get(name)).map(String::as_str);
    if observed == Some(expected) {
        return false;
    }
    // Wording for an unreported module is decided here, not stored as a
    // sentinel in the snapshot.
    let observed = observed.unwrap_or("Not Found");
    details.push(format!(
        "Kernel module '{name}' status is '{observed}', expected '{expected}'."
    ));
    true
}

fn check_file(
    path: &str,
    expected_permission: Option<&str>,
    expected_owner: Option<&str>,
    rule: Option<&str>,
    record: Option<&FileRecord>,
    details: &mut Vec<String>,
) -> bool {
    let Some(record) = record else {
        // No record, nothing else is worth checking.
        details.push(format!("File '{path}' not found in the captured snapshot."));
        return true;
    };

    let mut failed = false;

    if let Some(expected) = expected_permission {
        if record.permissions.as_deref() != Some(expected) {
            failed = true;
            let kind = match record.kind {
                FileKind::Directory => "directory",
                FileKind::File => "file",
            };
            let found = record.permissions.as_deref().unwrap_or("none recorded");
            details.push(format!(
                "Expected permissions {expected} for {kind}, found {found}."
            ));
        }
    }

    if let Some(expected) = expected_owner {
        if record.owner.as_deref() != Some(expected) {
            failed = true;
            let found = record.owner.as_deref().unwrap_or("none recorded");
            details.push(format!("Expected owner {expected}, found {found}."));
        }
    }

    if let Some(directive) = rule {
        failed |= !run_rule(directive, path, record, details);
    }

    failed
}

/// Parse and dispatch a rule directive. Content is decoded here, lazily per
/// control, so a corrupt blob degrades that control alone.
fn run_rule(directive: &str, path: &str, record: &FileRecord, details: &mut Vec<String>) -> bool {
    let trimmed = directive.trim();
    if trimmed.is_empty() {
        details.push(format!(
            "Rule directive for '{path}' is empty and cannot be evaluated."
        ));
        return false;
    }

    let (keyword, argument) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (trimmed, ""),
    };

    let Some(kind) = RuleKind::from_keyword(keyword) else {
        // Tolerated for forward compatibility with newer catalogs, but loud:
        // it usually means a catalog/engine version mismatch.
        warn!(keyword, path, "unknown rule keyword, check skipped");
        return true;
    };

    let text = decode_content(record.content.as_deref(), record.encoding.as_deref());
    rules::run(kind, &text, argument, path, record, details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        control, encoded, file_control, file_control_with_rule, module_control, record_with_content,
    };
    use proptest::prelude::*;

    fn module_table(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(name, status)| (name.to_string(), status.to_string()))
            .collect()
    }

    #[test]
    fn control_without_expectations_passes_with_no_findings() {
        let control = file_control("1.1", "/etc/motd");
        let record = FileRecord::default();

        let verdict = evaluate(&control, Some(&record), None);
        assert_eq!(verdict.status, Status::Pass);
        assert!(verdict.details.is_empty());
        assert_eq!(verdict.target.as_deref(), Some("/etc/motd"));
    }

    #[test]
    fn missing_file_fails_with_exactly_one_finding() {
        let mut control = file_control("1.2", "/etc/ssh/sshd_config");
        if let Some(ControlTarget::File {
            expected_permission,
            expected_owner,
            rule,
            ..
        }) = &mut control.target
        {
            *expected_permission = Some("600".to_string());
            *expected_owner = Some("root".to_string());
            *rule = Some("MaxSessions 10".to_string());
        }

        let verdict = evaluate(&control, None, None);
        assert_eq!(verdict.status, Status::Fail);
        assert_eq!(verdict.details.len(), 1);
        assert!(verdict.details[0].contains("not found in the captured snapshot"));
    }

    #[test]
    fn permission_mismatch_names_both_values_and_the_kind() {
        let mut control = file_control("1.3", "/etc/crontab");
        if let Some(ControlTarget::File {
            expected_permission,
            ..
        }) = &mut control.target
        {
            *expected_permission = Some("600".to_string());
        }
        let record = FileRecord {
            permissions: Some("644".to_string()),
            ..FileRecord::default()
        };

        let verdict = evaluate(&control, Some(&record), None);
        assert_eq!(verdict.status, Status::Fail);
        assert_eq!(
            verdict.details,
            vec!["Expected permissions 600 for file, found 644.".to_string()]
        );
    }

    #[test]
    fn directory_permission_mismatch_says_directory() {
        let mut control = file_control("1.4", "/etc/cron.d");
        if let Some(ControlTarget::File {
            expected_permission,
            ..
        }) = &mut control.target
        {
            *expected_permission = Some("700".to_string());
        }
        let record = FileRecord {
            permissions: Some("755".to_string()),
            kind: FileKind::Directory,
            ..FileRecord::default()
        };

        let verdict = evaluate(&control, Some(&record), None);
        assert!(verdict.details[0].contains("for directory"));
    }

    #[test]
    fn findings_accumulate_in_check_order() {
        let mut control = file_control("1.5", "/etc/ssh/sshd_config");
        if let Some(ControlTarget::File {
            expected_permission,
            expected_owner,
            rule,
            ..
        }) = &mut control.target
        {
            *expected_permission = Some("600".to_string());
            *expected_owner = Some("root".to_string());
            *rule = Some("MaxSessions 10".to_string());
        }
        let record = FileRecord {
            permissions: Some("644".to_string()),
            owner: Some("admin".to_string()),
            content: Some(encoded("MaxSessions 4\n")),
            ..FileRecord::default()
        };

        let verdict = evaluate(&control, Some(&record), None);
        assert_eq!(verdict.status, Status::Fail);
        assert_eq!(verdict.details.len(), 3);
        assert!(verdict.details[0].starts_with("Expected permissions"));
        assert!(verdict.details[1].starts_with("Expected owner"));
        assert!(verdict.details[2].contains("MaxSessions"));
    }

    #[test]
    fn max_sessions_rule_names_expected_and_observed_value() {
        let control = file_control_with_rule("2.1", "/etc/ssh/sshd_config", "MaxSessions 10");

        let pass = evaluate(
            &control,
            Some(&record_with_content("MaxSessions 10\n")),
            None,
        );
        assert_eq!(pass.status, Status::Pass);
        assert!(pass.details.is_empty());

        let fail = evaluate(&control, Some(&record_with_content("MaxSessions 4\n")), None);
        assert_eq!(fail.status, Status::Fail);
        assert!(fail.details[0].contains("'4'"));
        assert!(fail.details[0].contains("'10'"));
    }

    #[test]
    fn module_status_mismatch_fails_with_both_statuses() {
        let control = module_control("3.1", "usb-storage", "blacklisted");
        let table = module_table(&[("usb-storage", "loaded")]);

        let verdict = evaluate(&control, None, Some(&table));
        assert_eq!(verdict.status, Status::Fail);
        assert_eq!(verdict.target.as_deref(), Some("usb-storage"));
        assert!(verdict.details[0].contains("'loaded'"));
        assert!(verdict.details[0].contains("'blacklisted'"));
    }

    #[test]
    fn unreported_module_reads_as_not_found() {
        let control = module_control("3.2", "cramfs", "blacklisted");
        let table = module_table(&[("usb-storage", "loaded")]);

        let verdict = evaluate(&control, None, Some(&table));
        assert_eq!(verdict.status, Status::Fail);
        assert!(verdict.details[0].contains("'Not Found'"));

        // No table at all reads the same way.
        let verdict = evaluate(&control, None, None);
        assert!(verdict.details[0].contains("'Not Found'"));
    }

    #[test]
    fn matching_module_status_passes() {
        let control = module_control("3.3", "cramfs", "blacklisted");
        let table = module_table(&[("cramfs", "blacklisted")]);

        let verdict = evaluate(&control, None, Some(&table));
        assert_eq!(verdict.status, Status::Pass);
        assert!(verdict.details.is_empty());
    }

    #[test]
    fn target_less_control_fails_as_malformed() {
        let control = control("4.1", None);

        let verdict = evaluate(&control, None, None);
        assert_eq!(verdict.status, Status::Fail);
        assert!(verdict.target.is_none());
        assert!(verdict.details[0].contains("neither a file nor a module target"));
    }

    #[test]
    fn blank_rule_directive_fails_as_malformed() {
        let control = file_control_with_rule("4.2", "/etc/motd", "   ");

        let verdict = evaluate(&control, Some(&record_with_content("hello")), None);
        assert_eq!(verdict.status, Status::Fail);
        assert!(verdict.details[0].contains("empty and cannot be evaluated"));
    }

    #[test]
    fn unknown_rule_keyword_is_tolerated() {
        let control = file_control_with_rule("4.3", "/etc/motd", "FutureCheck 42");

        let verdict = evaluate(&control, Some(&record_with_content("hello")), None);
        assert_eq!(verdict.status, Status::Pass);
        assert!(verdict.details.is_empty());
    }

    #[test]
    fn empty_deny_list_passes_but_keeps_the_finding() {
        let control = file_control_with_rule("5.1", "/etc/cron.deny", "CronDenyCheck");

        let verdict = evaluate(&control, Some(&record_with_content("")), None);
        assert_eq!(verdict.status, Status::Pass);
        assert_eq!(
            verdict.details,
            vec!["The /etc/cron.deny file is empty, allowing all users.".to_string()]
        );
    }

    #[test]
    fn evaluation_is_idempotent() {
        let control = file_control_with_rule("6.1", "/etc/ssh/sshd_config", "MaxSessions 10");
        let record = record_with_content("MaxSessions 4\n");
        let table = module_table(&[("cramfs", "blacklisted")]);

        let first = evaluate(&control, Some(&record), Some(&table));
        let second = evaluate(&control, Some(&record), Some(&table));
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn evaluate_never_panics(directive in ".*", content in ".*", path in ".*") {
            let control = file_control_with_rule("7.1", &path, &directive);
            let record = record_with_content(&content);
            let _ = evaluate(&control, Some(&record), None);
            let _ = evaluate(&control, None, None);
        }
    }
}
