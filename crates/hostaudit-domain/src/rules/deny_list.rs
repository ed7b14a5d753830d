use super::utils;

/// Deny-list hygiene for cron/at. An empty deny list is compliant (nobody is
/// singled out, everybody may use the scheduler) but worth a note in the
/// report, so the finding is recorded without failing the control.
pub(super) fn run(text: &str, path: &str, out: &mut Vec<String>) -> bool {
    if text.trim().is_empty() {
        out.push(format!("The {path} file is empty, allowing all users."));
        return true;
    }

    let invalid: Vec<&str> = text
        .lines()
        .filter(|line| !utils::is_single_username(line))
        .collect();

    if invalid.is_empty() {
        return true;
    }
    out.push(format!(
        "The {path} file contains invalid entries: {}.",
        invalid.join(", ")
    ));
    false
}
