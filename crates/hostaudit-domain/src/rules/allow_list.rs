use super::utils;
use crate::model::FileRecord;

/// Allow-list hygiene for cron/at: the file must exist on the host, must not
/// be empty, and every line must be a single username. The three branches
/// are mutually exclusive and checked in that priority order — an allow list
/// that does not exist means only the superuser may use the scheduler.
pub(super) fn run(
    scheduler: &str,
    text: &str,
    path: &str,
    record: &FileRecord,
    out: &mut Vec<String>,
) -> bool {
    if record.missing_on_host() {
        out.push(format!(
            "The {path} file does not exist. Only superuser is allowed to use {scheduler}."
        ));
        return false;
    }

    if text.trim().is_empty() {
        out.push(format!(
            "The {path} file exists but is empty. It must list authorized users."
        ));
        return false;
    }

    if !text.lines().all(utils::is_single_username) {
        out.push(format!(
            "The {path} file contains invalid entries. Each line must contain a single username."
        ));
        return false;
    }

    true
}
