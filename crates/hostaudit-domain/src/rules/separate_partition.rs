use super::utils;

/// The mount point must appear as the 2nd field of some non-comment mount
/// line; the options on that line do not matter here.
pub(super) fn run(mount_point: &str, text: &str, path: &str, out: &mut Vec<String>) -> bool {
    let present = utils::mount_table_lines(text)
        .any(|line| line.split_whitespace().nth(1) == Some(mount_point));

    if present {
        return true;
    }
    out.push(format!(
        "The {mount_point} partition is not configured as a separate partition in '{path}'."
    ));
    false
}
