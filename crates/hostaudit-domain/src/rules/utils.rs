/// Lines a mount-table check may look at: comments and blank lines are
/// skipped, everything else is a candidate entry.
pub(super) fn mount_table_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .filter(|line| !line.starts_with('#') && !line.trim().is_empty())
}

/// First whitespace-delimited token of a line, if any.
pub(super) fn first_token(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

/// Allow/deny list entries must be a single bare username per line. An empty
/// line is an invalid entry, not an absent one.
pub(super) fn is_single_username(line: &str) -> bool {
    !line.is_empty() && line.chars().all(char::is_alphanumeric)
}
