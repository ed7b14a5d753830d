use super::utils;

/// Keyword-value check for sshd_config style files: some line's first token
/// must be `keyword` and its second token must equal `expected`.
///
/// When a directive line exists with a different value, the finding names
/// both values; when no line sets the directive at all, the finding only
/// names the expected one.
pub(super) fn run(keyword: &str, expected: &str, text: &str, out: &mut Vec<String>) -> bool {
    let mut observed: Option<&str> = None;

    for line in text.lines() {
        if utils::first_token(line) != Some(keyword) {
            continue;
        }
        let value = line.split_whitespace().nth(1).unwrap_or("");
        if value == expected {
            return true;
        }
        observed.get_or_insert(value);
    }

    match observed {
        Some(value) => out.push(format!(
            "{keyword} is set to '{value}', expected '{expected}'."
        )),
        None => out.push(format!("{keyword} is not configured to {expected}.")),
    }
    false
}
