use super::utils;

const REQUIRED: [&str; 4] = ["AllowUsers", "AllowGroups", "DenyUsers", "DenyGroups"];

/// SSH access lists must all be configured; the finding lists only the
/// directives that are missing.
pub(super) fn run(text: &str, out: &mut Vec<String>) -> bool {
    let missing: Vec<&str> = REQUIRED
        .iter()
        .copied()
        .filter(|directive| {
            !text
                .lines()
                .any(|line| utils::first_token(line) == Some(*directive))
        })
        .collect();

    if missing.is_empty() {
        return true;
    }
    out.push(format!(
        "Missing SSH access configurations: {}.",
        missing.join(", ")
    ));
    false
}
