/// Escape sequences agetty expands into host details on the login banner.
const PROHIBITED_SEQUENCES: [&str; 4] = [r"\m", r"\r", r"\s", r"\v"];

const OS_REFERENCES: [&str; 6] = ["Linux", "Ubuntu", "CentOS", "Debian", "Red Hat", "Fedora"];

/// Banner hygiene: content must be non-empty and must not leak platform
/// details. The three checks are independent and all run, each contributing
/// its own finding.
pub(super) fn run(text: &str, path: &str, out: &mut Vec<String>) -> bool {
    let mut ok = true;

    if text.trim().is_empty() {
        out.push(format!("File '{path}' is empty or not configured properly."));
        ok = false;
    }

    let prohibited: Vec<&str> = PROHIBITED_SEQUENCES
        .iter()
        .copied()
        .filter(|sequence| text.contains(sequence))
        .collect();
    if !prohibited.is_empty() {
        out.push(format!(
            "Prohibited sequences found in '{path}': {}.",
            prohibited.join(", ")
        ));
        ok = false;
    }

    let references: Vec<&str> = OS_REFERENCES
        .iter()
        .copied()
        .filter(|reference| text.contains(reference))
        .collect();
    if !references.is_empty() {
        out.push(format!(
            "OS platform references found in '{path}': {}.",
            references.join(", ")
        ));
        ok = false;
    }

    ok
}
