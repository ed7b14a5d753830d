use super::utils;

/// Mount-table option check: a non-comment line whose 2nd field is
/// `mount_point` must carry `option` in its comma-separated 4th field.
pub(super) fn run(
    option: &str,
    mount_point: &str,
    text: &str,
    path: &str,
    out: &mut Vec<String>,
) -> bool {
    let configured = utils::mount_table_lines(text).any(|line| {
        let fields: Vec<&str> = line.split_whitespace().collect();
        fields.len() > 3 && fields[1] == mount_point && fields[3].split(',').any(|o| o == option)
    });

    if configured {
        return true;
    }
    out.push(format!(
        "The '{option}' option is not set for the {mount_point} partition in '{path}'."
    ));
    false
}
