//! Rendering for report sinks (HTML tables, CSV rows).
//!
//! Renderers are pure string builders over the report envelope: same report
//! in, byte-identical output out.

#![forbid(unsafe_code)]

mod csv;
mod html;

pub use csv::render_csv;
pub use html::render_html;

/// Column headers shared by the HTML table and the CSV output.
pub(crate) const TABLE_HEADERS: [&str; 7] = [
    "Control ID",
    "Domain",
    "Profile",
    "Description",
    "Status",
    "Path/Module",
    "Details",
];

/// Report-facing cell for the checked target; a malformed control has none.
pub(crate) fn target_cell(target: Option<&str>) -> &str {
    target.unwrap_or("N/A")
}
