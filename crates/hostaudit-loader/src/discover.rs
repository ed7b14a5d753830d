use anyhow::bail;
use camino::{Utf8Path, Utf8PathBuf};
use walkdir::WalkDir;

/// Discover snapshot/catalog documents under `dir`.
///
/// Recurses, keeps `.json` files only, and sorts the result so batch runs
/// walk the cross-product in a stable order.
pub fn discover_documents(dir: &Utf8Path) -> anyhow::Result<Vec<Utf8PathBuf>> {
    if !dir.is_dir() {
        bail!("document directory does not exist: {dir}");
    }

    let mut out: Vec<Utf8PathBuf> = Vec::new();
    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let is_json = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == "json");
        if !is_json {
            continue;
        }
        // Non-UTF-8 paths cannot be reported cleanly; skip them.
        if let Ok(path) = Utf8PathBuf::from_path_buf(entry.path().to_path_buf()) {
            out.push(path);
        }
    }

    out.sort();
    Ok(out)
}
