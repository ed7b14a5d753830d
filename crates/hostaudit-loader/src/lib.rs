//! Loader adapters: discover snapshot/catalog documents and parse them into
//! the domain model.
//!
//! This crate is allowed to do filesystem IO. It validates document-level
//! invariants (unique keys, exactly one target kind per control); everything
//! downstream assumes already-validated values.

#![forbid(unsafe_code)]

mod discover;
mod parse;

use anyhow::Context;
use camino::Utf8Path;
use hostaudit_domain::model::{ControlCatalog, HostSnapshot};

pub use discover::discover_documents;
pub use parse::{LoadError, parse_catalog, parse_snapshot};

/// Read and parse one captured host dump.
pub fn load_snapshot(path: &Utf8Path) -> anyhow::Result<HostSnapshot> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {}", path))?;
    parse_snapshot(&text).with_context(|| format!("parse {}", path))
}

/// Read and parse one control catalog.
pub fn load_catalog(path: &Utf8Path) -> anyhow::Result<ControlCatalog> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {}", path))?;
    parse_catalog(&text).with_context(|| format!("parse {}", path))
}
