//! Config parsing and override resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration
//! provided as strings. The directory conventions the tool runs with live
//! here, not as constants buried in the engine.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{HostauditConfigV1, OutputFormat};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `hostaudit.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<HostauditConfigV1> {
    let cfg: HostauditConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective run configuration (defaults + file + CLI overrides).
pub fn resolve_config(
    cfg: HostauditConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
