use anyhow::bail;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `hostaudit.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so
/// forward-compat is easy. Everything is optional; defaults apply at
/// resolution time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HostauditConfigV1 {
    /// Optional schema string for tooling (`hostaudit.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Directory holding captured host dumps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_dir: Option<String>,

    /// Directory holding control catalogs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_dir: Option<String>,

    /// Directory reports are written to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,

    /// Report formats to write: any of `html`, `csv`, `json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formats: Option<Vec<String>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Csv,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> anyhow::Result<OutputFormat> {
        match value {
            "html" => Ok(OutputFormat::Html),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unknown report format: {other} (expected html, csv, or json)"),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}
