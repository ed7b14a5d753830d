use crate::model::{HostauditConfigV1, OutputFormat};
use camino::Utf8PathBuf;

/// CLI-provided overrides; any set field wins over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub input_dir: Option<String>,
    pub control_dir: Option<String>,
    pub output_dir: Option<String>,
    pub formats: Option<Vec<String>>,
}

/// The effective run configuration after defaults, file, and overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub input_dir: Utf8PathBuf,
    pub control_dir: Utf8PathBuf,
    pub output_dir: Utf8PathBuf,
    pub formats: Vec<OutputFormat>,
}

const DEFAULT_INPUT_DIR: &str = "input";
const DEFAULT_CONTROL_DIR: &str = "control";
const DEFAULT_OUTPUT_DIR: &str = "output";

pub fn resolve_config(
    cfg: HostauditConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let pick = |over: Option<String>, file: Option<String>, default: &str| {
        Utf8PathBuf::from(over.or(file).unwrap_or_else(|| default.to_string()))
    };

    let formats = match overrides.formats.or(cfg.formats) {
        Some(names) => {
            let mut formats = Vec::new();
            for name in &names {
                let format = OutputFormat::parse(name)?;
                if !formats.contains(&format) {
                    formats.push(format);
                }
            }
            formats
        }
        None => vec![OutputFormat::Html, OutputFormat::Csv, OutputFormat::Json],
    };

    Ok(ResolvedConfig {
        input_dir: pick(overrides.input_dir, cfg.input_dir, DEFAULT_INPUT_DIR),
        control_dir: pick(overrides.control_dir, cfg.control_dir, DEFAULT_CONTROL_DIR),
        output_dir: pick(overrides.output_dir, cfg.output_dir, DEFAULT_OUTPUT_DIR),
        formats,
    })
}
