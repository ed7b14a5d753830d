//! CLI entry point for hostaudit.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. All business logic lives in the `hostaudit-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use hostaudit_app::{
    pair_documents, parse_report_json, report_exit_code, run_batch, serialize_report,
};
use hostaudit_loader::discover_documents;
use hostaudit_render::{render_csv, render_html};
use hostaudit_settings::{HostauditConfigV1, OutputFormat, Overrides, ResolvedConfig};
use hostaudit_types::AuditReport;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "hostaudit",
    version,
    about = "Offline compliance auditor for captured host snapshots"
)]
struct Cli {
    /// Path to hostaudit config TOML.
    #[arg(long, default_value = "hostaudit.toml")]
    config: Utf8PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Audit every captured dump against every control catalog and write one
    /// report per pairing.
    Audit {
        /// Directory of captured host dumps.
        #[arg(long)]
        input_dir: Option<String>,

        /// Directory of control catalogs.
        #[arg(long)]
        control_dir: Option<String>,

        /// Directory reports are written to.
        #[arg(long)]
        output_dir: Option<String>,

        /// Report format to write (html, csv, json). Repeatable.
        #[arg(long = "format")]
        formats: Vec<String>,
    },

    /// Re-render an existing JSON report.
    Render {
        /// Path to the JSON report file.
        report: Utf8PathBuf,

        /// Format to render (html or csv).
        #[arg(long, default_value = "html")]
        format: String,

        /// Where to write the output (prints to stdout if omitted).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Audit {
            input_dir,
            control_dir,
            output_dir,
            formats,
        } => {
            let overrides = Overrides {
                input_dir,
                control_dir,
                output_dir,
                formats: (!formats.is_empty()).then_some(formats),
            };
            cmd_audit(&cli.config, overrides)
        }
        Commands::Render {
            report,
            format,
            output,
        } => cmd_render(&report, &format, output),
    }
}

fn cmd_audit(config_path: &Utf8Path, overrides: Overrides) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let resolved = load_config(config_path, overrides)?;

        let catalogs =
            discover_documents(&resolved.control_dir).context("discover control catalogs")?;
        let snapshots = discover_documents(&resolved.input_dir).context("discover host dumps")?;
        if catalogs.is_empty() {
            anyhow::bail!("no catalog documents found in {}", resolved.control_dir);
        }
        if snapshots.is_empty() {
            anyhow::bail!("no dump documents found in {}", resolved.input_dir);
        }

        std::fs::create_dir_all(&resolved.output_dir)
            .with_context(|| format!("create directory: {}", resolved.output_dir))?;

        let results = run_batch(pair_documents(&catalogs, &snapshots));

        let mut exit = 0;
        let mut skipped = 0usize;
        for result in &results {
            match &result.report {
                Ok(report) => {
                    write_reports(
                        &resolved.output_dir,
                        &result.pair.report_stem(),
                        report,
                        &resolved.formats,
                    )?;
                    exit = exit.max(report_exit_code(report));
                }
                Err(err) => {
                    // A broken document costs its pairing, not the batch.
                    skipped += 1;
                    eprintln!(
                        "hostaudit: skipping {} x {}: {err:#}",
                        result.pair.catalog, result.pair.snapshot
                    );
                }
            }
        }
        if skipped > 0 {
            exit = exit.max(1);
        }

        eprintln!(
            "hostaudit: wrote reports for {} of {} pairings to {}",
            results.len() - skipped,
            results.len(),
            resolved.output_dir
        );
        Ok(exit)
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("hostaudit error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Load config if present; a missing file is allowed and defaults apply.
fn load_config(config_path: &Utf8Path, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg_text = std::fs::read_to_string(config_path).unwrap_or_default();
    let cfg = if cfg_text.trim().is_empty() {
        HostauditConfigV1::default()
    } else {
        hostaudit_settings::parse_config_toml(&cfg_text).context("parse config")?
    };
    hostaudit_settings::resolve_config(cfg, overrides).context("resolve config")
}

fn write_reports(
    output_dir: &Utf8Path,
    stem: &str,
    report: &AuditReport,
    formats: &[OutputFormat],
) -> anyhow::Result<()> {
    for format in formats {
        let path = output_dir.join(format!("{stem}.{}", format.extension()));
        let body = match format {
            OutputFormat::Html => render_html(report),
            OutputFormat::Csv => render_csv(report),
            OutputFormat::Json => serialize_report(report).context("serialize report")?,
        };
        std::fs::write(&path, body).with_context(|| format!("write report: {path}"))?;
    }
    Ok(())
}

fn cmd_render(
    report_path: &Utf8Path,
    format: &str,
    output: Option<Utf8PathBuf>,
) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&text)?;

    let body = match format {
        "html" => render_html(&report),
        "csv" => render_csv(&report),
        other => anyhow::bail!("unknown render format: {other} (expected html or csv)"),
    };

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create directory: {parent}"))?;
            }
            std::fs::write(&path, body).with_context(|| format!("write output: {path}"))?;
        }
        None => print!("{body}"),
    }

    Ok(())
}
