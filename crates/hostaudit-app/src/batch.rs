//! Batch runs over the (catalog × dump) cross-product.
//!
//! Each pairing is a pure, independent evaluation, so the batch fans out
//! across a thread pool. Results are collected in pairing order, which keeps
//! report output reproducible regardless of scheduling.

use crate::audit::run_audit;
use camino::{Utf8Path, Utf8PathBuf};
use hostaudit_types::AuditReport;
use rayon::prelude::*;

/// One (catalog, dump) pairing in a batch run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditPair {
    pub catalog: Utf8PathBuf,
    pub snapshot: Utf8PathBuf,
}

impl AuditPair {
    /// Output file stem for this pairing, e.g. `cis-l1_web01_report`.
    pub fn report_stem(&self) -> String {
        let stem = |p: &Utf8Path| p.file_stem().unwrap_or(p.as_str()).to_string();
        format!("{}_{}_report", stem(&self.catalog), stem(&self.snapshot))
    }
}

/// Outcome of one pairing. A pair whose documents fail to load carries its
/// error here instead of aborting the remaining pairs.
#[derive(Debug)]
pub struct PairResult {
    pub pair: AuditPair,
    pub report: anyhow::Result<AuditReport>,
}

/// Catalog-major cross-product, preserving discovery order on both sides.
pub fn pair_documents(catalogs: &[Utf8PathBuf], snapshots: &[Utf8PathBuf]) -> Vec<AuditPair> {
    catalogs
        .iter()
        .flat_map(|catalog| {
            snapshots.iter().map(move |snapshot| AuditPair {
                catalog: catalog.clone(),
                snapshot: snapshot.clone(),
            })
        })
        .collect()
}

/// Run every pairing, fanned out over the rayon pool. The result vector is
/// in pairing order.
pub fn run_batch(pairs: Vec<AuditPair>) -> Vec<PairResult> {
    pairs
        .into_par_iter()
        .map(|pair| {
            let report = audit_pair(&pair);
            PairResult { pair, report }
        })
        .collect()
}

fn audit_pair(pair: &AuditPair) -> anyhow::Result<AuditReport> {
    let catalog = hostaudit_loader::load_catalog(&pair.catalog)?;
    let snapshot = hostaudit_loader::load_snapshot(&pair.snapshot)?;
    Ok(run_audit(&catalog, &snapshot))
}
