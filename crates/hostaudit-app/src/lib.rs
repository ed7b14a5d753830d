//! Use case orchestration for hostaudit.
//!
//! This crate provides the application layer: it coordinates the loader,
//! domain, and render layers. It is intentionally thin; the CLI crate on top
//! of it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod audit;
mod batch;

pub use audit::{parse_report_json, report_exit_code, run_audit, serialize_report};
pub use batch::{AuditPair, PairResult, pair_documents, run_batch};
