//! Stable DTOs used across the hostaudit workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted audit report
//! - stable schema and rule-keyword identifiers
//!
//! The evaluation engine lives in `hostaudit-domain`; this crate only pins
//! the shapes it hands to report sinks.

#![forbid(unsafe_code)]

pub mod keywords;
pub mod report;

pub use report::{
    AuditData, AuditReport, AuditRow, HostMeta, Status, StatusCounts, ToolMeta, SCHEMA_REPORT_V1,
};
