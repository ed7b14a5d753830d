use anyhow::Context;
use hostaudit_domain::model::{
    Control, ControlCatalog, ControlTarget, FileKind, FileRecord, HostSnapshot,
};
use hostaudit_types::HostMeta;
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Document-level invariant violations. Parse errors from malformed JSON
/// surface as `serde_json` errors with anyhow context instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("duplicate file path in snapshot: {0}")]
    DuplicateFilePath(String),
    #[error("duplicate module name in snapshot: {0}")]
    DuplicateModule(String),
    #[error("control '{0}' declares both a file and a module target")]
    ConflictingTargets(String),
}

// ---------------------------------------------------------------------------
// Snapshot documents
// ---------------------------------------------------------------------------

/// Wire shape of a dump document. Permissive on purpose: collectors evolve
/// faster than this tool, and absent fields mean "not captured".
#[derive(Debug, Default, Deserialize)]
struct SnapshotDoc {
    #[serde(default)]
    host: HostDoc,
    #[serde(default)]
    files: Vec<FileDoc>,
    #[serde(default)]
    modules: Vec<ModuleDoc>,
}

#[derive(Debug, Default, Deserialize)]
struct HostDoc {
    hostname: Option<String>,
    exported_at: Option<String>,
    os: Option<String>,
    uptime: Option<String>,
    current_user: Option<String>,
    sudo_used: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FileDoc {
    path: String,
    #[serde(default)]
    permissions: Option<String>,
    #[serde(default)]
    owner: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    encoding: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    kind: FileKindDoc,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum FileKindDoc {
    #[default]
    File,
    Directory,
}

#[derive(Debug, Deserialize)]
struct ModuleDoc {
    name: String,
    status: String,
}

/// Parse a dump document into the in-memory snapshot. Content blobs stay
/// encoded; the engine decodes lazily per control.
pub fn parse_snapshot(text: &str) -> anyhow::Result<HostSnapshot> {
    let doc: SnapshotDoc = serde_json::from_str(text).context("parse snapshot document")?;

    let mut files: BTreeMap<String, FileRecord> = BTreeMap::new();
    for file in doc.files {
        let record = FileRecord {
            permissions: file.permissions,
            owner: file.owner,
            content: file.content,
            encoding: file.encoding,
            error: file.error,
            kind: match file.kind {
                FileKindDoc::File => FileKind::File,
                FileKindDoc::Directory => FileKind::Directory,
            },
        };
        if files.insert(file.path.clone(), record).is_some() {
            return Err(LoadError::DuplicateFilePath(file.path).into());
        }
    }

    let mut modules: BTreeMap<String, String> = BTreeMap::new();
    for module in doc.modules {
        if modules.insert(module.name.clone(), module.status).is_some() {
            return Err(LoadError::DuplicateModule(module.name).into());
        }
    }

    Ok(HostSnapshot {
        host: HostMeta {
            hostname: doc.host.hostname,
            exported_at: doc.host.exported_at,
            os: doc.host.os,
            uptime: doc.host.uptime,
            current_user: doc.host.current_user,
            sudo_used: doc.host.sudo_used,
        },
        files,
        modules,
    })
}

// ---------------------------------------------------------------------------
// Catalog documents
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
struct CatalogDoc {
    #[serde(default)]
    controls: Vec<ControlDoc>,
}

#[derive(Debug, Deserialize)]
struct ControlDoc {
    #[serde(default)]
    id: String,
    #[serde(default)]
    domain: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    profile: String,
    #[serde(default)]
    file: Option<FileTargetDoc>,
    #[serde(default)]
    module: Option<ModuleTargetDoc>,
}

#[derive(Debug, Deserialize)]
struct FileTargetDoc {
    path: String,
    #[serde(default)]
    expected_permission: Option<String>,
    #[serde(default)]
    expected_owner: Option<String>,
    #[serde(default)]
    rule: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ModuleTargetDoc {
    name: String,
    status: String,
}

/// Parse a catalog document, preserving control order.
///
/// A control with both target kinds is a catalog error and fails the load.
/// A control with neither is kept target-less so the engine can report it as
/// FAIL instead of the row silently disappearing from the report.
pub fn parse_catalog(text: &str) -> anyhow::Result<ControlCatalog> {
    let doc: CatalogDoc = serde_json::from_str(text).context("parse catalog document")?;

    let mut controls = Vec::with_capacity(doc.controls.len());
    for control in doc.controls {
        let target = match (control.file, control.module) {
            (Some(_), Some(_)) => {
                return Err(LoadError::ConflictingTargets(control.id).into());
            }
            (Some(file), None) => Some(ControlTarget::File {
                path: file.path,
                expected_permission: file.expected_permission,
                expected_owner: file.expected_owner,
                rule: file.rule,
            }),
            (None, Some(module)) => Some(ControlTarget::Module {
                name: module.name,
                expected_status: module.status,
            }),
            (None, None) => None,
        };
        controls.push(Control {
            id: control.id,
            domain: control.domain,
            description: control.description,
            profile: control.profile,
            target,
        });
    }

    Ok(ControlCatalog { controls })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snapshot_with_files_and_modules() {
        let text = r#"{
            "host": {"hostname": "web01", "os": "GNU/Linux 5.15", "sudo_used": "true"},
            "files": [
                {"path": "/etc/ssh/sshd_config", "permissions": "600", "owner": "root",
                 "content": "TWF4U2Vzc2lvbnMgMTAK", "kind": "file"},
                {"path": "/etc/cron.d", "permissions": "700", "owner": "root", "kind": "directory"}
            ],
            "modules": [{"name": "cramfs", "status": "blacklisted"}]
        }"#;

        let snapshot = parse_snapshot(text).expect("parse snapshot");
        assert_eq!(snapshot.host.hostname.as_deref(), Some("web01"));
        assert_eq!(snapshot.files.len(), 2);
        assert_eq!(
            snapshot.file("/etc/cron.d").map(|r| r.kind),
            Some(FileKind::Directory)
        );
        // Content stays encoded until the engine asks for it.
        assert_eq!(
            snapshot
                .file("/etc/ssh/sshd_config")
                .and_then(|r| r.content.as_deref()),
            Some("TWF4U2Vzc2lvbnMgMTAK")
        );
        assert_eq!(
            snapshot.modules.get("cramfs").map(String::as_str),
            Some("blacklisted")
        );
    }

    #[test]
    fn empty_snapshot_document_is_valid() {
        let snapshot = parse_snapshot("{}").expect("parse empty snapshot");
        assert!(snapshot.files.is_empty());
        assert!(snapshot.modules.is_empty());
        assert_eq!(snapshot.host.hostname, None);
    }

    #[test]
    fn duplicate_file_path_fails_the_load() {
        let text = r#"{"files": [{"path": "/etc/motd"}, {"path": "/etc/motd"}]}"#;
        let err = parse_snapshot(text).unwrap_err();
        assert!(err.to_string().contains("duplicate file path"));
    }

    #[test]
    fn duplicate_module_name_fails_the_load() {
        let text = r#"{"modules": [
            {"name": "cramfs", "status": "loaded"},
            {"name": "cramfs", "status": "blacklisted"}
        ]}"#;
        let err = parse_snapshot(text).unwrap_err();
        assert!(err.to_string().contains("duplicate module name"));
    }

    #[test]
    fn parses_catalog_preserving_order() {
        let text = r#"{"controls": [
            {"id": "5.2", "domain": "SSH", "description": "Session limits", "profile": "L1",
             "file": {"path": "/etc/ssh/sshd_config", "rule": "MaxSessions 10"}},
            {"id": "1.1", "domain": "Kernel", "description": "cramfs disabled", "profile": "L1",
             "module": {"name": "cramfs", "status": "blacklisted"}}
        ]}"#;

        let catalog = parse_catalog(text).expect("parse catalog");
        let ids: Vec<&str> = catalog.controls.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["5.2", "1.1"]);

        match &catalog.controls[0].target {
            Some(ControlTarget::File { path, rule, .. }) => {
                assert_eq!(path, "/etc/ssh/sshd_config");
                assert_eq!(rule.as_deref(), Some("MaxSessions 10"));
            }
            other => panic!("expected file target, got {other:?}"),
        }
        match &catalog.controls[1].target {
            Some(ControlTarget::Module {
                name,
                expected_status,
            }) => {
                assert_eq!(name, "cramfs");
                assert_eq!(expected_status, "blacklisted");
            }
            other => panic!("expected module target, got {other:?}"),
        }
    }

    #[test]
    fn control_with_both_targets_fails_the_load() {
        let text = r#"{"controls": [
            {"id": "9.9",
             "file": {"path": "/etc/motd"},
             "module": {"name": "cramfs", "status": "blacklisted"}}
        ]}"#;
        let err = parse_catalog(text).unwrap_err();
        assert!(err.to_string().contains("both a file and a module target"));
        assert!(err.to_string().contains("9.9"));
    }

    #[test]
    fn control_with_no_target_loads_target_less() {
        let text = r#"{"controls": [{"id": "0.1", "domain": "Misc"}]}"#;
        let catalog = parse_catalog(text).expect("parse catalog");
        assert!(catalog.controls[0].target.is_none());
    }

    #[test]
    fn malformed_json_reports_parse_context() {
        let err = parse_catalog("not json").unwrap_err();
        assert!(format!("{err:#}").contains("parse catalog document"));
    }
}
