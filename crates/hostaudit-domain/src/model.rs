use hostaudit_types::HostMeta;
use std::collections::BTreeMap;

/// Point-in-time capture of one host. Built once by the loader, read-only
/// thereafter, discarded after its controls have been evaluated.
#[derive(Clone, Debug, Default)]
pub struct HostSnapshot {
    pub host: HostMeta,

    /// Captured files keyed by absolute path. A path absent from the map was
    /// never captured, which is distinct from captured-with-error.
    pub files: BTreeMap<String, FileRecord>,

    /// Kernel module status keyed by module name. Absence means the
    /// collector did not report on the module.
    pub modules: BTreeMap<String, String>,
}

impl HostSnapshot {
    pub fn file(&self, path: &str) -> Option<&FileRecord> {
        self.files.get(path)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FileKind {
    #[default]
    File,
    Directory,
}

#[derive(Clone, Debug, Default)]
pub struct FileRecord {
    pub permissions: Option<String>,
    pub owner: Option<String>,

    /// Raw encoded blob as captured; decoded lazily per control.
    pub content: Option<String>,
    pub encoding: Option<String>,

    /// Collector-side read error, e.g. "File not found".
    pub error: Option<String>,

    pub kind: FileKind,
}

impl FileRecord {
    /// The collector listed the path but could not read it on the host.
    pub fn missing_on_host(&self) -> bool {
        self.error
            .as_deref()
            .is_some_and(|e| e.eq_ignore_ascii_case("file not found"))
    }
}

/// One declarative policy rule from a control catalog.
#[derive(Clone, Debug)]
pub struct Control {
    pub id: String,
    pub domain: String,
    pub description: String,
    pub profile: String,

    /// `None` marks a control that declared no recognizable target. The
    /// engine reports it as FAIL rather than skipping it.
    pub target: Option<ControlTarget>,
}

/// Exactly one target kind per control. The loader rejects catalogs that
/// declare both on a single control.
#[derive(Clone, Debug)]
pub enum ControlTarget {
    File {
        path: String,
        expected_permission: Option<String>,
        expected_owner: Option<String>,
        /// Rule directive of the shape `<keyword> [argument]`, parsed by the
        /// engine at evaluation time.
        rule: Option<String>,
    },
    Module {
        name: String,
        expected_status: String,
    },
}

impl ControlTarget {
    /// The path or module name this control inspects.
    pub fn descriptor(&self) -> &str {
        match self {
            ControlTarget::File { path, .. } => path,
            ControlTarget::Module { name, .. } => name,
        }
    }
}

/// Order-preserving set of controls from one catalog document. Report rows
/// must reflect catalog order so runs diff cleanly.
#[derive(Clone, Debug, Default)]
pub struct ControlCatalog {
    pub controls: Vec<Control>,
}
