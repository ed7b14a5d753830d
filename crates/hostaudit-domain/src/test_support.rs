//! Builders shared by the engine and rule tests.

use crate::model::{Control, ControlTarget, FileRecord};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

pub fn encoded(text: &str) -> String {
    STANDARD.encode(text)
}

pub fn record_with_content(text: &str) -> FileRecord {
    FileRecord {
        content: Some(encoded(text)),
        ..FileRecord::default()
    }
}

pub fn control(id: &str, target: Option<ControlTarget>) -> Control {
    Control {
        id: id.to_string(),
        domain: "Hardening".to_string(),
        description: "test control".to_string(),
        profile: "L1".to_string(),
        target,
    }
}

pub fn file_control(id: &str, path: &str) -> Control {
    control(
        id,
        Some(ControlTarget::File {
            path: path.to_string(),
            expected_permission: None,
            expected_owner: None,
            rule: None,
        }),
    )
}

pub fn file_control_with_rule(id: &str, path: &str, directive: &str) -> Control {
    control(
        id,
        Some(ControlTarget::File {
            path: path.to_string(),
            expected_permission: None,
            expected_owner: None,
            rule: Some(directive.to_string()),
        }),
    )
}

pub fn module_control(id: &str, name: &str, expected_status: &str) -> Control {
    control(
        id,
        Some(ControlTarget::Module {
            name: name.to_string(),
            expected_status: expected_status.to_string(),
        }),
    )
}
