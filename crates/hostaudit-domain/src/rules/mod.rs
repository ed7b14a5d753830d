//! Content-rule evaluators, one module per rule family.
//!
//! Every evaluator shares the same contract: it receives the decoded file
//! content, the directive argument, and the file record, pushes any findings
//! into the caller's buffer, and returns whether the check passed. Adding a
//! rule kind is a new variant plus a dispatch arm, not an edit to the engine.

use crate::model::FileRecord;
use hostaudit_types::keywords;

mod access_configured;
mod allow_list;
mod deny_list;
mod directive_value;
mod mount_option;
mod separate_partition;
mod special_references;
mod utils;


/// A recognized rule-directive keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleKind {
    MaxSessions,
    IgnoreRhosts,
    PermitEmptyPasswords,
    HostbasedAuthentication,
    AccessConfigured,
    NoexecOption,
    NosuidOption,
    NodevOption,
    SeparatePartition,
    NoSpecialReferences,
    CronAllowCheck,
    CronDenyCheck,
    AtAllowCheck,
    AtDenyCheck,
}

impl RuleKind {
    /// `None` for keywords this engine does not know; the caller decides
    /// whether that is tolerated or logged.
    pub fn from_keyword(keyword: &str) -> Option<RuleKind> {
        match keyword {
            keywords::RULE_MAX_SESSIONS => Some(RuleKind::MaxSessions),
            keywords::RULE_IGNORE_RHOSTS => Some(RuleKind::IgnoreRhosts),
            keywords::RULE_PERMIT_EMPTY_PASSWORDS => Some(RuleKind::PermitEmptyPasswords),
            keywords::RULE_HOSTBASED_AUTHENTICATION => Some(RuleKind::HostbasedAuthentication),
            keywords::RULE_ACCESS_CONFIGURED => Some(RuleKind::AccessConfigured),
            keywords::RULE_NOEXEC_OPTION => Some(RuleKind::NoexecOption),
            keywords::RULE_NOSUID_OPTION => Some(RuleKind::NosuidOption),
            keywords::RULE_NODEV_OPTION => Some(RuleKind::NodevOption),
            keywords::RULE_SEPARATE_PARTITION => Some(RuleKind::SeparatePartition),
            keywords::RULE_NO_SPECIAL_REFERENCES => Some(RuleKind::NoSpecialReferences),
            keywords::RULE_CRON_ALLOW_CHECK => Some(RuleKind::CronAllowCheck),
            keywords::RULE_CRON_DENY_CHECK => Some(RuleKind::CronDenyCheck),
            keywords::RULE_AT_ALLOW_CHECK => Some(RuleKind::AtAllowCheck),
            keywords::RULE_AT_DENY_CHECK => Some(RuleKind::AtDenyCheck),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            RuleKind::MaxSessions => keywords::RULE_MAX_SESSIONS,
            RuleKind::IgnoreRhosts => keywords::RULE_IGNORE_RHOSTS,
            RuleKind::PermitEmptyPasswords => keywords::RULE_PERMIT_EMPTY_PASSWORDS,
            RuleKind::HostbasedAuthentication => keywords::RULE_HOSTBASED_AUTHENTICATION,
            RuleKind::AccessConfigured => keywords::RULE_ACCESS_CONFIGURED,
            RuleKind::NoexecOption => keywords::RULE_NOEXEC_OPTION,
            RuleKind::NosuidOption => keywords::RULE_NOSUID_OPTION,
            RuleKind::NodevOption => keywords::RULE_NODEV_OPTION,
            RuleKind::SeparatePartition => keywords::RULE_SEPARATE_PARTITION,
            RuleKind::NoSpecialReferences => keywords::RULE_NO_SPECIAL_REFERENCES,
            RuleKind::CronAllowCheck => keywords::RULE_CRON_ALLOW_CHECK,
            RuleKind::CronDenyCheck => keywords::RULE_CRON_DENY_CHECK,
            RuleKind::AtAllowCheck => keywords::RULE_AT_ALLOW_CHECK,
            RuleKind::AtDenyCheck => keywords::RULE_AT_DENY_CHECK,
        }
    }
}

/// Run one rule check. `text` is the already-decoded file content, `path`
/// the control's declared target (used in finding wording only).
pub fn run(
    kind: RuleKind,
    text: &str,
    argument: &str,
    path: &str,
    record: &FileRecord,
    out: &mut Vec<String>,
) -> bool {
    match kind {
        RuleKind::MaxSessions
        | RuleKind::IgnoreRhosts
        | RuleKind::PermitEmptyPasswords
        | RuleKind::HostbasedAuthentication => {
            directive_value::run(kind.keyword(), argument, text, out)
        }
        RuleKind::AccessConfigured => access_configured::run(text, out),
        RuleKind::NoexecOption => mount_option::run("noexec", argument, text, path, out),
        RuleKind::NosuidOption => mount_option::run("nosuid", argument, text, path, out),
        RuleKind::NodevOption => mount_option::run("nodev", argument, text, path, out),
        RuleKind::SeparatePartition => separate_partition::run(argument, text, path, out),
        RuleKind::NoSpecialReferences => special_references::run(text, path, out),
        RuleKind::CronAllowCheck => allow_list::run("cron", text, path, record, out),
        RuleKind::AtAllowCheck => allow_list::run("at", text, path, record, out),
        RuleKind::CronDenyCheck | RuleKind::AtDenyCheck => deny_list::run(text, path, out),
    }
}
