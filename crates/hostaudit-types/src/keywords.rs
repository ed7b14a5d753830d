//! Stable rule-directive keywords shared by catalogs and the engine.
//!
//! A control's rule directive is `<keyword> [argument]`. The keyword set is
//! append-only: removing or renaming one breaks existing catalogs.

pub const RULE_MAX_SESSIONS: &str = "MaxSessions";
pub const RULE_IGNORE_RHOSTS: &str = "IgnoreRhosts";
pub const RULE_PERMIT_EMPTY_PASSWORDS: &str = "PermitEmptyPasswords";
pub const RULE_HOSTBASED_AUTHENTICATION: &str = "HostbasedAuthentication";
pub const RULE_ACCESS_CONFIGURED: &str = "AccessConfigured";
pub const RULE_NOEXEC_OPTION: &str = "NoexecOption";
pub const RULE_NOSUID_OPTION: &str = "NosuidOption";
pub const RULE_NODEV_OPTION: &str = "NodevOption";
pub const RULE_SEPARATE_PARTITION: &str = "SeparatePartition";
pub const RULE_NO_SPECIAL_REFERENCES: &str = "NoSpecialReferences";
pub const RULE_CRON_ALLOW_CHECK: &str = "CronAllowCheck";
pub const RULE_CRON_DENY_CHECK: &str = "CronDenyCheck";
pub const RULE_AT_ALLOW_CHECK: &str = "AtAllowCheck";
pub const RULE_AT_DENY_CHECK: &str = "AtDenyCheck";
