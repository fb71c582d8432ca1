use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuditConfig {
    /// Append-only audit file location.
    #[serde(default = "default_audit_path")]
    pub path: String,

    /// Field delimiter for audit rows.
    #[serde(default = "default_field_delimiter")]
    pub field_delimiter: char,

    /// Create the audit file on first write if it does not exist. When
    /// false, a missing file fails the query like any other store error.
    #[serde(default = "default_true")]
    pub create_if_missing: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            path: default_audit_path(),
            field_delimiter: default_field_delimiter(),
            create_if_missing: default_true(),
        }
    }
}

fn default_audit_path() -> String {
    "chaff-audit.csv".to_string()
}

fn default_field_delimiter() -> char {
    ';'
}

fn default_true() -> bool {
    true
}
