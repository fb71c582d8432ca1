use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid query name: {0}")]
    InvalidQueryName(String),

    #[error("Audit store unavailable: {0}")]
    AuditUnavailable(String),

    #[error("Synthetic record construction failed: {0}")]
    RecordConstruction(String),
}
