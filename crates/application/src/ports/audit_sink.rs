use async_trait::async_trait;
use chaff_dns_domain::{AuditRecord, DomainError};

/// Durable append-only store for audit records.
///
/// One call appends exactly one row and returns only after the row has been
/// flushed. Implementations must not buffer across calls; a returned `Ok`
/// means the record survives a crash of this process.
#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn append(&self, record: &AuditRecord) -> Result<(), DomainError>;
}
