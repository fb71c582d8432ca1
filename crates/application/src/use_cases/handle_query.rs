use crate::ports::AuditSink;
use crate::services::ResponseShaper;
use chaff_dns_domain::{AuditRecord, DomainError, QueryContext, SyntheticAnswer};
use std::sync::Arc;
use tracing::{debug, warn};

/// Per-query orchestration: persist the audit row, then build the padded
/// answer set.
pub struct HandleQueryUseCase {
    audit: Arc<dyn AuditSink>,
    shaper: ResponseShaper,
}

impl HandleQueryUseCase {
    pub fn new(audit: Arc<dyn AuditSink>, shaper: ResponseShaper) -> Self {
        Self { audit, shaper }
    }

    /// The audit append is awaited, not fire-and-forget: a query is only
    /// answered once its row is durable, and a failed append fails this
    /// query (and only this query).
    pub async fn execute(&self, ctx: &QueryContext) -> Result<Vec<SyntheticAnswer>, DomainError> {
        let record = AuditRecord::from_context(ctx);
        if let Err(e) = self.audit.append(&record).await {
            warn!(subject = %record.subject, error = %e, "Audit append failed, refusing query");
            return Err(e);
        }

        let answers = self.shaper.synthesize(&ctx.name)?;
        debug!(
            name = %ctx.name,
            answers = answers.len(),
            "Padded answer set ready"
        );
        Ok(answers)
    }
}
