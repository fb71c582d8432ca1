use crate::query_context::QueryContext;
use chrono::Utc;
use std::sync::Arc;

/// One durably persisted row describing an observed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    pub subject: Arc<str>,
    /// Unix seconds at audit time. Monotonicity across rows is not promised.
    pub timestamp: i64,
    pub annotation: String,
}

impl AuditRecord {
    pub fn from_context(ctx: &QueryContext) -> Self {
        let annotation = format!(
            "FROM_{} Protocol_{} {}",
            ctx.remote_addr,
            ctx.transport,
            escape_raw_message(&ctx.raw_message)
        );
        Self {
            subject: ctx.name.clone(),
            timestamp: Utc::now().timestamp(),
            annotation,
        }
    }
}

/// Collapse a rendered DNS message into a single delimiter-safe field.
///
/// The substitution order is a compatibility contract with existing audit
/// tooling and must not be rearranged: later steps operate on text produced
/// by earlier ones (the `;;` pass inserts spaces that the final cleanup pass
/// then inspects), so the pipeline is not idempotent and not commutative.
///
/// 1. newline      -> `$`
/// 2. space        -> `&`
/// 3. `;;`         -> space
/// 4. `;`          -> `%`
/// 5. tab          -> `?`
/// 6. `" &"` and `"& "` -> single space
pub fn escape_raw_message(raw: &str) -> String {
    let escaped = raw.replace('\n', "$");
    let escaped = escaped.replace(' ', "&");
    let escaped = escaped.replace(";;", " ");
    let escaped = escaped.replace(';', "%");
    let escaped = escaped.replace('\t', "?");
    let escaped = escaped.replace(" &", " ");
    escaped.replace("& ", " ")
}
