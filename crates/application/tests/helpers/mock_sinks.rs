#![allow(dead_code)]

use async_trait::async_trait;
use chaff_dns_application::ports::AuditSink;
use chaff_dns_domain::{AuditRecord, DomainError};
use std::sync::{Arc, Mutex};

/// Records every appended row in memory.
#[derive(Clone, Default)]
pub struct MockAuditSink {
    records: Arc<Mutex<Vec<AuditRecord>>>,
}

impl MockAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<AuditRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuditSink for MockAuditSink {
    async fn append(&self, record: &AuditRecord) -> Result<(), DomainError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// Fails every append, simulating an unavailable audit store.
#[derive(Clone, Default)]
pub struct FailingAuditSink;

#[async_trait]
impl AuditSink for FailingAuditSink {
    async fn append(&self, _record: &AuditRecord) -> Result<(), DomainError> {
        Err(DomainError::AuditUnavailable(
            "mock sink is offline".to_string(),
        ))
    }
}
