use async_trait::async_trait;
use chaff_dns_application::ports::AuditSink;
use chaff_dns_domain::{AuditConfig, AuditRecord, DomainError};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Delimited-text audit store.
///
/// The file is opened in append mode and closed again on every single call.
/// Concurrent handler invocations therefore never share a descriptor; row
/// ordering rests on the kernel's atomic-append guarantee for a single
/// bounded write, so no lock is held anywhere on this path.
pub struct CsvAuditSink {
    path: PathBuf,
    delimiter: char,
    create_if_missing: bool,
}

impl CsvAuditSink {
    pub fn new(config: &AuditConfig) -> Self {
        Self {
            path: PathBuf::from(&config.path),
            delimiter: config.field_delimiter,
            create_if_missing: config.create_if_missing,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format_row(&self, record: &AuditRecord) -> String {
        let d = self.delimiter;
        format!(
            "{}{d}{}{d}{}\n",
            quote_field(&record.subject, d),
            record.timestamp,
            quote_field(&record.annotation, d),
        )
    }
}

#[async_trait]
impl AuditSink for CsvAuditSink {
    async fn append(&self, record: &AuditRecord) -> Result<(), DomainError> {
        // The whole row is handed to the kernel in one write so concurrent
        // appends cannot straddle each other.
        let row = self.format_row(record);

        let mut file = OpenOptions::new()
            .append(true)
            .create(self.create_if_missing)
            .open(&self.path)
            .await
            .map_err(|e| store_error("open", &self.path, e))?;

        file.write_all(row.as_bytes())
            .await
            .map_err(|e| store_error("write", &self.path, e))?;
        file.flush()
            .await
            .map_err(|e| store_error("flush", &self.path, e))?;

        debug!(subject = %record.subject, path = %self.path.display(), "Audit row appended");
        Ok(())
    }
}

fn store_error(op: &str, path: &Path, err: std::io::Error) -> DomainError {
    DomainError::AuditUnavailable(format!("{op} {}: {err}", path.display()))
}

/// RFC 4180 quoting, generalized to the configured delimiter: a field is
/// quoted only when it contains the delimiter, a quote, or a line break,
/// and embedded quotes are doubled.
fn quote_field(field: &str, delimiter: char) -> Cow<'_, str> {
    if field
        .chars()
        .any(|c| c == delimiter || c == '"' || c == '\n' || c == '\r')
    {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
