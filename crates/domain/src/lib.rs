//! Chaff DNS Domain Layer
pub mod audit_record;
pub mod config;
pub mod errors;
pub mod query_context;
pub mod synthetic_answer;

pub use audit_record::{escape_raw_message, AuditRecord};
pub use config::{
    AuditConfig, CliOverrides, Config, ConfigError, LoggingConfig, ServerConfig, ShaperConfig,
};
pub use errors::DomainError;
pub use query_context::{MetadataFn, QueryContext};
pub use synthetic_answer::{synthetic_address, SyntheticAnswer};
