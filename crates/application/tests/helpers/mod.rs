mod mock_sinks;

pub use mock_sinks::{FailingAuditSink, MockAuditSink};
