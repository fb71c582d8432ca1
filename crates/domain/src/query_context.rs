use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Zero-argument metadata accessor, resolved lazily at lookup time.
pub type MetadataFn = Arc<dyn Fn() -> String + Send + Sync>;

/// Everything the core needs to know about one inbound query.
///
/// Built once per handler invocation and dropped when the invocation
/// returns. `remote_addr` and `transport` are advisory and may be empty;
/// `raw_message` is the textual rendering of the inbound message and is
/// only ever fed to the audit trail, never parsed again.
#[derive(Clone)]
pub struct QueryContext {
    pub name: Arc<str>,
    pub remote_addr: Arc<str>,
    pub transport: Arc<str>,
    pub raw_message: Arc<str>,
    metadata: Option<HashMap<String, MetadataFn>>,
}

impl QueryContext {
    pub fn new(
        name: impl Into<Arc<str>>,
        remote_addr: impl Into<Arc<str>>,
        transport: impl Into<Arc<str>>,
        raw_message: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            name: name.into(),
            remote_addr: remote_addr.into(),
            transport: transport.into(),
            raw_message: raw_message.into(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: HashMap<String, MetadataFn>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Resolve a metadata key. Lookups never fail: an absent map or an
    /// absent key both yield the empty string.
    pub fn meta(&self, key: &str) -> String {
        match &self.metadata {
            Some(map) => map.get(key).map(|f| f()).unwrap_or_default(),
            None => String::new(),
        }
    }
}

impl fmt::Debug for QueryContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryContext")
            .field("name", &self.name)
            .field("remote_addr", &self.remote_addr)
            .field("transport", &self.transport)
            .field("raw_message_len", &self.raw_message.len())
            .field("metadata_keys", &self.metadata.as_ref().map(|m| m.len()))
            .finish()
    }
}
