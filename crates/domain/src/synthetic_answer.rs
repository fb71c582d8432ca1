use crate::errors::DomainError;
use std::net::Ipv6Addr;
use std::sync::Arc;

/// One padded answer: the queried name plus a synthetic IPv6 address whose
/// final segment embeds the answer's position in the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticAnswer {
    pub name: Arc<str>,
    pub index: u32,
    pub address: Ipv6Addr,
}

/// Build the address for one index: the configured prefix with the index
/// appended as lowercase hex, e.g. prefix `2003:ec::2365:` and index 10
/// yield `2003:ec::2365:a`.
pub fn synthetic_address(prefix: &str, index: u32) -> Result<Ipv6Addr, DomainError> {
    format!("{prefix}{index:x}").parse().map_err(|_| {
        DomainError::RecordConstruction(format!(
            "address prefix '{prefix}' does not form a valid IPv6 address at index {index}"
        ))
    })
}
