use chaff_dns_domain::{synthetic_address, DomainError, ShaperConfig, SyntheticAnswer};
use std::sync::Arc;

/// Builds the padded answer set for a query name.
///
/// Every response carries exactly `record_count` synthetic AAAA answers, so
/// wire size is a function of the name length and the configured count and
/// of nothing else. Output is fully deterministic: no clock, no randomness,
/// no state shared between indices.
pub struct ResponseShaper {
    record_count: u32,
    address_prefix: Arc<str>,
}

impl ResponseShaper {
    pub fn new(config: &ShaperConfig) -> Self {
        Self {
            record_count: config.record_count,
            address_prefix: Arc::from(config.address_prefix.as_str()),
        }
    }

    pub fn record_count(&self) -> u32 {
        self.record_count
    }

    /// Synthesize the full answer set, or fail without producing any.
    ///
    /// A name the set cannot be built for (empty, whitespace, oversized
    /// labels) fails the whole operation; callers never see a partial set.
    pub fn synthesize(&self, name: &str) -> Result<Vec<SyntheticAnswer>, DomainError> {
        validate_owner_name(name)?;

        let owner: Arc<str> = Arc::from(name);
        let mut answers = Vec::with_capacity(self.record_count as usize);
        for index in 0..self.record_count {
            let address = synthetic_address(&self.address_prefix, index)?;
            answers.push(SyntheticAnswer {
                name: owner.clone(),
                index,
                address,
            });
        }
        Ok(answers)
    }
}

/// Owner-name sanity check for synthetic records.
///
/// Queries arrive through the wire parser, so malformed names are rare, but
/// a name that cannot own a record (whitespace, control bytes, oversized
/// labels) must abort the set rather than truncate it.
fn validate_owner_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidQueryName("empty name".to_string()));
    }
    if name == "." {
        return Ok(());
    }
    if name.len() > 255 {
        return Err(DomainError::InvalidQueryName(format!(
            "name exceeds 255 octets: {} octets",
            name.len()
        )));
    }
    if name
        .chars()
        .any(|c| c.is_whitespace() || c.is_control())
    {
        return Err(DomainError::InvalidQueryName(format!(
            "name contains whitespace or control characters: {name:?}"
        )));
    }
    for label in name.trim_end_matches('.').split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidQueryName(format!(
                "empty label in name: {name:?}"
            )));
        }
        if label.len() > 63 {
            return Err(DomainError::InvalidQueryName(format!(
                "label exceeds 63 octets in name: {name:?}"
            )));
        }
    }
    Ok(())
}
