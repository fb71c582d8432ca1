use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShaperConfig {
    /// Number of synthetic records per response. This is the size bucket
    /// every response lands in: 145 records pad a response to roughly 4 KiB,
    /// 72 to roughly 2 KiB.
    #[serde(default = "default_record_count")]
    pub record_count: u32,

    /// IPv6 prefix template for synthetic addresses. The record index is
    /// appended in lowercase hex to form each address, so the template must
    /// end with a segment separator and leave one segment free.
    #[serde(default = "default_address_prefix")]
    pub address_prefix: String,

    /// TTL stamped on every synthetic record.
    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

impl Default for ShaperConfig {
    fn default() -> Self {
        Self {
            record_count: default_record_count(),
            address_prefix: default_address_prefix(),
            ttl: default_ttl(),
        }
    }
}

fn default_record_count() -> u32 {
    145
}

fn default_address_prefix() -> String {
    "2003:ec:970e:f439:c5fd:30b8:2365:".to_string()
}

fn default_ttl() -> u32 {
    3600
}
