use chaff_dns_domain::{DomainError, SyntheticAnswer};
use hickory_proto::rr::rdata::AAAA;
use hickory_proto::rr::{Name, RData, Record};
use std::str::FromStr;

/// Map a synthetic answer set onto wire records.
///
/// Every answer in the set shares one owner name, so the name is parsed
/// once; if it is rejected the whole set aborts and no record is built.
pub fn answer_records(answers: &[SyntheticAnswer], ttl: u32) -> Result<Vec<Record>, DomainError> {
    let Some(first) = answers.first() else {
        return Ok(Vec::new());
    };

    let name = Name::from_str(&first.name).map_err(|e| {
        DomainError::RecordConstruction(format!("owner name '{}' rejected: {e}", first.name))
    })?;

    Ok(answers
        .iter()
        .map(|answer| Record::from_rdata(name.clone(), ttl, RData::AAAA(AAAA(answer.address))))
        .collect())
}
