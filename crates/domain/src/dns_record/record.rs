use super::RecordType;
use serde::Serialize;
use std::net::IpAddr;

/// Uniform DNS record, one variant per record shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    /// A or AAAA answer
    Address { address: IpAddr, ttl: u32 },
    /// MX answer
    Mail { exchange: String, priority: u16 },
    /// First chunk of a TXT answer
    Text { value: String },
    /// NS answer
    NameServer { nameserver: String },
}

impl Record {
    /// Returns true when this variant is the shape produced for `record_type`.
    pub fn matches(&self, record_type: RecordType) -> bool {
        match (self, record_type) {
            (Record::Address { address, .. }, RecordType::A) => address.is_ipv4(),
            (Record::Address { address, .. }, RecordType::AAAA) => address.is_ipv6(),
            (Record::Mail { .. }, RecordType::MX) => true,
            (Record::Text { .. }, RecordType::TXT) => true,
            (Record::NameServer { .. }, RecordType::NS) => true,
            _ => false,
        }
    }
}
