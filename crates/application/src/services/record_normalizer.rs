use crate::ports::{RawAddressRecord, RawMxRecord, RawTxtRecord};
use ferrous_dig_domain::Record;

/// Maps raw resolver answers into uniform [`Record`]s, preserving order.
pub struct RecordNormalizer;

impl RecordNormalizer {
    /// A and AAAA answers.
    pub fn addresses(raw: Vec<RawAddressRecord>) -> Vec<Record> {
        raw.into_iter()
            .map(|r| Record::Address {
                address: r.address,
                ttl: r.ttl,
            })
            .collect()
    }

    pub fn mail_exchangers(raw: Vec<RawMxRecord>) -> Vec<Record> {
        raw.into_iter()
            .map(|r| Record::Mail {
                exchange: r.exchange,
                priority: r.priority,
            })
            .collect()
    }

    /// Keeps only the first chunk of each TXT answer. An answer without
    /// chunks yields an empty value.
    pub fn texts(raw: Vec<RawTxtRecord>) -> Vec<Record> {
        raw.into_iter()
            .map(|r| Record::Text {
                value: r.chunks.into_iter().next().unwrap_or_default(),
            })
            .collect()
    }

    pub fn nameservers(raw: Vec<String>) -> Vec<Record> {
        raw.into_iter()
            .map(|nameserver| Record::NameServer { nameserver })
            .collect()
    }
}
