use ferrous_dig_application::ports::{RawAddressRecord, RawMxRecord, RawTxtRecord};
use hickory_resolver::proto::rr::{Name, RData, Record};
use std::net::IpAddr;

/// Extracts raw answers of one type from hickory answer records.
///
/// Answers of other types (e.g. CNAME hops) are skipped, so a lookup whose
/// answer holds only a CNAME chain yields an empty list.
pub struct AnswerParser;

impl AnswerParser {
    pub fn addresses(records: &[Record]) -> Vec<RawAddressRecord> {
        records
            .iter()
            .filter_map(|record| {
                let address = match record.data()? {
                    RData::A(a) => IpAddr::V4(a.0),
                    RData::AAAA(aaaa) => IpAddr::V6(aaaa.0),
                    _ => return None,
                };
                Some(RawAddressRecord {
                    address,
                    ttl: record.ttl(),
                })
            })
            .collect()
    }

    pub fn mail_exchangers(records: &[Record]) -> Vec<RawMxRecord> {
        records
            .iter()
            .filter_map(|record| match record.data()? {
                RData::MX(mx) => Some(RawMxRecord {
                    exchange: Self::hostname(mx.exchange()),
                    priority: mx.preference(),
                }),
                _ => None,
            })
            .collect()
    }

    /// TXT character-strings are decoded as lossy UTF-8, one chunk each.
    pub fn texts(records: &[Record]) -> Vec<RawTxtRecord> {
        records
            .iter()
            .filter_map(|record| match record.data()? {
                RData::TXT(txt) => Some(RawTxtRecord {
                    chunks: txt
                        .txt_data()
                        .iter()
                        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                        .collect(),
                }),
                _ => None,
            })
            .collect()
    }

    pub fn nameservers(records: &[Record]) -> Vec<String> {
        records
            .iter()
            .filter_map(|record| match record.data()? {
                RData::NS(ns) => Some(Self::hostname(&ns.0)),
                _ => None,
            })
            .collect()
    }

    /// Name without the trailing root label dot.
    fn hostname(name: &Name) -> String {
        let utf8 = name.to_utf8();
        match utf8.strip_suffix('.') {
            Some(stripped) if !stripped.is_empty() => stripped.to_string(),
            _ => utf8,
        }
    }
}
