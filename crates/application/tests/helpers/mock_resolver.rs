use async_trait::async_trait;
use ferrous_dig_application::ports::{
    RawAddressRecord, RawMxRecord, RawTxtRecord, RecordResolver, ResolverError,
};
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock RecordResolver
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolverCall {
    A(String),
    Aaaa(String),
    Mx(String),
    Txt(String),
    Ns(String),
}

/// Scripted resolver: each operation answers with its configured records,
/// or with `failure` when one is set. Every call is recorded.
#[derive(Clone, Default)]
pub struct MockRecordResolver {
    pub a: Vec<RawAddressRecord>,
    pub aaaa: Vec<RawAddressRecord>,
    pub mx: Vec<RawMxRecord>,
    pub txt: Vec<RawTxtRecord>,
    pub ns: Vec<String>,
    pub failure: Option<ResolverError>,
    calls: Arc<Mutex<Vec<ResolverCall>>>,
}

impl MockRecordResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: ResolverError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub fn with_a(mut self, records: &[(&str, u32)]) -> Self {
        self.a = address_records(records);
        self
    }

    pub fn with_aaaa(mut self, records: &[(&str, u32)]) -> Self {
        self.aaaa = address_records(records);
        self
    }

    pub fn with_mx(mut self, records: &[(&str, u16)]) -> Self {
        self.mx = records
            .iter()
            .map(|(exchange, priority)| RawMxRecord {
                exchange: exchange.to_string(),
                priority: *priority,
            })
            .collect();
        self
    }

    pub fn with_txt(mut self, records: &[&[&str]]) -> Self {
        self.txt = records
            .iter()
            .map(|chunks| RawTxtRecord {
                chunks: chunks.iter().map(|c| c.to_string()).collect(),
            })
            .collect();
        self
    }

    pub fn with_ns(mut self, records: &[&str]) -> Self {
        self.ns = records.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn calls(&self) -> Vec<ResolverCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ResolverCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn answer<T: Clone>(&self, records: &[T]) -> Result<Vec<T>, ResolverError> {
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(records.to_vec()),
        }
    }
}

pub fn address_records(records: &[(&str, u32)]) -> Vec<RawAddressRecord> {
    records
        .iter()
        .map(|(address, ttl)| RawAddressRecord {
            address: IpAddr::from_str(address).unwrap(),
            ttl: *ttl,
        })
        .collect()
}

#[async_trait]
impl RecordResolver for MockRecordResolver {
    async fn resolve_a(&self, hostname: &str) -> Result<Vec<RawAddressRecord>, ResolverError> {
        self.record(ResolverCall::A(hostname.to_string()));
        self.answer(&self.a)
    }

    async fn resolve_aaaa(&self, hostname: &str) -> Result<Vec<RawAddressRecord>, ResolverError> {
        self.record(ResolverCall::Aaaa(hostname.to_string()));
        self.answer(&self.aaaa)
    }

    async fn resolve_mx(&self, hostname: &str) -> Result<Vec<RawMxRecord>, ResolverError> {
        self.record(ResolverCall::Mx(hostname.to_string()));
        self.answer(&self.mx)
    }

    async fn resolve_txt(&self, hostname: &str) -> Result<Vec<RawTxtRecord>, ResolverError> {
        self.record(ResolverCall::Txt(hostname.to_string()));
        self.answer(&self.txt)
    }

    async fn resolve_ns(&self, hostname: &str) -> Result<Vec<String>, ResolverError> {
        self.record(ResolverCall::Ns(hostname.to_string()));
        self.answer(&self.ns)
    }
}
