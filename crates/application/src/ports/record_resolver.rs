use async_trait::async_trait;
use std::net::IpAddr;
use thiserror::Error;

/// The name exists but holds no data of the requested type.
pub const ENODATA: &str = "ENODATA";
/// The name does not exist.
pub const ENOTFOUND: &str = "ENOTFOUND";
/// The resolver gave up waiting for an answer.
pub const ETIMEOUT: &str = "ETIMEOUT";
/// The upstream server failed to answer (SERVFAIL).
pub const ESERVFAIL: &str = "ESERVFAIL";
/// The upstream server refused the query.
pub const EREFUSED: &str = "EREFUSED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAddressRecord {
    pub address: IpAddr,
    pub ttl: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMxRecord {
    pub exchange: String,
    pub priority: u16,
}

/// A TXT answer as the list of character-strings it was sent as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTxtRecord {
    pub chunks: Vec<String>,
}

/// Failure reported by a resolver, carrying a machine-readable code when
/// one applies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ResolverError {
    pub code: Option<String>,
    pub message: String,
}

impl ResolverError {
    pub fn new(code: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            code: code.map(str::to_string),
            message: message.into(),
        }
    }

    pub fn with_code(code: &str, message: impl Into<String>) -> Self {
        Self::new(Some(code), message)
    }

    pub fn uncoded(message: impl Into<String>) -> Self {
        Self::new(None, message)
    }
}

/// Name resolution capability. One call per lookup; answers keep the
/// order the resolver returned them in.
#[async_trait]
pub trait RecordResolver: Send + Sync {
    async fn resolve_a(&self, hostname: &str) -> Result<Vec<RawAddressRecord>, ResolverError>;

    async fn resolve_aaaa(&self, hostname: &str) -> Result<Vec<RawAddressRecord>, ResolverError>;

    async fn resolve_mx(&self, hostname: &str) -> Result<Vec<RawMxRecord>, ResolverError>;

    async fn resolve_txt(&self, hostname: &str) -> Result<Vec<RawTxtRecord>, ResolverError>;

    async fn resolve_ns(&self, hostname: &str) -> Result<Vec<String>, ResolverError>;
}
