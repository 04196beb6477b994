use super::{DomainError, Record, RecordType};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Lookup request (hostname + record type).
/// Uses `Arc<str>` so the hostname can be shared with the rendered response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub hostname: Arc<str>,
    pub record_type: RecordType,
}

impl LookupRequest {
    pub fn new(hostname: &str, record_type: RecordType) -> Result<Self, DomainError> {
        let hostname = hostname.trim();
        if hostname.is_empty() {
            return Err(DomainError::InvalidHostname(
                "hostname cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            hostname: Arc::from(hostname),
            record_type,
        })
    }

    /// Builds a request from raw command arguments, falling back to `A`
    /// for absent or unrecognized type tags.
    pub fn from_command(hostname: &str, record_type: Option<&str>) -> Result<Self, DomainError> {
        Self::new(hostname, RecordType::parse_lenient(record_type))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LookupErrorKind {
    /// The name exists but has no records of the requested type
    NoData,
    /// The name does not exist
    NotFound,
    /// Any other resolver failure
    Other,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct LookupError {
    pub kind: LookupErrorKind,
    pub message: String,
}

impl LookupError {
    pub fn new(kind: LookupErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(LookupErrorKind::Other, message)
    }
}

/// Outcome of a single lookup.
///
/// `Ok(vec![])` is an empty but successful answer and is distinct from
/// `Err` with [`LookupErrorKind::NoData`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub request: LookupRequest,
    pub outcome: Result<Vec<Record>, LookupError>,
}

impl LookupResult {
    pub fn success(request: LookupRequest, records: Vec<Record>) -> Self {
        Self {
            request,
            outcome: Ok(records),
        }
    }

    pub fn failure(request: LookupRequest, error: LookupError) -> Self {
        Self {
            request,
            outcome: Err(error),
        }
    }

    pub fn records(&self) -> &[Record] {
        match &self.outcome {
            Ok(records) => records,
            Err(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&LookupError> {
        self.outcome.as_ref().err()
    }

    pub fn is_empty_success(&self) -> bool {
        matches!(&self.outcome, Ok(records) if records.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_rejects_blank_hostname() {
        assert!(matches!(
            LookupRequest::new("   ", RecordType::A),
            Err(DomainError::InvalidHostname(_))
        ));
        assert!(LookupRequest::new("", RecordType::MX).is_err());
    }

    #[test]
    fn test_request_trims_hostname() {
        let request = LookupRequest::new(" example.com ", RecordType::NS).unwrap();
        assert_eq!(request.hostname.as_ref(), "example.com");
        assert_eq!(request.record_type, RecordType::NS);
    }

    #[test]
    fn test_from_command_defaults_type() {
        let omitted = LookupRequest::from_command("example.com", None).unwrap();
        let unknown = LookupRequest::from_command("example.com", Some("SPF")).unwrap();
        let mixed = LookupRequest::from_command("example.com", Some("AaAa")).unwrap();

        assert_eq!(omitted.record_type, RecordType::A);
        assert_eq!(unknown.record_type, RecordType::A);
        assert_eq!(mixed.record_type, RecordType::AAAA);
    }

    #[test]
    fn test_empty_success_is_not_an_error() {
        let request = LookupRequest::new("example.com", RecordType::A).unwrap();
        let empty = LookupResult::success(request.clone(), vec![]);
        let nodata = LookupResult::failure(
            request,
            LookupError::new(LookupErrorKind::NoData, "no data"),
        );

        assert!(empty.is_empty_success());
        assert!(empty.error().is_none());
        assert!(!nodata.is_empty_success());
        assert_eq!(nodata.error().unwrap().kind, LookupErrorKind::NoData);
        assert!(nodata.records().is_empty());
    }
}
