use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid hostname: {0}")]
    InvalidHostname(String),

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Resolver unavailable: {0}")]
    ResolverUnavailable(String),
}
