//! Ferrous Dig Domain Layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod lookup;
pub mod presentation;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{Record, RecordType};
pub use errors::DomainError;
pub use lookup::{LookupError, LookupErrorKind, LookupRequest, LookupResult};
pub use presentation::{CommandResponse, PresentationBlock, ResponseType, TextElement};
