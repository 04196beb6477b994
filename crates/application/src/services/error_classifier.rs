use crate::ports::{ResolverError, ENODATA, ENOTFOUND};
use ferrous_dig_domain::{LookupError, LookupErrorKind};

/// Maps resolver failures onto the closed [`LookupErrorKind`] taxonomy.
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn classify(error: &ResolverError) -> LookupError {
        let kind = match error.code.as_deref() {
            Some(ENODATA) => LookupErrorKind::NoData,
            Some(ENOTFOUND) => LookupErrorKind::NotFound,
            _ => LookupErrorKind::Other,
        };
        LookupError::new(kind, error.message.clone())
    }
}
