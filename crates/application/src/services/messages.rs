//! User-facing wording shared by the formatters.

use ferrous_dig_domain::{LookupError, LookupErrorKind, RecordType};

pub fn error_message(hostname: &str, record_type: RecordType, error: &LookupError) -> String {
    match error.kind {
        LookupErrorKind::NoData => {
            format!("No records of type {} found for {}.", record_type, hostname)
        }
        LookupErrorKind::NotFound => format!("Domain {} not found.", hostname),
        LookupErrorKind::Other => format!("ERROR: {}", error.message),
    }
}
