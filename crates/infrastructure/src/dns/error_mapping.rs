use ferrous_dig_application::ports::{
    ResolverError, ENODATA, ENOTFOUND, EREFUSED, ESERVFAIL, ETIMEOUT,
};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;

/// Machine-readable code for a hickory failure.
///
/// hickory reports empty answers and server failures alike as `NoRecordsFound`;
/// only NOERROR means the name exists without data of the queried type.
pub fn error_code(kind: &ResolveErrorKind) -> Option<&'static str> {
    match kind {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => match *response_code {
            ResponseCode::NoError => Some(ENODATA),
            ResponseCode::NXDomain => Some(ENOTFOUND),
            ResponseCode::ServFail => Some(ESERVFAIL),
            ResponseCode::Refused => Some(EREFUSED),
            _ => None,
        },
        ResolveErrorKind::Timeout => Some(ETIMEOUT),
        _ => None,
    }
}

pub fn to_resolver_error(error: ResolveError) -> ResolverError {
    ResolverError::new(error_code(error.kind()), error.to_string())
}
