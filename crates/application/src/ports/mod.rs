pub mod presentation_formatter;
pub mod record_resolver;

pub use presentation_formatter::PresentationFormatter;
pub use record_resolver::{
    RawAddressRecord, RawMxRecord, RawTxtRecord, RecordResolver, ResolverError, ENODATA,
    ENOTFOUND, EREFUSED, ESERVFAIL, ETIMEOUT,
};
